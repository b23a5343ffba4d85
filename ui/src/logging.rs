//! Structured logging setup.
//!
//! Native builds install a `tracing-subscriber` fmt layer:
//! - `RUST_LOG` environment filter support (default: `ui=info,api=info`)
//! - JSON output when `RUST_LOG_FORMAT=json`
//!
//! Web builds route `tracing` events to the browser console through the Dioxus
//! logger.

/// Initialize the global subscriber. Safe to call more than once.
pub fn init() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ui=info,api=info"));

        let is_json = std::env::var("RUST_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true);

        if is_json {
            let _ = subscriber.json().try_init();
        } else {
            let _ = subscriber.try_init();
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        let _ = dioxus::logger::init(dioxus::logger::tracing::Level::INFO);
    }
}

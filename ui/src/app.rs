use api::{HttpBackend, API_URL_ENV};
use dioxus::prelude::*;

use crate::components::{AppNavbar, ThemeSwitch};
use crate::core::{platform, AnalysisSession, HistoryStore, Tab, ViewState};
use crate::i18n;
use crate::t;
use crate::views::{AnalysisPage, HistoryPage};

/// Shared theme, inlined so packaged builds need no asset directory.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Composition root shared by every platform launcher.
#[component]
pub fn App() -> Element {
    i18n::init();

    // Language code shared with the navbar; the workspace is keyed on it so a
    // switch remounts every translated label.
    let lang_code = use_context_provider(|| Signal::new(i18n::current_language()));
    let view = use_context_provider(|| Signal::new(ViewState::new()));
    use_context_provider(|| Signal::new(AnalysisSession::new()));
    use_context_provider(|| Signal::new(HistoryStore::new()));
    use_effect(move || platform::apply_body_theme(view.read().theme()));

    let backend = use_hook(|| match HttpBackend::from_env() {
        Ok(backend) => {
            tracing::info!(base_url = backend.config().base_url(), "analysis service configured");
            Ok(backend)
        }
        Err(err) => {
            tracing::error!(error = %err, "analysis service is not configured");
            Err(err.to_string())
        }
    });

    rsx! {
        document::Style { "{THEME_CSS}" }

        match backend {
            Ok(backend) => rsx! {
                div { key: "{lang_code()}", Workspace { backend } }
            },
            Err(detail) => rsx! { ConfigNotice { detail } },
        }
    }
}

/// Hands the backend to the pages and lays out the active tab. View, session
/// and history state live one level up so a language remount keeps them.
#[component]
fn Workspace(backend: HttpBackend) -> Element {
    use_context_provider(|| backend.clone());
    let view = use_context::<Signal<ViewState>>();

    let theme_class = view.read().theme().css_class();
    let active_tab = view.read().active_tab();

    rsx! {
        div { class: "app-container {theme_class}",
            AppNavbar {}

            main { class: "main-content",
                match active_tab {
                    Tab::Analysis => rsx! { AnalysisPage {} },
                    Tab::History => rsx! { HistoryPage {} },
                }

                ThemeSwitch {}
            }
        }
    }
}

#[component]
fn ConfigNotice(detail: String) -> Element {
    rsx! {
        div { class: "app-container light",
            section { class: "page config-notice",
                h1 { {t!("config-error-title")} }
                p { {t!("config-error-detail", var = API_URL_ENV)} }
                p { class: "config-notice__detail", "{detail}" }
            }
        }
    }
}

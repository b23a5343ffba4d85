//! Localized UI strings.
//!
//! Bundles live in `i18n/<lang>/textlens-ui.ftl` and are embedded at compile
//! time; `en-US` is the fallback every other locale is checked against
//! (`tests/i18n_missing_keys.rs`). Components look strings up with [`t!`].

use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("history-count", count = n)` looks the key up in the shared loader.
/// Keys and arguments are checked against the fallback bundle at compile time.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

// Must match the FTL file stem and `i18n.toml`.
const DOMAIN: &str = "textlens-ui";

pub const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = DEFAULT_LANGUAGE.parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("`{0}` is not a language tag")]
    InvalidTag(String),
    #[error("no bundle for `{0}`")]
    Unavailable(String),
    #[error(transparent)]
    Load(#[from] i18n_embed::I18nEmbedError),
}

static INIT: Once = Once::new();

/// Load the bundles matching the OS / browser language list. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(error = %err, "language selection failed; using {DEFAULT_LANGUAGE}");
        }
    });
}

/// Switch the UI language and return the tag actually loaded. `"es"` resolves
/// to `es-ES` when that is the only Spanish bundle.
pub fn set_language(tag: &str) -> Result<String, LanguageError> {
    let requested: LanguageIdentifier = tag
        .parse()
        .map_err(|_| LanguageError::InvalidTag(tag.to_string()))?;
    let resolved = negotiate(&requested, &available_languages())
        .ok_or_else(|| LanguageError::Unavailable(tag.to_string()))?;
    i18n_embed::select(&*LOADER, &Localizations, &[resolved.clone()])?;
    tracing::info!(language = %resolved, "UI language switched");
    Ok(resolved.to_string())
}

pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded locale folder names, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs: Vec<String> = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_owned))
        .collect();
    langs.sort();
    langs.dedup();
    langs
}

/// Exact match first, then the first bundle sharing the primary language.
fn negotiate(requested: &LanguageIdentifier, available: &[String]) -> Option<LanguageIdentifier> {
    let candidates: Vec<LanguageIdentifier> =
        available.iter().filter_map(|tag| tag.parse().ok()).collect();
    candidates
        .iter()
        .find(|candidate| *candidate == requested)
        .or_else(|| {
            candidates
                .iter()
                .find(|candidate| candidate.language == requested.language)
        })
        .cloned()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

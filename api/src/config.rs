//! Endpoint configuration for the analysis service.
//!
//! The base URL is never hardcoded. Native builds read `TEXTLENS_API_URL` at
//! runtime; web builds cannot see the process environment, so the same variable
//! is also captured at compile time.

use std::env;

use reqwest::Url;

use crate::error::{ApiError, ApiResult};

pub const API_URL_ENV: &str = "TEXTLENS_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Resolve the configuration from the runtime environment first, then the
    /// value baked in at build time.
    pub fn from_env() -> ApiResult<Self> {
        let runtime = env::var(API_URL_ENV).ok();
        let baked = option_env!("TEXTLENS_API_URL").map(str::to_owned);
        Self::resolve(runtime, baked)
    }

    fn resolve(runtime: Option<String>, baked: Option<String>) -> ApiResult<Self> {
        runtime
            .into_iter()
            .chain(baked)
            .map(|raw| raw.trim().to_owned())
            .find(|raw| !raw.is_empty())
            .ok_or(ApiError::MissingBaseUrl(API_URL_ENV))
            .and_then(|raw| Self::new(&raw))
    }

    pub fn new(base_url: &str) -> ApiResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|err| ApiError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: err.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        Ok(Self {
            base_url: trimmed.to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `path` must start with `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let config = ApiConfig::new("http://localhost:5000/api/").unwrap();
        assert_eq!(config.base_url(), "http://localhost:5000/api");
        assert_eq!(
            config.endpoint("/history"),
            "http://localhost:5000/api/history"
        );
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = ApiConfig::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn rejects_garbage() {
        assert!(ApiConfig::new("not a url").is_err());
    }

    #[test]
    fn runtime_value_wins_over_baked() {
        let config = ApiConfig::resolve(
            Some("https://runtime.example/api".into()),
            Some("https://baked.example/api".into()),
        )
        .unwrap();
        assert_eq!(config.base_url(), "https://runtime.example/api");
    }

    #[test]
    fn blank_runtime_value_falls_through() {
        let config =
            ApiConfig::resolve(Some("   ".into()), Some("https://baked.example".into())).unwrap();
        assert_eq!(config.base_url(), "https://baked.example");
    }

    #[test]
    fn missing_everywhere_is_an_error() {
        let err = ApiConfig::resolve(None, None).unwrap_err();
        assert!(matches!(err, ApiError::MissingBaseUrl(API_URL_ENV)));
    }
}

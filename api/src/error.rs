use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("analysis service url is not configured; set `{0}`")]
    MissingBaseUrl(&'static str),

    #[error("invalid analysis service url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{method} {path} returned {status}{message_suffix}")]
    Status {
        method: &'static str,
        path: &'static str,
        status: u16,
        message_suffix: String,
    },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds a status error, folding the server's `{"error": ...}` body (if any)
    /// into the message.
    #[must_use]
    pub fn from_status(method: &'static str, path: &'static str, status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("error")
                    .or_else(|| value.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| body.trim().to_owned());

        let message_suffix = if message.is_empty() {
            String::new()
        } else {
            format!(": {message}")
        };

        Self::Status {
            method,
            path,
            status,
            message_suffix,
        }
    }

    /// HTTP status if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

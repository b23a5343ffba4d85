use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::types::{AnalysisRecord, AnalysisRequest, AnalysisResult};

const ANALYZE_PATH: &str = "/analyze";
const HISTORY_PATH: &str = "/history";

/// The three remote operations the client relies on.
///
/// The UI drives these from a single-threaded executor, so the futures are not
/// required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait AnalysisBackend {
    async fn analyze(&self, text: &str) -> ApiResult<AnalysisResult>;
    async fn fetch_history(&self) -> ApiResult<Vec<AnalysisRecord>>;
    async fn clear_history(&self) -> ApiResult<()>;
}

/// `reqwest`-backed implementation talking JSON to the configured service.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: ApiConfig,
    client: Client,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self { config, client })
    }

    pub fn from_env() -> ApiResult<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Two backends pointed at the same service are interchangeable.
impl PartialEq for HttpBackend {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl AnalysisBackend for HttpBackend {
    async fn analyze(&self, text: &str) -> ApiResult<AnalysisResult> {
        tracing::debug!(chars = text.chars().count(), "submitting text for analysis");
        let response = self
            .client
            .post(self.config.endpoint(ANALYZE_PATH))
            .json(&AnalysisRequest { text })
            .send()
            .await?;
        let response = ensure_success("POST", ANALYZE_PATH, response).await?;
        decode(response).await
    }

    async fn fetch_history(&self) -> ApiResult<Vec<AnalysisRecord>> {
        let response = self
            .client
            .get(self.config.endpoint(HISTORY_PATH))
            .send()
            .await?;
        let response = ensure_success("GET", HISTORY_PATH, response).await?;
        let records: Vec<AnalysisRecord> = decode(response).await?;
        tracing::debug!(count = records.len(), "fetched history");
        Ok(records)
    }

    async fn clear_history(&self) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.config.endpoint(HISTORY_PATH))
            .send()
            .await?;
        ensure_success("DELETE", HISTORY_PATH, response).await?;
        Ok(())
    }
}

async fn ensure_success(
    method: &'static str,
    path: &'static str,
    response: Response,
) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    // The body is only used to enrich the error message.
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(method, path, status.as_u16(), &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
}

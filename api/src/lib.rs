//! Client side of the TextLens analysis service: wire types, endpoint
//! configuration and the HTTP backend used by the shared UI crate.

pub mod backend;
pub mod config;
pub mod error;
pub mod types;

pub use backend::{AnalysisBackend, HttpBackend};
pub use config::{ApiConfig, API_URL_ENV};
pub use error::{ApiError, ApiResult};
pub use types::{AnalysisRecord, AnalysisRequest, AnalysisResult, GibberishScore, RecordTimestamp};

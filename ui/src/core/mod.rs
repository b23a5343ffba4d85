//! Platform-agnostic analysis engine: score parsing, request lifecycle,
//! history state and chart derivation. Nothing in here touches Dioxus.

pub mod error;
pub mod format;
pub mod history;
pub mod platform;
pub mod score;
pub mod series;
pub mod session;
pub mod view;

pub use error::{ClientError, ClientResult};
pub use history::{ExportSnapshot, HistoryRow, HistoryStore, RefreshOutcome};
pub use series::{build_series, ChartSeries};
pub use session::{AnalysisSession, SessionPhase};
pub use view::{Tab, TabChange, Theme, ViewState};

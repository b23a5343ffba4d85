//! Panels for the current result and the analysis history.

mod list;
pub use list::HistoryTable;

mod detail;
pub use detail::AnalysisResultPanel;

mod charts;
pub use charts::HistoryCharts;

mod export;
pub use export::HistoryActionsPanel;

mod utils;
pub(crate) use utils::*;

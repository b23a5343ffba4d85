mod analysis;
pub use analysis::AnalysisPage;

mod history;
pub use history::HistoryPage;

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Failures surfaced by the analysis workflow. None of them are fatal; every
/// component returns to its previous stable state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("Please enter some text to analyze")]
    EmptyInput,

    #[error("Error analyzing text. Please try again.")]
    AnalysisRequest { detail: String },

    #[error("failed to fetch history: {0}")]
    HistoryFetch(String),

    #[error("failed to delete history: {0}")]
    HistoryClear(String),

    #[error("export failed: {0}")]
    Export(String),
}

impl ClientError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Underlying cause for logs; the `Display` text is what users see.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::EmptyInput => None,
            Self::AnalysisRequest { detail } => Some(detail),
            Self::HistoryFetch(detail) | Self::HistoryClear(detail) | Self::Export(detail) => {
                Some(detail)
            }
        }
    }
}

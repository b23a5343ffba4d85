//! Request lifecycle for a single text submission.
//!
//! The UI drives the split form (`begin` → await the backend → `finish`) so the
//! session signal is never borrowed across the await point. `analyze` bundles
//! the three steps for callers that own the session outright.

use api::{AnalysisBackend, AnalysisResult, ApiResult};

use super::error::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Identifies one submission. Only the most recently issued ticket may settle
/// the session; older responses are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AnalysisTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisSession {
    phase: SessionPhase,
    result: Option<AnalysisResult>,
    error: Option<ClientError>,
    show_results: bool,
    issued: u64,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SessionPhase::Submitting
    }

    /// Latest successful result, kept across later failures.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ClientError> {
        self.error.as_ref()
    }

    pub fn show_results(&self) -> bool {
        self.show_results
    }

    /// Result to render, if the results panel is open.
    pub fn visible_result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref().filter(|_| self.show_results)
    }

    /// Validate `text` and move to `Submitting`. The returned ticket must be
    /// handed back to [`finish`](Self::finish) together with the response.
    pub fn begin(&mut self, text: &str) -> ClientResult<AnalysisTicket> {
        if text.trim().is_empty() {
            // An in-flight request still owns the phase.
            if self.phase != SessionPhase::Submitting {
                self.phase = SessionPhase::Idle;
            }
            self.error = Some(ClientError::EmptyInput);
            return Err(ClientError::EmptyInput);
        }

        self.issued += 1;
        self.phase = SessionPhase::Submitting;
        self.error = None;
        Ok(AnalysisTicket(self.issued))
    }

    /// Settle the submission identified by `ticket`. Returns `None` when a newer
    /// submission has been issued in the meantime and this response is stale.
    pub fn finish(
        &mut self,
        ticket: AnalysisTicket,
        outcome: ApiResult<AnalysisResult>,
    ) -> Option<ClientResult<AnalysisResult>> {
        if ticket.0 != self.issued {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.issued,
                "dropping superseded analysis response"
            );
            return None;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(toxicity = result.toxicity, "analysis succeeded");
                self.phase = SessionPhase::Succeeded;
                self.result = Some(result.clone());
                self.show_results = true;
                Some(Ok(result))
            }
            Err(err) => {
                tracing::warn!(error = %err, "analysis request failed");
                let failure = ClientError::AnalysisRequest {
                    detail: err.to_string(),
                };
                self.phase = SessionPhase::Failed;
                self.error = Some(failure.clone());
                Some(Err(failure))
            }
        }
    }

    /// One full request/response cycle against `backend`.
    pub async fn analyze<B: AnalysisBackend>(
        &mut self,
        backend: &B,
        text: &str,
    ) -> ClientResult<AnalysisResult> {
        let ticket = self.begin(text)?;
        let outcome = backend.analyze(text).await;
        // A ticket issued on `&mut self` cannot be superseded before `finish`.
        self.finish(ticket, outcome).unwrap_or_else(|| {
            Err(ClientError::AnalysisRequest {
                detail: "superseded by a newer submission".into(),
            })
        })
    }
}

//! Client-side view of the remote analysis history.
//!
//! The list is only ever replaced wholesale (refresh) or emptied (clear); single
//! records are never edited. Order is whatever the service returns, newest
//! first.

use api::{AnalysisBackend, AnalysisRecord, ApiResult};

use super::error::{ClientError, ClientResult};
use super::format::{format_score, format_timestamp, truncate_chars, TEXT_PREVIEW_CHARS};
use super::score::parse_gibberish;

pub const EXPORT_JSON_FILENAME: &str = "analysis_history.json";
pub const EXPORT_CSV_FILENAME: &str = "analysis_history.csv";

/// A ready-to-deliver export document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSnapshot {
    pub filename: &'static str,
    pub mime: &'static str,
    pub contents: String,
}

/// One row of the history table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub text: String,
    pub truncated: bool,
    pub toxicity: String,
    pub gibberish: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The fetched list replaced local state.
    Applied(usize),
    /// A newer refresh, or a clear that finished later, made this response
    /// obsolete.
    Discarded,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryStore {
    records: Vec<AnalysisRecord>,
    issued: u64,
    latest_refresh: Option<u64>,
    refresh_in_flight: bool,
    clears_in_flight: u32,
    last_clear: Option<u64>,
    stale: bool,
    clear_error: Option<ClientError>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Set after a failed refresh until the next successful one.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn is_loading(&self) -> bool {
        self.refresh_in_flight
    }

    pub fn is_clearing(&self) -> bool {
        self.clears_in_flight > 0
    }

    /// Whether the delete control accepts a click. The local list says nothing
    /// about the remote one (it is empty before the first successful refresh),
    /// so only a clear already in flight blocks another.
    pub fn can_clear(&self) -> bool {
        !self.is_clearing()
    }

    /// Failure of the most recent clear, until the next one succeeds.
    pub fn clear_error(&self) -> Option<&ClientError> {
        self.clear_error.as_ref()
    }

    fn next_ticket(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        let ticket = self.next_ticket();
        self.latest_refresh = Some(ticket);
        self.refresh_in_flight = true;
        RefreshTicket(ticket)
    }

    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        outcome: ApiResult<Vec<AnalysisRecord>>,
    ) -> ClientResult<RefreshOutcome> {
        if self.latest_refresh != Some(ticket.0) {
            tracing::debug!(ticket = ticket.0, "dropping superseded history response");
            return Ok(RefreshOutcome::Discarded);
        }
        self.refresh_in_flight = false;

        if self.last_clear.is_some_and(|cleared| cleared > ticket.0) {
            tracing::debug!(ticket = ticket.0, "dropping history fetched before a clear");
            return Ok(RefreshOutcome::Discarded);
        }

        match outcome {
            Ok(records) => {
                let count = records.len();
                self.records = records;
                self.stale = false;
                tracing::info!(count, "history refreshed");
                Ok(RefreshOutcome::Applied(count))
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    status = ?err.status(),
                    kept = self.records.len(),
                    "history refresh failed; keeping previous list"
                );
                self.stale = true;
                Err(ClientError::HistoryFetch(err.to_string()))
            }
        }
    }

    pub async fn refresh<B: AnalysisBackend>(
        &mut self,
        backend: &B,
    ) -> ClientResult<RefreshOutcome> {
        let ticket = self.begin_refresh();
        let outcome = backend.fetch_history().await;
        self.finish_refresh(ticket, outcome)
    }

    pub fn begin_clear(&mut self) -> ClearTicket {
        self.clears_in_flight += 1;
        ClearTicket(self.next_ticket())
    }

    pub fn finish_clear(&mut self, ticket: ClearTicket, outcome: ApiResult<()>) -> ClientResult<()> {
        self.clears_in_flight = self.clears_in_flight.saturating_sub(1);
        match outcome {
            Ok(()) => {
                tracing::info!(removed = self.records.len(), "history cleared");
                self.records.clear();
                self.stale = false;
                self.clear_error = None;
                self.last_clear = Some(self.last_clear.map_or(ticket.0, |prev| prev.max(ticket.0)));
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, status = ?err.status(), "history clear failed; local list kept");
                let failure = ClientError::HistoryClear(err.to_string());
                self.clear_error = Some(failure.clone());
                Err(failure)
            }
        }
    }

    pub async fn clear<B: AnalysisBackend>(&mut self, backend: &B) -> ClientResult<()> {
        let ticket = self.begin_clear();
        let outcome = backend.clear_history().await;
        self.finish_clear(ticket, outcome)
    }

    /// Pretty JSON of the in-memory list (not a fresh fetch).
    pub fn export_snapshot(&self) -> ClientResult<ExportSnapshot> {
        let contents = serde_json::to_string_pretty(&self.records)
            .map_err(|err| ClientError::Export(err.to_string()))?;
        Ok(ExportSnapshot {
            filename: EXPORT_JSON_FILENAME,
            mime: "application/json",
            contents,
        })
    }

    pub fn export_csv(&self) -> ExportSnapshot {
        let mut csv = String::from("text,toxicity,gibberish,gibberish_score,timestamp\n");
        for record in &self.records {
            let score = parse_gibberish(&record.gibberish)
                .map(|value| value.to_string())
                .unwrap_or_default();
            let timestamp = record.timestamp.raw_text();
            let fields = [
                record.text.clone(),
                record.toxicity.to_string(),
                record.gibberish.display_text(),
                score,
                timestamp,
            ];
            let line = fields
                .iter()
                .map(|field| escape_csv(field))
                .collect::<Vec<_>>()
                .join(",");
            csv.push_str(&line);
            csv.push('\n');
        }

        ExportSnapshot {
            filename: EXPORT_CSV_FILENAME,
            mime: "text/csv",
            contents: csv,
        }
    }

    pub fn rows(&self) -> Vec<HistoryRow> {
        self.records
            .iter()
            .map(|record| {
                let preview = truncate_chars(&record.text, TEXT_PREVIEW_CHARS);
                HistoryRow {
                    text: preview.to_string(),
                    truncated: preview.len() < record.text.len(),
                    toxicity: format_score(record.toxicity),
                    gibberish: record.gibberish.display_text(),
                    timestamp: format_timestamp(&record.timestamp),
                }
            })
            .collect()
    }
}

fn escape_csv(value: &str) -> String {
    let needs_quotes = value.contains([',', '"', '\n', '\r']);
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

//! Glue between UI events and the engine. Each action mutates its signal
//! through the engine's begin/finish pair and awaits the network in a spawned
//! task, so no signal borrow is held across a suspension point.

use api::{AnalysisBackend, HttpBackend};
use dioxus::prelude::*;

use crate::core::{AnalysisSession, HistoryStore, Tab, Theme, ViewState};

/// Switch tabs; entering History fetches the list once.
pub fn select_tab(
    mut view: Signal<ViewState>,
    history: Signal<HistoryStore>,
    backend: HttpBackend,
    tab: Tab,
) {
    let change = view.write().select_tab(tab);
    if change.refresh_history {
        refresh_history(history, backend);
    }
}

pub fn toggle_theme(mut view: Signal<ViewState>) -> Theme {
    view.write().toggle_theme()
}

pub fn refresh_history(mut history: Signal<HistoryStore>, backend: HttpBackend) {
    let ticket = history.write().begin_refresh();
    spawn(async move {
        let outcome = backend.fetch_history().await;
        // Failures are logged and flagged as stale inside the store.
        let _ = history.write().finish_refresh(ticket, outcome);
    });
}

pub fn clear_history(mut history: Signal<HistoryStore>, backend: HttpBackend) {
    let ticket = history.write().begin_clear();
    spawn(async move {
        let outcome = backend.clear_history().await;
        let _ = history.write().finish_clear(ticket, outcome);
    });
}

/// Validation failures settle synchronously; valid text goes out as typed,
/// untrimmed.
pub fn submit_analysis(mut session: Signal<AnalysisSession>, backend: HttpBackend, text: String) {
    let Ok(ticket) = session.write().begin(&text) else {
        return;
    };
    spawn(async move {
        let outcome = backend.analyze(&text).await;
        let _ = session.write().finish(ticket, outcome);
    });
}

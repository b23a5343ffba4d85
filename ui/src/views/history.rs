use dioxus::prelude::*;

use crate::core::{build_series, HistoryStore};
use crate::results::{HistoryActionsPanel, HistoryCharts, HistoryTable};
use crate::t;

#[component]
pub fn HistoryPage() -> Element {
    let history = use_context::<Signal<HistoryStore>>();
    let store = history.read();

    let rows = store.rows();
    let series = build_series(store.records());
    let stale = store.is_stale();
    let loading = store.is_loading();
    let clear_failure = store
        .clear_error()
        .map(|err| err.detail().unwrap_or_default().to_string());
    drop(store);

    rsx! {
        section { class: "page history-section",
            div { class: "history__header",
                h2 { {t!("history-title")} }
                if loading {
                    span { class: "results-card__meta", {t!("history-loading")} }
                }
            }

            if stale {
                p { class: "history__notice", {t!("history-stale")} }
            }
            if let Some(detail) = clear_failure {
                p { class: "history__notice history__notice--error", role: "alert",
                    {t!("history-clear-failed")}
                    if !detail.is_empty() {
                        span { class: "history__notice-detail", "{detail}" }
                    }
                }
            }

            HistoryActionsPanel {}
            HistoryTable { rows }
            HistoryCharts { series }
        }
    }
}

use api::HttpBackend;
use dioxus::prelude::*;

use crate::core::platform::{self, Delivery};
use crate::core::{ClientError, ExportSnapshot, HistoryStore};
use crate::t;
use crate::workflow;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working,
    Done(Delivery),
    Error(String),
}

/// Export (JSON / CSV) and delete controls for the history tab.
///
/// Exports serialize the list currently held in memory; they never refetch.
#[component]
pub fn HistoryActionsPanel() -> Element {
    let history = use_context::<Signal<HistoryStore>>();
    let backend = use_context::<HttpBackend>();

    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let can_clear = history.read().can_clear();

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working => Some(("results-card__meta".to_string(), t!("export-working"))),
        ExportStatus::Done(Delivery::Saved(path)) => Some((
            "results-card__meta results-card__meta--success".to_string(),
            t!("export-saved", path = path.clone()),
        )),
        ExportStatus::Done(Delivery::BrowserDownload) => Some((
            "results-card__meta results-card__meta--success".to_string(),
            t!("export-started"),
        )),
        ExportStatus::Error(err) => Some((
            "results-card__meta results-card__meta--error".to_string(),
            t!("export-failed", error = err.clone()),
        )),
    };

    let json_handler = move |_| {
        let snapshot = history.read().export_snapshot();
        run_export(snapshot, status, busy);
    };

    let csv_handler = move |_| {
        let snapshot = history.read().export_csv();
        run_export(Ok(snapshot), status, busy);
    };

    let delete_handler = move |_| workflow::clear_history(history, backend.clone());

    rsx! {
        section { class: "results-card results-export",
            div { class: "results-card__header",
                h3 { {t!("history-actions-heading")} }
            }

            div { class: "results-export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: json_handler,
                    {t!("history-export")}
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy(),
                    onclick: csv_handler,
                    {t!("history-export-csv")}
                }
                button {
                    r#type: "button",
                    class: "button button--danger",
                    disabled: !can_clear,
                    onclick: delete_handler,
                    {t!("history-delete")}
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn run_export(
    snapshot: Result<ExportSnapshot, ClientError>,
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
) {
    if busy() {
        return;
    }
    let snapshot = match snapshot {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::error!(error = %err, "export serialization failed");
            status.set(ExportStatus::Error(err.to_string()));
            return;
        }
    };

    busy.set(true);
    status.set(ExportStatus::Working);
    spawn(async move {
        let outcome = platform::download_bytes(
            snapshot.filename,
            snapshot.mime,
            snapshot.contents.into_bytes(),
        )
        .await;
        match outcome {
            Ok(delivery) => status.set(ExportStatus::Done(delivery)),
            Err(err) => {
                let failure = ClientError::Export(err);
                tracing::error!(error = %failure, "export delivery failed");
                status.set(ExportStatus::Error(failure.to_string()));
            }
        }
        busy.set(false);
    });
}

use crate::core::HistoryRow;
use crate::t;
use dioxus::prelude::*;

#[component]
pub fn HistoryTable(rows: Vec<HistoryRow>) -> Element {
    rsx! {
        section { class: "results-card history-table-card",
            div { class: "results-card__header",
                h3 { {t!("history-records-heading")} }
                if !rows.is_empty() {
                    span { class: "results-card__meta", {t!("history-count", count = rows.len())} }
                }
            }

            if rows.is_empty() {
                p { class: "results-card__placeholder", {t!("history-empty")} }
            } else {
                table { class: "history-table",
                    thead {
                        tr {
                            th { {t!("history-col-text")} }
                            th { {t!("history-col-toxicity")} }
                            th { {t!("history-col-gibberish")} }
                            th { {t!("history-col-time")} }
                        }
                    }
                    tbody {
                        for (index, row) in rows.into_iter().enumerate() {
                            {render_row(index, row)}
                        }
                    }
                }
            }
        }
    }
}

fn render_row(index: usize, row: HistoryRow) -> Element {
    let HistoryRow {
        text,
        truncated,
        toxicity,
        gibberish,
        timestamp,
    } = row;

    rsx! {
        tr { key: "{index}",
            td { class: "history-table__text",
                "{text}"
                if truncated {
                    span { class: "history-table__ellipsis", "…" }
                }
            }
            td { class: "history-table__score", "{toxicity}" }
            td { class: "history-table__score", "{gibberish}" }
            td { class: "history-table__time", "{timestamp}" }
        }
    }
}

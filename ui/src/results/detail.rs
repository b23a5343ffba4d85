use api::AnalysisResult;
use dioxus::prelude::*;

use crate::core::{format, score};
use crate::t;

#[component]
pub fn AnalysisResultPanel(result: AnalysisResult) -> Element {
    let toxicity = format::format_score(result.toxicity);
    let gibberish_raw = result.gibberish.display_text();
    let gibberish_value = score::parse_gibberish(&result.gibberish)
        .map(|value| format::format_number(value, 3));
    let gibberish_label = score::gibberish_label(&result.gibberish).map(str::to_owned);

    rsx! {
        div { class: "results",
            div { class: "result-item",
                span { {t!("analysis-result-toxicity")} }
                " "
                strong { class: "result-item__value", "{toxicity}" }
            }
            div { class: "result-item",
                span { {t!("analysis-result-gibberish")} }
                " "
                strong { class: "result-item__value", "{gibberish_raw}" }
                if let Some(label) = gibberish_label {
                    span { class: "result-item__badge", "{label}" }
                }
                match gibberish_value {
                    Some(value) => rsx! {
                        span { class: "result-item__meta", {t!("analysis-result-parsed", value = value)} }
                    },
                    None => rsx! {
                        span { class: "result-item__meta result-item__meta--warn", {t!("analysis-result-unparsed")} }
                    },
                }
            }
        }
    }
}

use api::HttpBackend;
use dioxus::prelude::*;

use crate::core::AnalysisSession;
use crate::results::AnalysisResultPanel;
use crate::t;
use crate::workflow;

#[component]
pub fn AnalysisPage() -> Element {
    let session = use_context::<Signal<AnalysisSession>>();
    let backend = use_context::<HttpBackend>();
    let mut text = use_signal(String::new);

    let submitting = session.read().is_submitting();
    let error_message = session.read().error().map(|err| {
        if err.is_validation() {
            t!("analysis-error-empty")
        } else {
            t!("analysis-error-request")
        }
    });
    let result = session.read().visible_result().cloned();

    let submit_label = if submitting {
        t!("analysis-submitting")
    } else {
        t!("analysis-submit")
    };

    rsx! {
        section { class: "page analysis-section",
            textarea {
                class: "text-input",
                value: "{text}",
                placeholder: t!("analysis-placeholder"),
                oninput: move |evt| text.set(evt.value()),
            }

            div { class: "controls",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: submitting,
                    onclick: move |_| workflow::submit_analysis(session, backend.clone(), text()),
                    "{submit_label}"
                }
                if let Some(message) = error_message {
                    span { class: "error", role: "alert", "{message}" }
                }
            }

            if let Some(result) = result {
                AnalysisResultPanel { result }
            }
        }
    }
}

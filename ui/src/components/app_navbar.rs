use crate::core::{HistoryStore, Tab, ViewState};
use crate::i18n;
use crate::t;
use crate::workflow;
use api::HttpBackend;
use dioxus::prelude::*;

/// Top bar: brand, the Analysis/History tabs and the language picker.
///
/// Tab buttons go through [`workflow::select_tab`], so entering History fetches
/// the list exactly once per switch; re-renders never refetch.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let view = use_context::<Signal<ViewState>>();
    let history = use_context::<Signal<HistoryStore>>();
    let backend = use_context::<HttpBackend>();

    let mut current_lang = use_context::<Signal<String>>();
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(resolved) => current_lang.set(resolved),
            Err(err) => tracing::warn!(error = %err, lang = %val, "language switch failed"),
        }
    };

    let active_tab = view.read().active_tab();
    let tabs = [
        (Tab::Analysis, t!("nav-analysis")),
        (Tab::History, t!("nav-history")),
    ];

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    h1 { class: "navbar__title", {t!("app-title")} }
                }

                nav { class: "navbar__tabs",
                    for (tab, label) in tabs {
                        button {
                            key: "{label}",
                            r#type: "button",
                            class: if tab == active_tab { "tab tab-active" } else { "tab" },
                            onclick: {
                                let backend = backend.clone();
                                move |_| workflow::select_tab(view, history, backend.clone(), tab)
                            },
                            "{label}"
                        }
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}

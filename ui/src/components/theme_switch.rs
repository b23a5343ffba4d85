use dioxus::prelude::*;

use crate::core::ViewState;
use crate::t;
use crate::workflow;

/// Light/dark toggle pinned to the bottom-right corner.
#[component]
pub fn ThemeSwitch() -> Element {
    let view = use_context::<Signal<ViewState>>();
    let theme = view.read().theme();
    let theme_class = theme.css_class();

    rsx! {
        div { class: "theme-corner {theme_class}",
            label { class: "theme-switch",
                span { class: "visually-hidden", {t!("theme-toggle-label")} }
                input {
                    r#type: "checkbox",
                    checked: theme.is_dark(),
                    onchange: move |_| {
                        let theme = workflow::toggle_theme(view);
                        tracing::debug!(theme = theme.css_class(), "theme toggled");
                    },
                }
                span { class: "slider" }
            }
        }
    }
}

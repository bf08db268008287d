use dioxus::prelude::*;

use crate::domain::SelectionState;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(source_label: String, children: Element) -> Element {
    let selection = use_context::<Signal<SelectionState>>();
    let region = selection.with(|st| st.region());

    rsx! {
        div { class: "{theme::page_background()}",
            header {
                class: "{theme::header_class(region)}",
                div { class: "mx-auto flex max-w-6xl items-center gap-3",
                    span { class: "text-2xl", "{theme::icon(region)}" }
                    h1 { class: "{theme::title_class(region)}", "{APP_NAME}" }
                }
            }
            main { class: "mx-auto max-w-6xl px-8 py-16",
                {children}
            }
            footer { class: "mx-auto max-w-6xl px-8 pb-6 text-xs {theme::text_muted()}",
                "{version_label()} · Tarifas: {source_label}"
            }
        }
    }
}

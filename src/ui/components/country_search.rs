use dioxus::prelude::*;

use crate::domain::Region;
use crate::ui::theme;

const DATALIST_ID: &str = "countries";

/// Free-text country box with suggestions from the filtered country list.
#[component]
pub fn CountrySearch(value: String, suggestions: Vec<String>, oninput: EventHandler<String>) -> Element {
    rsx! {
        div { class: "relative mb-2 w-full",
            span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-slate-400", "🔍" }
            input {
                r#type: "text",
                class: "{theme::input_class(Region::International)} pl-10",
                placeholder: "Buscar país...",
                value: "{value}",
                list: DATALIST_ID,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            datalist { id: DATALIST_ID,
                for name in suggestions {
                    option { key: "{name}", value: "{name}" }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::domain::{Quote, Region};
use crate::ui::theme;

#[component]
pub fn QuoteCard(quote: Quote, region: Region, description: Option<String>) -> Element {
    rsx! {
        div { class: "{theme::quote_panel(region)}",
            p { class: "text-2xl font-semibold", "Precio del envío: {quote}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs opacity-80", "{desc}" }
            }
        }
    }
}

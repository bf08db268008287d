use dioxus::prelude::*;

use crate::domain::{Choice, Region};
use crate::ui::theme;

#[derive(Clone, Debug, PartialEq)]
pub struct PickerOption {
    pub key: String,
    pub value: String,
    pub label: String,
}

impl PickerOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            key: value.clone(),
            value,
            label: label.into(),
        }
    }

    /// Options for every set variant of a choice enum.
    pub fn from_choices<C: Choice>() -> Vec<Self> {
        C::CHOICES
            .iter()
            .filter_map(|choice| {
                choice
                    .wire_key()
                    .map(|key| PickerOption::new(key, choice.label()))
            })
            .collect()
    }
}

/// Labelled `<select>`. An empty `placeholder` value stands for "nothing
/// chosen" and is emitted as an empty string.
#[component]
pub fn Picker(
    title: String,
    icon: &'static str,
    region: Region,
    value: String,
    options: Vec<PickerOption>,
    placeholder: Option<String>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "{theme::panel_border(region)} flex flex-col items-center p-4",
            span { class: "mb-2 text-4xl", "{icon}" }
            label { class: "{theme::label_class()}", "{title}" }
            select {
                class: "{theme::input_class(region)}",
                value: "{value}",
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
                if let Some(placeholder) = placeholder {
                    option { value: "", selected: value.is_empty(), "{placeholder}" }
                }
                for entry in options {
                    option {
                        key: "{entry.key}",
                        value: "{entry.value}",
                        selected: entry.value == value,
                        "{entry.label}"
                    }
                }
            }
        }
    }
}

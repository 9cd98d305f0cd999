//! Single-choice chip rows used by the filter groups.

use dioxus::prelude::*;

/// One selectable chip within a group.
#[derive(Clone, Debug, PartialEq)]
pub struct ChipOption {
    /// Raw token reported on selection
    pub value: String,
    /// Text shown on the chip
    pub label: String,
}

impl ChipOption {
    /// Creates a chip option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A single-choice chip group.
///
/// Exactly one chip is active at a time; selecting a chip reports its
/// value and the caller re-renders the row with the new active value, so
/// siblings deselect by construction and other groups are untouched.
#[component]
pub fn ChipRow(
    group_label: String,
    options: Vec<ChipOption>,
    active: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "chip-row",

            span { class: "chip-row-label", "{group_label}" }

            for option in options.iter() {
                {
                    let is_active = option.value == active;
                    let chip_class = if is_active { "filter-chip filter-chip-active" } else { "filter-chip" };
                    let value = option.value.clone();
                    rsx! {
                        button {
                            key: "{option.value}",
                            r#type: "button",
                            class: "{chip_class}",
                            onclick: move |_| on_select.call(value.clone()),
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}

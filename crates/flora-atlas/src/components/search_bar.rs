//! Search input wired to the filter engine.

use dioxus::prelude::*;

use crate::state::AppState;

/// Search box above the list.
///
/// Every input change forwards its raw value verbatim; the filter state
/// owns trimming and case-folding. No debouncing or minimum length.
#[component]
pub fn SearchBar(state: Signal<AppState>) -> Element {
    let mut state_write = state;

    rsx! {
        div {
            class: "search-bar",

            input {
                id: "plant-search",
                class: "search-input",
                r#type: "search",
                placeholder: "Search plants",
                oninput: move |evt| {
                    state_write.write().set_search_term(&evt.value());
                },
            }
        }
    }
}

//! Root application component for the flora atlas.

use dioxus::prelude::*;

use flora_ui::ThemedRoot;

use crate::state::AppState;

use super::{FilterBar, MapPanel, PlantList, SearchBar};

/// Root application component.
#[component]
pub fn App(state: Signal<AppState>) -> Element {
    rsx! {
        ThemedRoot {
            div {
                class: "flora-atlas",

                // Header with title, counts, and search
                Header { state }

                // Filter chip groups
                FilterBar { state }

                // Main content area - map on the left, list on the right
                main {
                    class: "main-content",

                    MapPanel { state }
                    PlantList { state }
                }
            }
        }
    }
}

/// Header component with title, catalog counts, and the search box.
#[component]
fn Header(state: Signal<AppState>) -> Element {
    let state_read = state.read();
    let shown = state_read.visible_count();
    let total = state_read.plants().len();
    let favorites = state_read.favorites_count();

    rsx! {
        header {
            class: "header",

            div {
                class: "header-left",
                h1 {
                    class: "header-title",
                    "Flora Atlas"
                }
                span {
                    class: "header-count",
                    "{shown} of {total} plants"
                }
            }

            div {
                class: "header-right",

                span {
                    class: "header-favorites",
                    title: "Favorited plants",
                    "♥ {favorites}"
                }

                SearchBar { state }
            }
        }
    }
}

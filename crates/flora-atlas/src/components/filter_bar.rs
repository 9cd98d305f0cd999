//! Filter chip groups for season, category, and favorites.

use dioxus::prelude::*;

use flora_core::{Category, FavoritesMode, Season};
use flora_ui::{ChipOption, ChipRow};

use crate::state::AppState;

/// The three single-choice filter chip groups.
///
/// Each group reports its raw chip token; the token is normalized into
/// the matching selector and exactly one filter field changes per click.
#[component]
pub fn FilterBar(state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let state_read = state.read();
    let filter = state_read.filter();

    let season_options = vec![
        ChipOption::new("all", "All"),
        ChipOption::new("spring", "Spring"),
        ChipOption::new("summer", "Summer"),
        ChipOption::new("fall", "Fall"),
        ChipOption::new("winter", "Winter"),
    ];

    let category_options = vec![
        ChipOption::new("all", "All"),
        ChipOption::new("trees", "Trees"),
        ChipOption::new("shrubs", "Shrubs"),
        ChipOption::new("vines", "Vines"),
        ChipOption::new("perennials", "Perennials"),
        ChipOption::new("ferns", "Ferns"),
        ChipOption::new("grasses", "Grasses"),
    ];

    let favorites_options = vec![
        ChipOption::new("all", "All"),
        ChipOption::new("fav", "My plants"),
    ];

    let active_season = filter.season().token().to_string();
    let active_category = filter.category().token().to_string();
    let active_favorites = filter.favorites_mode().token().to_string();

    rsx! {
        div {
            class: "filter-bar",

            ChipRow {
                group_label: "Seasons",
                options: season_options,
                active: active_season,
                on_select: move |value: String| {
                    state_write.write().select_season(Season::from_token(&value));
                },
            }

            ChipRow {
                group_label: "Category",
                options: category_options,
                active: active_category,
                on_select: move |value: String| {
                    state_write.write().select_category(Category::normalize_token(&value));
                },
            }

            ChipRow {
                group_label: "Favorites",
                options: favorites_options,
                active: active_favorites,
                on_select: move |value: String| {
                    state_write.write().select_favorites_mode(FavoritesMode::from_token(&value));
                },
            }
        }
    }
}

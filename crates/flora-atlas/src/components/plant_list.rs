//! Plant list panel with selectable, favoritable entries.

use dioxus::document;
use dioxus::prelude::*;

use flora_core::PlantRecord;

use crate::state::AppState;

/// List panel showing the plants passing the current filters, in catalog
/// order.
#[component]
pub fn PlantList(state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let state_read = state.read();
    let visible = state_read.visible_plants();

    rsx! {
        section {
            class: "list-panel",

            div {
                class: "panel-header",
                h2 {
                    class: "panel-title",
                    "Plants"
                }
                span {
                    class: "panel-count",
                    "{visible.len()} shown"
                }
            }

            ul {
                class: "plant-list",
                id: "plant-list",

                if visible.is_empty() {
                    li {
                        class: "plant-list-empty",
                        p { "No plants match the current filters." }
                    }
                } else {
                    for plant in visible.iter() {
                        PlantEntry {
                            key: "{plant.id}",
                            plant: (*plant).clone(),
                            is_active: state_read.list.is_active(&plant.id),
                            is_favorite: state_read.is_favorite(&plant.id),
                            on_select: move |id: String| {
                                state_write.write().select_entry(&id);
                            },
                            on_toggle: move |id: String| {
                                state_write.write().toggle_favorite(&id);
                            },
                        }
                    }
                }
            }
        }
    }
}

/// A single list entry.
#[component]
fn PlantEntry(
    plant: PlantRecord,
    is_active: bool,
    is_favorite: bool,
    on_select: EventHandler<String>,
    on_toggle: EventHandler<String>,
) -> Element {
    let entry_class = if is_active {
        "plant-item plant-item-active"
    } else {
        "plant-item"
    };
    let fav_class = if is_favorite {
        "plant-fav-btn plant-fav-btn-marked"
    } else {
        "plant-fav-btn"
    };
    let fav_glyph = if is_favorite { "♥" } else { "♡" };
    let fav_label = if is_favorite {
        "Remove from My plants"
    } else {
        "Add to My plants"
    };
    let image_alt = plant
        .image_alt
        .clone()
        .unwrap_or_else(|| plant.name_en.clone());
    let select_id = plant.id.clone();
    let toggle_id = plant.id.clone();

    rsx! {
        li {
            class: "{entry_class}",
            "data-plant-id": "{plant.id}",
            tabindex: "0",
            onclick: move |_| on_select.call(select_id.clone()),

            div {
                class: "plant-item-inner",

                if let Some(url) = plant.image_url.as_ref() {
                    img {
                        class: "plant-thumb",
                        src: "{url}",
                        alt: "{image_alt}",
                    }
                }

                div {
                    class: "plant-text",

                    div {
                        class: "plant-title-row",

                        h3 {
                            class: "plant-name",
                            span { class: "plant-name-en", "{plant.name_en}" }
                            if let Some(local) = plant.name_local.as_ref() {
                                span { class: "plant-name-local", "{local}" }
                            }
                        }

                        // The toggle must not select the entry
                        button {
                            r#type: "button",
                            class: "{fav_class}",
                            aria_label: "{fav_label}",
                            onclick: move |evt| {
                                evt.stop_propagation();
                                on_toggle.call(toggle_id.clone());
                            },
                            "{fav_glyph}"
                        }
                    }

                    p {
                        class: "plant-meta",
                        "{plant.caption()}"
                    }
                }
            }
        }
    }
}

/// Scrolls a list entry to its nearest visible position with smooth
/// motion. Entries that are not currently rendered are left alone.
pub(crate) fn scroll_entry_into_view(id: &str) {
    let escaped = id.replace('"', "\\\"");
    let _ = document::eval(&format!(
        "document.querySelector('.plant-item[data-plant-id=\"{escaped}\"]')\
         ?.scrollIntoView({{ block: 'nearest', behavior: 'smooth' }});"
    ));
}

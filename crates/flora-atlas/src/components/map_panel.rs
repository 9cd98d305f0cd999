//! Map panel with one marker per geolocated plant.

use dioxus::prelude::*;

use flora_core::Coordinate;

use crate::state::AppState;

use super::plant_list::scroll_entry_into_view;

/// Map panel projecting the marker registry around the current view
/// center. Markers hidden by the active filters stay in the registry;
/// only their rendering is suppressed.
#[component]
pub fn MapPanel(state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let state_read = state.read();
    let map = &state_read.map;
    let center = map.center();
    let zoom = map.zoom();
    let view_label = format!(
        "Centered on {:.4}, {:.4} · zoom {:.0}",
        center.lat, center.lng, zoom
    );

    rsx! {
        section {
            class: "map-panel",

            div {
                class: "map-surface",
                id: "map",

                if !map.is_loaded() {
                    div {
                        class: "map-loading",
                        "Loading catalog…"
                    }
                }

                for (id, marker) in map.markers().filter(|(_, marker)| marker.visible) {
                    {
                        let (dx, dy) = project(center, zoom, marker.coordinate);
                        let marker_class = if map.active_id() == Some(id) {
                            "plant-marker plant-marker-active"
                        } else {
                            "plant-marker"
                        };
                        let marker_id = id.to_string();
                        rsx! {
                            button {
                                key: "{id}",
                                r#type: "button",
                                class: "{marker_class}",
                                style: "left: calc(50% + {dx}px); top: calc(50% + {dy}px);",
                                "data-plant-id": "{id}",
                                onclick: move |_| {
                                    let scroll = {
                                        let mut app = state_write.write();
                                        app.select_marker(&marker_id);
                                        app.list.take_scroll_request()
                                    };
                                    if let Some(target) = scroll {
                                        scroll_entry_into_view(&target);
                                    }
                                },
                            }
                        }
                    }
                }

                if let Some(popup_id) = map.popup_id() {
                    if let Some(marker) = map.marker(popup_id) {
                        {
                            let (dx, dy) = project(center, zoom, marker.coordinate);
                            let py = dy - 18.0;
                            let label = state_read
                                .plant(popup_id)
                                .map(|plant| plant.display_label())
                                .unwrap_or_else(|| popup_id.to_string());
                            rsx! {
                                div {
                                    class: "marker-popup",
                                    style: "left: calc(50% + {dx}px); top: calc(50% + {py}px);",
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "map-attribution",
                "{view_label}"
            }
        }
    }
}

/// Projects a coordinate into pixel offsets from the viewport center
/// using an equirectangular mapping scaled by the current zoom.
fn project(center: Coordinate, zoom: f64, coordinate: Coordinate) -> (f64, f64) {
    let scale = 256.0 * 2f64.powf(zoom) / 360.0;
    let dx = (coordinate.lng - center.lng) * scale;
    let dy = (center.lat - coordinate.lat) * scale;
    (dx, dy)
}

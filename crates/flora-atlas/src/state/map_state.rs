//! Marker registry and view state for the map panel.

use std::collections::BTreeMap;

use flora_core::{Coordinate, PlantRecord};
use tracing::debug;

/// Default view center when the atlas opens.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 42.2808,
    lng: -83.7430,
};

/// Default view zoom when the atlas opens.
pub const DEFAULT_ZOOM: f64 = 13.0;

/// Zoom used when focusing a single plant.
pub const FOCUS_ZOOM: f64 = 15.0;

/// One marker on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coordinate: Coordinate,
    pub visible: bool,
}

/// View state for the map panel.
///
/// Markers are placed once, when the dataset finishes loading, and are
/// never removed afterwards; filtering only toggles their visibility. At
/// most one marker is active and at most one popup is open at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct MapState {
    markers: BTreeMap<String, Marker>,
    active_id: Option<String>,
    popup_id: Option<String>,
    center: Coordinate,
    zoom: f64,
    loaded: bool,
}

impl Default for MapState {
    fn default() -> Self {
        Self::new()
    }
}

impl MapState {
    /// Creates a map state at the default center and zoom, with no
    /// markers yet.
    pub fn new() -> Self {
        Self {
            markers: BTreeMap::new(),
            active_id: None,
            popup_id: None,
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            loaded: false,
        }
    }

    /// Whether markers have been placed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The current view center.
    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// The current view zoom.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The active marker id, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// The id whose popup is open, if any.
    pub fn popup_id(&self) -> Option<&str> {
        self.popup_id.as_deref()
    }

    /// Iterates over all markers in stable id order.
    pub fn markers(&self) -> impl Iterator<Item = (&str, &Marker)> {
        self.markers.iter().map(|(id, marker)| (id.as_str(), marker))
    }

    /// Looks up a marker by plant id.
    pub fn marker(&self, id: &str) -> Option<&Marker> {
        self.markers.get(id)
    }

    /// Places one marker per plant with a valid coordinate.
    ///
    /// Runs once; later calls are ignored. Plants without a coordinate
    /// are skipped silently.
    pub fn place_markers(&mut self, plants: &[PlantRecord]) {
        if self.loaded {
            return;
        }
        for plant in plants {
            let Some(coordinate) = plant.coordinate() else {
                continue;
            };
            self.markers.insert(
                plant.id.clone(),
                Marker {
                    coordinate,
                    visible: true,
                },
            );
        }
        self.loaded = true;
        debug!(count = self.markers.len(), "placed plant markers");
    }

    /// Shows only the markers whose ids are in the given collection.
    ///
    /// An empty collection means "show all". Markers are toggled, never
    /// destroyed.
    pub fn set_visible_ids(&mut self, ids: &[String]) {
        if ids.is_empty() {
            for marker in self.markers.values_mut() {
                marker.visible = true;
            }
            return;
        }
        for (id, marker) in self.markers.iter_mut() {
            marker.visible = ids.iter().any(|visible| visible == id);
        }
    }

    /// Makes the given marker the sole active one and opens its popup.
    /// Unknown ids clear the active marker instead.
    pub fn set_active(&mut self, id: &str) {
        if self.markers.contains_key(id) {
            self.active_id = Some(id.to_string());
            self.popup_id = Some(id.to_string());
        } else {
            self.active_id = None;
            self.popup_id = None;
        }
    }

    /// Flies the view to a plant's marker and emphasizes it.
    ///
    /// With a known marker the view re-centers on its coordinate at
    /// [`FOCUS_ZOOM`] and the popup opens. Unknown ids skip the movement
    /// but still update the active-marker bookkeeping.
    pub fn focus(&mut self, id: &str) {
        if let Some(marker) = self.markers.get(id) {
            self.center = marker.coordinate;
            self.zoom = FOCUS_ZOOM;
        }
        self.set_active(id);
    }
}

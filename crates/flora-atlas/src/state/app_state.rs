//! Main application state for the flora atlas.

use flora_core::{Category, FavoritesMode, FilterState, PlantRecord, Season};
use flora_storage::FavoritesStore;
use tracing::info;

use super::{ListState, MapState};

/// Main application state.
///
/// Owns the read-only dataset, the filter selections, the persisted
/// favorites set, and the list and map view states. All cross-component
/// wiring goes through the methods here: a chip or search change
/// recomputes the visible subset for both views, a list click focuses the
/// map, a marker click highlights and scrolls the list.
pub struct AppState {
    /// The dataset, in catalog order.
    plants: Vec<PlantRecord>,

    /// Current filter selections.
    filter: FilterState,

    /// Persisted favorites.
    favorites: FavoritesStore,

    /// List selection state.
    pub list: ListState,

    /// Map view state.
    pub map: MapState,

    /// Ids passing the current filters, in dataset order.
    visible: Vec<String>,
}

impl AppState {
    /// Creates the application state with an empty dataset.
    ///
    /// The dataset arrives through [`AppState::install_dataset`] once its
    /// load completes.
    pub fn new(favorites: FavoritesStore) -> Self {
        Self {
            plants: Vec::new(),
            filter: FilterState::new(),
            favorites,
            list: ListState::new(),
            map: MapState::new(),
            visible: Vec::new(),
        }
    }

    /// Installs the loaded dataset: places the map markers and renders
    /// everything once through the all-inclusive default filters.
    pub fn install_dataset(&mut self, plants: Vec<PlantRecord>) {
        info!(count = plants.len(), "dataset ready");
        self.plants = plants;
        self.map.place_markers(&self.plants);
        self.apply_filters();
    }

    /// The full dataset.
    pub fn plants(&self) -> &[PlantRecord] {
        &self.plants
    }

    /// Looks up a plant by id.
    pub fn plant(&self, id: &str) -> Option<&PlantRecord> {
        self.plants.iter().find(|plant| plant.id == id)
    }

    /// The current filter selections.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The plants passing the current filters, in dataset order.
    pub fn visible_plants(&self) -> Vec<&PlantRecord> {
        self.visible
            .iter()
            .filter_map(|id| self.plant(id))
            .collect()
    }

    /// Number of plants passing the current filters.
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Whether a plant is favorited.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Number of favorited plants.
    pub fn favorites_count(&self) -> usize {
        self.favorites.len()
    }

    /// Selects a season and recomputes.
    pub fn select_season(&mut self, season: Season) {
        self.filter.set_season(season);
        self.apply_filters();
    }

    /// Selects a category and recomputes.
    pub fn select_category(&mut self, category: Category) {
        self.filter.set_category(category);
        self.apply_filters();
    }

    /// Selects a favorites mode and recomputes.
    pub fn select_favorites_mode(&mut self, mode: FavoritesMode) {
        self.filter.set_favorites_mode(mode);
        self.apply_filters();
    }

    /// Forwards a raw search box value and recomputes. Trimming and
    /// case-folding belong to the filter state.
    pub fn set_search_term(&mut self, raw: &str) {
        self.filter.set_search(raw);
        self.apply_filters();
    }

    /// List entry click: the entry becomes the sole active one and the
    /// map focuses its marker.
    pub fn select_entry(&mut self, id: &str) {
        self.list.set_active(id);
        self.map.focus(id);
    }

    /// Marker click: the marker becomes the sole active one and the list
    /// entry is highlighted and scrolled into view.
    pub fn select_marker(&mut self, id: &str) {
        self.map.set_active(id);
        self.list.highlight_and_scroll(id);
    }

    /// Flips a plant's favorite membership, persisting immediately, and
    /// re-applies the filters so a favorites-only view stays consistent.
    ///
    /// Returns the new membership state.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let now_favorite = self.favorites.toggle(id);
        self.apply_filters();
        now_favorite
    }

    /// Recomputes the visible subset and pushes it to both views.
    fn apply_filters(&mut self) {
        let outcome = self.filter.apply(&self.plants, &self.favorites);
        self.map.set_visible_ids(&outcome.mappable);
        self.visible = outcome.visible;
    }
}

//! Filter state and the match predicate for the plant catalog.
//!
//! Three single-choice selector groups (season, category, favorites mode)
//! plus a free-text search term make up the filter state. Each selection
//! event updates exactly one field and triggers a full recomputation over
//! the dataset; the outcome drives both the list and the map.

use tracing::warn;

use crate::plant::PlantRecord;

/// Season selector values. `All` matches every plant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Season {
    #[default]
    All,
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Parses a raw chip token. Unrecognized tokens select `All`.
    pub fn from_token(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "spring" => Self::Spring,
            "summer" => Self::Summer,
            "fall" => Self::Fall,
            "winter" => Self::Winter,
            _ => Self::All,
        }
    }

    /// The tag form used by plant season lists, `None` for `All`.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Spring => Some("spring"),
            Self::Summer => Some("summer"),
            Self::Fall => Some("fall"),
            Self::Winter => Some("winter"),
        }
    }

    /// The chip token for this selector.
    pub fn token(&self) -> &'static str {
        self.tag().unwrap_or("all")
    }
}

/// Category selector and inference values.
///
/// `All` is the match-everything selector. `Other` is the inference
/// fallback for plants no rule recognizes; it never equals a concrete
/// selector, so those plants drop out of any concrete category view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Trees,
    Shrubs,
    Vines,
    Perennials,
    Ferns,
    Grasses,
    Other,
}

/// Ordered keyword rules mapping free text to a category. Evaluated top
/// to bottom on case-folded text, first match wins.
const CATEGORY_RULES: &[(&str, Category)] = &[
    ("tree", Category::Trees),
    ("shrub", Category::Shrubs),
    ("vine", Category::Vines),
    ("perennial", Category::Perennials),
    ("fern", Category::Ferns),
    ("grass", Category::Grasses),
];

impl Category {
    /// Normalizes a raw chip token into a selector.
    ///
    /// Chip tokens arrive as free text such as `native-shrub`; any token
    /// containing a rule keyword maps to that category, and tokens no rule
    /// recognizes select `All`.
    pub fn normalize_token(raw: &str) -> Self {
        let folded = raw.trim().to_lowercase();
        if folded.is_empty() || folded == "all" {
            return Self::All;
        }
        for (keyword, category) in CATEGORY_RULES {
            if folded.contains(keyword) {
                return *category;
            }
        }
        Self::All
    }

    /// The chip token for this selector.
    pub fn token(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Trees => "trees",
            Self::Shrubs => "shrubs",
            Self::Vines => "vines",
            Self::Perennials => "perennials",
            Self::Ferns => "ferns",
            Self::Grasses => "grasses",
            Self::Other => "other",
        }
    }

    /// Infers a plant's category from its group and type text, falling
    /// back to `Other` when no rule matches.
    pub fn infer(plant: &PlantRecord) -> Self {
        let text = format!(
            "{} {}",
            plant.group.as_deref().unwrap_or(""),
            plant.plant_type.as_deref().unwrap_or("")
        )
        .to_lowercase();
        for (keyword, category) in CATEGORY_RULES {
            if text.contains(keyword) {
                return *category;
            }
        }
        Self::Other
    }
}

/// Favorites filter mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FavoritesMode {
    #[default]
    All,
    FavoritesOnly,
}

impl FavoritesMode {
    /// Parses a raw chip token; only `fav` selects favorites-only.
    pub fn from_token(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("fav") {
            Self::FavoritesOnly
        } else {
            Self::All
        }
    }

    /// The chip token for this selector.
    pub fn token(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::FavoritesOnly => "fav",
        }
    }
}

/// Capability for answering whether a plant id is favorited.
///
/// The live implementation is the persisted favorites set; tests use a
/// plain id set.
pub trait FavoritesQuery {
    /// Returns whether the given plant id is in the favorites set.
    fn is_favorite(&self, id: &str) -> bool;
}

impl FavoritesQuery for std::collections::HashSet<String> {
    fn is_favorite(&self, id: &str) -> bool {
        self.contains(id)
    }
}

/// The current filter selections.
///
/// One instance lives in the application state. Fields change only
/// through explicit selection events, and nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    season: Season,
    category: Category,
    favorites: FavoritesMode,
    search: String,
}

impl FilterState {
    /// Creates an all-inclusive filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current season selector.
    pub fn season(&self) -> Season {
        self.season
    }

    /// The current category selector.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The current favorites mode.
    pub fn favorites_mode(&self) -> FavoritesMode {
        self.favorites
    }

    /// The current search term, trimmed and case-folded.
    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Selects a season.
    pub fn set_season(&mut self, season: Season) {
        self.season = season;
    }

    /// Selects a category.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Selects a favorites mode.
    pub fn set_favorites_mode(&mut self, mode: FavoritesMode) {
        self.favorites = mode;
    }

    /// Stores a new search term. Callers forward raw input text verbatim;
    /// trimming and case-folding happen here.
    pub fn set_search(&mut self, raw: &str) {
        self.search = raw.trim().to_lowercase();
    }

    /// Returns whether a plant passes every active filter.
    ///
    /// A plant that declares no season tags matches every season
    /// selector.
    pub fn matches(&self, plant: &PlantRecord, favorites: &dyn FavoritesQuery) -> bool {
        if let Some(tag) = self.season.tag() {
            let declares_seasons = !plant.seasons.is_empty();
            if declares_seasons && !plant.seasons.iter().any(|s| s.eq_ignore_ascii_case(tag)) {
                return false;
            }
        }

        if self.category != Category::All && Category::infer(plant) != self.category {
            return false;
        }

        if self.favorites == FavoritesMode::FavoritesOnly && !favorites.is_favorite(&plant.id) {
            return false;
        }

        if !self.search.is_empty() && !plant.search_haystack().contains(&self.search) {
            return false;
        }

        true
    }

    /// Filters the dataset in its original order.
    ///
    /// Returns the visible id sequence for the list and the subset of
    /// those ids that carry a valid coordinate for the map. An empty
    /// dataset logs a warning and yields an empty outcome.
    pub fn apply(&self, plants: &[PlantRecord], favorites: &dyn FavoritesQuery) -> FilterOutcome {
        if plants.is_empty() {
            warn!("plant dataset is empty, nothing to filter");
            return FilterOutcome::default();
        }

        let mut visible = Vec::new();
        let mut mappable = Vec::new();
        for plant in plants {
            if !self.matches(plant, favorites) {
                continue;
            }
            visible.push(plant.id.clone());
            if plant.coordinate().is_some() {
                mappable.push(plant.id.clone());
            }
        }
        FilterOutcome { visible, mappable }
    }
}

/// The result of one filter recomputation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    /// Ids that should appear in the list, in dataset order.
    pub visible: Vec<String>,
    /// The visible ids that carry a valid coordinate.
    pub mappable: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn plant(id: &str, name: &str) -> PlantRecord {
        serde_json::from_str(&format!(r#"{{"id":"{id}","nameEn":"{name}"}}"#)).unwrap()
    }

    fn seasonal(id: &str, name: &str, seasons: &[&str]) -> PlantRecord {
        let mut record = plant(id, name);
        record.seasons = seasons.iter().map(|s| s.to_string()).collect();
        record
    }

    fn no_favorites() -> HashSet<String> {
        HashSet::new()
    }

    #[test]
    fn test_season_filter_narrows_and_restores() {
        let plants = vec![
            seasonal("a", "Aspen", &["spring"]),
            seasonal("b", "Birch", &["fall"]),
        ];
        let mut filter = FilterState::new();

        filter.set_season(Season::Spring);
        let outcome = filter.apply(&plants, &no_favorites());
        assert_eq!(outcome.visible, vec!["a".to_string()]);

        filter.set_season(Season::All);
        let outcome = filter.apply(&plants, &no_favorites());
        assert_eq!(outcome.visible, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_plant_without_seasons_matches_any_season() {
        let plants = vec![plant("evergreen", "White Pine")];
        let mut filter = FilterState::new();
        filter.set_season(Season::Winter);
        let outcome = filter.apply(&plants, &no_favorites());
        assert_eq!(outcome.visible, vec!["evergreen".to_string()]);
    }

    #[test]
    fn test_category_inferred_from_group() {
        let mut record = plant("dogwood", "Red Osier Dogwood");
        record.group = Some("Native Shrub".to_string());
        assert_eq!(Category::infer(&record), Category::Shrubs);

        let mut filter = FilterState::new();
        filter.set_category(Category::Vines);
        assert!(!filter.matches(&record, &no_favorites()));

        filter.set_category(Category::All);
        assert!(filter.matches(&record, &no_favorites()));
    }

    #[test]
    fn test_category_other_excluded_by_concrete_filter() {
        let mut record = plant("moss", "Sphagnum");
        record.group = Some("Bryophyte".to_string());
        assert_eq!(Category::infer(&record), Category::Other);

        let mut filter = FilterState::new();
        for category in [
            Category::Trees,
            Category::Shrubs,
            Category::Vines,
            Category::Perennials,
            Category::Ferns,
            Category::Grasses,
        ] {
            filter.set_category(category);
            assert!(!filter.matches(&record, &no_favorites()));
        }
    }

    #[test]
    fn test_normalize_token_matches_substrings() {
        assert_eq!(Category::normalize_token("native-tree"), Category::Trees);
        assert_eq!(Category::normalize_token("Native-Shrub"), Category::Shrubs);
        assert_eq!(Category::normalize_token("all"), Category::All);
        assert_eq!(Category::normalize_token("succulent"), Category::All);
        assert_eq!(Category::normalize_token(""), Category::All);
    }

    #[test]
    fn test_search_matches_case_insensitive() {
        let plants = vec![plant("a", "Aspen"), plant("b", "Birch")];
        let mut filter = FilterState::new();
        filter.set_search("  ASP ");
        let outcome = filter.apply(&plants, &no_favorites());
        assert_eq!(outcome.visible, vec!["a".to_string()]);
    }

    #[test]
    fn test_search_scans_descriptive_fields() {
        let mut record = plant("fern", "Ostrich Fern");
        record.habitat = Some("Shaded riverbank".to_string());
        let mut filter = FilterState::new();
        filter.set_search("riverbank");
        assert!(filter.matches(&record, &no_favorites()));

        filter.set_search("prairie");
        assert!(!filter.matches(&record, &no_favorites()));
    }

    #[test]
    fn test_favorites_only_mode() {
        let plants = vec![plant("a", "Aspen"), plant("b", "Birch")];
        let favorites: HashSet<String> = ["b".to_string()].into();

        let mut filter = FilterState::new();
        filter.set_favorites_mode(FavoritesMode::FavoritesOnly);
        let outcome = filter.apply(&plants, &favorites);
        assert_eq!(outcome.visible, vec!["b".to_string()]);

        filter.set_favorites_mode(FavoritesMode::All);
        let outcome = filter.apply(&plants, &favorites);
        assert_eq!(outcome.visible.len(), 2);
    }

    #[test]
    fn test_apply_preserves_dataset_order() {
        let plants = vec![
            plant("willow", "Willow"),
            plant("aspen", "Aspen"),
            plant("birch", "Birch"),
        ];
        let outcome = FilterState::new().apply(&plants, &no_favorites());
        assert_eq!(outcome.visible, vec!["willow", "aspen", "birch"]);
    }

    #[test]
    fn test_mappable_requires_valid_coordinate() {
        let mut located = plant("a", "Aspen");
        located.lat = Some(42.28);
        located.lng = Some(-83.74);
        let unlocated = plant("b", "Birch");

        let outcome = FilterState::new().apply(&[located, unlocated], &no_favorites());
        assert_eq!(outcome.visible.len(), 2);
        assert_eq!(outcome.mappable, vec!["a".to_string()]);
    }

    #[test]
    fn test_all_filters_combine() {
        let mut target = seasonal("maple", "Red Maple", &["fall"]);
        target.group = Some("Native Tree".to_string());
        let mut decoy = seasonal("oak", "Red Oak", &["fall"]);
        decoy.group = Some("Native Tree".to_string());

        let favorites: HashSet<String> = ["maple".to_string()].into();

        let mut filter = FilterState::new();
        filter.set_season(Season::Fall);
        filter.set_category(Category::Trees);
        filter.set_favorites_mode(FavoritesMode::FavoritesOnly);
        filter.set_search("red");

        let outcome = filter.apply(&[target, decoy], &favorites);
        assert_eq!(outcome.visible, vec!["maple".to_string()]);
    }

    #[test]
    fn test_empty_dataset_yields_empty_outcome() {
        let outcome = FilterState::new().apply(&[], &no_favorites());
        assert!(outcome.visible.is_empty());
        assert!(outcome.mappable.is_empty());
    }
}

//! The persisted favorites set.
//!
//! Favorites are a set of plant ids stored as a JSON array under
//! [`FAVORITES_KEY`]. Older builds persisted under different keys and in
//! an id-to-bool map encoding; loading scans an ordered list of keys and
//! accepts either encoding, tolerating malformed values by moving on to
//! the next key. Every mutation re-persists the set immediately, always
//! to the primary key.

use std::collections::{BTreeSet, HashMap};

use flora_core::FavoritesQuery;
use tracing::warn;

use crate::KeyValueStore;

/// Primary storage key for the favorites set.
pub const FAVORITES_KEY: &str = "plantFavorites";

/// Older keys still scanned on load, in order.
pub const LEGACY_FAVORITES_KEYS: &[&str] = &["plant_favorites", "favorite_plants"];

/// The favorites set, backed by a key-value store.
pub struct FavoritesStore {
    store: Box<dyn KeyValueStore>,
    favorites: BTreeSet<String>,
}

impl FavoritesStore {
    /// Loads the favorites set from storage.
    ///
    /// The primary key is tried first, then each legacy key in order. A
    /// key whose value is absent, unreadable, or malformed is skipped;
    /// when no key yields a set the result is empty.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let mut favorites = BTreeSet::new();
        for key in std::iter::once(FAVORITES_KEY).chain(LEGACY_FAVORITES_KEYS.iter().copied()) {
            let raw = match store.get(key) {
                Ok(Some(raw)) => raw,
                Ok(None) => continue,
                Err(err) => {
                    warn!(key, %err, "failed to read favorites key");
                    continue;
                }
            };
            match decode(&raw) {
                Some(decoded) => {
                    favorites = decoded;
                    break;
                }
                None => warn!(key, "ignoring malformed favorites value"),
            }
        }
        Self { store, favorites }
    }

    /// Returns whether a plant id is favorited.
    pub fn contains(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Number of favorited plants.
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    /// Returns whether no plants are favorited.
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Flips membership for a plant id and persists immediately.
    ///
    /// Returns the new membership state.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        };
        self.persist();
        now_favorite
    }

    /// Writes the current set to the primary key as a JSON array.
    /// Failures are logged and swallowed; the in-memory set stays
    /// authoritative for the session.
    fn persist(&self) {
        let ids: Vec<&str> = self.favorites.iter().map(String::as_str).collect();
        let encoded = match serde_json::to_string(&ids) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(%err, "failed to encode favorites");
                return;
            }
        };
        if let Err(err) = self.store.set(FAVORITES_KEY, &encoded) {
            warn!(%err, "failed to save favorites");
        }
    }
}

impl FavoritesQuery for FavoritesStore {
    fn is_favorite(&self, id: &str) -> bool {
        self.contains(id)
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("favorites", &self.favorites)
            .finish()
    }
}

/// Decodes one persisted favorites value.
///
/// Accepts an array of ids (`["a","b"]`) or an id-keyed map
/// (`{"a":true,"b":false}`) whose true entries are the set. Anything else
/// decodes as `None`.
fn decode(raw: &str) -> Option<BTreeSet<String>> {
    if let Ok(ids) = serde_json::from_str::<Vec<String>>(raw) {
        return Some(ids.into_iter().collect());
    }
    if let Ok(map) = serde_json::from_str::<HashMap<String, bool>>(raw) {
        return Some(
            map.into_iter()
                .filter_map(|(id, marked)| marked.then_some(id))
                .collect(),
        );
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryStore;

    fn store_with(key: &str, value: &str) -> Box<InMemoryStore> {
        Box::new(InMemoryStore::with_entries([(
            key.to_string(),
            value.to_string(),
        )]))
    }

    #[test]
    fn test_load_from_primary_key() {
        let favorites = FavoritesStore::load(store_with(FAVORITES_KEY, r#"["aspen","birch"]"#));
        assert!(favorites.contains("aspen"));
        assert!(favorites.contains("birch"));
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn test_load_from_legacy_list_key() {
        let favorites = FavoritesStore::load(store_with("plant_favorites", r#"["aspen"]"#));
        assert!(favorites.contains("aspen"));
    }

    #[test]
    fn test_load_from_legacy_map_key() {
        let favorites = FavoritesStore::load(store_with(
            "favorite_plants",
            r#"{"aspen":true,"birch":false}"#,
        ));
        assert!(favorites.contains("aspen"));
        assert!(!favorites.contains("birch"));
    }

    #[test]
    fn test_malformed_primary_falls_through_to_legacy() {
        let store = Box::new(InMemoryStore::with_entries([
            (FAVORITES_KEY.to_string(), "not json".to_string()),
            ("plant_favorites".to_string(), r#"["birch"]"#.to_string()),
        ]));
        let favorites = FavoritesStore::load(store);
        assert!(favorites.contains("birch"));
    }

    #[test]
    fn test_absent_storage_loads_empty() {
        let favorites = FavoritesStore::load(Box::new(InMemoryStore::new()));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_persists_immediately() {
        let store = Box::new(InMemoryStore::new());
        let mut favorites = FavoritesStore::load(store);

        assert!(favorites.toggle("aspen"));
        // Reload from the same backing map through a fresh view
        assert!(favorites.contains("aspen"));
    }

    #[test]
    fn test_double_toggle_restores_set_and_storage() {
        let backing = Box::new(InMemoryStore::with_entries([(
            FAVORITES_KEY.to_string(),
            r#"["birch"]"#.to_string(),
        )]));
        let mut favorites = FavoritesStore::load(backing);

        assert!(favorites.toggle("aspen"));
        assert!(!favorites.toggle("aspen"));

        assert!(!favorites.contains("aspen"));
        assert!(favorites.contains("birch"));
        assert_eq!(
            favorites.store.get(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"["birch"]"#)
        );
    }

    #[test]
    fn test_legacy_load_rewrites_primary_on_first_toggle() {
        let mut favorites = FavoritesStore::load(store_with("favorite_plants", r#"{"aspen":true}"#));
        favorites.toggle("birch");
        let persisted = favorites.store.get(FAVORITES_KEY).unwrap().unwrap();
        let decoded: Vec<String> = serde_json::from_str(&persisted).unwrap();
        assert_eq!(decoded, vec!["aspen".to_string(), "birch".to_string()]);
    }

    #[test]
    fn test_decode_rejects_scalars() {
        assert!(decode("42").is_none());
        assert!(decode(r#""aspen""#).is_none());
    }
}

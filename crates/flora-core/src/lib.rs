//! # Flora Core
//!
//! Data model and filter engine for the plant atlas.
//!
//! This crate holds everything the UI layers share: the read-only plant
//! records, dataset loading, and the filter engine that turns the current
//! selections (season, category, favorites mode, search term) into the
//! visible subset of the catalog.
//!
//! ## Example
//!
//! ```rust
//! use flora_core::{FilterState, Season, parse_dataset};
//! use std::collections::HashSet;
//!
//! let plants = parse_dataset(
//!     r#"[{"id":"aspen","nameEn":"Aspen","seasons":["spring"]}]"#,
//! ).unwrap();
//!
//! let mut filter = FilterState::new();
//! filter.set_season(Season::Spring);
//!
//! let favorites = HashSet::new();
//! let outcome = filter.apply(&plants, &favorites);
//! assert_eq!(outcome.visible, vec!["aspen".to_string()]);
//! ```

pub mod dataset;
pub mod filter;
pub mod plant;

// Re-exports
pub use dataset::{DatasetError, load_dataset, parse_dataset};
pub use filter::{Category, FavoritesMode, FavoritesQuery, FilterOutcome, FilterState, Season};
pub use plant::{Coordinate, PlantRecord};

//! Interactive map and list browser for a plant catalog
//!
//! This crate provides a Dioxus desktop application that browses a plant
//! dataset in a synchronized map/list view with season, category,
//! favorites, and text filters.

pub mod components;
pub mod state;

//! Shared UI components and theme for the flora atlas.

pub mod chips;
pub mod theme;

pub use chips::{ChipOption, ChipRow};
pub use theme::{CURRENT_THEME, Theme, ThemedRoot};

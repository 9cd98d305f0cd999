//! Theme system for the flora atlas.

use dioxus::prelude::*;

/// Available themes for the atlas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Paper-white field-guide look with moss and clay accents
    #[default]
    FieldGuide,
}

impl Theme {
    /// Returns the CSS class value for this theme.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::FieldGuide => "field-guide",
        }
    }

    /// Returns the display name for this theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::FieldGuide => "Field Guide",
        }
    }
}

/// Global signal for the current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Root component that applies the current theme.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();
    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

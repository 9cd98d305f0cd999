//! Selection state for the plant list.

/// Tracks the active list entry and pending scroll requests.
///
/// At most one entry is active at a time. A scroll request is queued by
/// [`ListState::highlight_and_scroll`] and consumed by the list component,
/// which scrolls the entry to its nearest visible position with smooth
/// motion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    active_id: Option<String>,
    scroll_target: Option<String>,
}

impl ListState {
    /// Creates a new list state with nothing active.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active entry id, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Returns whether the given entry is the active one.
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_deref() == Some(id)
    }

    /// Makes the given entry the sole active one.
    pub fn set_active(&mut self, id: &str) {
        self.active_id = Some(id.to_string());
    }

    /// Makes the given entry active and queues a scroll request for it.
    /// Used by the map when a marker is clicked.
    pub fn highlight_and_scroll(&mut self, id: &str) {
        self.set_active(id);
        self.scroll_target = Some(id.to_string());
    }

    /// The pending scroll target, if any, without consuming it.
    pub fn scroll_target(&self) -> Option<&str> {
        self.scroll_target.as_deref()
    }

    /// Takes and clears the pending scroll request.
    pub fn take_scroll_request(&mut self) -> Option<String> {
        self.scroll_target.take()
    }
}

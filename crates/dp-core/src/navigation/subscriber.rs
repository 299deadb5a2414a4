//! Focus subscriber trait

use super::Direction;

/// A change of the published focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusChange {
    /// Previously published focus, if any
    pub previous: Option<String>,
    /// Newly focused component id
    pub current: String,
    /// Direction that caused the change; `None` for explicit syncs
    pub direction: Option<Direction>,
}

/// Trait for components that need to respond to focus changes
pub trait FocusSubscriber: Send + Sync {
    /// Called when the focused component changes
    fn on_focus_change(&self, change: &FocusChange);
}

//! Engine settings

use serde::{Deserialize, Serialize};

/// How a scroll request should animate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Where the focused element should land in the scroll container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    Start,
    #[default]
    Center,
    End,
    Nearest,
}

/// Settings for a navigation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NavigatorSettings {
    /// Scroll animation for focused components with a selector
    pub scroll_behavior: ScrollBehavior,

    /// Scroll alignment for focused components with a selector
    pub scroll_block: ScrollBlock,
}

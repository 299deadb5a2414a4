//! Core focus navigation for directional-input displays
//!
//! This crate provides the navigation stack machine, the component/target
//! declarations it operates on, and the small helpers collaborators use to
//! wire lists and remote-control input into it.

pub mod input;
pub mod nav_list;
pub mod navigation;
pub mod settings;
pub mod sink;

use thiserror::Error;

// Re-export commonly used types
pub use input::{Key, RemoteControlEvent};
pub use nav_list::{NavList, NavListElement, NavListEntry};
pub use navigation::{
    focus_id, Action, Component, Direction, FocusChange, FocusSubscriber, NavigationEngine,
    NavigationOutcome, Target, TargetId,
};
pub use settings::{NavigatorSettings, ScrollBehavior, ScrollBlock};
pub use sink::{escape_selector, FocusSink, ScrollRequest};

/// Errors that abort a navigation transition
///
/// All of these indicate an inconsistent component graph or a host that
/// failed to seed the stack. The stack is left untouched when one is raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Navigation stack is empty")]
    EmptyStack,

    #[error("Navigation component \"{0}\" not found")]
    UnknownComponent(String),

    #[error("Navigation target \"{component}\" {direction} (aliased to {alias}) not found")]
    AliasTargetMissing {
        component: String,
        direction: Direction,
        alias: Direction,
    },

    #[error("Multi-level aliasing detected for component \"{component}\" ({direction})")]
    MultiLevelAlias {
        component: String,
        direction: Direction,
    },
}

//! Widget layouts and spatial navigation
//!
//! Home-screen widgets are laid out on a coarse grid. This crate loads those
//! layouts, resolves geometric neighbours between widgets, and wires them
//! into a [`dp_core::NavigationEngine`] without hand-authored targets.

pub mod config;
pub mod geometry;
pub mod neighbor;
pub mod wiring;

use thiserror::Error;

// Re-exports
pub use config::{HomePage, LayoutConfig, WidgetConfig, WidgetKind, XAlign, YAlign};
pub use geometry::{Bounded, WidgetRect};
pub use neighbor::neighbor_index;
pub use wiring::{first_focus, page_components, register_page, widget_id, with_fallback};

/// Errors that can occur while loading or validating a layout
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Layout parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate widget \"{name}\" on page {page}")]
    DuplicateWidget { page: usize, name: String },

    #[error("Widget \"{name}\" on page {page} has no area")]
    EmptyWidget { page: usize, name: String },

    #[error("Page {0} does not exist")]
    UnknownPage(usize),
}

//! egui integration for directional navigation
//!
//! This crate connects a [`dp_core::NavigationEngine`] to egui: keyboard
//! input becomes directions, focus and scroll requests become egui memory
//! and scroll commands, and focused regions get a focus ring.

pub mod input;
pub mod sink;
pub mod theme;
pub mod widget_utils;

/// Re-export commonly used types
pub use input::{directions_pressed, KeyBindings};
pub use sink::EguiFocusSink;
pub use theme::{apply_theme, focus_stroke, Theme};
pub use widget_utils::{egui_id, focus_frame};

use std::fmt;

use serde::{Deserialize, Serialize};

mod component;
mod engine;
mod subscriber;

pub use component::{focus_id, Action, Component, IdResolver, Target, TargetId};
pub use engine::NavigationEngine;
pub use subscriber::{FocusChange, FocusSubscriber};

/// Discrete inputs understood by the navigation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Exit,
}

impl Direction {
    /// All six directions, in declaration order
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Enter,
        Direction::Exit,
    ];

    /// Key of this direction's target on a component
    pub fn key(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Enter => "enter",
            Direction::Exit => "exit",
        }
    }

    /// Whether this is one of the four spatial directions
    pub fn is_spatial(self) -> bool {
        matches!(self, Direction::Up | Direction::Down | Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Result of a successful (non-fatal) navigation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Focus moved to the contained id
    Moved(String),
    /// A target was applied (its action ran) but the focused id is unchanged
    Stayed,
    /// Nothing happened: no target for the direction, a computed target
    /// declined, or the transition would have emptied the stack
    NoOp,
}

impl NavigationOutcome {
    /// The newly focused id, if focus moved
    pub fn focused(&self) -> Option<&str> {
        match self {
            NavigationOutcome::Moved(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serializes_by_name() {
        let json = serde_json::to_string(&Direction::Left).unwrap();
        assert_eq!(json, "\"Left\"");

        let dir: Direction = serde_json::from_str("\"Exit\"").unwrap();
        assert_eq!(dir, Direction::Exit);
    }

    #[test]
    fn test_outcome_focused_only_when_moved() {
        assert_eq!(NavigationOutcome::Moved("a".to_string()).focused(), Some("a"));
        assert_eq!(NavigationOutcome::Stayed.focused(), None);
        assert_eq!(NavigationOutcome::NoOp.focused(), None);
    }

    #[test]
    fn test_spatial_directions() {
        let spatial: Vec<_> = Direction::ALL.iter().filter(|d| d.is_spatial()).collect();
        assert_eq!(spatial.len(), 4);
        assert!(!Direction::Enter.is_spatial());
    }
}

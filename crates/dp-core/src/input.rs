//! Remote-control input events
//!
//! Paired remotes send JSON-encoded events such as `{"DPad":"Up"}` or
//! `{"Text":"hello"}`. D-pad events drive the navigation engine; the rest
//! are passed through to whatever owns native text input.

use serde::{Deserialize, Serialize};

use crate::navigation::{Direction, NavigationEngine, NavigationOutcome};
use crate::NavigationError;

/// Non-text keys a remote can send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Backspace,
}

/// An event received from a remote control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteControlEvent {
    DPad(Direction),
    Text(String),
    Keyboard(Key),
}

impl RemoteControlEvent {
    /// Decode an event from its JSON form
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Direction carried by a D-pad event
    pub fn direction(&self) -> Option<Direction> {
        match self {
            RemoteControlEvent::DPad(direction) => Some(*direction),
            _ => None,
        }
    }

    /// Forward a D-pad event to the engine.
    ///
    /// Returns `None` for events that are not directional.
    pub fn dispatch(
        &self,
        engine: &NavigationEngine,
    ) -> Option<Result<NavigationOutcome, NavigationError>> {
        self.direction().map(|direction| engine.go(direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Component, Target};

    #[test]
    fn test_decode_events() {
        assert_eq!(
            RemoteControlEvent::from_json(r#"{"DPad":"Enter"}"#).unwrap(),
            RemoteControlEvent::DPad(Direction::Enter)
        );
        assert_eq!(
            RemoteControlEvent::from_json(r#"{"Text":"hi"}"#).unwrap(),
            RemoteControlEvent::Text("hi".to_string())
        );
        assert_eq!(
            RemoteControlEvent::from_json(r#"{"Keyboard":"Backspace"}"#).unwrap(),
            RemoteControlEvent::Keyboard(Key::Backspace)
        );
        assert!(RemoteControlEvent::from_json(r#"{"DPad":"Sideways"}"#).is_err());
    }

    #[test]
    fn test_dispatch_only_moves_on_dpad() {
        let engine = NavigationEngine::new();
        engine.register("a", Component::new().down(Target::to("b")));
        engine.set(vec!["a".to_string()]);

        let text = RemoteControlEvent::Text("x".to_string());
        assert!(text.dispatch(&engine).is_none());

        let down = RemoteControlEvent::DPad(Direction::Down);
        let outcome = down.dispatch(&engine).unwrap().unwrap();
        assert_eq!(outcome, NavigationOutcome::Moved("b".to_string()));
    }
}

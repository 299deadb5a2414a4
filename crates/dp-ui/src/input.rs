//! Mapping egui key presses onto navigation directions

use dp_core::Direction;
use egui::{Context, Key};

/// Keys bound to navigation directions
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(Key, Direction)>,
    /// Keys still forwarded while a text field owns the keyboard
    text_passthrough: Vec<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::empty()
            .bind(Key::ArrowUp, Direction::Up)
            .bind(Key::ArrowDown, Direction::Down)
            .bind(Key::ArrowLeft, Direction::Left)
            .bind(Key::ArrowRight, Direction::Right)
            .bind(Key::Enter, Direction::Enter)
            .bind(Key::Space, Direction::Enter)
            .bind(Key::Escape, Direction::Exit)
            .bind(Key::Backspace, Direction::Exit)
            .passthrough(Key::Enter)
            .passthrough(Key::Escape)
    }
}

impl KeyBindings {
    /// Bindings with no keys at all
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
            text_passthrough: Vec::new(),
        }
    }

    /// Builder: bind `key` to `direction`
    pub fn bind(mut self, key: Key, direction: Direction) -> Self {
        self.bindings.retain(|(bound, _)| *bound != key);
        self.bindings.push((key, direction));
        self
    }

    /// Builder: keep forwarding `key` while a text field is being edited
    pub fn passthrough(mut self, key: Key) -> Self {
        if !self.text_passthrough.contains(&key) {
            self.text_passthrough.push(key);
        }
        self
    }

    pub fn direction(&self, key: Key) -> Option<Direction> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, direction)| *direction)
    }

    /// Directions for the keys reported pressed, in binding order.
    ///
    /// While `editing_text` is set only pass-through keys are considered, so
    /// arrows, space and backspace stay with the text field.
    pub fn directions_for(&self, pressed: impl Fn(Key) -> bool, editing_text: bool) -> Vec<Direction> {
        self.bindings
            .iter()
            .filter(|(key, _)| !editing_text || self.text_passthrough.contains(key))
            .filter(|(key, _)| pressed(*key))
            .map(|(_, direction)| *direction)
            .collect()
    }

    /// Directions pressed during the current frame
    pub fn directions(&self, ctx: &Context) -> Vec<Direction> {
        let editing_text = ctx.wants_keyboard_input();
        ctx.input(|input| self.directions_for(|key| input.key_pressed(key), editing_text))
    }
}

/// Directions pressed during the current frame, with the default bindings
pub fn directions_pressed(ctx: &Context) -> Vec<Direction> {
    KeyBindings::default().directions(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.direction(Key::ArrowLeft), Some(Direction::Left));
        assert_eq!(bindings.direction(Key::Space), Some(Direction::Enter));
        assert_eq!(bindings.direction(Key::Backspace), Some(Direction::Exit));
        assert_eq!(bindings.direction(Key::A), None);
    }

    #[test]
    fn test_pressed_keys_in_binding_order() {
        let bindings = KeyBindings::default();
        let pressed = |key: Key| matches!(key, Key::Escape | Key::ArrowDown);

        assert_eq!(
            bindings.directions_for(pressed, false),
            vec![Direction::Down, Direction::Exit]
        );
    }

    #[test]
    fn test_text_editing_keeps_arrows_and_backspace() {
        let bindings = KeyBindings::default();
        let pressed = |key: Key| matches!(key, Key::ArrowLeft | Key::Backspace | Key::Enter);

        assert_eq!(bindings.directions_for(pressed, true), vec![Direction::Enter]);
    }

    #[test]
    fn test_rebinding_replaces_key() {
        let bindings = KeyBindings::default().bind(Key::Backspace, Direction::Left);
        assert_eq!(bindings.direction(Key::Backspace), Some(Direction::Left));

        let pressed = |key: Key| key == Key::Backspace;
        assert_eq!(bindings.directions_for(pressed, false), vec![Direction::Left]);
    }
}

//! Navigable component declarations

use std::fmt;
use std::sync::Arc;

use super::Direction;

/// Side effect run after a target has been applied
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// Callback resolving a target id on demand; `None` declines the move
pub type IdResolver = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// Standard id for the focused state of a native input
pub fn focus_id(id: &str) -> String {
    format!("{}:focus", id)
}

/// Id pushed onto the stack when a target is followed
#[derive(Clone)]
pub enum TargetId {
    /// A fixed component id
    Literal(String),
    /// An id computed at navigation time (e.g. from widget geometry)
    Computed(IdResolver),
}

impl TargetId {
    /// Resolve the id to push. Empty ids count as declining.
    pub fn resolve(&self) -> Option<String> {
        let id = match self {
            TargetId::Literal(id) => Some(id.clone()),
            TargetId::Computed(resolver) => resolver(),
        };
        id.filter(|id| !id.is_empty())
    }
}

impl fmt::Debug for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetId::Literal(id) => f.debug_tuple("Literal").field(id).finish(),
            TargetId::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// The effect of moving one direction from a component
#[derive(Clone, Default)]
pub struct Target {
    /// Resolve this direction as another direction of the same component
    pub alias: Option<Direction>,
    /// Keep the current stack top below the pushed id
    pub keep: bool,
    /// Component id to push
    pub id: Option<TargetId>,
    /// Action to take after successfully navigating
    pub action: Option<Action>,
}

impl Target {
    /// Target that pops the current component and pushes nothing
    pub fn pop() -> Self {
        Self::default()
    }

    /// Target moving to a fixed id
    pub fn to(id: impl Into<String>) -> Self {
        Self {
            id: Some(TargetId::Literal(id.into())),
            ..Self::default()
        }
    }

    /// Target moving to an id computed when navigating
    pub fn computed<F>(resolver: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        Self {
            id: Some(TargetId::Computed(Arc::new(resolver))),
            ..Self::default()
        }
    }

    /// Target reusing another direction's target
    pub fn alias(direction: Direction) -> Self {
        Self {
            alias: Some(direction),
            ..Self::default()
        }
    }

    /// Target that only runs an action, leaving the stack as it is
    pub fn action<F>(action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::pop().keep().with_action(action)
    }

    /// Builder: keep the current component on the stack
    pub fn keep(mut self) -> Self {
        self.keep = true;
        self
    }

    /// Builder: run `action` after navigating
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Builder: run a shared action after navigating
    pub fn with_shared_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("alias", &self.alias)
            .field("keep", &self.keep)
            .field("id", &self.id)
            .field("action", &self.action.as_ref().map(|_| ".."))
            .finish()
    }
}

/// A navigable component: its directional targets and scroll selector
#[derive(Debug, Clone, Default)]
pub struct Component {
    pub up: Option<Target>,
    pub down: Option<Target>,
    pub left: Option<Target>,
    pub right: Option<Target>,
    pub enter: Option<Target>,
    pub exit: Option<Target>,
    /// Selector to scroll into view when focused. Any `/` and `:` are
    /// escaped before it reaches the focus sink.
    pub scroll_to: Option<String>,
}

impl Component {
    /// Create a component with no targets
    pub fn new() -> Self {
        Self::default()
    }

    /// The target declared for `direction`
    pub fn target(&self, direction: Direction) -> Option<&Target> {
        match direction {
            Direction::Up => self.up.as_ref(),
            Direction::Down => self.down.as_ref(),
            Direction::Left => self.left.as_ref(),
            Direction::Right => self.right.as_ref(),
            Direction::Enter => self.enter.as_ref(),
            Direction::Exit => self.exit.as_ref(),
        }
    }

    /// Builder: set the target for `direction`
    pub fn with(mut self, direction: Direction, target: Target) -> Self {
        let slot = match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Enter => &mut self.enter,
            Direction::Exit => &mut self.exit,
        };
        *slot = Some(target);
        self
    }

    pub fn up(self, target: Target) -> Self {
        self.with(Direction::Up, target)
    }

    pub fn down(self, target: Target) -> Self {
        self.with(Direction::Down, target)
    }

    pub fn left(self, target: Target) -> Self {
        self.with(Direction::Left, target)
    }

    pub fn right(self, target: Target) -> Self {
        self.with(Direction::Right, target)
    }

    pub fn enter(self, target: Target) -> Self {
        self.with(Direction::Enter, target)
    }

    pub fn exit(self, target: Target) -> Self {
        self.with(Direction::Exit, target)
    }

    /// Builder: scroll `selector` into view when this component is focused
    pub fn scroll_to(mut self, selector: impl Into<String>) -> Self {
        self.scroll_to = Some(selector.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_id_suffix() {
        assert_eq!(focus_id("home/todo/new"), "home/todo/new:focus");
    }

    #[test]
    fn test_computed_target_may_decline() {
        let declined = TargetId::Computed(Arc::new(|| None));
        assert_eq!(declined.resolve(), None);

        let empty = TargetId::Computed(Arc::new(|| Some(String::new())));
        assert_eq!(empty.resolve(), None);

        let literal = TargetId::Literal("x".to_string());
        assert_eq!(literal.resolve().as_deref(), Some("x"));
    }

    #[test]
    fn test_component_builder_slots() {
        let component = Component::new()
            .up(Target::alias(Direction::Down))
            .down(Target::to("x"))
            .scroll_to("list/x");

        assert_eq!(component.target(Direction::Up).and_then(|t| t.alias), Some(Direction::Down));
        assert!(component.target(Direction::Left).is_none());
        assert_eq!(component.scroll_to.as_deref(), Some("list/x"));
    }

    #[test]
    fn test_action_target_keeps_stack() {
        let target = Target::action(|| {});
        assert!(target.keep);
        assert!(target.id.is_none());
        assert!(target.action.is_some());
    }
}

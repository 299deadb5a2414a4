//! Navigation engine implementation

use std::sync::{Arc, Weak};

use ahash::AHashMap;
use parking_lot::RwLock;
use tracing::{debug, error, trace, warn};

use super::{Action, Component, Direction, FocusChange, FocusSubscriber, NavigationOutcome, Target};
use crate::settings::NavigatorSettings;
use crate::sink::{FocusSink, ScrollRequest};
use crate::NavigationError;

/// Navigation state stored internally
#[derive(Default)]
struct NavigationState {
    stack: Vec<String>,
    components: AHashMap<String, Component>,
    /// Bumped on every stack mutation
    generation: u64,
}

impl NavigationState {
    fn stack_mut(&mut self) -> &mut Vec<String> {
        self.generation = self.generation.wrapping_add(1);
        &mut self.stack
    }

    /// Target of `direction` on the component `current`, following at most one alias
    fn resolve_target(
        &self,
        current: &str,
        direction: Direction,
    ) -> Result<Option<Target>, NavigationError> {
        let component = self
            .components
            .get(current)
            .ok_or_else(|| NavigationError::UnknownComponent(current.to_string()))?;

        let Some(target) = component.target(direction) else {
            return Ok(None);
        };
        let Some(alias) = target.alias else {
            return Ok(Some(target.clone()));
        };

        let aliased = component
            .target(alias)
            .ok_or_else(|| NavigationError::AliasTargetMissing {
                component: current.to_string(),
                direction,
                alias,
            })?;
        if aliased.alias.is_some() {
            return Err(NavigationError::MultiLevelAlias {
                component: current.to_string(),
                direction,
            });
        }

        Ok(Some(aliased.clone()))
    }
}

/// The navigation stack machine
///
/// Owns the component registry and the navigation stack. The top of the
/// stack is the focused component. Share it as `Arc<NavigationEngine>`
/// between the input layer, the renderer and mounting components.
///
/// Internal locks are only held while reading or mutating the stack.
/// Computed targets, actions, subscribers and the focus sink all run
/// unlocked, so an action may call [`NavigationEngine::go`] recursively.
/// A transition whose stack changed while its target was being resolved
/// is abandoned as a no-op, so concurrent callers never apply a target to
/// the wrong top.
pub struct NavigationEngine {
    state: RwLock<NavigationState>,
    focused: RwLock<Option<String>>,
    subscribers: RwLock<Vec<Weak<dyn FocusSubscriber>>>,
    sink: RwLock<Option<Arc<dyn FocusSink>>>,
    settings: NavigatorSettings,
}

impl NavigationEngine {
    /// Create an engine with an empty stack and registry
    pub fn new() -> Self {
        Self::with_settings(NavigatorSettings::default())
    }

    /// Create an engine with explicit settings
    pub fn with_settings(settings: NavigatorSettings) -> Self {
        Self {
            state: RwLock::new(NavigationState::default()),
            focused: RwLock::new(None),
            subscribers: RwLock::new(Vec::new()),
            sink: RwLock::new(None),
            settings,
        }
    }

    pub fn settings(&self) -> NavigatorSettings {
        self.settings
    }

    /// Install the sink receiving focus, blur and scroll requests
    pub fn set_sink(&self, sink: Arc<dyn FocusSink>) {
        *self.sink.write() = Some(sink);
    }

    pub fn sink(&self) -> Option<Arc<dyn FocusSink>> {
        self.sink.read().clone()
    }

    /// Register a navigable component, replacing any previous one with the same id
    pub fn register(&self, id: impl Into<String>, component: Component) {
        let id = id.into();
        trace!(component = %id, "registered");
        self.state.write().components.insert(id, component);
    }

    /// Immediately set the navigation stack
    pub fn set(&self, stack: Vec<String>) {
        *self.state.write().stack_mut() = stack;
    }

    /// Immediately set the top of the navigation stack
    pub fn set_top(&self, id: impl Into<String>) {
        let mut state = self.state.write();
        let stack = state.stack_mut();
        stack.pop();
        stack.push(id.into());
    }

    /// Push onto the navigation stack, as if a component was just entered
    pub fn push(&self, id: impl Into<String>) {
        self.state.write().stack_mut().push(id.into());
    }

    /// Snapshot of the navigation stack, bottom first
    pub fn stack(&self) -> Vec<String> {
        self.state.read().stack.clone()
    }

    /// Current top of the stack
    pub fn top(&self) -> Option<String> {
        self.state.read().stack.last().cloned()
    }

    /// Last published focus
    pub fn focused(&self) -> Option<String> {
        self.focused.read().clone()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.read().as_deref() == Some(id)
    }

    /// Publish the current stack top as the focus.
    ///
    /// `set`, `set_top` and `push` do not notify anyone; call this after
    /// seeding or resetting the stack to bring observers up to date.
    pub fn sync_focus(&self) -> Option<String> {
        let top = self.top();
        self.publish(top.clone(), None);
        top
    }

    /// Add a subscriber. Only a weak reference is kept.
    pub fn add_subscriber(&self, subscriber: Arc<dyn FocusSubscriber>) {
        self.subscribers.write().push(Arc::downgrade(&subscriber));
    }

    /// Navigate in a given direction
    pub fn go(&self, direction: Direction) -> Result<NavigationOutcome, NavigationError> {
        let (current, target, generation) = {
            let state = self.state.read();
            let current = state.stack.last().cloned().ok_or(NavigationError::EmptyStack)?;
            let target = state.resolve_target(&current, direction)?;
            (current, target, state.generation)
        };

        let Some(target) = target else {
            trace!(component = %current, %direction, "no target");
            return Ok(NavigationOutcome::NoOp);
        };

        // The pushed id is known before the stack is touched, so a declined
        // computed target never leaves a partial mutation behind.
        let next = match &target.id {
            Some(id) => match id.resolve() {
                Some(next) => Some(next),
                None => {
                    trace!(component = %current, %direction, "computed target declined");
                    return Ok(NavigationOutcome::NoOp);
                }
            },
            None => None,
        };

        {
            let mut state = self.state.write();
            if state.generation != generation {
                debug!(component = %current, %direction, "stack changed while resolving, abandoned");
                return Ok(NavigationOutcome::NoOp);
            }
            if !target.keep && next.is_none() && state.stack.len() <= 1 {
                warn!(component = %current, %direction, "cannot leave the root component");
                return Ok(NavigationOutcome::NoOp);
            }

            let stack = state.stack_mut();
            if !target.keep {
                stack.pop();
            }
            if let Some(next) = &next {
                stack.push(next.clone());
            }
            debug!(
                from = %current,
                to = ?state.stack.last(),
                %direction,
                depth = state.stack.len(),
                "navigated"
            );
        }

        if let Some(action) = &target.action {
            action();
        }

        // Actions may have navigated on their own
        let top = self.top();
        self.publish(top.clone(), Some(direction));

        Ok(match top {
            Some(top) if top != current => NavigationOutcome::Moved(top),
            _ => NavigationOutcome::Stayed,
        })
    }

    /// Navigate in a given direction from a specific spot on the stack.
    ///
    /// Everything above the first occurrence of `id` is discarded first.
    /// Nothing happens if `id` is not on the stack.
    pub fn go_from(&self, id: &str, direction: Direction) -> Result<NavigationOutcome, NavigationError> {
        {
            let mut state = self.state.write();
            let Some(index) = state.stack.iter().position(|entry| entry == id) else {
                trace!(component = %id, %direction, "not on the stack");
                return Ok(NavigationOutcome::NoOp);
            };
            state.stack_mut().truncate(index + 1);
        }

        self.go(direction)
    }

    /// Convenience to create an action that calls `go_from`
    pub fn go_from_action(self: &Arc<Self>, id: impl Into<String>, direction: Direction) -> Action {
        let id = id.into();
        let engine = Arc::downgrade(self);
        Arc::new(move || {
            let Some(engine) = engine.upgrade() else {
                return;
            };
            if let Err(err) = engine.go_from(&id, direction) {
                error!(%err, from = %id, %direction, "navigation failed");
            }
        })
    }

    /// Enter target for a focusable input.
    ///
    /// Pushes `focus_id` above the current component and asks the sink to
    /// give it native focus.
    pub fn focus_enter(self: &Arc<Self>, focus_id: impl Into<String>) -> Target {
        let focus_id = focus_id.into();
        let engine = Arc::downgrade(self);
        Target::to(focus_id.clone()).keep().with_action(move || {
            if let Some(sink) = engine.upgrade().and_then(|engine| engine.sink()) {
                sink.focus(&focus_id);
            }
        })
    }

    /// Exit target for a focusable input
    pub fn focus_exit(self: &Arc<Self>, focus_id: impl Into<String>) -> Target {
        let focus_id = focus_id.into();
        let engine = Arc::downgrade(self);
        Target::pop().with_action(move || {
            if let Some(sink) = engine.upgrade().and_then(|engine| engine.sink()) {
                sink.blur(&focus_id);
            }
        })
    }

    /// Publish `top` as the focus if it differs from the last published one
    fn publish(&self, top: Option<String>, direction: Option<Direction>) {
        let change = {
            let mut focused = self.focused.write();
            if *focused == top {
                return;
            }
            let previous = std::mem::replace(&mut *focused, top.clone());
            match top {
                Some(current) => FocusChange {
                    previous,
                    current,
                    direction,
                },
                None => return,
            }
        };

        self.notify_subscribers(&change);
        self.request_scroll(&change.current);
    }

    /// Notify all subscribers of a focus change
    fn notify_subscribers(&self, change: &FocusChange) {
        let live: Vec<Arc<dyn FocusSubscriber>> = {
            let mut subscribers = self.subscribers.write();

            // Remove any dead weak references
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        for subscriber in live {
            subscriber.on_focus_change(change);
        }
    }

    fn request_scroll(&self, id: &str) {
        let scroll_to = self
            .state
            .read()
            .components
            .get(id)
            .and_then(|component| component.scroll_to.clone());

        let (Some(target), Some(sink)) = (scroll_to, self.sink()) else {
            return;
        };
        let request = ScrollRequest::new(target, self.settings.scroll_behavior, self.settings.scroll_block);
        trace!(selector = %request.selector, "scroll into view");
        sink.scroll_into_view(&request);
    }
}

impl Default for NavigationEngine {
    fn default() -> Self {
        Self::new()
    }
}

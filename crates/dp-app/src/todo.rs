//! Todo widget: a NavList of items followed by a text field for new ones

use std::sync::{Arc, Weak};

use dp_core::{focus_id, Component, Direction, NavList, NavListElement, NavigationEngine, Target};
use parking_lot::RwLock;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub text: String,
    pub done: bool,
}

impl TodoItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// State and navigation wiring of one todo widget
pub struct TodoWidget {
    /// Component id of the widget on its home page
    widget_id: String,
    items: RwLock<Vec<TodoItem>>,
    draft: RwLock<String>,
    engine: Weak<NavigationEngine>,
}

impl TodoWidget {
    pub fn new(engine: &Arc<NavigationEngine>, widget_id: impl Into<String>, items: Vec<TodoItem>) -> Arc<Self> {
        Arc::new(Self {
            widget_id: widget_id.into(),
            items: RwLock::new(items),
            draft: RwLock::new(String::new()),
            engine: Arc::downgrade(engine),
        })
    }

    pub fn widget_id(&self) -> &str {
        &self.widget_id
    }

    fn list(&self) -> NavList {
        let count = self.items.read().len();
        let mut elements = Vec::with_capacity(2);
        if count > 0 {
            elements.push(NavListElement::repeated("item", count));
        }
        elements.push(NavListElement::single("new"));
        NavList::new(format!("{}/list", self.widget_id), &elements)
    }

    pub fn item_id(&self, index: usize) -> String {
        self.list().id("item", Some(index))
    }

    /// Id of the "new item" row
    pub fn input_id(&self) -> String {
        self.list().id("new", None)
    }

    /// Id pushed while the text field has native focus
    pub fn input_focus_id(&self) -> String {
        focus_id(&self.input_id())
    }

    pub fn items(&self) -> Vec<TodoItem> {
        self.items.read().clone()
    }

    pub fn draft(&self) -> String {
        self.draft.read().clone()
    }

    /// Edit the text of the new item in place
    pub fn edit_draft(&self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.draft.write());
    }

    pub fn toggle(&self, index: usize) {
        if let Some(item) = self.items.write().get_mut(index) {
            item.done = !item.done;
        }
    }

    /// Turn the draft into a new item. Blank drafts are discarded.
    pub fn submit(self: &Arc<Self>) {
        let text = std::mem::take(&mut *self.draft.write());
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        debug!(widget = %self.widget_id, text, "todo added");
        self.items.write().push(TodoItem::new(text));
        self.register();
    }

    /// Enter target of the widget itself: descend into the first row
    pub fn enter_target(self: &Arc<Self>) -> Target {
        let todo = Arc::downgrade(self);
        Target::computed(move || {
            let todo = todo.upgrade()?;
            let list = todo.list();
            let first = list.ids().next().map(str::to_string);
            first
        })
        .keep()
    }

    /// (Re-)register every row. Called again whenever the items change.
    pub fn register(self: &Arc<Self>) {
        let Some(engine) = self.engine.upgrade() else {
            return;
        };
        let list = self.list();
        let leave_left = engine.go_from_action(self.widget_id.clone(), Direction::Left);

        let count = self.items.read().len();
        for index in 0..count {
            let entry = list.get("item", Some(index));
            let todo = Arc::downgrade(self);
            let component = entry
                .component()
                .left(Target::pop().keep().with_shared_action(leave_left.clone()))
                .enter(Target::action(move || {
                    if let Some(todo) = todo.upgrade() {
                        todo.toggle(index);
                    }
                }))
                .exit(Target::pop())
                .scroll_to(entry.id.clone());
            engine.register(entry.id, component);
        }

        let input = list.get("new", None);
        let focus = focus_id(&input.id);
        engine.register(
            input.id.clone(),
            input
                .component()
                .left(Target::pop().keep().with_shared_action(leave_left))
                .enter(engine.focus_enter(focus.clone()))
                .exit(Target::pop())
                .scroll_to(input.id.clone()),
        );

        // Leaving the text field commits whatever was typed
        let blur = engine.focus_exit(focus.clone());
        let todo = Arc::downgrade(self);
        let commit = Target::pop().with_action(move || {
            if let Some(todo) = todo.upgrade() {
                todo.submit();
            }
            if let Some(blur) = &blur.action {
                blur();
            }
        });
        engine.register(focus, Component::new().exit(commit).enter(Target::alias(Direction::Exit)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dp_core::NavigationOutcome;

    fn setup(items: Vec<TodoItem>) -> (Arc<NavigationEngine>, Arc<TodoWidget>) {
        let engine = Arc::new(NavigationEngine::new());
        let todo = TodoWidget::new(&engine, "home/0/todo", items);
        engine.register("home/0/clock", Component::new());
        engine.register(
            "home/0/todo",
            Component::new()
                .left(Target::to("home/0/clock"))
                .enter(todo.enter_target()),
        );
        todo.register();
        engine.set(vec!["home/0/todo".to_string()]);
        (engine, todo)
    }

    #[test]
    fn test_row_ids() {
        let (_engine, todo) = setup(vec![TodoItem::new("milk")]);
        assert_eq!(todo.item_id(0), "home/0/todo/list/item/0");
        assert_eq!(todo.input_id(), "home/0/todo/list/new");
        assert_eq!(todo.input_focus_id(), "home/0/todo/list/new:focus");
    }

    #[test]
    fn test_enter_walk_and_leave_list() {
        let (engine, todo) = setup(vec![TodoItem::new("milk"), TodoItem::new("eggs")]);

        engine.go(Direction::Enter).unwrap();
        assert_eq!(engine.top(), Some(todo.item_id(0)));

        engine.go(Direction::Down).unwrap();
        engine.go(Direction::Down).unwrap();
        assert_eq!(engine.top(), Some(todo.input_id()));
        assert_eq!(engine.go(Direction::Down).unwrap(), NavigationOutcome::NoOp);

        assert_eq!(
            engine.go(Direction::Left).unwrap(),
            NavigationOutcome::Moved("home/0/clock".to_string())
        );
        assert_eq!(engine.stack(), vec!["home/0/clock".to_string()]);
    }

    #[test]
    fn test_enter_toggles_item() {
        let (engine, todo) = setup(vec![TodoItem::new("milk")]);
        engine.go(Direction::Enter).unwrap();

        assert_eq!(engine.go(Direction::Enter).unwrap(), NavigationOutcome::Stayed);
        assert!(todo.items()[0].done);

        assert_eq!(
            engine.go(Direction::Exit).unwrap(),
            NavigationOutcome::Moved("home/0/todo".to_string())
        );
    }

    #[test]
    fn test_empty_list_enters_the_text_field_row() {
        let (engine, todo) = setup(Vec::new());
        engine.go(Direction::Enter).unwrap();
        assert_eq!(engine.top(), Some(todo.input_id()));
    }

    #[test]
    fn test_typing_and_committing_adds_an_item() {
        let (engine, todo) = setup(Vec::new());
        engine.go(Direction::Enter).unwrap();
        engine.go(Direction::Enter).unwrap();
        assert_eq!(engine.top(), Some(todo.input_focus_id()));

        todo.edit_draft(|draft| draft.push_str("  call mum "));
        // Enter is an alias of exit while typing
        engine.go(Direction::Enter).unwrap();

        assert_eq!(engine.top(), Some(todo.input_id()));
        assert_eq!(todo.items(), vec![TodoItem::new("call mum")]);
        assert!(todo.draft().is_empty());

        // The new item is wired above the text field
        engine.go(Direction::Up).unwrap();
        assert_eq!(engine.top(), Some(todo.item_id(0)));
    }

    #[test]
    fn test_blank_draft_is_discarded() {
        let (engine, todo) = setup(Vec::new());
        engine.go(Direction::Enter).unwrap();
        engine.go(Direction::Enter).unwrap();

        todo.edit_draft(|draft| draft.push_str("   "));
        engine.go(Direction::Exit).unwrap();
        assert!(todo.items().is_empty());
    }
}

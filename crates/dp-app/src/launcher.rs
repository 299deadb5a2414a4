//! Navigation graph of the launcher: page menu, home pages and their widgets

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use dp_core::{
    Direction, FocusChange, FocusSubscriber, Key, NavList, NavListElement, NavigationEngine,
    NavigationOutcome, RemoteControlEvent, Target,
};
use dp_layout::{first_focus, page_components, widget_id, with_fallback, LayoutConfig, WidgetKind};
use parking_lot::RwLock;
use tracing::{debug, error, info};

use crate::todo::{TodoItem, TodoWidget};

const MENU_PREFIX: &str = "menu";

/// Keeps the visible page in sync with wherever focus lands
struct PageTracker {
    page: Arc<AtomicUsize>,
}

impl FocusSubscriber for PageTracker {
    fn on_focus_change(&self, change: &FocusChange) {
        if let Some(page) = page_of(&change.current) {
            if self.page.swap(page, Ordering::SeqCst) != page {
                debug!(page, "page changed");
            }
        }
    }
}

/// Page index encoded in a home widget or menu id
fn page_of(id: &str) -> Option<usize> {
    let rest = id
        .strip_prefix("home/")
        .or_else(|| id.strip_prefix("menu/page/"))?;
    rest.split(['/', ':']).next()?.parse().ok()
}

/// The launcher's components and the state behind them
pub struct Launcher {
    engine: Arc<NavigationEngine>,
    layout: LayoutConfig,
    menu: NavList,
    page: Arc<AtomicUsize>,
    todos: Vec<Arc<TodoWidget>>,
    playing: Arc<AtomicBool>,
    last_error: RwLock<Option<String>>,
    _tracker: Arc<PageTracker>,
}

impl Launcher {
    /// Register every component of `layout` and focus the first widget
    pub fn new(engine: Arc<NavigationEngine>, layout: LayoutConfig) -> Self {
        let page = Arc::new(AtomicUsize::new(0));
        let tracker = Arc::new(PageTracker { page: page.clone() });
        engine.add_subscriber(tracker.clone());

        let menu = NavList::new(MENU_PREFIX, &[NavListElement::repeated("page", layout.pages.len())]);

        let mut launcher = Self {
            engine,
            layout,
            menu,
            page,
            todos: Vec::new(),
            playing: Arc::new(AtomicBool::new(false)),
            last_error: RwLock::new(None),
            _tracker: tracker,
        };
        launcher.register_menu();
        launcher.register_pages();
        launcher.seed();
        launcher
    }

    pub fn engine(&self) -> &Arc<NavigationEngine> {
        &self.engine
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Index of the page on screen
    pub fn page(&self) -> usize {
        self.page.load(Ordering::SeqCst)
    }

    pub fn menu_id(&self, page: usize) -> String {
        self.menu.id("page", Some(page))
    }

    pub fn todo(&self, widget_id: &str) -> Option<&Arc<TodoWidget>> {
        self.todos.iter().find(|todo| todo.widget_id() == widget_id)
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().clone()
    }

    fn first_widget(&self, page: usize) -> Option<String> {
        let home = self.layout.pages.get(page)?;
        first_focus(home).map(|index| widget_id(page, &home.widgets[index].name))
    }

    fn register_menu(&self) {
        for page in 0..self.layout.pages.len() {
            let entry = self.menu.get("page", Some(page));
            let mut component = entry.component().scroll_to(entry.id.clone());
            if let Some(first) = self.first_widget(page) {
                component = component
                    .right(Target::to(first.clone()))
                    .enter(Target::alias(Direction::Right));
            }
            self.engine.register(entry.id, component);
        }
    }

    fn register_pages(&mut self) {
        for (page_index, page) in self.layout.pages.iter().enumerate() {
            let menu_id = self.menu.id("page", Some(page_index));
            let components = page_components(page_index, page);
            info!(page = page_index, widgets = components.len(), "registering page");

            for ((id, component), widget) in components.into_iter().zip(&page.widgets) {
                let mut component = with_fallback(component, Direction::Left, menu_id.clone())
                    .exit(Target::to(menu_id.clone()));

                match widget.kind {
                    WidgetKind::Todo => {
                        let todo = TodoWidget::new(
                            &self.engine,
                            id.clone(),
                            vec![TodoItem::new("Water the plants"), TodoItem::new("Charge the remote")],
                        );
                        todo.register();
                        component = component.enter(todo.enter_target());
                        self.todos.push(todo);
                    }
                    WidgetKind::Player => {
                        let playing = self.playing.clone();
                        component = component.enter(Target::action(move || {
                            playing.fetch_xor(true, Ordering::SeqCst);
                        }));
                    }
                    WidgetKind::Clock | WidgetKind::Weather | WidgetKind::AudioVisualizer => {}
                }

                self.engine.register(id, component);
            }
        }
    }

    /// Put focus on the first widget of the first page, or on the menu
    fn seed(&self) {
        let start = self.first_widget(0).or_else(|| self.menu.ids().next().map(str::to_string));
        if let Some(start) = start {
            self.engine.set(vec![start]);
            self.engine.sync_focus();
        }
    }

    /// Move focus, recording failures for the status bar
    pub fn navigate(&self, direction: Direction) -> Option<NavigationOutcome> {
        self.record(self.engine.go(direction))
    }

    fn record(
        &self,
        result: Result<NavigationOutcome, dp_core::NavigationError>,
    ) -> Option<NavigationOutcome> {
        match result {
            Ok(outcome) => {
                if let Some(focused) = outcome.focused() {
                    debug!(focused, "focus moved");
                }
                *self.last_error.write() = None;
                Some(outcome)
            }
            Err(err) => {
                error!(%err, stack = ?self.engine.stack(), "navigation failed");
                *self.last_error.write() = Some(err.to_string());
                None
            }
        }
    }

    /// Todo widget whose text field currently has focus
    fn editing(&self) -> Option<&Arc<TodoWidget>> {
        let top = self.engine.top()?;
        self.todos.iter().find(|todo| todo.input_focus_id() == top)
    }

    /// Apply an event from a remote control
    pub fn handle_remote(&self, event: &RemoteControlEvent) {
        match event {
            RemoteControlEvent::DPad(_) => {
                if let Some(result) = event.dispatch(&self.engine) {
                    self.record(result);
                }
            }
            RemoteControlEvent::Text(text) => match self.editing() {
                Some(todo) => todo.edit_draft(|draft| draft.push_str(text)),
                None => debug!(text, "text ignored outside a text field"),
            },
            RemoteControlEvent::Keyboard(Key::Backspace) => match self.editing() {
                Some(todo) => todo.edit_draft(|draft| {
                    draft.pop();
                }),
                None => {
                    self.navigate(Direction::Exit);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launcher() -> Launcher {
        Launcher::new(Arc::new(NavigationEngine::new()), LayoutConfig::default())
    }

    #[test]
    fn test_page_of() {
        assert_eq!(page_of("home/1/player"), Some(1));
        assert_eq!(page_of("home/0/todo/list/new:focus"), Some(0));
        assert_eq!(page_of("menu/page/2"), Some(2));
        assert_eq!(page_of("settings"), None);
    }

    #[test]
    fn test_starts_on_first_widget() {
        let launcher = launcher();
        assert_eq!(launcher.engine().stack(), vec!["home/0/clock".to_string()]);
        assert!(launcher.engine().is_focused("home/0/clock"));
        assert_eq!(launcher.page(), 0);
    }

    #[test]
    fn test_menu_switches_pages() {
        let launcher = launcher();

        launcher.navigate(Direction::Left);
        assert_eq!(launcher.engine().top().as_deref(), Some("menu/page/0"));

        launcher.navigate(Direction::Down);
        assert_eq!(launcher.page(), 1);

        assert_eq!(
            launcher.navigate(Direction::Enter),
            Some(NavigationOutcome::Moved("home/1/player".to_string()))
        );
        assert_eq!(launcher.page(), 1);
    }

    #[test]
    fn test_exit_returns_to_menu_of_page() {
        let launcher = launcher();
        launcher.navigate(Direction::Right);
        launcher.navigate(Direction::Exit);
        assert_eq!(launcher.engine().top(), Some(launcher.menu_id(0)));
    }

    #[test]
    fn test_player_toggles_in_place() {
        let launcher = launcher();
        launcher.engine().set(vec![widget_id(1, "player")]);

        assert_eq!(launcher.navigate(Direction::Enter), Some(NavigationOutcome::Stayed));
        assert!(launcher.is_playing());
        launcher.navigate(Direction::Enter);
        assert!(!launcher.is_playing());
    }

    #[test]
    fn test_remote_text_goes_to_focused_field() {
        let launcher = launcher();
        let todo = launcher.todo("home/0/todo").unwrap().clone();
        launcher.engine().set(vec![
            "home/0/todo".to_string(),
            todo.input_id(),
            todo.input_focus_id(),
        ]);

        launcher.handle_remote(&RemoteControlEvent::Text("tea".to_string()));
        launcher.handle_remote(&RemoteControlEvent::Keyboard(Key::Backspace));
        assert_eq!(todo.draft(), "te");

        launcher.handle_remote(&RemoteControlEvent::DPad(Direction::Enter));
        assert_eq!(todo.items().last().map(|item| item.text.as_str()), Some("te"));
        assert_eq!(launcher.engine().top(), Some(todo.input_id()));
    }

    #[test]
    fn test_backspace_outside_text_field_exits() {
        let launcher = launcher();
        launcher.handle_remote(&RemoteControlEvent::Keyboard(Key::Backspace));
        assert_eq!(launcher.engine().top(), Some(launcher.menu_id(0)));
    }

    #[test]
    fn test_errors_are_recorded() {
        let launcher = launcher();
        launcher.engine().set(vec!["nowhere".to_string()]);

        assert_eq!(launcher.navigate(Direction::Up), None);
        assert!(launcher.last_error().unwrap().contains("nowhere"));
    }
}

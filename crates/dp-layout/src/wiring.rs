//! Wiring layout pages into the navigation engine

use std::sync::Arc;

use dp_core::{Component, Direction, NavigationEngine, Target, TargetId};
use tracing::debug;

use crate::config::HomePage;
use crate::geometry::WidgetRect;
use crate::neighbor::neighbor_index;

const SPATIAL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

/// Component id of a widget on a home page
pub fn widget_id(page: usize, name: &str) -> String {
    format!("home/{}/{}", page, name)
}

/// Components for every widget on a page, in page order.
///
/// Each component resolves its up/down/left/right targets geometrically at
/// navigation time and scrolls its own id into view. Callers may add
/// enter/exit targets before registering them.
pub fn page_components(page_index: usize, page: &HomePage) -> Vec<(String, Component)> {
    let ids: Arc<[String]> = page
        .widgets
        .iter()
        .map(|widget| widget_id(page_index, &widget.name))
        .collect();
    let rects: Arc<[WidgetRect]> = page.widgets.iter().map(|widget| widget.coords).collect();

    (0..ids.len())
        .map(|index| {
            let mut component = Component::new().scroll_to(ids[index].clone());
            for direction in SPATIAL {
                let ids = Arc::clone(&ids);
                let rects = Arc::clone(&rects);
                component = component.with(
                    direction,
                    Target::computed(move || {
                        neighbor_index(&rects[index], &rects, direction).map(|found| ids[found].clone())
                    }),
                );
            }
            (ids[index].clone(), component)
        })
        .collect()
}

/// Register every widget of a page. Returns the registered ids in page order.
pub fn register_page(engine: &NavigationEngine, page_index: usize, page: &HomePage) -> Vec<String> {
    let components = page_components(page_index, page);
    debug!(page = page_index, widgets = components.len(), "registering page");

    components
        .into_iter()
        .map(|(id, component)| {
            engine.register(id.clone(), component);
            id
        })
        .collect()
}

/// Builder: when `direction` resolves to nothing, move to `fallback` instead.
///
/// Keeps the existing target's keep flag and action. Used to leave a page
/// from its edge widgets, e.g. towards a menu.
pub fn with_fallback(component: Component, direction: Direction, fallback: impl Into<String>) -> Component {
    let fallback = fallback.into();
    let existing = component.target(direction).cloned().unwrap_or_default();
    let inner: Option<TargetId> = existing.id.clone();

    let target = Target {
        id: Some(TargetId::Computed(Arc::new(move || {
            inner
                .as_ref()
                .and_then(TargetId::resolve)
                .or_else(|| Some(fallback.clone()))
        }))),
        ..existing
    };
    component.with(direction, target)
}

/// Index of the top-left-most widget, used to seed focus on a page
pub fn first_focus(page: &HomePage) -> Option<usize> {
    page.widgets
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (a.coords.y, a.coords.x)
                .partial_cmp(&(b.coords.y, b.coords.x))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(index, _)| index)
}

//! Ordered lists of navigable elements
//!
//! A [`NavList`] names the elements of a vertical list once and hands out
//! their ids together with their up/down neighbours, so list items can be
//! registered without wiring every target by hand.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::navigation::{Component, Target};

/// One named element of a list, optionally repeated `count` times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavListElement {
    pub name: String,
    #[serde(default)]
    pub count: Option<usize>,
}

impl NavListElement {
    /// A single element
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: None,
        }
    }

    /// An element repeated `count` times
    pub fn repeated(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count: Some(count),
        }
    }
}

/// Id of a list element and its neighbours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavListEntry {
    pub id: String,
    pub up: Option<String>,
    pub down: Option<String>,
}

impl NavListEntry {
    /// Component moving up/down to the neighbours of this entry
    pub fn component(&self) -> Component {
        let mut component = Component::new();
        if let Some(up) = &self.up {
            component = component.up(Target::to(up.clone()));
        }
        if let Some(down) = &self.down {
            component = component.down(Target::to(down.clone()));
        }
        component
    }
}

/// Utility to create and reference a list of elements that navigate together
///
/// ```
/// use dp_core::{NavList, NavListElement};
///
/// let list = NavList::new("myList", &[
///     NavListElement::single("foo"),
///     NavListElement::repeated("bar", 3),
///     NavListElement::single("baz"),
/// ]);
///
/// // myList/foo, myList/bar/0, myList/bar/1, myList/bar/2, myList/baz
/// assert_eq!(list.len(), 5);
/// assert_eq!(list.get("bar", Some(0)).up.as_deref(), Some("myList/foo"));
/// ```
#[derive(Debug, Clone)]
pub struct NavList {
    prefix: String,
    /// Element ids with `None` sentinels at both ends
    list: Vec<Option<String>>,
    /// First position of each id in `list`
    positions: AHashMap<String, usize>,
}

impl NavList {
    /// Build the list. Elements with a zero count expand to a single id.
    pub fn new(prefix: impl Into<String>, elements: &[NavListElement]) -> Self {
        let prefix = prefix.into();
        let mut list = vec![None];

        for element in elements {
            match element.count {
                Some(count) if count > 0 => {
                    for index in 0..count {
                        list.push(Some(element_id(&prefix, &element.name, Some(index))));
                    }
                }
                _ => list.push(Some(element_id(&prefix, &element.name, None))),
            }
        }

        list.push(None);

        let mut positions = AHashMap::with_capacity(list.len());
        for (position, id) in list.iter().enumerate() {
            if let Some(id) = id {
                positions.entry(id.clone()).or_insert(position);
            }
        }

        Self {
            prefix,
            list,
            positions,
        }
    }

    /// Id of an element, whether or not it is part of the list
    pub fn id(&self, name: &str, index: Option<usize>) -> String {
        element_id(&self.prefix, name, index)
    }

    /// Get the id, and prev/next (up/down) elements from the list.
    ///
    /// Unknown elements get no neighbours.
    pub fn get(&self, name: &str, index: Option<usize>) -> NavListEntry {
        let id = self.id(name, index);
        let (up, down) = match self.positions.get(&id) {
            Some(&position) => (self.list[position - 1].clone(), self.list[position + 1].clone()),
            None => (None, None),
        };

        NavListEntry { id, up, down }
    }

    /// All element ids in list order
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.list.iter().filter_map(|id| id.as_deref())
    }

    /// Number of element ids
    pub fn len(&self) -> usize {
        self.list.len() - 2
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn element_id(prefix: &str, name: &str, index: Option<usize>) -> String {
    match index {
        Some(index) => format!("{}/{}/{}", prefix, name, index),
        None => format!("{}/{}", prefix, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Direction, TargetId};

    fn sample() -> NavList {
        NavList::new(
            "l",
            &[NavListElement::single("a"), NavListElement::repeated("b", 2)],
        )
    }

    #[test]
    fn test_boundaries() {
        let list = sample();

        let first = list.get("a", None);
        assert_eq!(first.id, "l/a");
        assert_eq!(first.up, None);
        assert_eq!(first.down.as_deref(), Some("l/b/0"));

        let last = list.get("b", Some(1));
        assert_eq!(last.up.as_deref(), Some("l/b/0"));
        assert_eq!(last.down, None);
    }

    #[test]
    fn test_zero_count_expands_to_single_id() {
        let list = NavList::new("l", &[NavListElement::repeated("x", 0)]);
        assert_eq!(list.ids().collect::<Vec<_>>(), vec!["l/x"]);
    }

    #[test]
    fn test_unknown_element_has_no_neighbours() {
        let entry = sample().get("missing", None);
        assert_eq!(entry.id, "l/missing");
        assert_eq!(entry.up, None);
        assert_eq!(entry.down, None);
    }

    #[test]
    fn test_repeated_name_resolves_to_first_occurrence() {
        let list = NavList::new(
            "l",
            &[
                NavListElement::single("a"),
                NavListElement::single("b"),
                NavListElement::single("a"),
            ],
        );
        let entry = list.get("a", None);
        assert_eq!(entry.up, None);
        assert_eq!(entry.down.as_deref(), Some("l/b"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_entry_component_wires_neighbours() {
        let component = sample().get("b", Some(0)).component();

        let up = component.target(Direction::Up).and_then(|t| t.id.clone());
        assert!(matches!(up, Some(TargetId::Literal(id)) if id == "l/a"));
        let down = component.target(Direction::Down).and_then(|t| t.id.clone());
        assert!(matches!(down, Some(TargetId::Literal(id)) if id == "l/b/1"));
    }

    #[test]
    fn test_elements_deserialize_without_count() {
        let elements: Vec<NavListElement> =
            serde_json::from_str(r#"[{ "name": "foo" }, { "name": "bar", "count": 3 }]"#).unwrap();
        assert_eq!(elements[0], NavListElement::single("foo"));
        assert_eq!(NavList::new("p", &elements).len(), 4);
    }
}

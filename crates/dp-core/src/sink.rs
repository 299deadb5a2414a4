//! Native focus and scrolling capability injected by the rendering layer

use crate::settings::{ScrollBehavior, ScrollBlock};

/// Escape a component id for use as a selector.
///
/// Ids are `/`-namespaced and focus ids carry a `:focus` suffix, both of
/// which are selector syntax.
pub fn escape_selector(selector: &str) -> String {
    selector.replace('/', "\\/").replace(':', "\\:")
}

/// Request to bring a focused component into view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Unescaped selector as declared on the component
    pub target: String,
    /// Escaped selector
    pub selector: String,
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollRequest {
    /// Build a request for `target`, escaping it into a selector
    pub fn new(target: impl Into<String>, behavior: ScrollBehavior, block: ScrollBlock) -> Self {
        let target = target.into();
        Self {
            selector: escape_selector(&target),
            target,
            behavior,
            block,
        }
    }
}

/// Side effects the engine asks of the host UI
pub trait FocusSink: Send + Sync {
    /// Give native input focus to the element with `id`
    fn focus(&self, id: &str);

    /// Remove native input focus from the element with `id`
    fn blur(&self, id: &str);

    /// Scroll the requested element into view
    fn scroll_into_view(&self, request: &ScrollRequest);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_selector() {
        assert_eq!(escape_selector("list/item/3"), "list\\/item\\/3");
        assert_eq!(escape_selector("todo/new:focus"), "todo\\/new\\:focus");
        assert_eq!(escape_selector("#plain"), "#plain");
    }

    #[test]
    fn test_scroll_request_keeps_raw_target() {
        let request = ScrollRequest::new("home/0/todo", ScrollBehavior::Smooth, ScrollBlock::Center);
        assert_eq!(request.target, "home/0/todo");
        assert_eq!(request.selector, "home\\/0\\/todo");
    }
}

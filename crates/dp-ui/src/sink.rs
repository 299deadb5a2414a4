//! Focus sink delivering engine requests to egui widgets
//!
//! The engine emits focus, blur and scroll requests from whatever thread
//! navigates. egui widgets can only act on them while being laid out, so
//! requests are parked here until the widget with the matching id claims
//! them on its next frame.

use dp_core::{FocusSink, ScrollBlock, ScrollRequest};
use egui::{Align, Context, Response};
use parking_lot::Mutex;
use tracing::trace;

#[derive(Debug, Default)]
struct PendingRequests {
    focus: Option<String>,
    blur: Option<String>,
    scroll: Option<ScrollRequest>,
}

/// [`FocusSink`] for egui
#[derive(Default)]
pub struct EguiFocusSink {
    pending: Mutex<PendingRequests>,
    ctx: Option<Context>,
}

impl EguiFocusSink {
    /// Create a sink that repaints `ctx` whenever a request arrives
    pub fn new(ctx: Context) -> Self {
        Self {
            pending: Mutex::new(PendingRequests::default()),
            ctx: Some(ctx),
        }
    }

    /// Claim a pending focus request for `id`
    pub fn take_focus(&self, id: &str) -> bool {
        let mut pending = self.pending.lock();
        if pending.focus.as_deref() == Some(id) {
            pending.focus = None;
            true
        } else {
            false
        }
    }

    /// Claim a pending blur request for `id`
    pub fn take_blur(&self, id: &str) -> bool {
        let mut pending = self.pending.lock();
        if pending.blur.as_deref() == Some(id) {
            pending.blur = None;
            true
        } else {
            false
        }
    }

    /// Claim a pending scroll request targeting `id`
    pub fn take_scroll(&self, id: &str) -> Option<ScrollRequest> {
        let mut pending = self.pending.lock();
        match &pending.scroll {
            Some(request) if request.target == id => pending.scroll.take(),
            _ => None,
        }
    }

    /// Apply every request pending for `id` to the widget's response
    pub fn apply(&self, id: &str, response: &Response) {
        if self.take_focus(id) {
            response.request_focus();
        }
        if self.take_blur(id) {
            response.surrender_focus();
        }
        if let Some(request) = self.take_scroll(id) {
            // egui 0.24 has no animated scrolling, so the behavior is ignored
            response.scroll_to_me(align(request.block));
        }
    }

    fn repaint(&self) {
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

/// egui alignment for a scroll block; `None` scrolls the least amount
fn align(block: ScrollBlock) -> Option<Align> {
    match block {
        ScrollBlock::Start => Some(Align::Min),
        ScrollBlock::Center => Some(Align::Center),
        ScrollBlock::End => Some(Align::Max),
        ScrollBlock::Nearest => None,
    }
}

impl FocusSink for EguiFocusSink {
    fn focus(&self, id: &str) {
        trace!(id, "focus requested");
        {
            let mut pending = self.pending.lock();
            pending.focus = Some(id.to_string());
            if pending.blur.as_deref() == Some(id) {
                pending.blur = None;
            }
        }
        self.repaint();
    }

    fn blur(&self, id: &str) {
        trace!(id, "blur requested");
        {
            let mut pending = self.pending.lock();
            pending.blur = Some(id.to_string());
            if pending.focus.as_deref() == Some(id) {
                pending.focus = None;
            }
        }
        self.repaint();
    }

    fn scroll_into_view(&self, request: &ScrollRequest) {
        self.pending.lock().scroll = Some(request.clone());
        self.repaint();
    }
}

//! Helpers tying egui widgets to navigation component ids

use egui::{Frame, Id, InnerResponse, Stroke, Ui};

use crate::sink::EguiFocusSink;
use crate::theme::focus_stroke;

/// egui id of the widget rendering navigation component `nav_id`.
///
/// Namespaced so component ids never collide with ids egui derives itself.
pub fn egui_id(nav_id: &str) -> Id {
    Id::new(("dp-nav", nav_id))
}

/// Draw `add_contents` in a frame that shows a focus ring when `focused`,
/// then hand the frame any focus, blur or scroll request pending for `nav_id`.
pub fn focus_frame<R>(
    ui: &mut Ui,
    nav_id: &str,
    focused: bool,
    sink: &EguiFocusSink,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    let stroke = if focused {
        focus_stroke()
    } else {
        Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
    };

    let inner = Frame::group(ui.style()).stroke(stroke).show(ui, add_contents);
    sink.apply(nav_id, &inner.response);
    inner
}

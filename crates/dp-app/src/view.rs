//! Rendering of the launcher panels

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, Timelike};
use dp_core::NavigationEngine;
use dp_layout::{widget_id, WidgetConfig, WidgetKind, XAlign};
use dp_ui::theme::{accent_color, error_color, muted_color};
use dp_ui::{egui_id, focus_frame, EguiFocusSink};
use egui::{pos2, vec2, Align, Layout, Rect, RichText, Sense, TextEdit, Ui};

use crate::launcher::Launcher;
use crate::todo::TodoWidget;

fn x_align(align: Option<XAlign>) -> Align {
    match align {
        Some(XAlign::Center) => Align::Center,
        Some(XAlign::Right) => Align::Max,
        Some(XAlign::Left) | None => Align::Min,
    }
}

pub fn greeting(ui: &mut Ui, name: &str) {
    let part_of_day = match Local::now().hour() {
        5..=11 => "morning",
        12..=17 => "afternoon",
        _ => "evening",
    };
    ui.heading(format!("Good {}, {}", part_of_day, name));
}

/// Page list shown beside the home page
pub fn menu(ui: &mut Ui, launcher: &Launcher, sink: &EguiFocusSink) {
    for page in 0..launcher.layout().pages.len() {
        let id = launcher.menu_id(page);
        let focused = launcher.engine().is_focused(&id);
        focus_frame(ui, &id, focused, sink, |ui| {
            ui.set_min_width(ui.available_width());
            let text = RichText::new(format!("Page {}", page + 1));
            ui.label(if page == launcher.page() { text.strong() } else { text });
        });
    }
}

/// Widgets of the visible page, placed on a grid scaled to the panel
pub fn home_page(ui: &mut Ui, launcher: &Launcher, sink: &EguiFocusSink) {
    let page_index = launcher.page();
    let Some(page) = launcher.layout().pages.get(page_index) else {
        ui.label("No pages configured");
        return;
    };

    let (cols, rows) = page.extent();
    if cols <= 0.0 || rows <= 0.0 {
        ui.label("This page is empty");
        return;
    }

    let area = ui.available_rect_before_wrap();
    let cell = (area.width() / cols).min(area.height() / rows);

    for widget in &page.widgets {
        let coords = widget.coords;
        let rect = Rect::from_min_size(
            area.min + vec2(coords.x * cell, coords.y * cell),
            vec2(coords.w * cell, coords.h * cell),
        )
        .shrink(6.0);
        let id = widget_id(page_index, &widget.name);
        let focused = launcher.engine().is_focused(&id);

        ui.allocate_ui_at_rect(rect, |ui| {
            focus_frame(ui, &id, focused, sink, |ui| {
                ui.set_min_size(ui.available_size());
                ui.with_layout(Layout::top_down(x_align(widget.x_align)), |ui| {
                    widget_contents(ui, launcher, sink, widget, &id);
                });
            });
        });
    }
}

fn widget_contents(ui: &mut Ui, launcher: &Launcher, sink: &EguiFocusSink, widget: &WidgetConfig, id: &str) {
    match widget.kind {
        WidgetKind::Clock => {
            ui.label(RichText::new(Local::now().format("%H:%M").to_string()).size(64.0));
            ui.label(Local::now().format("%A %-d %B").to_string());
            ui.ctx().request_repaint_after(Duration::from_secs(1));
        }
        WidgetKind::Weather => {
            ui.heading("Weather");
            ui.label(RichText::new("No forecast available").color(muted_color()));
        }
        WidgetKind::Todo => match launcher.todo(id) {
            Some(todo) => todo_list(ui, todo, launcher.engine(), sink),
            None => {
                ui.label("Todo list unavailable");
            }
        },
        WidgetKind::AudioVisualizer => visualizer(ui, launcher.is_playing()),
        WidgetKind::Player => {
            ui.heading("Player");
            ui.label(if launcher.is_playing() { "Playing" } else { "Paused" });
        }
    }
}

fn todo_list(ui: &mut Ui, todo: &Arc<TodoWidget>, engine: &NavigationEngine, sink: &EguiFocusSink) {
    ui.heading("Todo");
    egui::ScrollArea::vertical()
        .id_source(egui_id(todo.widget_id()))
        .show(ui, |ui| {
            for (index, item) in todo.items().iter().enumerate() {
                let id = todo.item_id(index);
                focus_frame(ui, &id, engine.is_focused(&id), sink, |ui| {
                    let text = RichText::new(&item.text);
                    ui.label(if item.done {
                        text.strikethrough().color(muted_color())
                    } else {
                        text
                    });
                });
            }

            let input = todo.input_id();
            let focus = todo.input_focus_id();
            let focused = engine.is_focused(&input) || engine.is_focused(&focus);
            focus_frame(ui, &input, focused, sink, |ui| {
                let mut draft = todo.draft();
                let response = ui.add(
                    TextEdit::singleline(&mut draft)
                        .id(egui_id(&focus))
                        .hint_text("New item"),
                );
                if response.changed() {
                    todo.edit_draft(|current| *current = draft);
                }
                sink.apply(&focus, &response);
            });
        });
}

fn visualizer(ui: &mut Ui, playing: bool) {
    const BARS: usize = 24;

    let (rect, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let time = ui.input(|input| input.time) as f32;
    let width = rect.width() / BARS as f32;

    for bar in 0..BARS {
        let level = if playing {
            0.5 + 0.45 * (time * 3.0 + bar as f32 * 0.7).sin()
        } else {
            0.05
        };
        let left = rect.left() + bar as f32 * width;
        let bar_rect = Rect::from_min_max(
            pos2(left + 1.0, rect.bottom() - rect.height() * level),
            pos2(left + width - 1.0, rect.bottom()),
        );
        ui.painter().rect_filled(bar_rect, 2.0, accent_color());
    }

    if playing {
        ui.ctx().request_repaint();
    }
}

/// Navigation stack and the last navigation error
pub fn status_bar(ui: &mut Ui, launcher: &Launcher) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(launcher.engine().stack().join(" › ")).color(muted_color()));
        if let Some(err) = launcher.last_error() {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(err).color(error_color()));
            });
        }
    });
}

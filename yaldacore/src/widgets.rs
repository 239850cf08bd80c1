//! Custom widgets for yaldaEdit dialogs and panels.

use crate::theme::YaldaColors;
use egui::{Response, Ui, Widget};

/// Status bar: white bg, 1px purple border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(YaldaColors::WHITE)
        .stroke(egui::Stroke::new(1.0, YaldaColors::PURPLE))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}

/// A solid purple button with white text, used for the encouragement and
/// confetti controls.
pub struct AccentButton<'a> {
    text: &'a str,
}

impl<'a> AccentButton<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl<'a> Widget for AccentButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let padding = egui::vec2(16.0, 4.0);
        let text_width = ui.fonts(|f| {
            f.glyph_width(&egui::FontId::proportional(14.0), ' ') * self.text.len() as f32
        });
        let desired_size = egui::vec2(text_width + padding.x * 2.0, ui.spacing().interact_size.y);
        let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let pressed = response.is_pointer_button_down_on();
            let fill = if pressed {
                YaldaColors::BLACK
            } else {
                YaldaColors::PURPLE
            };
            painter.rect_filled(rect, 0.0, fill);
            if response.hovered() && !pressed {
                painter.rect_stroke(rect, 0.0, egui::Stroke::new(2.0, YaldaColors::BLACK));
            }
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                egui::FontId::proportional(14.0),
                YaldaColors::WHITE,
            );
        }

        response
    }
}

/// File list item for the open/save dialogs.
pub struct FileListItem<'a> {
    name: &'a str,
    is_directory: bool,
    selected: bool,
}

impl<'a> FileListItem<'a> {
    pub fn new(name: &'a str, is_directory: bool) -> Self {
        Self {
            name,
            is_directory,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for FileListItem<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let height = 20.0;
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), height),
            egui::Sense::click(),
        );

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            let text_color = if self.selected {
                painter.rect_filled(rect, 0.0, YaldaColors::PURPLE);
                YaldaColors::WHITE
            } else if response.hovered() {
                painter.rect_filled(rect, 0.0, YaldaColors::LIGHT_PURPLE);
                YaldaColors::PURPLE
            } else {
                painter.rect_filled(rect, 0.0, YaldaColors::WHITE);
                YaldaColors::PURPLE
            };

            let icon = if self.is_directory { "📁" } else { "📄" };
            let icon_rect = egui::Rect::from_min_size(
                rect.min + egui::vec2(4.0, 0.0),
                egui::vec2(16.0, height),
            );
            painter.text(
                icon_rect.center(),
                egui::Align2::CENTER_CENTER,
                icon,
                egui::FontId::proportional(12.0),
                text_color,
            );
            painter.text(
                egui::pos2(rect.min.x + 24.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                self.name,
                egui::FontId::proportional(12.0),
                text_color,
            );
        }

        response
    }
}

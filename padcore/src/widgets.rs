//! Custom widgets — pure black and white, selection drawn inverted

use crate::theme::PadColors;
use egui::{Response, Ui, Widget};

/// Status bar: white bg, 1px black border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(PadColors::WHITE)
        .stroke(egui::Stroke::new(1.0, PadColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}

/// One line of a keyboard shortcut table.
pub fn shortcut_row(ui: &mut Ui, shortcut: &str, description: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(shortcut).monospace().strong());
        ui.add_space(20.0);
        ui.label(description);
    });
}

/// File list item for open/save dialogs.
/// Selected items are drawn white on black.
pub struct FileListItem<'a> {
    name: &'a str,
    is_directory: bool,
    selected: bool,
}

impl<'a> FileListItem<'a> {
    pub fn new(name: &'a str, is_directory: bool) -> Self {
        Self { name, is_directory, selected: false }
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

            let (fill, text_color) = if self.selected {
                (PadColors::BLACK, PadColors::WHITE)
            } else {
                (PadColors::WHITE, PadColors::BLACK)
            };
            painter.rect_filled(rect, 0.0, fill);
            if response.hovered() && !self.selected {
                painter.rect_stroke(rect.shrink(0.5), 0.0, egui::Stroke::new(1.0, PadColors::BLACK));
            }

            let marker = if self.is_directory { "▸" } else { " " };
            painter.text(
                egui::pos2(rect.min.x + 8.0, rect.center().y),
                egui::Align2::CENTER_CENTER,
                marker,
                egui::FontId::proportional(12.0),
                text_color,
            );

            let label = if self.is_directory {
                format!("{}/", self.name)
            } else {
                self.name.to_string()
            };
            painter.text(
                egui::pos2(rect.min.x + 20.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                label,
                egui::FontId::proportional(12.0),
                text_color,
            );
        }

        response
    }
}

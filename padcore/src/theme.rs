//! slowPad theme
//!
//! Pure black and white. No grays. 1px black outlines, square corners.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Only two colors exist on this machine.
pub struct PadColors;

impl PadColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration for the editor window
pub struct PadTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for PadTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 20.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl PadTheme {
    /// Apply the theme to an egui context. Uses egui's bundled fonts.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();

        visuals.window_fill = PadColors::WHITE;
        visuals.panel_fill = PadColors::WHITE;
        visuals.faint_bg_color = PadColors::WHITE;
        visuals.extreme_bg_color = PadColors::WHITE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, PadColors::BLACK);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = PadColors::WHITE;
            ws.weak_bg_fill = PadColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, PadColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, PadColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.active);
        bw(&mut visuals.widgets.open);

        // hovered and pressed widgets invert
        visuals.widgets.hovered.weak_bg_fill = PadColors::BLACK;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, PadColors::WHITE);
        visuals.widgets.active.weak_bg_fill = PadColors::BLACK;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, PadColors::WHITE);

        visuals.selection.bg_fill = Color32::from_rgba_premultiplied(0, 0, 0, 80);
        visuals.selection.stroke = Stroke::new(1.0, PadColors::BLACK);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Title bar: white fill, 1px black border
    pub fn title_bar_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(PadColors::WHITE)
            .stroke(Stroke::new(1.0, PadColors::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }

    /// Editor area: white fill, a little breathing room around the text
    pub fn editor_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(PadColors::WHITE)
            .inner_margin(egui::Margin::symmetric(6.0, 4.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(PadColors::WHITE)
        .stroke(Stroke::new(1.0, PadColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| {
            ui.horizontal(add_contents);
        });
}

/// Drop Cmd+Plus / Cmd+Minus / Cmd+Equals so egui never rescales the UI.
/// Call this at the start of your app's update() function.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|e| match e {
            egui::Event::Key { key, modifiers, .. } => {
                !(modifiers.command && is_zoom_key(*key))
            }
            _ => true,
        });
    });
}

fn is_zoom_key(key: egui::Key) -> bool {
    matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals)
}

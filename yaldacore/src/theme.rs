//! yaldaEdit theme — white surface, purple accents
//!
//! The editor draws purple text on a white page, with purple-outlined
//! widgets and zero rounding.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The application palette.
pub struct YaldaColors;

impl YaldaColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const PURPLE: Color32 = Color32::from_rgb(128, 0, 128);
    pub const LIGHT_PURPLE: Color32 = Color32::from_rgb(225, 204, 236);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration
pub struct YaldaTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for YaldaTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl YaldaTheme {
    /// Apply the theme to an egui context
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

        visuals.window_fill = YaldaColors::WHITE;
        visuals.panel_fill = YaldaColors::WHITE;
        visuals.faint_bg_color = YaldaColors::WHITE;
        visuals.extreme_bg_color = YaldaColors::WHITE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, YaldaColors::PURPLE);

        visuals.override_text_color = Some(YaldaColors::PURPLE);

        let accent = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = YaldaColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, YaldaColors::PURPLE);
            ws.fg_stroke = Stroke::new(1.0, YaldaColors::PURPLE);
            ws.rounding = Rounding::ZERO;
        };
        accent(&mut visuals.widgets.noninteractive);
        accent(&mut visuals.widgets.inactive);
        accent(&mut visuals.widgets.hovered);
        accent(&mut visuals.widgets.active);
        accent(&mut visuals.widgets.open);
        visuals.widgets.hovered.bg_fill = YaldaColors::LIGHT_PURPLE;
        visuals.widgets.active.bg_fill = YaldaColors::LIGHT_PURPLE;

        visuals.selection.bg_fill = YaldaColors::LIGHT_PURPLE;
        visuals.selection.stroke = Stroke::new(1.0, YaldaColors::PURPLE);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Dialog frame: white fill, 1px purple outline
    pub fn window_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(YaldaColors::WHITE)
            .stroke(Stroke::new(1.0, YaldaColors::PURPLE))
            .inner_margin(egui::Margin::same(8.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(YaldaColors::WHITE)
        .stroke(Stroke::new(1.0, YaldaColors::PURPLE))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}

/// Strip Cmd+/Cmd- zoom key events so the editor never rescales.
/// Call at the start of the app's update() function.
pub fn consume_zoom_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| {
            !matches!(
                event,
                egui::Event::Key { key, modifiers, .. }
                    if modifiers.command
                        && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals)
            )
        });
    });
}

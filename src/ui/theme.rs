//! Shared look for the egui screens
//!
//! Dark background with a burnt-orange accent, matching across splash, menus
//! and the auth forms.

use bevy_egui::egui;

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(10, 10, 10);
pub const TEXT_LIGHT: egui::Color32 = egui::Color32::from_rgb(240, 240, 240);
pub const TEXT_DIM: egui::Color32 = egui::Color32::from_rgb(160, 160, 160);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(220, 140, 60);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 100, 100);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(110, 200, 110);
pub const INPUT_BG: egui::Color32 = egui::Color32::from_rgb(40, 40, 40);
pub const INPUT_BORDER: egui::Color32 = egui::Color32::from_rgb(60, 60, 60);

pub const FORM_WIDTH: f32 = 360.0;
const INPUT_HEIGHT: f32 = 45.0;
const INPUT_FONT_SIZE: f32 = 18.0;

/// Big title with a slow wave running through the letters
pub fn title(ui: &mut egui::Ui, text: &str) {
    let font_size = 72.0;
    let time = ui.input(|i| i.time);
    ui.ctx().request_repaint();

    let width_estimate = text.chars().count() as f32 * font_size * 0.55;
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(width_estimate, font_size + 40.0),
        egui::Sense::hover(),
    );

    let painter = ui.painter();
    let font_id = egui::FontId::proportional(font_size);
    let mut x = rect.center().x - width_estimate / 2.0;

    for (i, ch) in text.chars().enumerate() {
        let wave = (time * 2.0 + i as f64 * 0.5).sin() as f32 * 8.0;
        let galley = painter.layout_no_wrap(ch.to_string(), font_id.clone(), TEXT_LIGHT);
        let advance = galley.size().x;
        painter.galley(egui::pos2(x, rect.min.y + 20.0 - wave), galley, TEXT_LIGHT);
        x += advance;
    }
}

pub fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(32.0).strong().color(TEXT_LIGHT));
}

pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add_sized(
        [240.0, 50.0],
        egui::Button::new(
            egui::RichText::new(text)
                .size(20.0)
                .strong()
                .color(egui::Color32::BLACK),
        )
        .fill(ACCENT)
        .corner_radius(egui::CornerRadius::same(8)),
    )
}

pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add_sized(
        [240.0, 40.0],
        egui::Button::new(egui::RichText::new(text).size(14.0).strong().color(TEXT_DIM))
            .fill(egui::Color32::from_rgb(30, 30, 35))
            .stroke(egui::Stroke::new(1.0, INPUT_BORDER))
            .corner_radius(egui::CornerRadius::same(8)),
    )
}

/// Single-line text input in the form style
pub fn text_input(ui: &mut egui::Ui, value: &mut String, hint: &str, password: bool) -> egui::Response {
    ui.add_sized(
        [FORM_WIDTH, INPUT_HEIGHT],
        egui::TextEdit::singleline(value)
            .password(password)
            .hint_text(egui::RichText::new(hint).size(INPUT_FONT_SIZE).color(TEXT_DIM))
            .font(egui::FontId::proportional(INPUT_FONT_SIZE))
            .text_color(TEXT_LIGHT)
            .margin(egui::Margin::symmetric(10, 10)),
    )
}

/// Input visuals for everything added inside `add_contents`
pub fn form_scope<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    ui.scope(|ui| {
        let style = ui.style_mut();
        style.visuals.extreme_bg_color = INPUT_BG;
        style.visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, INPUT_BORDER);
        style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT);
        style.visuals.widgets.active.bg_stroke = egui::Stroke::new(1.5, ACCENT);
        style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(8);
        style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(8);
        style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(8);
        style.visuals.selection.bg_fill = ACCENT;
        add_contents(ui)
    })
    .inner
}

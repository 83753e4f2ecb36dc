// crates/dropforge-ui/src/helpers/drop_zone.rs
//
// The shared drop target. Drops themselves arrive through egui's raw input
// (app.rs::handle_drag_and_drop) — this widget only has to look like the
// place to put them.

use egui::{CornerRadius, Margin, RichText, Stroke, Ui};

use crate::theme::{ACCENT, DARK_BG_2, DARK_BORDER, DARK_TEXT_DIM, DROP_HOVER};

/// Framed drop area with `hint` centered inside. `hovering` is true while an
/// OS drag carries files over the window — the frame tints green, standing
/// in for a per-widget enter/leave highlight.
pub fn drop_zone(ui: &mut Ui, hint: &str, hovering: bool) {
    let (fill, border, text) = if hovering {
        (DROP_HOVER, ACCENT, ACCENT)
    } else {
        (DARK_BG_2, DARK_BORDER, DARK_TEXT_DIM)
    };

    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, border))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_height(150.0);
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(hint).size(13.0).color(text));
            });
        });
}

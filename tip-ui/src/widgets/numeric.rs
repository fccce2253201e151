//! A labeled numeric input row.
//!
//! The widget renders the committed raw text and reports the proposed text
//! back to the caller on change; the caller routes it through the session,
//! where the edit filter and validator decide what actually sticks.

use egui::{Response, RichText, Ui};
use tip_core::FieldError;

/// Red used for error labels and invalid-field hints.
pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(0xc0, 0x3a, 0x2b);

/// A numeric input with a label, an optional prefix (currency symbol), and
/// an inline error message. Returns the proposed text when the user edited
/// the field this frame.
///
/// Pressing Escape surrenders focus without altering the committed value.
pub fn numeric_field(
    ui: &mut Ui,
    label: &str,
    prefix: &str,
    raw: &str,
    error: Option<FieldError>,
    hint: &str,
) -> Option<String> {
    let mut proposed = raw.to_owned();
    let mut changed = false;

    if !label.is_empty() || error.is_some() {
        ui.horizontal(|ui| {
            if !label.is_empty() {
                ui.label(RichText::new(label).strong());
            }
            if let Some(error) = error {
                ui.label(RichText::new(error.to_string()).color(ERROR_COLOR));
            }
        });
    }

    ui.horizontal(|ui| {
        if !prefix.is_empty() {
            ui.label(prefix);
        }
        let response: Response = ui.add(
            egui::TextEdit::singleline(&mut proposed)
                .desired_width(140.0)
                .hint_text(hint),
        );
        if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            response.surrender_focus();
        }
        changed = response.changed();
    });

    changed.then_some(proposed)
}

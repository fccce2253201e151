//! Per-person amount display.

use egui::{Align, Layout, RichText, Ui};
use rust_decimal::Decimal;
use tip_core::round_half_up;

/// Base font size for the amount figures.
const AMOUNT_TEXT_SIZE: f32 = 34.0;

/// Highlight color for the derived amounts.
const AMOUNT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x26, 0xc2, 0xae);

/// Formats an amount for display: half-up rounding, exactly two decimals.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// Font scale for a formatted amount. Up to five characters render at full
/// size; beyond that the size shrinks logarithmically so long totals still
/// fit the panel, floored at a readable minimum.
fn font_scale(formatted_len: usize) -> f32 {
    const MAX_SYMBOLS: usize = 5;
    if formatted_len <= MAX_SYMBOLS {
        return 1.0;
    }
    let overflow = (formatted_len - MAX_SYMBOLS) as f32;
    (1.0 - overflow.ln() / 4.0 + 0.03).max(0.4)
}

/// One row of the summary panel: "<label> / person" on the left, the
/// currency-prefixed amount on the right.
pub fn amount_row(
    ui: &mut Ui,
    label: &str,
    amount: Decimal,
    currency_symbol: &str,
) {
    let formatted = format_amount(amount);
    let scale = font_scale(formatted.len());

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(label).strong());
            ui.label(RichText::new("/ person").weak());
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(
                RichText::new(format!("{currency_symbol}{formatted}"))
                    .size(AMOUNT_TEXT_SIZE * scale)
                    .color(AMOUNT_COLOR),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_amount_pads_to_two_decimals() {
        assert_eq!(format_amount(dec!(5)), "5.00");
        assert_eq!(format_amount(dec!(27.5)), "27.50");
    }

    #[test]
    fn format_amount_rounds_half_up() {
        assert_eq!(format_amount(dec!(16.665)), "16.67");
        assert_eq!(format_amount(dec!(16.664)), "16.66");
    }

    #[test]
    fn short_amounts_render_at_full_size() {
        assert_eq!(font_scale("27.50".len()), 1.0);
        assert_eq!(font_scale("5.00".len()), 1.0);
    }

    #[test]
    fn long_amounts_shrink_but_stay_readable() {
        let six = font_scale(6);
        let twelve = font_scale(12);

        assert!(six > twelve);
        assert!(twelve >= 0.4);
    }
}

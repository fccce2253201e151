//! Tip selection state.
//!
//! The active tip percentage comes from exactly one of two places: a preset
//! button or the free-form custom field. Modeling the selection as a single
//! enum makes the "both at once" state unrepresentable.

use rust_decimal::Decimal;

use crate::field::{FieldConstraints, FieldError, NumericField, filter_edit};

/// Where the active tip percentage comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TipChoice {
    /// No tip chosen yet.
    #[default]
    None,
    /// One of the fixed preset percentages.
    Preset(Decimal),
    /// A free-form percentage typed into the custom field.
    Custom(NumericField),
}

/// Mutually exclusive preset/custom tip selection.
///
/// Transitions: `None → Preset`, `None → Custom` (on non-empty input),
/// `Preset → Custom`, `Custom → Preset`, and any state back to `None` via
/// [`TipSelection::clear`]. Selecting one side always discards the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipSelection {
    choice: TipChoice,
}

impl TipSelection {
    /// Starts with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current choice, for rendering.
    pub fn choice(&self) -> &TipChoice {
        &self.choice
    }

    /// The preset percentage, when a preset is the active choice.
    pub fn selected_preset(&self) -> Option<Decimal> {
        match self.choice {
            TipChoice::Preset(value) => Some(value),
            _ => None,
        }
    }

    /// The custom field's raw text; empty unless a custom entry is active.
    pub fn custom_raw(&self) -> &str {
        match &self.choice {
            TipChoice::Custom(field) => field.raw(),
            _ => "",
        }
    }

    /// The custom field's validation error, if a custom entry is active.
    pub fn custom_error(&self) -> Option<FieldError> {
        match &self.choice {
            TipChoice::Custom(field) => field.error(),
            _ => None,
        }
    }

    /// Picks a preset percentage, discarding any custom text and error.
    pub fn select_preset(
        &mut self,
        value: Decimal,
    ) {
        self.choice = TipChoice::Preset(value);
    }

    /// Routes an edit of the custom field through the edit filter and the
    /// validator (fractional and zero both allowed; a 0% tip is legitimate).
    ///
    /// The first character of a fresh custom entry clears an active preset.
    /// An empty edit while no custom entry is active changes nothing.
    pub fn select_custom(
        &mut self,
        proposed: &str,
    ) {
        let prev = self.custom_raw();
        let accepted = filter_edit(prev, proposed, FieldConstraints::PERCENTAGE);

        let mut field = match std::mem::take(&mut self.choice) {
            TipChoice::Custom(field) => field,
            other => {
                if accepted.trim().is_empty() {
                    // Nothing typed; keep whatever was selected before.
                    self.choice = other;
                    return;
                }
                NumericField::new()
            }
        };

        field.set_text(accepted, FieldConstraints::PERCENTAGE);
        self.choice = TipChoice::Custom(field);
    }

    /// The authoritative tip percentage: the preset value, or the custom
    /// field's validated value. `None` when nothing usable is selected.
    pub fn active_tip(&self) -> Option<Decimal> {
        match &self.choice {
            TipChoice::None => None,
            TipChoice::Preset(value) => Some(*value),
            TipChoice::Custom(field) => field.validated(),
        }
    }

    /// Back to nothing selected, custom field emptied.
    pub fn clear(&mut self) {
        self.choice = TipChoice::None;
    }
}

//! The UI session state.
//!
//! One [`SplitSession`] owns the three form entities for the lifetime of the
//! view. All mutation happens synchronously inside input-event handlers, and
//! the derived amounts are recomputed on demand from the committed state, so
//! there is no cached derivation to invalidate.

use rust_decimal::Decimal;

use crate::calc::{SplitAmounts, compute};
use crate::field::{FieldConstraints, NumericField, filter_edit};
use crate::selection::TipSelection;

/// Form state for one bill-splitting session.
///
/// Discarded wholesale on reset; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSession {
    bill: NumericField,
    tip: TipSelection,
    people: NumericField,
}

impl SplitSession {
    /// A fresh session: all fields empty, no tip selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bill field, for rendering.
    pub fn bill(&self) -> &NumericField {
        &self.bill
    }

    /// The people field, for rendering.
    pub fn people(&self) -> &NumericField {
        &self.people
    }

    /// The tip selection, for rendering.
    pub fn tip(&self) -> &TipSelection {
        &self.tip
    }

    /// Commits an edit of the bill field (fractional, non-zero currency).
    pub fn edit_bill(
        &mut self,
        proposed: &str,
    ) {
        let accepted = filter_edit(self.bill.raw(), proposed, FieldConstraints::CURRENCY);
        self.bill.set_text(accepted, FieldConstraints::CURRENCY);
    }

    /// Commits an edit of the people field (positive whole number).
    pub fn edit_people(
        &mut self,
        proposed: &str,
    ) {
        let accepted = filter_edit(self.people.raw(), proposed, FieldConstraints::COUNT);
        self.people.set_text(accepted, FieldConstraints::COUNT);
    }

    /// Selects a preset tip percentage, clearing any custom entry.
    pub fn select_preset_tip(
        &mut self,
        percentage: Decimal,
    ) {
        self.tip.select_preset(percentage);
    }

    /// Commits an edit of the custom tip field, clearing any preset on the
    /// first character of a fresh entry.
    pub fn edit_custom_tip(
        &mut self,
        proposed: &str,
    ) {
        self.tip.select_custom(proposed);
    }

    /// Recomputes the derived amounts from the current validated state.
    pub fn amounts(&self) -> SplitAmounts {
        compute(
            self.bill.validated(),
            self.tip.active_tip(),
            self.people.validated(),
        )
    }

    /// True when there is anything to reset: a non-empty field or an active
    /// preset. Drives the reset control's enabled state.
    pub fn can_reset(&self) -> bool {
        !self.bill.is_empty()
            || !self.people.is_empty()
            || !self.tip.custom_raw().is_empty()
            || self.tip.selected_preset().is_some()
    }

    /// Returns the session to its initial state: all fields empty, no
    /// errors, no tip selected.
    pub fn reset(&mut self) {
        self.bill.clear();
        self.people.clear();
        self.tip.clear();
    }
}

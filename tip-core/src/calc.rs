//! Derived-amount calculation.
//!
//! Combines the validated bill, tip percentage, and people count into the
//! two displayed amounts. The computation is a pure function over its
//! inputs: it is re-run from scratch after every field mutation rather than
//! cached, so it can never observe stale state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The amounts derived from the current form state.
///
/// Values are kept at full precision; rounding to two decimal places happens
/// only at the display boundary via [`round_half_up`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitAmounts {
    /// Tip share shown per person: `bill × tip% / 100`.
    pub tip_per_person: Decimal,

    /// Total share per person: `(bill + tip) / people`.
    pub total_per_person: Decimal,

    /// Whether all three inputs were present and valid. When false, both
    /// amounts are zero so the display never shows a propagated non-value.
    pub computable: bool,
}

impl SplitAmounts {
    /// The safe-zero result displayed while any input is missing or invalid.
    fn not_computable() -> Self {
        Self {
            tip_per_person: Decimal::ZERO,
            total_per_person: Decimal::ZERO,
            computable: false,
        }
    }
}

/// Derives the per-person amounts from the validated inputs.
///
/// Each argument is a field's validated value: `None` when the field is
/// empty or failed validation. The result is computable only when all three
/// are present; otherwise both amounts are zero.
///
/// The people field is validated as a positive integer upstream, so division
/// by zero cannot occur through the normal session path; a zero or negative
/// count passed directly is refused rather than divided by.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calc::compute;
///
/// let amounts = compute(Some(dec!(50)), Some(dec!(10)), Some(dec!(2)));
/// assert!(amounts.computable);
/// assert_eq!(amounts.tip_per_person, dec!(5.0));
/// assert_eq!(amounts.total_per_person, dec!(27.5));
///
/// let amounts = compute(None, Some(dec!(15)), Some(dec!(4)));
/// assert!(!amounts.computable);
/// assert_eq!(amounts.total_per_person, dec!(0));
/// ```
pub fn compute(
    bill: Option<Decimal>,
    tip: Option<Decimal>,
    people: Option<Decimal>,
) -> SplitAmounts {
    let (Some(bill), Some(tip), Some(people)) = (bill, tip, people) else {
        debug!(
            bill = bill.is_some(),
            tip = tip.is_some(),
            people = people.is_some(),
            "inputs incomplete; showing zero amounts"
        );
        return SplitAmounts::not_computable();
    };

    if people <= Decimal::ZERO {
        warn!(%people, "people count must be positive; refusing to divide");
        return SplitAmounts::not_computable();
    }

    let tip_per_person = bill * tip / Decimal::ONE_HUNDRED;
    let total_per_person = (bill + tip_per_person) / people;

    SplitAmounts {
        tip_per_person,
        total_per_person,
        computable: true,
    }
}

/// Rounds to exactly two decimal places, midpoint away from zero.
///
/// Display-boundary rounding only; stored amounts keep full precision.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

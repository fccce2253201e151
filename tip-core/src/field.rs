//! Numeric field validation.
//!
//! Every form field in the calculator is backed by a [`NumericField`]: the
//! raw text the user typed, the value it parses to, and the validation error
//! (if any) under that field's [`FieldConstraints`]. Validation runs on every
//! committed edit, so an error clears on the first keystroke that fixes it.
//!
//! # Validation rules
//!
//! Checked in order, first match wins:
//!
//! | Condition | Error |
//! |-----------|-------|
//! | empty or whitespace-only text | none (an untouched field is not invalid) |
//! | text does not parse as a number | [`FieldError::Malformed`] |
//! | fractional value where `allow_fractional` is false | [`FieldError::Malformed`] |
//! | zero where `allow_zero` is false | [`FieldError::Zero`] |
//! | negative value | [`FieldError::Negative`] |
//!
//! A comma is accepted as a decimal separator and normalized to a dot before
//! parsing, so `"12,5"` and `"12.5"` are the same value.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

/// Validation error for a single numeric field.
///
/// All errors are advisory: they block the derived-amount computation but
/// never abort the session. The display strings are the messages shown next
/// to the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The text does not parse as a number, or is fractional where only
    /// whole numbers are accepted.
    #[error("Invalid input!")]
    Malformed,

    /// The value is zero and this field does not accept zero.
    #[error("Cannot be zero!")]
    Zero,

    /// The value is negative.
    #[error("Negative? Impossible!")]
    Negative,
}

/// Per-field numeric constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConstraints {
    /// Whether fractional values are accepted. When false, a value with a
    /// fractional part is [`FieldError::Malformed`].
    pub allow_fractional: bool,
    /// Whether zero is accepted. When false, zero is [`FieldError::Zero`].
    pub allow_zero: bool,
}

impl FieldConstraints {
    /// A money amount: fractional, but never zero (splitting a zero bill is
    /// meaningless).
    pub const CURRENCY: Self = Self {
        allow_fractional: true,
        allow_zero: false,
    };

    /// A percentage: fractional, and zero is legitimate (a 0% tip is a valid
    /// choice).
    pub const PERCENTAGE: Self = Self {
        allow_fractional: true,
        allow_zero: true,
    };

    /// A head count: whole numbers only, never zero.
    pub const COUNT: Self = Self {
        allow_fractional: false,
        allow_zero: false,
    };
}

/// Validates raw field text against a set of constraints.
///
/// Returns the parsed value (when the text parses at all) and the first
/// matching error. Empty or whitespace-only text is the "untouched" state:
/// no value, no error.
///
/// Note that `"-5"` parses successfully, so it reports
/// [`FieldError::Negative`] rather than [`FieldError::Malformed`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::field::{validate, FieldConstraints, FieldError};
///
/// let (value, error) = validate("12,5", FieldConstraints::PERCENTAGE);
/// assert_eq!(value, Some(dec!(12.5)));
/// assert_eq!(error, None);
///
/// let (_, error) = validate("0", FieldConstraints::COUNT);
/// assert_eq!(error, Some(FieldError::Zero));
/// ```
pub fn validate(
    raw: &str,
    constraints: FieldConstraints,
) -> (Option<Decimal>, Option<FieldError>) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return (None, None);
    }

    let normalized = trimmed.replace(',', ".");
    let Ok(value) = normalized.parse::<Decimal>() else {
        return (None, Some(FieldError::Malformed));
    };

    if !constraints.allow_fractional && !value.is_integer() {
        return (Some(value), Some(FieldError::Malformed));
    }
    if !constraints.allow_zero && value.is_zero() {
        return (Some(value), Some(FieldError::Zero));
    }
    if value < Decimal::ZERO {
        return (Some(value), Some(FieldError::Negative));
    }

    (Some(value), None)
}

/// Filters a proposed text edit before it is committed to a field.
///
/// The UI reports edits as whole-text transitions (`prev` → `proposed`), so
/// keystroke filtering and paste handling collapse into one decision over the
/// inserted portion of the diff:
///
/// * Pure deletions are always accepted.
/// * A single inserted character is accepted only if it is a digit or a
///   decimal separator (the latter only when the field allows fractions).
/// * A longer insertion is treated as a paste: it is accepted only if the
///   whole proposed text parses as a number under the same fractional rule,
///   and is then replaced by the canonical string of the parsed value.
///   Otherwise the previous text stands.
///
/// Returns the text the field should now hold.
pub fn filter_edit(
    prev: &str,
    proposed: &str,
    constraints: FieldConstraints,
) -> String {
    let inserted = inserted_chars(prev, proposed);
    match inserted.as_slice() {
        [] => proposed.to_string(),
        [c] if is_allowed_char(*c, constraints) => proposed.to_string(),
        [_] => {
            debug!(prev, proposed, "rejected keystroke");
            prev.to_string()
        }
        _ => {
            // Multi-character insertion: treat as a paste, parse the whole text.
            let normalized = proposed.trim().replace(',', ".");
            match normalized.parse::<Decimal>() {
                Ok(value) if constraints.allow_fractional || value.is_integer() => {
                    value.to_string()
                }
                _ => {
                    debug!(prev, proposed, "rejected paste");
                    prev.to_string()
                }
            }
        }
    }
}

/// The characters `proposed` inserts relative to `prev`, found by stripping
/// the longest common prefix and suffix. A pure deletion yields an empty
/// slice; a selection overwrite yields just the replacement text.
fn inserted_chars(
    prev: &str,
    proposed: &str,
) -> Vec<char> {
    let prev: Vec<char> = prev.chars().collect();
    let proposed: Vec<char> = proposed.chars().collect();

    let prefix = prev
        .iter()
        .zip(&proposed)
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = prev
        .iter()
        .rev()
        .zip(proposed.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
        .min(prev.len().min(proposed.len()) - prefix);

    proposed[prefix..proposed.len() - suffix].to_vec()
}

fn is_allowed_char(
    c: char,
    constraints: FieldConstraints,
) -> bool {
    c.is_ascii_digit() || (constraints.allow_fractional && (c == '.' || c == ','))
}

/// A single numeric form field: raw text plus its validation outcome.
///
/// Created empty; mutated through [`NumericField::set_text`] on every input
/// event. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericField {
    raw: String,
    value: Option<Decimal>,
    error: Option<FieldError>,
}

impl NumericField {
    /// Creates an empty, untouched field.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw text as last committed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The current validation error, if any.
    pub fn error(&self) -> Option<FieldError> {
        self.error
    }

    /// True when the field holds no text (the untouched state).
    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// True when the field has no validation error. An empty field is valid.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// The parsed value, but only when the field passed validation.
    ///
    /// `None` for empty fields and for fields with any error, which makes
    /// this the value to feed into the derived-amount computation.
    pub fn validated(&self) -> Option<Decimal> {
        if self.error.is_none() { self.value } else { None }
    }

    /// Commits an edit and re-validates synchronously.
    pub fn set_text(
        &mut self,
        raw: impl Into<String>,
        constraints: FieldConstraints,
    ) {
        self.raw = raw.into();
        (self.value, self.error) = validate(&self.raw, constraints);
    }

    /// Empties the field and clears any error.
    pub fn clear(&mut self) {
        self.raw.clear();
        self.value = None;
        self.error = None;
    }
}

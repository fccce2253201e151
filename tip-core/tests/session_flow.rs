//! End-to-end scenarios driving a session the way the UI does: one committed
//! edit per input event, amounts recomputed after each.
//!
//! These complement the unit tests inside the individual modules, which
//! exercise each rule in isolation.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use tip_core::{SplitSession, round_half_up};

#[test]
fn fifty_dollar_bill_ten_percent_preset_two_people() {
    let mut session = SplitSession::new();

    session.edit_bill("5");
    session.edit_bill("50");
    session.select_preset_tip(dec!(10));
    session.edit_people("2");

    let amounts = session.amounts();
    assert!(amounts.computable);
    assert_eq!(round_half_up(amounts.tip_per_person), dec!(5.00));
    assert_eq!(round_half_up(amounts.total_per_person), dec!(27.50));
}

#[test]
fn zero_percent_custom_tip_three_people() {
    let mut session = SplitSession::new();

    session.edit_bill("50");
    session.edit_custom_tip("0");
    session.edit_people("3");

    let amounts = session.amounts();
    assert!(amounts.computable);
    assert_eq!(round_half_up(amounts.tip_per_person), dec!(0.00));
    assert_eq!(round_half_up(amounts.total_per_person), dec!(16.67));
}

#[test]
fn empty_bill_keeps_amounts_at_safe_zero() {
    let mut session = SplitSession::new();

    session.select_preset_tip(dec!(15));
    session.edit_people("4");

    let amounts = session.amounts();
    assert!(!amounts.computable);
    assert_eq!(amounts.tip_per_person, dec!(0));
    assert_eq!(amounts.total_per_person, dec!(0));
}

#[test]
fn zero_people_is_rejected_regardless_of_other_fields() {
    let mut session = SplitSession::new();

    session.edit_bill("120.50");
    session.select_preset_tip(dec!(25));
    session.edit_people("0");

    assert!(!session.amounts().computable);

    // Correcting the count recovers without touching anything else.
    session.edit_people("5");
    assert!(session.amounts().computable);
}

#[test]
fn custom_tip_overrides_preset_and_preset_clears_custom() {
    let mut session = SplitSession::new();
    session.edit_bill("100");
    session.edit_people("2");

    session.select_preset_tip(dec!(10));
    session.edit_custom_tip("7");
    assert_eq!(session.tip().active_tip(), Some(dec!(7)));
    assert_eq!(round_half_up(session.amounts().tip_per_person), dec!(7.00));

    session.select_preset_tip(dec!(15));
    assert_eq!(session.tip().custom_raw(), "");
    assert_eq!(round_half_up(session.amounts().tip_per_person), dec!(15.00));
}

#[test]
fn comma_decimal_entry_matches_dot_entry() {
    let mut dotted = SplitSession::new();
    dotted.edit_bill("80.50");
    dotted.select_preset_tip(dec!(10));
    dotted.edit_people("2");

    let mut commaed = SplitSession::new();
    commaed.edit_bill("80");
    commaed.edit_bill("80,");
    commaed.edit_bill("80,5");
    commaed.edit_bill("80,50");
    commaed.select_preset_tip(dec!(10));
    commaed.edit_people("2");

    assert_eq!(dotted.amounts(), commaed.amounts());
}

#[test]
fn pasted_bill_is_canonicalized_before_computing() {
    let mut session = SplitSession::new();

    session.edit_bill("  42.00 "); // paste, whitespace and all
    session.select_preset_tip(dec!(50));
    session.edit_people("3");

    assert_eq!(session.bill().raw(), "42.00");
    let amounts = session.amounts();
    assert_eq!(round_half_up(amounts.tip_per_person), dec!(21.00));
    assert_eq!(round_half_up(amounts.total_per_person), dec!(21.00));
}

#[test]
fn reset_recovers_from_a_fully_populated_form() {
    let mut session = SplitSession::new();
    session.edit_bill("50");
    session.edit_custom_tip("12.5");
    session.edit_people("4");
    assert!(session.can_reset());

    session.reset();

    assert_eq!(session, SplitSession::new());
    assert!(!session.amounts().computable);
}

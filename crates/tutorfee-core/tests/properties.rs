//! Property-based tests for the fee calculator.

use proptest::prelude::*;

use tutorfee_core::calculator::{compute_total_fee, FeeCalculator};
use tutorfee_core::constants::{
    DEFAULT_AREA_FEE, DEFAULT_BOARD_FEE, PREMIUM_SUBJECT_FEE, STANDARD_SUBJECT_FEE,
};
use tutorfee_core::selection::Selection;
use tutorfee_core::tables::{AREA_FEES, BOARD_FEES, PREMIUM_SUBJECTS};

fn area() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(AREA_FEES).prop_map(|(name, _)| name.to_string()),
        "[A-Za-z ]{0,20}",
    ]
}

fn board() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(BOARD_FEES).prop_map(|(name, _)| name.to_string()),
        "[A-Za-z' ]{0,20}",
    ]
}

fn subject() -> impl Strategy<Value = String> {
    prop_oneof![
        (prop::sample::select(PREMIUM_SUBJECTS), 1u32..10_000)
            .prop_map(|(name, code)| format!("{name} - {code}")),
        ("[A-Za-z]{1,12}", 1u32..10_000).prop_map(|(name, code)| format!("{name} - {code}")),
        "[A-Za-z -]{0,24}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The itemised quote and the plain total always agree.
    #[test]
    fn quote_total_matches_total_fee(
        area in area(),
        board in board(),
        subjects in prop::collection::vec(subject(), 0..8),
    ) {
        let calc = FeeCalculator::new();
        let sel = Selection::new(area, board, subjects);
        let quote = calc.quote(&sel);
        prop_assert_eq!(quote.total, compute_total_fee(&sel.area, &sel.board, &sel.subjects));
        prop_assert_eq!(quote.total, quote.area_fee + quote.board_fee + quote.subjects_total());
    }

    /// Every applied fee is the tier fee clamped to the cap.
    #[test]
    fn each_fee_is_clamped(
        area in area(),
        board in board(),
        subjects in prop::collection::vec(subject(), 0..8),
    ) {
        let quote = FeeCalculator::new().quote(&Selection::new(area, board, subjects));
        prop_assert_eq!(quote.cap, quote.area_fee + quote.board_fee);
        for item in &quote.items {
            prop_assert!(item.base_fee == PREMIUM_SUBJECT_FEE || item.base_fee == STANDARD_SUBJECT_FEE);
            prop_assert_eq!(item.fee, item.base_fee.min(quote.cap));
            prop_assert_eq!(item.capped, item.fee < item.base_fee);
        }
    }

    /// Adding a subject never lowers the total.
    #[test]
    fn total_is_monotone(
        area in area(),
        board in board(),
        mut subjects in prop::collection::vec(subject(), 0..8),
        extra in subject(),
    ) {
        let before = compute_total_fee(&area, &board, &subjects);
        subjects.push(extra);
        let after = compute_total_fee(&area, &board, &subjects);
        prop_assert!(after > before);
    }

    /// Subject order does not affect the total.
    #[test]
    fn order_independent(
        area in area(),
        board in board(),
        subjects in prop::collection::vec(subject(), 0..8),
    ) {
        let forward = compute_total_fee(&area, &board, &subjects);
        let mut reversed = subjects.clone();
        reversed.reverse();
        prop_assert_eq!(forward, compute_total_fee(&area, &board, &reversed));
    }

    /// Names outside the tables fall back to the default fees.
    #[test]
    fn unknown_names_use_defaults(area in "[0-9]{1,8}", board in "[0-9]{1,8}") {
        let calc = FeeCalculator::new();
        prop_assert_eq!(calc.area_fee(&area), DEFAULT_AREA_FEE);
        prop_assert_eq!(calc.board_fee(&board), DEFAULT_BOARD_FEE);
    }
}

/// Known entries resolve to their exact table values.
#[test]
fn table_values_exact() {
    let calc = FeeCalculator::new();
    for (area, fee) in AREA_FEES {
        assert_eq!(calc.area_fee(area), *fee, "{area}");
    }
    for (board, fee) in BOARD_FEES {
        assert_eq!(calc.board_fee(board), *fee, "{board}");
    }
}

/// Every premium subject is charged the premium fee when the cap allows it.
#[test]
fn premium_subjects_under_high_cap() {
    for name in PREMIUM_SUBJECTS {
        let total = compute_total_fee("DHA", "ACCA", &[format!("{name} - 1")]);
        assert_eq!(total, 12_000 + PREMIUM_SUBJECT_FEE, "{name}");
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;

use tutorfee_core::calculator::{compute_total_fee, FeeCalculator};
use tutorfee_core::selection::Selection;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    // Lines: area, board, then one subject per line
    let mut lines = text.lines();
    let area = lines.next().unwrap_or_default();
    let board = lines.next().unwrap_or_default();
    let subjects: Vec<&str> = lines.collect();

    let sel = Selection::new(area, board, subjects.iter().copied());
    let quote = FeeCalculator::new().quote(&sel);

    assert_eq!(quote.total, compute_total_fee(area, board, &subjects));
    for item in &quote.items {
        assert!(item.fee <= quote.cap);
    }
});

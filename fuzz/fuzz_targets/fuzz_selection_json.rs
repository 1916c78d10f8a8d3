#![no_main]

use libfuzzer_sys::fuzz_target;

use tutorfee_core::calculator::FeeCalculator;
use tutorfee_core::selection::Selection;

fuzz_target!(|data: &[u8]| {
    // Should not panic, whatever the document
    if let Ok(sel) = Selection::from_reader(data) {
        let _ = FeeCalculator::new().quote(&sel);
    }
});

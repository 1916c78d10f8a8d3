//! Static pricing tables.
//!
//! The tables are `const` data: they are fixed for the lifetime of the
//! process and can be read from anywhere without synchronization.

use tracing::debug;

use crate::constants::{DEFAULT_AREA_FEE, DEFAULT_BOARD_FEE};

/// Base fee per area.
pub const AREA_FEES: &[(&str, u64)] = &[
    ("DHA", 8000),
    ("Gulshan-e-Iqbal", 6000),
    ("PECHS", 6000),
    ("Saddar", 6000),
    ("North Karachi", 2000),
];

/// Additional fee per examination board.
pub const BOARD_FEES: &[(&str, u64)] = &[
    ("Cambridge O'Levels", 4000),
    ("Cambridge A'Levels", 4000),
    ("ACCA", 4000),
    ("ICAP", 4000),
];

/// Subjects charged at the premium rate.
pub const PREMIUM_SUBJECTS: &[&str] = &["Mathematics", "Physics", "Chemistry", "Biology", "Audit"];

fn lookup(table: &[(&str, u64)], key: &str) -> Option<u64> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, fee)| fee)
}

/// Base fee for `area`, or [`DEFAULT_AREA_FEE`] if the area is unknown.
#[must_use]
pub fn area_fee(area: &str) -> u64 {
    lookup(AREA_FEES, area).unwrap_or_else(|| {
        debug!(area, fee = DEFAULT_AREA_FEE, "unknown area, using default fee");
        DEFAULT_AREA_FEE
    })
}

/// Additional fee for `board`, or [`DEFAULT_BOARD_FEE`] if the board is unknown.
#[must_use]
pub fn board_fee(board: &str) -> u64 {
    lookup(BOARD_FEES, board).unwrap_or_else(|| {
        debug!(board, fee = DEFAULT_BOARD_FEE, "unknown board, using default fee");
        DEFAULT_BOARD_FEE
    })
}

/// Whether `name` is a premium subject. Exact, case-sensitive match.
#[must_use]
pub fn is_premium(name: &str) -> bool {
    PREMIUM_SUBJECTS.contains(&name)
}

/// Maximum fee chargeable for a single subject under this area and board.
#[must_use]
pub fn per_subject_cap(area: &str, board: &str) -> u64 {
    area_fee(area) + board_fee(board)
}

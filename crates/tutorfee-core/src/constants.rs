//! Pricing constants and exit codes.

/// Area fee charged when the selected area is not in the area table.
pub const DEFAULT_AREA_FEE: u64 = 2000;

/// Board fee charged when the selected board is not in the board table.
pub const DEFAULT_BOARD_FEE: u64 = 2000;

/// Uncapped fee for a subject in the premium set.
pub const PREMIUM_SUBJECT_FEE: u64 = 6000;

/// Uncapped fee for every other subject.
pub const STANDARD_SUBJECT_FEE: u64 = 5000;

/// Separates a subject name from its code, as in `"Physics - 5054"`.
pub const SUBJECT_SEPARATOR: &str = " - ";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The selection could not be read. Distinct from the usage-error code 2.
    pub const ERROR_INPUT: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

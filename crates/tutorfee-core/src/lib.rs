//! # tutorfee-core
//!
//! Fee tables and the quote calculator for tutoring enrolments.
//! A quote is the area fee plus the board fee plus one capped fee per
//! selected subject.

pub mod calculator;
pub mod constants;
pub mod error;
pub mod interfaces;
pub mod selection;
pub mod subject;
pub mod tables;

// Re-exports
pub use calculator::{compute_total_fee, FeeCalculator, LineItem, Quote};
pub use constants::{
    exit_codes, DEFAULT_AREA_FEE, DEFAULT_BOARD_FEE, PREMIUM_SUBJECT_FEE, STANDARD_SUBJECT_FEE,
    SUBJECT_SEPARATOR,
};
pub use error::FeeError;
pub use interfaces::{QuoteDisplay, SelectionSource};
pub use selection::Selection;
pub use subject::{subject_name, SubjectTier};
pub use tables::{AREA_FEES, BOARD_FEES, PREMIUM_SUBJECTS};

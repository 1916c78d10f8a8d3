//! TutorFee library: application logic for the fee quote calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod input;
pub mod version;

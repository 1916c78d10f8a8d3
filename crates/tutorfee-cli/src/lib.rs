//! # tutorfee-cli
//!
//! Quote displays, output formatting, and shell completion.

pub mod catalog;
pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{display_for, JsonDisplay, OutputFormat, QuietDisplay, TextDisplay};

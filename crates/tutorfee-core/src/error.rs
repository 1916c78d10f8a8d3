//! Errors raised at the input and output boundaries.
//!
//! Pricing itself never fails: unknown areas, boards, and subjects fall back
//! to default fees.

/// Error type for reading selections and displaying quotes.
#[derive(Debug, thiserror::Error)]
pub enum FeeError {
    /// The selection could not be read or parsed.
    #[error("input error: {0}")]
    Input(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The quote could not be written.
    #[error("output error: {0}")]
    Output(String),
}

impl From<serde_json::Error> for FeeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Input(err.to_string())
    }
}

//! Subject identifier parsing and pricing tiers.

use serde::{Deserialize, Serialize};

use crate::constants::{PREMIUM_SUBJECT_FEE, STANDARD_SUBJECT_FEE, SUBJECT_SEPARATOR};
use crate::tables::is_premium;

/// Extract the subject name from an identifier such as `"Physics - 5054"`.
///
/// Returns the text before the first [`SUBJECT_SEPARATOR`], or the whole
/// identifier if it has none.
#[must_use]
pub fn subject_name(identifier: &str) -> &str {
    identifier
        .split_once(SUBJECT_SEPARATOR)
        .map_or(identifier, |(name, _)| name)
}

/// Pricing tier of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectTier {
    Premium,
    Standard,
}

impl SubjectTier {
    /// Classify a subject by its extracted name.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        if is_premium(name) {
            Self::Premium
        } else {
            Self::Standard
        }
    }

    /// Fee for this tier before the per-subject cap is applied.
    #[must_use]
    pub fn base_fee(self) -> u64 {
        match self {
            Self::Premium => PREMIUM_SUBJECT_FEE,
            Self::Standard => STANDARD_SUBJECT_FEE,
        }
    }
}

impl std::fmt::Display for SubjectTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Premium => write!(f, "premium"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

//! The fee calculator and itemised quotes.
//!
//! `FeeCalculator::total_fee` is the pricing rule: area fee plus board fee,
//! plus one fee per subject, each subject fee capped at the sum of the area
//! and board fees. `FeeCalculator::quote` applies the same rule and keeps a
//! line item per subject.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::selection::Selection;
use crate::subject::{subject_name, SubjectTier};
use crate::tables;

/// One subject's contribution to a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Identifier as selected, e.g. `"Physics - 5054"`.
    pub subject: String,
    /// Name extracted from the identifier.
    pub name: String,
    pub tier: SubjectTier,
    /// Fee before the cap.
    pub base_fee: u64,
    /// Fee actually charged.
    pub fee: u64,
    /// Whether the cap reduced this fee.
    pub capped: bool,
}

/// An itemised fee quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub area: String,
    pub board: String,
    pub area_fee: u64,
    pub board_fee: u64,
    /// Per-subject cap, `area_fee + board_fee`.
    pub cap: u64,
    pub items: Vec<LineItem>,
    /// Total fee.
    pub total: u64,
}

impl Quote {
    /// Sum of the subject fees, excluding the area and board fees.
    #[must_use]
    pub fn subjects_total(&self) -> u64 {
        self.items.iter().map(|item| item.fee).sum()
    }

    /// Number of subjects whose fee was reduced by the cap.
    #[must_use]
    pub fn capped_count(&self) -> usize {
        self.items.iter().filter(|item| item.capped).count()
    }
}

/// Stateless calculator over the static fee tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeeCalculator;

impl FeeCalculator {
    /// Create a new calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Base fee for an area, with the default for unknown areas.
    #[must_use]
    pub fn area_fee(&self, area: &str) -> u64 {
        tables::area_fee(area)
    }

    /// Additional fee for a board, with the default for unknown boards.
    #[must_use]
    pub fn board_fee(&self, board: &str) -> u64 {
        tables::board_fee(board)
    }

    /// Per-subject cap for an area and board.
    #[must_use]
    pub fn cap(&self, area: &str, board: &str) -> u64 {
        tables::per_subject_cap(area, board)
    }

    /// Fee charged for one subject identifier under the given cap.
    #[must_use]
    pub fn subject_fee(&self, identifier: &str, cap: u64) -> u64 {
        SubjectTier::classify(subject_name(identifier))
            .base_fee()
            .min(cap)
    }

    /// Total fee for a selection.
    #[must_use]
    pub fn total_fee<S: AsRef<str>>(&self, area: &str, board: &str, subjects: &[S]) -> u64 {
        let cap = self.cap(area, board);

        let mut total = cap;
        for subject in subjects {
            total = total.saturating_add(self.subject_fee(subject.as_ref(), cap));
        }
        debug!(area, board, subjects = subjects.len(), total, "computed total fee");
        total
    }

    /// Itemised quote for a selection.
    #[must_use]
    pub fn quote(&self, selection: &Selection) -> Quote {
        let area_fee = self.area_fee(&selection.area);
        let board_fee = self.board_fee(&selection.board);
        let cap = area_fee + board_fee;

        let items: Vec<LineItem> = selection
            .subjects
            .iter()
            .map(|subject| {
                let name = subject_name(subject);
                let tier = SubjectTier::classify(name);
                let base_fee = tier.base_fee();
                let fee = base_fee.min(cap);
                trace!(subject = %subject, %tier, base_fee, fee, "priced subject");
                LineItem {
                    subject: subject.clone(),
                    name: name.to_string(),
                    tier,
                    base_fee,
                    fee,
                    capped: fee < base_fee,
                }
            })
            .collect();

        let total = items
            .iter()
            .fold(cap, |acc, item| acc.saturating_add(item.fee));

        Quote {
            area: selection.area.clone(),
            board: selection.board.clone(),
            area_fee,
            board_fee,
            cap,
            items,
            total,
        }
    }
}

/// Total fee for an area, board, and subject identifiers.
///
/// # Example
/// ```
/// let total = tutorfee_core::compute_total_fee("DHA", "ACCA", &["Mathematics - 101"]);
/// assert_eq!(total, 18_000);
/// ```
#[must_use]
pub fn compute_total_fee<S: AsRef<str>>(area: &str, board: &str, subjects: &[S]) -> u64 {
    FeeCalculator::new().total_fee(area, board, subjects)
}

//! The area, board, and subjects chosen on the enrolment form.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::FeeError;

/// A form selection to be priced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Area name, looked up in the area table.
    pub area: String,
    /// Board name, looked up in the board table.
    pub board: String,
    /// Subject identifiers in selection order, e.g. `"Physics - 5054"`.
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl Selection {
    /// Create a selection.
    #[must_use]
    pub fn new(
        area: impl Into<String>,
        board: impl Into<String>,
        subjects: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            area: area.into(),
            board: board.into(),
            subjects: subjects.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a selection from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, FeeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a selection from a JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, FeeError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Subjects joined as a single comma-separated string.
    #[must_use]
    pub fn subjects_summary(&self) -> String {
        self.subjects.join(", ")
    }
}

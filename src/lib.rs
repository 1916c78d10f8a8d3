//! Golden quote data shared by the workspace-level tests.

use std::path::Path;

use serde::Deserialize;

/// Golden file contents.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub cases: Vec<GoldenCase>,
}

/// One known selection and its expected quote.
#[derive(Debug, Deserialize)]
pub struct GoldenCase {
    pub name: String,
    pub area: String,
    pub board: String,
    pub subjects: Vec<String>,
    pub area_fee: u64,
    pub board_fee: u64,
    pub cap: u64,
    pub total: u64,
}

/// Path of the golden file relative to the workspace root.
pub const GOLDEN_PATH: &str = "tests/testdata/quotes_golden.json";

/// Load the golden file from `root`.
///
/// # Panics
///
/// Panics if the file is missing or malformed.
#[must_use]
pub fn load_golden(root: &Path) -> GoldenData {
    let path = root.join(GOLDEN_PATH);
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

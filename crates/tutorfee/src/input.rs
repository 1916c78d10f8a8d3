//! Selection sources for the command line.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use tracing::debug;

use tutorfee_core::error::FeeError;
use tutorfee_core::interfaces::SelectionSource;
use tutorfee_core::selection::Selection;

use crate::config::AppConfig;

/// Selection given as `--area`, `--board`, and `--subject` flags.
pub struct ArgsSource {
    area: Option<String>,
    board: Option<String>,
    subjects: Vec<String>,
}

impl ArgsSource {
    #[must_use]
    pub fn new(area: Option<String>, board: Option<String>, subjects: Vec<String>) -> Self {
        Self {
            area,
            board,
            subjects,
        }
    }
}

impl SelectionSource for ArgsSource {
    fn read_selection(&self) -> Result<Selection, FeeError> {
        let area = self
            .area
            .clone()
            .ok_or_else(|| FeeError::Config("missing --area (or TUTORFEE_AREA)".into()))?;
        let board = self
            .board
            .clone()
            .ok_or_else(|| FeeError::Config("missing --board (or TUTORFEE_BOARD)".into()))?;
        Ok(Selection::new(area, board, self.subjects.iter().cloned()))
    }
}

/// Selection read from a JSON document on disk or stdin.
pub enum JsonSource {
    File(PathBuf),
    Stdin,
}

impl JsonSource {
    /// `-` selects stdin, anything else is a file path.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl SelectionSource for JsonSource {
    fn read_selection(&self) -> Result<Selection, FeeError> {
        match self {
            Self::File(path) => {
                debug!(path = %path.display(), "reading selection file");
                let file = File::open(path)
                    .map_err(|e| FeeError::Input(format!("{}: {e}", path.display())))?;
                Selection::from_reader(BufReader::new(file))
            }
            Self::Stdin => {
                debug!("reading selection from stdin");
                Selection::from_reader(io::stdin().lock())
            }
        }
    }
}

/// Build the selection source the configuration asks for.
#[must_use]
pub fn source_for(config: &AppConfig) -> Box<dyn SelectionSource> {
    match &config.selection {
        Some(arg) => Box::new(JsonSource::from_arg(arg)),
        None => Box::new(ArgsSource::new(
            config.area.clone(),
            config.board.clone(),
            config.subjects.clone(),
        )),
    }
}

//! Boundary interfaces: where selections come from and where quotes go.

use std::io::{self, Write};

use crate::calculator::Quote;
use crate::error::FeeError;
use crate::selection::Selection;

/// Source of a form selection.
pub trait SelectionSource {
    /// Read the current selection.
    fn read_selection(&self) -> Result<Selection, FeeError>;
}

/// Display that receives a computed quote.
pub trait QuoteDisplay {
    /// Write the quote to `out`.
    fn display(&self, quote: &Quote, out: &mut dyn Write) -> io::Result<()>;
}

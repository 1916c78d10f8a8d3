//! Listing of the fee tables.

use std::io::{self, Write};

use tutorfee_core::constants::{
    DEFAULT_AREA_FEE, DEFAULT_BOARD_FEE, PREMIUM_SUBJECT_FEE, STANDARD_SUBJECT_FEE,
};
use tutorfee_core::tables::{AREA_FEES, BOARD_FEES, PREMIUM_SUBJECTS};

use crate::output::format_number;
use crate::ui::header;

/// Write the area and board tables, premium subjects, and default fees.
pub fn write_catalog(out: &mut dyn Write, color: bool) -> io::Result<()> {
    writeln!(out, "{}", header("Areas", color))?;
    for (area, fee) in AREA_FEES {
        writeln!(out, "  {area:<28} {:>10}", format_number(*fee))?;
    }
    writeln!(out, "  {:<28} {:>10}", "(other)", format_number(DEFAULT_AREA_FEE))?;

    writeln!(out, "\n{}", header("Boards", color))?;
    for (board, fee) in BOARD_FEES {
        writeln!(out, "  {board:<28} {:>10}", format_number(*fee))?;
    }
    writeln!(out, "  {:<28} {:>10}", "(other)", format_number(DEFAULT_BOARD_FEE))?;

    writeln!(out, "\n{}", header("Subjects", color))?;
    writeln!(
        out,
        "  premium  {:>10}  {}",
        format_number(PREMIUM_SUBJECT_FEE),
        PREMIUM_SUBJECTS.join(", ")
    )?;
    writeln!(
        out,
        "  standard {:>10}  (all other subjects)",
        format_number(STANDARD_SUBJECT_FEE)
    )?;
    writeln!(out, "\nEach subject fee is capped at area fee + board fee.")
}

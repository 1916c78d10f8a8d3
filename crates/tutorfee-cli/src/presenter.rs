//! Quote displays.

use std::io::{self, Write};

use tutorfee_core::calculator::Quote;
use tutorfee_core::interfaces::QuoteDisplay;

use crate::output::format_number;
use crate::ui::{capped_marker, emphasis, header};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable itemised quote.
    #[default]
    Text,
    /// The full quote as JSON.
    Json,
}

/// Itemised, human-readable quote.
pub struct TextDisplay {
    color: bool,
}

impl TextDisplay {
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl QuoteDisplay for TextDisplay {
    fn display(&self, quote: &Quote, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", header("Fee Quote", self.color))?;
        writeln!(out, "Area:  {:<24} {:>10}", quote.area, format_number(quote.area_fee))?;
        writeln!(out, "Board: {:<24} {:>10}", quote.board, format_number(quote.board_fee))?;
        writeln!(out, "Per-subject cap: {}", format_number(quote.cap))?;

        if !quote.items.is_empty() {
            writeln!(out, "\nSubjects:")?;
            writeln!(out, "{:-<60}", "")?;
            for item in &quote.items {
                let marker = if item.capped {
                    format!(" {}", capped_marker(self.color))
                } else {
                    String::new()
                };
                writeln!(
                    out,
                    "  {:<28} {:<9} {:>10}{marker}",
                    item.subject,
                    item.tier,
                    format_number(item.fee),
                )?;
            }
            writeln!(out, "{:-<60}", "")?;
            let capped = quote.capped_count();
            if capped > 0 {
                writeln!(out, "{capped} of {} subject fee(s) capped", quote.items.len())?;
            }
        }

        writeln!(
            out,
            "Total: {}",
            emphasis(&format_number(quote.total), self.color)
        )
    }
}

/// Only the total, as a bare integer.
pub struct QuietDisplay;

impl QuoteDisplay for QuietDisplay {
    fn display(&self, quote: &Quote, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", quote.total)
    }
}

/// The full quote as pretty-printed JSON.
pub struct JsonDisplay;

impl QuoteDisplay for JsonDisplay {
    fn display(&self, quote: &Quote, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, quote)?;
        writeln!(out)
    }
}

/// Pick the display for the requested format. `quiet` wins over `format`.
#[must_use]
pub fn display_for(format: OutputFormat, quiet: bool, color: bool) -> Box<dyn QuoteDisplay> {
    if quiet {
        return Box::new(QuietDisplay);
    }
    match format {
        OutputFormat::Text => Box::new(TextDisplay::new(color)),
        OutputFormat::Json => Box::new(JsonDisplay),
    }
}

//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use tutorfee_cli::catalog::write_catalog;
use tutorfee_cli::output::write_to_file;
use tutorfee_cli::presenter::display_for;
use tutorfee_cli::ui::is_color_disabled;
use tutorfee_core::calculator::FeeCalculator;
use tutorfee_core::error::FeeError;

use crate::config::AppConfig;
use crate::input::source_for;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        tutorfee_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    if config.list {
        let mut stdout = io::stdout().lock();
        write_catalog(&mut stdout, !is_color_disabled()).map_err(output_error)?;
        return Ok(());
    }

    run_quote(config)
}

fn run_quote(config: &AppConfig) -> Result<()> {
    let selection = source_for(config).read_selection()?;
    info!(
        area = %selection.area,
        board = %selection.board,
        subjects = %selection.subjects_summary(),
        "pricing selection"
    );

    let quote = FeeCalculator::new().quote(&selection);

    let display = display_for(config.format, config.quiet, !is_color_disabled());
    let mut stdout = io::stdout().lock();
    display.display(&quote, &mut stdout).map_err(output_error)?;
    stdout.flush().map_err(output_error)?;

    if let Some(ref path) = config.output {
        write_to_file(path, quote.total)
            .map_err(|e| FeeError::Output(format!("{path}: {e}")))?;
    }

    Ok(())
}

fn output_error(err: io::Error) -> FeeError {
    FeeError::Output(err.to_string())
}

//! TutorFee, a tutoring fee quote calculator.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tutorfee_lib::{app, config, errors, version};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    let rust_log_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let mut filter = EnvFilter::from_default_env();
    if let Some(level) = config.log_directive(rust_log_set) {
        filter = filter.add_directive(level.into());
    }

    // Logs go to stderr so stdout carries only the quote
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    tracing::debug!(version = %version::full_version(), "starting");

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tutorfee_cli::ui::print_error(&format!("{err:#}"));
            let code = u8::try_from(errors::exit_code(&err)).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

//! Error handling and exit codes.

use tutorfee_core::constants::exit_codes;
use tutorfee_core::error::FeeError;

/// Map a boundary error to its exit code.
pub fn handle_error(err: &FeeError) -> i32 {
    match err {
        FeeError::Input(_) => exit_codes::ERROR_INPUT,
        FeeError::Config(_) => exit_codes::ERROR_CONFIG,
        FeeError::Output(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error returned by [`crate::app::run`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FeeError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

use std::time::Duration;

use proptyos_domain::ProptyError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"sales::move_to_approval"`).
/// * `elapsed` - Duration the command execution took.
/// * `error_type` - Stable error label when the command failed.
///
/// Callers must avoid forwarding client names or amounts in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error_type: Option<&str>) {
    let duration_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);

    match error_type {
        None => info!(command, duration_us, "command_execution_success"),
        Some(error_type) => {
            warn!(command, duration_us, error_type, "command_execution_failure");
        }
    }
}

/// Convert a `ProptyError` into a stable label suitable for logging.
#[inline]
#[must_use]
pub const fn error_label(error: &ProptyError) -> &'static str {
    match error {
        ProptyError::Config(_) => "config",
        ProptyError::NotFound(_) => "not_found",
        ProptyError::InvalidInput(_) => "invalid_input",
        ProptyError::InvalidTransition(_) => "invalid_transition",
        ProptyError::Internal(_) => "internal",
    }
}

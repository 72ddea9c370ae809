//! Command execution helpers
//!
//! Keeps every command wrapper to its business call: timing, logging and
//! error stringification happen here.

use std::time::Instant;

use proptyos_domain::Result as DomainResult;

use crate::utils::logging::{error_label, log_command_execution};

/// Run a command body, log its outcome and flatten the error for the UI.
///
/// # Example
///
/// ```rust,ignore
/// pub fn my_command(ctx: &AppContext, id: String) -> Result<(), String> {
///     execute_command("sales::my_command", || {
///         ctx.sales.move_to_approval(&id).map_err(Into::into)
///     })
/// }
/// ```
///
/// # Errors
/// Returns the display form of the body's `ProptyError`.
pub fn execute_command<T, F>(command_name: &str, command_fn: F) -> Result<T, String>
where
    F: FnOnce() -> DomainResult<T>,
{
    let start = Instant::now();
    let result = command_fn();
    let error_type = result.as_ref().err().map(error_label);

    log_command_execution(command_name, start.elapsed(), error_type);

    result.map_err(|e| e.to_string())
}

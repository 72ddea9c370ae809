//! Settings commands

use crate::utils::execute_command;
use crate::AppContext;

/// Resolve a path against the configured backend (`{base}/{version}/{path}`).
///
/// # Errors
/// Never fails; the `Result` keeps the command signature uniform.
pub fn api_endpoint(ctx: &AppContext, path: &str) -> Result<String, String> {
    execute_command("settings::api_endpoint", || Ok(ctx.config.api.versioned_url(path)))
}

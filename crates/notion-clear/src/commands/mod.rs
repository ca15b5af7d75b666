//! Subcommand implementations.

pub mod count;
pub mod purge;

use notion_core::IntegrationToken;

use crate::config::{Config, TOKEN_VAR};
use crate::output;

/// Returns the token, or reports why there is none.
///
/// A missing or malformed token ends the run without a failure exit.
fn require_token(config: &Config) -> Option<IntegrationToken> {
    match config.token() {
        Some(Ok(token)) => Some(token),
        Some(Err(e)) => {
            output::error(&format!("Invalid {}: {}", TOKEN_VAR, e));
            None
        }
        None => {
            output::error(&format!("Missing {} in environment or .env", TOKEN_VAR));
            None
        }
    }
}

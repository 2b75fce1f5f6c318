use crate::cli::actions::{Action, fetch};
use anyhow::Result;

/// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Fetch(args) => fetch::execute(args).await,
    }
}

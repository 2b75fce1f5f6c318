//! Map validated CLI arguments to an [`Action`].

use crate::cli::actions::{Action, fetch::Args};
use crate::cli::commands::{ARG_TIMEOUT, ARG_URL};
use crate::users::USERS_URL;
use anyhow::Result;
use std::time::Duration;

/// # Errors
/// Returns an error if the arguments cannot be mapped to an action.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let url = matches
        .get_one::<String>(ARG_URL)
        .cloned()
        .unwrap_or_else(|| USERS_URL.to_string());

    let timeout = match matches.get_one::<u64>(ARG_TIMEOUT).copied().unwrap_or(30) {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };

    Ok(Action::Fetch(Args { url, timeout }))
}

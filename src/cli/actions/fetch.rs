use crate::{
    APP_USER_AGENT,
    users::{ReqwestTransport, TracingSink, UserRecord, fetch_users_from},
};
use anyhow::{Context, Result};
use std::{io::Write, time::Duration};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub url: String,
    pub timeout: Option<Duration>,
}

/// Run one fetch and print the users as a JSON array on stdout.
///
/// A failed fetch still prints `[]`; the cause goes to the log.
/// # Errors
/// Returns an error if the HTTP client cannot be built or stdout cannot be written.
pub async fn execute(args: Args) -> Result<()> {
    let transport = ReqwestTransport::new(APP_USER_AGENT, args.timeout)
        .context("Failed to build HTTP client")?;

    let users = fetch_users_from(&args.url, &transport, &TracingSink).await;

    info!("fetched {} users from {}", users.len(), args.url);

    let stdout = std::io::stdout();
    write_users(stdout.lock(), &users)
}

/// # Errors
/// Returns an error if serialization or the write fails.
pub fn write_users<W: Write>(mut writer: W, users: &[UserRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, users)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

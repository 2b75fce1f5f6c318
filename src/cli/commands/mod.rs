pub mod logging;

use crate::users::USERS_URL;
use clap::{
    Arg, ColorChoice, Command,
    builder::{
        ValueParser,
        styling::{AnsiColor, Effects, Styles},
    },
};
use url::Url;

pub const ARG_URL: &str = "url";
pub const ARG_TIMEOUT: &str = "timeout";

/// Accept only absolute http(s) URLs with a host.
#[must_use]
pub fn validator_url() -> ValueParser {
    ValueParser::from(move |value: &str| -> std::result::Result<String, String> {
        let url = Url::parse(value).map_err(|e| format!("invalid URL: {e}"))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("unsupported scheme: {}", url.scheme()));
        }

        if url.host().is_none() {
            return Err("invalid URL: no host specified".to_string());
        }

        Ok(value.to_string())
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("userfetch")
        .about("Fetch user records from a remote JSON endpoint")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_URL)
                .long("url")
                .help("Endpoint serving the JSON array of users")
                .default_value(USERS_URL)
                .env("USERFETCH_URL")
                .value_parser(validator_url()),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .short('t')
                .long("timeout")
                .help("Request timeout in seconds, 0 disables it")
                .default_value("30")
                .env("USERFETCH_TIMEOUT")
                .value_parser(clap::value_parser!(u64)),
        );

    logging::with_args(command)
}

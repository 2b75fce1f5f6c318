//! # userfetch
//!
//! `userfetch` retrieves a list of user records from a fixed remote endpoint
//! that serves them as a JSON array.
//!
//! ## Contract
//!
//! The fetch is best effort. [`users::fetch_users`] always returns a vector:
//! the decoded records on success, an empty vector on any failure. Failures are
//! reported as structured [`users::Diagnostic`] values through an injected
//! [`users::DiagnosticSink`], and the default [`users::TracingSink`] forwards
//! them to `tracing`.
//!
//! Callers that need to know *why* a fetch failed use
//! [`users::try_fetch_users`], which returns the categorized
//! [`users::FetchError`] instead of absorbing it.
//!
//! ## Transport
//!
//! The HTTP client is injected through the [`users::Transport`] trait, so tests
//! can program a status, a body, or a failure without touching process-wide
//! state. [`users::ReqwestTransport`] is the production implementation.

pub mod cli;
pub mod users;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

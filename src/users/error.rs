use super::diagnostic::{Diagnostic, DiagnosticCategory};
use super::transport::BoxError;
use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to make HTTP request: {0}")]
    Transport(#[source] BoxError),
    #[error("Failed to get users. Status code: {}", .0.as_u16())]
    UnexpectedStatus(StatusCode),
    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] BoxError),
    #[error("Failed to unmarshal response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    #[must_use]
    pub const fn category(&self) -> DiagnosticCategory {
        match self {
            Self::Transport(_) => DiagnosticCategory::Transport,
            Self::UnexpectedStatus(_) => DiagnosticCategory::UnexpectedStatus,
            Self::BodyRead(_) => DiagnosticCategory::BodyRead,
            Self::Decode(_) => DiagnosticCategory::Decode,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<&FetchError> for Diagnostic {
    fn from(err: &FetchError) -> Self {
        Self {
            category: err.category(),
            message: err.to_string(),
            status: err.status().map(|status| status.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_unexpected_status_diagnostic() {
        let err = FetchError::UnexpectedStatus(StatusCode::NOT_FOUND);
        let diagnostic = Diagnostic::from(&err);

        assert_eq!(diagnostic.category, DiagnosticCategory::UnexpectedStatus);
        assert_eq!(diagnostic.message, "Failed to get users. Status code: 404");
        assert_eq!(diagnostic.status, Some(404));
    }

    #[test]
    fn test_body_read_message() {
        let err = FetchError::BodyRead(Box::new(io::Error::other("forced read error")));

        assert_eq!(err.category(), DiagnosticCategory::BodyRead);
        assert_eq!(err.status(), None);
        assert_eq!(
            err.to_string(),
            "Failed to read response body: forced read error"
        );
    }

    #[test]
    fn test_every_message_starts_with_failed() {
        let decode = serde_json::from_str::<Vec<u8>>("[").unwrap_err();
        let errors = [
            FetchError::Transport(Box::new(io::Error::from(io::ErrorKind::UnexpectedEof))),
            FetchError::UnexpectedStatus(StatusCode::INTERNAL_SERVER_ERROR),
            FetchError::BodyRead("boom".into()),
            FetchError::Decode(decode),
        ];

        for err in &errors {
            assert!(err.to_string().starts_with("Failed"), "{err}");
        }
    }
}

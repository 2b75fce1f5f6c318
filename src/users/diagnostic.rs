//! Structured failure reports emitted by the fetcher.

use std::{
    fmt,
    sync::{Mutex, PoisonError},
};
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCategory {
    /// No response was obtained.
    Transport,
    /// A response arrived with a status other than 200.
    UnexpectedStatus,
    /// The status was 200 but the body stream failed.
    BodyRead,
    /// The body is not a JSON array of user records.
    Decode,
}

impl DiagnosticCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::UnexpectedStatus => "unexpected_status",
            Self::BodyRead => "body_read",
            Self::Decode => "decode",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub message: String,
    /// HTTP status, only set for [`DiagnosticCategory::UnexpectedStatus`].
    pub status: Option<u16>,
}

/// Destination for diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing` at ERROR level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        error!(
            category = %diagnostic.category,
            status = diagnostic.status,
            "{}",
            diagnostic.message
        );
    }
}

/// Keeps every diagnostic in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io::Write,
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_category_as_str() {
        assert_eq!(DiagnosticCategory::Transport.to_string(), "transport");
        assert_eq!(
            DiagnosticCategory::UnexpectedStatus.to_string(),
            "unexpected_status"
        );
        assert_eq!(DiagnosticCategory::BodyRead.to_string(), "body_read");
        assert_eq!(DiagnosticCategory::Decode.to_string(), "decode");
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        assert!(sink.is_empty());

        sink.emit(Diagnostic {
            category: DiagnosticCategory::Transport,
            message: "Failed to make HTTP request: first".to_string(),
            status: None,
        });
        sink.emit(Diagnostic {
            category: DiagnosticCategory::UnexpectedStatus,
            message: "Failed to get users. Status code: 500".to_string(),
            status: Some(500),
        });

        let diagnostics = sink.diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].category, DiagnosticCategory::Transport);
        assert_eq!(diagnostics[1].status, Some(500));
    }

    #[test]
    fn test_tracing_sink_writes_to_subscriber() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingSink.emit(Diagnostic {
                category: DiagnosticCategory::UnexpectedStatus,
                message: "Failed to get users. Status code: 404".to_string(),
                status: Some(404),
            });
        });

        let output = buffer.contents();
        assert!(output.contains("ERROR"), "output: {output}");
        assert!(
            output.contains("Failed to get users. Status code: 404"),
            "output: {output}"
        );
        assert!(output.contains("category=unexpected_status"), "output: {output}");
        assert!(output.contains("status=404"), "output: {output}");
    }
}

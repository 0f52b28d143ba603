//! Injectable diagnostics sink backing the "logger" configuration option (§6).
//!
//! The teacher crate injects its HTTP transport as a trait object (`opentelemetry_http::HttpClient`);
//! this crate applies the same idea to diagnostics, so a host application can route channel-level
//! log lines wherever it already collects logs, while the out-of-the-box default simply forwards
//! to `tracing`.

use std::fmt;
use std::sync::Arc;

/// One diagnostic event raised by the channel or its collaborators. Every variant maps to one of
/// the categories enumerated in §7 of the design.
#[derive(Debug, Clone)]
pub enum Diagnostic {
    /// A string field was truncated during sanitization (§3's invariants).
    Truncated { message: String },
    /// One or more items failed to serialize and were dropped from a batch (§4.1).
    SerializationFailed { failed_items: usize },
    /// A transport-level error occurred sending a batch (§7, category 3).
    TransportFailed { error: String },
    /// The server rejected a batch with a non-retryable status (§7, category 4).
    UploadRejected {
        status: u16,
        items_received: usize,
        items_accepted: usize,
    },
    /// Items were scheduled for retry (§7, category 5).
    RetryScheduled { items: usize, attempt: u32 },
    /// An item exhausted its retry budget and was dropped.
    RetryExhausted { items: usize },
    /// Throttling ended; reports how many items were dropped while it was in effect (§4.3).
    ThrottleEnded { items_dropped: u64 },
    /// `Close` or `Stop` discarded items that were queued or in flight (§7, category 7).
    ShutdownAbandoned { items: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Truncated { message } => write!(f, "{message}"),
            Diagnostic::SerializationFailed { failed_items } => {
                write!(f, "{failed_items} item(s) failed to serialize and were dropped")
            }
            Diagnostic::TransportFailed { error } => write!(f, "transport error: {error}"),
            Diagnostic::UploadRejected {
                status,
                items_received,
                items_accepted,
            } => write!(
                f,
                "upload rejected with status {status}: {items_accepted}/{items_received} items accepted"
            ),
            Diagnostic::RetryScheduled { items, attempt } => {
                write!(f, "scheduling {items} item(s) for retry attempt {attempt}")
            }
            Diagnostic::RetryExhausted { items } => {
                write!(f, "{items} item(s) exhausted their retry budget and were dropped")
            }
            Diagnostic::ThrottleEnded { items_dropped } => write!(
                f,
                "throttling ended; {items_dropped} item(s) were dropped while throttled"
            ),
            Diagnostic::ShutdownAbandoned { items } => {
                write!(f, "shutdown abandoned {items} item(s)")
            }
        }
    }
}

/// Sink for diagnostic and failure lines raised by the channel.
///
/// The default implementation (`TracingDiagnosticsSink`) forwards every diagnostic to `tracing`
/// at a severity appropriate to its category.
pub trait DiagnosticsSink: Send + Sync + fmt::Debug {
    /// Records one diagnostic event.
    fn record(&self, diagnostic: Diagnostic);
}

/// Default sink: forwards every diagnostic to `tracing`.
#[derive(Debug, Default)]
pub struct TracingDiagnosticsSink;

impl DiagnosticsSink for TracingDiagnosticsSink {
    fn record(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::Truncated { .. } | Diagnostic::RetryScheduled { .. } => {
                tracing::debug!(%diagnostic, "telemetry channel diagnostic");
            }
            Diagnostic::SerializationFailed { .. }
            | Diagnostic::UploadRejected { .. }
            | Diagnostic::RetryExhausted { .. }
            | Diagnostic::ThrottleEnded { .. }
            | Diagnostic::ShutdownAbandoned { .. } => {
                tracing::warn!(%diagnostic, "telemetry channel diagnostic");
            }
            Diagnostic::TransportFailed { .. } => {
                tracing::error!(%diagnostic, "telemetry channel diagnostic");
            }
        }
    }
}

pub(crate) fn default_sink() -> Arc<dyn DiagnosticsSink> {
    Arc::new(TracingDiagnosticsSink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct CollectingSink(std::sync::Mutex<Vec<String>>);

    impl DiagnosticsSink for CollectingSink {
        fn record(&self, diagnostic: Diagnostic) {
            self.0.lock().unwrap().push(diagnostic.to_string());
        }
    }

    #[test]
    fn sink_receives_formatted_diagnostics() {
        let sink = CollectingSink::default();
        sink.record(Diagnostic::ThrottleEnded { items_dropped: 16 });
        let recorded = sink.0.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert!(recorded[0].contains("16"));
    }
}

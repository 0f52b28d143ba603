//! Instrumentation key and ambient tags shared by every envelope a client produces (§4.5).

use crate::diagnostics::{Diagnostic, DiagnosticsSink};
use crate::models::{sanitize_tags, Envelope, EventData, Properties};
use chrono::{SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Wraps event data in a fully-populated [`Envelope`], stamping the current wall-clock time and
/// the instrumentation key/tags configured at init.
#[derive(Debug)]
pub(crate) struct Context {
    instrumentation_key: String,
    tags: BTreeMap<String, String>,
    sink: Arc<dyn DiagnosticsSink>,
}

impl Context {
    /// Sanitizes `tags` once up front, reporting any truncation through `sink`.
    pub(crate) fn new(
        instrumentation_key: String,
        mut tags: BTreeMap<String, String>,
        sink: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        for message in sanitize_tags(&mut tags) {
            sink.record(Diagnostic::Truncated { message });
        }
        Context {
            instrumentation_key,
            tags,
            sink,
        }
    }

    /// Builds an envelope for `name`/`properties`, stamped with the current time and this
    /// context's instrumentation key and tags, discriminator `"EventData"`.
    pub(crate) fn envelop(&self, name: String, properties: Option<Properties>) -> Envelope {
        let event = EventData::new(name, properties);
        let time = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut envelope = Envelope::new_event(
            self.instrumentation_key.clone(),
            self.tags.clone(),
            time,
            event,
        );
        for message in envelope.sanitize() {
            self.sink.record(Diagnostic::Truncated { message });
        }
        envelope
    }
}

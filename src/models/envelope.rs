use crate::models::{sanitize_tags, truncate_at_char_boundary, Base, Data};
use serde::Serialize;
use std::collections::BTreeMap;

/// System variables for a telemetry item, plus its payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Envelope {
    /// Schema version of the envelope itself.
    pub(crate) ver: i32,

    /// Type name of the telemetry data item, e.g. `Microsoft.ApplicationInsights.Event`.
    pub(crate) name: String,

    /// Event date time when the telemetry item was created, in UTC ISO 8601 with a trailing `Z`.
    pub(crate) time: String,

    /// Sampling rate used by the application. This telemetry item represents `1 / sampleRate`
    /// actual telemetry items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sample_rate: Option<f64>,

    /// Sequence field used to track absolute order and the possibility of lost events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) seq: Option<String>,

    /// The application's instrumentation key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) i_key: Option<String>,

    /// Key/value collection of context properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tags: Option<BTreeMap<String, String>>,

    /// Telemetry data item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data: Option<Base>,
}

impl Envelope {
    pub(crate) fn new_event(
        i_key: String,
        tags: BTreeMap<String, String>,
        time: String,
        event: crate::models::EventData,
    ) -> Self {
        Envelope {
            ver: 1,
            name: "Microsoft.ApplicationInsights.Event".to_string(),
            time,
            sample_rate: Some(100.0),
            seq: None,
            i_key: Some(i_key),
            tags: if tags.is_empty() { None } else { Some(tags) },
            data: Some(Base::Data(Data::Event(event))),
        }
    }

    /// Truncates over-long fields in place per §3's invariants, returning one diagnostic message
    /// per truncation.
    pub(crate) fn sanitize(&mut self) -> Vec<String> {
        let mut diagnostics = Vec::new();

        if truncate_at_char_boundary(&mut self.name, 1024) {
            diagnostics.push("envelope name truncated to 1024 bytes".to_string());
        }
        if let Some(i_key) = self.i_key.as_mut() {
            if truncate_at_char_boundary(i_key, 40) {
                diagnostics.push("instrumentation key truncated to 40 bytes".to_string());
            }
        }
        if let Some(seq) = self.seq.as_mut() {
            if truncate_at_char_boundary(seq, 64) {
                diagnostics.push("sequence truncated to 64 bytes".to_string());
            }
        }
        if let Some(tags) = self.tags.as_mut() {
            diagnostics.extend(sanitize_tags(tags));
        }
        if let Some(Base::Data(Data::Event(event))) = self.data.as_mut() {
            diagnostics.extend(event.sanitize());
        }

        diagnostics
    }
}

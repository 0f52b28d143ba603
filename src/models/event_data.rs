use crate::models::{sanitize_properties, LimitedLenString512, Properties};
use serde::Serialize;

/// Instances of Event represent structured event records that can be grouped and searched by
/// their properties. An event data item also creates a metric of event count by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EventData {
    /// Schema version.
    pub(crate) ver: i32,

    /// Event name. Keep it low cardinality to allow proper grouping and useful metrics.
    pub(crate) name: LimitedLenString512,

    /// Collection of custom properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) properties: Option<Properties>,
}

impl EventData {
    pub(crate) fn new(name: String, properties: Option<Properties>) -> Self {
        let (name, _truncated) = LimitedLenString512::new_truncating(name);
        EventData {
            ver: 2,
            name,
            properties,
        }
    }

    /// Truncates the event name (already bounded by construction, this only matters if the name
    /// is replaced in place) and every property, returning one diagnostic per truncation.
    pub(crate) fn sanitize(&mut self) -> Vec<String> {
        let mut diagnostics = Vec::new();
        let (name, truncated) = LimitedLenString512::new_truncating(self.name.to_string());
        if truncated {
            diagnostics.push("event name truncated to 512 bytes".to_string());
        }
        self.name = name;
        diagnostics.extend(sanitize_properties(&mut self.properties));
        diagnostics
    }
}

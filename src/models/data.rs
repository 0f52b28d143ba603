use crate::models::EventData;
use serde::Serialize;

/// Data struct to contain both the `baseType` discriminator and the `baseData` body.
///
/// Only `EventData` is in scope for this crate (see §3 of the design); the enum shape is kept so
/// that a future payload variant slots in the same way the teacher crate's `Data` enum grows one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "baseType", content = "baseData")]
pub(crate) enum Data {
    #[serde(rename = "EventData")]
    Event(EventData),
}

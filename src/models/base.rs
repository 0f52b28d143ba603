use crate::models::Data;
use serde::Serialize;

/// Wraps the `data` section of an envelope (the "B" and "C" sections in Application Insights
/// terminology).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum Base {
    Data(Data),
}

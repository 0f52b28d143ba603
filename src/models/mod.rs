mod base;
mod context_tag_keys;
mod data;
mod envelope;
mod event_data;
mod limited_len_string;
mod sanitize;

pub(crate) use base::*;
pub(crate) use context_tag_keys::sanitize_tags;
pub(crate) use data::*;
pub(crate) use envelope::*;
pub(crate) use event_data::*;
pub(crate) use limited_len_string::truncate_at_char_boundary;
pub use limited_len_string::{
    LimitedLenString, LimitedLenString1024, LimitedLenString150, LimitedLenString40,
    LimitedLenString512, LimitedLenString64, LimitedLenString8192,
};
pub(crate) use sanitize::sanitize_properties;

/// Custom property map attached to an event.
pub type Properties = std::collections::BTreeMap<String, String>;

//! Configuration surface (§6): a consuming builder over every recognized option, following the
//! teacher's `Pipeline`/`TracesPipeline` `with_*`-method idiom.

use crate::diagnostics::DiagnosticsSink;
use crate::http_client::HttpClient;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

pub(crate) const DEFAULT_ENDPOINT: &str = "https://dc.services.visualstudio.com/v2/track";
pub(crate) const DEFAULT_MAX_BATCH_SIZE: usize = 1024;
pub(crate) const DEFAULT_MAX_BATCH_INTERVAL: Duration = Duration::from_secs(10);

/// Predicate deciding whether an event name should be uploaded at all. Rejected names are
/// silently dropped at the client façade (§6).
pub type UploadFilter = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Configuration for a [`Client`](crate::Client), following the builder idiom the teacher uses
/// for its own `Pipeline`.
pub struct Config {
    pub(crate) instrumentation_key: String,
    pub(crate) endpoint: String,
    pub(crate) max_batch_size: usize,
    pub(crate) max_batch_interval: Duration,
    pub(crate) http_client: Option<Arc<dyn HttpClient>>,
    pub(crate) tags: BTreeMap<String, String>,
    pub(crate) logger: Option<Arc<dyn DiagnosticsSink>>,
    pub(crate) upload_filter: Option<UploadFilter>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("max_batch_size", &self.max_batch_size)
            .field("max_batch_interval", &self.max_batch_interval)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Starts a config for the given instrumentation key, with every other option defaulted per
    /// §4.4's initialization contract.
    pub fn new<T: Into<String>>(instrumentation_key: T) -> Self {
        Config {
            instrumentation_key: instrumentation_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            max_batch_interval: DEFAULT_MAX_BATCH_INTERVAL,
            http_client: None,
            tags: BTreeMap::new(),
            logger: None,
            upload_filter: None,
        }
    }

    /// Overrides the target ingestion endpoint.
    pub fn with_endpoint<T: Into<String>>(self, endpoint: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..self
        }
    }

    /// Overrides the maximum number of envelopes per upload and per pending buffer.
    pub fn with_max_batch_size(self, max_batch_size: usize) -> Self {
        Self {
            max_batch_size,
            ..self
        }
    }

    /// Overrides the maximum wait before uploading a non-full batch.
    pub fn with_max_batch_interval(self, max_batch_interval: Duration) -> Self {
        Self {
            max_batch_interval,
            ..self
        }
    }

    /// Injects the HTTP transport; defaults to the `reqwest`-backed client when the
    /// `reqwest-client` feature is enabled.
    pub fn with_http_client(self, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client: Some(http_client),
            ..self
        }
    }

    /// Merges `tags` into every envelope's tag map, in addition to any tags already set.
    pub fn with_tags(self, tags: BTreeMap<String, String>) -> Self {
        let mut merged = self.tags;
        merged.extend(tags);
        Self {
            tags: merged,
            ..self
        }
    }

    /// Injects the diagnostics sink; defaults to a `tracing`-backed sink.
    pub fn with_logger(self, logger: Arc<dyn DiagnosticsSink>) -> Self {
        Self {
            logger: Some(logger),
            ..self
        }
    }

    /// Sets a predicate on event name; names it rejects are dropped before ever reaching the
    /// channel.
    pub fn with_upload_filter(self, upload_filter: UploadFilter) -> Self {
        Self {
            upload_filter: Some(upload_filter),
            ..self
        }
    }
}

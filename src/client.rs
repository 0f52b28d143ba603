//! The client façade (§4.4): lazy one-time init, event construction, counter-style increments,
//! and the two shutdown modes.

use crate::channel::{Channel, CloseOutcome};
use crate::config::{Config, UploadFilter};
use crate::context::Context;
use crate::diagnostics::DiagnosticsSink;
use crate::error::Error;
use crate::http_client::HttpClient;
use crate::models::Properties;
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[cfg(feature = "reqwest-client")]
fn default_http_client() -> Option<Arc<dyn HttpClient>> {
    Some(Arc::new(reqwest::Client::new()))
}

#[cfg(not(feature = "reqwest-client"))]
fn default_http_client() -> Option<Arc<dyn HttpClient>> {
    None
}

struct PendingConfig {
    endpoint: http::Uri,
    instrumentation_key: String,
    tags: BTreeMap<String, String>,
    max_batch_size: usize,
    max_batch_interval: Duration,
    http_client: Arc<dyn HttpClient>,
    logger: Arc<dyn DiagnosticsSink>,
}

struct Initialized {
    context: Context,
    channel: Channel,
}

struct Inner {
    pending: Mutex<Option<PendingConfig>>,
    state: OnceCell<Initialized>,
    closed: AtomicBool,
    upload_filter: Option<UploadFilter>,
}

impl Inner {
    /// Runs the channel's lazy one-time init (§3/§4.4): exactly one call across all concurrent
    /// callers actually builds the `Context`/`Channel`; the rest observe the cached result.
    fn ensure_init(&self) -> &Initialized {
        self.state.get_or_init(|| {
            let mut guard = self.pending.lock().expect("pending config mutex poisoned");
            let pending = guard.take().expect("pending config consumed exactly once");
            let context = Context::new(
                pending.instrumentation_key,
                pending.tags,
                pending.logger.clone(),
            );
            let channel = Channel::spawn(
                pending.endpoint,
                pending.http_client,
                pending.logger,
                pending.max_batch_size,
                pending.max_batch_interval,
            );
            Initialized { context, channel }
        })
    }
}

/// Client-side telemetry ingestion channel.
///
/// Cheap to clone (an `Arc` around shared state); a process typically keeps one instance per
/// instrumentation key (§9's "global state" design note).
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("closed", &self.inner.closed.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Validates `config` and returns a client whose channel is created lazily on first use.
    ///
    /// Fails only for the conditions §7 calls "init misuse": an empty instrumentation key, an
    /// unparseable endpoint, or no HTTP transport available.
    pub fn new(config: Config) -> Result<Self, Error> {
        if config.instrumentation_key.is_empty() {
            return Err(Error::EmptyInstrumentationKey);
        }
        let endpoint: http::Uri = config.endpoint.parse()?;
        let http_client = config
            .http_client
            .or_else(default_http_client)
            .ok_or(Error::MissingHttpClient)?;
        let logger = config
            .logger
            .unwrap_or_else(crate::diagnostics::default_sink);

        let pending = PendingConfig {
            endpoint,
            instrumentation_key: config.instrumentation_key,
            tags: config.tags,
            max_batch_size: config.max_batch_size,
            max_batch_interval: config.max_batch_interval,
            http_client,
            logger,
        };

        Ok(Client {
            inner: Arc::new(Inner {
                pending: Mutex::new(Some(pending)),
                state: OnceCell::new(),
                closed: AtomicBool::new(false),
                upload_filter: config.upload_filter,
            }),
        })
    }

    /// Builds an [`Event`] for `name`, for counter-style use via [`Event::add`].
    pub fn new_event<T: Into<String>>(&self, name: T) -> Event {
        Event {
            client: self.inner.clone(),
            name: name.into(),
            properties: None,
        }
    }

    /// Constructs an event carrying `name`/`properties` and increments its count by 1.
    /// Equivalent to `self.new_event(name).with_properties(properties).add(1)`.
    pub async fn track_event<T: Into<String>>(&self, name: T, properties: Option<Properties>) {
        let mut event = self.new_event(name);
        event.properties = properties;
        event.add(1).await;
    }

    /// Sends a flush signal; returns once the coordinator has accepted it, not once the pending
    /// batch has actually been transmitted. A no-op once closed.
    pub async fn flush(&self) {
        if let Some(initialized) = self.inner.state.get() {
            initialized.channel.flush().await;
        }
    }

    /// Marks the client closed, enqueues a final flush, and waits for the channel to drain or for
    /// `deadline` to elapse. Idempotent.
    pub async fn close(&self, deadline: CancellationToken) -> CloseOutcome {
        self.inner.closed.store(true, Ordering::Release);
        match self.inner.state.get() {
            Some(initialized) => initialized.channel.close(deadline).await,
            None => CloseOutcome::Drained,
        }
    }

    /// Marks the client closed and cancels the channel immediately, discarding queued and
    /// in-flight items. Idempotent.
    pub fn stop(&self) {
        self.inner.closed.store(true, Ordering::Release);
        if let Some(initialized) = self.inner.state.get() {
            initialized.channel.stop();
        }
    }
}

/// A named event, pending submission via [`Event::add`].
pub struct Event {
    client: Arc<Inner>,
    name: String,
    properties: Option<Properties>,
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event").field("name", &self.name).finish()
    }
}

impl Event {
    /// Attaches custom properties to this event.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Submits `n` copies of this event. A no-op if `n == 0`, the client is closed, or the
    /// configured upload filter rejects this event's name.
    pub async fn add(&self, n: u64) {
        if n == 0 || self.client.closed.load(Ordering::Acquire) {
            return;
        }
        if let Some(filter) = &self.client.upload_filter {
            if !filter(&self.name) {
                return;
            }
        }

        let initialized = self.client.ensure_init();
        for _ in 0..n {
            let envelope = initialized
                .context
                .envelop(self.name.clone(), self.properties.clone());
            initialized.channel.send(envelope).await;
        }
    }
}

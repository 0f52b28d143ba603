//! # Application Insights telemetry channel
//!
//! A client-side ingestion channel for Azure Application Insights: batches telemetry events,
//! uploads them as gzip-compressed NDJSON, and retries transient failures.
//!
//! ## Example
//!
//! ```rust,no_run
//! use appinsights_channel::{Client, Config};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let client = Client::new(Config::new("00000000-0000-0000-0000-000000000000")).unwrap();
//! client.track_event("app started", None).await;
//! client.close(CancellationToken::new()).await;
//! # }
//! ```
#![deny(missing_docs, unreachable_pub, missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

mod channel;
mod client;
mod config;
mod context;
mod diagnostics;
mod error;
mod http_client;
mod models;
mod serializer;
mod transmitter;

pub use channel::CloseOutcome;
pub use client::{Client, Event};
pub use config::{Config, UploadFilter};
pub use diagnostics::{Diagnostic, DiagnosticsSink, TracingDiagnosticsSink};
pub use error::Error;
pub use http_client::{HttpClient, HttpError};
pub use models::{
    LimitedLenString, LimitedLenString1024, LimitedLenString150, LimitedLenString40,
    LimitedLenString512, LimitedLenString64, LimitedLenString8192, Properties,
};
pub use tokio_util::sync::CancellationToken;

/// Result type alias used internally and in crate docs.
pub type Result<T> = std::result::Result<T, Error>;

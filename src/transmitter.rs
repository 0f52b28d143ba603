//! Single-shot HTTP transmission and response classification (§4.2).
//!
//! Grounded on the teacher's own `uploader.rs` for the gzip/POST shape, and on the sibling
//! Application-Insights forks' `transmitter.rs` (`kongsberg-satellite-services/appinsights-rs`,
//! `dmolokanov/appinsights-rs`) for the partial-success and throttling classification, which the
//! teacher's OpenTelemetry-facing uploader never had to implement because it delegated batching
//! and retry to `opentelemetry_sdk`.

use crate::channel::BatchItem;
use crate::diagnostics::{Diagnostic, DiagnosticsSink};
use crate::http_client::HttpClient;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use flate2::{write::GzEncoder, Compression};
use http::{Request, Response, Uri};
use serde::Deserialize;
use std::io::Write;

const STATUS_OK: u16 = 200;
const STATUS_PARTIAL_CONTENT: u16 = 206;
const STATUS_REQUEST_TIMEOUT: u16 = 408;
const STATUS_TOO_MANY_REQUESTS: u16 = 429;
const STATUS_APPLICATION_INACTIVE: u16 = 439;
const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;
const STATUS_SERVICE_UNAVAILABLE: u16 = 503;

fn is_retryable_status(status: u16) -> bool {
    matches!(
        status,
        STATUS_REQUEST_TIMEOUT
            | STATUS_TOO_MANY_REQUESTS
            | STATUS_APPLICATION_INACTIVE
            | STATUS_INTERNAL_SERVER_ERROR
            | STATUS_SERVICE_UNAVAILABLE
    )
}

/// The server's response to an upload, per §6's wire shape.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct BackendResponse {
    items_received: usize,
    items_accepted: usize,
    #[serde(default)]
    errors: Vec<ItemError>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct ItemError {
    index: usize,
    status_code: u16,
}

/// The outcome of one transmission attempt, already classified per §4.2's predicates.
#[derive(Debug)]
pub(crate) enum TransmissionOutcome {
    Success,
    /// `items` is exactly `getRetryItems`'s selection; `throttled`/`retry_after` come from
    /// `isThrottled` and the parsed `Retry-After` header.
    Retry {
        items: Vec<BatchItem>,
        throttled: bool,
        retry_after: Option<DateTime<Utc>>,
    },
    NoRetry,
}

/// Transmits `items` in one HTTP POST and classifies the result. Never returns an error: every
/// failure mode is either `NoRetry` (items are dropped) or `Retry` (items come back for another
/// pass), with the reason recorded through `sink`.
pub(crate) async fn transmit(
    client: &dyn HttpClient,
    endpoint: &Uri,
    items: Vec<BatchItem>,
    sink: &dyn DiagnosticsSink,
) -> TransmissionOutcome {
    let (buffer, sent, failed) = crate::serializer::serialize(items);
    if failed > 0 {
        sink.record(Diagnostic::SerializationFailed {
            failed_items: failed,
        });
    }
    if buffer.is_empty() {
        return TransmissionOutcome::NoRetry;
    }

    let compressed = match gzip(&buffer) {
        Ok(compressed) => compressed,
        Err(error) => {
            sink.record(Diagnostic::TransportFailed {
                error: format!("compressing upload request: {error}"),
            });
            return TransmissionOutcome::NoRetry;
        }
    };

    let request = Request::post(endpoint)
        .header(http::header::CONTENT_ENCODING, "gzip")
        .header(http::header::CONTENT_TYPE, "application/x-json-stream")
        .header(http::header::ACCEPT_ENCODING, "gzip, deflate")
        .body(compressed)
        .expect("request should be valid");

    let response = match client.send(request).await {
        Ok(response) => response,
        Err(error) => {
            sink.record(Diagnostic::TransportFailed {
                error: error.to_string(),
            });
            return TransmissionOutcome::NoRetry;
        }
    };

    classify(response, sent, sink)
}

fn classify(
    response: Response<Bytes>,
    sent: Vec<BatchItem>,
    sink: &dyn DiagnosticsSink,
) -> TransmissionOutcome {
    let status = response.status().as_u16();
    let retry_after = parse_retry_after(&response);

    match status {
        STATUS_OK => TransmissionOutcome::Success,
        STATUS_PARTIAL_CONTENT => {
            let backend: BackendResponse = match serde_json::from_slice(response.body()) {
                Ok(backend) => backend,
                Err(error) => {
                    sink.record(Diagnostic::TransportFailed {
                        error: format!("deserializing upload response: {error}"),
                    });
                    return TransmissionOutcome::NoRetry;
                }
            };
            if backend.items_received == backend.items_accepted {
                return TransmissionOutcome::Success;
            }
            sink.record(Diagnostic::UploadRejected {
                status,
                items_received: backend.items_received,
                items_accepted: backend.items_accepted,
            });
            let retry_items = get_retry_items(sent, &backend.errors);
            if retry_items.is_empty() {
                TransmissionOutcome::NoRetry
            } else {
                TransmissionOutcome::Retry {
                    items: retry_items,
                    throttled: retry_after.is_some(),
                    retry_after,
                }
            }
        }
        STATUS_REQUEST_TIMEOUT
        | STATUS_TOO_MANY_REQUESTS
        | STATUS_APPLICATION_INACTIVE
        | STATUS_INTERNAL_SERVER_ERROR
        | STATUS_SERVICE_UNAVAILABLE => {
            sink.record(Diagnostic::UploadRejected {
                status,
                items_received: sent.len(),
                items_accepted: 0,
            });
            let throttled = matches!(
                status,
                STATUS_TOO_MANY_REQUESTS | STATUS_APPLICATION_INACTIVE
            ) || retry_after.is_some();
            TransmissionOutcome::Retry {
                items: sent,
                throttled,
                retry_after,
            }
        }
        _ => {
            sink.record(Diagnostic::UploadRejected {
                status,
                items_received: sent.len(),
                items_accepted: 0,
            });
            match retry_after {
                Some(_) => TransmissionOutcome::Retry {
                    items: sent,
                    throttled: true,
                    retry_after,
                },
                None => TransmissionOutcome::NoRetry,
            }
        }
    }
}

/// Selects which of `sent` a caller should resubmit, per §4.2's `getRetryItems`: on partial
/// success, only the items whose own status is itself retryable.
fn get_retry_items(sent: Vec<BatchItem>, errors: &[ItemError]) -> Vec<BatchItem> {
    let mut sorted = errors.to_vec();
    sorted.sort_by_key(|error| error.index);

    let mut slots: Vec<Option<BatchItem>> = sent.into_iter().map(Some).collect();
    let mut retained = Vec::new();
    for error in sorted {
        if !is_retryable_status(error.status_code) {
            continue;
        }
        if let Some(slot) = slots.get_mut(error.index) {
            if let Some(item) = slot.take() {
                retained.push(item);
            }
        }
    }
    retained
}

fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

fn parse_retry_after(response: &Response<Bytes>) -> Option<DateTime<Utc>> {
    let header = response.headers().get(http::header::RETRY_AFTER)?;
    let value = header.to_str().ok()?;
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

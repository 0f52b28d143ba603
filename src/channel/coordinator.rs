//! The accept loop: the single task that owns batching, throttling, and shutdown (§4.3, §5).

use crate::channel::MAX_RETRY_COUNT;
use crate::diagnostics::{Diagnostic, DiagnosticsSink};
use crate::http_client::HttpClient;
use crate::models::Envelope;
use crate::transmitter::{self, TransmissionOutcome};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// An envelope paired with how many times it has already been retried.
#[derive(Debug, Clone)]
pub(crate) struct BatchItem {
    pub(crate) envelope: Envelope,
    pub(crate) retry_count: u32,
}

impl BatchItem {
    pub(crate) fn new(envelope: Envelope) -> Self {
        BatchItem {
            envelope,
            retry_count: 0,
        }
    }
}

/// Feedback sent from a send task back to the coordinator (§4.3's "retry feedback").
struct RetryFeedback {
    items: Vec<BatchItem>,
    throttled: bool,
    retry_after: Option<chrono::DateTime<Utc>>,
}

/// What `Close` observed when it stopped waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Every accepted item was transmitted or exhausted its retries before the deadline.
    Drained,
    /// The caller-supplied deadline elapsed (or its token was cancelled) before the loop drained.
    DeadlineExceeded,
}

/// A live handle to a running accept loop plus the channels used to talk to it.
///
/// This is the coordinator side of the architecture described in §4.3/§5: one [`Channel`] is
/// created per client and lives until `close`/`stop` tears it down.
pub(crate) struct Channel {
    items_tx: mpsc::Sender<Envelope>,
    flush_tx: mpsc::Sender<()>,
    closed: Arc<AtomicBool>,
    cancellation: CancellationToken,
    stop_cause_closed: Arc<AtomicBool>,
}

impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("closed", &self.closed.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl Channel {
    /// Spawns the accept loop on the current `tokio` runtime and returns a handle to it.
    pub(crate) fn spawn(
        endpoint: http::Uri,
        http_client: Arc<dyn HttpClient>,
        sink: Arc<dyn DiagnosticsSink>,
        max_batch_size: usize,
        max_batch_interval: Duration,
    ) -> Channel {
        // Deliberately small: producers should observe backpressure (and eventually closure)
        // promptly rather than buffering unboundedly ahead of the coordinator (§5).
        let (items_tx, items_rx) = mpsc::channel(max_batch_size.max(1));
        let (flush_tx, flush_rx) = mpsc::channel(1);
        let (retry_tx, retry_rx) = mpsc::unbounded_channel();
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        let closed = Arc::new(AtomicBool::new(false));
        let stop_cause_closed = Arc::new(AtomicBool::new(true));
        let cancellation = CancellationToken::new();

        let loop_state = Loop {
            endpoint,
            http_client,
            sink,
            max_batch_size,
            max_batch_interval,
            items_rx,
            flush_rx,
            retry_rx,
            retry_tx,
            done_rx,
            done_tx,
            closed: closed.clone(),
            cancellation: cancellation.clone(),
            stop_cause_closed: stop_cause_closed.clone(),
        };
        tokio::spawn(loop_state.run());

        Channel {
            items_tx,
            flush_tx,
            closed,
            cancellation,
            stop_cause_closed,
        }
    }

    /// Submits one envelope. A no-op once the channel is closed (§3's "Closed is one-way").
    pub(crate) async fn send(&self, envelope: Envelope) {
        if self.closed.load(Ordering::Acquire) {
            return;
        }
        let _ = self.items_tx.send(envelope).await;
    }

    /// Requests an immediate dispatch of the pending batch. Returns once the request has been
    /// accepted by the coordinator, not once the batch has actually been transmitted.
    pub(crate) async fn flush(&self) {
        if self.closed.load(Ordering::Acquire) {
            return;
        }
        let _ = self.flush_tx.send(()).await;
    }

    /// Marks the channel closed, enqueues a final flush, and waits for the loop to drain or for
    /// `deadline` to elapse, whichever happens first.
    pub(crate) async fn close(&self, deadline: CancellationToken) -> CloseOutcome {
        self.closed.store(true, Ordering::Release);
        let _ = self.flush_tx.send(()).await;

        tokio::select! {
            _ = self.cancellation.cancelled() => {
                if self.stop_cause_closed.load(Ordering::Acquire) {
                    CloseOutcome::Drained
                } else {
                    CloseOutcome::DeadlineExceeded
                }
            }
            _ = deadline.cancelled() => {
                self.cancellation.cancel();
                CloseOutcome::DeadlineExceeded
            }
        }
    }

    /// Marks the channel closed and cancels the loop immediately, discarding queued and in-flight
    /// items.
    pub(crate) fn stop(&self) {
        self.closed.store(true, Ordering::Release);
        self.stop_cause_closed.store(false, Ordering::Release);
        self.cancellation.cancel();
    }
}

struct Loop {
    endpoint: http::Uri,
    http_client: Arc<dyn HttpClient>,
    sink: Arc<dyn DiagnosticsSink>,
    max_batch_size: usize,
    max_batch_interval: Duration,
    items_rx: mpsc::Receiver<Envelope>,
    flush_rx: mpsc::Receiver<()>,
    retry_rx: mpsc::UnboundedReceiver<RetryFeedback>,
    retry_tx: mpsc::UnboundedSender<RetryFeedback>,
    done_rx: mpsc::UnboundedReceiver<()>,
    done_tx: mpsc::UnboundedSender<()>,
    closed: Arc<AtomicBool>,
    cancellation: CancellationToken,
    stop_cause_closed: Arc<AtomicBool>,
}

impl Loop {
    async fn run(mut self) {
        let mut buffer: Vec<BatchItem> = Vec::with_capacity(self.max_batch_size);
        let mut throttled = false;
        let mut dropped_while_throttled: u64 = 0;
        let in_flight = Arc::new(AtomicU64::new(0));
        let timer = tokio::time::sleep(self.max_batch_interval);
        tokio::pin!(timer);
        let mut timer_armed = false;

        loop {
            tokio::select! {
                biased;

                _ = self.cancellation.cancelled() => {
                    if !buffer.is_empty() {
                        self.sink.record(Diagnostic::ShutdownAbandoned {
                            items: buffer.len(),
                        });
                    }
                    return;
                }

                item = self.items_rx.recv() => {
                    let Some(envelope) = item else { continue };
                    if throttled {
                        if buffer.len() < self.max_batch_size {
                            buffer.push(BatchItem::new(envelope));
                        } else {
                            dropped_while_throttled += 1;
                        }
                        continue;
                    }

                    buffer.push(BatchItem::new(envelope));
                    if buffer.len() >= self.max_batch_size {
                        timer_armed = false;
                        self.dispatch(
                            std::mem::take(&mut buffer),
                            &in_flight,
                        );
                    } else if buffer.len() == 1 {
                        timer.as_mut().reset(tokio::time::Instant::now() + self.max_batch_interval);
                        timer_armed = true;
                    }
                }

                _ = self.flush_rx.recv() => {
                    if throttled {
                        continue;
                    }
                    timer_armed = false;
                    self.dispatch(std::mem::take(&mut buffer), &in_flight);
                }

                feedback = self.retry_rx.recv() => {
                    let Some(feedback) = feedback else { continue };
                    let mut accepted = 0usize;
                    for item in feedback.items {
                        if buffer.len() < self.max_batch_size {
                            buffer.push(item);
                            accepted += 1;
                        } else {
                            dropped_while_throttled += 1;
                        }
                    }
                    let _ = accepted;

                    if feedback.throttled {
                        throttled = true;
                    }

                    let next = match feedback.retry_after {
                        Some(retry_after) => {
                            let now = Utc::now();
                            if retry_after > now {
                                (retry_after - now).to_std().unwrap_or(self.max_batch_interval)
                            } else {
                                self.max_batch_interval
                            }
                        }
                        None => self.max_batch_interval,
                    };
                    timer.as_mut().reset(tokio::time::Instant::now() + next);
                    timer_armed = true;
                }

                _ = self.done_rx.recv() => {
                    self.maybe_finish_close(&buffer, &in_flight);
                }

                _ = &mut timer, if timer_armed => {
                    if throttled {
                        throttled = false;
                        if dropped_while_throttled > 0 {
                            self.sink.record(Diagnostic::ThrottleEnded {
                                items_dropped: dropped_while_throttled,
                            });
                            dropped_while_throttled = 0;
                        }
                    }
                    self.dispatch(std::mem::take(&mut buffer), &in_flight);
                    timer.as_mut().reset(tokio::time::Instant::now() + self.max_batch_interval);
                    timer_armed = true;
                }
            }
        }
    }

    /// Dispatches `items` to a freshly spawned send task, or — if there is nothing to send and
    /// the client has asked to close with no work outstanding — cancels the loop with the
    /// "closed" cause.
    fn dispatch(&self, items: Vec<BatchItem>, in_flight: &Arc<AtomicU64>) {
        if items.is_empty() {
            self.maybe_finish_close(&items, in_flight);
            return;
        }

        in_flight.fetch_add(1, Ordering::AcqRel);
        let endpoint = self.endpoint.clone();
        let http_client = self.http_client.clone();
        let sink = self.sink.clone();
        let retry_tx = self.retry_tx.clone();
        let done_tx = self.done_tx.clone();
        let cancellation = self.cancellation.clone();
        let in_flight = in_flight.clone();

        tokio::spawn(async move {
            send_batch(
                endpoint,
                http_client,
                sink,
                items,
                retry_tx,
                done_tx,
                &in_flight,
                &cancellation,
            )
            .await;
        });
    }

    fn maybe_finish_close(&self, buffer: &[BatchItem], in_flight: &Arc<AtomicU64>) {
        if buffer.is_empty()
            && in_flight.load(Ordering::Acquire) == 0
            && self.closed.load(Ordering::Acquire)
        {
            self.stop_cause_closed.store(true, Ordering::Release);
            self.cancellation.cancel();
        }
    }
}

/// One send task: transmits a batch, classifies the response, and either exits or schedules a
/// retry (§4.3's "transmitRetry").
#[allow(clippy::too_many_arguments)]
async fn send_batch(
    endpoint: http::Uri,
    http_client: Arc<dyn HttpClient>,
    sink: Arc<dyn DiagnosticsSink>,
    items: Vec<BatchItem>,
    retry_tx: mpsc::UnboundedSender<RetryFeedback>,
    done_tx: mpsc::UnboundedSender<()>,
    in_flight: &Arc<AtomicU64>,
    cancellation: &CancellationToken,
) {
    let abandoned_if_cancelled = items.len();
    let outcome = tokio::select! {
        outcome = transmitter::transmit(http_client.as_ref(), &endpoint, items, sink.as_ref()) => outcome,
        _ = cancellation.cancelled() => {
            sink.record(Diagnostic::ShutdownAbandoned {
                items: abandoned_if_cancelled,
            });
            TransmissionOutcome::NoRetry
        }
    };

    if let TransmissionOutcome::Retry {
        items,
        throttled,
        retry_after,
    } = outcome
    {
        let mut retained = Vec::with_capacity(items.len());
        let mut exhausted = 0usize;
        for mut item in items {
            item.retry_count += 1;
            if item.retry_count > MAX_RETRY_COUNT {
                exhausted += 1;
            } else {
                retained.push(item);
            }
        }
        if exhausted > 0 {
            sink.record(Diagnostic::RetryExhausted { items: exhausted });
        }
        if !retained.is_empty() {
            sink.record(Diagnostic::RetryScheduled {
                items: retained.len(),
                attempt: retained.iter().map(|i| i.retry_count).max().unwrap_or(0),
            });
            let _ = retry_tx.send(RetryFeedback {
                items: retained,
                throttled,
                retry_after,
            });
        }
    }

    in_flight.fetch_sub(1, Ordering::AcqRel);
    let _ = done_tx.send(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::diagnostics::{Diagnostic, DiagnosticsSink};
    use crate::http_client::{HttpClient, HttpError};
    use async_trait::async_trait;
    use bytes::Bytes;
    use flate2::read::GzDecoder;
    use http::{Request, Response};
    use std::io::Read;
    use std::sync::Mutex as StdMutex;

    #[derive(Debug, Default)]
    struct NullSink;
    impl DiagnosticsSink for NullSink {
        fn record(&self, _diagnostic: Diagnostic) {}
    }

    /// Records every request it receives (decompressed, one entry per NDJSON line) and answers
    /// from a queue of canned responses, FIFO.
    #[derive(Debug, Default)]
    struct RecordingHttpClient {
        responses: StdMutex<Vec<Response<Bytes>>>,
        requests: StdMutex<Vec<Vec<String>>>,
    }

    impl RecordingHttpClient {
        fn new(responses: Vec<Response<Bytes>>) -> Self {
            RecordingHttpClient {
                responses: StdMutex::new(responses),
                requests: StdMutex::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn request_lines(&self, index: usize) -> Vec<String> {
            self.requests.lock().unwrap()[index].clone()
        }
    }

    #[async_trait]
    impl HttpClient for RecordingHttpClient {
        async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Bytes>, HttpError> {
            let body = request.into_body();
            let mut decoder = GzDecoder::new(&body[..]);
            let mut decompressed = String::new();
            decoder
                .read_to_string(&mut decompressed)
                .expect("request body is valid gzip");
            let lines = decompressed.lines().map(str::to_string).collect();
            self.requests.lock().unwrap().push(lines);

            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                panic!("RecordingHttpClient received more requests than it has canned responses for");
            }
            Ok(responses.remove(0))
        }
    }

    fn json_response(status: u16, body: serde_json::Value) -> Response<Bytes> {
        Response::builder()
            .status(status)
            .body(Bytes::from(body.to_string()))
            .expect("valid response")
    }

    fn ok_response() -> Response<Bytes> {
        json_response(
            200,
            serde_json::json!({ "itemsReceived": 0, "itemsAccepted": 0, "errors": [] }),
        )
    }

    fn envelope(name: &str) -> Envelope {
        let context = Context::new(
            "ikey".to_string(),
            std::collections::BTreeMap::new(),
            crate::diagnostics::default_sink(),
        );
        context.envelop(name.to_string(), None)
    }

    /// Lets every task that is ready to run actually run, without advancing virtual time. Needed
    /// because a paused-clock test otherwise only drives the coordinator's own timer, not the
    /// send tasks it spawns off the back of a dispatch.
    async fn settle() {
        for _ in 0..64 {
            tokio::task::yield_now().await;
        }
    }

    fn endpoint() -> http::Uri {
        "https://example.test/v2/track".parse().unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn simple_submit_uploads_after_the_batch_interval() {
        let client = Arc::new(RecordingHttpClient::new(vec![ok_response()]));
        let channel = Channel::spawn(
            endpoint(),
            client.clone(),
            Arc::new(NullSink),
            1024,
            Duration::from_secs(10),
        );

        channel.send(envelope("~msg~")).await;
        settle().await;
        assert_eq!(client.request_count(), 0);

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;

        assert_eq!(client.request_count(), 1);
        let lines = client.request_lines(0);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("~msg~"));
    }

    #[tokio::test(start_paused = true)]
    async fn size_triggered_batch_dispatches_without_waiting_for_the_interval() {
        let client = Arc::new(RecordingHttpClient::new(vec![ok_response(), ok_response()]));
        let channel = Channel::spawn(
            endpoint(),
            client.clone(),
            Arc::new(NullSink),
            4,
            Duration::from_secs(10),
        );

        for i in 0..5 {
            channel.send(envelope(&format!("event-{i}"))).await;
        }
        settle().await;

        assert_eq!(client.request_count(), 1);
        assert_eq!(client.request_lines(0).len(), 4);

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;

        assert_eq!(client.request_count(), 2);
        assert_eq!(client.request_lines(1).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn explicit_flush_dispatches_immediately() {
        let client = Arc::new(RecordingHttpClient::new(vec![ok_response()]));
        let channel = Channel::spawn(
            endpoint(),
            client.clone(),
            Arc::new(NullSink),
            1024,
            Duration::from_secs(10),
        );

        channel.send(envelope("~msg~")).await;
        channel.flush().await;
        settle().await;

        assert_eq!(client.request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn retry_on_server_error_resends_the_same_items() {
        let error_response = json_response(
            500,
            serde_json::json!({ "itemsReceived": 2, "itemsAccepted": 0, "errors": [] }),
        );
        let client = Arc::new(RecordingHttpClient::new(vec![error_response, ok_response()]));
        let channel = Channel::spawn(
            endpoint(),
            client.clone(),
            Arc::new(NullSink),
            4,
            Duration::from_secs(10),
        );

        channel.send(envelope("a")).await;
        channel.send(envelope("b")).await;
        channel.flush().await;
        settle().await;
        assert_eq!(client.request_count(), 1);

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;

        assert_eq!(client.request_count(), 2);
        let retried = client.request_lines(1);
        assert_eq!(retried.len(), 2);
        assert!(retried[0].contains('a'));
        assert!(retried[1].contains('b'));
    }

    #[tokio::test(start_paused = true)]
    async fn partial_success_retries_only_the_retryable_indices() {
        let partial = json_response(
            206,
            serde_json::json!({
                "itemsReceived": 5,
                "itemsAccepted": 3,
                "errors": [
                    { "index": 1, "statusCode": 500, "message": "oops" },
                    { "index": 3, "statusCode": 400, "message": "bad" },
                ]
            }),
        );
        let client = Arc::new(RecordingHttpClient::new(vec![partial, ok_response()]));
        let channel = Channel::spawn(
            endpoint(),
            client.clone(),
            Arc::new(NullSink),
            5,
            Duration::from_secs(10),
        );

        for i in 0..5 {
            channel.send(envelope(&format!("event-{i}"))).await;
        }
        settle().await;
        assert_eq!(client.request_count(), 1);

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;

        assert_eq!(client.request_count(), 2);
        assert_eq!(client.request_lines(1).len(), 1);
        assert!(client.request_lines(1)[0].contains("event-1"));
    }

    /// Collects diagnostics so the throttle-recovery test can observe the drop count without a
    /// third canned response.
    #[derive(Debug, Default)]
    struct CollectingSink(StdMutex<Vec<Diagnostic>>);
    impl DiagnosticsSink for CollectingSink {
        fn record(&self, diagnostic: Diagnostic) {
            self.0.lock().unwrap().push(diagnostic);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn throttle_drops_items_beyond_capacity_until_recovery() {
        // 408 with a past Retry-After: the channel treats any non-future retry_after as "use the
        // ordinary batch interval", so the recovery dispatch still lands exactly one interval
        // after the throttling response (§4.3's retry-feedback timer reset).
        let throttled = Response::builder()
            .status(408)
            .header(http::header::RETRY_AFTER, "Tue, 01 Jul 2025 10:52:37 GMT")
            .body(Bytes::new())
            .expect("valid response");
        let client = Arc::new(RecordingHttpClient::new(vec![throttled, ok_response()]));
        let sink = Arc::new(CollectingSink::default());
        let channel = Channel::spawn(endpoint(), client.clone(), sink.clone(), 4, Duration::from_secs(10));

        channel.send(envelope("first")).await;
        channel.flush().await;
        settle().await;
        assert_eq!(client.request_count(), 1);

        // Buffer capacity is 4; the retried "first" item already occupies one slot, so only 3 of
        // these 20 are retained and the other 17 are dropped while throttled.
        for i in 0..20 {
            channel.send(envelope(&format!("extra-{i}"))).await;
        }
        settle().await;

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;

        assert_eq!(client.request_count(), 2);
        let recovered = client.request_lines(1);
        assert_eq!(recovered.len(), 4);
        assert!(recovered.iter().any(|line| line.contains("first")));

        let dropped = sink.0.lock().unwrap().iter().find_map(|d| match d {
            Diagnostic::ThrottleEnded { items_dropped } => Some(*items_dropped),
            _ => None,
        });
        assert_eq!(dropped, Some(17));
    }

    #[tokio::test(start_paused = true)]
    async fn item_is_dropped_after_exhausting_its_retry_budget() {
        // MAX_RETRY_COUNT is 2, so the item gets 3 total attempts (initial + 2 retries) before
        // the coordinator gives up on it.
        let error_response = || {
            json_response(
                500,
                serde_json::json!({ "itemsReceived": 1, "itemsAccepted": 0, "errors": [] }),
            )
        };
        let client = Arc::new(RecordingHttpClient::new(vec![
            error_response(),
            error_response(),
            error_response(),
        ]));
        let sink = Arc::new(CollectingSink::default());
        let channel = Channel::spawn(endpoint(), client.clone(), sink.clone(), 4, Duration::from_secs(10));

        channel.send(envelope("doomed")).await;
        channel.flush().await;
        settle().await;
        assert_eq!(client.request_count(), 1);

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(client.request_count(), 2);

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(client.request_count(), 3);

        // A fourth interval must not produce another request: the item was dropped, not retried
        // again.
        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(client.request_count(), 3);

        let exhausted = sink.0.lock().unwrap().iter().find_map(|d| match d {
            Diagnostic::RetryExhausted { items } => Some(*items),
            _ => None,
        });
        assert_eq!(exhausted, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn close_waits_for_in_flight_items_to_drain() {
        let client = Arc::new(RecordingHttpClient::new(vec![ok_response()]));
        let channel = Channel::spawn(
            endpoint(),
            client.clone(),
            Arc::new(NullSink),
            1024,
            Duration::from_secs(10),
        );

        channel.send(envelope("~msg~")).await;
        let outcome = channel.close(CancellationToken::new()).await;

        assert_eq!(outcome, CloseOutcome::Drained);
        assert_eq!(client.request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn close_honors_the_caller_supplied_deadline() {
        // No canned response: the send task never returns, so `close` must rely on the deadline
        // token rather than natural drain.
        let never_responds = Arc::new(NeverRespondingHttpClient);
        let channel = Channel::spawn(
            endpoint(),
            never_responds,
            Arc::new(NullSink),
            1024,
            Duration::from_secs(10),
        );

        channel.send(envelope("~msg~")).await;
        let deadline = CancellationToken::new();
        deadline.cancel();
        let outcome = channel.close(deadline).await;

        assert_eq!(outcome, CloseOutcome::DeadlineExceeded);
    }

    #[derive(Debug)]
    struct NeverRespondingHttpClient;

    #[async_trait]
    impl HttpClient for NeverRespondingHttpClient {
        async fn send(&self, _request: Request<Vec<u8>>) -> Result<Response<Bytes>, HttpError> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stop_returns_immediately_and_discards_queued_items() {
        let client = Arc::new(RecordingHttpClient::new(vec![]));
        let channel = Channel::spawn(
            endpoint(),
            client.clone(),
            Arc::new(NullSink),
            1024,
            Duration::from_secs(10),
        );

        channel.send(envelope("~msg~")).await;
        channel.stop();
        settle().await;

        assert_eq!(client.request_count(), 0);
    }
}

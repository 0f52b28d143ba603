//! The channel coordinator (§4.3, §5): accepts telemetry items from producers, batches them,
//! and dispatches them to the transmitter, managing retries, throttling, and shutdown.

mod coordinator;

pub use coordinator::CloseOutcome;
pub(crate) use coordinator::{BatchItem, Channel};

/// An item is dropped, not retried, once its retry count would exceed this many attempts (i.e.
/// at most 3 network attempts total: the original send plus two retries).
pub(crate) const MAX_RETRY_COUNT: u32 = 2;

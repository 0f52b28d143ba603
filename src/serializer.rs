//! Newline-delimited JSON serializer (§4.1).
//!
//! One unencodable item must not poison its neighbors: a poison pill is indistinguishable from a
//! server-side rejection and would otherwise block all telemetry from the same batch.

use crate::channel::BatchItem;
use std::io::Write;

/// Encodes `items` as newline-delimited JSON, one envelope per line.
///
/// Returns the encoded buffer (empty if every item failed to serialize), the subsequence of
/// `items` that made it into the buffer in the same order (so a caller can map a backend
/// response's per-item index back to the originating item), and the number of items dropped
/// because they failed to serialize individually.
pub(crate) fn serialize(items: Vec<BatchItem>) -> (Vec<u8>, Vec<BatchItem>, usize) {
    let mut buffer = Vec::new();
    let mut sent = Vec::with_capacity(items.len());
    let mut failed = 0;

    for item in items {
        match serde_json::to_vec(&item.envelope) {
            Ok(encoded) => {
                buffer
                    .write_all(&encoded)
                    .expect("writing to an in-memory buffer cannot fail");
                buffer.push(b'\n');
                sent.push(item);
            }
            Err(_) => failed += 1,
        }
    }

    (buffer, sent, failed)
}

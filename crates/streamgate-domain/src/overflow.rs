use crate::record::{RecordResult, TransformedRecord};

/// Per-batch projected-size ceiling. Deliberately below the sink's real
/// 6,291,456-byte hard limit to leave headroom for framing overhead.
pub const PROJECTED_SIZE_CEILING: usize = 6_000_000;

/// Maximum entries per re-ingestion group (one sink call)
pub const MAX_RECORDS_PER_GROUP: usize = 500;

/// Default bound on delivery attempts per group
pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;

/// Flag records whose cumulative projected size exceeds the ceiling.
///
/// Walks the batch in original order keeping a running total of
/// `encoded_len(payload) + len(record_id)`. The response carries each
/// payload base64-encoded, so the accounting must measure that form, not
/// the raw bytes. Once the total crosses the ceiling the record's payload
/// is cleared and its result set to Dropped; the total never decreases, so
/// every later record is flagged too (tail-drop, not best-fit packing).
///
/// Returns the dropped record ids in original order.
pub fn flag_oversize_records(records: &mut [TransformedRecord], ceiling: usize) -> Vec<String> {
    let mut projected_size = 0usize;
    let mut dropped_ids = Vec::new();

    for record in records.iter_mut() {
        let payload_len = record.data.as_ref().map(Vec::len).unwrap_or(0);
        projected_size += encoded_len(payload_len) + record.record_id.len();

        if projected_size > ceiling {
            record.data = None;
            record.result = RecordResult::Dropped;
            dropped_ids.push(record.record_id.clone());
        }
    }

    dropped_ids
}

// Length of `len` bytes after standard (padded) base64 encoding
fn encoded_len(len: usize) -> usize {
    4 * len.div_ceil(3)
}

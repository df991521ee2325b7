/// A record as handed over by the delivery stream, before transformation
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    /// Unique within one invocation batch
    pub record_id: String,
    /// Informational only, never used for ordering decisions
    pub approximate_arrival_timestamp: i64,
    /// Base64-encoded wire payload, exactly as received
    pub data: String,
}

/// Per-record disposition reported back to the delivery stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordResult {
    Ok,
    ProcessingFailed,
    Dropped,
}

/// The unit returned to the caller: exactly one per InputRecord, same id,
/// same order. `data` is cleared once a record is flagged for re-ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedRecord {
    pub record_id: String,
    pub data: Option<Vec<u8>>,
    pub result: RecordResult,
}

/// Original (untransformed) payload resubmitted to the source stream.
/// Always traces back to exactly one InputRecord.
#[derive(Debug, Clone, PartialEq)]
pub struct ReingestionRecord {
    pub data: Vec<u8>,
}

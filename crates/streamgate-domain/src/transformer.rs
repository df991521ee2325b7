use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{DomainError, DomainResult};
use crate::record::{InputRecord, RecordResult, TransformedRecord};

/// Decoded form of a record payload. Extra fields (id, timestamp, ...) are
/// carried by the envelope and ignored here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogEvent {
    pub message: String,
}

/// Trait for the pluggable per-event transformation
///
/// Implementations map a decoded log event to the output line; the
/// surrounding transformer owns decoding and re-encoding. Failures
/// propagate and abort the whole invocation.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait LogEventTransformer: Send + Sync {
    fn transform(&self, event: &LogEvent) -> DomainResult<String>;
}

/// Reference transformation: pass the message field through unchanged
pub struct MessageFieldTransformer;

impl LogEventTransformer for MessageFieldTransformer {
    fn transform(&self, event: &LogEvent) -> DomainResult<String> {
        Ok(event.message.clone())
    }
}

/// Decode one wire payload: base64, then the JSON log event inside.
///
/// A malformed payload is fatal for the invocation; it is never converted
/// into a per-record ProcessingFailed status.
pub fn decode_log_event(data: &str) -> DomainResult<LogEvent> {
    let raw = STANDARD
        .decode(data)
        .map_err(|e| DomainError::PayloadDecode(format!("invalid base64 payload: {e}")))?;

    serde_json::from_slice(&raw)
        .map_err(|e| DomainError::PayloadDecode(format!("invalid log event: {e}")))
}

/// Applies the pluggable transformation to one record: decode, transform,
/// append the line terminator, re-encode to bytes.
pub struct RecordTransformer {
    transformer: Arc<dyn LogEventTransformer>,
}

impl RecordTransformer {
    pub fn new(transformer: Arc<dyn LogEventTransformer>) -> Self {
        Self { transformer }
    }

    pub fn transform_record(&self, record: &InputRecord) -> DomainResult<TransformedRecord> {
        let event = decode_log_event(&record.data)?;

        let mut line = self.transformer.transform(&event)?;
        line.push('\n');

        Ok(TransformedRecord {
            record_id: record.record_id.clone(),
            data: Some(line.into_bytes()),
            result: RecordResult::Ok,
        })
    }
}

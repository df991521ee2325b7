use async_trait::async_trait;
use std::sync::Arc;

use crate::error::DomainResult;
use crate::record::ReingestionRecord;

/// Per-entry outcome reported by the sink. An absent or empty error code
/// means the entry was delivered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchEntryOutcome {
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

/// Outcome of one batch submission that reached the sink
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchPutOutcome {
    pub failed_put_count: usize,
    pub responses: Vec<BatchEntryOutcome>,
}

/// Trait for the streaming-service sink collaborator
///
/// Implementations should:
/// - Submit the whole group in one call to the named destination
/// - Report per-entry outcomes positionally in `responses`
/// - Return Err only for transport-level failures (network, throttling);
///   partial failures are a successful call with a nonzero failed count
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait RecordBatchSink: Send + Sync {
    async fn put_record_batch(
        &self,
        stream_name: &str,
        records: &[ReingestionRecord],
    ) -> anyhow::Result<BatchPutOutcome>;
}

/// Trait for acquiring a sink scoped to the destination's region
///
/// The pipeline acquires a sink lazily, once per invocation, only when
/// re-ingestion is actually needed, and passes it explicitly to the
/// delivery path.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait SinkProvider: Send + Sync {
    async fn sink_for_region(&self, region: &str) -> DomainResult<Arc<dyn RecordBatchSink>>;
}

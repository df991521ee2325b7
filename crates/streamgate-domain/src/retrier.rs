use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{DomainError, DomainResult};
use crate::record::ReingestionRecord;
use crate::sink::RecordBatchSink;

/// Delivers one re-ingestion group, retrying only the failed subset.
///
/// A transport-level sink failure counts the whole submission as failed; a
/// successful call with a nonzero failed count narrows the next submission
/// to the entries carrying a non-empty error code. Retries are synchronous
/// and bounded: after `max_attempts` submissions the group fails with
/// `RetriesExhausted` carrying the cumulative error message.
pub struct DeliveryRetrier {
    sink: Arc<dyn RecordBatchSink>,
    max_attempts: u32,
}

impl DeliveryRetrier {
    pub fn new(sink: Arc<dyn RecordBatchSink>, max_attempts: u32) -> Self {
        Self { sink, max_attempts }
    }

    pub async fn deliver(
        &self,
        stream_name: &str,
        records: Vec<ReingestionRecord>,
    ) -> DomainResult<()> {
        let mut pending = records;
        let mut attempts_made: u32 = 0;

        loop {
            debug!(
                stream_name = %stream_name,
                record_count = pending.len(),
                attempts_made,
                "putting record batch"
            );

            let (failed, error_message) =
                match self.sink.put_record_batch(stream_name, &pending).await {
                    // Transport failure: the entire submission is the failed subset
                    Err(error) => {
                        let message = error.to_string();
                        (pending, message)
                    }
                    Ok(outcome) if outcome.failed_put_count > 0 => {
                        let mut codes = Vec::new();
                        let mut failed = Vec::new();
                        for (record, response) in pending.iter().zip(outcome.responses.iter()) {
                            match response.error_code.as_deref() {
                                // No error code, or an empty one: delivered
                                None | Some("") => continue,
                                Some(code) => {
                                    codes.push(code.to_string());
                                    failed.push(record.clone());
                                }
                            }
                        }
                        let message = format!("Individual error codes: {}", codes.join(","));
                        (failed, message)
                    }
                    Ok(_) => return Ok(()),
                };

            if failed.is_empty() {
                return Ok(());
            }

            attempts_made += 1;
            if attempts_made < self.max_attempts {
                warn!(
                    stream_name = %stream_name,
                    failed_count = failed.len(),
                    attempts_made,
                    error = %error_message,
                    "some records failed while putting the batch to the delivery stream, retrying"
                );
                pending = failed;
            } else {
                return Err(DomainError::RetriesExhausted {
                    attempts: self.max_attempts,
                    message: error_message,
                });
            }
        }
    }
}

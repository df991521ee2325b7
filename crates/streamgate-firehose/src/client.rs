use anyhow::Context;
use async_trait::async_trait;
use aws_sdk_firehose::Client;
use aws_sdk_firehose::primitives::Blob;
use aws_sdk_firehose::types::Record;
use streamgate_domain::{BatchEntryOutcome, BatchPutOutcome, RecordBatchSink, ReingestionRecord};
use tracing::debug;

/// Kinesis Data Firehose implementation of the record batch sink
///
/// Partial failures come back as a successful call with a nonzero
/// `FailedPutCount` and per-entry error codes; only transport-level
/// failures surface as Err.
pub struct FirehoseSink {
    client: Client,
}

impl FirehoseSink {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordBatchSink for FirehoseSink {
    async fn put_record_batch(
        &self,
        stream_name: &str,
        records: &[ReingestionRecord],
    ) -> anyhow::Result<BatchPutOutcome> {
        let entries = records
            .iter()
            .map(|record| {
                Record::builder()
                    .data(Blob::new(record.data.clone()))
                    .build()
                    .context("Failed to build Firehose record")
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        debug!(
            stream_name = %stream_name,
            record_count = entries.len(),
            "calling PutRecordBatch"
        );

        let output = self
            .client
            .put_record_batch()
            .delivery_stream_name(stream_name)
            .set_records(Some(entries))
            .send()
            .await
            .context("PutRecordBatch call failed")?;

        let responses = output
            .request_responses()
            .iter()
            .map(|entry| BatchEntryOutcome {
                error_code: entry.error_code().map(str::to_string),
                error_message: entry.error_message().map(str::to_string),
            })
            .collect();

        Ok(BatchPutOutcome {
            failed_put_count: output.failed_put_count().max(0) as usize,
            responses,
        })
    }
}

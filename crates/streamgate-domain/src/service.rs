use std::sync::Arc;
use tracing::{info, instrument};

use crate::batcher::build_reingestion_groups;
use crate::error::DomainResult;
use crate::overflow::{MAX_RECORDS_PER_GROUP, PROJECTED_SIZE_CEILING, flag_oversize_records};
use crate::record::{InputRecord, TransformedRecord};
use crate::retrier::DeliveryRetrier;
use crate::sink::SinkProvider;
use crate::stream_arn::DeliveryStreamArn;
use crate::transformer::{LogEventTransformer, RecordTransformer};

/// Orchestrates one invocation's record batch
///
/// Flow:
/// 1. Transform every record, preserving order
/// 2. Flag records whose cumulative projected size exceeds the ceiling
/// 3. Group the flagged originals into re-ingestion batches
/// 4. Acquire a sink for the stream's region (lazily, only if needed) and
///    deliver each group in order, bounded retries per group
/// 5. Return the order-preserving transformed record list
///
/// A decode failure or exhausted delivery aborts the invocation; later
/// groups are never attempted and no partial result is returned.
pub struct RecordPipelineService {
    transformer: Arc<dyn LogEventTransformer>,
    sink_provider: Arc<dyn SinkProvider>,
    max_attempts: u32,
}

impl RecordPipelineService {
    pub fn new(
        transformer: Arc<dyn LogEventTransformer>,
        sink_provider: Arc<dyn SinkProvider>,
        max_attempts: u32,
    ) -> Self {
        Self {
            transformer,
            sink_provider,
            max_attempts,
        }
    }

    #[instrument(skip(self, records), fields(stream_arn = %stream_arn, record_count = records.len()))]
    pub async fn process_batch(
        &self,
        stream_arn: &str,
        records: Vec<InputRecord>,
    ) -> DomainResult<Vec<TransformedRecord>> {
        let record_transformer = RecordTransformer::new(self.transformer.clone());
        let mut transformed: Vec<TransformedRecord> = records
            .iter()
            .map(|record| record_transformer.transform_record(record))
            .collect::<DomainResult<_>>()?;

        let dropped_ids = flag_oversize_records(&mut transformed, PROJECTED_SIZE_CEILING);
        let groups = build_reingestion_groups(&dropped_ids, &records, MAX_RECORDS_PER_GROUP)?;

        if groups.is_empty() {
            info!("no records to be reingested");
            return Ok(transformed);
        }

        let stream = DeliveryStreamArn::parse(stream_arn)?;
        let sink = self.sink_provider.sink_for_region(stream.region()).await?;
        let retrier = DeliveryRetrier::new(sink, self.max_attempts);

        let total_to_reingest = dropped_ids.len();
        let mut reingested_so_far = 0usize;
        for group in groups {
            let group_len = group.len();
            retrier.deliver(stream.stream_name(), group).await?;
            reingested_so_far += group_len;
            info!(
                stream_name = %stream.stream_name(),
                "reingested {}/{} records out of {}",
                reingested_so_far,
                total_to_reingest,
                records.len()
            );
        }

        Ok(transformed)
    }
}

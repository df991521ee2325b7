pub mod config;
pub mod event;
pub mod telemetry;

pub use config::ServiceConfig;
pub use event::{
    EventRecord, ResponseRecord, ResponseResult, TransformationEvent, TransformationResponse,
};

use streamgate_domain::{DomainResult, InputRecord, RecordPipelineService};
use tracing::{info, instrument};

/// Process one transformation invocation end to end.
///
/// Fatal errors (payload decode, exhausted re-ingestion retries) propagate;
/// no partial response is produced for a failed invocation.
#[instrument(skip(event, service), fields(invocation_id = %event.invocation_id))]
pub async fn handle_event(
    event: TransformationEvent,
    service: &RecordPipelineService,
) -> DomainResult<TransformationResponse> {
    info!(
        stream_arn = %event.delivery_stream_arn,
        record_count = event.records.len(),
        "processing transformation event"
    );

    let records: Vec<InputRecord> = event.records.into_iter().map(InputRecord::from).collect();

    let transformed = service
        .process_batch(&event.delivery_stream_arn, records)
        .await?;

    Ok(TransformationResponse {
        records: transformed.into_iter().map(ResponseRecord::from).collect(),
    })
}

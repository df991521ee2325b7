pub mod batcher;
pub mod error;
pub mod overflow;
pub mod record;
pub mod retrier;
pub mod service;
pub mod sink;
pub mod stream_arn;
pub mod transformer;

pub use batcher::build_reingestion_groups;
pub use error::{DomainError, DomainResult};
pub use overflow::{
    DEFAULT_MAX_ATTEMPTS, MAX_RECORDS_PER_GROUP, PROJECTED_SIZE_CEILING, flag_oversize_records,
};
pub use record::{InputRecord, RecordResult, ReingestionRecord, TransformedRecord};
pub use retrier::DeliveryRetrier;
pub use service::RecordPipelineService;
pub use sink::{BatchEntryOutcome, BatchPutOutcome, RecordBatchSink, SinkProvider};
pub use stream_arn::DeliveryStreamArn;
pub use transformer::{LogEvent, LogEventTransformer, MessageFieldTransformer, RecordTransformer};

#[cfg(any(test, feature = "testing"))]
pub use sink::{MockRecordBatchSink, MockSinkProvider};
#[cfg(any(test, feature = "testing"))]
pub use transformer::MockLogEventTransformer;

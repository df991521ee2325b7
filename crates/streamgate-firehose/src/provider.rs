use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_firehose::Client;
use std::sync::Arc;
use streamgate_domain::{DomainResult, RecordBatchSink, SinkProvider};
use tracing::info;

use crate::client::FirehoseSink;

/// Builds a region-scoped Firehose client on demand. The pipeline asks for
/// a sink at most once per invocation, so no client caching is kept here.
#[derive(Default)]
pub struct FirehoseSinkProvider;

impl FirehoseSinkProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SinkProvider for FirehoseSinkProvider {
    async fn sink_for_region(&self, region: &str) -> DomainResult<Arc<dyn RecordBatchSink>> {
        info!(region = %region, "creating Firehose client");

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        let client = Client::new(&config);

        Ok(Arc::new(FirehoseSink::new(client)))
    }
}

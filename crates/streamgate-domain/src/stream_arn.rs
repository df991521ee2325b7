use crate::error::{DomainError, DomainResult};

/// Delivery stream destination, resolved by positional parsing of the
/// colon/slash-delimited stream ARN
/// (`arn:aws:firehose:<region>:<account>:deliverystream/<name>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryStreamArn {
    region: String,
    stream_name: String,
}

impl DeliveryStreamArn {
    /// Parse the region (colon field 3) and stream name (slash field 1)
    /// out of a delivery stream ARN.
    pub fn parse(arn: &str) -> DomainResult<Self> {
        let region = arn
            .split(':')
            .nth(3)
            .filter(|part| !part.is_empty())
            .ok_or_else(|| DomainError::InvalidStreamArn(arn.to_string()))?;

        let stream_name = arn
            .split('/')
            .nth(1)
            .filter(|part| !part.is_empty())
            .ok_or_else(|| DomainError::InvalidStreamArn(arn.to_string()))?;

        Ok(Self {
            region: region.to_string(),
            stream_name: stream_name.to_string(),
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }
}

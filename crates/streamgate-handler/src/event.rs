use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use streamgate_domain::{InputRecord, RecordResult, TransformedRecord};

/// One transformation invocation as delivered by the stream
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationEvent {
    pub invocation_id: String,
    pub delivery_stream_arn: String,
    #[serde(default)]
    pub region: Option<String>,
    pub records: Vec<EventRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub record_id: String,
    #[serde(default)]
    pub approximate_arrival_timestamp: i64,
    /// Base64-encoded payload, passed through to the domain untouched
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationResponse {
    pub records: Vec<ResponseRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    pub record_id: String,
    pub result: ResponseResult,
    /// Present only for Ok records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseResult {
    Ok,
    ProcessingFailed,
    Dropped,
}

impl From<EventRecord> for InputRecord {
    fn from(record: EventRecord) -> Self {
        InputRecord {
            record_id: record.record_id,
            approximate_arrival_timestamp: record.approximate_arrival_timestamp,
            data: record.data,
        }
    }
}

impl From<RecordResult> for ResponseResult {
    fn from(result: RecordResult) -> Self {
        match result {
            RecordResult::Ok => ResponseResult::Ok,
            RecordResult::ProcessingFailed => ResponseResult::ProcessingFailed,
            RecordResult::Dropped => ResponseResult::Dropped,
        }
    }
}

impl From<TransformedRecord> for ResponseRecord {
    fn from(record: TransformedRecord) -> Self {
        ResponseRecord {
            record_id: record.record_id,
            result: record.result.into(),
            data: record.data.map(|bytes| STANDARD.encode(bytes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserializes_wire_shape() {
        let event: TransformationEvent = serde_json::from_value(serde_json::json!({
            "invocationId": "827b170e-77e5-4627-bfb4-dd48e308a997",
            "deliveryStreamArn": "arn:aws:firehose:us-east-1:647604195155:deliverystream/VPCFlowLogs-DirectKDF",
            "region": "us-east-1",
            "records": [
                {
                    "recordId": "49626154501644110739257545332878746850728803363251552258000000",
                    "approximateArrivalTimestamp": 1643160814345i64,
                    "data": "eyJtZXNzYWdlIjoiaGVsbG8ifQ=="
                }
            ]
        }))
        .unwrap();

        assert_eq!(event.invocation_id, "827b170e-77e5-4627-bfb4-dd48e308a997");
        assert_eq!(event.region.as_deref(), Some("us-east-1"));
        assert_eq!(event.records.len(), 1);
        assert_eq!(
            event.records[0].approximate_arrival_timestamp,
            1643160814345
        );
    }

    #[test]
    fn test_response_serializes_result_names_and_omits_dropped_data() {
        let response = TransformationResponse {
            records: vec![
                ResponseRecord::from(TransformedRecord {
                    record_id: "r1".to_string(),
                    data: Some(b"line\n".to_vec()),
                    result: RecordResult::Ok,
                }),
                ResponseRecord::from(TransformedRecord {
                    record_id: "r2".to_string(),
                    data: None,
                    result: RecordResult::Dropped,
                }),
            ],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["records"][0]["result"], "Ok");
        assert_eq!(json["records"][0]["data"], "bGluZQo=");
        assert_eq!(json["records"][1]["result"], "Dropped");
        assert!(json["records"][1].get("data").is_none());
    }
}

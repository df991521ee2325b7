use base64::{Engine, engine::general_purpose::STANDARD};
use std::collections::HashMap;

use crate::error::{DomainError, DomainResult};
use crate::record::{InputRecord, ReingestionRecord};

/// Build capacity-bounded re-ingestion groups from the flagged record ids.
///
/// Each entry carries the *original* wire payload, base64-decoded exactly
/// once; re-ingestion resubmits the untransformed data. Relative order is
/// preserved across and within groups; all groups but the last hold exactly
/// `group_capacity` entries. No flagged ids means no groups.
pub fn build_reingestion_groups(
    dropped_ids: &[String],
    originals: &[InputRecord],
    group_capacity: usize,
) -> DomainResult<Vec<Vec<ReingestionRecord>>> {
    if dropped_ids.is_empty() {
        return Ok(Vec::new());
    }

    let by_id: HashMap<&str, &InputRecord> = originals
        .iter()
        .map(|record| (record.record_id.as_str(), record))
        .collect();

    let mut groups = Vec::new();
    let mut current = Vec::new();

    for record_id in dropped_ids {
        let original = by_id.get(record_id.as_str()).ok_or_else(|| {
            DomainError::PayloadDecode(format!("no original record for id {record_id}"))
        })?;

        let data = STANDARD.decode(&original.data).map_err(|e| {
            DomainError::PayloadDecode(format!(
                "invalid base64 payload for record {record_id}: {e}"
            ))
        })?;

        current.push(ReingestionRecord { data });

        if current.len() == group_capacity {
            groups.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        groups.push(current);
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_record(id: &str, payload: &[u8]) -> InputRecord {
        InputRecord {
            record_id: id.to_string(),
            approximate_arrival_timestamp: 0,
            data: STANDARD.encode(payload),
        }
    }

    #[test]
    fn test_no_flagged_records_means_no_groups() {
        let originals = vec![input_record("a", b"one")];

        let groups = build_reingestion_groups(&[], &originals, 500).unwrap();

        assert!(groups.is_empty());
    }

    #[test]
    fn test_entries_carry_original_payload_round_trip() {
        let originals = vec![
            input_record("a", b"{\"message\": \"one\"}"),
            input_record("b", b"{\"message\": \"two\"}"),
        ];
        let dropped = vec!["b".to_string()];

        let groups = build_reingestion_groups(&dropped, &originals, 500).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 1);
        // decode-then-reencode of an unmutated payload is byte-identical
        assert_eq!(groups[0][0].data, b"{\"message\": \"two\"}".to_vec());
        assert_eq!(STANDARD.encode(&groups[0][0].data), originals[1].data);
    }

    #[test]
    fn test_grouping_splits_at_capacity() {
        let originals: Vec<InputRecord> = (0..12)
            .map(|i| input_record(&format!("r{i}"), b"payload"))
            .collect();
        let dropped: Vec<String> = originals.iter().map(|r| r.record_id.clone()).collect();

        let groups = build_reingestion_groups(&dropped, &originals, 5).unwrap();

        // ceil(12 / 5) groups; only the last is partial
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].len(), 5);
        assert_eq!(groups[1].len(), 5);
        assert_eq!(groups[2].len(), 2);
    }

    #[test]
    fn test_grouping_exact_multiple_of_capacity() {
        let originals: Vec<InputRecord> = (0..10)
            .map(|i| input_record(&format!("r{i}"), b"payload"))
            .collect();
        let dropped: Vec<String> = originals.iter().map(|r| r.record_id.clone()).collect();

        let groups = build_reingestion_groups(&dropped, &originals, 5).unwrap();

        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.len() == 5));
    }

    #[test]
    fn test_order_preserved_across_groups() {
        let originals: Vec<InputRecord> = (0..7)
            .map(|i| input_record(&format!("r{i}"), format!("payload-{i}").as_bytes()))
            .collect();
        let dropped: Vec<String> = originals.iter().map(|r| r.record_id.clone()).collect();

        let groups = build_reingestion_groups(&dropped, &originals, 3).unwrap();

        let flattened: Vec<Vec<u8>> = groups
            .into_iter()
            .flatten()
            .map(|entry| entry.data)
            .collect();
        let expected: Vec<Vec<u8>> = (0..7).map(|i| format!("payload-{i}").into_bytes()).collect();
        assert_eq!(flattened, expected);
    }

    #[test]
    fn test_undecodable_original_payload_is_fatal() {
        let originals = vec![InputRecord {
            record_id: "a".to_string(),
            approximate_arrival_timestamp: 0,
            data: "!!! not base64 !!!".to_string(),
        }];
        let dropped = vec!["a".to_string()];

        let result = build_reingestion_groups(&dropped, &originals, 500);

        assert!(matches!(result, Err(DomainError::PayloadDecode(_))));
    }
}

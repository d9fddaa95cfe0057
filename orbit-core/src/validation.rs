//! Validation layer for persisted custom-chain data.
//!
//! The persisted store is treated as corruptible input on every read,
//! not just at write time: another process (or a hand-edited file) may
//! have stored chain IDs as strings, dropped fields, or injected a
//! record claiming a reserved chain ID. This module re-validates the
//! raw payload each time the store is listed. Beyond chain-ID coercion
//! and the reserved-ID filter, records deliberately pass through
//! unvalidated.

use serde_json::Value;
use tracing::warn;

use crate::chain::{ids, ChainId, CustomChainEntry};

/// Chain IDs a custom entry may never claim: the core-family IDs that
/// serve as settlement parents for custom chains.
pub const RESERVED_PARENT_CHAIN_IDS: &[ChainId] = &[
    ids::ETHEREUM_MAINNET,
    ids::SEPOLIA,
    ids::HOLESKY,
    ids::ARBITRUM_ONE,
    ids::ARBITRUM_NOVA,
    ids::ARBITRUM_SEPOLIA,
    ids::LOCAL_L1,
    ids::ARBITRUM_LOCAL,
];

/// Coerces a raw chain-ID value to canonical numeric form.
///
/// Accepts a JSON number or a numeric string; anything else is not a
/// usable chain ID.
pub fn coerce_chain_id(value: &Value) -> Option<ChainId> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parses and sanitizes the persisted custom-chain array.
///
/// Returns the surviving entries, dropping:
/// - records that are not objects or have no usable chain ID,
/// - records whose chain ID collides with [`RESERVED_PARENT_CHAIN_IDS`],
/// - records whose remaining fields cannot deserialize.
///
/// A payload that is not a JSON array at all yields the empty set.
pub fn sanitize_entries(raw: &str) -> Vec<CustomChainEntry> {
    let records = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(records)) => records,
        Ok(_) => {
            warn!("persisted custom-chain payload is not an array, treating as empty");
            return Vec::new();
        }
        Err(err) => {
            warn!(error = %err, "persisted custom-chain payload is unparseable, treating as empty");
            return Vec::new();
        }
    };

    let mut entries = Vec::with_capacity(records.len());
    for mut record in records {
        let chain_id = match record.get("chain_id").and_then(coerce_chain_id) {
            Some(id) => id,
            None => {
                warn!("dropping persisted custom-chain record with no usable chain ID");
                continue;
            }
        };
        if RESERVED_PARENT_CHAIN_IDS.contains(&chain_id) {
            warn!(chain_id, "dropping persisted custom chain claiming a reserved chain ID");
            continue;
        }
        // Restore the canonical numeric form before typed deserialization.
        record["chain_id"] = Value::from(chain_id);
        match serde_json::from_value::<CustomChainEntry>(record) {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                warn!(chain_id, error = %err, "dropping undeserializable custom-chain record");
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number_and_string() {
        assert_eq!(coerce_chain_id(&Value::from(660_279u64)), Some(660_279));
        assert_eq!(coerce_chain_id(&Value::from("660279")), Some(660_279));
        assert_eq!(coerce_chain_id(&Value::from(" 42 ")), Some(42));
        assert_eq!(coerce_chain_id(&Value::from("xai")), None);
        assert_eq!(coerce_chain_id(&Value::Null), None);
        assert_eq!(coerce_chain_id(&Value::from(-1)), None);
    }

    #[test]
    fn test_sanitize_coerces_string_chain_ids() {
        let entries =
            sanitize_entries(r#"[{"chain_id": "660279", "rpc_url": "https://xai.example"}]"#);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].chain_id(), 660_279);
    }

    #[test]
    fn test_sanitize_drops_reserved_ids() {
        let payload = format!(
            r#"[{{"chain_id": {}, "name": "fake sepolia"}}, {{"chain_id": 660279}}]"#,
            ids::SEPOLIA
        );
        let entries = sanitize_entries(&payload);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].chain_id(), 660_279);
    }

    #[test]
    fn test_sanitize_drops_records_without_chain_id() {
        let entries = sanitize_entries(r#"[{"name": "no id"}, 7, null, {"chain_id": 4078}]"#);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].chain_id(), 4078);
    }

    #[test]
    fn test_sanitize_passes_malformed_fields_through() {
        // Unknown fields and missing fields are fine; only the chain ID
        // is validated.
        let entries =
            sanitize_entries(r#"[{"chain_id": 4078, "unknown_field": {"nested": true}}]"#);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].definition.name, "");
        assert_eq!(entries[0].rpc_url, "");
    }

    #[test]
    fn test_sanitize_non_array_payload_is_empty() {
        assert!(sanitize_entries(r#"{"chain_id": 4078}"#).is_empty());
        assert!(sanitize_entries("not json").is_empty());
    }
}

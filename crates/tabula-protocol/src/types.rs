use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single stored document: field name to arbitrary JSON value.
///
/// `serde_json::Value` is the tagged variant covering every shape a record
/// field may take (string, number, bool, null, array, nested object), so no
/// unchecked dynamic typing leaks into the API.
pub type Record = Map<String, Value>;

/// Bulk-read result: record id to full record. Insertion order is
/// irrelevant; ids are unique within a table.
pub type TableSnapshot = HashMap<String, Record>;

/// Bulk-write input: record id to a *partial* record holding only the
/// fields to set. Fields not present are left untouched on the stored
/// record (merge, not replace).
pub type UpdateBatch = HashMap<String, Record>;

/// Field names that carry record identity. A merge never overwrites these:
/// the service strips them from every partial record before forwarding it
/// to the store.
pub const PROTECTED_ID_FIELDS: [&str; 2] = ["id", "_id"];

/// JSON body carried by every non-2xx response, so failures are always
/// decodable rather than an empty or opaque body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snapshot_round_trips_as_plain_json_object() {
        let mut record = Record::new();
        record.insert("id".into(), json!("1"));
        record.insert("name".into(), json!("John"));
        record.insert("age".into(), json!(30));

        let mut snapshot = TableSnapshot::new();
        snapshot.insert("1".into(), record);

        let encoded = serde_json::to_string(&snapshot).unwrap();
        let decoded: TableSnapshot = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, snapshot);
        assert_eq!(decoded["1"]["name"], json!("John"));
    }

    #[test]
    fn batch_accepts_nested_values() {
        let raw = r#"{"7": {"tags": ["a", "b"], "stats": {"wins": 3}}}"#;
        let batch: UpdateBatch = serde_json::from_str(raw).unwrap();
        assert_eq!(batch["7"]["stats"]["wins"], json!(3));
    }

    #[test]
    fn error_body_is_decodable() {
        let body = ErrorBody::new("store unavailable");
        let encoded = serde_json::to_string(&body).unwrap();
        let decoded: ErrorBody = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.error, "store unavailable");
    }

    #[test]
    fn protected_fields() {
        assert!(PROTECTED_ID_FIELDS.contains(&"id"));
        assert!(PROTECTED_ID_FIELDS.contains(&"_id"));
    }
}

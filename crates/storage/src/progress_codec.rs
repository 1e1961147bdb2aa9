use portal_core::model::{RoleId, UnitId};
use portal_core::progress::CompletedUnits;

use crate::repository::StorageError;

const PROGRESS_KEY_PREFIX: &str = "progress:";

/// Storage key holding the completed set for `role`.
#[must_use]
pub fn progress_key(role: &RoleId) -> String {
    format!("{PROGRESS_KEY_PREFIX}{role}")
}

/// Serialize as an ordered JSON list of unit ids.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_completed(completed: &CompletedUnits) -> Result<String, StorageError> {
    let ids: Vec<&UnitId> = completed.iter().collect();
    serde_json::to_string(&ids).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Parse a stored list. Returns `None` when the value is not a JSON list of
/// strings; repeated ids collapse to their first occurrence.
#[must_use]
pub fn decode_completed(raw: &str) -> Option<CompletedUnits> {
    serde_json::from_str::<Vec<UnitId>>(raw)
        .ok()
        .map(CompletedUnits::from_ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_role_scoped() {
        assert_eq!(progress_key(&RoleId::new("admin")), "progress:admin");
    }

    #[test]
    fn decodes_list_and_collapses_repeats() {
        let decoded = decode_completed(r#"["a","b","a"]"#).unwrap();
        let ids: Vec<&str> = decoded.iter().map(UnitId::as_str).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn rejects_non_list_values() {
        assert!(decode_completed("").is_none());
        assert!(decode_completed("null").is_none());
        assert!(decode_completed(r#"{"a":1}"#).is_none());
        assert!(decode_completed("[1,2]").is_none());
    }

    #[test]
    fn empty_set_encodes_as_empty_list() {
        assert_eq!(encode_completed(&CompletedUnits::new()).unwrap(), "[]");
    }
}

use super::*;
use crate::error::CoreError;

#[test]
fn test_schema_name_creation() {
    let name = SchemaName::new("User");
    assert_eq!(name.as_str(), "User");
    assert_eq!(format!("{}", name), "User");
}

#[test]
fn test_schema_name_is_case_sensitive() {
    assert_ne!(SchemaName::new("User"), SchemaName::new("user"));
}

#[test]
fn test_schema_version_equality_with_strings() {
    let version = SchemaVersion::new("1.0.0");
    assert_eq!(version, "1.0.0");
    assert_eq!(version, *"1.0.0");
    assert_eq!(version, "1.0.0".to_string());
}

#[test]
fn test_try_new_rejects_empty() {
    assert!(SchemaName::try_new("").is_none());
    assert!(SchemaVersion::try_new("").is_none());
}

#[test]
fn test_parse_empty_reports_context() {
    let err = SchemaVersion::parse("").unwrap_err();
    assert!(matches!(err, CoreError::EmptyName { ref context } if context == "schema version"));
    assert!(err.to_string().contains("[E003]"));
}

#[test]
fn test_try_from_str() {
    let name: SchemaName = "Block".try_into().unwrap();
    assert_eq!(name.as_str(), "Block");
    let result: Result<SchemaName, _> = "".try_into();
    assert!(result.is_err());
}

#[test]
fn test_borrow_allows_str_lookup() {
    use std::collections::HashMap;
    let mut map: HashMap<SchemaName, i32> = HashMap::new();
    map.insert(SchemaName::new("User"), 1);
    assert_eq!(map.get("User"), Some(&1));
    assert_eq!(map.get("Block"), None);
}

#[test]
fn test_serde_roundtrip() {
    let version = SchemaVersion::new("2.0.0");
    let json = serde_json::to_string(&version).unwrap();
    assert_eq!(json, r#""2.0.0""#);
    let back: SchemaVersion = serde_json::from_str(&json).unwrap();
    assert_eq!(back, version);
}

#[test]
fn test_deserialize_rejects_empty() {
    let result: Result<SchemaName, _> = serde_json::from_str(r#""""#);
    assert!(result.is_err());
}

#[test]
fn test_versions_are_not_semantically_ordered() {
    // Ordering is plain string ordering, used only for stable listings.
    assert!(SchemaVersion::new("10.0.0") < SchemaVersion::new("2.0.0"));
}

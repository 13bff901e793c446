use super::*;
use crate::catalog::CatalogError;
use crate::store::StoreError;

fn parse(json: &str) -> serde_json::Value {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_not_found_is_a_client_error() {
    let parsed = parse(&to_error_json("/srv/syllabus", &CatalogError::LessonNotFound(4)));

    assert_eq!(parsed["code"], "LESSON_NOT_FOUND");
    assert_eq!(parsed["message"], "Lesson not found: 4");
    assert_eq!(parsed["clientError"], true);
    assert_eq!(parsed["store"], "/srv/syllabus");
    assert!(parsed.get("tip").is_none());
    assert!(parsed.get("logFile").is_some());
}

#[test]
fn test_invalid_position_carries_tip() {
    let parsed = parse(&to_error_json("memory", &CatalogError::InvalidPosition(0)));

    assert_eq!(parsed["code"], "INVALID_POSITION");
    assert_eq!(parsed["tip"], "Positions start at 1");
    assert_eq!(parsed["clientError"], true);
}

#[test]
fn test_store_failure_is_not_a_client_error() {
    let err = CatalogError::StoreError(StoreError::unreadable("7", "field `orderNumber`"));
    let se = StructuredError::describe("memory", &err);

    assert_eq!(se.code, "UNREADABLE_RECORD");
    assert!(!se.client_error);
    assert!(se.tip.is_some());
    assert!(se.message.contains("orderNumber"));
}

#[test]
fn test_fallback_is_valid_json() {
    let parsed = parse(FALLBACK_JSON);
    assert_eq!(parsed["code"], "INTERNAL_ERROR");
}

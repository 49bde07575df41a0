//! Integration tests for the namespace service
//!
//! These tests exercise the public operations end to end:
//! - Creation, idempotence and case handling
//! - Deletion of whole subtrees
//! - Moves and their failure modes
//! - Deterministic listing

use services_namespace::{NamespaceError, NamespaceOperations, NamespaceService, Operand};

#[test]
fn test_idempotent_create() {
    let mut service = NamespaceService::new();

    service.create("a/b").unwrap();
    service.create("a/b").unwrap();

    assert_eq!(service.list(), "a\n  b\n");
}

#[test]
fn test_listing_is_sorted_regardless_of_insertion_order() {
    let mut service = NamespaceService::new();
    for name in ["vegetables", "grains", "fruits", "dairy"] {
        service.create(name).unwrap();
    }
    service.create("fruits/pears").unwrap();
    service.create("fruits/apples").unwrap();

    assert_eq!(
        service.list(),
        "dairy\nfruits\n  apples\n  pears\ngrains\nvegetables\n"
    );
}

#[test]
fn test_round_trip_move() {
    let mut service = NamespaceService::new();
    service.create("a/b").unwrap();
    service.create("c").unwrap();

    service.move_dir("a/b", "c").unwrap();

    assert_eq!(service.list(), "a\nc\n  b\n");
}

#[test]
fn test_move_carries_subtree() {
    let mut service = NamespaceService::new();
    service.create("fruits/apples/fuji").unwrap();
    service.create("foods").unwrap();

    service.move_dir("fruits", "foods").unwrap();

    assert_eq!(service.list(), "foods\n  fruits\n    apples\n      fuji\n");
}

#[test]
fn test_delete_removes_subtree() {
    let mut service = NamespaceService::new();
    service.create("a/b/c").unwrap();

    service.delete("a/b").unwrap();

    assert_eq!(service.list(), "a\n");
}

#[test]
fn test_delete_missing_segment() {
    let mut service = NamespaceService::new();
    let err = service.delete("x/y").unwrap_err();

    assert_eq!(
        err,
        NamespaceError::SegmentNotFound {
            segment: "x".to_string()
        }
    );
    assert_eq!(err.to_string(), "x does not exist");
}

#[test]
fn test_delete_reports_first_missing_segment_only() {
    let mut service = NamespaceService::new();
    service.create("fruits").unwrap();

    let err = service.delete("fruits/grains/bread").unwrap_err();
    assert_eq!(err.to_string(), "grains does not exist");
    assert_eq!(service.list(), "fruits\n");
}

#[test]
fn test_invalid_name_rejection() {
    let mut service = NamespaceService::new();
    let err = service.create("fru its").unwrap_err();

    assert_eq!(err.to_string(), "Invalid directory name(s): [fru its]");
    assert_eq!(service.list(), "");
}

#[test]
fn test_colon_is_rejected() {
    let mut service = NamespaceService::new();
    let err = service.create("c:/windows").unwrap_err();

    assert_eq!(err.to_string(), "Invalid directory name(s): [c:]");
}

#[test]
fn test_same_path_move_rejection() {
    let mut service = NamespaceService::new();
    service.create("a").unwrap();

    let err = service.move_dir("a", "a").unwrap_err();
    assert!(matches!(err, NamespaceError::SameSourceDestination { .. }));
    assert_eq!(
        err.to_string(),
        "Cannot move [a] to [a] - source and destination is the same"
    );
}

#[test]
fn test_move_missing_operands() {
    let mut service = NamespaceService::new();
    service.create("a").unwrap();

    let err = service.move_dir("/", "a").unwrap_err();
    assert!(matches!(
        err,
        NamespaceError::MissingOperand {
            operand: Operand::Source,
            ..
        }
    ));

    let err = service.move_dir("a", "//").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot move [a] to [//] - no destination directory provided"
    );
}

#[test]
fn test_move_unresolvable_source() {
    let mut service = NamespaceService::new();
    service.create("foods").unwrap();

    let err = service.move_dir("fruits/apples", "foods").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot move [fruits/apples] to [foods] - fruits does not exist"
    );
}

#[test]
fn test_move_unresolvable_destination_leaves_tree_unchanged() {
    let mut service = NamespaceService::new();
    service.create("fruits/apples").unwrap();

    let err = service.move_dir("fruits/apples", "foods").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot move [fruits/apples] to [foods] - foods does not exist"
    );
    assert_eq!(service.list(), "fruits\n  apples\n");
}

#[test]
fn test_case_insensitive_lookup_case_preserving_storage() {
    let mut service = NamespaceService::new();
    service.create("Fruits").unwrap();
    service.create("fruits/x").unwrap();

    assert_eq!(service.list(), "Fruits\n  x\n");
    assert_eq!(
        service.resolve_path("FRUITS/X").unwrap(),
        service.resolve_path("Fruits/x").unwrap()
    );
}

#[test]
fn test_case_insensitive_delete_and_move() {
    let mut service = NamespaceService::new();
    service.create("Fruits/Apples").unwrap();
    service.create("Foods").unwrap();

    service.move_dir("fruits/apples", "foods").unwrap();
    service.delete("FRUITS").unwrap();

    assert_eq!(service.list(), "Foods\n  Apples\n");
}

#[test]
fn test_trailing_slash_is_ignored() {
    let mut service = NamespaceService::new();
    service.create("fruits/").unwrap();
    service.create("fruits/apples//").unwrap();

    service.delete("fruits/apples/").unwrap();
    assert_eq!(service.list(), "fruits\n");
}

#[test]
fn test_grocery_session() {
    let mut service = NamespaceService::new();
    for path in [
        "fruits",
        "vegetables",
        "grains",
        "fruits/apples",
        "fruits/apples/fuji",
    ] {
        service.create(path).unwrap();
    }
    assert_eq!(
        service.list(),
        "fruits\n  apples\n    fuji\ngrains\nvegetables\n"
    );

    service.create("grains/squash").unwrap();
    service.move_dir("grains/squash", "vegetables").unwrap();
    service.create("foods").unwrap();
    service.move_dir("grains", "foods").unwrap();
    service.move_dir("fruits", "foods").unwrap();
    service.move_dir("vegetables", "foods").unwrap();
    assert_eq!(
        service.list(),
        "foods\n  fruits\n    apples\n      fuji\n  grains\n  vegetables\n    squash\n"
    );

    let err = service.delete("fruits/apples").unwrap_err();
    assert_eq!(err.to_string(), "fruits does not exist");
    service.delete("foods/fruits/apples").unwrap();
    assert_eq!(
        service.list(),
        "foods\n  fruits\n  grains\n  vegetables\n    squash\n"
    );
}

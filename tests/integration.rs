//! Integration tests for the employee registry.
//!
//! This test suite walks the sample workflow end to end:
//! - Adding the four sample records
//! - Fetch, modify and reassign via edit
//! - Patch-based update
//! - Deletion and the salary average of the remainder
//! - Name lookup and keyword search
//! - Sorting
//! - Roster loading

use rust_decimal::Decimal;
use std::str::FromStr;

use employee_registry::config::ConfigLoader;
use employee_registry::models::{Employee, EmployeeUpdate, Outcome};
use employee_registry::registry::Registry;

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn create_sample_registry() -> Registry {
    let mut registry = Registry::new();
    registry.add(Employee::new(1, "John Smith", 30, "Manager", decimal("5000")));
    registry.add(Employee::new(2, "Emily Johnson", 25, "Engineer", decimal("4000")));
    registry.add(Employee::new(3, "Robert Davis", 35, "Accountant", decimal("4500")));
    registry.add(Employee::new(4, "Jessica Brown", 28, "Designer", decimal("3500")));
    registry
}

fn names(employees: &[&Employee]) -> Vec<String> {
    employees.iter().map(|e| e.name.clone()).collect()
}

fn order(registry: &Registry) -> Vec<u32> {
    registry.iter().map(|e| e.id).collect()
}

// =============================================================================
// SECTION 1: Sample Workflow
// =============================================================================

#[test]
fn test_sample_count_is_four() {
    let registry = create_sample_registry();
    assert_eq!(registry.count(), 4);
}

#[test]
fn test_edit_after_fetch_updates_age_and_position() {
    let mut registry = create_sample_registry();

    let mut emily = registry.get_by_id(2).cloned().expect("id 2 present");
    emily.age = 26;
    emily.position = "Senior Engineer".to_string();

    let outcome = registry.edit(2, emily);
    assert_eq!(outcome, Outcome::Updated);
    assert!(outcome.is_found());

    let stored = registry.get_by_id(2).unwrap();
    assert_eq!(stored.age, 26);
    assert_eq!(stored.position, "Senior Engineer");
}

#[test]
fn test_delete_then_average_of_remaining() {
    let mut registry = create_sample_registry();
    let mut emily = registry.get_by_id(2).cloned().unwrap();
    emily.age = 26;
    emily.position = "Senior Engineer".to_string();
    let _ = registry.edit(2, emily);

    assert_eq!(registry.delete(1), Outcome::Deleted);
    assert_eq!(registry.count(), 3);
    assert_eq!(registry.average_salary(), Some(decimal("4000")));
}

#[test]
fn test_name_lookup_john_on_initial_records() {
    let registry = create_sample_registry();

    // "Emily Johnson" also contains "john" once case is ignored.
    let matches = registry.get_by_name("John");
    assert_eq!(names(&matches), vec!["John Smith", "Emily Johnson"]);
}

#[test]
fn test_name_lookup_smith_is_exact_record() {
    let registry = create_sample_registry();

    let matches = registry.get_by_name("Smith");
    assert_eq!(matches.len(), 1);
    assert_eq!(*matches[0], Employee::new(1, "John Smith", 30, "Manager", decimal("5000")));
}

#[test]
fn test_search_e_after_deletion() {
    let mut registry = create_sample_registry();
    let _ = registry.delete(1);

    let matches = registry.search("E");
    assert_eq!(
        names(&matches),
        vec!["Emily Johnson", "Robert Davis", "Jessica Brown"]
    );
}

#[test]
fn test_search_by_numeric_id_vs_text() {
    let registry = create_sample_registry();

    assert_eq!(names(&registry.search(3u32)), vec!["Robert Davis"]);
    assert!(registry.search("3").is_empty());
}

// =============================================================================
// SECTION 2: Update Protocol
// =============================================================================

#[test]
fn test_patch_update_matches_fetch_modify_edit() {
    let mut via_edit = create_sample_registry();
    let mut via_patch = create_sample_registry();

    let mut emily = via_edit.get_by_id(2).cloned().unwrap();
    emily.age = 26;
    emily.position = "Senior Engineer".to_string();
    let _ = via_edit.edit(2, emily);

    let patch = EmployeeUpdate::default()
        .with_age(26)
        .with_position("Senior Engineer");
    let _ = via_patch.update(2, &patch);

    assert_eq!(via_edit, via_patch);
}

#[test]
fn test_missing_id_operations_report_not_found() {
    let mut registry = create_sample_registry();
    let before = registry.clone();

    assert_eq!(
        registry.edit(10, Employee::new(10, "X", 1, "X", Decimal::ZERO)),
        Outcome::NotFound
    );
    assert_eq!(registry.update(10, &EmployeeUpdate::default()), Outcome::NotFound);
    assert_eq!(registry.delete(10), Outcome::NotFound);
    assert!(registry.get_by_id(10).is_none());
    assert_eq!(registry, before);
}

// =============================================================================
// SECTION 3: Sorting
// =============================================================================

#[test]
fn test_sort_by_name_then_salary() {
    let mut registry = create_sample_registry();
    let _ = registry.delete(1);

    registry.sort_by_name();
    assert_eq!(order(&registry), vec![2, 4, 3]);

    registry.sort_by_salary();
    assert_eq!(order(&registry), vec![4, 2, 3]);
}

#[test]
fn test_sort_by_age_keeps_every_record() {
    let mut registry = create_sample_registry();
    registry.sort_by_age();

    assert_eq!(registry.count(), 4);
    assert_eq!(order(&registry), vec![2, 4, 1, 3]);
}

// =============================================================================
// SECTION 4: Empty Registry
// =============================================================================

#[test]
fn test_empty_registry_statistics() {
    let registry = Registry::new();

    assert_eq!(registry.count(), 0);
    assert_eq!(registry.average_salary(), None);
    assert!(registry.salary_summary().is_none());
    assert!(registry.search("a").is_empty());
}

// =============================================================================
// SECTION 5: Roster Loading
// =============================================================================

#[test]
fn test_roster_matches_sample_records() {
    let registry = ConfigLoader::load("./config/sample_roster.yaml")
        .expect("Failed to load roster")
        .into_registry();

    assert_eq!(registry, create_sample_registry());
}

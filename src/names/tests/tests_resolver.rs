#![allow(clippy::unwrap_used)]

use tokio_util::sync::CancellationToken;

use crate::base::CaseMode;
use crate::error::NamingError;
use crate::names::{
    AcceptAll, NameGenerator, NameOptions, NameSlot, ensure_unique, ensure_unique_name,
    ensure_unique_with, ensure_unique_with_fixed,
};

fn resolve_fixed(names: &[&str], fixed: &[bool]) -> Vec<String> {
    ensure_unique_with_fixed(names, fixed, &AcceptAll, &NameOptions::default()).unwrap()
}

// ============================================================================
// Fixed slots
// ============================================================================

#[test]
fn test_fixed_duplicates_are_preserved() {
    let result = resolve_fixed(&["a", "a", "b"], &[true, true, true]);
    assert_eq!(result, vec!["a", "a", "b"]);
}

#[test]
fn test_movable_duplicate_of_fixed_is_renamed() {
    let result = resolve_fixed(&["a", "a", "b"], &[true, false, true]);
    assert_eq!(result, vec!["a", "a1", "b"]);
}

#[test]
fn test_fixed_name_exempt_from_usability() {
    let reject_this = |name: &str| name != "this";
    let slots = [NameSlot::fixed("this")];
    let result = NameGenerator::default()
        .with_usability(&reject_this)
        .ensure_unique(&slots)
        .unwrap();
    assert_eq!(result, vec!["this"]);
}

// ============================================================================
// Movable slots
// ============================================================================

#[test]
fn test_all_movable_duplicates_are_all_renamed() {
    let result = ensure_unique(&["a", "a"], &NameOptions::default()).unwrap();
    assert_eq!(result, vec!["a1", "a2"]);
}

#[test]
fn test_suffix_skips_names_already_in_list() {
    let result = ensure_unique(&["a", "a", "a1"], &NameOptions::default()).unwrap();
    assert_eq!(result, vec!["a2", "a3", "a1"]);
}

#[test]
fn test_later_positions_see_rewritten_names() {
    let result = ensure_unique(&["x", "x1", "x"], &NameOptions::default()).unwrap();
    assert_eq!(result, vec!["x2", "x1", "x3"]);
}

#[test]
fn test_unique_list_is_unchanged() {
    let names = ["alpha", "beta", "gamma"];
    let result = ensure_unique(&names, &NameOptions::default()).unwrap();
    assert_eq!(result, names);
}

#[test]
fn test_empty_list() {
    let names: [&str; 0] = [];
    assert!(ensure_unique(&names, &NameOptions::default()).unwrap().is_empty());
}

#[test]
fn test_rejected_name_without_collision_is_renamed() {
    let reject_tmp = |name: &str| name != "tmp";
    let result =
        ensure_unique_with(&["tmp", "other"], &reject_tmp, &NameOptions::default()).unwrap();
    assert_eq!(result, vec!["tmp1", "other"]);
}

#[test]
fn test_rejected_candidate_is_skipped() {
    let reject_a1 = |name: &str| name != "a1";
    let result =
        ensure_unique_with_fixed(&["a", "a"], &[true, false], &reject_a1, &NameOptions::default())
            .unwrap();
    assert_eq!(result, vec!["a", "a2"]);
}

#[test]
fn test_input_slots_untouched() {
    let slots = vec![NameSlot::movable("v"), NameSlot::movable("v")];
    let before = slots.clone();
    let result = NameGenerator::default().ensure_unique(&slots).unwrap();
    assert_eq!(slots, before);
    assert_eq!(result, vec!["v1", "v2"]);
}

// ============================================================================
// Case modes
// ============================================================================

#[test]
fn test_case_insensitive_collision() {
    let options = NameOptions::default().case_insensitive();
    let result = ensure_unique(&["Foo", "foo"], &options).unwrap();
    assert_eq!(result, vec!["Foo1", "Foo2"]);
}

#[test]
fn test_case_sensitive_keeps_distinct_case() {
    let result = ensure_unique(&["Foo", "foo"], &NameOptions::default()).unwrap();
    assert_eq!(result, vec!["Foo", "foo"]);
}

#[test]
fn test_case_insensitive_membership_for_candidates() {
    let options = NameOptions::default().case_insensitive();
    let result =
        ensure_unique_with_fixed(&["a", "a", "A1"], &[false, false, true], &AcceptAll, &options)
            .unwrap();
    assert_eq!(result, vec!["a2", "a3", "A1"]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_parallel_length_mismatch() {
    let err = ensure_unique_with_fixed(&["a", "b"], &[false], &AcceptAll, &NameOptions::default())
        .unwrap_err();
    assert!(matches!(err, NamingError::InvalidArgument(_)));
}

#[test]
fn test_exhaustion_reported() {
    let reject_all = |_: &str| false;
    let options = NameOptions::default().with_max_attempts(5);
    let err = ensure_unique_with(&["a"], &reject_all, &options).unwrap_err();
    assert_eq!(err, NamingError::exhausted("a", 5));
}

#[test]
fn test_names_already_in_list_do_not_count_as_attempts() {
    let mut reserved = vec!["n".to_string()];
    reserved.extend((1..=10_000).map(|i| format!("n{i}")));
    let result = ensure_unique_name("n", &reserved, &NameOptions::default()).unwrap();
    assert_eq!(result, "n10001");
}

#[test]
fn test_only_rejections_count_toward_bound() {
    let options = NameOptions::default().with_max_attempts(1);
    let result =
        ensure_unique_with_fixed(&["a", "a", "a1"], &[true, false, true], &AcceptAll, &options)
            .unwrap();
    assert_eq!(result, vec!["a", "a2", "a1"]);
}

#[test]
fn test_cancelled_during_collision_search() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let options = NameOptions::default().with_cancellation(cancel);
    let err = ensure_unique(&["a", "a"], &options).unwrap_err();
    assert_eq!(err, NamingError::Cancelled);
}

#[test]
fn test_cancelled_token_ignored_when_nothing_to_search() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let options = NameOptions::default().with_cancellation(cancel);
    let result = ensure_unique(&["a", "b"], &options).unwrap();
    assert_eq!(result, vec!["a", "b"]);
}

#[test]
fn test_case_mode_on_generator_options() {
    let options = NameOptions::default().with_case_mode(CaseMode::Insensitive);
    let generator = NameGenerator::new(options);
    assert_eq!(generator.options().case_mode, CaseMode::Insensitive);
}

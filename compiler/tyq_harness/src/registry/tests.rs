use super::*;
use crate::case::CaseCtx;
use crate::AssertionFailure;
use pretty_assertions::assert_eq;

#[allow(clippy::unnecessary_wraps, reason = "signature fixed by CaseFn")]
fn noop(_: &mut CaseCtx) -> Result<(), AssertionFailure> {
    Ok(())
}

#[test]
fn registration_order_is_kept() {
    let mut registry = Registry::new();
    assert_eq!(registry.register("b", "second", noop), Ok(()));
    assert_eq!(registry.register("a", "first", noop), Ok(()));

    let names: Vec<String> = registry.cases().iter().map(TestCase::full_name).collect();
    assert_eq!(names, vec!["b::second", "a::first"]);
}

#[test]
fn duplicates_are_rejected() {
    let mut registry = Registry::new();
    assert_eq!(registry.register("g", "case", noop), Ok(()));
    assert_eq!(registry.register("other", "case", noop), Ok(()));
    assert_eq!(
        registry.register("g", "case", noop),
        Err(RegistrationError::Duplicate("g::case".into()))
    );
    assert_eq!(registry.len(), 2);
}

#[test]
fn filter_matches_full_name_substrings() {
    let mut registry = Registry::new();
    for (group, name) in [
        ("primary_type", "is_void"),
        ("primary_type", "is_pointer"),
        ("composite_type", "is_member_pointer"),
    ] {
        assert_eq!(registry.register(group, name, noop), Ok(()));
    }

    assert_eq!(registry.filtered(None).count(), 3);
    assert_eq!(registry.filtered(Some("primary_type::")).count(), 2);
    assert_eq!(registry.filtered(Some("pointer")).count(), 2);
    assert_eq!(registry.filtered(Some("type::is_void")).count(), 1);
    assert_eq!(registry.filtered(Some("nothing")).count(), 0);
}

#[test]
fn builtin_suites_register() {
    let registry = match Registry::with_suites() {
        Ok(registry) => registry,
        Err(e) => panic!("{e}"),
    };
    assert!(!registry.is_empty());
    assert!(registry
        .cases()
        .iter()
        .any(|c| c.full_name() == "supported_operations::is_trivially_constructible"));
}

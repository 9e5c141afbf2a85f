use super::*;

#[test]
fn outcome_predicates() {
    assert!(CaseOutcome::Passed.is_passed());
    assert!(!CaseOutcome::Passed.is_failed());
    assert!(CaseOutcome::Failed("mismatch".into()).is_failed());
}

#[test]
fn summary_counts() {
    let mut summary = Summary::new();
    summary.add_result(CaseResult::passed("g::a".into(), Duration::from_millis(1)));
    summary.add_result(CaseResult::failed(
        "g::b".into(),
        "expected 'int', found 'long'".into(),
        Duration::from_millis(2),
    ));
    summary.add_result(CaseResult::passed("g::c".into(), Duration::ZERO));

    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.total(), 3);
    assert!(summary.has_failures());

    let failed: Vec<&str> = summary.failures().map(|r| r.name.as_str()).collect();
    assert_eq!(failed, vec!["g::b"]);
}

#[test]
fn summary_exit_code() {
    let mut summary = Summary::new();
    assert_eq!(summary.exit_code(), 0); // Nothing ran, nothing failed

    summary.passed = 4;
    assert_eq!(summary.exit_code(), 0);

    summary.failed = 1;
    assert_eq!(summary.exit_code(), 1);
}

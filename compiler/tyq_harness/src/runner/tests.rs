use super::*;
use crate::case::CaseCtx;
use crate::result::CaseOutcome;
use crate::AssertionFailure;
use pretty_assertions::assert_eq;
use tyq_types::{Idx, Predicate};

fn passes(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    ctx.check(Predicate::IsVoid, Idx::VOID, true)
}

fn fails(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    ctx.check(Predicate::IsVoid, Idx::INT, true)
}

/// Extends its own pool; must not leak into other cases.
fn declares_extra(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let before = ctx.pool.len();
    let ptr = ctx.pool.pointer(ctx.fx.c3);
    ctx.check(Predicate::IsPointer, ptr, true)?;
    if ctx.pool.len() != before + 1 {
        return Err(AssertionFailure::TypeMismatch {
            expected: "one new descriptor".into(),
            found: format!("{} new descriptors", ctx.pool.len() - before),
        });
    }
    Ok(())
}

fn panics(_ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    panic!("descriptor table corrupted");
}

fn runner(parallel: bool, filter: Option<&str>) -> Runner {
    let config = RunnerConfig {
        filter: filter.map(str::to_owned),
        parallel,
        verbose: false,
    };
    match Runner::new(config) {
        Ok(runner) => runner,
        Err(e) => panic!("fixtures failed: {e}"),
    }
}

fn registry() -> Registry {
    let mut registry = Registry::new();
    for (name, body) in [
        ("passes", passes as crate::CaseFn),
        ("fails", fails),
        ("declares_extra_1", declares_extra),
        ("declares_extra_2", declares_extra),
    ] {
        if let Err(e) = registry.register("runner", name, body) {
            panic!("{e}");
        }
    }
    registry
}

#[test]
fn default_config() {
    let config = RunnerConfig::default();
    assert_eq!(config.filter, None);
    assert!(config.parallel);
    assert!(!config.verbose);
}

#[test]
fn failures_do_not_abort_siblings() {
    for parallel in [false, true] {
        let summary = runner(parallel, None).run(&registry());
        assert_eq!(summary.passed, 3);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.exit_code(), 1);

        let names: Vec<&str> = summary.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "runner::passes",
                "runner::fails",
                "runner::declares_extra_1",
                "runner::declares_extra_2"
            ]
        );
        assert_eq!(
            summary.results[1].outcome,
            CaseOutcome::Failed("is_void<int>: expected true, found false".into())
        );
    }
}

#[test]
fn panicking_case_is_reported_as_failure() {
    let mut registry = Registry::new();
    for (name, body) in [
        ("passes", passes as crate::CaseFn),
        ("panics", panics),
        ("passes_after", passes),
    ] {
        if let Err(e) = registry.register("runner", name, body) {
            panic!("{e}");
        }
    }

    for parallel in [false, true] {
        let summary = runner(parallel, None).run(&registry);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.results[2].name, "runner::passes_after");
        assert!(summary.results[2].outcome.is_passed());
        assert_eq!(
            summary.results[1].outcome,
            CaseOutcome::Failed("panicked: descriptor table corrupted".into())
        );
    }
}

#[test]
fn filter_limits_the_run() {
    let summary = runner(false, Some("declares")).run(&registry());
    assert_eq!(summary.total(), 2);
    assert_eq!(summary.exit_code(), 0);
}

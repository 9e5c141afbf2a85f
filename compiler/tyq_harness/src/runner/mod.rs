//! Case execution.
//!
//! Every case runs against its own clone of the base [`CaseCtx`], so cases
//! may run in any order or in parallel. Results are reported in
//! registration order either way.

use std::time::Instant;

use rayon::prelude::*;
use tyq_types::LookupError;

use crate::case::{CaseCtx, TestCase};
use crate::registry::Registry;
use crate::result::{CaseResult, Summary};

/// Configuration for the runner.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunnerConfig {
    /// Run only cases whose `group::name` contains this substring.
    pub filter: Option<String>,
    /// Run cases in parallel.
    pub parallel: bool,
    /// Report passing cases with timings, not just failures.
    pub verbose: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            filter: None,
            parallel: true,
            verbose: false,
        }
    }
}

/// Case runner.
pub struct Runner {
    config: RunnerConfig,
    /// Fixture state cloned into every case.
    base: CaseCtx,
}

impl Runner {
    /// Create a runner, declaring the shared fixtures once.
    pub fn new(config: RunnerConfig) -> Result<Self, LookupError> {
        Ok(Runner {
            config,
            base: CaseCtx::new()?,
        })
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run every registered case matching the filter.
    pub fn run(&self, registry: &Registry) -> Summary {
        let cases: Vec<&TestCase> = registry.filtered(self.config.filter.as_deref()).collect();
        tracing::debug!(
            cases = cases.len(),
            parallel = self.config.parallel,
            "running cases"
        );

        let start = Instant::now();
        let results = if self.config.parallel {
            self.run_parallel(&cases)
        } else {
            self.run_sequential(&cases)
        };

        let mut summary = Summary::new();
        for result in results {
            summary.add_result(result);
        }
        summary.duration = start.elapsed();
        tracing::debug!(
            passed = summary.passed,
            failed = summary.failed,
            "run finished"
        );
        summary
    }

    fn run_sequential(&self, cases: &[&TestCase]) -> Vec<CaseResult> {
        cases.iter().map(|case| self.run_case(case)).collect()
    }

    /// Run cases on a scoped rayon pool, cleaned up before returning.
    fn run_parallel(&self, cases: &[&TestCase]) -> Vec<CaseResult> {
        rayon::ThreadPoolBuilder::new()
            .build_scoped(rayon::ThreadBuilder::run, |pool| {
                pool.install(|| {
                    cases
                        .par_iter()
                        .map(|case| self.run_case(case))
                        .collect::<Vec<_>>()
                })
            })
            .unwrap_or_else(|e| {
                tracing::warn!("failed to create thread pool ({e}), running sequentially");
                self.run_sequential(cases)
            })
    }

    fn run_case(&self, case: &TestCase) -> CaseResult {
        let name = case.full_name();
        let mut ctx = self.base.clone();
        tracing::debug!(case = %name, "case started");

        let start = Instant::now();
        let outcome =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| (case.body)(&mut ctx)));
        let duration = start.elapsed();

        match outcome {
            Ok(Ok(())) => {
                tracing::debug!(case = %name, ?duration, "case passed");
                CaseResult::passed(name, duration)
            }
            Ok(Err(failure)) => {
                tracing::debug!(case = %name, %failure, "case failed");
                CaseResult::failed(name, failure.to_string(), duration)
            }
            Err(panic_info) => {
                let msg = if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else if let Some(s) = panic_info.downcast_ref::<&str>() {
                    (*s).to_string()
                } else {
                    "case panicked".to_string()
                };
                tracing::debug!(case = %name, panic = %msg, "case panicked");
                CaseResult::failed(name, format!("panicked: {msg}"), duration)
            }
        }
    }
}

#[cfg(test)]
mod tests;

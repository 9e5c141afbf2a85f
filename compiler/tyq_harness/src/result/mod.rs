//! Case results and the run summary.

use std::time::Duration;

/// Outcome of a single case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CaseOutcome {
    Passed,
    /// Failed with the rendered assertion failure.
    Failed(String),
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CaseOutcome::Failed(_))
    }
}

/// Result of running a single case.
#[derive(Clone, Debug)]
pub struct CaseResult {
    /// Full `group::name` of the case.
    pub name: String,
    pub outcome: CaseOutcome,
    pub duration: Duration,
}

impl CaseResult {
    pub fn passed(name: String, duration: Duration) -> Self {
        CaseResult {
            name,
            outcome: CaseOutcome::Passed,
            duration,
        }
    }

    #[cold]
    pub fn failed(name: String, error: String, duration: Duration) -> Self {
        CaseResult {
            name,
            outcome: CaseOutcome::Failed(error),
            duration,
        }
    }
}

/// Results of a run, in registration order.
#[derive(Clone, Debug, Default)]
pub struct Summary {
    pub results: Vec<CaseResult>,
    pub passed: usize,
    pub failed: usize,
    /// Wall-clock time for the whole run.
    pub duration: Duration,
}

impl Summary {
    pub fn new() -> Self {
        Summary::default()
    }

    pub fn add_result(&mut self, result: CaseResult) {
        match &result.outcome {
            CaseOutcome::Passed => self.passed += 1,
            CaseOutcome::Failed(_) => self.failed += 1,
        }
        self.results.push(result);
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Failed cases only.
    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|r| r.outcome.is_failed())
    }

    /// Process exit status: 0 when no case failed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_failures())
    }
}

#[cfg(test)]
mod tests;

//! Registry, runner and suites for the tyq assertion harness.
//!
//! Suites register named cases under a group (`primary_type::is_void`).
//! Each case receives its own [`CaseCtx`]: a clone of the fixture pool and
//! scope, so cases never observe each other. Assertions return an
//! [`AssertionFailure`] which fails that case only.
//!
//! ```text
//! Registry::with_suites() -> Runner::run() -> Summary -> exit code
//! ```

mod assertion;
mod case;
mod cli;
mod fixtures;
mod registry;
mod result;
mod runner;
mod suites;

use std::sync::Once;

pub use assertion::{assert_predicate, assert_same_type, AssertionFailure};
pub use case::{CaseCtx, CaseFn, TestCase};
pub use cli::{parse_args, Command, UsageError, USAGE};
pub use fixtures::Fixtures;
pub use registry::{RegistrationError, Registry};
pub use result::{CaseOutcome, CaseResult, Summary};
pub use runner::{Runner, RunnerConfig};

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

//! The two assertions every case is built from.

use tyq_types::{DeduceError, Idx, LookupError, Pool, Predicate};

/// Why a case failed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum AssertionFailure {
    /// Two descriptors that should be identical are not.
    #[error("expected '{expected}', found '{found}'")]
    TypeMismatch { expected: String, found: String },
    /// A predicate evaluated to the wrong value.
    #[error("{predicate}<{ty}>: expected {expected}, found {found}")]
    PredicateMismatch {
        predicate: Predicate,
        ty: String,
        expected: bool,
        found: bool,
    },
    /// Deducing the type under test failed.
    #[error("deduction failed: {0}")]
    Deduce(#[from] DeduceError),
    /// Building a fixture or member pointer failed.
    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

/// Fail unless `actual` and `expected` are the same descriptor.
///
/// Descriptors are hash-consed, so structural equality is handle equality.
pub fn assert_same_type(pool: &Pool, actual: Idx, expected: Idx) -> Result<(), AssertionFailure> {
    if actual == expected {
        return Ok(());
    }
    Err(AssertionFailure::TypeMismatch {
        expected: pool.format_type(expected),
        found: pool.format_type(actual),
    })
}

/// Fail unless `predicate` evaluates to `expected` on `ty`.
pub fn assert_predicate(
    pool: &Pool,
    predicate: Predicate,
    ty: Idx,
    expected: bool,
) -> Result<(), AssertionFailure> {
    let found = predicate.eval(pool, ty);
    if found == expected {
        return Ok(());
    }
    Err(AssertionFailure::PredicateMismatch {
        predicate,
        ty: pool.format_type(ty),
        expected,
        found,
    })
}

#[cfg(test)]
mod tests;

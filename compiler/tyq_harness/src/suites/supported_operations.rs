//! Supported-operation traits.

use crate::case::CaseCtx;
use crate::registry::{RegistrationError, Registry};
use crate::AssertionFailure;

const GROUP: &str = "supported_operations";

pub(super) fn register(r: &mut Registry) -> Result<(), RegistrationError> {
    r.register(GROUP, "is_trivially_constructible", is_trivially_constructible)?;
    Ok(())
}

/// Reserved: no construction traits are modeled yet, so this case asserts
/// nothing.
#[allow(clippy::unnecessary_wraps, reason = "signature fixed by CaseFn")]
fn is_trivially_constructible(_: &mut CaseCtx) -> Result<(), AssertionFailure> {
    Ok(())
}

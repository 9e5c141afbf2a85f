//! Built-in suites, one module per group.

mod composite_type;
mod decltype;
mod primary_key;
mod primary_type;
mod supported_operations;
mod type_property;

use crate::registry::{RegistrationError, Registry};

/// Register every suite, in the order they are reported.
pub(crate) fn register_all(registry: &mut Registry) -> Result<(), RegistrationError> {
    decltype::register(registry)?;
    primary_type::register(registry)?;
    primary_key::register(registry)?;
    composite_type::register(registry)?;
    type_property::register(registry)?;
    supported_operations::register(registry)?;
    Ok(())
}

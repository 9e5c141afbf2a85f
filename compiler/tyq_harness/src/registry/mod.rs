//! Case registration.

use rustc_hash::FxHashSet;

use crate::case::{CaseFn, TestCase};

/// Registration failure.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RegistrationError {
    #[error("case `{0}` is registered twice")]
    Duplicate(String),
}

/// Cases in registration order.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
    names: FxHashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in suite.
    pub fn with_suites() -> Result<Self, RegistrationError> {
        let mut registry = Self::new();
        crate::suites::register_all(&mut registry)?;
        Ok(registry)
    }

    /// Register `group::name`. Full names must be unique.
    pub fn register(
        &mut self,
        group: &'static str,
        name: &'static str,
        body: CaseFn,
    ) -> Result<(), RegistrationError> {
        let case = TestCase { group, name, body };
        let full_name = case.full_name();
        if !self.names.insert(full_name.clone()) {
            return Err(RegistrationError::Duplicate(full_name));
        }
        self.cases.push(case);
        Ok(())
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Cases whose full name contains `filter`; all cases when `None`.
    pub fn filtered<'a>(&'a self, filter: Option<&'a str>) -> impl Iterator<Item = &'a TestCase> + 'a {
        self.cases
            .iter()
            .filter(move |case| filter.map_or(true, |f| case.full_name().contains(f)))
    }
}

#[cfg(test)]
mod tests;

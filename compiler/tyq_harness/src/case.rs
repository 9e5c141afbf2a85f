//! Test cases and the context each one runs in.

use tyq_types::{Expr, Idx, LookupError, Pool, Predicate, Qualifiers, Scope};

use crate::assertion::{assert_predicate, assert_same_type, AssertionFailure};
use crate::fixtures::Fixtures;

/// Body of a case. Returns on the first failed assertion.
pub type CaseFn = fn(&mut CaseCtx) -> Result<(), AssertionFailure>;

/// A named case registered under a group.
#[derive(Copy, Clone, Debug)]
pub struct TestCase {
    pub group: &'static str,
    pub name: &'static str,
    pub body: CaseFn,
}

impl TestCase {
    /// `group::name`, the string filters match against.
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.group, self.name)
    }
}

/// Everything a case may read or extend: a private copy of the fixture
/// pool and scope.
#[derive(Clone, Debug)]
pub struct CaseCtx {
    pub pool: Pool,
    pub scope: Scope,
    pub fx: Fixtures,
}

impl CaseCtx {
    /// A fresh pool and scope with the shared fixtures declared.
    pub fn new() -> Result<Self, LookupError> {
        let mut pool = Pool::new();
        let mut scope = Scope::new();
        let fx = Fixtures::declare(&mut pool, &mut scope)?;
        Ok(Self { pool, scope, fx })
    }

    /// [`assert_same_type`] against this context's pool.
    pub fn same(&self, actual: Idx, expected: Idx) -> Result<(), AssertionFailure> {
        assert_same_type(&self.pool, actual, expected)
    }

    /// [`assert_predicate`] against this context's pool.
    pub fn check(&self, predicate: Predicate, ty: Idx, expected: bool) -> Result<(), AssertionFailure> {
        assert_predicate(&self.pool, predicate, ty, expected)
    }

    /// Assert `predicate` holds on every type in `tys`.
    pub fn all(&self, predicate: Predicate, tys: &[Idx]) -> Result<(), AssertionFailure> {
        tys.iter().try_for_each(|&ty| self.check(predicate, ty, true))
    }

    /// Assert `predicate` holds on none of `tys`.
    pub fn none(&self, predicate: Predicate, tys: &[Idx]) -> Result<(), AssertionFailure> {
        tys.iter().try_for_each(|&ty| self.check(predicate, ty, false))
    }

    /// `T`, `const T`, `volatile T`, `const volatile T`.
    pub fn cv_variants(&mut self, ty: Idx) -> [Idx; 4] {
        Qualifiers::ALL.map(|quals| self.pool.qualified(ty, quals))
    }

    /// `decltype(expr)` in this context's scope.
    pub fn decltype(&mut self, expr: &Expr) -> Result<Idx, AssertionFailure> {
        Ok(self.scope.decltype(&mut self.pool, expr)?)
    }

    /// The type of `&class::member`.
    pub fn member_address(&mut self, class: Idx, member: &str) -> Result<Idx, AssertionFailure> {
        Ok(self.pool.member_address(class, member)?)
    }
}

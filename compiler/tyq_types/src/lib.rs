//! Type descriptor model for a C-family type system.
//!
//! - `Idx`: 32-bit handle to an interned type, equality is structural identity
//! - `Pool`: owns every descriptor; builds, transforms and formats types
//! - `Predicate`: the classification catalog (`is_void`, `is_scalar`, ...)
//! - `Scope`: `decltype` and `auto` deduction over expressions
//!
//! # Canonical Forms
//!
//! Constructors apply the language's adjustment rules, so two spellings of
//! the same type always produce the same `Idx`: qualifiers merge, cv on a
//! reference or function is dropped, cv on an array moves to its element,
//! references collapse, and aliases resolve to the aliased type.

mod deduce;
mod error;
mod idx;
mod pool;
mod predicate;
mod qualifiers;
mod record;
mod tag;
mod value_category;

pub use deduce::{AutoDecl, Binding, Expr, Scope};
pub use error::{DeduceError, LookupError};
pub use idx::Idx;
pub use pool::{FnSig, Pool};
pub use predicate::{Predicate, PredicateKind, UnknownPredicate};
pub use qualifiers::{FnQualifiers, Qualifiers};
pub use record::{
    Access, ClassDecl, ClassKey, EnumDecl, EnumKey, Field, Method, Record, UnionDecl,
};
pub use tag::Tag;
pub use value_category::{RefKind, ValueCategory};

//! Errors raised while declaring types, looking up members, and deducing
//! expression types.

use crate::Access;

/// Name or member lookup failure.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LookupError {
    /// A type or alias with this name already denotes a different type.
    #[error("redefinition of `{0}`")]
    Redefinition(String),
    /// Member access on something that is not a class or union.
    #[error("`{ty}` is not a class or union")]
    NotARecord { ty: String },
    /// No member with this name in the class or its bases.
    #[error("no member named `{member}` in `{class}`")]
    NoSuchMember { class: String, member: String },
    /// The member exists but is not public.
    #[error("`{member}` is a {access} member of `{class}`")]
    Inaccessible {
        class: String,
        member: String,
        access: Access,
    },
    /// Overloaded or found in several bases.
    #[error("reference to `{class}::{member}` is ambiguous")]
    Ambiguous { class: String, member: String },
}

/// Expression typing or `auto` deduction failure.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DeduceError {
    #[error("use of undeclared identifier `{0}`")]
    UnknownName(String),
    /// `*e` where `e` is not a pointer.
    #[error("indirection requires pointer operand (`{ty}` invalid)")]
    NotAPointer { ty: String },
    /// `&e` where `e` is not an lvalue.
    #[error("cannot take the address of an rvalue of type `{ty}`")]
    AddressOfRValue { ty: String },
    /// Non-const lvalue reference initialized from an rvalue.
    #[error("non-const lvalue reference to type `{ty}` cannot bind to an rvalue")]
    LValueRefToRValue { ty: String },
    /// Rvalue reference initialized from an lvalue.
    #[error("rvalue reference to type `{ty}` cannot bind to an lvalue")]
    RValueRefToLValue { ty: String },
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_messages() {
        let e = LookupError::Inaccessible {
            class: "C3".into(),
            member: "func1".into(),
            access: Access::Private,
        };
        assert_eq!(e.to_string(), "`func1` is a private member of `C3`");

        let e = LookupError::NoSuchMember {
            class: "C1".into(),
            member: "x".into(),
        };
        assert_eq!(e.to_string(), "no member named `x` in `C1`");
    }

    #[test]
    fn lookup_errors_convert_transparently() {
        let inner = LookupError::Redefinition("E1".into());
        let e = DeduceError::from(inner.clone());
        assert_eq!(e.to_string(), inner.to_string());
    }
}

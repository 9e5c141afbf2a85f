//! cv-qualifiers and function qualifiers.
//!
//! `Qualifiers` is the cv-qualification attached to an object type.
//! `FnQualifiers` is the qualifier tail of a function type: cv and
//! ref-qualifiers for member functions, plus the C-style variadic marker.

use bitflags::bitflags;

bitflags! {
    /// cv-qualification of a type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Qualifiers: u32 {
        /// `const`.
        const CONST = 1 << 0;
        /// `volatile`.
        const VOLATILE = 1 << 1;
    }
}

impl Qualifiers {
    /// `const volatile`.
    pub const CV: Self = Self::CONST.union(Self::VOLATILE);

    /// The cv cross product: none, const, volatile, const volatile.
    pub const ALL: [Self; 4] = [Self::empty(), Self::CONST, Self::VOLATILE, Self::CV];

    #[inline]
    pub const fn is_const(self) -> bool {
        self.contains(Self::CONST)
    }

    #[inline]
    pub const fn is_volatile(self) -> bool {
        self.contains(Self::VOLATILE)
    }

    /// Source spelling, `""` when unqualified.
    pub const fn spelling(self) -> &'static str {
        match (self.is_const(), self.is_volatile()) {
            (false, false) => "",
            (true, false) => "const",
            (false, true) => "volatile",
            (true, true) => "const volatile",
        }
    }
}

bitflags! {
    /// Qualifier tail of a function type.
    ///
    /// cv and ref-qualifiers are only meaningful on member functions;
    /// a free function type with them is an "abominable" function type,
    /// which is still a function type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct FnQualifiers: u32 {
        /// `() const`.
        const CONST = 1 << 0;
        /// `() volatile`.
        const VOLATILE = 1 << 1;
        /// `() &`.
        const LVALUE_REF = 1 << 2;
        /// `() &&`.
        const RVALUE_REF = 1 << 3;
        /// Trailing `...` in the parameter list.
        const VARIADIC = 1 << 4;
    }
}

impl FnQualifiers {
    /// cv part of the qualifier tail.
    #[inline]
    pub const fn cv(self) -> Qualifiers {
        Qualifiers::from_bits_truncate(self.bits() & Qualifiers::CV.bits())
    }

    /// Ref-qualifier of the qualifier tail.
    #[inline]
    pub const fn ref_kind(self) -> crate::RefKind {
        if self.contains(Self::RVALUE_REF) {
            crate::RefKind::RValue
        } else if self.contains(Self::LVALUE_REF) {
            crate::RefKind::LValue
        } else {
            crate::RefKind::None
        }
    }

    #[inline]
    pub const fn is_variadic(self) -> bool {
        self.contains(Self::VARIADIC)
    }

    /// Build a qualifier tail from cv and ref parts.
    pub const fn from_parts(cv: Qualifiers, ref_kind: crate::RefKind) -> Self {
        let base = Self::from_bits_truncate(cv.bits());
        match ref_kind {
            crate::RefKind::None => base,
            crate::RefKind::LValue => base.union(Self::LVALUE_REF),
            crate::RefKind::RValue => base.union(Self::RVALUE_REF),
        }
    }
}

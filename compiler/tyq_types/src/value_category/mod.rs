//! Reference category of types and value category of expressions.
//!
//! The two are linked: `decltype` maps an lvalue expression to an lvalue
//! reference, an xvalue to an rvalue reference and a prvalue to a plain type.

/// Reference category of a type: not a reference, `T&`, or `T&&`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum RefKind {
    /// Not a reference type.
    #[default]
    None,
    /// Lvalue reference `T&`.
    LValue,
    /// Rvalue reference `T&&`.
    RValue,
}

impl RefKind {
    #[inline]
    pub const fn is_reference(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Declarator suffix: `""`, `"&"` or `"&&"`.
    #[inline]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::LValue => "&",
            Self::RValue => "&&",
        }
    }

    /// Reference collapsing: `&` wins over `&&`.
    #[inline]
    pub const fn collapse(self, outer: Self) -> Self {
        match (self, outer) {
            (Self::None, r) | (r, Self::None) => r,
            (Self::RValue, Self::RValue) => Self::RValue,
            _ => Self::LValue,
        }
    }
}

/// Value category of an expression.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ValueCategory {
    /// Designates an object or function with identity (`x`, `*p`, `(x)`).
    LValue,
    /// Expiring value (`std::move(x)`).
    XValue,
    /// Pure value (literals, `&x`, enumerators).
    PRValue,
}

impl ValueCategory {
    #[inline]
    pub const fn is_lvalue(self) -> bool {
        matches!(self, Self::LValue)
    }

    /// glvalue = lvalue or xvalue.
    #[inline]
    pub const fn is_glvalue(self) -> bool {
        matches!(self, Self::LValue | Self::XValue)
    }

    /// Reference category `decltype` attaches to an expression of this category.
    #[inline]
    pub const fn decltype_ref(self) -> RefKind {
        match self {
            Self::LValue => RefKind::LValue,
            Self::XValue => RefKind::RValue,
            Self::PRValue => RefKind::None,
        }
    }

    /// Get a human-readable name for this category.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LValue => "lvalue",
            Self::XValue => "xvalue",
            Self::PRValue => "prvalue",
        }
    }
}

impl std::fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

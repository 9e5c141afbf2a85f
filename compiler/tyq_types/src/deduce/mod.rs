//! `decltype` and `auto` deduction.
//!
//! A [`Scope`] holds named entities (variables, functions, enumerators).
//! [`Scope::decltype`] implements the two `decltype` rules:
//!
//! - an unparenthesized identifier yields the entity's *declared* type,
//!   top-level const and reference-ness included;
//! - any other expression, a parenthesized identifier included, yields
//!   `T&` for lvalues, `T&&` for xvalues and `T` for prvalues.
//!
//! [`Scope::declare_auto`] implements placeholder deduction for
//! `auto`, `const auto`, `auto&`, `const auto&` and `auto&&`.

use rustc_hash::FxHashMap;

use crate::{DeduceError, Idx, Pool, Qualifiers, RefKind, Tag, ValueCategory};

/// An expression whose type can be deduced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    /// Identifier naming a variable, function or enumerator.
    Id(String),
    /// `(e)`.
    Paren(Box<Expr>),
    /// Literal or other prvalue of the given type (`10`, `2.0f`, `nullptr`).
    Literal(Idx),
    /// `*e`.
    Deref(Box<Expr>),
    /// `&e`.
    AddressOf(Box<Expr>),
    /// `std::move(e)`.
    Move(Box<Expr>),
    /// `&C::member`.
    MemberAddress { class: Idx, member: String },
}

impl Expr {
    pub fn id(name: impl Into<String>) -> Self {
        Self::Id(name.into())
    }

    pub fn paren(inner: Self) -> Self {
        Self::Paren(Box::new(inner))
    }

    pub fn deref(inner: Self) -> Self {
        Self::Deref(Box::new(inner))
    }

    pub fn address_of(inner: Self) -> Self {
        Self::AddressOf(Box::new(inner))
    }

    pub fn moved(inner: Self) -> Self {
        Self::Move(Box::new(inner))
    }

    pub fn member_address(class: Idx, member: impl Into<String>) -> Self {
        Self::MemberAddress {
            class,
            member: member.into(),
        }
    }
}

/// A named entity in a [`Scope`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Binding {
    /// Variable with its declared type (possibly a reference).
    Variable(Idx),
    /// Function with its function type.
    Function(Idx),
    /// Enumerator of the given enumeration type.
    Enumerator(Idx),
}

/// The declarator around an `auto` placeholder.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct AutoDecl {
    pub quals: Qualifiers,
    pub ref_kind: RefKind,
}

impl AutoDecl {
    /// `auto`.
    pub const VALUE: Self = Self {
        quals: Qualifiers::empty(),
        ref_kind: RefKind::None,
    };
    /// `const auto`.
    pub const CONST: Self = Self {
        quals: Qualifiers::CONST,
        ref_kind: RefKind::None,
    };
    /// `auto&`.
    pub const REF: Self = Self {
        quals: Qualifiers::empty(),
        ref_kind: RefKind::LValue,
    };
    /// `const auto&`.
    pub const CONST_REF: Self = Self {
        quals: Qualifiers::CONST,
        ref_kind: RefKind::LValue,
    };
    /// `auto&&` (forwarding reference).
    pub const FORWARDING: Self = Self {
        quals: Qualifiers::empty(),
        ref_kind: RefKind::RValue,
    };
}

/// Named entities visible to deduction.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Binding>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: &str) -> Option<Binding> {
        self.bindings.get(name).copied()
    }

    /// Declare a variable with an explicit type. Shadows earlier bindings.
    pub fn declare(&mut self, name: impl Into<String>, ty: Idx) {
        self.bindings.insert(name.into(), Binding::Variable(ty));
    }

    pub fn declare_function(&mut self, name: impl Into<String>, ty: Idx) {
        self.bindings.insert(name.into(), Binding::Function(ty));
    }

    /// Bring the enumerators of an unscoped enumeration into scope.
    ///
    /// Scoped enumerations (`enum class`) do not inject their enumerators.
    pub fn declare_enumerators(&mut self, pool: &Pool, enum_ty: Idx) {
        if let Some(crate::Record::Enum(decl)) = pool.record(enum_ty) {
            if decl.is_scoped() {
                return;
            }
            for name in &decl.enumerators {
                self.bindings
                    .insert(name.clone(), Binding::Enumerator(enum_ty));
            }
        }
    }

    /// Declare `name` with a placeholder type deduced from `init`.
    ///
    /// Returns the deduced declared type.
    #[tracing::instrument(level = "trace", skip(self, pool, init))]
    pub fn declare_auto(
        &mut self,
        pool: &mut Pool,
        name: &str,
        decl: AutoDecl,
        init: &Expr,
    ) -> Result<Idx, DeduceError> {
        let (ty, category) = self.expr_type(pool, init)?;
        let declared = match decl.ref_kind {
            RefKind::None => {
                let decayed = pool.decay(ty);
                pool.qualified(decayed, decl.quals)
            }
            RefKind::LValue => {
                let target = pool.qualified(ty, decl.quals);
                let binds_rvalue = pool.qualifiers(target) == Qualifiers::CONST;
                if !category.is_lvalue() && !binds_rvalue {
                    return Err(DeduceError::LValueRefToRValue {
                        ty: pool.format_type(target),
                    });
                }
                pool.lvalue_ref(target)
            }
            RefKind::RValue if decl.quals.is_empty() => {
                // Forwarding reference: lvalues deduce `T&`.
                if category.is_lvalue() {
                    pool.lvalue_ref(ty)
                } else {
                    pool.rvalue_ref(ty)
                }
            }
            RefKind::RValue => {
                let target = pool.qualified(ty, decl.quals);
                if category.is_lvalue() {
                    return Err(DeduceError::RValueRefToLValue {
                        ty: pool.format_type(target),
                    });
                }
                pool.rvalue_ref(target)
            }
        };
        tracing::trace!(name, ty = %pool.format_type(declared), "auto deduced");
        self.declare(name, declared);
        Ok(declared)
    }

    /// `decltype(expr)`.
    #[tracing::instrument(level = "trace", skip(self, pool))]
    pub fn decltype(&self, pool: &mut Pool, expr: &Expr) -> Result<Idx, DeduceError> {
        if let Expr::Id(name) = expr {
            return match self.binding(name)? {
                Binding::Variable(ty) | Binding::Function(ty) | Binding::Enumerator(ty) => Ok(ty),
            };
        }
        let (ty, category) = self.expr_type(pool, expr)?;
        Ok(pool.reference(ty, category.decltype_ref()))
    }

    /// Type and value category of an expression.
    ///
    /// The returned type is never a reference. Prvalues of non-class,
    /// non-array type are cv-unqualified.
    pub fn expr_type(
        &self,
        pool: &mut Pool,
        expr: &Expr,
    ) -> Result<(Idx, ValueCategory), DeduceError> {
        let (ty, category) = match expr {
            Expr::Id(name) => match self.binding(name)? {
                Binding::Variable(ty) => (pool.remove_reference(ty), ValueCategory::LValue),
                Binding::Function(ty) => (ty, ValueCategory::LValue),
                Binding::Enumerator(ty) => (ty, ValueCategory::PRValue),
            },
            Expr::Paren(inner) => self.expr_type(pool, inner)?,
            Expr::Literal(ty) => (pool.remove_reference(*ty), ValueCategory::PRValue),
            Expr::Deref(inner) => {
                let (ty, _) = self.expr_type(pool, inner)?;
                // Arrays and functions convert to pointers first.
                let operand = pool.decay(ty);
                let Some(pointee) = pool.pointee(operand) else {
                    return Err(DeduceError::NotAPointer {
                        ty: pool.format_type(ty),
                    });
                };
                (pointee, ValueCategory::LValue)
            }
            Expr::AddressOf(inner) => {
                let (ty, category) = self.expr_type(pool, inner)?;
                if !category.is_lvalue() {
                    return Err(DeduceError::AddressOfRValue {
                        ty: pool.format_type(ty),
                    });
                }
                (pool.pointer(ty), ValueCategory::PRValue)
            }
            Expr::Move(inner) => {
                let (ty, _) = self.expr_type(pool, inner)?;
                // An rvalue reference to a function is still an lvalue.
                if pool.is_function(ty) {
                    (ty, ValueCategory::LValue)
                } else {
                    (ty, ValueCategory::XValue)
                }
            }
            Expr::MemberAddress { class, member } => {
                (pool.member_address(*class, member)?, ValueCategory::PRValue)
            }
        };

        if category == ValueCategory::PRValue
            && !matches!(
                pool.base_tag(ty),
                Tag::Class | Tag::Union | Tag::Array | Tag::UnboundedArray
            )
        {
            return Ok((pool.remove_cv(ty), category));
        }
        Ok((ty, category))
    }

    fn binding(&self, name: &str) -> Result<Binding, DeduceError> {
        self.lookup(name)
            .ok_or_else(|| DeduceError::UnknownName(name.to_owned()))
    }
}

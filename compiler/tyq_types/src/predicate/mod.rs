//! Type classification predicates.
//!
//! Every predicate is a pure, total function of a descriptor. The
//! *primary* predicates partition all types: each descriptor satisfies
//! exactly one of them. *Composite* predicates are unions of primaries,
//! and *property* predicates inspect qualifiers or declarations.
//!
//! [`Predicate`] is the catalog: one variant per predicate, addressable by
//! its `is_*` name.

use std::fmt;
use std::str::FromStr;

use crate::{Idx, Pool, Tag};

/// How a predicate is defined.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PredicateKind {
    /// One of the mutually exclusive primary type categories.
    Primary,
    /// A union of primary categories.
    Composite,
    /// A property of qualifiers or of a declaration.
    Property,
}

/// The predicate catalog.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Predicate {
    // === Primary ===
    IsVoid,
    IsNullPointer,
    IsIntegral,
    IsFloatingPoint,
    IsArray,
    IsEnum,
    IsUnion,
    IsClass,
    IsFunction,
    IsPointer,
    IsLvalueReference,
    IsRvalueReference,
    IsMemberObjectPointer,
    IsMemberFunctionPointer,

    // === Composite ===
    IsFundamental,
    IsArithmetic,
    IsScalar,
    IsObject,
    IsCompound,
    IsReference,
    IsMemberPointer,

    // === Properties ===
    IsConst,
    IsVolatile,
    IsSigned,
    IsUnsigned,
    IsEmpty,
    IsPolymorphic,
    IsAbstract,
}

impl Predicate {
    /// The primary type categories.
    pub const PRIMARY: [Self; 14] = [
        Self::IsVoid,
        Self::IsNullPointer,
        Self::IsIntegral,
        Self::IsFloatingPoint,
        Self::IsArray,
        Self::IsEnum,
        Self::IsUnion,
        Self::IsClass,
        Self::IsFunction,
        Self::IsPointer,
        Self::IsLvalueReference,
        Self::IsRvalueReference,
        Self::IsMemberObjectPointer,
        Self::IsMemberFunctionPointer,
    ];

    /// Every predicate in the catalog.
    pub const ALL: [Self; 28] = [
        Self::IsVoid,
        Self::IsNullPointer,
        Self::IsIntegral,
        Self::IsFloatingPoint,
        Self::IsArray,
        Self::IsEnum,
        Self::IsUnion,
        Self::IsClass,
        Self::IsFunction,
        Self::IsPointer,
        Self::IsLvalueReference,
        Self::IsRvalueReference,
        Self::IsMemberObjectPointer,
        Self::IsMemberFunctionPointer,
        Self::IsFundamental,
        Self::IsArithmetic,
        Self::IsScalar,
        Self::IsObject,
        Self::IsCompound,
        Self::IsReference,
        Self::IsMemberPointer,
        Self::IsConst,
        Self::IsVolatile,
        Self::IsSigned,
        Self::IsUnsigned,
        Self::IsEmpty,
        Self::IsPolymorphic,
        Self::IsAbstract,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::IsVoid => "is_void",
            Self::IsNullPointer => "is_null_pointer",
            Self::IsIntegral => "is_integral",
            Self::IsFloatingPoint => "is_floating_point",
            Self::IsArray => "is_array",
            Self::IsEnum => "is_enum",
            Self::IsUnion => "is_union",
            Self::IsClass => "is_class",
            Self::IsFunction => "is_function",
            Self::IsPointer => "is_pointer",
            Self::IsLvalueReference => "is_lvalue_reference",
            Self::IsRvalueReference => "is_rvalue_reference",
            Self::IsMemberObjectPointer => "is_member_object_pointer",
            Self::IsMemberFunctionPointer => "is_member_function_pointer",
            Self::IsFundamental => "is_fundamental",
            Self::IsArithmetic => "is_arithmetic",
            Self::IsScalar => "is_scalar",
            Self::IsObject => "is_object",
            Self::IsCompound => "is_compound",
            Self::IsReference => "is_reference",
            Self::IsMemberPointer => "is_member_pointer",
            Self::IsConst => "is_const",
            Self::IsVolatile => "is_volatile",
            Self::IsSigned => "is_signed",
            Self::IsUnsigned => "is_unsigned",
            Self::IsEmpty => "is_empty",
            Self::IsPolymorphic => "is_polymorphic",
            Self::IsAbstract => "is_abstract",
        }
    }

    pub const fn kind(self) -> PredicateKind {
        match self {
            Self::IsVoid
            | Self::IsNullPointer
            | Self::IsIntegral
            | Self::IsFloatingPoint
            | Self::IsArray
            | Self::IsEnum
            | Self::IsUnion
            | Self::IsClass
            | Self::IsFunction
            | Self::IsPointer
            | Self::IsLvalueReference
            | Self::IsRvalueReference
            | Self::IsMemberObjectPointer
            | Self::IsMemberFunctionPointer => PredicateKind::Primary,
            Self::IsFundamental
            | Self::IsArithmetic
            | Self::IsScalar
            | Self::IsObject
            | Self::IsCompound
            | Self::IsReference
            | Self::IsMemberPointer => PredicateKind::Composite,
            Self::IsConst
            | Self::IsVolatile
            | Self::IsSigned
            | Self::IsUnsigned
            | Self::IsEmpty
            | Self::IsPolymorphic
            | Self::IsAbstract => PredicateKind::Property,
        }
    }

    /// Look a predicate up by its `is_*` name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Evaluate the predicate on `ty`.
    pub fn eval(self, pool: &Pool, ty: Idx) -> bool {
        match self {
            Self::IsVoid => pool.is_void(ty),
            Self::IsNullPointer => pool.is_null_pointer(ty),
            Self::IsIntegral => pool.is_integral(ty),
            Self::IsFloatingPoint => pool.is_floating_point(ty),
            Self::IsArray => pool.is_array(ty),
            Self::IsEnum => pool.is_enum(ty),
            Self::IsUnion => pool.is_union(ty),
            Self::IsClass => pool.is_class(ty),
            Self::IsFunction => pool.is_function(ty),
            Self::IsPointer => pool.is_pointer(ty),
            Self::IsLvalueReference => pool.is_lvalue_reference(ty),
            Self::IsRvalueReference => pool.is_rvalue_reference(ty),
            Self::IsMemberObjectPointer => pool.is_member_object_pointer(ty),
            Self::IsMemberFunctionPointer => pool.is_member_function_pointer(ty),
            Self::IsFundamental => pool.is_fundamental(ty),
            Self::IsArithmetic => pool.is_arithmetic(ty),
            Self::IsScalar => pool.is_scalar(ty),
            Self::IsObject => pool.is_object(ty),
            Self::IsCompound => pool.is_compound(ty),
            Self::IsReference => pool.is_reference(ty),
            Self::IsMemberPointer => pool.is_member_pointer(ty),
            Self::IsConst => pool.is_const(ty),
            Self::IsVolatile => pool.is_volatile(ty),
            Self::IsSigned => pool.is_signed(ty),
            Self::IsUnsigned => pool.is_unsigned(ty),
            Self::IsEmpty => pool.is_empty_class(ty),
            Self::IsPolymorphic => pool.is_polymorphic(ty),
            Self::IsAbstract => pool.is_abstract(ty),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A name that is not in the predicate catalog.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown predicate `{0}`")]
pub struct UnknownPredicate(pub String);

impl FromStr for Predicate {
    type Err = UnknownPredicate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownPredicate(s.to_owned()))
    }
}

impl Pool {
    // === Primary categories ===

    pub fn is_void(&self, ty: Idx) -> bool {
        self.base_tag(ty) == Tag::Void
    }

    pub fn is_null_pointer(&self, ty: Idx) -> bool {
        self.base_tag(ty) == Tag::NullPtr
    }

    pub fn is_integral(&self, ty: Idx) -> bool {
        self.base_tag(ty).is_integral()
    }

    pub fn is_floating_point(&self, ty: Idx) -> bool {
        self.base_tag(ty).is_floating_point()
    }

    pub fn is_array(&self, ty: Idx) -> bool {
        matches!(self.tag(ty), Tag::Array | Tag::UnboundedArray)
    }

    pub fn is_enum(&self, ty: Idx) -> bool {
        self.base_tag(ty) == Tag::Enum
    }

    pub fn is_union(&self, ty: Idx) -> bool {
        self.base_tag(ty) == Tag::Union
    }

    /// Class or struct; unions and enums are not classes here.
    pub fn is_class(&self, ty: Idx) -> bool {
        self.base_tag(ty) == Tag::Class
    }

    pub fn is_function(&self, ty: Idx) -> bool {
        self.tag(ty) == Tag::Function
    }

    /// Object pointers and function pointers; not `nullptr_t`, not member pointers.
    pub fn is_pointer(&self, ty: Idx) -> bool {
        self.base_tag(ty) == Tag::Pointer
    }

    pub fn is_lvalue_reference(&self, ty: Idx) -> bool {
        self.tag(ty) == Tag::LValueRef
    }

    pub fn is_rvalue_reference(&self, ty: Idx) -> bool {
        self.tag(ty) == Tag::RValueRef
    }

    pub fn is_member_object_pointer(&self, ty: Idx) -> bool {
        self.member_pointer_parts(ty)
            .is_some_and(|(_, pointee)| !self.is_function(pointee))
    }

    pub fn is_member_function_pointer(&self, ty: Idx) -> bool {
        self.member_pointer_parts(ty)
            .is_some_and(|(_, pointee)| self.is_function(pointee))
    }

    // === Composites ===

    /// integral ∪ floating point.
    pub fn is_arithmetic(&self, ty: Idx) -> bool {
        self.is_integral(ty) || self.is_floating_point(ty)
    }

    /// arithmetic ∪ void ∪ `nullptr_t`.
    pub fn is_fundamental(&self, ty: Idx) -> bool {
        self.is_arithmetic(ty) || self.is_void(ty) || self.is_null_pointer(ty)
    }

    /// Everything that is not fundamental.
    pub fn is_compound(&self, ty: Idx) -> bool {
        !self.is_fundamental(ty)
    }

    pub fn is_reference(&self, ty: Idx) -> bool {
        self.is_lvalue_reference(ty) || self.is_rvalue_reference(ty)
    }

    pub fn is_member_pointer(&self, ty: Idx) -> bool {
        self.is_member_object_pointer(ty) || self.is_member_function_pointer(ty)
    }

    /// arithmetic ∪ enum ∪ pointer ∪ member pointer ∪ `nullptr_t`.
    pub fn is_scalar(&self, ty: Idx) -> bool {
        self.is_arithmetic(ty)
            || self.is_enum(ty)
            || self.is_pointer(ty)
            || self.is_member_pointer(ty)
            || self.is_null_pointer(ty)
    }

    /// Anything but functions, references and void.
    pub fn is_object(&self, ty: Idx) -> bool {
        !(self.is_function(ty) || self.is_reference(ty) || self.is_void(ty))
    }

    // === Properties ===

    /// Top-level `const` only: `const T*` and `const T&` are not const.
    pub fn is_const(&self, ty: Idx) -> bool {
        self.qualifiers(ty).is_const()
    }

    pub fn is_volatile(&self, ty: Idx) -> bool {
        self.qualifiers(ty).is_volatile()
    }

    /// Arithmetic and able to represent negative values.
    ///
    /// Plain `char` and `wchar_t` are signed (the common x86-64 ABI choice).
    pub fn is_signed(&self, ty: Idx) -> bool {
        matches!(
            self.base_tag(ty),
            Tag::Char
                | Tag::SignedChar
                | Tag::WChar
                | Tag::Short
                | Tag::Int
                | Tag::Long
                | Tag::LongLong
                | Tag::Float
                | Tag::Double
                | Tag::LongDouble
        )
    }

    /// Integral and not signed; `bool` counts as unsigned.
    pub fn is_unsigned(&self, ty: Idx) -> bool {
        self.is_integral(ty) && !self.is_signed(ty)
    }

    /// A class (not a union) with no data, nothing virtual and empty bases.
    pub fn is_empty_class(&self, ty: Idx) -> bool {
        self.is_class(ty) && self.class_is_empty(ty)
    }

    pub fn is_polymorphic(&self, ty: Idx) -> bool {
        self.is_class(ty) && self.class_is_polymorphic(ty)
    }

    pub fn is_abstract(&self, ty: Idx) -> bool {
        self.is_class(ty) && self.class_is_abstract(ty)
    }

    /// The primary predicate `ty` satisfies; every well-formed descriptor has one.
    pub fn primary_category(&self, ty: Idx) -> Option<Predicate> {
        Predicate::PRIMARY.into_iter().find(|p| p.eval(self, ty))
    }
}

#[cfg(test)]
mod tests;

//! Type kind tag for tag-driven dispatch.
//!
//! Each type in the pool has a `Tag` that identifies its kind.
//! The tag determines how to interpret the associated `data` field.
//!
//! # Tag Categories
//!
//! Tags are organized into semantic ranges:
//! - 0-31: Fundamental types (data unused)
//! - 32-47: Single-child types (data = child Idx)
//! - 48-63: Multi-word types (data = extra index)
//! - 64-79: Nominal types (data = record id)

use std::fmt;

/// Type kind discriminant.
///
/// Determines how to interpret the `data` field in an `Item`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tag {
    // === Fundamental (0-31) ===
    // data: unused (0)
    /// `void`.
    Void = 0,
    /// `bool`.
    Bool = 1,
    /// Plain `char` (distinct from both signed and unsigned char).
    Char = 2,
    /// `signed char`.
    SignedChar = 3,
    /// `unsigned char`.
    UnsignedChar = 4,
    /// `wchar_t`.
    WChar = 5,
    /// `char16_t`.
    Char16 = 6,
    /// `char32_t`.
    Char32 = 7,
    /// `short`.
    Short = 8,
    /// `unsigned short`.
    UnsignedShort = 9,
    /// `int`.
    Int = 10,
    /// `unsigned int`.
    UnsignedInt = 11,
    /// `long`.
    Long = 12,
    /// `unsigned long`.
    UnsignedLong = 13,
    /// `long long`.
    LongLong = 14,
    /// `unsigned long long`.
    UnsignedLongLong = 15,
    /// `float`.
    Float = 16,
    /// `double`.
    Double = 17,
    /// `long double`.
    LongDouble = 18,
    /// `std::nullptr_t`, the type of `nullptr`.
    NullPtr = 19,

    // Reserved: 20-31 for future fundamental types

    // === Single-child (32-47) ===
    // data: child Idx.raw()
    /// Pointer `T*`.
    Pointer = 32,
    /// Lvalue reference `T&`.
    LValueRef = 33,
    /// Rvalue reference `T&&`.
    RValueRef = 34,
    /// Array of unknown bound `T[]`.
    UnboundedArray = 35,

    // === Multi-word (48-63) ===
    // data: index into extra[]
    /// cv-qualified type. Extra layout: `[inner, qualifier_bits]`.
    Qualified = 48,
    /// Array of known bound `T[N]`. Extra layout: `[elem, len]`.
    Array = 49,
    /// Function type. Extra layout: `[fn_qualifier_bits, ret, count, params...]`.
    Function = 50,
    /// Pointer to member `T C::*`. Extra layout: `[class, pointee]`.
    MemberPointer = 51,

    // === Nominal (64-79) ===
    // data: record id
    /// Class type declared with `class` or `struct`.
    Class = 64,
    /// Union type.
    Union = 65,
    /// Enumeration, scoped or unscoped.
    Enum = 66,
}

impl Tag {
    /// Check if this tag uses the extra array for data.
    #[inline]
    pub const fn uses_extra(self) -> bool {
        matches!(
            self,
            Self::Qualified | Self::Array | Self::Function | Self::MemberPointer
        )
    }

    /// Check if this tag is a fundamental type (void, arithmetic or `nullptr_t`).
    #[inline]
    pub const fn is_fundamental(self) -> bool {
        (self as u8) < 32
    }

    /// Check if this tag names an integral type.
    #[inline]
    pub const fn is_integral(self) -> bool {
        let v = self as u8;
        v >= Self::Bool as u8 && v <= Self::UnsignedLongLong as u8
    }

    /// Check if this tag names a floating-point type.
    #[inline]
    pub const fn is_floating_point(self) -> bool {
        matches!(self, Self::Float | Self::Double | Self::LongDouble)
    }

    /// Check if this tag names a declared (nominal) type.
    #[inline]
    pub const fn is_nominal(self) -> bool {
        matches!(self, Self::Class | Self::Union | Self::Enum)
    }

    /// Get the name of this tag as a static string.
    ///
    /// For fundamental tags this is the source spelling of the type.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::SignedChar => "signed char",
            Self::UnsignedChar => "unsigned char",
            Self::WChar => "wchar_t",
            Self::Char16 => "char16_t",
            Self::Char32 => "char32_t",
            Self::Short => "short",
            Self::UnsignedShort => "unsigned short",
            Self::Int => "int",
            Self::UnsignedInt => "unsigned int",
            Self::Long => "long",
            Self::UnsignedLong => "unsigned long",
            Self::LongLong => "long long",
            Self::UnsignedLongLong => "unsigned long long",
            Self::Float => "float",
            Self::Double => "double",
            Self::LongDouble => "long double",
            Self::NullPtr => "std::nullptr_t",
            Self::Pointer => "pointer",
            Self::LValueRef => "lvalue_ref",
            Self::RValueRef => "rvalue_ref",
            Self::UnboundedArray => "unbounded_array",
            Self::Qualified => "qualified",
            Self::Array => "array",
            Self::Function => "function",
            Self::MemberPointer => "member_pointer",
            Self::Class => "class",
            Self::Union => "union",
            Self::Enum => "enum",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Compile-time size assertion: Tag must be exactly 1 byte
const _: () = assert!(std::mem::size_of::<Tag>() == 1);

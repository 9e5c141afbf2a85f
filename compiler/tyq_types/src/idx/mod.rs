//! Type descriptor handle.
//!
//! `Idx` is the canonical type descriptor.
//! All types live in a `Pool` and are referenced by their 32-bit index.
//!
//! # Design
//!
//! - Fundamental types have fixed indices (0-19) equal to their `Tag` value
//! - Structural types are hash-consed, so type equality is index equality
//! - Copy, lightweight passing

use std::fmt;

use crate::Tag;

/// A 32-bit index into the type pool.
///
/// Two descriptors from the same pool denote the same type exactly when
/// their indices are equal (qualifiers and reference category included).
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Fundamental Types (indices 0-19) ===
    // Pre-interned at pool creation, index == Tag discriminant.

    /// `void`.
    pub const VOID: Self = Self(Tag::Void as u32);
    /// `bool`.
    pub const BOOL: Self = Self(Tag::Bool as u32);
    /// `char`.
    pub const CHAR: Self = Self(Tag::Char as u32);
    /// `signed char`.
    pub const SCHAR: Self = Self(Tag::SignedChar as u32);
    /// `unsigned char`.
    pub const UCHAR: Self = Self(Tag::UnsignedChar as u32);
    /// `wchar_t`.
    pub const WCHAR: Self = Self(Tag::WChar as u32);
    /// `char16_t`.
    pub const CHAR16: Self = Self(Tag::Char16 as u32);
    /// `char32_t`.
    pub const CHAR32: Self = Self(Tag::Char32 as u32);
    /// `short`.
    pub const SHORT: Self = Self(Tag::Short as u32);
    /// `unsigned short`.
    pub const USHORT: Self = Self(Tag::UnsignedShort as u32);
    /// `int`.
    pub const INT: Self = Self(Tag::Int as u32);
    /// `unsigned int`.
    pub const UINT: Self = Self(Tag::UnsignedInt as u32);
    /// `long`.
    pub const LONG: Self = Self(Tag::Long as u32);
    /// `unsigned long`.
    pub const ULONG: Self = Self(Tag::UnsignedLong as u32);
    /// `long long`.
    pub const LONG_LONG: Self = Self(Tag::LongLong as u32);
    /// `unsigned long long`.
    pub const ULONG_LONG: Self = Self(Tag::UnsignedLongLong as u32);
    /// `float`.
    pub const FLOAT: Self = Self(Tag::Float as u32);
    /// `double`.
    pub const DOUBLE: Self = Self(Tag::Double as u32);
    /// `long double`.
    pub const LONG_DOUBLE: Self = Self(Tag::LongDouble as u32);
    /// `std::nullptr_t`.
    pub const NULLPTR: Self = Self(Tag::NullPtr as u32);

    /// Number of pre-interned fundamental types.
    pub const FUNDAMENTAL_COUNT: u32 = 20;

    /// First index for dynamically allocated types.
    pub const FIRST_DYNAMIC: u32 = Self::FUNDAMENTAL_COUNT;

    /// Sentinel value indicating no type / invalid index.
    ///
    /// Never stored in a pool. `Pool` queries panic on it, except
    /// `Pool::format_type`, which renders it as `<none>`.
    pub const NONE: Self = Self(u32::MAX);

    /// Every fundamental type, in index order.
    pub const FUNDAMENTALS: [Self; 20] = [
        Self::VOID,
        Self::BOOL,
        Self::CHAR,
        Self::SCHAR,
        Self::UCHAR,
        Self::WCHAR,
        Self::CHAR16,
        Self::CHAR32,
        Self::SHORT,
        Self::USHORT,
        Self::INT,
        Self::UINT,
        Self::LONG,
        Self::ULONG,
        Self::LONG_LONG,
        Self::ULONG_LONG,
        Self::FLOAT,
        Self::DOUBLE,
        Self::LONG_DOUBLE,
        Self::NULLPTR,
    ];

    /// Create an index from a raw u32 value.
    ///
    /// The caller must ensure the index is valid in the pool it is used with.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a fundamental type (pre-interned).
    #[inline]
    pub const fn is_fundamental(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the source spelling for fundamental types.
    ///
    /// Returns `None` for dynamic types, which need a `Pool` to render.
    #[inline]
    pub fn name(self) -> Option<&'static str> {
        Self::FUNDAMENTALS
            .iter()
            .position(|&f| f == self)
            .map(|i| FUNDAMENTAL_TAGS[i].name())
    }
}

/// Fundamental tags in index order (index == discriminant).
pub(crate) const FUNDAMENTAL_TAGS: [Tag; 20] = [
    Tag::Void,
    Tag::Bool,
    Tag::Char,
    Tag::SignedChar,
    Tag::UnsignedChar,
    Tag::WChar,
    Tag::Char16,
    Tag::Char32,
    Tag::Short,
    Tag::UnsignedShort,
    Tag::Int,
    Tag::UnsignedInt,
    Tag::Long,
    Tag::UnsignedLong,
    Tag::LongLong,
    Tag::UnsignedLongLong,
    Tag::Float,
    Tag::Double,
    Tag::LongDouble,
    Tag::NullPtr,
];

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Idx({name})"),
            None if self.is_none() => write!(f, "Idx::NONE"),
            None => write!(f, "Idx({})", self.0),
        }
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None if self.is_none() => f.write_str("<none>"),
            None => write!(f, "type#{}", self.0),
        }
    }
}

// Compile-time size assertion: Idx must be exactly 4 bytes
const _: () = assert!(std::mem::size_of::<Idx>() == 4);

#[cfg(test)]
mod tests;

//! Type construction helpers for the Pool.
//!
//! Every constructor returns the canonical descriptor for the type it
//! builds, applying the language's adjustment rules on the way in:
//! qualifiers merge instead of nesting, cv on references and functions is
//! dropped, cv on arrays moves to the element, references collapse, and
//! function parameters are adjusted (arrays and functions decay, top-level
//! cv is removed).

use smallvec::SmallVec;

use super::Pool;
use crate::{FnQualifiers, Idx, Qualifiers, RefKind, Tag};

/// Decoded signature of a function type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FnSig {
    /// Adjusted parameter types.
    pub params: SmallVec<[Idx; 4]>,
    /// Return type.
    pub ret: Idx,
    /// cv / ref / variadic tail.
    pub quals: FnQualifiers,
}

impl Pool {
    // === Qualification ===

    /// Apply cv-qualifiers to a type.
    pub fn qualified(&mut self, ty: Idx, quals: Qualifiers) -> Idx {
        if quals.is_empty() {
            return ty;
        }
        match self.tag(ty) {
            Tag::Qualified => {
                let (base, existing) = self.split_qualified(ty);
                self.qualified(base, existing | quals)
            }
            Tag::LValueRef | Tag::RValueRef | Tag::Function => ty,
            Tag::Array | Tag::UnboundedArray => {
                let Some(elem) = self.array_elem(ty) else {
                    return ty;
                };
                let elem = self.qualified(elem, quals);
                match self.array_len(ty) {
                    Some(len) => self.array(elem, len),
                    None => self.unbounded_array(elem),
                }
            }
            _ => self.intern_complex(Tag::Qualified, &[ty.raw(), quals.bits()]),
        }
    }

    /// `const T`.
    pub fn const_of(&mut self, ty: Idx) -> Idx {
        self.qualified(ty, Qualifiers::CONST)
    }

    /// `volatile T`.
    pub fn volatile_of(&mut self, ty: Idx) -> Idx {
        self.qualified(ty, Qualifiers::VOLATILE)
    }

    // === Indirection ===

    /// Pointer `T*`. A pointer to a reference points at the referred type.
    pub fn pointer(&mut self, ty: Idx) -> Idx {
        match self.referent(ty) {
            Some(inner) => self.pointer(inner),
            None => self.intern(Tag::Pointer, ty),
        }
    }

    /// Lvalue reference `T&`, collapsing references to references.
    pub fn lvalue_ref(&mut self, ty: Idx) -> Idx {
        match self.referent(ty) {
            Some(inner) => self.intern(Tag::LValueRef, inner),
            None => self.intern(Tag::LValueRef, ty),
        }
    }

    /// Rvalue reference `T&&`, collapsing references to references.
    pub fn rvalue_ref(&mut self, ty: Idx) -> Idx {
        if self.referent(ty).is_some() {
            // `T& &&` is `T&`, `T&& &&` is `T&&`
            return ty;
        }
        self.intern(Tag::RValueRef, ty)
    }

    /// Reference of the given category; `RefKind::None` returns `ty` unchanged.
    pub fn reference(&mut self, ty: Idx, kind: RefKind) -> Idx {
        match kind {
            RefKind::None => ty,
            RefKind::LValue => self.lvalue_ref(ty),
            RefKind::RValue => self.rvalue_ref(ty),
        }
    }

    /// Pointer to member `T C::*`.
    ///
    /// A function `pointee` makes a member-function pointer; anything else
    /// makes a member-object pointer.
    pub fn member_pointer(&mut self, class: Idx, pointee: Idx) -> Idx {
        self.intern_complex(Tag::MemberPointer, &[class.raw(), pointee.raw()])
    }

    // === Arrays ===

    /// Array of known bound `T[len]`.
    pub fn array(&mut self, elem: Idx, len: u32) -> Idx {
        self.intern_complex(Tag::Array, &[elem.raw(), len])
    }

    /// Array of unknown bound `T[]`.
    pub fn unbounded_array(&mut self, elem: Idx) -> Idx {
        self.intern(Tag::UnboundedArray, elem)
    }

    // === Functions ===

    /// Function type `ret(params...)`.
    pub fn function(&mut self, params: &[Idx], ret: Idx) -> Idx {
        self.function_with(params, ret, FnQualifiers::empty())
    }

    /// Function type with a qualifier tail, e.g. `void() const` or
    /// `int(const char*, ...)`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "param count fits u32: pool layout uses u32 words"
    )]
    pub fn function_with(&mut self, params: &[Idx], ret: Idx, quals: FnQualifiers) -> Idx {
        // Layout: [qualifier_bits, ret, count, params...]
        let mut words = Vec::with_capacity(params.len() + 3);
        words.push(quals.bits());
        words.push(ret.raw());
        words.push(params.len() as u32);
        for &param in params {
            let adjusted = self.adjust_parameter(param);
            words.push(adjusted.raw());
        }
        self.intern_complex(Tag::Function, &words)
    }

    /// Function type built from a decoded signature.
    pub fn function_from_sig(&mut self, sig: &FnSig) -> Idx {
        self.function_with(&sig.params, sig.ret, sig.quals)
    }

    /// Parameter type adjustment: `T[N]` and `T[]` become `T*`, a function
    /// becomes a pointer to it, and top-level cv is dropped.
    fn adjust_parameter(&mut self, param: Idx) -> Idx {
        if let Some(elem) = self.array_elem(param) {
            return self.pointer(elem);
        }
        if self.tag(param) == Tag::Function {
            return self.pointer(param);
        }
        self.unqualified_base(param)
    }
}

#[cfg(test)]
mod tests;

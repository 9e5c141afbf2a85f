//! Type transformations: the `remove_*` / `decay` family.

use super::Pool;
use crate::{Idx, Qualifiers, Tag};

impl Pool {
    /// Top-level cv-qualification.
    ///
    /// An array reports the qualification of its element, since
    /// `const T[N]` is an array of `const T`.
    pub fn qualifiers(&self, ty: Idx) -> Qualifiers {
        match self.array_elem(ty) {
            Some(elem) => self.qualifiers(elem),
            None => self.split_qualified(ty).1,
        }
    }

    /// `remove_cv`: drop top-level cv (for arrays, the element's cv).
    pub fn remove_cv(&mut self, ty: Idx) -> Idx {
        if let Some(elem) = self.array_elem(ty) {
            let elem = self.remove_cv(elem);
            return match self.array_len(ty) {
                Some(len) => self.array(elem, len),
                None => self.unbounded_array(elem),
            };
        }
        self.unqualified_base(ty)
    }

    /// `remove_const`: drop a top-level `const`, keeping `volatile`.
    pub fn remove_const(&mut self, ty: Idx) -> Idx {
        let quals = self.qualifiers(ty);
        let bare = self.remove_cv(ty);
        self.qualified(bare, quals - Qualifiers::CONST)
    }

    /// `remove_reference`: `T&` and `T&&` become `T`.
    pub fn remove_reference(&self, ty: Idx) -> Idx {
        self.referent(ty).unwrap_or(ty)
    }

    /// `remove_cvref`.
    pub fn remove_cvref(&mut self, ty: Idx) -> Idx {
        let ty = self.remove_reference(ty);
        self.remove_cv(ty)
    }

    /// `decay`: the type a by-value parameter or `auto` variable gets.
    ///
    /// References are stripped, arrays become pointers to their element,
    /// functions become pointers to themselves, and top-level cv is dropped.
    pub fn decay(&mut self, ty: Idx) -> Idx {
        let ty = self.remove_reference(ty);
        if let Some(elem) = self.array_elem(ty) {
            return self.pointer(elem);
        }
        if self.tag(ty) == Tag::Function {
            return self.pointer(ty);
        }
        self.remove_cv(ty)
    }
}

#[cfg(test)]
mod tests;

//! The type pool: interned storage for every type descriptor.
//!
//! Each type is an `Item` (tag + data word). Types with more than one
//! child keep their payload in the shared `extra` array and store the
//! offset in `data`. Structural types are hash-consed on `(tag, payload)`,
//! so building the same type twice returns the same `Idx`. Nominal types
//! (classes, unions, enums) are never deduplicated: every declaration is
//! a new type.

mod construct;
mod format;
mod transform;

pub use construct::FnSig;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::idx::FUNDAMENTAL_TAGS;
use crate::record::Record;
use crate::{FnQualifiers, Idx, Qualifiers, Tag};

/// A single type item in the pool.
#[derive(Copy, Clone, Debug)]
struct Item {
    tag: Tag,
    /// Child index, extra offset, or record id depending on `tag`.
    data: u32,
}

/// Payload words used as the dedup key.
type Payload = SmallVec<[u32; 4]>;

/// Interned storage for type descriptors.
///
/// Cloning a pool is how callers get an independent scratch copy of a
/// fully declared type universe.
#[derive(Clone, Debug)]
pub struct Pool {
    items: Vec<Item>,
    extra: Vec<u32>,
    dedup: FxHashMap<(Tag, Payload), Idx>,
    records: Vec<Record>,
    /// Declared type names and aliases.
    names: FxHashMap<String, Idx>,
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl Pool {
    /// Create a pool with every fundamental type pre-interned.
    pub fn new() -> Self {
        let items = FUNDAMENTAL_TAGS
            .iter()
            .map(|&tag| Item { tag, data: 0 })
            .collect();

        Self {
            items,
            extra: Vec::with_capacity(256),
            dedup: FxHashMap::default(),
            records: Vec::new(),
            names: FxHashMap::default(),
        }
    }

    /// Number of types in the pool, fundamentals included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A pool always holds the fundamental types.
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn item(&self, idx: Idx) -> Item {
        self.items[idx.raw() as usize]
    }

    /// Kind of the type.
    ///
    /// # Panics
    ///
    /// Panics if `idx` was not created by this pool (including `Idx::NONE`).
    #[inline]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.item(idx).tag
    }

    #[inline]
    fn child(&self, idx: Idx) -> Idx {
        Idx::from_raw(self.item(idx).data)
    }

    #[inline]
    fn extra_word(&self, idx: Idx, offset: usize) -> u32 {
        self.extra[self.item(idx).data as usize + offset]
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "pool size fits u32: descriptors are 32-bit indices"
    )]
    fn push(&mut self, tag: Tag, data: u32) -> Idx {
        let idx = Idx::from_raw(self.items.len() as u32);
        self.items.push(Item { tag, data });
        idx
    }

    /// Intern a single-child type (data = child index).
    pub(crate) fn intern(&mut self, tag: Tag, child: Idx) -> Idx {
        debug_assert!(!tag.uses_extra());
        let key = (tag, SmallVec::from_slice(&[child.raw()]));
        if let Some(&idx) = self.dedup.get(&key) {
            return idx;
        }
        let idx = self.push(tag, child.raw());
        self.dedup.insert(key, idx);
        idx
    }

    /// Intern a multi-word type (payload stored in `extra`).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "extra array length fits u32: pool layout uses u32 words"
    )]
    pub(crate) fn intern_complex(&mut self, tag: Tag, words: &[u32]) -> Idx {
        debug_assert!(tag.uses_extra());
        let key = (tag, SmallVec::from_slice(words));
        if let Some(&idx) = self.dedup.get(&key) {
            return idx;
        }
        let offset = self.extra.len() as u32;
        self.extra.extend_from_slice(words);
        let idx = self.push(tag, offset);
        self.dedup.insert(key, idx);
        idx
    }

    /// Register a nominal type backed by a record.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "record count fits u32: record ids are stored in a data word"
    )]
    pub(crate) fn push_record(&mut self, tag: Tag, record: Record) -> Idx {
        debug_assert!(tag.is_nominal());
        let id = self.records.len() as u32;
        self.records.push(record);
        self.push(tag, id)
    }

    // === Accessors ===

    /// The record behind a class, union or enum type (cv ignored).
    pub fn record(&self, idx: Idx) -> Option<&Record> {
        let base = self.unqualified_base(idx);
        let item = self.item(base);
        if item.tag.is_nominal() {
            self.records.get(item.data as usize)
        } else {
            None
        }
    }

    /// Look up a declared type or alias by name.
    pub fn named(&self, name: &str) -> Option<Idx> {
        self.names.get(name).copied()
    }

    pub(crate) fn names_mut(&mut self) -> &mut FxHashMap<String, Idx> {
        &mut self.names
    }

    /// Split a `Qualified` type into its unqualified base and qualifiers.
    ///
    /// Non-qualified types are returned as-is with empty qualifiers.
    #[inline]
    pub fn split_qualified(&self, idx: Idx) -> (Idx, Qualifiers) {
        if self.tag(idx) == Tag::Qualified {
            (
                Idx::from_raw(self.extra_word(idx, 0)),
                Qualifiers::from_bits_truncate(self.extra_word(idx, 1)),
            )
        } else {
            (idx, Qualifiers::empty())
        }
    }

    /// The type with its own `Qualified` wrapper removed.
    #[inline]
    pub(crate) fn unqualified_base(&self, idx: Idx) -> Idx {
        self.split_qualified(idx).0
    }

    /// Kind of the type, looking through cv-qualification.
    #[inline]
    pub fn base_tag(&self, idx: Idx) -> Tag {
        self.tag(self.unqualified_base(idx))
    }

    /// Pointee of a pointer type (cv on the pointer ignored).
    pub fn pointee(&self, idx: Idx) -> Option<Idx> {
        let base = self.unqualified_base(idx);
        (self.tag(base) == Tag::Pointer).then(|| self.child(base))
    }

    /// Referred-to type of a reference type.
    pub fn referent(&self, idx: Idx) -> Option<Idx> {
        matches!(self.tag(idx), Tag::LValueRef | Tag::RValueRef).then(|| self.child(idx))
    }

    /// Element type of an array, bounded or not.
    pub fn array_elem(&self, idx: Idx) -> Option<Idx> {
        match self.tag(idx) {
            Tag::Array => Some(Idx::from_raw(self.extra_word(idx, 0))),
            Tag::UnboundedArray => Some(self.child(idx)),
            _ => None,
        }
    }

    /// Bound of an array of known bound.
    pub fn array_len(&self, idx: Idx) -> Option<u32> {
        (self.tag(idx) == Tag::Array).then(|| self.extra_word(idx, 1))
    }

    /// Signature of a function type.
    pub fn function_sig(&self, idx: Idx) -> Option<FnSig> {
        if self.tag(idx) != Tag::Function {
            return None;
        }
        // Layout: [qualifier_bits, ret, count, params...]
        let quals = FnQualifiers::from_bits_truncate(self.extra_word(idx, 0));
        let ret = Idx::from_raw(self.extra_word(idx, 1));
        let count = self.extra_word(idx, 2) as usize;
        let params = (0..count)
            .map(|i| Idx::from_raw(self.extra_word(idx, 3 + i)))
            .collect();
        Some(FnSig { params, ret, quals })
    }

    /// Class and pointee of a member pointer type (cv on the pointer ignored).
    pub fn member_pointer_parts(&self, idx: Idx) -> Option<(Idx, Idx)> {
        let base = self.unqualified_base(idx);
        (self.tag(base) == Tag::MemberPointer).then(|| {
            (
                Idx::from_raw(self.extra_word(base, 0)),
                Idx::from_raw(self.extra_word(base, 1)),
            )
        })
    }
}

#[cfg(test)]
mod tests;

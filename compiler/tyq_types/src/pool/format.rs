//! Type formatting in C-family declarator syntax.
//!
//! A type is rendered inside-out: each layer wraps the declarator built so
//! far (`*`, `&`, `C::*`, `[N]`, `(params)`), and the innermost leaf type
//! name is written last. Pointer-like layers whose target is a function or
//! an array are parenthesized, giving `double (*)(float)` and
//! `void (C::*)() const`.

use super::Pool;
use crate::{FnQualifiers, Idx, Qualifiers, RefKind, Tag};

/// A partially built declarator.
struct Declarator {
    text: String,
    /// Starts with a grouping parenthesis rather than a parameter list.
    grouped: bool,
}

impl Declarator {
    fn empty() -> Self {
        Self {
            text: String::new(),
            grouped: false,
        }
    }

    fn prefixed(prefix: &str, inner: Declarator) -> Self {
        Self {
            text: format!("{prefix}{}", inner.text),
            grouped: false,
        }
    }

    fn group(self) -> Self {
        Self {
            text: format!("({})", self.text),
            grouped: true,
        }
    }
}

impl Pool {
    /// Format a type as a human-readable string, e.g. `const int&`.
    ///
    /// This is used for assertion messages and debugging output. Handles
    /// this pool does not own, `Idx::NONE` included, render as the bare
    /// handle instead of a spelling.
    pub fn format_type(&self, idx: Idx) -> String {
        if idx.raw() as usize >= self.len() {
            return idx.to_string();
        }
        self.spell(idx, Declarator::empty())
    }

    fn spell(&self, idx: Idx, inner: Declarator) -> String {
        let (base, quals) = self.split_qualified(idx);
        match self.tag(base) {
            Tag::Pointer => {
                let pointee = self.child(base);
                let decl = self.pointer_declarator("*", quals, inner, pointee);
                self.spell(pointee, decl)
            }
            Tag::MemberPointer => {
                let class = Idx::from_raw(self.extra_word(base, 0));
                let pointee = Idx::from_raw(self.extra_word(base, 1));
                let prefix = format!("{}::*", self.leaf_name(class));
                let decl = self.pointer_declarator(&prefix, quals, inner, pointee);
                self.spell(pointee, decl)
            }
            Tag::LValueRef | Tag::RValueRef => {
                let referent = self.child(base);
                let suffix = if self.tag(base) == Tag::LValueRef {
                    RefKind::LValue.suffix()
                } else {
                    RefKind::RValue.suffix()
                };
                let decl = self.pointer_declarator(suffix, Qualifiers::empty(), inner, referent);
                self.spell(referent, decl)
            }
            Tag::Array | Tag::UnboundedArray => {
                let Some(elem) = self.array_elem(base) else {
                    return String::from("<array>");
                };
                let bound = self.array_len(base).map_or_else(String::new, |n| n.to_string());
                let decl = Declarator {
                    text: format!("{}[{bound}]", inner.text),
                    grouped: inner.grouped,
                };
                self.spell(elem, decl)
            }
            Tag::Function => {
                let Some(sig) = self.function_sig(base) else {
                    return String::from("<function>");
                };
                let mut text = inner.text;
                text.push('(');
                for (i, &param) in sig.params.iter().enumerate() {
                    if i > 0 {
                        text.push_str(", ");
                    }
                    text.push_str(&self.format_type(param));
                }
                if sig.quals.is_variadic() {
                    text.push_str(if sig.params.is_empty() { "..." } else { ", ..." });
                }
                text.push(')');
                push_fn_qualifiers(&mut text, sig.quals);
                self.spell(
                    sig.ret,
                    Declarator {
                        text,
                        grouped: inner.grouped,
                    },
                )
            }
            _ => {
                let name = self.leaf_name(base);
                let leaf = if quals.is_empty() {
                    name
                } else {
                    format!("{} {name}", quals.spelling())
                };
                join_leaf(leaf, &inner)
            }
        }
    }

    /// Build the declarator for `*`, `&`, `&&` or `C::*` around `inner`.
    fn pointer_declarator(
        &self,
        prefix: &str,
        quals: Qualifiers,
        inner: Declarator,
        target: Idx,
    ) -> Declarator {
        let mut head = String::from(prefix);
        if !quals.is_empty() {
            head.push(' ');
            head.push_str(quals.spelling());
        }
        let decl = Declarator::prefixed(&head, inner);
        if matches!(
            self.tag(target),
            Tag::Function | Tag::Array | Tag::UnboundedArray
        ) {
            decl.group()
        } else {
            decl
        }
    }

    fn leaf_name(&self, idx: Idx) -> String {
        if let Some(name) = idx.name() {
            return name.to_owned();
        }
        match self.record(idx) {
            Some(record) => record.name().to_owned(),
            None => idx.to_string(),
        }
    }
}

fn push_fn_qualifiers(text: &mut String, quals: FnQualifiers) {
    let cv = quals.cv();
    if !cv.is_empty() {
        text.push(' ');
        text.push_str(cv.spelling());
    }
    let r = quals.ref_kind();
    if r.is_reference() {
        text.push(' ');
        text.push_str(r.suffix());
    }
}

/// Attach the declarator to a leaf type name.
fn join_leaf(mut leaf: String, inner: &Declarator) -> String {
    let needs_space = inner.grouped
        || inner
            .text
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == ':');
    if needs_space {
        leaf.push(' ');
    }
    leaf.push_str(&inner.text);
    leaf
}

#[cfg(test)]
mod tests;

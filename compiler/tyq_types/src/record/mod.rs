//! Declarations behind nominal types: classes, unions and enumerations.
//!
//! Declarations are built with small builders that mirror how the source
//! reads (`access(Access::Private)` switches the current access section the
//! way a `private:` label does), then registered with
//! [`Pool::declare_class`], [`Pool::declare_union`] or [`Pool::declare_enum`].

use std::fmt;

use crate::{Idx, LookupError, Pool, Tag};

/// Class-key used to declare a class type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClassKey {
    /// `class`: members default to private.
    Class,
    /// `struct`: members default to public.
    Struct,
}

impl ClassKey {
    pub const fn default_access(self) -> Access {
        match self {
            Self::Class => Access::Private,
            Self::Struct => Access::Public,
        }
    }
}

/// Enum-key used to declare an enumeration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EnumKey {
    /// `enum`: unscoped, enumerators leak into the enclosing scope.
    Enum,
    /// `enum class`.
    EnumClass,
    /// `enum struct`, equivalent to `enum class`.
    EnumStruct,
}

impl EnumKey {
    pub const fn is_scoped(self) -> bool {
        !matches!(self, Self::Enum)
    }
}

/// Member access.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Access {
    Public,
    Protected,
    Private,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        })
    }
}

/// Non-static data member.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: Idx,
    pub access: Access,
}

/// Non-static member function.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Method {
    pub name: String,
    /// Function type including the member's cv / ref qualifiers.
    pub ty: Idx,
    pub access: Access,
    pub is_virtual: bool,
    /// Declared `= 0`.
    pub is_pure: bool,
}

/// A `class` or `struct` declaration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    pub key: ClassKey,
    /// Public base classes.
    pub bases: Vec<Idx>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
    pub virtual_destructor: bool,
    current_access: Access,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>, key: ClassKey) -> Self {
        Self {
            name: name.into(),
            key,
            bases: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            virtual_destructor: false,
            current_access: key.default_access(),
        }
    }

    /// Add a base class.
    #[must_use]
    pub fn base(mut self, base: Idx) -> Self {
        self.bases.push(base);
        self
    }

    /// Switch the access section for members declared after this call.
    #[must_use]
    pub fn access(mut self, access: Access) -> Self {
        self.current_access = access;
        self
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: Idx) -> Self {
        self.fields.push(Field {
            name: name.into(),
            ty,
            access: self.current_access,
        });
        self
    }

    /// Non-virtual member function.
    #[must_use]
    pub fn method(self, name: impl Into<String>, ty: Idx) -> Self {
        self.push_method(name.into(), ty, false, false)
    }

    /// Virtual member function (also used for overrides).
    #[must_use]
    pub fn virtual_method(self, name: impl Into<String>, ty: Idx) -> Self {
        self.push_method(name.into(), ty, true, false)
    }

    /// Pure virtual member function (`= 0`).
    #[must_use]
    pub fn pure_virtual(self, name: impl Into<String>, ty: Idx) -> Self {
        self.push_method(name.into(), ty, true, true)
    }

    #[must_use]
    pub fn with_virtual_destructor(mut self) -> Self {
        self.virtual_destructor = true;
        self
    }

    fn push_method(mut self, name: String, ty: Idx, is_virtual: bool, is_pure: bool) -> Self {
        self.methods.push(Method {
            name,
            ty,
            access: self.current_access,
            is_virtual,
            is_pure,
        });
        self
    }
}

/// A `union` declaration. Members default to public.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnionDecl {
    pub name: String,
    pub fields: Vec<Field>,
}

impl UnionDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: Idx) -> Self {
        self.fields.push(Field {
            name: name.into(),
            ty,
            access: Access::Public,
        });
        self
    }
}

/// An enumeration declaration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumDecl {
    pub name: String,
    pub key: EnumKey,
    /// Fixed underlying type (`enum class E : int`).
    pub underlying: Option<Idx>,
    pub enumerators: Vec<String>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>, key: EnumKey) -> Self {
        Self {
            name: name.into(),
            key,
            underlying: None,
            enumerators: Vec::new(),
        }
    }

    #[must_use]
    pub fn underlying(mut self, ty: Idx) -> Self {
        self.underlying = Some(ty);
        self
    }

    #[must_use]
    pub fn enumerator(mut self, name: impl Into<String>) -> Self {
        self.enumerators.push(name.into());
        self
    }

    pub fn is_scoped(&self) -> bool {
        self.key.is_scoped()
    }
}

/// The declaration backing a nominal type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Record {
    Class(ClassDecl),
    Union(UnionDecl),
    Enum(EnumDecl),
}

impl Record {
    pub fn name(&self) -> &str {
        match self {
            Self::Class(c) => &c.name,
            Self::Union(u) => &u.name,
            Self::Enum(e) => &e.name,
        }
    }

    fn fields(&self) -> &[Field] {
        match self {
            Self::Class(c) => &c.fields,
            Self::Union(u) => &u.fields,
            Self::Enum(_) => &[],
        }
    }

    fn methods(&self) -> &[Method] {
        match self {
            Self::Class(c) => &c.methods,
            Self::Union(_) | Self::Enum(_) => &[],
        }
    }
}

impl Pool {
    // === Declaration ===

    pub fn declare_class(&mut self, decl: ClassDecl) -> Result<Idx, LookupError> {
        let name = decl.name.clone();
        self.declare(name, Tag::Class, Record::Class(decl))
    }

    pub fn declare_union(&mut self, decl: UnionDecl) -> Result<Idx, LookupError> {
        let name = decl.name.clone();
        self.declare(name, Tag::Union, Record::Union(decl))
    }

    pub fn declare_enum(&mut self, decl: EnumDecl) -> Result<Idx, LookupError> {
        let name = decl.name.clone();
        self.declare(name, Tag::Enum, Record::Enum(decl))
    }

    /// `using name = ty;`. The alias denotes `ty` itself.
    pub fn define_alias(&mut self, name: impl Into<String>, ty: Idx) -> Result<Idx, LookupError> {
        let name = name.into();
        if let Some(&existing) = self.names_mut().get(&name) {
            // Redeclaring an alias to the same type is allowed.
            if existing == ty {
                return Ok(ty);
            }
            return Err(LookupError::Redefinition(name));
        }
        tracing::trace!(%name, ty = %self.format_type(ty), "alias defined");
        self.names_mut().insert(name, ty);
        Ok(ty)
    }

    fn declare(&mut self, name: String, tag: Tag, record: Record) -> Result<Idx, LookupError> {
        if self.named(&name).is_some() {
            return Err(LookupError::Redefinition(name));
        }
        let idx = self.push_record(tag, record);
        tracing::trace!(%name, %tag, "type declared");
        self.names_mut().insert(name, idx);
        Ok(idx)
    }

    // === Member lookup ===

    /// The type of `&C::member`, evaluated from outside the class.
    ///
    /// Lookup searches `C` first, then its bases. A member found in a base
    /// yields a pointer to member of that base. Non-public members are
    /// inaccessible, and an overloaded member function name is ambiguous
    /// without a target type.
    pub fn member_address(&mut self, class: Idx, member: &str) -> Result<Idx, LookupError> {
        let (owner, access, ty) = self.lookup_member(class, member)?;
        if access != Access::Public {
            return Err(LookupError::Inaccessible {
                class: self.format_type(owner),
                member: member.to_owned(),
                access,
            });
        }
        Ok(self.member_pointer(owner, ty))
    }

    /// Find `member` in `class` or its bases: (owning class, access, type).
    fn lookup_member(&self, class: Idx, member: &str) -> Result<(Idx, Access, Idx), LookupError> {
        let class = self.unqualified_base(class);
        let Some(record) = self.record(class).filter(|r| !matches!(r, Record::Enum(_))) else {
            return Err(LookupError::NotARecord {
                ty: self.format_type(class),
            });
        };

        let mut hits = record
            .fields()
            .iter()
            .filter(|f| f.name == member)
            .map(|f| (f.access, f.ty))
            .chain(
                record
                    .methods()
                    .iter()
                    .filter(|m| m.name == member)
                    .map(|m| (m.access, m.ty)),
            );

        if let Some((access, ty)) = hits.next() {
            if hits.next().is_some() {
                return Err(LookupError::Ambiguous {
                    class: record.name().to_owned(),
                    member: member.to_owned(),
                });
            }
            return Ok((class, access, ty));
        }

        let bases = match record {
            Record::Class(c) => c.bases.as_slice(),
            Record::Union(_) | Record::Enum(_) => &[],
        };
        let mut result = None;
        for &base in bases {
            match self.lookup_member(base, member) {
                Ok(hit) if result.is_none() => result = Some(hit),
                Ok(_) => {
                    return Err(LookupError::Ambiguous {
                        class: record.name().to_owned(),
                        member: member.to_owned(),
                    })
                }
                Err(LookupError::NoSuchMember { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        result.ok_or_else(|| LookupError::NoSuchMember {
            class: record.name().to_owned(),
            member: member.to_owned(),
        })
    }

    // === Class properties ===

    /// Has a virtual member function or destructor, declared or inherited.
    pub(crate) fn class_is_polymorphic(&self, class: Idx) -> bool {
        let Some(Record::Class(decl)) = self.record(class) else {
            return false;
        };
        decl.virtual_destructor
            || decl.methods.iter().any(|m| m.is_virtual)
            || decl.bases.iter().any(|&b| self.class_is_polymorphic(b))
    }

    /// Has a pure virtual function without a final overrider.
    pub(crate) fn class_is_abstract(&self, class: Idx) -> bool {
        !self.unresolved_pure_virtuals(class).is_empty()
    }

    /// No non-static data members, nothing virtual, and only empty bases.
    pub(crate) fn class_is_empty(&self, class: Idx) -> bool {
        let Some(Record::Class(decl)) = self.record(class) else {
            return false;
        };
        decl.fields.is_empty()
            && !self.class_is_polymorphic(class)
            && decl.bases.iter().all(|&b| self.class_is_empty(b))
    }

    /// Pure virtual functions (name, type) still lacking an overrider.
    fn unresolved_pure_virtuals(&self, class: Idx) -> Vec<(&str, Idx)> {
        let Some(Record::Class(decl)) = self.record(class) else {
            return Vec::new();
        };
        let overrides = |name: &str, ty: Idx| {
            decl.methods
                .iter()
                .any(|m| m.name == name && m.ty == ty && !m.is_pure)
        };

        let mut pending: Vec<(&str, Idx)> = decl
            .bases
            .iter()
            .flat_map(|&b| self.unresolved_pure_virtuals(b))
            .filter(|&(name, ty)| !overrides(name, ty))
            .collect();
        pending.extend(
            decl.methods
                .iter()
                .filter(|m| m.is_pure)
                .map(|m| (m.name.as_str(), m.ty)),
        );
        pending
    }
}

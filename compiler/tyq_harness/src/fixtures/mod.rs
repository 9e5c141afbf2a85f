//! Declarations shared by every suite.
//!
//! ```text
//! class C1 {};
//! struct C2 {
//!     virtual void func1() = 0;
//!     virtual void func2(int) const = 0;
//!     virtual void func3() volatile = 0;
//!     virtual void func4() const volatile = 0;
//!     virtual ~C2();
//! };
//! struct C3 : C2 {
//!     int a;
//!     std::vector<int> b;
//! private:
//!     void func1() override; /* ... func2 to func4 likewise */
//! };
//! enum E1 { E1_ENUM };  enum class E2 {};  enum class E3 : int {};  enum struct E4 {};
//! union U1 { int i; long l; };  union U2 { C1 c1; C3 c3; };
//! double func1(float);
//! auto func2(int, int) -> double (*)(float);
//! using func2_alias = auto (int, int) -> double (*)(float);
//! ```

use tyq_types::{
    Access, ClassDecl, ClassKey, EnumDecl, EnumKey, FnQualifiers, Idx, LookupError, Pool, Scope,
    UnionDecl,
};

/// Handles to the shared declarations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Fixtures {
    pub c1: Idx,
    pub c2: Idx,
    pub c3: Idx,
    pub e1: Idx,
    pub e2: Idx,
    pub e3: Idx,
    pub e4: Idx,
    pub u1: Idx,
    pub u2: Idx,
    /// Opaque `std::vector<int>`.
    pub vector_int: Idx,
    /// `std::array<int, 10>`, a class wrapping `int[10]`.
    pub int_array: Idx,
    /// `double(float)`, the type of `func1`.
    pub func1: Idx,
    /// `double (*(int, int))(float)`, the type of `func2`.
    pub func2: Idx,
}

impl Fixtures {
    /// Declare every fixture in `pool` and bring `func1`, `func2` and
    /// `E1_ENUM` into `scope`.
    pub fn declare(pool: &mut Pool, scope: &mut Scope) -> Result<Self, LookupError> {
        let c1 = pool.declare_class(ClassDecl::new("C1", ClassKey::Class))?;

        let m1 = pool.function(&[], Idx::VOID);
        let m2 = pool.function_with(&[Idx::INT], Idx::VOID, FnQualifiers::CONST);
        let m3 = pool.function_with(&[], Idx::VOID, FnQualifiers::VOLATILE);
        let m4 = pool.function_with(&[], Idx::VOID, FnQualifiers::CONST | FnQualifiers::VOLATILE);

        let c2 = pool.declare_class(
            ClassDecl::new("C2", ClassKey::Struct)
                .pure_virtual("func1", m1)
                .pure_virtual("func2", m2)
                .pure_virtual("func3", m3)
                .pure_virtual("func4", m4)
                .with_virtual_destructor(),
        )?;

        let vector_int = pool.declare_class(ClassDecl::new("std::vector<int>", ClassKey::Class))?;

        let c3 = pool.declare_class(
            ClassDecl::new("C3", ClassKey::Struct)
                .base(c2)
                .field("a", Idx::INT)
                .field("b", vector_int)
                .access(Access::Private)
                .virtual_method("func1", m1)
                .virtual_method("func2", m2)
                .virtual_method("func3", m3)
                .virtual_method("func4", m4),
        )?;

        let e1 = pool.declare_enum(EnumDecl::new("E1", EnumKey::Enum).enumerator("E1_ENUM"))?;
        let e2 = pool.declare_enum(EnumDecl::new("E2", EnumKey::EnumClass))?;
        let e3 = pool.declare_enum(EnumDecl::new("E3", EnumKey::EnumClass).underlying(Idx::INT))?;
        let e4 = pool.declare_enum(EnumDecl::new("E4", EnumKey::EnumStruct))?;

        let u1 = pool.declare_union(UnionDecl::new("U1").field("i", Idx::INT).field("l", Idx::LONG))?;
        let u2 = pool.declare_union(UnionDecl::new("U2").field("c1", c1).field("c3", c3))?;

        let elems = pool.array(Idx::INT, 10);
        let int_array = pool.declare_class(
            ClassDecl::new("std::array<int, 10>", ClassKey::Struct).field("_elems", elems),
        )?;

        let func1 = pool.function(&[Idx::FLOAT], Idx::DOUBLE);
        let func1_ptr = pool.pointer(func1);
        let func2 = pool.function(&[Idx::INT, Idx::INT], func1_ptr);
        pool.define_alias("func2_alias", func2)?;

        scope.declare_function("func1", func1);
        scope.declare_function("func2", func2);
        scope.declare_enumerators(pool, e1);

        tracing::debug!(types = pool.len(), "fixtures declared");
        Ok(Self {
            c1,
            c2,
            c3,
            e1,
            e2,
            e3,
            e4,
            u1,
            u2,
            vector_int,
            int_array,
            func1,
            func2,
        })
    }
}

//! Qualifier and declaration properties.

use tyq_types::{ClassDecl, ClassKey, Expr, Idx, Predicate};

use crate::case::CaseCtx;
use crate::registry::{RegistrationError, Registry};
use crate::AssertionFailure;

const GROUP: &str = "type_property";

pub(super) fn register(r: &mut Registry) -> Result<(), RegistrationError> {
    r.register(GROUP, "is_const", is_const)?;
    r.register(GROUP, "is_volatile", is_volatile)?;
    r.register(GROUP, "is_signed", is_signed)?;
    r.register(GROUP, "is_unsigned", is_unsigned)?;
    r.register(GROUP, "is_empty", is_empty)?;
    r.register(GROUP, "is_polymorphic", is_polymorphic)?;
    r.register(GROUP, "is_abstract", is_abstract)?;
    Ok(())
}

/// Only top-level `const` counts.
fn is_const(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let const_int = ctx.pool.const_of(Idx::INT);
    let const_c2 = ctx.pool.const_of(ctx.fx.c2);
    let const_c2_ref = ctx.pool.lvalue_ref(const_c2);
    let const_c2_ptr = ctx.pool.pointer(const_c2);
    let c2_const_ptr = {
        let ptr = ctx.pool.pointer(ctx.fx.c2);
        ctx.pool.const_of(ptr)
    };
    let const_volatile = ctx.pool.volatile_of(const_int);
    let const_array = ctx.pool.array(const_int, 3);
    let of_enumerator = ctx.decltype(&Expr::id("E1_ENUM"))?;

    ctx.none(
        Predicate::IsConst,
        &[Idx::INT, ctx.fx.c2, const_c2_ref, const_c2_ptr, of_enumerator],
    )?;
    ctx.all(
        Predicate::IsConst,
        &[const_int, const_c2, c2_const_ptr, const_volatile, const_array],
    )?;

    // cv applied to a reference or a function type is ignored.
    let int_ref = ctx.pool.lvalue_ref(Idx::INT);
    let const_on_ref = ctx.pool.const_of(int_ref);
    let const_on_fn = ctx.pool.const_of(ctx.fx.func1);
    ctx.none(Predicate::IsConst, &[const_on_ref, const_on_fn])
}

fn is_volatile(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let [plain, konst, vol, cv] = ctx.cv_variants(Idx::INT);
    ctx.none(Predicate::IsVolatile, &[plain, konst])?;
    ctx.all(Predicate::IsVolatile, &[vol, cv])?;

    let vol_ptr = ctx.pool.pointer(vol);
    let vol_ref = ctx.pool.lvalue_ref(vol);
    ctx.none(Predicate::IsVolatile, &[vol_ptr, vol_ref])
}

fn is_signed(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let const_long = ctx.pool.const_of(Idx::LONG);
    ctx.all(
        Predicate::IsSigned,
        &[
            Idx::CHAR,
            Idx::SCHAR,
            Idx::SHORT,
            Idx::INT,
            Idx::LONG,
            Idx::LONG_LONG,
            Idx::FLOAT,
            Idx::DOUBLE,
            Idx::LONG_DOUBLE,
            const_long,
        ],
    )?;
    let int_ptr = ctx.pool.pointer(Idx::INT);
    ctx.none(
        Predicate::IsSigned,
        &[Idx::BOOL, Idx::UCHAR, Idx::UINT, ctx.fx.e3, int_ptr, ctx.fx.c1],
    )
}

fn is_unsigned(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    ctx.all(
        Predicate::IsUnsigned,
        &[
            Idx::BOOL,
            Idx::UCHAR,
            Idx::CHAR16,
            Idx::CHAR32,
            Idx::USHORT,
            Idx::UINT,
            Idx::ULONG,
            Idx::ULONG_LONG,
        ],
    )?;
    ctx.none(
        Predicate::IsUnsigned,
        &[Idx::INT, Idx::CHAR, Idx::FLOAT, ctx.fx.e1, Idx::NULLPTR],
    )
}

fn is_empty(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    // struct Derived : C1 { void f(); };
    let f = ctx.pool.function(&[], Idx::VOID);
    let derived = ctx
        .pool
        .declare_class(
            ClassDecl::new("Derived", ClassKey::Struct)
                .base(ctx.fx.c1)
                .method("f", f),
        )?;
    ctx.all(Predicate::IsEmpty, &[ctx.fx.c1, derived])?;
    ctx.none(
        Predicate::IsEmpty,
        &[ctx.fx.c2, ctx.fx.c3, ctx.fx.u1, ctx.fx.int_array, Idx::INT],
    )
}

fn is_polymorphic(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    ctx.all(Predicate::IsPolymorphic, &[ctx.fx.c2, ctx.fx.c3])?;
    let c2_ptr = ctx.pool.pointer(ctx.fx.c2);
    ctx.none(
        Predicate::IsPolymorphic,
        &[ctx.fx.c1, ctx.fx.u2, c2_ptr, ctx.fx.vector_int],
    )
}

/// `C2` declares pure virtuals; `C3` overrides all of them.
fn is_abstract(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let const_c2 = ctx.pool.const_of(ctx.fx.c2);
    ctx.all(Predicate::IsAbstract, &[ctx.fx.c2, const_c2])?;
    let c2_ref = ctx.pool.lvalue_ref(ctx.fx.c2);
    ctx.none(
        Predicate::IsAbstract,
        &[ctx.fx.c3, ctx.fx.c1, ctx.fx.u1, c2_ref],
    )
}

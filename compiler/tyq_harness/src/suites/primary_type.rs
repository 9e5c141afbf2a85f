//! Primary type categories.

use tyq_types::{Expr, FnQualifiers, Idx, Predicate};

use crate::case::CaseCtx;
use crate::registry::{RegistrationError, Registry};
use crate::AssertionFailure;

const GROUP: &str = "primary_type";

pub(super) fn register(r: &mut Registry) -> Result<(), RegistrationError> {
    r.register(GROUP, "is_void", is_void)?;
    r.register(GROUP, "is_integral", is_integral)?;
    r.register(GROUP, "is_float", is_float)?;
    r.register(GROUP, "is_null_pointer", is_null_pointer)?;
    r.register(GROUP, "is_array", is_array)?;
    r.register(GROUP, "is_enum", is_enum)?;
    r.register(GROUP, "is_union", is_union)?;
    r.register(GROUP, "is_class", is_class)?;
    r.register(GROUP, "is_function", is_function)?;
    r.register(GROUP, "is_pointer", is_pointer)?;
    r.register(GROUP, "is_lvalue_reference", is_lvalue_reference)?;
    r.register(GROUP, "is_rvalue_reference", is_rvalue_reference)?;
    Ok(())
}

fn is_void(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let voids = ctx.cv_variants(Idx::VOID);
    ctx.all(Predicate::IsVoid, &voids)?;

    let void_ptr = ctx.pool.pointer(Idx::VOID);
    let returns_void = ctx.pool.function(&[], Idx::VOID);
    ctx.none(
        Predicate::IsVoid,
        &[Idx::INT, Idx::NULLPTR, void_ptr, returns_void, ctx.fx.c1],
    )
}

const INTEGRALS: [Idx; 15] = [
    Idx::BOOL,
    Idx::CHAR,
    Idx::SCHAR,
    Idx::UCHAR,
    Idx::WCHAR,
    Idx::CHAR16,
    Idx::CHAR32,
    Idx::SHORT,
    Idx::USHORT,
    Idx::INT,
    Idx::UINT,
    Idx::LONG,
    Idx::ULONG,
    Idx::LONG_LONG,
    Idx::ULONG_LONG,
];

const FLOATS: [Idx; 3] = [Idx::FLOAT, Idx::DOUBLE, Idx::LONG_DOUBLE];

fn is_integral(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    ctx.all(Predicate::IsIntegral, &INTEGRALS)?;
    for ty in INTEGRALS {
        let variants = ctx.cv_variants(ty);
        ctx.all(Predicate::IsIntegral, &variants)?;
    }
    ctx.none(Predicate::IsIntegral, &FLOATS)?;

    let int_ref = ctx.pool.lvalue_ref(Idx::INT);
    let int_ptr = ctx.pool.pointer(Idx::INT);
    ctx.none(
        Predicate::IsIntegral,
        &[int_ref, int_ptr, ctx.fx.e1, ctx.fx.e3, Idx::NULLPTR],
    )
}

fn is_float(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    ctx.all(Predicate::IsFloatingPoint, &FLOATS)?;
    for ty in FLOATS {
        let variants = ctx.cv_variants(ty);
        ctx.all(Predicate::IsFloatingPoint, &variants)?;
    }
    ctx.none(Predicate::IsFloatingPoint, &INTEGRALS)
}

fn is_null_pointer(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let of_nullptr = ctx.decltype(&Expr::Literal(Idx::NULLPTR))?;
    ctx.check(Predicate::IsNullPointer, of_nullptr, true)?;

    let variants = ctx.cv_variants(Idx::NULLPTR);
    ctx.all(Predicate::IsNullPointer, &variants)?;

    let void_ptr = ctx.pool.pointer(Idx::VOID);
    let zero = ctx.decltype(&Expr::Literal(Idx::INT))?;
    ctx.none(Predicate::IsNullPointer, &[void_ptr, zero])
}

fn is_array(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let int_unbounded = ctx.pool.unbounded_array(Idx::INT);
    let int_10 = ctx.pool.array(Idx::INT, 10);
    let c1_unbounded = ctx.pool.unbounded_array(ctx.fx.c1);
    let c1_10 = ctx.pool.array(ctx.fx.c1, 10);
    let const_int = ctx.pool.const_of(Idx::INT);
    let const_int_10 = ctx.pool.array(const_int, 10);
    ctx.all(
        Predicate::IsArray,
        &[int_unbounded, int_10, c1_unbounded, c1_10, const_int_10],
    )?;

    // `std::array<int, 10>` is a class, not an array.
    let int_ptr = ctx.pool.pointer(Idx::INT);
    let array_ref = ctx.pool.lvalue_ref(int_10);
    ctx.none(Predicate::IsArray, &[ctx.fx.int_array, int_ptr, array_ref])
}

fn is_enum(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    ctx.check(Predicate::IsEnum, ctx.fx.c1, false)?;
    ctx.all(
        Predicate::IsEnum,
        &[ctx.fx.e1, ctx.fx.e2, ctx.fx.e3, ctx.fx.e4],
    )?;

    let of_enumerator = ctx.decltype(&Expr::id("E1_ENUM"))?;
    ctx.check(Predicate::IsEnum, of_enumerator, true)?;

    let const_e2 = ctx.pool.const_of(ctx.fx.e2);
    ctx.check(Predicate::IsEnum, const_e2, true)?;
    ctx.check(Predicate::IsEnum, Idx::INT, false)
}

fn is_union(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    ctx.all(Predicate::IsUnion, &[ctx.fx.u1, ctx.fx.u2])?;
    ctx.none(Predicate::IsUnion, &[ctx.fx.c1, ctx.fx.e1])
}

fn is_class(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let const_c3 = ctx.pool.const_of(ctx.fx.c3);
    ctx.all(
        Predicate::IsClass,
        &[ctx.fx.c1, ctx.fx.c2, const_c3, ctx.fx.int_array, ctx.fx.vector_int],
    )?;
    ctx.none(Predicate::IsClass, &[ctx.fx.e2, ctx.fx.u1])
}

/// The same signature spelled three ways gives the same answers.
fn is_function(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    // double(float), decltype(func1)
    let direct = ctx.pool.function(&[Idx::FLOAT], Idx::DOUBLE);
    let of_func1 = ctx.decltype(&Expr::id("func1"))?;
    ctx.all(Predicate::IsFunction, &[direct, of_func1])?;

    // auto (int, int) -> double (*)(float), decltype(func2), func2_alias
    let ret = ctx.pool.pointer(direct);
    let trailing = ctx.pool.function(&[Idx::INT, Idx::INT], ret);
    let of_func2 = ctx.decltype(&Expr::id("func2"))?;
    let Some(alias) = ctx.pool.named("func2_alias") else {
        return Err(AssertionFailure::TypeMismatch {
            expected: "func2_alias".into(),
            found: "<undeclared>".into(),
        });
    };
    ctx.all(Predicate::IsFunction, &[trailing, of_func2, alias])?;
    ctx.same(of_func2, trailing)?;
    ctx.same(alias, trailing)?;
    for p in Predicate::ALL {
        let expected = p.eval(&ctx.pool, trailing);
        ctx.check(p, of_func2, expected)?;
        ctx.check(p, alias, expected)?;
    }

    // int(const char*, ...)
    let const_char = ctx.pool.const_of(Idx::CHAR);
    let c_str = ctx.pool.pointer(const_char);
    let printf = ctx
        .pool
        .function_with(&[c_str], Idx::INT, FnQualifiers::VARIADIC);
    ctx.check(Predicate::IsFunction, printf, true)?;

    let member_fn = ctx.member_address(ctx.fx.c2, "func1")?;
    let fn_ptr = ctx.pool.pointer(direct);
    let fn_ref = ctx.pool.lvalue_ref(direct);
    ctx.none(Predicate::IsFunction, &[member_fn, fn_ptr, fn_ref])
}

fn is_pointer(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let int_ptr = ctx.pool.pointer(Idx::INT);
    let int_ptr_ptr = ctx.pool.pointer(int_ptr);
    let const_int = ctx.pool.const_of(Idx::INT);
    let const_int_ptr = ctx.pool.pointer(const_int);
    let c1_ptr = ctx.pool.pointer(ctx.fx.c1);
    let const_c1 = ctx.pool.const_of(ctx.fx.c1);
    let const_c1_ptr = ctx.pool.pointer(const_c1);
    let cv_ptrs = ctx.cv_variants(int_ptr);
    let func1_ptr = ctx.pool.pointer(ctx.fx.func1);
    ctx.all(
        Predicate::IsPointer,
        &[int_ptr, int_ptr_ptr, const_int_ptr, c1_ptr, const_c1_ptr, func1_ptr],
    )?;
    ctx.all(Predicate::IsPointer, &cv_ptrs)?;

    let member_ptr = ctx.pool.member_pointer(ctx.fx.c3, Idx::INT);
    let ptr_ref = ctx.pool.lvalue_ref(int_ptr);
    ctx.none(Predicate::IsPointer, &[Idx::NULLPTR, member_ptr, ptr_ref])
}

fn is_lvalue_reference(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let refs = Refs::build(ctx);
    ctx.all(
        Predicate::IsLvalueReference,
        &[refs.int_lref, refs.const_int_lref, refs.c1_lref, refs.const_c1_lref],
    )?;
    ctx.none(
        Predicate::IsLvalueReference,
        &[Idx::INT, refs.int_ptr, refs.int_rref, refs.const_int_rref],
    )
}

fn is_rvalue_reference(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let refs = Refs::build(ctx);
    ctx.all(
        Predicate::IsRvalueReference,
        &[refs.int_rref, refs.const_int_rref, refs.c1_rref, refs.const_c1_rref],
    )?;
    ctx.none(
        Predicate::IsRvalueReference,
        &[Idx::INT, refs.int_ptr, refs.int_lref, refs.const_int_lref],
    )
}

/// Value, `&` and `&&` forms of `int` and `C1`, each with and without const.
struct Refs {
    int_ptr: Idx,
    int_lref: Idx,
    int_rref: Idx,
    const_int_lref: Idx,
    const_int_rref: Idx,
    c1_lref: Idx,
    c1_rref: Idx,
    const_c1_lref: Idx,
    const_c1_rref: Idx,
}

impl Refs {
    fn build(ctx: &mut CaseCtx) -> Self {
        let pool = &mut ctx.pool;
        let const_int = pool.const_of(Idx::INT);
        let const_c1 = pool.const_of(ctx.fx.c1);
        Refs {
            int_ptr: pool.pointer(Idx::INT),
            int_lref: pool.lvalue_ref(Idx::INT),
            int_rref: pool.rvalue_ref(Idx::INT),
            const_int_lref: pool.lvalue_ref(const_int),
            const_int_rref: pool.rvalue_ref(const_int),
            c1_lref: pool.lvalue_ref(ctx.fx.c1),
            c1_rref: pool.rvalue_ref(ctx.fx.c1),
            const_c1_lref: pool.lvalue_ref(const_c1),
            const_c1_rref: pool.rvalue_ref(const_c1),
        }
    }
}

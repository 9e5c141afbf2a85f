//! `decltype` and `auto` deduction.

use tyq_types::{AutoDecl, Expr, Idx};

use crate::case::CaseCtx;
use crate::registry::{RegistrationError, Registry};
use crate::AssertionFailure;

const GROUP: &str = "decltype";

pub(super) fn register(r: &mut Registry) -> Result<(), RegistrationError> {
    r.register(
        GROUP,
        "returns_the_type_of_that_variable_including_top_level_const_and_references",
        declared_type,
    )?;
    r.register(
        GROUP,
        "with_double_parentheses_is_always_reference_type",
        double_parentheses,
    )?;
    r.register(GROUP, "of_a_prvalue_is_not_a_reference", prvalues)?;
    r.register(GROUP, "of_an_xvalue_is_an_rvalue_reference", xvalues)?;
    r.register(GROUP, "of_functions_and_enumerators", functions_and_enumerators)?;
    r.register(GROUP, "auto_drops_references_and_top_level_const", auto_value)?;
    r.register(GROUP, "auto_references_follow_the_initializer", auto_references)?;
    Ok(())
}

/// `decltype(name) x = init;` followed by `decltype(x)`.
fn declare_decltype(ctx: &mut CaseCtx, name: &str, from: &str) -> Result<Idx, AssertionFailure> {
    let ty = ctx.decltype(&Expr::id(from))?;
    ctx.scope.declare(name, ty);
    ctx.decltype(&Expr::id(name))
}

/// ```text
/// const auto ci = 10, &cr = ci;
/// decltype(ci) a = ci;   // const int
/// decltype(cr) b = ci;   // const int&
/// ```
fn declared_type(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    ctx.scope
        .declare_auto(&mut ctx.pool, "ci", AutoDecl::CONST, &Expr::Literal(Idx::INT))?;
    ctx.scope
        .declare_auto(&mut ctx.pool, "cr", AutoDecl::CONST_REF, &Expr::id("ci"))?;

    let const_int = ctx.pool.const_of(Idx::INT);
    let const_int_ref = ctx.pool.lvalue_ref(const_int);

    let a = declare_decltype(ctx, "a", "ci")?;
    ctx.same(a, const_int)?;
    let b = declare_decltype(ctx, "b", "cr")?;
    ctx.same(b, const_int_ref)?;
    Ok(())
}

/// ```text
/// auto i = 10;
/// const auto ci = 20;
/// decltype((i))  a = i;    // int&
/// decltype((ci)) b = ci;   // const int&
/// ```
fn double_parentheses(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    ctx.scope
        .declare_auto(&mut ctx.pool, "i", AutoDecl::VALUE, &Expr::Literal(Idx::INT))?;
    ctx.scope
        .declare_auto(&mut ctx.pool, "ci", AutoDecl::CONST, &Expr::Literal(Idx::INT))?;

    let int_ref = ctx.pool.lvalue_ref(Idx::INT);
    let const_int = ctx.pool.const_of(Idx::INT);
    let const_int_ref = ctx.pool.lvalue_ref(const_int);

    let a = ctx.decltype(&Expr::paren(Expr::id("i")))?;
    ctx.same(a, int_ref)?;
    let b = ctx.decltype(&Expr::paren(Expr::id("ci")))?;
    ctx.same(b, const_int_ref)?;

    // Parenthesizing a reference still yields a reference, never `T& &`.
    ctx.scope.declare("r", const_int_ref);
    let c = ctx.decltype(&Expr::paren(Expr::id("r")))?;
    ctx.same(c, const_int_ref)?;
    Ok(())
}

/// Literals and `&x` are prvalues; cv on non-class prvalues is dropped.
fn prvalues(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let lit = ctx.decltype(&Expr::Literal(Idx::INT))?;
    ctx.same(lit, Idx::INT)?;

    let nullptr = ctx.decltype(&Expr::Literal(Idx::NULLPTR))?;
    ctx.same(nullptr, Idx::NULLPTR)?;

    let const_int = ctx.pool.const_of(Idx::INT);
    ctx.scope.declare("ci", const_int);
    let addr = ctx.decltype(&Expr::address_of(Expr::id("ci")))?;
    let ptr_to_const = ctx.pool.pointer(const_int);
    ctx.same(addr, ptr_to_const)?;

    let const_c1 = ctx.pool.const_of(ctx.fx.c1);
    let class_prvalue = ctx.decltype(&Expr::Literal(const_c1))?;
    ctx.same(class_prvalue, const_c1)?;
    Ok(())
}

/// `std::move(x)` is an xvalue; `*p` is an lvalue.
fn xvalues(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let int_ptr = ctx.pool.pointer(Idx::INT);
    ctx.scope.declare("i", Idx::INT);
    ctx.scope.declare("p", int_ptr);

    let moved = ctx.decltype(&Expr::moved(Expr::id("i")))?;
    let int_rref = ctx.pool.rvalue_ref(Idx::INT);
    ctx.same(moved, int_rref)?;

    let deref = ctx.decltype(&Expr::deref(Expr::id("p")))?;
    let int_ref = ctx.pool.lvalue_ref(Idx::INT);
    ctx.same(deref, int_ref)?;

    let moved_deref = ctx.decltype(&Expr::moved(Expr::deref(Expr::id("p"))))?;
    ctx.same(moved_deref, int_rref)?;
    Ok(())
}

fn functions_and_enumerators(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let func1 = ctx.decltype(&Expr::id("func1"))?;
    ctx.same(func1, ctx.fx.func1)?;

    let func2 = ctx.decltype(&Expr::id("func2"))?;
    ctx.same(func2, ctx.fx.func2)?;

    let func1_ref = ctx.pool.lvalue_ref(ctx.fx.func1);
    let paren = ctx.decltype(&Expr::paren(Expr::id("func1")))?;
    ctx.same(paren, func1_ref)?;

    let e1 = ctx.decltype(&Expr::id("E1_ENUM"))?;
    ctx.same(e1, ctx.fx.e1)?;
    let e1_paren = ctx.decltype(&Expr::paren(Expr::id("E1_ENUM")))?;
    ctx.same(e1_paren, ctx.fx.e1)?;

    let member = ctx.decltype(&Expr::member_address(ctx.fx.c3, "a"))?;
    let int_c3 = ctx.pool.member_pointer(ctx.fx.c3, Idx::INT);
    ctx.same(member, int_c3)?;
    Ok(())
}

/// ```text
/// const int& cr = ...;  int arr[3];
/// auto a = cr;           // int
/// const auto b = cr;     // const int
/// auto c = arr;          // int*
/// auto d = func1;        // double (*)(float)
/// ```
fn auto_value(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let const_int = ctx.pool.const_of(Idx::INT);
    let const_int_ref = ctx.pool.lvalue_ref(const_int);
    let arr = ctx.pool.array(Idx::INT, 3);
    ctx.scope.declare("cr", const_int_ref);
    ctx.scope.declare("arr", arr);

    let a = ctx
        .scope
        .declare_auto(&mut ctx.pool, "a", AutoDecl::VALUE, &Expr::id("cr"))?;
    ctx.same(a, Idx::INT)?;

    let b = ctx
        .scope
        .declare_auto(&mut ctx.pool, "b", AutoDecl::CONST, &Expr::id("cr"))?;
    ctx.same(b, const_int)?;

    let c = ctx
        .scope
        .declare_auto(&mut ctx.pool, "c", AutoDecl::VALUE, &Expr::id("arr"))?;
    let int_ptr = ctx.pool.pointer(Idx::INT);
    ctx.same(c, int_ptr)?;

    let d = ctx
        .scope
        .declare_auto(&mut ctx.pool, "d", AutoDecl::VALUE, &Expr::id("func1"))?;
    let func1_ptr = ctx.pool.pointer(ctx.fx.func1);
    ctx.same(d, func1_ptr)?;
    Ok(())
}

/// ```text
/// int x;  const int cx = 0;
/// auto& a = cx;          // const int&
/// const auto& b = 42;    // const int&
/// auto&& c = x;          // int&
/// auto&& d = 42;         // int&&
/// ```
fn auto_references(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let const_int = ctx.pool.const_of(Idx::INT);
    ctx.scope.declare("x", Idx::INT);
    ctx.scope.declare("cx", const_int);

    let const_int_ref = ctx.pool.lvalue_ref(const_int);
    let int_ref = ctx.pool.lvalue_ref(Idx::INT);
    let int_rref = ctx.pool.rvalue_ref(Idx::INT);

    let a = ctx
        .scope
        .declare_auto(&mut ctx.pool, "a", AutoDecl::REF, &Expr::id("cx"))?;
    ctx.same(a, const_int_ref)?;

    let b = ctx.scope.declare_auto(
        &mut ctx.pool,
        "b",
        AutoDecl::CONST_REF,
        &Expr::Literal(Idx::INT),
    )?;
    ctx.same(b, const_int_ref)?;

    let c = ctx
        .scope
        .declare_auto(&mut ctx.pool, "c", AutoDecl::FORWARDING, &Expr::id("x"))?;
    ctx.same(c, int_ref)?;

    let d = ctx.scope.declare_auto(
        &mut ctx.pool,
        "d",
        AutoDecl::FORWARDING,
        &Expr::Literal(Idx::INT),
    )?;
    ctx.same(d, int_rref)?;
    Ok(())
}

//! Pointers to members.
//!
//! Each member pointer is obtained three ways (`decltype(&C::m)`, an
//! explicit type and a `using` alias) and all three must agree.

use tyq_types::{Expr, FnQualifiers, Idx, Predicate};

use crate::case::CaseCtx;
use crate::registry::{RegistrationError, Registry};
use crate::AssertionFailure;

const GROUP: &str = "primary_key";

pub(super) fn register(r: &mut Registry) -> Result<(), RegistrationError> {
    r.register(GROUP, "is_member_function_pointer", is_member_function_pointer)?;
    r.register(GROUP, "is_member_object_pointer", is_member_object_pointer)?;
    Ok(())
}

/// `using name = ty;` in the case's pool.
fn alias(ctx: &mut CaseCtx, name: &str, ty: Idx) -> Result<Idx, AssertionFailure> {
    Ok(ctx.pool.define_alias(name, ty)?)
}

fn is_member_function_pointer(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let c2 = ctx.fx.c2;
    let plain = ctx.pool.function(&[], Idx::VOID);
    let with_const = ctx
        .pool
        .function_with(&[Idx::INT], Idx::VOID, FnQualifiers::CONST);

    // void (C2::*)(), void (C2::*)(int) const
    let explicit_func1 = ctx.pool.member_pointer(c2, plain);
    let explicit_func2 = ctx.pool.member_pointer(c2, with_const);
    ctx.all(
        Predicate::IsMemberFunctionPointer,
        &[explicit_func1, explicit_func2],
    )?;

    // decltype(&C2::func1), decltype(&C2::func2)
    let of_func1 = ctx.decltype(&Expr::member_address(c2, "func1"))?;
    let of_func2 = ctx.decltype(&Expr::member_address(c2, "func2"))?;
    ctx.all(Predicate::IsMemberFunctionPointer, &[of_func1, of_func2])?;

    let c2_func1_type = alias(ctx, "c2_func1_type", explicit_func1)?;
    let c2_func2_type = alias(ctx, "c2_func2_type", explicit_func2)?;
    ctx.all(
        Predicate::IsMemberFunctionPointer,
        &[c2_func1_type, c2_func2_type],
    )?;

    ctx.same(of_func1, explicit_func1)?;
    ctx.same(of_func2, explicit_func2)?;
    ctx.same(c2_func2_type, of_func2)?;

    // volatile and const volatile members.
    let of_func3 = ctx.member_address(c2, "func3")?;
    let of_func4 = ctx.member_address(c2, "func4")?;
    let const_ptr = ctx.pool.const_of(of_func4);
    ctx.all(
        Predicate::IsMemberFunctionPointer,
        &[of_func3, of_func4, const_ptr],
    )?;

    // The example from the catalog: `void (C::*)() const`.
    let const_method = ctx.pool.function_with(&[], Idx::VOID, FnQualifiers::CONST);
    let ty = ctx.pool.member_pointer(ctx.fx.c1, const_method);
    ctx.check(Predicate::IsMemberFunctionPointer, ty, true)?;
    ctx.check(Predicate::IsMemberPointer, ty, true)?;
    ctx.check(Predicate::IsScalar, ty, true)?;
    ctx.check(Predicate::IsMemberObjectPointer, ty, false)?;
    ctx.check(Predicate::IsFunction, ty, false)?;
    ctx.check(Predicate::IsPointer, ty, false)?;

    let data = ctx.pool.member_pointer(ctx.fx.c3, Idx::INT);
    ctx.none(
        Predicate::IsMemberFunctionPointer,
        &[data, plain, ctx.fx.func1],
    )
}

fn is_member_object_pointer(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let c3 = ctx.fx.c3;

    // int C3::*, std::vector<int> C3::*
    let explicit_a = ctx.pool.member_pointer(c3, Idx::INT);
    let explicit_b = ctx.pool.member_pointer(c3, ctx.fx.vector_int);
    ctx.all(Predicate::IsMemberObjectPointer, &[explicit_a, explicit_b])?;

    // decltype(&C3::a), decltype(&C3::b)
    let of_a = ctx.decltype(&Expr::member_address(c3, "a"))?;
    let of_b = ctx.decltype(&Expr::member_address(c3, "b"))?;
    ctx.all(Predicate::IsMemberObjectPointer, &[of_a, of_b])?;

    let c3_b_type = alias(ctx, "c3_b_type", explicit_b)?;
    let c3_a_type = alias(ctx, "c3_a_type", explicit_a)?;
    ctx.all(Predicate::IsMemberObjectPointer, &[c3_a_type, c3_b_type])?;

    ctx.same(of_a, explicit_a)?;
    ctx.same(of_b, explicit_b)?;
    ctx.same(c3_b_type, of_b)?;

    // A member function pointer is not a member object pointer.
    let of_func1 = ctx.decltype(&Expr::member_address(ctx.fx.c2, "func1"))?;
    let int_ptr = ctx.pool.pointer(Idx::INT);
    ctx.none(Predicate::IsMemberObjectPointer, &[of_func1, int_ptr])
}

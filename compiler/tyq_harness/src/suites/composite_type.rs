//! Composite categories: unions of primary categories.
//!
//! Each case asserts the composite on members of its union and on
//! representative non-members.

use tyq_types::{FnQualifiers, Idx, Predicate};

use crate::case::CaseCtx;
use crate::registry::{RegistrationError, Registry};
use crate::AssertionFailure;

const GROUP: &str = "composite_type";

pub(super) fn register(r: &mut Registry) -> Result<(), RegistrationError> {
    r.register(GROUP, "is_arithmetic", is_arithmetic)?;
    r.register(GROUP, "is_fundamental", is_fundamental)?;
    r.register(GROUP, "is_compound", is_compound)?;
    r.register(GROUP, "is_reference", is_reference)?;
    r.register(GROUP, "is_member_pointer", is_member_pointer)?;
    r.register(GROUP, "is_scalar", is_scalar)?;
    r.register(GROUP, "is_object", is_object)?;
    Ok(())
}

/// Types outside the fundamental categories used by several cases.
struct Compounds {
    int_ref: Idx,
    float_ptr: Idx,
    int_array: Idx,
    data_member: Idx,
    const_method: Idx,
}

impl Compounds {
    fn build(ctx: &mut CaseCtx) -> Self {
        let pool = &mut ctx.pool;
        let int_ref = pool.lvalue_ref(Idx::INT);
        let float_ptr = pool.pointer(Idx::FLOAT);
        let int_array = pool.array(Idx::INT, 4);
        let data_member = pool.member_pointer(ctx.fx.c3, Idx::INT);
        let method = pool.function_with(&[Idx::INT], Idx::VOID, FnQualifiers::CONST);
        let const_method = pool.member_pointer(ctx.fx.c3, method);
        Compounds {
            int_ref,
            float_ptr,
            int_array,
            data_member,
            const_method,
        }
    }
}

fn is_arithmetic(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let c = Compounds::build(ctx);
    let const_int = ctx.pool.const_of(Idx::INT);
    ctx.all(
        Predicate::IsArithmetic,
        &[Idx::INT, Idx::FLOAT, Idx::BOOL, Idx::ULONG_LONG, const_int],
    )?;
    ctx.none(
        Predicate::IsArithmetic,
        &[
            Idx::VOID,
            Idx::NULLPTR,
            c.int_ref,
            c.float_ptr,
            ctx.fx.c1,
            ctx.fx.e1,
            ctx.fx.u1,
        ],
    )
}

fn is_fundamental(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let c = Compounds::build(ctx);
    let const_void = ctx.pool.const_of(Idx::VOID);
    ctx.all(
        Predicate::IsFundamental,
        &[Idx::VOID, const_void, Idx::INT, Idx::FLOAT, Idx::NULLPTR],
    )?;
    ctx.none(
        Predicate::IsFundamental,
        &[
            c.int_ref,
            c.float_ptr,
            c.int_array,
            ctx.fx.c1,
            ctx.fx.e1,
            ctx.fx.u1,
            ctx.fx.func1,
        ],
    )
}

fn is_compound(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let c = Compounds::build(ctx);
    ctx.none(
        Predicate::IsCompound,
        &[Idx::VOID, Idx::INT, Idx::FLOAT, Idx::NULLPTR],
    )?;
    let compounds = [
        c.int_ref,
        c.float_ptr,
        c.int_array,
        c.data_member,
        ctx.fx.c1,
        ctx.fx.e1,
        ctx.fx.u1,
        ctx.fx.func1,
    ];
    ctx.all(Predicate::IsCompound, &compounds)?;

    // compound is exactly the complement of fundamental.
    for ty in compounds.into_iter().chain([Idx::VOID, Idx::INT, Idx::NULLPTR]) {
        let fundamental = Predicate::IsFundamental.eval(&ctx.pool, ty);
        ctx.check(Predicate::IsCompound, ty, !fundamental)?;
    }
    Ok(())
}

fn is_reference(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let int_lref = ctx.pool.lvalue_ref(Idx::INT);
    let c1_lref = ctx.pool.lvalue_ref(ctx.fx.c1);
    let int_rref = ctx.pool.rvalue_ref(Idx::INT);
    let c1_rref = ctx.pool.rvalue_ref(ctx.fx.c1);
    let fn_ref = ctx.pool.lvalue_ref(ctx.fx.func1);
    let refs = [int_lref, c1_lref, int_rref, c1_rref, fn_ref];
    ctx.all(Predicate::IsReference, &refs)?;
    ctx.all(Predicate::IsCompound, &refs)?;

    // No type is both kinds of reference.
    for ty in refs {
        let lvalue = Predicate::IsLvalueReference.eval(&ctx.pool, ty);
        ctx.check(Predicate::IsRvalueReference, ty, !lvalue)?;
    }

    let int_ptr = ctx.pool.pointer(Idx::INT);
    ctx.none(Predicate::IsReference, &[Idx::INT, int_ptr, ctx.fx.c1])
}

fn is_member_pointer(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let c = Compounds::build(ctx);
    ctx.all(Predicate::IsMemberPointer, &[c.data_member, c.const_method])?;
    ctx.none(
        Predicate::IsMemberPointer,
        &[c.float_ptr, Idx::NULLPTR, ctx.fx.func1],
    )
}

fn is_scalar(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let c = Compounds::build(ctx);
    let int_ptr = ctx.pool.pointer(Idx::INT);
    ctx.all(
        Predicate::IsScalar,
        &[
            Idx::INT,
            Idx::FLOAT,
            ctx.fx.e1,
            ctx.fx.e3,
            int_ptr,
            c.data_member,
            c.const_method,
            Idx::NULLPTR,
        ],
    )?;
    ctx.none(
        Predicate::IsScalar,
        &[
            Idx::VOID,
            c.int_ref,
            c.int_array,
            ctx.fx.c1,
            ctx.fx.u1,
            ctx.fx.func1,
        ],
    )
}

fn is_object(ctx: &mut CaseCtx) -> Result<(), AssertionFailure> {
    let c = Compounds::build(ctx);
    ctx.all(
        Predicate::IsObject,
        &[
            Idx::INT,
            Idx::NULLPTR,
            c.float_ptr,
            c.int_array,
            c.data_member,
            ctx.fx.c1,
            ctx.fx.c2,
            ctx.fx.u2,
            ctx.fx.e2,
        ],
    )?;
    let const_void = ctx.pool.const_of(Idx::VOID);
    ctx.none(
        Predicate::IsObject,
        &[Idx::VOID, const_void, c.int_ref, ctx.fx.func1],
    )
}

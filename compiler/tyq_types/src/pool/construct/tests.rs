use super::*;
use pretty_assertions::assert_eq;

#[test]
fn structural_types_are_deduplicated() {
    let mut pool = Pool::new();
    let p1 = pool.pointer(Idx::INT);
    let p2 = pool.pointer(Idx::INT);
    assert_eq!(p1, p2);

    let before = pool.len();
    let f1 = pool.function(&[Idx::INT, Idx::INT], Idx::DOUBLE);
    let f2 = pool.function(&[Idx::INT, Idx::INT], Idx::DOUBLE);
    assert_eq!(f1, f2);
    assert_eq!(pool.len(), before + 1);
}

#[test]
fn empty_qualification_is_identity() {
    let mut pool = Pool::new();
    assert_eq!(pool.qualified(Idx::INT, Qualifiers::empty()), Idx::INT);
}

#[test]
fn qualification_merges_instead_of_nesting() {
    let mut pool = Pool::new();
    let c = pool.const_of(Idx::INT);
    let cv_a = pool.volatile_of(c);
    let cv_b = pool.qualified(Idx::INT, Qualifiers::CV);
    assert_eq!(cv_a, cv_b);
    assert_eq!(pool.split_qualified(cv_a), (Idx::INT, Qualifiers::CV));

    // Re-applying an existing qualifier changes nothing.
    assert_eq!(pool.const_of(c), c);
}

#[test]
fn cv_on_reference_and_function_is_dropped() {
    let mut pool = Pool::new();
    let r = pool.lvalue_ref(Idx::INT);
    assert_eq!(pool.const_of(r), r);

    let f = pool.function(&[], Idx::VOID);
    assert_eq!(pool.const_of(f), f);
}

#[test]
fn cv_on_array_qualifies_element() {
    let mut pool = Pool::new();
    let arr = pool.array(Idx::INT, 3);
    let const_arr = pool.const_of(arr);

    let const_int = pool.const_of(Idx::INT);
    assert_eq!(const_arr, pool.array(const_int, 3));
    assert_eq!(pool.tag(const_arr), Tag::Array);

    let unbounded = pool.unbounded_array(Idx::INT);
    let v = pool.volatile_of(unbounded);
    let volatile_int = pool.volatile_of(Idx::INT);
    assert_eq!(pool.array_elem(v), Some(volatile_int));
}

#[test]
fn reference_collapsing() {
    let mut pool = Pool::new();
    let l = pool.lvalue_ref(Idx::INT);
    let r = pool.rvalue_ref(Idx::INT);

    assert_eq!(pool.lvalue_ref(l), l);
    assert_eq!(pool.lvalue_ref(r), l);
    assert_eq!(pool.rvalue_ref(l), l);
    assert_eq!(pool.rvalue_ref(r), r);
    assert_eq!(pool.reference(Idx::INT, RefKind::None), Idx::INT);
}

#[test]
fn pointer_to_reference_points_at_referent() {
    let mut pool = Pool::new();
    let r = pool.lvalue_ref(Idx::INT);
    let p = pool.pointer(Idx::INT);
    assert_eq!(pool.pointer(r), p);
    assert_eq!(pool.pointee(p), Some(Idx::INT));
}

#[test]
fn function_parameters_are_adjusted() {
    let mut pool = Pool::new();
    let const_float = pool.const_of(Idx::FLOAT);
    let plain = pool.function(&[Idx::FLOAT], Idx::DOUBLE);
    let with_const = pool.function(&[const_float], Idx::DOUBLE);
    assert_eq!(plain, with_const);

    let arr = pool.array(Idx::INT, 10);
    let by_array = pool.function(&[arr], Idx::VOID);
    let int_ptr = pool.pointer(Idx::INT);
    let by_pointer = pool.function(&[int_ptr], Idx::VOID);
    assert_eq!(by_array, by_pointer);

    let callback = pool.function(&[], Idx::VOID);
    let by_fn = pool.function(&[callback], Idx::VOID);
    let callback_ptr = pool.pointer(callback);
    let by_fn_ptr = pool.function(&[callback_ptr], Idx::VOID);
    assert_eq!(by_fn, by_fn_ptr);
}

#[test]
fn function_sig_round_trips_qualifiers() {
    let mut pool = Pool::new();
    let quals = FnQualifiers::CONST | FnQualifiers::LVALUE_REF;
    let f = pool.function_with(&[Idx::INT], Idx::VOID, quals);

    let sig = pool.function_sig(f);
    assert_eq!(
        sig,
        Some(FnSig {
            params: SmallVec::from_slice(&[Idx::INT]),
            ret: Idx::VOID,
            quals,
        })
    );

    let plain = pool.function(&[Idx::INT], Idx::VOID);
    assert_ne!(f, plain);
    if let Some(sig) = pool.function_sig(f) {
        assert_eq!(pool.function_from_sig(&sig), f);
    }
}

#[test]
fn member_pointer_parts() {
    let mut pool = Pool::new();
    let class = pool.declare_class(crate::ClassDecl::new("C", crate::ClassKey::Struct));
    let Ok(class) = class else {
        panic!("declaring a fresh class must succeed");
    };
    let mp = pool.member_pointer(class, Idx::INT);
    assert_eq!(pool.member_pointer_parts(mp), Some((class, Idx::INT)));

    let const_mp = pool.const_of(mp);
    assert_eq!(pool.member_pointer_parts(const_mp), Some((class, Idx::INT)));
    assert_eq!(pool.member_pointer_parts(Idx::INT), None);
}

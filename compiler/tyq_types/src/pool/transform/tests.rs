use super::*;
use pretty_assertions::assert_eq;

#[test]
fn qualifiers_look_through_arrays() {
    let mut pool = Pool::new();
    let const_int = pool.const_of(Idx::INT);
    let arr = pool.array(const_int, 4);
    assert_eq!(pool.qualifiers(arr), Qualifiers::CONST);
    assert_eq!(pool.qualifiers(Idx::INT), Qualifiers::empty());
}

#[test]
fn remove_cv_and_remove_const() {
    let mut pool = Pool::new();
    let cv_int = pool.qualified(Idx::INT, Qualifiers::CV);
    let v_int = pool.volatile_of(Idx::INT);

    assert_eq!(pool.remove_cv(cv_int), Idx::INT);
    assert_eq!(pool.remove_const(cv_int), v_int);

    let const_int = pool.const_of(Idx::INT);
    let arr = pool.array(const_int, 2);
    let plain = pool.array(Idx::INT, 2);
    assert_eq!(pool.remove_cv(arr), plain);
}

#[test]
fn remove_cv_keeps_pointee_qualifiers() {
    let mut pool = Pool::new();
    let const_int = pool.const_of(Idx::INT);
    let p = pool.pointer(const_int);
    assert_eq!(pool.remove_cv(p), p);
}

#[test]
fn remove_cvref_strips_both_layers() {
    let mut pool = Pool::new();
    let const_int = pool.const_of(Idx::INT);
    let r = pool.lvalue_ref(const_int);
    assert_eq!(pool.remove_reference(r), const_int);
    assert_eq!(pool.remove_cvref(r), Idx::INT);
}

#[test]
fn decay_rules() {
    let mut pool = Pool::new();
    let const_int = pool.const_of(Idx::INT);
    let r = pool.lvalue_ref(const_int);
    assert_eq!(pool.decay(r), Idx::INT);

    let arr = pool.array(Idx::CHAR, 8);
    let char_ptr = pool.pointer(Idx::CHAR);
    assert_eq!(pool.decay(arr), char_ptr);

    let f = pool.function(&[Idx::FLOAT], Idx::DOUBLE);
    let fp = pool.pointer(f);
    assert_eq!(pool.decay(f), fp);
}

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn same_type_passes_on_identical_descriptors() {
    let mut pool = Pool::new();
    let a = pool.const_of(Idx::INT);
    let b = pool.const_of(Idx::INT);
    assert_eq!(assert_same_type(&pool, a, b), Ok(()));
}

#[test]
fn same_type_reports_both_spellings() {
    let mut pool = Pool::new();
    let const_int = pool.const_of(Idx::INT);
    let const_ref = pool.lvalue_ref(const_int);
    let Err(failure) = assert_same_type(&pool, const_int, const_ref) else {
        panic!("const int and const int& compared equal");
    };
    assert_eq!(failure.to_string(), "expected 'const int&', found 'const int'");
}

#[test]
fn predicate_mismatch_message() {
    let mut pool = Pool::new();
    let ptr = pool.pointer(Idx::INT);
    assert_eq!(assert_predicate(&pool, Predicate::IsPointer, ptr, true), Ok(()));

    let Err(failure) = assert_predicate(&pool, Predicate::IsConst, ptr, true) else {
        panic!("int* reported const");
    };
    assert_eq!(failure.to_string(), "is_const<int*>: expected true, found false");
}

#[test]
fn deduction_errors_convert() {
    let failure: AssertionFailure = DeduceError::UnknownName("x".into()).into();
    assert_eq!(
        failure.to_string(),
        "deduction failed: use of undeclared identifier `x`"
    );
}

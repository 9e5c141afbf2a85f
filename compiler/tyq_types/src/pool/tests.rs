use super::*;

#[test]
fn fundamentals_are_pre_interned() {
    let pool = Pool::new();
    assert_eq!(pool.len(), Idx::FUNDAMENTAL_COUNT as usize);
    for idx in Idx::FUNDAMENTALS {
        assert!(pool.tag(idx).is_fundamental());
        assert_eq!(pool.tag(idx) as u32, idx.raw());
    }
}

#[test]
fn split_qualified_on_plain_type() {
    let pool = Pool::new();
    assert_eq!(pool.split_qualified(Idx::INT), (Idx::INT, Qualifiers::empty()));
    assert_eq!(pool.base_tag(Idx::INT), Tag::Int);
}

#[test]
fn accessors_reject_wrong_kinds() {
    let mut pool = Pool::new();
    let p = pool.pointer(Idx::INT);
    assert_eq!(pool.referent(p), None);
    assert_eq!(pool.array_elem(p), None);
    assert_eq!(pool.array_len(p), None);
    assert_eq!(pool.function_sig(p), None);
    assert_eq!(pool.member_pointer_parts(p), None);
    assert_eq!(pool.pointee(Idx::INT), None);
    assert!(pool.record(Idx::INT).is_none());
}

#[test]
fn const_pointer_still_has_pointee() {
    let mut pool = Pool::new();
    let p = pool.pointer(Idx::INT);
    let cp = pool.const_of(p);
    assert_ne!(p, cp);
    assert_eq!(pool.pointee(cp), Some(Idx::INT));
}

#[test]
fn clone_is_independent() {
    let mut pool = Pool::new();
    let p = pool.pointer(Idx::INT);
    let mut scratch = pool.clone();
    let extra = scratch.pointer(p);

    assert_eq!(scratch.pointer(Idx::INT), p);
    assert_eq!(pool.len() + 1, scratch.len());
    assert_eq!(scratch.pointee(extra), Some(p));
}

#[test]
fn named_lookup_covers_records_and_aliases() {
    let mut pool = Pool::new();
    let Ok(c1) = pool.declare_class(crate::ClassDecl::new("C1", crate::ClassKey::Class)) else {
        panic!("fresh declaration");
    };
    let fp = pool.function(&[Idx::FLOAT], Idx::DOUBLE);
    assert_eq!(pool.define_alias("callback", fp), Ok(fp));

    assert_eq!(pool.named("C1"), Some(c1));
    assert_eq!(pool.named("callback"), Some(fp));
    assert_eq!(pool.named("missing"), None);
    assert_eq!(pool.record(c1).map(crate::Record::name), Some("C1"));
}

use super::*;
use crate::{ClassDecl, ClassKey, EnumDecl, EnumKey, FnQualifiers, Qualifiers, UnionDecl};
use pretty_assertions::assert_eq;

fn class(pool: &mut Pool, decl: ClassDecl) -> Idx {
    match pool.declare_class(decl) {
        Ok(idx) => idx,
        Err(e) => panic!("{e}"),
    }
}

fn holds(pool: &Pool, ty: Idx) -> Vec<&'static str> {
    Predicate::ALL
        .into_iter()
        .filter(|p| p.eval(pool, ty))
        .map(Predicate::name)
        .collect()
}

#[test]
fn catalog_names_round_trip() {
    for p in Predicate::ALL {
        assert_eq!(Predicate::from_name(p.name()), Some(p));
        assert_eq!(p.to_string().parse::<Predicate>(), Ok(p));
    }
    assert_eq!(
        "is_fancy".parse::<Predicate>(),
        Err(UnknownPredicate("is_fancy".into()))
    );
}

#[test]
fn catalog_kinds() {
    assert!(Predicate::PRIMARY
        .iter()
        .all(|p| p.kind() == PredicateKind::Primary));
    let composite = Predicate::ALL
        .iter()
        .filter(|p| p.kind() == PredicateKind::Composite)
        .count();
    let property = Predicate::ALL
        .iter()
        .filter(|p| p.kind() == PredicateKind::Property)
        .count();
    assert_eq!((composite, property), (7, 7));
}

#[test]
fn fundamentals() {
    let pool = Pool::new();
    assert_eq!(holds(&pool, Idx::VOID), vec!["is_void", "is_fundamental"]);
    assert_eq!(
        holds(&pool, Idx::NULLPTR),
        vec!["is_null_pointer", "is_fundamental", "is_scalar", "is_object"]
    );
    assert_eq!(
        holds(&pool, Idx::INT),
        vec![
            "is_integral",
            "is_fundamental",
            "is_arithmetic",
            "is_scalar",
            "is_object",
            "is_signed"
        ]
    );
    assert_eq!(
        holds(&pool, Idx::BOOL),
        vec![
            "is_integral",
            "is_fundamental",
            "is_arithmetic",
            "is_scalar",
            "is_object",
            "is_unsigned"
        ]
    );
    assert!(pool.is_signed(Idx::LONG_DOUBLE));
    assert!(!pool.is_unsigned(Idx::LONG_DOUBLE));
    assert!(pool.is_signed(Idx::CHAR));
    assert!(pool.is_unsigned(Idx::CHAR16));
}

#[test]
fn cv_qualified_keep_their_category() {
    let mut pool = Pool::new();
    let cv_int = pool.qualified(Idx::INT, Qualifiers::CV);
    assert!(pool.is_integral(cv_int));
    assert!(pool.is_const(cv_int));
    assert!(pool.is_volatile(cv_int));

    let const_void = pool.const_of(Idx::VOID);
    assert!(pool.is_void(const_void));
    assert_eq!(pool.primary_category(const_void), Some(Predicate::IsVoid));
}

#[test]
fn const_is_top_level_only() {
    let mut pool = Pool::new();
    let const_int = pool.const_of(Idx::INT);
    let ptr_to_const = pool.pointer(const_int);
    let ref_to_const = pool.lvalue_ref(const_int);
    let const_ptr = pool.const_of(ptr_to_const);
    let const_arr = pool.array(const_int, 4);

    assert!(!pool.is_const(ptr_to_const));
    assert!(!pool.is_const(ref_to_const));
    assert!(pool.is_const(const_ptr));
    assert!(pool.is_const(const_arr));
}

#[test]
fn compound_categories() {
    let mut pool = Pool::new();
    let f = pool.function(&[Idx::FLOAT], Idx::DOUBLE);
    let fp = pool.pointer(f);
    let fr = pool.lvalue_ref(f);
    let arr = pool.unbounded_array(Idx::INT);
    let rref = pool.rvalue_ref(Idx::INT);

    assert_eq!(pool.primary_category(f), Some(Predicate::IsFunction));
    assert_eq!(pool.primary_category(fp), Some(Predicate::IsPointer));
    assert_eq!(pool.primary_category(fr), Some(Predicate::IsLvalueReference));
    assert_eq!(pool.primary_category(arr), Some(Predicate::IsArray));
    assert_eq!(pool.primary_category(rref), Some(Predicate::IsRvalueReference));

    assert!(!pool.is_object(f));
    assert!(!pool.is_object(fr));
    assert!(pool.is_object(arr));
    assert!(!pool.is_scalar(arr));
    assert!(pool.is_compound(fp));
    assert!(!pool.is_pointer(Idx::NULLPTR));
}

#[test]
fn member_pointers() {
    let mut pool = Pool::new();
    let c = class(&mut pool, ClassDecl::new("C", ClassKey::Class));
    let data = pool.member_pointer(c, Idx::INT);
    let method = pool.function_with(&[], Idx::VOID, FnQualifiers::CONST);
    let method_ptr = pool.member_pointer(c, method);
    let const_method_ptr = pool.const_of(method_ptr);

    assert!(pool.is_member_object_pointer(data));
    assert!(!pool.is_member_function_pointer(data));
    assert!(pool.is_member_function_pointer(const_method_ptr));
    assert!(pool.is_member_pointer(method_ptr));
    assert!(pool.is_scalar(method_ptr));
    assert!(!pool.is_pointer(method_ptr));
}

#[test]
fn nominal_categories() {
    let mut pool = Pool::new();
    let c = class(&mut pool, ClassDecl::new("C1", ClassKey::Class));
    let u = match pool.declare_union(UnionDecl::new("U1").field("i", Idx::INT)) {
        Ok(idx) => idx,
        Err(e) => panic!("{e}"),
    };
    let e = match pool.declare_enum(EnumDecl::new("E3", EnumKey::EnumClass).underlying(Idx::INT)) {
        Ok(idx) => idx,
        Err(e) => panic!("{e}"),
    };

    assert_eq!(pool.primary_category(c), Some(Predicate::IsClass));
    assert_eq!(pool.primary_category(u), Some(Predicate::IsUnion));
    assert_eq!(pool.primary_category(e), Some(Predicate::IsEnum));
    assert!(!pool.is_class(u));
    assert!(pool.is_scalar(e));
    assert!(!pool.is_integral(e));
    assert!(!pool.is_signed(e));
    assert!(pool.is_empty_class(c));
    assert!(!pool.is_empty_class(u));
}

#[test]
fn class_properties_require_a_class() {
    let mut pool = Pool::new();
    let run = pool.function(&[], Idx::VOID);
    let c = class(
        &mut pool,
        ClassDecl::new("I", ClassKey::Struct).pure_virtual("run", run),
    );
    let ptr = pool.pointer(c);
    let const_c = pool.const_of(c);

    assert!(pool.is_abstract(c));
    assert!(pool.is_abstract(const_c));
    assert!(pool.is_polymorphic(c));
    assert!(!pool.is_empty_class(c));
    assert!(!pool.is_abstract(ptr));
    assert!(!pool.is_polymorphic(ptr));
}

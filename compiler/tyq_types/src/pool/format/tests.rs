use super::*;
use crate::{ClassDecl, ClassKey, FnQualifiers, Qualifiers};
use pretty_assertions::assert_eq;

fn class(pool: &mut Pool, name: &str) -> Idx {
    match pool.declare_class(ClassDecl::new(name, ClassKey::Struct)) {
        Ok(idx) => idx,
        Err(e) => panic!("{e}"),
    }
}

#[test]
fn format_fundamentals() {
    let pool = Pool::new();
    assert_eq!(pool.format_type(Idx::VOID), "void");
    assert_eq!(pool.format_type(Idx::ULONG_LONG), "unsigned long long");
    assert_eq!(pool.format_type(Idx::LONG_DOUBLE), "long double");
    assert_eq!(pool.format_type(Idx::NULLPTR), "std::nullptr_t");
}

#[test]
fn format_foreign_handles_without_panicking() {
    let pool = Pool::new();
    assert_eq!(pool.format_type(Idx::NONE), "<none>");
    let foreign = Idx::from_raw(Idx::FIRST_DYNAMIC + 40);
    assert_eq!(pool.format_type(foreign), foreign.to_string());
}

#[test]
fn format_qualified_leaves() {
    let mut pool = Pool::new();
    let c = pool.const_of(Idx::INT);
    let v = pool.volatile_of(Idx::VOID);
    let cv = pool.qualified(Idx::INT, Qualifiers::CV);
    assert_eq!(pool.format_type(c), "const int");
    assert_eq!(pool.format_type(v), "volatile void");
    assert_eq!(pool.format_type(cv), "const volatile int");
}

#[test]
fn format_pointers_and_references() {
    let mut pool = Pool::new();
    let const_int = pool.const_of(Idx::INT);
    let p = pool.pointer(Idx::INT);
    let pp = pool.pointer(p);
    let pc = pool.pointer(const_int);
    let cp = pool.const_of(p);
    let pcp = pool.pointer(cp);
    let lr = pool.lvalue_ref(const_int);
    let rr = pool.rvalue_ref(Idx::INT);
    let rcp = pool.lvalue_ref(cp);

    assert_eq!(pool.format_type(p), "int*");
    assert_eq!(pool.format_type(pp), "int**");
    assert_eq!(pool.format_type(pc), "const int*");
    assert_eq!(pool.format_type(cp), "int* const");
    assert_eq!(pool.format_type(pcp), "int* const*");
    assert_eq!(pool.format_type(lr), "const int&");
    assert_eq!(pool.format_type(rr), "int&&");
    assert_eq!(pool.format_type(rcp), "int* const&");
}

#[test]
fn format_arrays() {
    let mut pool = Pool::new();
    let c1 = class(&mut pool, "C1");
    let a = pool.array(Idx::INT, 10);
    let u = pool.unbounded_array(c1);
    let pa = pool.pointer(a);
    let ra = pool.lvalue_ref(a);

    assert_eq!(pool.format_type(a), "int[10]");
    assert_eq!(pool.format_type(u), "C1[]");
    assert_eq!(pool.format_type(pa), "int (*)[10]");
    assert_eq!(pool.format_type(ra), "int (&)[10]");
}

#[test]
fn format_functions() {
    let mut pool = Pool::new();
    let f = pool.function(&[Idx::FLOAT], Idx::DOUBLE);
    let fp = pool.pointer(f);
    let returns_fp = pool.function(&[Idx::INT, Idx::INT], fp);
    let const_char = pool.const_of(Idx::CHAR);
    let c_str = pool.pointer(const_char);
    let printf_like = pool.function_with(&[c_str], Idx::INT, FnQualifiers::VARIADIC);
    let bare_variadic = pool.function_with(&[], Idx::VOID, FnQualifiers::VARIADIC);

    assert_eq!(pool.format_type(f), "double(float)");
    assert_eq!(pool.format_type(fp), "double (*)(float)");
    assert_eq!(pool.format_type(returns_fp), "double (*(int, int))(float)");
    assert_eq!(pool.format_type(printf_like), "int(const char*, ...)");
    assert_eq!(pool.format_type(bare_variadic), "void(...)");
}

#[test]
fn format_member_pointers() {
    let mut pool = Pool::new();
    let c2 = class(&mut pool, "C2");
    let vector = class(&mut pool, "std::vector<int>");

    let data = pool.member_pointer(c2, Idx::INT);
    let vec_data = pool.member_pointer(c2, vector);
    let method = pool.function(&[], Idx::VOID);
    let const_method = pool.function_with(&[Idx::INT], Idx::VOID, FnQualifiers::CONST);
    let rvalue_method = pool.function_with(
        &[],
        Idx::VOID,
        FnQualifiers::CONST | FnQualifiers::VOLATILE | FnQualifiers::RVALUE_REF,
    );
    let mfp = pool.member_pointer(c2, method);
    let cmfp = pool.member_pointer(c2, const_method);
    let rmfp = pool.member_pointer(c2, rvalue_method);
    let const_data = pool.const_of(data);

    assert_eq!(pool.format_type(data), "int C2::*");
    assert_eq!(pool.format_type(vec_data), "std::vector<int> C2::*");
    assert_eq!(pool.format_type(mfp), "void (C2::*)()");
    assert_eq!(pool.format_type(cmfp), "void (C2::*)(int) const");
    assert_eq!(pool.format_type(rmfp), "void (C2::*)() const volatile &&");
    assert_eq!(pool.format_type(const_data), "int C2::* const");
}

#[test]
fn format_qualified_records() {
    let mut pool = Pool::new();
    let c2 = class(&mut pool, "C2");
    let cc2 = pool.const_of(c2);
    let r = pool.lvalue_ref(cc2);
    let p = pool.pointer(cc2);
    assert_eq!(pool.format_type(r), "const C2&");
    assert_eq!(pool.format_type(p), "const C2*");
}

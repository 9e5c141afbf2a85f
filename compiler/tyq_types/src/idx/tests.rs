use super::*;

#[test]
fn fundamental_indices_match_tags() {
    for (idx, tag) in Idx::FUNDAMENTALS.iter().zip(FUNDAMENTAL_TAGS) {
        assert_eq!(idx.raw(), u32::from(tag as u8));
    }
    assert_eq!(Idx::VOID.raw(), 0);
    assert_eq!(Idx::NULLPTR.raw(), 19);
}

#[test]
fn fundamental_check_works() {
    assert!(Idx::VOID.is_fundamental());
    assert!(Idx::NULLPTR.is_fundamental());
    assert!(!Idx::from_raw(Idx::FIRST_DYNAMIC).is_fundamental());
    assert!(!Idx::from_raw(1000).is_fundamental());
}

#[test]
fn none_sentinel_works() {
    assert!(Idx::NONE.is_none());
    assert!(!Idx::INT.is_none());
    assert!(!Idx::from_raw(1000).is_none());
}

#[test]
fn names_and_display() {
    assert_eq!(Idx::LONG_LONG.name(), Some("long long"));
    assert_eq!(Idx::from_raw(500).name(), None);
    assert_eq!(Idx::INT.to_string(), "int");
    assert_eq!(Idx::from_raw(500).to_string(), "type#500");
    assert_eq!(Idx::NONE.to_string(), "<none>");
    assert_eq!(format!("{:?}", Idx::DOUBLE), "Idx(double)");
}

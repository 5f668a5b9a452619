use crate::support::{addr, err, messages, other, slice, unregistered, Other, Unregistered};
use error_slice::{
    coerce, coerce_fast, error_sequence, is_registered, register_sequence, BoxError, ErrorSlice,
};


#[test]
fn fast_absent_stays_absent() {
    assert!(coerce_fast(None).is_none());
}

#[test]
fn fast_canonical_is_identity() {
    // three elements spill to the heap, so the buffer address survives the move
    let errors = slice(&["one", "two", "three"]);
    let buffer = errors.as_ptr();

    let back = coerce_fast(Some(errors.into_error())).unwrap();
    assert_eq!(back.as_ptr(), buffer);
    assert_eq!(messages(&back), ["one", "two", "three"]);
}

#[test]
fn fast_plain_error_is_wrapped() {
    let e = err("one");
    let before = addr(&e);

    let errors = coerce_fast(Some(e)).unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(addr(&errors[0]), before);
}

#[test]
fn fast_does_not_see_foreign_lists() {
    let errors = coerce_fast(Some(other(&["one", "two"]))).unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.to_string(), "other: (one, two)");
}

#[test]
fn fast_empty_slice_is_present_but_empty() {
    let errors = coerce_fast(Some(ErrorSlice::new().into_error())).unwrap();
    assert!(errors.is_empty());
    assert_eq!(errors.to_string(), "");
}

#[test]
fn coerce_absent_stays_absent() {
    assert!(coerce(None).is_none());
}

#[test]
fn coerce_canonical_is_identity() {
    let errors = slice(&["one", "two", "three"]);
    let buffer = errors.as_ptr();

    let back = coerce(Some(errors.into_error())).unwrap();
    assert_eq!(back.as_ptr(), buffer);
}

#[test]
fn coerce_plain_error_is_wrapped() {
    let errors = coerce(Some(err("one"))).unwrap();
    assert_eq!(messages(&errors), ["one"]);
}

#[test]
fn coerce_flattens_registered_foreign_list() {
    let errors = coerce(Some(other(&["one", "two"]))).unwrap();
    assert_eq!(messages(&errors), ["one", "two"]);
    assert_eq!(errors.to_string(), "one and two");
}

#[test]
fn coerce_keeps_element_identity_when_flattening() {
    let one = err("one");
    let one_addr = addr(&one);
    register_sequence::<Other>();
    let foreign: BoxError = Box::new(Other(vec![one, err("two")]));

    let errors = coerce(Some(foreign)).unwrap();
    assert_eq!(addr(&errors[0]), one_addr);
}

#[test]
fn coerce_wraps_unregistered_foreign_list() {
    assert!(!is_registered::<Unregistered>());
    let errors = coerce(Some(unregistered(&["one", "two"]))).unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.to_string(), "unregistered: 2 errors");
}

#[test]
fn coerce_flattens_only_one_level() {
    let nested = slice(&["x", "y"]).into_error();
    let mut outer = ErrorSlice::new();
    outer.push(err("a"));
    outer.push(nested);

    let errors = coerce(Some(outer.into_error())).unwrap();
    assert_eq!(errors.len(), 2);
    assert!(errors[1].is::<ErrorSlice>());
}

#[test]
fn from_error_methods_match_free_functions() {
    assert_eq!(ErrorSlice::from_error(other(&["one", "two"])).len(), 2);
    assert_eq!(ErrorSlice::from_error_fast(other(&["one", "two"])).len(), 1);
}

#[test]
fn from_sequence_needs_no_registration() {
    #[derive(Debug)]
    struct Local(Vec<BoxError>);

    impl std::fmt::Display for Local {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("local")
        }
    }

    impl std::error::Error for Local {}

    error_sequence!(Local);

    let errors = ErrorSlice::from_sequence(Local(vec![err("one"), err("two"), err("three")]));
    assert!(!is_registered::<Local>());
    assert_eq!(errors.to_string(), "one, two, and three");
}

#[test]
fn iterating_coerced_errors_prints_each() {
    let merged = error_slice::append([Some(err("no writing!")), Some(err("no closing!"))]);

    let lines: Vec<String> =
        coerce(merged).into_iter().flatten().map(|e| format!("Error: {e}")).collect();
    assert_eq!(lines, ["Error: no writing!", "Error: no closing!"]);
}

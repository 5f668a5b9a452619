use crate::support::{addr, err, messages, other, slice, some, unregistered};
use error_slice::{append, append2, coerce, coerce_fast, BoxError, ErrorSlice};


fn rendered(errs: Vec<Option<BoxError>>) -> Option<String> {
    append(errs).map(|e| e.to_string())
}

#[test]
fn append_table() {
    let cases: Vec<(Vec<Option<BoxError>>, Option<&str>)> = vec![
        (vec![None], None),
        (vec![None, None], None),
        (vec![None, None, None], None),
        (vec![some("one")], Some("one")),
        (vec![some("one"), some("two")], Some("one and two")),
        (vec![some("one"), some("two"), some("three")], Some("one, two, and three")),
        (vec![some("one"), None], Some("one")),
        (vec![None, some("one")], Some("one")),
        (vec![some("one"), some("two"), None], Some("one and two")),
        (vec![Some(slice(&["one", "two"]).into_error()), some("three")], Some("one, two, and three")),
        (vec![Some(other(&["one", "two"])), some("three")], Some("one, two, and three")),
        (vec![some("one"), Some(slice(&["two", "three"]).into_error())], Some("one, two, and three")),
    ];

    for (i, (input, want)) in cases.into_iter().enumerate() {
        assert_eq!(rendered(input).as_deref(), want, "case {i}");
    }
}

#[test]
fn no_inputs_is_absent() {
    assert!(append(Vec::new()).is_none());
    assert!(append(std::iter::empty()).is_none());
}

#[test]
fn all_absent_is_absent_for_any_count() {
    for n in 0..8 {
        assert!(append((0..n).map(|_| None)).is_none(), "n = {n}");
    }
}

#[test]
fn lone_error_is_returned_unchanged_in_any_position() {
    for position in 0..4 {
        let e = err("one");
        let before = addr(&e);

        let mut input: Vec<Option<BoxError>> = (0..4).map(|_| None).collect();
        input[position] = Some(e);

        let out = append(input).unwrap();
        assert_eq!(addr(&out), before, "position {position}");
        assert!(!out.is::<ErrorSlice>());
    }
}

#[test]
fn lone_error_slice_is_not_copied() {
    let errors = slice(&["one", "two", "three"]);
    let buffer = errors.as_ptr();
    let boxed = errors.into_error();
    let before = addr(&boxed);

    let out = append([None, Some(boxed), None]).unwrap();
    assert_eq!(addr(&out), before);
    assert_eq!(coerce_fast(Some(out)).unwrap().as_ptr(), buffer);
}

#[test]
fn lone_foreign_list_keeps_its_type() {
    let out = append([Some(other(&["one", "two"]))]).unwrap();
    assert_eq!(out.to_string(), "other: (one, two)");
}

#[test]
fn two_errors_build_a_slice() {
    let out = append([some("one"), some("two")]).unwrap();
    let errors = out.downcast::<ErrorSlice>().unwrap();
    assert_eq!(messages(&errors), ["one", "two"]);
}

#[test]
fn merged_elements_are_the_original_boxes() {
    let one = err("one");
    let two = err("two");
    let (a, b) = (addr(&one), addr(&two));

    let errors = coerce(append([Some(one), None, Some(two)])).unwrap();
    assert_eq!(addr(&errors[0]), a);
    assert_eq!(addr(&errors[1]), b);
}

#[test]
fn seed_slice_storage_is_reused() {
    // spilled with spare room, so appending one more does not reallocate
    let mut errors = ErrorSlice::with_capacity(8);
    for msg in ["one", "two", "three"] {
        errors.push_error(msg);
    }
    let buffer = errors.as_ptr();

    let out = append([Some(errors.into_error()), some("four")]).unwrap();
    let out = coerce_fast(Some(out)).unwrap();
    assert_eq!(out.as_ptr(), buffer);
    assert_eq!(out.to_string(), "one, two, three, and four");
}

#[test]
fn seed_foreign_list_is_flattened() {
    let out = append([None, Some(other(&["one", "two"])), some("three")]).unwrap();
    let errors = coerce_fast(Some(out)).unwrap();
    assert_eq!(messages(&errors), ["one", "two", "three"]);
}

#[test]
fn tail_foreign_list_is_kept_opaque() {
    let out = append([some("zero"), some("one"), Some(other(&["two", "three"]))]).unwrap();
    let errors = coerce_fast(Some(out)).unwrap();
    assert_eq!(messages(&errors), ["zero", "one", "other: (two, three)"]);
}

#[test]
fn second_foreign_list_is_kept_opaque() {
    let out = append([some("zero"), Some(other(&["one", "two"]))]).unwrap();
    let errors = coerce_fast(Some(out)).unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.to_string(), "zero and other: (one, two)");
}

#[test]
fn unregistered_seed_is_kept_opaque() {
    let out = append([Some(unregistered(&["a", "b"])), some("c")]).unwrap();
    let errors = coerce_fast(Some(out)).unwrap();
    assert_eq!(messages(&errors), ["unregistered: 2 errors", "c"]);
}

#[test]
fn every_slice_in_the_tail_is_flattened() {
    let out = append([
        some("a"),
        Some(slice(&["b", "c"]).into_error()),
        None,
        Some(slice(&["d"]).into_error()),
        some("e"),
    ])
    .unwrap();
    assert_eq!(out.to_string(), "a, b, c, d, and e");
}

#[test]
fn flattening_is_one_level_deep() {
    let mut outer = slice(&["b"]);
    outer.push(slice(&["c", "d"]).into_error());

    let out = append([some("a"), Some(outer.into_error())]).unwrap();
    let errors = coerce_fast(Some(out)).unwrap();
    assert_eq!(errors.len(), 3);
    assert!(errors[2].is::<ErrorSlice>());
    assert_eq!(errors.to_string(), "a, b, and c and d");
}

#[test]
fn empty_slices_contribute_nothing_but_count_as_present() {
    let out = append([Some(ErrorSlice::new().into_error()), some("one")]).unwrap();
    let errors = coerce_fast(Some(out)).unwrap();
    assert_eq!(messages(&errors), ["one"]);
}

#[test]
fn merging_twice_stays_flat() {
    let first = append([some("one"), some("two")]);
    let second = append([first, some("three")]);
    let third = append([some("zero"), second]).unwrap();

    let errors = coerce_fast(Some(third)).unwrap();
    assert_eq!(messages(&errors), ["zero", "one", "two", "three"]);
}

#[test]
fn append2_matches_append() {
    assert!(append2(None, None).is_none());

    let e = err("one");
    let before = addr(&e);
    assert_eq!(addr(&append2(None, Some(e)).unwrap()), before);

    let e = err("one");
    let before = addr(&e);
    assert_eq!(addr(&append2(Some(e), None).unwrap()), before);

    let merged = append2(Some(slice(&["one", "two"]).into_error()), some("three")).unwrap();
    assert_eq!(merged.to_string(), "one, two, and three");

    let merged = append2(Some(other(&["one", "two"])), some("three")).unwrap();
    assert_eq!(merged.to_string(), "one, two, and three");
}

#[test]
fn end_to_end_scenario() {
    let out = append([some("one"), some("two"), some("three")]).unwrap();
    assert_eq!(out.to_string(), "one, two, and three");

    let e1 = err("one");
    let before = addr(&e1);
    assert_eq!(addr(&append([Some(e1), None]).unwrap()), before);

    let out = append([Some(slice(&["one", "two"]).into_error()), some("three")]).unwrap();
    assert_eq!(out.to_string(), "one, two, and three");

    let foreign = other(&["one", "two"]);
    assert_eq!(foreign.to_string(), "other: (one, two)");
    let out = append([Some(foreign), some("three")]).unwrap();
    assert_eq!(out.to_string(), "one, two, and three");
}

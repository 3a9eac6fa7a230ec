//! Integration tests for Tuple arity invariants and slot semantics.

#![cfg(feature = "control")]

use algebox::control::{MAX_SIZE, Tuple, TupleFamily, tuple2, tuple3, tuple5, tuple10};
use algebox::typeclass::{
    ErrorKind, Function, Functor, Semigroup, Setoid, Value, is_same_type,
};
use proptest::prelude::*;
use rstest::rstest;

fn numbered(count: usize) -> Vec<Value> {
    (1..=count).map(|n| Value::from(format!("slot-{n}"))).collect()
}

// =============================================================================
// Arity
// =============================================================================

#[rstest]
fn every_supported_arity_constructs_and_projects() {
    for size in 1..=MAX_SIZE {
        let family = TupleFamily::new(size).unwrap();
        let values = numbered(size);
        let tuple = family.construct(values.clone()).unwrap();

        assert_eq!(tuple.size(), size);
        assert_eq!(tuple.tag().name(), format!("{size}-Tuple"));
        for (index, value) in values.iter().enumerate() {
            assert_eq!(&tuple.project(index as i64 + 1).unwrap(), value);
        }
    }
}

#[rstest]
fn every_supported_arity_rejects_wrong_counts() {
    for size in 1..=MAX_SIZE {
        let family = TupleFamily::new(size).unwrap();

        let too_few = family.construct(numbered(size - 1)).unwrap_err();
        assert_eq!(too_few.kind(), ErrorKind::Construction);
        assert_eq!(
            too_few.to_string(),
            format!("{size}-Tuple: Expected {size} values, but got {}", size - 1)
        );

        let too_many = family.construct(numbered(size + 1)).unwrap_err();
        assert_eq!(too_many.kind(), ErrorKind::Construction);
    }
}

#[rstest]
#[case(0)]
#[case(11)]
#[case(100)]
fn family_selection_fails_before_construction(#[case] size: usize) {
    assert_eq!(
        TupleFamily::new(size).unwrap_err().kind(),
        ErrorKind::Construction
    );
}

#[rstest]
fn tuples_of_different_arity_are_different_types() {
    let two = Value::from(tuple2(1, 2));
    let three = Value::from(tuple3(1, 2, 3));
    let other_two = Value::from(tuple2("a", "b"));

    assert!(!is_same_type(&two, &three));
    assert!(is_same_type(&two, &other_two));
    assert_eq!(two.type_tag().qualified(), three.type_tag().qualified());
}

// =============================================================================
// map targets the last slot only
// =============================================================================

#[rstest]
fn map_changes_last_slot_not_every_slot() {
    let mapped = tuple3(1, 2, 3)
        .map(&Function::lift(|n: i64| n * 10))
        .unwrap();

    assert_eq!(
        mapped.to_array(),
        vec![Value::from(1), Value::from(2), Value::from(30)]
    );
    assert_ne!(
        mapped.to_array(),
        vec![Value::from(10), Value::from(20), Value::from(30)]
    );
}

#[rstest]
fn map_on_ten_slots_leaves_first_nine() {
    let mapped = tuple10(1, 2, 3, 4, 5, 6, 7, 8, 9, 10)
        .map(&Function::lift(|n: i64| -n))
        .unwrap();
    let slots = mapped.to_array();

    assert_eq!(slots[..9], (1..=9_i64).map(Value::from).collect::<Vec<_>>()[..]);
    assert_eq!(slots[9], Value::from(-10));
}

#[rstest]
fn map_all_is_how_every_slot_changes() {
    let times_ten = Function::lift(|n: i64| n * 10);
    let mapped = tuple3(1, 2, 3)
        .map_all(&[times_ten.clone(), times_ten.clone(), times_ten])
        .unwrap();
    assert_eq!(
        mapped.to_array(),
        vec![Value::from(10), Value::from(20), Value::from(30)]
    );
}

// =============================================================================
// concat
// =============================================================================

#[rstest]
fn concat_of_array_slots() {
    let left = tuple2(vec![Value::from(1)], vec![Value::from(2)]);
    let right = tuple2(vec![Value::from(3)], vec![Value::from(4)]);

    let combined = left.concat(&Value::from(right)).unwrap();
    assert_eq!(
        Value::from(combined.to_array()),
        Value::from(vec![
            Value::from(vec![Value::from(1), Value::from(3)]),
            Value::from(vec![Value::from(2), Value::from(4)]),
        ])
    );
}

#[rstest]
fn concat_of_nested_tuples() {
    let left = tuple2("a", tuple2("b", vec![Value::from(1)]));
    let right = tuple2("c", tuple2("d", vec![Value::from(2)]));

    let combined = left.concat(&Value::from(right)).unwrap();
    assert_eq!(
        combined.to_string(),
        r#"Tuple( "ac", Tuple( "bd", [ 1, 2 ] ) )"#
    );
}

#[rstest]
#[case(tuple2(1, "a"), tuple2(2, "b"))]
#[case(tuple2("a", ()), tuple2("b", ()))]
#[case(tuple2("a", "b"), tuple2("c", vec![Value::from(1)]))]
fn concat_rejects_slots_that_cannot_combine(#[case] left: Tuple, #[case] right: Tuple) {
    let error = left.concat(&Value::from(right)).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::CapabilityViolation);
}

#[rstest]
fn concat_is_associative_for_text_slots() {
    let a = tuple2("a", "1");
    let b = tuple2("b", "2");
    let c = tuple2("c", "3");

    let left = a
        .concat(&Value::from(b.clone()))
        .unwrap()
        .concat(&Value::from(c.clone()))
        .unwrap();
    let right = a
        .concat(&Value::from(b.concat(&Value::from(c)).unwrap()))
        .unwrap();

    assert!(left.equals(&Value::from(right)));
}

// =============================================================================
// to_array and merge
// =============================================================================

#[rstest]
fn to_array_is_a_copy() {
    let tuple = tuple5(1, 2, 3, 4, 5);
    let mut slots = tuple.to_array();
    slots.clear();

    assert_eq!(tuple.size(), 5);
    assert_eq!(tuple.project(5).unwrap(), Value::from(5));
}

#[rstest]
fn merge_receives_positional_slots() {
    let join = Function::variadic(|arguments| {
        let text = arguments
            .into_iter()
            .map(String::try_from)
            .collect::<Result<Vec<_>, _>>()?
            .join("-");
        Ok(Value::from(text))
    });

    assert_eq!(
        tuple3("a", "b", "c").merge(&join).unwrap(),
        Value::from("a-b-c")
    );
}

proptest! {
    #[test]
    fn prop_project_returns_each_argument(values in prop::collection::vec(any::<i64>(), 1..=10)) {
        let tuple = TupleFamily::new(values.len())
            .unwrap()
            .construct(values.iter().copied().map(Value::from).collect())
            .unwrap();

        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(tuple.project(index as i64 + 1).unwrap(), Value::from(*value));
        }
        prop_assert!(tuple.project(0).is_err());
        prop_assert!(tuple.project(values.len() as i64 + 1).is_err());
    }
}

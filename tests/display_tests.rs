//! Integration tests for Display and inspect representations.
//!
//! Every container renders as `"TypeName contents"`, with nested values
//! rendered recursively.

#![cfg(feature = "control")]

use algebox::control::{Pair, StarFamily, tuple1, tuple3};
use algebox::typeclass::{Function, Identity, Value, inspect};
use rstest::rstest;

// =============================================================================
// Containers
// =============================================================================

#[rstest]
#[case(Value::from(Identity::new(3)), "Identity 3")]
#[case(Value::from(Identity::new(Value::Unit)), "Identity ()")]
#[case(Value::from(Identity::new(vec![])), "Identity []")]
#[case(Value::from(Identity::new(Function::identity())), "Identity Function")]
#[case(Value::from(tuple1(true)), "Tuple( true )")]
#[case(Value::from(tuple3(1, "a", 2.5)), r#"Tuple( 1, "a", 2.5 )"#)]
#[case(Value::from(Pair::new(1, 2)), "Pair( 1, 2 )")]
fn container_display(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
    assert_eq!(format!("{value:?}"), expected);
}

#[rstest]
fn nested_containers_render_recursively() {
    let nested = Identity::new(tuple3(Identity::new(1), Pair::new("a", vec![Value::from(2)]), ()));
    assert_eq!(
        nested.to_string(),
        r#"Identity Tuple( Identity 1, Pair( "a", [ 2 ] ), () )"#
    );
}

#[rstest]
fn star_renders_family_and_function() {
    let family = StarFamily::new(&Identity::type_rep()).unwrap();
    let star = family.construct(Function::new(|value| Identity::new(value).into()));
    assert_eq!(star.to_string(), "Star( Identity ) Function");
}

// =============================================================================
// Type representatives
// =============================================================================

#[rstest]
fn type_representatives_render_their_name() {
    let family = StarFamily::new(&Identity::type_rep()).unwrap();
    assert_eq!(Identity::type_rep().to_string(), "Identity");
    assert_eq!(family.type_rep().to_string(), "Star( Identity )");
    assert_eq!(Pair::type_rep().to_string(), "Pair");
}

#[rstest]
fn inspect_prefixes_a_space() {
    assert_eq!(inspect(&Value::from(Identity::new(1))), " Identity 1");
    assert_eq!(inspect(&Value::from(vec![Value::from("a")])), r#" [ "a" ]"#);
}

//! Diagnostic string representation.
//!
//! Containers render as `"TypeName contents"`, with nested values rendered
//! recursively: `Identity 3`, `Identity [ 1, "a" ]`, `Tuple( 1, Identity 2 )`.

use super::value::Value;

/// Renders a value with a leading space, ready to follow a type name.
///
/// # Examples
///
/// ```rust
/// use algebox::typeclass::{inspect, Value};
///
/// assert_eq!(inspect(&Value::from(3)), " 3");
/// assert_eq!(inspect(&Value::from("a")), r#" "a""#);
/// assert_eq!(format!("Box{}", inspect(&Value::Unit)), "Box ()");
/// ```
pub fn inspect(value: &Value) -> String {
    format!(" {}", render(value))
}

/// Renders a value without any surrounding whitespace.
pub(crate) fn render(value: &Value) -> String {
    match value {
        Value::Unit => "()".to_owned(),
        Value::Boolean(boolean) => boolean.to_string(),
        Value::Integer(number) => number.to_string(),
        Value::Float(number) => number.to_string(),
        Value::Text(text) => format!("\"{text}\""),
        Value::Array(items) if items.is_empty() => "[]".to_owned(),
        Value::Array(items) => format!("[{} ]", join(items)),
        Value::Function(_) => "Function".to_owned(),
        Value::Type(representative) => representative.type_tag().name().to_owned(),
        Value::Instance(instance) => instance.inspect(),
    }
}

/// Renders each value with its leading space and joins them with commas.
pub(crate) fn join(values: &[Value]) -> String {
    values.iter().map(inspect).collect::<Vec<_>>().join(",")
}

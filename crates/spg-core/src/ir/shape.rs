use indexmap::IndexMap;
use serde_json::Value;

use crate::transform::sanitize::sanitize_object_key;

/// Structural type inferred from one example JSON value.
///
/// The tree mirrors the example's nesting up to the configured depth
/// ceiling; at the ceiling, remaining structure collapses to [`Shape::Opaque`]
/// instead of expanding further. Rendering to declaration text is a
/// generator concern; see `spg-dts`.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    String,
    Number,
    Boolean,
    /// The example value was null; nothing further is known.
    NullableAny,
    /// Unrecognized value kind, or an array whose first element is one.
    Any,
    /// Structure elided at the depth ceiling.
    Opaque,
    Array(Box<Shape>),
    /// Fields in insertion order, keys already sanitized.
    Object(IndexMap<String, Shape>),
}

/// Infer the shape of an example value, expanding nested structure to at
/// most `ceiling` levels.
pub fn infer_shape(value: &Value, ceiling: usize) -> Shape {
    infer_at(value, 0, ceiling)
}

fn infer_at(value: &Value, depth: usize, ceiling: usize) -> Shape {
    match value {
        Value::Object(map) => {
            let mut fields = IndexMap::new();
            for (key, field) in map {
                let shape = match field {
                    Value::Object(_) if at_ceiling(depth, ceiling) => Shape::Opaque,
                    Value::Array(items)
                        if items.first().is_some_and(Value::is_object)
                            && at_ceiling(depth, ceiling) =>
                    {
                        Shape::Array(Box::new(Shape::Opaque))
                    }
                    other => infer_at(other, depth + 1, ceiling),
                };
                fields.insert(sanitize_object_key(key), shape);
            }
            Shape::Object(fields)
        }
        Value::Array(items) => match items.first() {
            // Only the first element is consulted, even when the array is
            // heterogeneous.
            Some(first @ Value::Object(_)) => {
                if at_ceiling(depth, ceiling) {
                    Shape::Array(Box::new(Shape::Opaque))
                } else {
                    Shape::Array(Box::new(infer_at(first, depth + 1, ceiling)))
                }
            }
            Some(Value::String(_)) => Shape::Array(Box::new(Shape::String)),
            Some(Value::Number(_)) => Shape::Array(Box::new(Shape::Number)),
            Some(Value::Bool(_)) => Shape::Array(Box::new(Shape::Boolean)),
            Some(_) | None => Shape::Array(Box::new(Shape::Any)),
        },
        Value::String(_) => Shape::String,
        Value::Number(_) => Shape::Number,
        Value::Bool(_) => Shape::Boolean,
        Value::Null => Shape::NullableAny,
    }
}

/// True when the current depth may no longer expand nested records.
fn at_ceiling(depth: usize, ceiling: usize) -> bool {
    depth + 1 >= ceiling
}

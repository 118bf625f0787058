use spg_core::ir::Shape;

/// Render an inferred [`Shape`] as a TypeScript type expression.
///
/// `level` is the current nesting level; level 0 is the return-type
/// position of a signature line, which is indented by one tab. Each
/// nested record adds four spaces.
pub fn shape_to_ts(shape: &Shape, level: usize) -> String {
    match shape {
        Shape::String => "string".to_string(),
        Shape::Number => "number".to_string(),
        Shape::Boolean => "boolean".to_string(),
        Shape::Any => "any".to_string(),
        Shape::NullableAny => "any | null".to_string(),
        Shape::Opaque => "object".to_string(),
        Shape::Array(inner) => format!("Array<{}>", shape_to_ts(inner, level)),
        Shape::Object(fields) => {
            let mut out = String::from("{\n");
            for (key, field) in fields {
                out.push_str(&indent(level + 1));
                out.push_str(key);
                out.push_str(": ");
                out.push_str(&shape_to_ts(field, level + 1));
                out.push_str(";\n");
            }
            out.push_str(&indent(level));
            out.push('}');
            out
        }
    }
}

fn indent(level: usize) -> String {
    format!("\t{}", "    ".repeat(level))
}

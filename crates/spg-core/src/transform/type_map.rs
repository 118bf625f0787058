/// Equivalence table from lower-cased source type names to canonical
/// target types. First exact match wins; order mirrors the source
/// vocabulary.
const TYPE_TABLE: &[(&str, &str)] = &[
    ("string", "string"),
    ("number", "number"),
    ("integer", "number"),
    ("int", "number"),
    ("long", "number"),
    ("float", "number"),
    ("double", "number"),
    ("biginteger", "number"),
    ("boolean", "boolean"),
    ("bool", "boolean"),
    ("nativeobject", "Object"),
    ("nativearray", "Array<any>"),
    ("stringarray", "Array<string>"),
    ("numberarray", "Array<number>"),
    ("integerarray", "Array<number>"),
    ("intarray", "Array<number>"),
    ("longarray", "Array<number>"),
    ("floatarray", "Array<number>"),
    ("doublearray", "Array<number>"),
    ("bigintegerarray", "Array<number>"),
    ("booleanarray", "Array<boolean>"),
    ("boolarray", "Array<boolean>"),
    ("map", "Map<any, any>"),
    ("list", "Array<any>"),
];

/// Normalize a raw parameter type into a target type expression.
///
/// A `|`-delimited raw type becomes a union of quoted string literals in
/// source order and never consults the equivalence table. Anything else
/// is matched case-insensitively against the table; unmatched values pass
/// through trimmed with their original case.
pub fn normalize_param_type(raw: &str) -> String {
    let trimmed = raw.trim();

    if trimmed.contains('|') {
        return trimmed
            .split('|')
            .map(|part| format!("\"{}\"", part.trim()))
            .collect::<Vec<_>>()
            .join(" | ");
    }

    let key = trimmed.to_lowercase();
    for (source, canonical) in TYPE_TABLE {
        if *source == key {
            return (*canonical).to_string();
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives() {
        assert_eq!(normalize_param_type("string"), "string");
        assert_eq!(normalize_param_type("Float"), "number");
        assert_eq!(normalize_param_type("BIGINTEGER"), "number");
        assert_eq!(normalize_param_type("bool"), "boolean");
    }

    #[test]
    fn test_composites() {
        assert_eq!(normalize_param_type("nativeObject"), "Object");
        assert_eq!(normalize_param_type("nativeArray"), "Array<any>");
        assert_eq!(normalize_param_type("stringArray"), "Array<string>");
        assert_eq!(normalize_param_type("longArray"), "Array<number>");
        assert_eq!(normalize_param_type("boolArray"), "Array<boolean>");
        assert_eq!(normalize_param_type("map"), "Map<any, any>");
        assert_eq!(normalize_param_type("list"), "Array<any>");
    }

    #[test]
    fn test_unmatched_passes_through_case_preserved() {
        assert_eq!(normalize_param_type(" ServiceProxyResponse "), "ServiceProxyResponse");
    }

    #[test]
    fn test_union_literals() {
        assert_eq!(
            normalize_param_type(" red | green |blue "),
            "\"red\" | \"green\" | \"blue\""
        );
    }

    #[test]
    fn test_union_skips_table() {
        // Parts that would match the table alone are still quoted.
        assert_eq!(normalize_param_type("string|int"), "\"string\" | \"int\"");
    }

    #[test]
    fn test_union_part_count_preserved() {
        let raw = "a|b|c|d";
        let normalized = normalize_param_type(raw);
        assert_eq!(normalized.split(" | ").count(), raw.split('|').count());
    }

    #[test]
    fn test_idempotent_without_pipe() {
        for raw in ["Float", "nativeObject", "map", "list", "Widget"] {
            let once = normalize_param_type(raw);
            assert_eq!(normalize_param_type(&once), once);
        }
    }
}

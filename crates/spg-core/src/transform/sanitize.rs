/// Sanitize a raw operation name into its logical method name.
///
/// Source documents decorate method names with signature text; the name
/// is truncated at the first space, `(`, `{`, or `[` — checked in that
/// fixed order, each against the already-shortened string — then the
/// first character alone is lower-cased. An empty result means the
/// operation must be skipped.
pub fn sanitize_method_name(raw: &str) -> String {
    let mut name = raw.trim().to_string();
    for sep in [' ', '(', '{', '['] {
        if let Some(pos) = name.find(sep) {
            name.truncate(pos);
        }
    }
    let name = name.trim();

    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out: String = first.to_lowercase().collect();
            out.push_str(chars.as_str());
            out
        }
    }
}

/// Sanitize an object key for use as a declaration field name: keep only
/// ASCII letters, digits, and underscores. Case is preserved.
pub fn sanitize_object_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

use heck::ToKebabCase;

/// The manifest file listing every generated file name, one per line.
pub const MANIFEST_FILE_NAME: &str = "dts_file_names";

/// File name of one per-service declaration file:
/// `<prefix>.<kebab-name>-service-proxy.<ext>`.
pub fn proxy_file_name(prefix: &str, service_name: &str, extension: &str) -> String {
    format!(
        "{prefix}.{}-service-proxy.{extension}",
        service_name.to_kebab_case()
    )
}

/// File name of the aggregate index declaration file.
pub fn index_file_name(prefix: &str, extension: &str) -> String {
    format!("{prefix}.service-proxies.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_service() {
        assert_eq!(
            proxy_file_name("lib.cloudcode", "Chat", "d.ts"),
            "lib.cloudcode.chat-service-proxy.d.ts"
        );
    }

    #[test]
    fn test_interior_uppercase_runs() {
        assert_eq!(
            proxy_file_name("lib.cloudcode", "AsyncMatch", "d.ts"),
            "lib.cloudcode.async-match-service-proxy.d.ts"
        );
        assert_eq!(
            proxy_file_name("lib.cloudcode", "CustomEntity", "d.ts"),
            "lib.cloudcode.custom-entity-service-proxy.d.ts"
        );
    }

    #[test]
    fn test_leading_acronym_run() {
        assert_eq!(
            proxy_file_name("lib.cloudcode", "RTT", "d.ts"),
            "lib.cloudcode.rtt-service-proxy.d.ts"
        );
        assert_eq!(
            proxy_file_name("lib.cloudcode", "XMLParser", "d.ts"),
            "lib.cloudcode.xml-parser-service-proxy.d.ts"
        );
    }

    #[test]
    fn test_index_file_name() {
        assert_eq!(
            index_file_name("lib.cloudcode", "d.ts"),
            "lib.cloudcode.service-proxies.d.ts"
        );
    }
}

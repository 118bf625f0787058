use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

/// Top-level project configuration loaded from `.spg.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpgConfig {
    /// Directory of service-definition JSON documents.
    pub input: String,
    /// Directory the declaration files are written to.
    pub output: String,
    /// File-name prefix shared by every generated declaration file.
    pub file_prefix: String,
    /// File-name extension of the generated declaration files.
    pub extension: String,
    /// Maximum recursion depth when inferring a response shape from an
    /// example value. At the ceiling, nested structure collapses to an
    /// opaque marker.
    pub shape_ceiling: usize,
    /// Document stems (file name without `.json`) that are never processed.
    pub skip_documents: Vec<String>,
    /// Per-service method exclusions: service name → logical method names
    /// that are dropped during filtering.
    pub exclusions: IndexMap<String, Vec<String>>,
    /// Post-dedup renames: logical method name → emitted method name.
    /// Applied after deduplication; never part of the dedup key.
    pub renames: IndexMap<String, String>,
    /// Optional remote documentation lookup used to infer response shapes.
    pub docs: Option<DocsConfig>,
}

impl Default for SpgConfig {
    fn default() -> Self {
        Self {
            input: "json".to_string(),
            output: "dts".to_string(),
            file_prefix: "lib.cloudcode".to_string(),
            extension: "d.ts".to_string(),
            shape_ceiling: 4,
            skip_documents: vec!["Script".to_string()],
            exclusions: IndexMap::new(),
            renames: default_renames(),
            docs: None,
        }
    }
}

/// The one known overload rename: the summary-data variant of group
/// creation collides with an unrelated existing declaration under its
/// long name and has always been emitted under the short one. The short
/// name is not guarded against a legitimate `createGroup` in the same
/// document (see DESIGN.md).
fn default_renames() -> IndexMap<String, String> {
    let mut renames = IndexMap::new();
    renames.insert(
        "createGroupWithSummaryData".to_string(),
        "createGroup".to_string(),
    );
    renames
}

/// Remote documentation lookup settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Page URL template; `{service}` and `{method}` are substituted per
    /// operation.
    pub url_template: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            url_template: String::new(),
            timeout_ms: 10_000,
            user_agent: concat!("spg/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".spg.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<SpgConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: SpgConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# spg configuration — https://github.com/spg-tools/service-proxy-generator
input: json             # directory of service-definition JSON documents
output: dts             # directory the declaration files are written to

file_prefix: lib.cloudcode
extension: d.ts

shape_ceiling: 4        # max depth when inferring response shapes

skip_documents:
  - Script              # document stems that are never processed

exclusions: {}
  # Group:
  #   - sysDeleteGroup  # service → methods dropped during filtering

renames:
  createGroupWithSummaryData: createGroup

# docs:
#   url_template: https://docs.example.com/api/{service}/{method}
#   timeout_ms: 10000
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SpgConfig::default();
        assert_eq!(config.input, "json");
        assert_eq!(config.output, "dts");
        assert_eq!(config.file_prefix, "lib.cloudcode");
        assert_eq!(config.extension, "d.ts");
        assert_eq!(config.shape_ceiling, 4);
        assert_eq!(config.skip_documents, vec!["Script".to_string()]);
        assert!(config.exclusions.is_empty());
        assert_eq!(config.renames["createGroupWithSummaryData"], "createGroup");
        assert!(config.docs.is_none());
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: definitions
output: out
file_prefix: lib.scripting
shape_ceiling: 3
exclusions:
  Group:
    - sysDeleteGroup
    - sysUpdateGroup
renames: {}
docs:
  url_template: https://docs.example.com/{service}/{method}
  timeout_ms: 2500
"#;
        let config: SpgConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "definitions");
        assert_eq!(config.output, "out");
        assert_eq!(config.file_prefix, "lib.scripting");
        assert_eq!(config.shape_ceiling, 3);
        assert_eq!(config.exclusions["Group"].len(), 2);
        assert!(config.renames.is_empty());
        let docs = config.docs.unwrap();
        assert_eq!(docs.url_template, "https://docs.example.com/{service}/{method}");
        assert_eq!(docs.timeout_ms, 2500);
        // Defaults applied
        assert_eq!(config.extension, "d.ts");
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = "input: api-json\n";
        let config: SpgConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "api-json");
        // Defaults applied
        assert_eq!(config.output, "dts");
        assert_eq!(config.renames["createGroupWithSummaryData"], "createGroup");
    }

    #[test]
    fn test_default_content_parses() {
        let config: SpgConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.skip_documents, vec!["Script".to_string()]);
    }
}

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::config::SpgConfig;
use crate::parse::OperationEntry;

use super::sanitize::sanitize_method_name;

/// Filtering and renaming rules for one generation pass, derived from
/// config.
#[derive(Debug, Clone, Default)]
pub struct GenerationRules {
    /// `(service, logical method)` pairs dropped during filtering.
    exclusions: HashSet<(String, String)>,
    /// Logical method name → emitted method name, applied after dedup.
    renames: IndexMap<String, String>,
}

impl GenerationRules {
    pub fn from_config(config: &SpgConfig) -> Self {
        let exclusions = config
            .exclusions
            .iter()
            .flat_map(|(service, methods)| {
                methods
                    .iter()
                    .map(move |method| (service.clone(), method.clone()))
            })
            .collect();
        Self {
            exclusions,
            renames: config.renames.clone(),
        }
    }

    pub fn is_excluded(&self, service_name: &str, method_name: &str) -> bool {
        self.exclusions
            .contains(&(service_name.to_string(), method_name.to_string()))
    }

    /// The name an operation is emitted under. Renames apply after
    /// deduplication and never to the dedup key itself.
    pub fn emitted_name<'a>(&'a self, logical_name: &'a str) -> &'a str {
        self.renames
            .get(logical_name)
            .map(String::as_str)
            .unwrap_or(logical_name)
    }
}

/// One accepted operation, paired with its computed logical name.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredOperation<'a> {
    pub entry: &'a OperationEntry,
    pub logical_name: String,
}

/// Select the ordered subsequence of operations to emit for one service.
///
/// Drops operations whose name sanitizes to empty, excluded
/// `(service, method)` pairs, and aliases of an already-seen logical
/// name — the first occurrence in document order wins. The seen-set is
/// fresh per call, never shared across services.
pub fn filter_operations<'a>(
    service_name: &str,
    operations: &'a [OperationEntry],
    rules: &GenerationRules,
) -> Vec<FilteredOperation<'a>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept = Vec::new();

    for entry in operations {
        let logical_name = sanitize_method_name(&entry.api_method);
        if logical_name.is_empty() {
            continue;
        }
        if rules.is_excluded(service_name, &logical_name) {
            continue;
        }
        if !seen.insert(logical_name.clone()) {
            continue;
        }
        kept.push(FilteredOperation {
            entry,
            logical_name,
        });
    }

    kept
}

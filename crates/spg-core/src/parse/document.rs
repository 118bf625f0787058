use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// One service-definition document: a backend service and its callable
/// operations, parsed from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDocument {
    #[serde(rename = "serviceName")]
    pub service_name: String,

    #[serde(default)]
    pub operations: Vec<OperationEntry>,
}

/// One callable operation as declared in the source document.
///
/// `api_method` may carry trailing signature decoration (parens, braces,
/// brackets, whitespace) that is stripped during sanitization, and several
/// entries may sanitize to the same logical name (aliases).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationEntry {
    #[serde(rename = "apiMethod")]
    pub api_method: String,

    #[serde(default)]
    pub desc: String,

    /// Absent in some documents; treated as zero parameters.
    #[serde(rename = "paramInfo", skip_serializing_if = "Option::is_none")]
    pub param_info: Option<Vec<ParamEntry>>,
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub param_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// Parse a service-definition document from JSON text.
pub fn from_json(content: &str) -> Result<ServiceDocument, ParseError> {
    let doc: ServiceDocument = serde_json::from_str(content)?;
    if doc.service_name.trim().is_empty() {
        return Err(ParseError::EmptyServiceName);
    }
    Ok(doc)
}

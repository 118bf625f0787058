use super::shape::Shape;

/// A generator-ready view of one service: filtered operations with
/// normalized names and types.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceIr {
    /// PascalCase service name as declared in the source document.
    pub service_name: String,
    pub operations: Vec<OperationIr>,
}

/// One retained operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationIr {
    /// Emitted method name: the sanitized logical name, post-rename.
    pub name: String,
    pub description: String,
    pub params: Vec<ParamIr>,
    /// Inferred response shape, when documentation lookup produced one.
    /// `None` falls back to the generic proxy response type.
    pub response_shape: Option<Shape>,
}

/// One declared parameter of a retained operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamIr {
    pub name: String,
    /// Source type text, kept for the documentation block.
    pub raw_type: String,
    /// Normalized target type used in the call signature.
    pub ts_type: String,
    /// Absent descriptions are tolerated; the doc line is omitted.
    pub description: Option<String>,
}

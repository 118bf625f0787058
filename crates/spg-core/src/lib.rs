pub mod config;
pub mod error;
pub mod ir;
pub mod parse;
pub mod transform;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for declaration generators that produce files from IR services.
///
/// Implementations receive the full list of services for one generation
/// pass, already sorted by source identifier, and return every output
/// file of the pass including the manifest.
pub trait DeclarationGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        services: &[ir::ServiceIr],
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}

/// Source of inferred response shapes for operations.
///
/// Implementations may consult remote documentation; any failure along
/// the way must surface as `None`, never as an error. The no-op
/// [`NoShapes`] source is used when documentation lookup is disabled.
pub trait ShapeSource {
    fn response_shape(&self, service_name: &str, method_name: &str) -> Option<ir::Shape>;
}

/// A `ShapeSource` that never resolves a shape.
pub struct NoShapes;

impl ShapeSource for NoShapes {
    fn response_shape(&self, _service_name: &str, _method_name: &str) -> Option<ir::Shape> {
        None
    }
}

mod document;

pub use document::{OperationEntry, ParamEntry, ServiceDocument, from_json};

mod service;
mod shape;

pub use service::{OperationIr, ParamIr, ServiceIr};
pub use shape::{Shape, infer_shape};

pub mod emitters;
pub mod file_names;
mod generator;
pub mod shape_mapper;

pub use generator::{DtsConfig, DtsError, DtsGenerator};

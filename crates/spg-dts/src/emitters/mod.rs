pub mod index;
pub mod service;

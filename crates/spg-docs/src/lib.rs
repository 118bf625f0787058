mod error;
mod extract;
mod fetch;

pub use error::DocsError;
pub use extract::extract_response_example;
pub use fetch::DocsClient;

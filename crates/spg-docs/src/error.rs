use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("failed to build http client: {0}")]
    Client(reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("documentation page has no \"JSON Response\" section")]
    MissingSection,

    #[error("no fenced example block in the \"JSON Response\" section")]
    MissingFence,

    #[error("failed to parse example JSON: {0}")]
    Json(#[from] serde_json::Error),
}

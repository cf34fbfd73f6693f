#[derive(Debug, thiserror::Error)]
pub enum DineMetricsError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Malformed period: {0}")]
    MalformedPeriod(String),

    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, DineMetricsError>;

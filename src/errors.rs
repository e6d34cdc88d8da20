use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaginateError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("context serialization error: {0}")]
    Context(#[from] serde_json::Error),
}

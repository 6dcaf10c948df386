use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("network request failed: {0}")]
    Transport(String),

    #[error("server responded with status {status}")]
    HttpStatus { status: u16 },

    #[error("server reported failure: {0}")]
    ServerReported(String),

    #[error("malformed response body: {0}")]
    Parse(String),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Catalog unavailable: {0}")]
    DataUnavailable(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;

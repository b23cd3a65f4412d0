use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum QuoteError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("import format error: {0}")]
    ImportFormat(String),
}

impl QuoteError {
    pub fn storage(err: anyhow::Error) -> Self {
        QuoteError::Storage(format!("{err:#}"))
    }
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        QuoteError::Network(err.to_string())
    }
}

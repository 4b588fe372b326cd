use std::path::PathBuf;

/// Everything that can abort a deals run. None of these are recovered
/// from locally; they surface to the caller as-is.
#[derive(thiserror::Error, Debug)]
pub enum DealsError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("product fragment is not a JSON object")]
    NotAnObject,
    #[error("product fragment does not match the expected schema: {0}")]
    SchemaMismatch(String),
    #[error("invalid price {0:?}")]
    InvalidPrice(String),
    #[error("no empty page seen after {0} pages")]
    PageLimitExceeded(u32),
    #[error("failed to write diagnostic dump {path}: {source}")]
    Dump {
        path: PathBuf,
        source: std::io::Error,
    },
}

//! Error types for ragcompare.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Http(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Completion error: {0}")]
    Completion(String),
}

pub type Result<T> = std::result::Result<T, Error>;

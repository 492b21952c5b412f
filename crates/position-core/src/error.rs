//! Error types for position-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    #[error("Value out of range for int{bits}: {value}")]
    ValueOutOfRange { bits: u16, value: i64 },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid ABI: {0}")]
    InvalidAbi(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

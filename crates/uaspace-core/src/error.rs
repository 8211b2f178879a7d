//! Error types for Uaspace Core
//!
//! The address-space services themselves are total; these errors only arise
//! when text from the outside world is parsed into core types.

use thiserror::Error;

/// Result type alias using Uaspace's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Uaspace error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid node id: {0}")]
    InvalidNodeId(String),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Unknown node class: {0}")]
    UnknownNodeClass(String),

    #[error("Unknown browse direction: {0}")]
    UnknownDirection(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

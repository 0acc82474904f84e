//! Error types for nn-extract
//!
//! This module defines all error types used throughout the crate. Every
//! failure is fatal: extraction aborts on the first error and no partial
//! layer list is ever returned.

use thiserror::Error;

/// Main error type for network extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Graph indexing invariant violated (a tensor with more than one consumer)
    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    /// Chain-walk precondition violated (missing/ambiguous input, broken chain,
    /// multi-output node, missing initializer operand)
    #[error("Structural error: {0}")]
    Structural(String),

    /// Operation outside the supported vocabulary, or a Flatten over
    /// genuinely multi-dimensional data
    #[error("Unsupported operation: {0}")]
    UnsupportedOp(String),

    /// Tensor shape the extractor cannot represent
    #[error("Unsupported shape: {0}")]
    UnsupportedShape(String),

    /// Referenced initializer absent from the initializer table
    #[error("Initializer not found: {0}")]
    InitializerNotFound(String),

    /// Model file or container is invalid
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Invalid tensor data type
    #[error("Invalid data type: {0}")]
    InvalidDataType(i32),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Protobuf decode error
    #[error("Protobuf decode error: {0}")]
    ProtoDecode(#[from] prost::DecodeError),
}

/// Result type alias for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

//! ONNX I/O module
//!
//! Loading and validating ONNX model files, plus the one-call pipeline
//! from a file path to an extracted [`Network`].
//!
//! # Example
//!
//! ```ignore
//! use nn_extract::io::load_network;
//!
//! let network = load_network("model.onnx")?;
//! println!("{network}");
//! ```

pub mod reader;
pub mod validation;

// Re-exports
pub use reader::{load_graph, load_model, load_model_from_bytes};
pub use validation::{check_model, validate_graph, validate_model, ValidationResult};

use std::path::Path;

use crate::error::{ExtractError, ExtractResult};
use crate::extract::extract_network;
use crate::network::Network;
use crate::proto::ModelProto;

/// Extract the network from an already-decoded model
///
/// Validates the model structurally, then runs the extraction pipeline.
pub fn extract_from_model(model: &ModelProto) -> ExtractResult<Network> {
    check_model(model)?;

    let graph = model
        .graph
        .as_ref()
        .ok_or_else(|| ExtractError::InvalidModel("model does not contain a graph".to_string()))?;

    extract_network(graph)
}

/// Load an ONNX file and extract its fused layer list
///
/// This is the main entry point for file-based extraction.
pub fn load_network<P: AsRef<Path>>(path: P) -> ExtractResult<Network> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading model");
    let model = load_model(path)?;
    extract_from_model(&model)
}

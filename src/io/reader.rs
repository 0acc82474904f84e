//! ONNX model reader
//!
//! Load ONNX models from files or bytes.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use prost::Message;

use crate::error::{ExtractError, ExtractResult};
use crate::proto::{GraphProto, ModelProto};

/// Load an ONNX model from a file path
pub fn load_model<P: AsRef<Path>>(path: P) -> ExtractResult<ModelProto> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| {
        ExtractError::InvalidModel(format!("failed to open file '{}': {}", path.display(), e))
    })?;

    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();

    reader.read_to_end(&mut buffer).map_err(|e| {
        ExtractError::InvalidModel(format!("failed to read file '{}': {}", path.display(), e))
    })?;

    load_model_from_bytes(&buffer)
}

/// Load an ONNX model from bytes
pub fn load_model_from_bytes(bytes: &[u8]) -> ExtractResult<ModelProto> {
    ModelProto::decode(bytes)
        .map_err(|e| ExtractError::InvalidModel(format!("failed to decode ONNX model: {}", e)))
}

/// Load only the graph from an ONNX model file
pub fn load_graph<P: AsRef<Path>>(path: P) -> ExtractResult<GraphProto> {
    let model = load_model(path)?;
    model
        .graph
        .ok_or_else(|| ExtractError::InvalidModel("model does not contain a graph".to_string()))
}

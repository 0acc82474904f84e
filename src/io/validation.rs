//! ONNX model validation
//!
//! Node-level structural validation, run before extraction so the chain
//! walker can assume well-formed node and edge references and only enforce
//! the stronger linear-chain constraints itself.

use std::collections::HashSet;

use crate::error::{ExtractError, ExtractResult};
use crate::proto::{GraphProto, ModelProto};

/// Validation result with detailed issues
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the model is valid
    pub is_valid: bool,
    /// List of errors (critical issues)
    pub errors: Vec<String>,
    /// List of warnings (non-critical issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error
    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
        self.is_valid = false;
    }

    /// Add a warning
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Merge with another result
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validate an ONNX model
pub fn validate_model(model: &ModelProto) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if model.opset_import.is_empty() {
        result.add_warning("no opset imports specified");
    }

    match &model.graph {
        Some(graph) => {
            result.merge(validate_graph(graph));
        }
        None => {
            result.add_error("model does not contain a graph");
        }
    }

    result
}

/// Validate a graph
///
/// Checks that every node input resolves to a graph input, an initializer,
/// or a preceding node's output, and that no two nodes claim the same
/// output name.
pub fn validate_graph(graph: &GraphProto) -> ValidationResult {
    let mut result = ValidationResult::valid();

    let mut known_tensors: HashSet<&str> = HashSet::new();

    for input in &graph.input {
        if input.name.is_empty() {
            result.add_error("graph input has empty name");
        } else {
            known_tensors.insert(&input.name);
        }
    }

    for init in &graph.initializer {
        if init.name.is_empty() {
            result.add_warning("initializer has empty name");
        } else {
            known_tensors.insert(&init.name);
        }
    }

    let mut node_outputs: HashSet<&str> = HashSet::new();

    for (idx, node) in graph.node.iter().enumerate() {
        if node.op_type.is_empty() {
            result.add_error(format!("node {} has empty op_type", idx));
        }

        for input in &node.input {
            if !input.is_empty() && !known_tensors.contains(input.as_str()) {
                result.add_error(format!(
                    "node '{}' ({}): input '{}' not found",
                    node.name, node.op_type, input
                ));
            }
        }

        if node.output.is_empty() {
            result.add_warning(format!(
                "node '{}' ({}) has no outputs",
                node.name, node.op_type
            ));
        }

        for output in &node.output {
            if !output.is_empty() {
                if node_outputs.contains(output.as_str()) {
                    result.add_error(format!(
                        "duplicate output '{}' in node '{}'",
                        output, node.name
                    ));
                }
                node_outputs.insert(output);
                known_tensors.insert(output);
            }
        }
    }

    for output in &graph.output {
        if output.name.is_empty() {
            result.add_error("graph output has empty name");
        } else if !known_tensors.contains(output.name.as_str()) {
            result.add_error(format!(
                "graph output '{}' not produced by any node",
                output.name
            ));
        }
    }

    if graph.node.is_empty() {
        result.add_warning("graph has no nodes");
    }

    result
}

/// Quick validation that returns an error if invalid
pub fn check_model(model: &ModelProto) -> ExtractResult<()> {
    let result = validate_model(model);
    if result.is_valid {
        Ok(())
    } else {
        Err(ExtractError::InvalidModel(result.errors.join("; ")))
    }
}

//! ONNX Protocol Buffer types
//!
//! This module holds vendored `prost` bindings for the ONNX message subset
//! the extractor reads. Extension methods are provided in the `extensions`
//! submodule.

/// Vendored ONNX protobuf types
pub mod onnx;

// Re-export commonly used types at module level
pub use onnx::{
    GraphProto, ModelProto, NodeProto, OperatorSetIdProto, TensorProto, TensorShapeProto,
    TypeProto, ValueInfoProto,
};

// Re-export submodules for nested types
pub use onnx::tensor_proto;
pub use onnx::tensor_shape_proto;
pub use onnx::type_proto;

/// Extension methods for ONNX protobuf types
pub mod extensions;

//! Tensor utilities for ONNX models
//!
//! This module provides utilities for working with ONNX tensors:
//! - Data type mappings (`dtype`)
//! - Shape utilities and the 1-D squeeze rule (`shape`)
//! - Conversion between TensorProto and ndarray (`convert`)

pub mod convert;
pub mod dtype;
pub mod shape;

// Re-export commonly used items
pub use convert::{array_to_tensor_f32, tensor_to_array_f32, vec_to_tensor_f32};
pub use dtype::{dtype_size, i32_to_dtype};
pub use shape::{numel, significant_dims, squeeze_to_vector, to_matrix};

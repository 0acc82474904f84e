//! Tensor conversion utilities
//!
//! Convert between ONNX TensorProto and ndarray types. All numeric element
//! types used by initializers decode to f32, including the narrow float
//! formats (f16/bf16) stored either as raw little-endian bytes or as u16
//! bit patterns in the int32 backing field.

use half::{bf16, f16};
use ndarray::{Array, ArrayD, IxDyn};

use crate::error::{ExtractError, ExtractResult};
use crate::proto::onnx::tensor_proto::DataType;
use crate::proto::TensorProto;

use super::dtype::{dtype_size, i32_to_dtype};
use super::shape::numel;

/// Convert TensorProto to f32 ndarray
///
/// This handles both raw_data and the typed data fields.
pub fn tensor_to_array_f32(tensor: &TensorProto) -> ExtractResult<ArrayD<f32>> {
    let dtype = i32_to_dtype(tensor.data_type)?;
    let shape: Vec<usize> = tensor.dims.iter().map(|&d| d.max(0) as usize).collect();
    let expected_len = numel(&tensor.dims);

    let data: Vec<f32> = if !tensor.raw_data.is_empty() {
        // Decode from raw_data based on dtype
        decode_raw_to_f32(&tensor.raw_data, dtype, expected_len)?
    } else {
        // Use typed data fields
        match dtype {
            DataType::Float => tensor.float_data.clone(),
            DataType::Double => tensor.double_data.iter().map(|&v| v as f32).collect(),
            DataType::Int32 => tensor.int32_data.iter().map(|&v| v as f32).collect(),
            DataType::Int64 => tensor.int64_data.iter().map(|&v| v as f32).collect(),
            DataType::Uint64 => tensor.uint64_data.iter().map(|&v| v as f32).collect(),
            // f16/bf16 are stored as u16 bit patterns in the int32 backing field
            DataType::Float16 => tensor
                .int32_data
                .iter()
                .map(|&v| f16::from_bits(v as u16).to_f32())
                .collect(),
            DataType::Bfloat16 => tensor
                .int32_data
                .iter()
                .map(|&v| bf16::from_bits(v as u16).to_f32())
                .collect(),
            _ => {
                return Err(ExtractError::InvalidDataType(tensor.data_type));
            }
        }
    };

    if data.len() != expected_len {
        return Err(ExtractError::InvalidModel(format!(
            "tensor '{}': data length {} does not match shape {:?} (expected {})",
            tensor.name,
            data.len(),
            tensor.dims,
            expected_len
        )));
    }

    let ix = IxDyn(&shape);
    Array::from_shape_vec(ix, data)
        .map_err(|e| ExtractError::InvalidModel(format!("tensor '{}': {}", tensor.name, e)))
}

/// Create TensorProto from f32 array
pub fn array_to_tensor_f32(array: &ArrayD<f32>, name: &str) -> TensorProto {
    let dims: Vec<i64> = array.shape().iter().map(|&d| d as i64).collect();

    TensorProto {
        dims,
        data_type: DataType::Float as i32,
        float_data: array.iter().copied().collect(),
        name: name.to_string(),
        ..Default::default()
    }
}

/// Create 1D TensorProto from f32 slice
pub fn vec_to_tensor_f32(data: &[f32], name: &str) -> TensorProto {
    TensorProto {
        dims: vec![data.len() as i64],
        data_type: DataType::Float as i32,
        float_data: data.to_vec(),
        name: name.to_string(),
        ..Default::default()
    }
}

// ============================================================================
// Internal helpers
// ============================================================================

fn decode_raw_to_f32(raw: &[u8], dtype: DataType, expected: usize) -> ExtractResult<Vec<f32>> {
    let elem_size = dtype_size(dtype)?;
    if raw.len() != expected * elem_size {
        return Err(ExtractError::InvalidModel(format!(
            "raw data size {} does not match expected {} * {}",
            raw.len(),
            expected,
            elem_size
        )));
    }

    match dtype {
        DataType::Float => Ok(raw
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect()),
        DataType::Double => Ok(raw
            .chunks_exact(8)
            .map(|b| f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]) as f32)
            .collect()),
        DataType::Float16 => Ok(raw
            .chunks_exact(2)
            .map(|b| f16::from_bits(u16::from_le_bytes([b[0], b[1]])).to_f32())
            .collect()),
        DataType::Bfloat16 => Ok(raw
            .chunks_exact(2)
            .map(|b| bf16::from_bits(u16::from_le_bytes([b[0], b[1]])).to_f32())
            .collect()),
        DataType::Int32 => Ok(raw
            .chunks_exact(4)
            .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]) as f32)
            .collect()),
        DataType::Int64 => Ok(raw
            .chunks_exact(8)
            .map(|b| i64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]) as f32)
            .collect()),
        DataType::Uint8 => Ok(raw.iter().map(|&b| b as f32).collect()),
        DataType::Int8 => Ok(raw.iter().map(|&b| b as i8 as f32).collect()),
        _ => Err(ExtractError::InvalidDataType(dtype as i32)),
    }
}

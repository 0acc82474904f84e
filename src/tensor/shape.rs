//! Shape utilities for ONNX tensors
//!
//! Element counting, the 1-D squeeze rule for bias tensors, and rank
//! normalization for weight matrices.

use ndarray::{Array1, Array2, ArrayD};

use crate::error::{ExtractError, ExtractResult};

/// Calculate total number of elements from shape
pub fn numel(shape: &[i64]) -> usize {
    if shape.is_empty() {
        1 // scalar
    } else {
        shape.iter().map(|&d| d.max(0) as usize).product()
    }
}

/// Count the dimensions with size greater than one
pub fn significant_dims(shape: &[usize]) -> usize {
    shape.iter().filter(|&&d| d > 1).count()
}

/// Squeeze an array to 1-D
///
/// Accepts any array with at most one dimension of size > 1 and drops the
/// unit dimensions. More than one significant dimension cannot be a vector
/// and fails with `UnsupportedShape` (convolution-style biases land here).
pub fn squeeze_to_vector(array: ArrayD<f32>) -> ExtractResult<Array1<f32>> {
    if significant_dims(array.shape()) > 1 {
        return Err(ExtractError::UnsupportedShape(format!(
            "bias has more than one dimension: {:?}",
            array.shape()
        )));
    }

    if array.ndim() > 1 {
        tracing::debug!(shape = ?array.shape(), "squeezing bias to 1-D");
    }

    Ok(Array1::from_vec(array.into_raw_vec()))
}

/// Reinterpret an array as a 2-D weight matrix
///
/// Gemm/MatMul weights must be rank 2; anything else fails with
/// `UnsupportedShape`.
pub fn to_matrix(array: ArrayD<f32>) -> ExtractResult<Array2<f32>> {
    let shape = array.shape().to_vec();
    array.into_dimensionality::<ndarray::Ix2>().map_err(|_| {
        ExtractError::UnsupportedShape(format!("weight is not a matrix: {:?}", shape))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    #[test]
    fn test_numel() {
        assert_eq!(numel(&[2, 3, 4]), 24);
        assert_eq!(numel(&[1, 1, 1]), 1);
        assert_eq!(numel(&[]), 1); // scalar
    }

    #[test]
    fn test_significant_dims() {
        assert_eq!(significant_dims(&[1, 1, 5]), 1);
        assert_eq!(significant_dims(&[1, 3, 5]), 2);
        assert_eq!(significant_dims(&[1, 1, 1]), 0);
    }

    #[test]
    fn test_squeeze_accepts_unit_dims() {
        let array =
            ArrayD::from_shape_vec(IxDyn(&[1, 1, 5]), vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let vector = squeeze_to_vector(array).unwrap();
        assert_eq!(vector.len(), 5);
        assert_eq!(vector[4], 5.0);
    }

    #[test]
    fn test_squeeze_rejects_multidim() {
        let array = ArrayD::from_shape_vec(IxDyn(&[1, 3, 5]), vec![0.0; 15]).unwrap();
        let err = squeeze_to_vector(array).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedShape(_)));
    }

    #[test]
    fn test_squeeze_passes_through_1d() {
        let array = ArrayD::from_shape_vec(IxDyn(&[3]), vec![1.0, 2.0, 3.0]).unwrap();
        let vector = squeeze_to_vector(array).unwrap();
        assert_eq!(vector.to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_to_matrix() {
        let array = ArrayD::from_shape_vec(IxDyn(&[2, 3]), vec![0.0; 6]).unwrap();
        let matrix = to_matrix(array).unwrap();
        assert_eq!(matrix.dim(), (2, 3));

        let cube = ArrayD::from_shape_vec(IxDyn(&[2, 3, 1]), vec![0.0; 6]).unwrap();
        assert!(to_matrix(cube).is_err());
    }
}

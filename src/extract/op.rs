//! Operation vocabulary and raw per-node operations
//!
//! The supported ONNX op types form a closed enum; classification is an
//! exhaustive match, so an unhandled op is a compile error rather than a
//! string fallthrough at runtime.

use ndarray::{Array1, Array2};

/// The fixed vocabulary of supported operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// Matrix multiply, weight on either side
    MatMul,
    /// Fused affine transform (weight + bias)
    Gemm,
    /// Bias addition
    Add,
    /// Bias subtraction (normalized to Add with a negated bias)
    Sub,
    /// Shape-only reshape; a no-op on effectively 1-D data
    Flatten,
    /// Rectified linear activation
    Relu,
}

impl OpKind {
    /// Parse an ONNX op_type tag; `None` means unsupported
    pub fn parse(op_type: &str) -> Option<Self> {
        match op_type {
            "MatMul" => Some(Self::MatMul),
            "Gemm" => Some(Self::Gemm),
            "Add" => Some(Self::Add),
            "Sub" => Some(Self::Sub),
            "Flatten" => Some(Self::Flatten),
            "Relu" => Some(Self::Relu),
            _ => None,
        }
    }
}

/// Tag of a raw traversal operation, after operand normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawOpKind {
    /// Weight-only transform
    MatMul,
    /// Weight plus bias in one node
    Gemm,
    /// Bias-only transform (covers Sub via negation)
    Add,
    /// No-op marker
    Flatten,
    /// Activation boundary
    Relu,
}

/// One traversed node, reduced to its numeric operands
///
/// Produced by the chain walker, consumed (and discarded) by fusion.
#[derive(Debug, Clone, PartialEq)]
pub struct RawOp {
    /// Weight operand, already normalized to y = W·x orientation
    pub weight: Option<Array2<f32>>,
    /// Bias operand, already squeezed to 1-D and sign-normalized
    pub bias: Option<Array1<f32>>,
    /// Which operation produced this entry
    pub kind: RawOpKind,
}

impl RawOp {
    /// Weight-only op
    pub fn matmul(weight: Array2<f32>) -> Self {
        Self {
            weight: Some(weight),
            bias: None,
            kind: RawOpKind::MatMul,
        }
    }

    /// Weight-plus-bias op
    pub fn gemm(weight: Array2<f32>, bias: Array1<f32>) -> Self {
        Self {
            weight: Some(weight),
            bias: Some(bias),
            kind: RawOpKind::Gemm,
        }
    }

    /// Bias-only op
    pub fn add(bias: Array1<f32>) -> Self {
        Self {
            weight: None,
            bias: Some(bias),
            kind: RawOpKind::Add,
        }
    }

    /// No-op marker for an ignored Flatten
    pub fn flatten() -> Self {
        Self {
            weight: None,
            bias: None,
            kind: RawOpKind::Flatten,
        }
    }

    /// Activation boundary
    pub fn relu() -> Self {
        Self {
            weight: None,
            bias: None,
            kind: RawOpKind::Relu,
        }
    }
}

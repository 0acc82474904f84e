//! # nn-extract
//!
//! Extract a simplified feed-forward network from an ONNX model.
//!
//! This crate normalizes models whose graph forms a single linear chain of
//! MatMul / Gemm / Add / Sub / Flatten / Relu operations into an ordered
//! list of fused `(weight, bias, activation)` layers. Consecutive linear
//! operations are folded into one equivalent affine transform per
//! activation segment, so downstream consumers (verification and analysis
//! tools) never need graph-traversal logic of their own.
//!
//! ## Features
//!
//! - **Graph indexing**: O(1) name-keyed lookups with single-consumer
//!   enforcement
//! - **Chain walking**: input discovery and per-node operand extraction
//! - **Layer fusion**: collapse of affine chains at activation boundaries
//!
//! ## Example
//!
//! ```ignore
//! use nn_extract::prelude::*;
//!
//! let network = load_network("model.onnx")?;
//! let (weights, biases) = network.weights_and_biases();
//! println!("{network}");
//! ```
//!
//! Branching graphs, convolutions, and multi-input/multi-output networks
//! are rejected with a descriptive error rather than degraded output.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod extract;
pub mod graph;
pub mod io;
pub mod network;
pub mod proto;
pub mod tensor;

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Prelude module - import commonly used types with `use nn_extract::prelude::*`
pub mod prelude {
    pub use crate::error::{ExtractError, ExtractResult};
    pub use crate::extract::{extract_network, fuse_ops, walk_chain, OpKind, RawOp, RawOpKind};
    pub use crate::graph::GraphIndex;
    pub use crate::io::{check_model, extract_from_model, load_model, load_network};
    pub use crate::network::{Activation, Layer, Network};
    pub use crate::proto::onnx::*;
}

// ============================================================================
// Crate-level re-exports
// ============================================================================

pub use error::{ExtractError, ExtractResult};
pub use extract::extract_network;
pub use io::load_network;
pub use network::{Activation, Layer, Network};

// ============================================================================
// Version information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

//! Network extraction pipeline
//!
//! Index build, chain walk, and layer fusion composed into a single
//! synchronous pass:
//!
//! ```text
//! GraphProto → GraphIndex → Vec<RawOp> → Vec<Layer> → Network
//! ```
//!
//! Each stage consumes its input and produces a new owned value; any
//! failure aborts the whole pipeline with no partial result.

pub mod fuse;
pub mod op;
pub mod walker;

pub use fuse::fuse_ops;
pub use op::{OpKind, RawOp, RawOpKind};
pub use walker::walk_chain;

use crate::error::ExtractResult;
use crate::graph::GraphIndex;
use crate::network::Network;
use crate::proto::GraphProto;

/// Extract the fused layer list from a graph
pub fn extract_network(graph: &GraphProto) -> ExtractResult<Network> {
    let index = GraphIndex::build(graph)?;
    let ops = walk_chain(graph, &index)?;
    tracing::debug!(raw_ops = ops.len(), "chain walk complete");
    let layers = fuse_ops(ops)?;
    tracing::debug!(layers = layers.len(), "fusion complete");
    Ok(Network::new(layers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use crate::network::Activation;
    use crate::proto::extensions::{make_node, make_tensor_value_info};
    use crate::proto::{GraphProto, TensorProto};
    use crate::tensor::vec_to_tensor_f32;
    use ndarray::{arr1, arr2};

    fn matrix_tensor(name: &str, rows: i64, cols: i64, data: &[f32]) -> TensorProto {
        TensorProto {
            name: name.to_string(),
            dims: vec![rows, cols],
            data_type: 1,
            float_data: data.to_vec(),
            ..Default::default()
        }
    }

    /// The §8 scenario: x → MatMul(I) → Add([1,1]) → ReLU → y
    #[test]
    fn test_identity_matmul_add_relu() {
        let graph = GraphProto {
            node: vec![
                make_node("MatMul", &["W", "x"], &["mm"], "matmul_0"),
                make_node("Add", &["mm", "b"], &["a"], "add_0"),
                make_node("Relu", &["a"], &["y"], "relu_0"),
            ],
            input: vec![make_tensor_value_info("x", 1, &[2])],
            output: vec![make_tensor_value_info("y", 1, &[2])],
            initializer: vec![
                matrix_tensor("W", 2, 2, &[1.0, 0.0, 0.0, 1.0]),
                vec_to_tensor_f32(&[1.0, 1.0], "b"),
            ],
            ..Default::default()
        };

        let network = extract_network(&graph).unwrap();

        assert_eq!(network.len(), 1);
        let layer = &network.layers()[0];
        assert_eq!(layer.weight(), &arr2(&[[1.0, 0.0], [0.0, 1.0]]));
        assert_eq!(layer.bias(), &arr1(&[1.0, 1.0]));
        assert_eq!(layer.activation(), Activation::Relu);
    }

    /// Two consecutive affine segments collapse per activation boundary
    #[test]
    fn test_long_linear_chain_fuses() {
        let graph = GraphProto {
            node: vec![
                make_node("MatMul", &["W1", "x"], &["m1"], "matmul_0"),
                make_node("Add", &["m1", "b1"], &["a1"], "add_0"),
                make_node("MatMul", &["W2", "a1"], &["m2"], "matmul_1"),
                make_node("Add", &["m2", "b2"], &["a2"], "add_1"),
                make_node("Relu", &["a2"], &["y"], "relu_0"),
            ],
            input: vec![make_tensor_value_info("x", 1, &[2])],
            output: vec![make_tensor_value_info("y", 1, &[2])],
            initializer: vec![
                matrix_tensor("W1", 2, 2, &[1.0, 2.0, 3.0, 4.0]),
                vec_to_tensor_f32(&[1.0, 1.0], "b1"),
                matrix_tensor("W2", 2, 2, &[0.0, 1.0, 1.0, 0.0]),
                vec_to_tensor_f32(&[5.0, 6.0], "b2"),
            ],
            ..Default::default()
        };

        let network = extract_network(&graph).unwrap();

        assert_eq!(network.len(), 1);
        let layer = &network.layers()[0];
        assert_eq!(layer.weight(), &arr2(&[[3.0, 4.0], [1.0, 2.0]]));
        assert_eq!(layer.bias(), &arr1(&[6.0, 7.0]));
        assert_eq!(layer.activation(), Activation::Relu);
    }

    /// A Gemm node and its MatMul+Add decomposition yield identical layers
    #[test]
    fn test_gemm_matches_decomposed_chain() {
        let weight = matrix_tensor("W", 2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let bias = vec_to_tensor_f32(&[5.0, 6.0], "b");

        let gemm_graph = GraphProto {
            node: vec![make_node("Gemm", &["x", "W", "b"], &["y"], "gemm_0")],
            input: vec![make_tensor_value_info("x", 1, &[2])],
            output: vec![make_tensor_value_info("y", 1, &[2])],
            initializer: vec![weight.clone(), bias.clone()],
            ..Default::default()
        };
        let chain_graph = GraphProto {
            node: vec![
                make_node("MatMul", &["W", "x"], &["mm"], "matmul_0"),
                make_node("Add", &["mm", "b"], &["y"], "add_0"),
            ],
            input: vec![make_tensor_value_info("x", 1, &[2])],
            output: vec![make_tensor_value_info("y", 1, &[2])],
            initializer: vec![weight, bias],
            ..Default::default()
        };

        let from_gemm = extract_network(&gemm_graph).unwrap();
        let from_chain = extract_network(&chain_graph).unwrap();

        assert_eq!(from_gemm, from_chain);
    }

    /// Both MatMul orientations express the same effective transform
    #[test]
    fn test_matmul_orientation_normalized() {
        let data = [1.0, 2.0, 3.0, 4.0];

        let weight_first = GraphProto {
            node: vec![make_node("MatMul", &["W", "x"], &["y"], "matmul_0")],
            input: vec![make_tensor_value_info("x", 1, &[2])],
            output: vec![make_tensor_value_info("y", 1, &[2])],
            initializer: vec![matrix_tensor("W", 2, 2, &data)],
            ..Default::default()
        };
        // Same effective transform needs the stored matrix transposed
        let weight_second = GraphProto {
            node: vec![make_node("MatMul", &["x", "Wt"], &["y"], "matmul_0")],
            input: vec![make_tensor_value_info("x", 1, &[2])],
            output: vec![make_tensor_value_info("y", 1, &[2])],
            initializer: vec![matrix_tensor("Wt", 2, 2, &[1.0, 3.0, 2.0, 4.0])],
            ..Default::default()
        };

        let a = extract_network(&weight_first).unwrap();
        let b = extract_network(&weight_second).unwrap();

        assert_eq!(a.layers()[0].weight(), b.layers()[0].weight());
    }

    /// A chain ending in linear ops still emits a terminal layer
    #[test]
    fn test_trailing_linear_segment() {
        let graph = GraphProto {
            node: vec![
                make_node("MatMul", &["W1", "x"], &["m1"], "matmul_0"),
                make_node("Relu", &["m1"], &["r"], "relu_0"),
                make_node("MatMul", &["W2", "r"], &["y"], "matmul_1"),
            ],
            input: vec![make_tensor_value_info("x", 1, &[2])],
            output: vec![make_tensor_value_info("y", 1, &[2])],
            initializer: vec![
                matrix_tensor("W1", 2, 2, &[1.0, 0.0, 0.0, 1.0]),
                matrix_tensor("W2", 2, 2, &[2.0, 0.0, 0.0, 2.0]),
            ],
            ..Default::default()
        };

        let network = extract_network(&graph).unwrap();

        assert_eq!(network.len(), 2);
        assert_eq!(network.layers()[0].activation(), Activation::Relu);
        assert_eq!(network.layers()[1].activation(), Activation::Linear);
        assert_eq!(network.layers()[1].bias(), &arr1(&[0.0, 0.0]));
    }

    /// Fan-out is rejected at index build
    #[test]
    fn test_fan_out_rejected() {
        let graph = GraphProto {
            node: vec![
                make_node("MatMul", &["W", "x"], &["mm"], "matmul_0"),
                make_node("Relu", &["mm"], &["y1"], "relu_0"),
                make_node("Relu", &["mm"], &["y2"], "relu_1"),
            ],
            input: vec![make_tensor_value_info("x", 1, &[2])],
            output: vec![make_tensor_value_info("y1", 1, &[2])],
            initializer: vec![matrix_tensor("W", 2, 2, &[0.0; 4])],
            ..Default::default()
        };

        let err = extract_network(&graph).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedGraph(_)));
    }

    #[test]
    fn test_display_lists_every_layer() {
        let graph = GraphProto {
            node: vec![
                make_node("Gemm", &["x", "W1", "b1"], &["g"], "gemm_0"),
                make_node("Relu", &["g"], &["r"], "relu_0"),
                make_node("MatMul", &["W2", "r"], &["y"], "matmul_0"),
            ],
            input: vec![make_tensor_value_info("x", 1, &[3])],
            output: vec![make_tensor_value_info("y", 1, &[1])],
            initializer: vec![
                matrix_tensor("W1", 2, 3, &[0.0; 6]),
                vec_to_tensor_f32(&[0.0, 0.0], "b1"),
                matrix_tensor("W2", 1, 2, &[0.0; 2]),
            ],
            ..Default::default()
        };

        let network = extract_network(&graph).unwrap();
        let dump = network.to_string();

        assert_eq!(dump, "0: Relu -> w=[2, 3], b=[2]\n1: linear -> w=[1, 2], b=[1]\n");
    }

    #[test]
    fn test_weights_and_biases_accessor() {
        let graph = GraphProto {
            node: vec![make_node("Gemm", &["x", "W", "b"], &["y"], "gemm_0")],
            input: vec![make_tensor_value_info("x", 1, &[2])],
            output: vec![make_tensor_value_info("y", 1, &[2])],
            initializer: vec![
                matrix_tensor("W", 2, 2, &[1.0, 2.0, 3.0, 4.0]),
                vec_to_tensor_f32(&[5.0, 6.0], "b"),
            ],
            ..Default::default()
        };

        let network = extract_network(&graph).unwrap();
        let (weights, biases) = network.weights_and_biases();

        assert_eq!(weights.len(), 1);
        assert_eq!(biases.len(), 1);
        assert_eq!(weights[0], &arr2(&[[1.0, 2.0], [3.0, 4.0]]));
        assert_eq!(biases[0], &arr1(&[5.0, 6.0]));
    }
}

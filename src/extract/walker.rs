//! Linear chain traversal
//!
//! Walks the graph from the unique network input to the declared output,
//! classifying each node and extracting its numeric operands into a
//! [`RawOp`] sequence. The walk assumes a structurally valid graph (the
//! I/O validation layer runs first) and enforces only the stronger
//! linear-chain constraints here.

use crate::error::{ExtractError, ExtractResult};
use crate::graph::GraphIndex;
use crate::proto::{GraphProto, NodeProto};
use crate::tensor::{significant_dims, squeeze_to_vector, to_matrix};

use super::op::{OpKind, RawOp};

/// Walk the chain and produce the ordered raw operation list
pub fn walk_chain<'g>(
    graph: &'g GraphProto,
    index: &GraphIndex<'g>,
) -> ExtractResult<Vec<RawOp>> {
    let network_input = find_network_input(graph, index)?;

    if graph.output.len() != 1 {
        return Err(ExtractError::Structural(format!(
            "network declares {} outputs, expected exactly one",
            graph.output.len()
        )));
    }

    let mut ops = Vec::new();
    let mut current_name: &str = network_input;
    let mut current = index.consumer_of(current_name);

    while let Some(node) = current {
        // The index found this node through current_name, so a miss here
        // means the chain invariant itself is broken.
        if !node.input.iter().any(|i| i == current_name) {
            return Err(ExtractError::Structural(format!(
                "node '{}' does not list '{}' among its inputs",
                node_label(node),
                current_name
            )));
        }

        classify_node(node, index, &mut ops)?;

        if node.output.len() != 1 {
            return Err(ExtractError::Structural(format!(
                "node '{}' has {} outputs, expected exactly one",
                node_label(node),
                node.output.len()
            )));
        }

        current_name = &node.output[0];
        current = index.consumer_of(current_name);
    }

    Ok(ops)
}

/// Find the unique tensor consumed by some node but produced by nothing
///
/// A node input that is neither an initializer nor any node's output must
/// come from outside the graph: it is the network input. Zero or several
/// such names mean the graph is not a single chain.
fn find_network_input<'g>(
    graph: &'g GraphProto,
    index: &GraphIndex<'g>,
) -> ExtractResult<&'g str> {
    let mut network_input: Option<&'g str> = None;

    for node in &graph.node {
        for input in &node.input {
            if input.is_empty() || index.is_initializer(input) || index.is_node_output(input) {
                continue;
            }
            if let Some(prev) = network_input {
                return Err(ExtractError::Structural(format!(
                    "multiple network input candidates: '{}' and '{}'",
                    prev, input
                )));
            }
            network_input = Some(input);
        }
    }

    network_input
        .ok_or_else(|| ExtractError::Structural("no network input found".to_string()))
}

fn classify_node(
    node: &NodeProto,
    index: &GraphIndex<'_>,
    ops: &mut Vec<RawOp>,
) -> ExtractResult<()> {
    let kind = OpKind::parse(&node.op_type).ok_or_else(|| {
        ExtractError::UnsupportedOp(format!(
            "'{}' at node '{}'",
            node.op_type,
            node_label(node)
        ))
    })?;

    match kind {
        OpKind::Add | OpKind::Sub => {
            expect_inputs(node, 2)?;
            let bias = squeeze_to_vector(index.initializer_array(&node.input[1])?)?;
            let bias = if kind == OpKind::Sub { -bias } else { bias };
            ops.push(RawOp::add(bias));
        }
        OpKind::Flatten => {
            // The shape of this node's own input, not the network input:
            // the distinction matters whenever Flatten is not the first node.
            let input_name = node.input.first().ok_or_else(|| {
                ExtractError::Structural(format!(
                    "Flatten node '{}' has no inputs",
                    node_label(node)
                ))
            })?;
            let shape = index.shape_of(input_name).ok_or_else(|| {
                ExtractError::Structural(format!(
                    "no shape information for tensor '{}'",
                    input_name
                ))
            })?;
            let dims: Vec<usize> = shape.iter().map(|&d| d.max(0) as usize).collect();
            if significant_dims(&dims) > 1 {
                return Err(ExtractError::UnsupportedOp(format!(
                    "Flatten at node '{}' over multi-dimensional data {:?}",
                    node_label(node),
                    shape
                )));
            }
            tracing::debug!(node = %node_label(node), "ignoring Flatten over effectively 1-D data");
            ops.push(RawOp::flatten());
        }
        OpKind::MatMul => {
            expect_inputs(node, 2)?;
            let weight = if index.is_initializer(&node.input[0]) {
                // MatMul(W, x): already y = W·x
                to_matrix(index.initializer_array(&node.input[0])?)?
            } else if index.is_initializer(&node.input[1]) {
                // MatMul(x, W): transpose so downstream sees y = W·x
                to_matrix(index.initializer_array(&node.input[1])?)?.reversed_axes()
            } else {
                return Err(ExtractError::Structural(format!(
                    "MatMul node '{}' has no initializer operand",
                    node_label(node)
                )));
            };
            ops.push(RawOp::matmul(weight));
        }
        OpKind::Relu => {
            if ops.is_empty() {
                return Err(ExtractError::Structural(format!(
                    "activation node '{}' precedes any linear operation",
                    node_label(node)
                )));
            }
            ops.push(RawOp::relu());
        }
        OpKind::Gemm => {
            expect_inputs(node, 3)?;
            let weight = to_matrix(index.initializer_array(&node.input[1])?)?;
            let bias = squeeze_to_vector(index.initializer_array(&node.input[2])?)?;
            ops.push(RawOp::gemm(weight, bias));
        }
    }

    Ok(())
}

fn expect_inputs(node: &NodeProto, count: usize) -> ExtractResult<()> {
    if node.input.len() != count {
        return Err(ExtractError::Structural(format!(
            "{} node '{}' has {} inputs, expected {}",
            node.op_type,
            node_label(node),
            node.input.len(),
            count
        )));
    }
    Ok(())
}

fn node_label(node: &NodeProto) -> &str {
    if node.name.is_empty() {
        &node.op_type
    } else {
        &node.name
    }
}

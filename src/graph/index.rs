//! Graph index for linear-chain traversal
//!
//! `GraphIndex` is a read-only view over a `GraphProto` providing O(1)
//! name-keyed lookups. It is built once before traversal and never mutated.
//! Unlike a general graph context, the consumer map is unique: the chain
//! walker requires a single linear path, so a tensor read by two nodes is
//! rejected at build time.

use rustc_hash::FxHashMap;

use crate::error::{ExtractError, ExtractResult};
use crate::proto::{GraphProto, NodeProto, TensorProto, ValueInfoProto};
use crate::tensor::tensor_to_array_f32;

use ndarray::ArrayD;

/// Read-only lookup tables over a graph
#[derive(Debug)]
pub struct GraphIndex<'g> {
    /// Maps tensor name → the unique node consuming it
    consumer_map: FxHashMap<&'g str, usize>,
    /// Maps tensor name → the node producing it
    producer_map: FxHashMap<&'g str, usize>,
    /// Maps initializer name → TensorProto
    initializer_map: FxHashMap<&'g str, &'g TensorProto>,
    /// Maps tensor name → ValueInfoProto (inputs + outputs + value_info)
    value_info_map: FxHashMap<&'g str, &'g ValueInfoProto>,
    nodes: &'g [NodeProto],
}

impl<'g> GraphIndex<'g> {
    /// Build the index from a graph
    ///
    /// Fails with `MalformedGraph` if any tensor name is consumed by more
    /// than one node: ambiguous fan-out has no linear chain to walk.
    pub fn build(graph: &'g GraphProto) -> ExtractResult<Self> {
        let mut consumer_map: FxHashMap<&'g str, usize> = FxHashMap::default();
        let mut producer_map: FxHashMap<&'g str, usize> = FxHashMap::default();

        for (idx, node) in graph.node.iter().enumerate() {
            for input in &node.input {
                if input.is_empty() {
                    continue;
                }
                if let Some(&prev) = consumer_map.get(input.as_str()) {
                    return Err(ExtractError::MalformedGraph(format!(
                        "tensor '{}' is consumed by both '{}' and '{}'",
                        input,
                        node_label(&graph.node[prev], prev),
                        node_label(node, idx),
                    )));
                }
                consumer_map.insert(input.as_str(), idx);
            }
            for output in &node.output {
                if !output.is_empty() {
                    producer_map.insert(output.as_str(), idx);
                }
            }
        }

        let initializer_map = graph
            .initializer
            .iter()
            .map(|t| (t.name.as_str(), t))
            .collect();

        let mut value_info_map: FxHashMap<&'g str, &'g ValueInfoProto> = FxHashMap::default();
        for vi in graph
            .input
            .iter()
            .chain(graph.output.iter())
            .chain(graph.value_info.iter())
        {
            value_info_map.insert(vi.name.as_str(), vi);
        }

        Ok(Self {
            consumer_map,
            producer_map,
            initializer_map,
            value_info_map,
            nodes: &graph.node,
        })
    }

    /// The unique node reading this tensor, or none if it is unread
    /// (i.e. the tensor is the graph output)
    pub fn consumer_of(&self, tensor_name: &str) -> Option<&'g NodeProto> {
        self.consumer_map.get(tensor_name).map(|&i| &self.nodes[i])
    }

    /// The node producing this tensor, or none for graph inputs and
    /// initializers
    pub fn producer_of(&self, tensor_name: &str) -> Option<&'g NodeProto> {
        self.producer_map.get(tensor_name).map(|&i| &self.nodes[i])
    }

    /// Check if a tensor is an initializer
    pub fn is_initializer(&self, name: &str) -> bool {
        self.initializer_map.contains_key(name)
    }

    /// Check if a tensor is produced by some node
    pub fn is_node_output(&self, name: &str) -> bool {
        self.producer_map.contains_key(name)
    }

    /// Get the constant tensor registered under `name`
    pub fn initializer(&self, name: &str) -> ExtractResult<&'g TensorProto> {
        self.initializer_map
            .get(name)
            .copied()
            .ok_or_else(|| ExtractError::InitializerNotFound(name.to_string()))
    }

    /// Decode the constant tensor registered under `name` to an f32 array
    pub fn initializer_array(&self, name: &str) -> ExtractResult<ArrayD<f32>> {
        tensor_to_array_f32(self.initializer(name)?)
    }

    /// Get declared type/shape info for a tensor, when the graph records it
    pub fn value_info(&self, name: &str) -> Option<&'g ValueInfoProto> {
        self.value_info_map.get(name).copied()
    }

    /// Get the declared shape of a tensor (symbolic dimensions as -1)
    pub fn shape_of(&self, name: &str) -> Option<Vec<i64>> {
        self.value_info(name).and_then(|vi| vi.get_shape())
    }
}

fn node_label(node: &NodeProto, idx: usize) -> String {
    if node.name.is_empty() {
        format!("{} #{}", node.op_type, idx)
    } else {
        node.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::extensions::{make_node, make_tensor_value_info};
    use crate::proto::TensorProto;

    fn make_test_graph() -> GraphProto {
        GraphProto {
            node: vec![
                make_node("MatMul", &["X", "W"], &["mm_out"], "matmul_0"),
                make_node("Relu", &["mm_out"], &["Y"], "relu_0"),
            ],
            input: vec![make_tensor_value_info("X", 1, &[1, 2])],
            output: vec![make_tensor_value_info("Y", 1, &[1, 2])],
            initializer: vec![TensorProto {
                name: "W".to_string(),
                dims: vec![2, 2],
                data_type: 1,
                float_data: vec![1.0, 0.0, 0.0, 1.0],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_consumer_lookup() {
        let graph = make_test_graph();
        let index = GraphIndex::build(&graph).unwrap();

        assert_eq!(index.consumer_of("X").unwrap().op_type, "MatMul");
        assert_eq!(index.consumer_of("mm_out").unwrap().op_type, "Relu");
        assert!(index.consumer_of("Y").is_none()); // graph output
    }

    #[test]
    fn test_producer_lookup() {
        let graph = make_test_graph();
        let index = GraphIndex::build(&graph).unwrap();

        assert_eq!(index.producer_of("mm_out").unwrap().name, "matmul_0");
        assert!(index.producer_of("X").is_none()); // graph input
    }

    #[test]
    fn test_duplicate_consumer_rejected() {
        let mut graph = make_test_graph();
        graph
            .node
            .push(make_node("Relu", &["mm_out"], &["Z"], "relu_1"));

        let err = GraphIndex::build(&graph).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedGraph(_)));
        assert!(err.to_string().contains("mm_out"));
    }

    #[test]
    fn test_initializer_lookup() {
        let graph = make_test_graph();
        let index = GraphIndex::build(&graph).unwrap();

        assert!(index.is_initializer("W"));
        assert!(!index.is_initializer("X"));

        let array = index.initializer_array("W").unwrap();
        assert_eq!(array.shape(), &[2, 2]);

        let err = index.initializer("missing").unwrap_err();
        assert!(matches!(err, ExtractError::InitializerNotFound(_)));
    }

    #[test]
    fn test_shape_lookup() {
        let graph = make_test_graph();
        let index = GraphIndex::build(&graph).unwrap();

        assert_eq!(index.shape_of("X"), Some(vec![1, 2]));
        assert!(index.shape_of("mm_out").is_none()); // no value_info recorded
    }

    #[test]
    fn test_empty_input_names_skipped() {
        let mut graph = make_test_graph();
        // optional inputs are encoded as empty names
        graph.node[0].input.push(String::new());
        graph.node[1].input.push(String::new());

        assert!(GraphIndex::build(&graph).is_ok());
    }
}

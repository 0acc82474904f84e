//! Extracted network representation
//!
//! The final output of the pipeline: an ordered list of fused
//! (weight, bias, activation) layers, decoupled from whatever operator
//! decomposition the source model used.

use std::fmt;

use ndarray::{Array1, Array2};

use crate::error::{ExtractError, ExtractResult};

/// Activation tag of a fused layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Rectified linear unit
    Relu,
    /// No non-linearity (terminal affine segment)
    Linear,
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Relu => write!(f, "Relu"),
            Activation::Linear => write!(f, "linear"),
        }
    }
}

/// A fused affine layer: y = W·x + b followed by the activation
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    weight: Array2<f32>,
    bias: Array1<f32>,
    activation: Activation,
}

impl Layer {
    /// Create a layer, enforcing that the weight's output dimension
    /// matches the bias length
    pub fn new(
        weight: Array2<f32>,
        bias: Array1<f32>,
        activation: Activation,
    ) -> ExtractResult<Self> {
        if weight.nrows() != bias.len() {
            return Err(ExtractError::UnsupportedShape(format!(
                "layer weight has {} output rows but bias has length {}",
                weight.nrows(),
                bias.len()
            )));
        }
        Ok(Self {
            weight,
            bias,
            activation,
        })
    }

    /// The weight matrix, shape [out, in]
    pub fn weight(&self) -> &Array2<f32> {
        &self.weight
    }

    /// The bias vector, shape [out]
    pub fn bias(&self) -> &Array1<f32> {
        &self.bias
    }

    /// The activation applied after the affine transform
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Input dimension of the layer
    pub fn input_dim(&self) -> usize {
        self.weight.ncols()
    }

    /// Output dimension of the layer
    pub fn output_dim(&self) -> usize {
        self.weight.nrows()
    }
}

/// An extracted feed-forward network: the ordered fused layers
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Wrap an ordered layer list
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// The layers, input side first
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Consume the network, yielding the layers
    pub fn into_layers(self) -> Vec<Layer> {
        self.layers
    }

    /// Number of fused layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True when no layers were extracted
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Split into parallel weight and bias lists, in layer order
    pub fn weights_and_biases(&self) -> (Vec<&Array2<f32>>, Vec<&Array1<f32>>) {
        let weights = self.layers.iter().map(Layer::weight).collect();
        let biases = self.layers.iter().map(Layer::bias).collect();
        (weights, biases)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate() {
            writeln!(
                f,
                "{}: {} -> w=[{}, {}], b=[{}]",
                i,
                layer.activation,
                layer.weight.nrows(),
                layer.weight.ncols(),
                layer.bias.len()
            )?;
        }
        Ok(())
    }
}

//! Layer fusion
//!
//! Folds the raw operation list into fused (weight, bias, activation)
//! layers. Consecutive linear operations collapse into one equivalent
//! affine transform; a completed layer is flushed at each activation
//! boundary and once more at the end of the chain. The fold is a pure
//! function over the op list, independent of graph traversal.

use ndarray::{Array1, Array2};

use crate::error::{ExtractError, ExtractResult};
use crate::network::{Activation, Layer};

use super::op::{RawOp, RawOpKind};

/// Fuse a raw operation list into the final layer list
pub fn fuse_ops(ops: Vec<RawOp>) -> ExtractResult<Vec<Layer>> {
    let mut layers = Vec::new();
    let mut acc = Accumulator::default();

    for op in ops {
        match op.kind {
            RawOpKind::Relu => layers.push(acc.flush(Activation::Relu)?),
            _ => acc.absorb(op)?,
        }
    }

    if let Some(layer) = acc.finish()? {
        layers.push(layer);
    }

    Ok(layers)
}

/// Running affine state between activation boundaries
#[derive(Debug, Default)]
struct Accumulator {
    weight: Option<Array2<f32>>,
    bias: Option<Array1<f32>>,
}

impl Accumulator {
    /// Fold one linear operation into the running state
    fn absorb(&mut self, op: RawOp) -> ExtractResult<()> {
        if let Some(w) = op.weight {
            // A later transform reshapes any bias accumulated before it.
            if let Some(b) = self.bias.take() {
                if w.ncols() != b.len() {
                    return Err(shape_mismatch(&w, b.len(), "bias"));
                }
                self.bias = Some(w.dot(&b));
            }
            self.weight = Some(match self.weight.take() {
                None => w,
                // Composed on the left: this op applies after the prior ones.
                Some(acc) => {
                    if w.ncols() != acc.nrows() {
                        return Err(shape_mismatch(&w, acc.nrows(), "accumulated weight"));
                    }
                    w.dot(&acc)
                }
            });
        }

        if let Some(b) = op.bias {
            self.bias = Some(match self.bias.take() {
                None => b,
                Some(acc) => {
                    if acc.len() != b.len() {
                        return Err(ExtractError::UnsupportedShape(format!(
                            "bias length {} does not match accumulated bias length {}",
                            b.len(),
                            acc.len()
                        )));
                    }
                    acc + b
                }
            });
        }

        Ok(())
    }

    /// Emit the completed layer at an activation boundary
    ///
    /// One missing half is synthesized (identity weight, zero bias); an
    /// activation over a fully empty accumulator has no layer to close
    /// and is reported as a structural error.
    fn flush(&mut self, activation: Activation) -> ExtractResult<Layer> {
        match (self.weight.take(), self.bias.take()) {
            (Some(w), Some(b)) => Layer::new(w, b, activation),
            (Some(w), None) => {
                let bias = Array1::zeros(w.nrows());
                Layer::new(w, bias, activation)
            }
            (None, Some(b)) => {
                let weight = Array2::eye(b.len());
                Layer::new(weight, b, activation)
            }
            (None, None) => Err(ExtractError::Structural(
                "activation with no preceding linear operations".to_string(),
            )),
        }
    }

    /// Emit the terminal linear layer, if any state survived the last flush
    fn finish(mut self) -> ExtractResult<Option<Layer>> {
        if self.weight.is_none() && self.bias.is_none() {
            return Ok(None);
        }
        self.flush(Activation::Linear).map(Some)
    }
}

fn shape_mismatch(w: &Array2<f32>, len: usize, what: &str) -> ExtractError {
    ExtractError::UnsupportedShape(format!(
        "weight of shape [{}, {}] cannot be applied to {} of length {}",
        w.nrows(),
        w.ncols(),
        what,
        len
    ))
}

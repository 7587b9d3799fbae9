use rand::Rng;

use crate::activation::sigmoid::Sigmoid;
use crate::data::pattern::check_len;
use crate::error::TrainError;
use crate::math::matrix::Matrix;
use crate::network::architecture::Architecture;

/// Weights of the one-hidden-layer perceptron.
///
/// `weights_ih[0][j]` is the bias of hidden unit `j`, `weights_ih[i + 1][j]`
/// connects input `i` to hidden unit `j`. `weights_ho` follows the same layout
/// one layer up.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub architecture: Architecture,
    pub weights_ih: Matrix,
    pub weights_ho: Matrix,
    pub activation: Sigmoid,
}

impl Network {
    /// Uniform random weights in `[-scale, +scale]`. The architecture must
    /// already be validated.
    pub fn random<R: Rng + ?Sized>(
        architecture: Architecture,
        activation: Sigmoid,
        scale: f64,
        rng: &mut R,
    ) -> Network {
        let (ih_rows, ih_cols) = architecture.input_hidden_shape();
        let (ho_rows, ho_cols) = architecture.hidden_output_shape();
        Network {
            architecture,
            weights_ih: Matrix::uniform(ih_rows, ih_cols, scale, rng),
            weights_ho: Matrix::uniform(ho_rows, ho_cols, scale, rng),
            activation,
        }
    }

    /// Forward pass writing hidden and output activations into caller buffers.
    ///
    /// `input.len()` must equal `num_input`, `hidden.len()` `num_hidden` and
    /// `output.len()` `num_output`.
    pub fn forward_into(&self, input: &[f64], hidden: &mut [f64], output: &mut [f64]) {
        for (j, h) in hidden.iter_mut().enumerate() {
            let mut sum = self.weights_ih.data[0][j];
            for (i, x) in input.iter().enumerate() {
                sum += x * self.weights_ih.data[i + 1][j];
            }
            *h = self.activation.function(sum);
        }

        for (k, o) in output.iter_mut().enumerate() {
            let mut sum = self.weights_ho.data[0][k];
            for (j, h) in hidden.iter().enumerate() {
                sum += h * self.weights_ho.data[j + 1][k];
            }
            *o = self.activation.function(sum);
        }
    }

    /// Output activations for `input` under the current weights.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>, TrainError> {
        check_len("predict input".to_string(), self.architecture.num_input, input.len())?;

        let mut hidden = vec![0.0; self.architecture.num_hidden];
        let mut output = vec![0.0; self.architecture.num_output];
        self.forward_into(input, &mut hidden, &mut output);
        Ok(output)
    }
}

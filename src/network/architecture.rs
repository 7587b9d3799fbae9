use serde::{Serialize, Deserialize};

use crate::error::TrainError;

/// Unit counts of the single-hidden-layer network.
///
/// Bias units are implicit and not counted here; each weight matrix carries
/// one extra row for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Architecture {
    pub num_input: usize,
    pub num_hidden: usize,
    pub num_output: usize,
}

impl Architecture {
    pub fn new(num_input: usize, num_hidden: usize, num_output: usize) -> Architecture {
        Architecture { num_input, num_hidden, num_output }
    }

    /// The 2-2-1 layout used for XOR.
    pub fn xor() -> Architecture {
        Architecture::new(2, 2, 1)
    }

    pub fn validate(&self) -> Result<(), TrainError> {
        let layers = [
            ("input", self.num_input),
            ("hidden", self.num_hidden),
            ("output", self.num_output),
        ];
        match layers.iter().find(|(_, units)| *units == 0) {
            Some(&(layer, _)) => Err(TrainError::InvalidArchitecture { layer }),
            None => Ok(()),
        }
    }

    /// Shape of the input→hidden matrix, bias row included.
    pub fn input_hidden_shape(&self) -> (usize, usize) {
        (self.num_input + 1, self.num_hidden)
    }

    /// Shape of the hidden→output matrix, bias row included.
    pub fn hidden_output_shape(&self) -> (usize, usize) {
        (self.num_hidden + 1, self.num_output)
    }
}

impl Default for Architecture {
    fn default() -> Self {
        Architecture::xor()
    }
}

use serde::{Serialize, Deserialize};

use crate::activation::sigmoid::Sigmoid;
use crate::error::TrainError;

/// Learning hyperparameters fixed at `Trainer` construction.
///
/// # Fields
/// - `eta`               — learning rate, `> 0`
/// - `alpha`             — momentum coefficient, in `[0, 1)`
/// - `init_weight_scale` — initial weights are uniform in `[-scale, +scale]`, `> 0`
/// - `activation`        — which sigmoid evaluation to use
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparams {
    pub eta: f64,
    pub alpha: f64,
    pub init_weight_scale: f64,
    pub activation: Sigmoid,
}

impl Hyperparams {
    pub fn new(eta: f64, alpha: f64, init_weight_scale: f64) -> Self {
        Hyperparams { eta, alpha, init_weight_scale, activation: Sigmoid::Exact }
    }

    pub fn with_activation(mut self, activation: Sigmoid) -> Self {
        self.activation = activation;
        self
    }

    pub fn validate(&self) -> Result<(), TrainError> {
        if !(self.eta > 0.0 && self.eta.is_finite()) {
            return Err(TrainError::InvalidHyperparameter {
                name: "eta",
                value: self.eta,
                expected: "a finite value > 0",
            });
        }
        if !(0.0..1.0).contains(&self.alpha) {
            return Err(TrainError::InvalidHyperparameter {
                name: "alpha",
                value: self.alpha,
                expected: "in [0, 1)",
            });
        }
        if !(self.init_weight_scale > 0.0 && self.init_weight_scale.is_finite()) {
            return Err(TrainError::InvalidHyperparameter {
                name: "init_weight_scale",
                value: self.init_weight_scale,
                expected: "a finite value > 0",
            });
        }
        Ok(())
    }
}

impl Default for Hyperparams {
    fn default() -> Self {
        Hyperparams::new(0.5, 0.9, 0.5)
    }
}

use serde::{Serialize, Deserialize};

/// Why a `run` stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Epoch error fell strictly below the threshold.
    Converged,
    /// The epoch cap was hit first.
    MaxEpochsReached,
    /// Epoch error became NaN or infinite.
    NumericInstability,
}

/// Final state of a `run`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainOutcome {
    /// Index of the last completed epoch (equals the number of epochs run).
    pub epochs: usize,
    /// Error of that epoch.
    pub error: f64,
    pub termination: Termination,
}

impl TrainOutcome {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

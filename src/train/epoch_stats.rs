use serde::{Serialize, Deserialize};

/// Progress record handed to the `ProgressSink` once per completed epoch.
///
/// Rendering is left to the sink; the trainer never builds display text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number within the current `run`.
    pub epoch: usize,
    /// Sum-squared error accumulated over every pattern of the epoch.
    pub error: f64,
    /// Whether `error` fell strictly below the run's threshold.
    pub converged: bool,
}

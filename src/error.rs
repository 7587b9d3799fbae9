use thiserror::Error;

/// Everything that can be rejected before training touches any weight.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainError {
    /// A layer width is zero.
    #[error("invalid architecture: {layer} layer must have at least one unit")]
    InvalidArchitecture { layer: &'static str },

    /// A hyperparameter or run limit lies outside its allowed range.
    #[error("invalid hyperparameter `{name}` = {value}: must be {expected}")]
    InvalidHyperparameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// A pattern (or a predict input) does not match the architecture.
    #[error("dataset mismatch: {what} has length {actual}, expected {expected}")]
    DatasetMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },
}

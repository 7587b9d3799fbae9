use serde::{Serialize, Deserialize};

use crate::error::TrainError;
use crate::network::architecture::Architecture;

/// One training example. The constant bias input is not stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Pattern {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Pattern {
        Pattern { input, target }
    }
}

/// Ordered, fixed set of patterns presented once per epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    patterns: Vec<Pattern>,
}

impl Dataset {
    pub fn new(patterns: Vec<Pattern>) -> Dataset {
        Dataset { patterns }
    }

    /// XOR truth table: (0,0)→0, (0,1)→1, (1,0)→1, (1,1)→0.
    pub fn xor() -> Dataset {
        Dataset::new(vec![
            Pattern::new(vec![0.0, 0.0], vec![0.0]),
            Pattern::new(vec![0.0, 1.0], vec![1.0]),
            Pattern::new(vec![1.0, 0.0], vec![1.0]),
            Pattern::new(vec![1.0, 1.0], vec![0.0]),
        ])
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Checks that the set is non-empty and every pattern fits `arch`.
    pub fn validate(&self, arch: &Architecture) -> Result<(), TrainError> {
        if self.patterns.is_empty() {
            return Err(TrainError::DatasetMismatch {
                what: "dataset".to_string(),
                expected: 1,
                actual: 0,
            });
        }

        for (p, pattern) in self.patterns.iter().enumerate() {
            check_len(format!("pattern {p} input"), arch.num_input, pattern.input.len())?;
            check_len(format!("pattern {p} target"), arch.num_output, pattern.target.len())?;
        }

        Ok(())
    }
}

pub(crate) fn check_len(what: String, expected: usize, actual: usize) -> Result<(), TrainError> {
    if expected == actual {
        Ok(())
    } else {
        Err(TrainError::DatasetMismatch { what, expected, actual })
    }
}

use serde::{Serialize, Deserialize};

use crate::data::pattern::Dataset;
use crate::network::architecture::Architecture;
use crate::train::hyperparams::Hyperparams;

/// Everything needed to build a `Trainer` and call `run`.
///
/// # Fields
/// - `architecture`    — unit counts, default 2-2-1
/// - `hyperparams`     — eta / alpha / initial weight scale / sigmoid variant
/// - `max_epochs`      — epoch cap for `run`
/// - `error_threshold` — training stops once epoch error is strictly below this
/// - `seed`            — fixes weight init and shuffling; `None` draws from the OS
/// - `report_every`    — the host prints one progress line every N epochs
/// - `dataset`         — training patterns; `None` means the XOR table
///
/// Every field is optional in JSON and falls back to the XOR defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub architecture: Architecture,
    pub hyperparams: Hyperparams,
    pub max_epochs: usize,
    pub error_threshold: f64,
    pub seed: Option<u64>,
    pub report_every: usize,
    pub dataset: Option<Dataset>,
}

impl TrainConfig {
    /// The configured dataset, or the XOR table.
    pub fn dataset(&self) -> Dataset {
        self.dataset.clone().unwrap_or_else(Dataset::xor)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a config from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            architecture: Architecture::xor(),
            hyperparams: Hyperparams::default(),
            max_epochs: 100_000,
            error_threshold: 0.0004,
            seed: None,
            report_every: 100,
            dataset: None,
        }
    }
}

pub mod math;
pub mod activation;
pub mod network;
pub mod data;
pub mod train;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::sigmoid::Sigmoid;
pub use network::{Architecture, Network};
pub use data::{Dataset, Pattern};
pub use train::{EpochStats, Hyperparams, ProgressSink, Termination, TrainConfig, TrainOutcome, Trainer};
pub use error::TrainError;

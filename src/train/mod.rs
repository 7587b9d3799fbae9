pub mod trainer;
pub mod epoch_stats;
pub mod hyperparams;
pub mod outcome;
pub mod progress;
pub mod train_config;

pub use trainer::Trainer;
pub use epoch_stats::EpochStats;
pub use hyperparams::Hyperparams;
pub use outcome::{Termination, TrainOutcome};
pub use progress::ProgressSink;
pub use train_config::TrainConfig;

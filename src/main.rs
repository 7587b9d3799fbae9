use anyhow::{Context, Result};
use xornet::{EpochStats, Trainer, TrainConfig};

/// Text for the progress label, as the watch face showed it.
fn label_text(stats: &EpochStats) -> String {
    if stats.converged {
        format!("DONE. Loss: {:.6}", stats.error)
    } else {
        format!("Epoch: {} Loss: {:.6}", stats.epoch, stats.error)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    // Usage: xornet [CONFIG.json]
    let config = match std::env::args().nth(1) {
        Some(path) => TrainConfig::load_json(&path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => TrainConfig::default(),
    };

    let dataset = config.dataset();
    let mut trainer = match config.seed {
        Some(seed) => Trainer::with_seed(config.architecture, dataset, config.hyperparams, seed),
        None => Trainer::new(config.architecture, dataset, config.hyperparams),
    }
    .context("invalid training setup")?;

    let report_every = config.report_every.max(1);
    let mut label = |stats: &EpochStats| {
        if stats.converged || stats.epoch % report_every == 0 || stats.epoch == 1 {
            println!("{}", label_text(stats));
        }
    };

    let outcome = trainer
        .run(config.max_epochs, config.error_threshold, &mut label)
        .context("training run rejected")?;

    if !outcome.converged() {
        println!("STOPPED ({:?}) after {} epochs. Loss: {:.6}", outcome.termination, outcome.epochs, outcome.error);
    }

    for pattern in trainer.dataset().patterns() {
        let output = trainer.predict(&pattern.input)?;
        println!("{:?} -> {:.4?} (target {:?})", pattern.input, output, pattern.target);
    }

    Ok(())
}

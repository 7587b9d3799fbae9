use xornet::{
    Architecture, Dataset, EpochStats, Hyperparams, Sigmoid, Termination, TrainConfig, TrainError,
    Trainer,
};

const THRESHOLD: f64 = 0.0004;
// Epoch error typically crosses 0.0004 somewhere between epoch 1400 and 3000.
const MAX_EPOCHS: usize = 5000;

fn xor_trainer(seed: u64, hyper: Hyperparams) -> Trainer {
    Trainer::with_seed(Architecture::xor(), Dataset::xor(), hyper, seed).unwrap()
}

/// Runs one seed and returns the outcome plus every reported error.
fn train_seed(seed: u64, hyper: Hyperparams) -> (Termination, Vec<f64>) {
    let mut trainer = xor_trainer(seed, hyper);
    let mut errors = Vec::new();
    let outcome = trainer
        .run(MAX_EPOCHS, THRESHOLD, &mut |s: &EpochStats| errors.push(s.error))
        .unwrap();
    (outcome.termination, errors)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[test]
fn xor_converges_for_most_seeds() {
    let seeds = 0..20u64;
    let converged = seeds
        .clone()
        .filter(|&seed| train_seed(seed, Hyperparams::default()).0 == Termination::Converged)
        .count();

    // Some seeds stall in the XOR local minimum; most do not.
    assert!(converged >= 10, "only {converged} of {} seeds converged", seeds.count());
}

#[test]
fn converged_network_reproduces_the_truth_table() {
    let mut trainer = (0..50u64)
        .map(|seed| xor_trainer(seed, Hyperparams::default()))
        .find_map(|mut trainer| {
            let outcome = trainer.run(MAX_EPOCHS, THRESHOLD, &mut |_: &EpochStats| {}).unwrap();
            outcome.converged().then_some(trainer)
        })
        .expect("no seed converged");

    for pattern in Dataset::xor().patterns() {
        let out = trainer.predict(&pattern.input).unwrap();
        assert!((out[0] - pattern.target[0]).abs() < 0.05, "{:?} -> {:?}", pattern.input, out);
    }

    // A further run starts below threshold and stops after one epoch.
    let outcome = trainer.run(10, THRESHOLD, &mut |_: &EpochStats| {}).unwrap();
    assert_eq!(outcome.termination, Termination::Converged);
    assert_eq!(outcome.epochs, 1);
}

#[test]
fn error_trends_down_over_windows() {
    let errors = (0..50u64)
        .map(|seed| train_seed(seed, Hyperparams::default()))
        .find(|(termination, _)| *termination == Termination::Converged)
        .map(|(_, errors)| errors)
        .expect("no seed converged");

    let window = 100;
    let first = mean(&errors[..window]);
    let last = mean(&errors[errors.len() - window..]);
    assert!(last < first, "moving average went from {first} to {last}");
    assert!(*errors.last().unwrap() < THRESHOLD);
}

#[test]
fn series_sigmoid_trains_like_the_exact_one() {
    let hyper = Hyperparams::default().with_activation(Sigmoid::Series);
    let converged = (0..20u64)
        .filter(|&seed| train_seed(seed, hyper).0 == Termination::Converged)
        .count();
    assert!(converged >= 10, "only {converged} of 20 seeds converged");
}

#[test]
fn progress_sink_sees_one_record_per_epoch() {
    let mut trainer = xor_trainer(99, Hyperparams::default());
    let mut seen: Vec<EpochStats> = Vec::new();
    let outcome = trainer.run(300, THRESHOLD, &mut seen).unwrap();

    assert_eq!(seen.len(), outcome.epochs);
    assert!(seen.len() <= 300);
    assert!(seen.windows(2).all(|w| w[1].epoch == w[0].epoch + 1));
    assert_eq!(seen[0].epoch, 1);
}

#[test]
fn progress_can_flow_over_a_channel() {
    let (mut tx, rx) = std::sync::mpsc::channel();
    let handle = std::thread::spawn(move || {
        let mut trainer = xor_trainer(7, Hyperparams::default());
        trainer.run(50, THRESHOLD, &mut tx).unwrap()
    });

    let outcome = handle.join().unwrap();
    let received: Vec<EpochStats> = rx.iter().collect();
    assert_eq!(received.len(), outcome.epochs);
    assert_eq!(received.last().unwrap().error, outcome.error);
}

#[test]
fn dimensional_validation() {
    let err = Trainer::new(Architecture::new(0, 2, 1), Dataset::xor(), Hyperparams::default()).err();
    assert!(matches!(err, Some(TrainError::InvalidArchitecture { .. })));

    let err = Trainer::new(Architecture::new(3, 2, 1), Dataset::xor(), Hyperparams::default()).err();
    assert!(matches!(err, Some(TrainError::DatasetMismatch { expected: 3, actual: 2, .. })));
}

#[test]
fn config_defaults_drive_a_trainer() {
    let config = TrainConfig { max_epochs: 5, seed: Some(1), ..TrainConfig::default() };
    let mut trainer =
        Trainer::with_seed(config.architecture, config.dataset(), config.hyperparams, 1).unwrap();
    let outcome = trainer
        .run(config.max_epochs, config.error_threshold, &mut |_: &EpochStats| {})
        .unwrap();
    assert_eq!(outcome.termination, Termination::MaxEpochsReached);
    assert_eq!(outcome.epochs, 5);
}

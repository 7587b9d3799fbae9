use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::activation::sigmoid::Sigmoid;
use crate::data::pattern::Dataset;
use crate::error::TrainError;
use crate::math::matrix::Matrix;
use crate::network::architecture::Architecture;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::hyperparams::Hyperparams;
use crate::train::outcome::{Termination, TrainOutcome};
use crate::train::progress::ProgressSink;

/// Online backpropagation with momentum over a fixed dataset.
///
/// Owns the network, the previous weight updates used for momentum, the
/// per-pattern activation buffers and the RNG driving both initialization and
/// the per-epoch presentation order.
///
/// Training can be driven monolithically with [`Trainer::run`] or one epoch at
/// a time with [`Trainer::train_epoch`]; both share the same state, so a host
/// that trains a few epochs per UI tick sees the same semantics as one long
/// `run`.
pub struct Trainer {
    network: Network,
    momentum_ih: Matrix,
    momentum_ho: Matrix,
    dataset: Dataset,
    hyperparams: Hyperparams,
    rng: StdRng,
    order: Vec<usize>,
    hidden: Vec<f64>,
    output: Vec<f64>,
    delta_hidden: Vec<f64>,
    delta_output: Vec<f64>,
    epochs_trained: usize,
}

impl Trainer {
    /// Builds a trainer seeded from OS entropy.
    pub fn new(
        architecture: Architecture,
        dataset: Dataset,
        hyperparams: Hyperparams,
    ) -> Result<Trainer, TrainError> {
        Trainer::with_rng(architecture, dataset, hyperparams, StdRng::from_entropy())
    }

    /// Builds a reproducible trainer: same seed, same weights and same
    /// presentation order.
    pub fn with_seed(
        architecture: Architecture,
        dataset: Dataset,
        hyperparams: Hyperparams,
        seed: u64,
    ) -> Result<Trainer, TrainError> {
        Trainer::with_rng(architecture, dataset, hyperparams, StdRng::seed_from_u64(seed))
    }

    /// Validates everything, then draws the initial weights from `rng`.
    pub fn with_rng(
        architecture: Architecture,
        dataset: Dataset,
        hyperparams: Hyperparams,
        mut rng: StdRng,
    ) -> Result<Trainer, TrainError> {
        architecture.validate()?;
        hyperparams.validate()?;
        dataset.validate(&architecture)?;

        let network = Network::random(
            architecture,
            hyperparams.activation,
            hyperparams.init_weight_scale,
            &mut rng,
        );
        let (ih_rows, ih_cols) = architecture.input_hidden_shape();
        let (ho_rows, ho_cols) = architecture.hidden_output_shape();

        log::debug!(
            "trainer ready: {}-{}-{} network, {} patterns, eta={} alpha={}",
            architecture.num_input,
            architecture.num_hidden,
            architecture.num_output,
            dataset.len(),
            hyperparams.eta,
            hyperparams.alpha,
        );

        Ok(Trainer {
            network,
            momentum_ih: Matrix::zeros(ih_rows, ih_cols),
            momentum_ho: Matrix::zeros(ho_rows, ho_cols),
            order: (0..dataset.len()).collect(),
            dataset,
            hyperparams,
            rng,
            hidden: vec![0.0; architecture.num_hidden],
            output: vec![0.0; architecture.num_output],
            delta_hidden: vec![0.0; architecture.num_hidden],
            delta_output: vec![0.0; architecture.num_output],
            epochs_trained: 0,
        })
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Previous updates `(input→hidden, hidden→output)` carried as momentum.
    pub fn momentum(&self) -> (&Matrix, &Matrix) {
        (&self.momentum_ih, &self.momentum_ho)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn hyperparams(&self) -> &Hyperparams {
        &self.hyperparams
    }

    /// Epochs completed over the whole lifetime of this trainer.
    pub fn epochs_trained(&self) -> usize {
        self.epochs_trained
    }

    /// Output activations for `input` under the current weights.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>, TrainError> {
        self.network.predict(input)
    }

    /// Trains until the epoch error drops strictly below `error_threshold` or
    /// `max_epochs` epochs have run. `sink` receives one record per epoch.
    ///
    /// Epochs are numbered from 1 within each call. Weights and momentum carry
    /// over from earlier calls.
    pub fn run<S>(
        &mut self,
        max_epochs: usize,
        error_threshold: f64,
        sink: &mut S,
    ) -> Result<TrainOutcome, TrainError>
    where
        S: ProgressSink + ?Sized,
    {
        if max_epochs == 0 {
            return Err(TrainError::InvalidHyperparameter {
                name: "max_epochs",
                value: 0.0,
                expected: "at least 1",
            });
        }
        if !(error_threshold > 0.0 && error_threshold.is_finite()) {
            return Err(TrainError::InvalidHyperparameter {
                name: "error_threshold",
                value: error_threshold,
                expected: "a finite value > 0",
            });
        }

        let mut epoch = 0;
        loop {
            epoch += 1;
            let error = self.train_epoch();
            let converged = error < error_threshold;
            sink.report(&EpochStats { epoch, error, converged });

            let termination = if !error.is_finite() {
                log::warn!("epoch {epoch}: error is {error}, stopping");
                Some(Termination::NumericInstability)
            } else if converged {
                Some(Termination::Converged)
            } else if epoch >= max_epochs {
                Some(Termination::MaxEpochsReached)
            } else {
                None
            };

            if let Some(termination) = termination {
                log::info!("training stopped after {epoch} epochs: {termination:?}, error {error:.6}");
                return Ok(TrainOutcome { epochs: epoch, error, termination });
            }
        }
    }

    /// One pass over the dataset in freshly shuffled order. Returns the
    /// epoch's sum-squared error.
    pub fn train_epoch(&mut self) -> f64 {
        self.order.shuffle(&mut self.rng);

        let mut error = 0.0;
        for n in 0..self.order.len() {
            let p = self.order[n];
            error += self.train_pattern(p);
        }

        self.epochs_trained += 1;
        log::debug!("epoch {} error {error:.6}", self.epochs_trained);
        error
    }

    /// Forward pass, backward pass and weight update for one pattern.
    /// Returns its contribution `0.5 Σ (t - o)^2` to the epoch error.
    fn train_pattern(&mut self, p: usize) -> f64 {
        let pattern = &self.dataset.patterns()[p];
        let input = &pattern.input;
        let target = &pattern.target;

        self.network.forward_into(input, &mut self.hidden, &mut self.output);

        let mut error = 0.0;
        for (k, (&t, &o)) in target.iter().zip(self.output.iter()).enumerate() {
            let diff = t - o;
            error += 0.5 * diff * diff;
            self.delta_output[k] = diff * Sigmoid::derivative_from_output(o);
        }

        // Uses the hidden→output weights from before this pattern's update.
        let weights_ho = &self.network.weights_ho;
        for (j, &h) in self.hidden.iter().enumerate() {
            let back: f64 = self.delta_output.iter()
                .enumerate()
                .map(|(k, d)| weights_ho.data[j + 1][k] * d)
                .sum();
            self.delta_hidden[j] = back * Sigmoid::derivative_from_output(h);
        }

        let Hyperparams { eta, alpha, .. } = self.hyperparams;
        update_weights(&mut self.network.weights_ih, &mut self.momentum_ih, input, &self.delta_hidden, eta, alpha);
        update_weights(&mut self.network.weights_ho, &mut self.momentum_ho, &self.hidden, &self.delta_output, eta, alpha);

        error
    }
}

/// `Δw = eta · upstream · δ + alpha · Δw_prev; w += Δw`, with row 0 fed by
/// the constant bias activation 1.
fn update_weights(
    weights: &mut Matrix,
    momentum: &mut Matrix,
    upstream: &[f64],
    delta: &[f64],
    eta: f64,
    alpha: f64,
) {
    for (j, &d) in delta.iter().enumerate() {
        let bias_step = eta * d + alpha * momentum.data[0][j];
        momentum.data[0][j] = bias_step;
        weights.data[0][j] += bias_step;

        for (i, &a) in upstream.iter().enumerate() {
            let step = eta * a * d + alpha * momentum.data[i + 1][j];
            momentum.data[i + 1][j] = step;
            weights.data[i + 1][j] += step;
        }
    }
}

use std::sync::mpsc;

use crate::train::epoch_stats::EpochStats;

/// Receives one `EpochStats` per completed epoch, in epoch order, before the
/// next epoch starts.
pub trait ProgressSink {
    fn report(&mut self, stats: &EpochStats);
}

impl<F> ProgressSink for F
where
    F: FnMut(&EpochStats),
{
    fn report(&mut self, stats: &EpochStats) {
        self(stats)
    }
}

/// Forwards records to another thread. A dropped receiver does not stop
/// training; the record is discarded.
impl ProgressSink for mpsc::Sender<EpochStats> {
    fn report(&mut self, stats: &EpochStats) {
        if self.send(*stats).is_err() {
            log::debug!("progress receiver dropped, discarding epoch {}", stats.epoch);
        }
    }
}

/// Collects every record; handy for tests and post-run inspection.
impl ProgressSink for Vec<EpochStats> {
    fn report(&mut self, stats: &EpochStats) {
        self.push(*stats);
    }
}

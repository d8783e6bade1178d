use crate::stopping::monitor::DEFAULT_PATIENCE;

/// Validation checks scheduled per epoch; the validation cadence is
/// `batches_per_epoch / CHECKS_PER_EPOCH` steps.
pub const CHECKS_PER_EPOCH: usize = 5;

/// Configuration for a `Trainer` run.
///
/// # Fields
/// - `batch_size` - samples per mini-batch; the trailing partial batch of
///                  each epoch is dropped
/// - `shuffle`    - reshuffle the sample order at the start of every epoch
/// - `patience`   - consecutive validation checks without improvement
///                  tolerated before stopping early
pub struct TrainConfig {
    pub batch_size: usize,
    pub shuffle: bool,
    pub patience: usize,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with the default early-stopping patience.
    pub fn new(batch_size: usize, shuffle: bool) -> TrainConfig {
        TrainConfig {
            batch_size,
            shuffle,
            patience: DEFAULT_PATIENCE,
        }
    }

    pub fn with_patience(mut self, patience: usize) -> TrainConfig {
        self.patience = patience;
        self
    }
}

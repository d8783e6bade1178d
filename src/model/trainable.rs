use serde::{Serialize, Deserialize};

use crate::data::dataset::{Batch, Dataset};
use crate::errors::train_error::ModelError;
use crate::optim::sgd::Sgd;

/// Metrics produced by one evaluation pass.
///
/// The trainer records these into the run histories at every validation
/// step. Accuracies are fractions in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Evaluation {
    /// Mean loss over the full validation set.
    pub val_loss: f64,
    /// Accuracy over the full training set.
    pub train_accuracy: f64,
    /// Accuracy over the full validation set.
    pub val_accuracy: f64,
}

/// The model capability the training loop depends on.
///
/// Any concrete model can be driven by `Trainer` by implementing these two
/// operations; the loop and the stopping monitor never look inside the
/// model. Both operations take `&mut self` because a forward pass may cache
/// intermediate state for backprop.
///
/// Failures are returned as `ModelError` and abort the run unmodified; the
/// trainer never retries a step.
pub trait TrainableModel {
    /// One gradient-descent step: forward, backward, and parameter update
    /// for a single mini-batch. Returns the mean loss over the batch.
    fn train_step(&mut self, batch: &Batch, optimizer: &Sgd) -> Result<f64, ModelError>;

    /// Full evaluation pass: validation loss plus accuracy on both splits.
    fn evaluate(&mut self, train_set: &Dataset, val_set: &Dataset)
        -> Result<Evaluation, ModelError>;
}

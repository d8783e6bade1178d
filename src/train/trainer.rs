use log::{debug, info};

use crate::data::batch_loader::BatchLoader;
use crate::data::dataset::Dataset;
use crate::errors::train_error::{ConfigError, TrainError};
use crate::model::trainable::TrainableModel;
use crate::optim::sgd::Sgd;
use crate::stopping::monitor::should_stop;
use crate::train::history::RunHistory;
use crate::train::train_config::{TrainConfig, CHECKS_PER_EPOCH};

// ---------------------------------------------------------------------------
// Training loop controller
// ---------------------------------------------------------------------------

/// Drives the gradient-descent loop over a model.
///
/// The trainer owns the datasets, the optimizer, and the history containers
/// for the duration of a run; the model is only reached through the
/// `TrainableModel` capability. Everything is synchronous: each batch,
/// evaluation, and stopping check runs to completion before the next begins.
pub struct Trainer<M: TrainableModel> {
    model: M,
    optimizer: Sgd,
    config: TrainConfig,
    train_set: Dataset,
    val_set: Dataset,
}

impl<M: TrainableModel> Trainer<M> {
    pub fn new(
        model: M,
        optimizer: Sgd,
        config: TrainConfig,
        train_set: Dataset,
        val_set: Dataset,
    ) -> Trainer<M> {
        Trainer {
            model,
            optimizer,
            config,
            train_set,
            val_set,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consumes the trainer and hands back the (possibly trained) model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Runs up to `num_epochs` full passes over the training set and returns
    /// the recorded histories.
    ///
    /// One step is one processed batch; the step counter is global across
    /// epochs and never resets. Training loss is recorded at every step.
    /// Every `cadence` steps (`cadence = batches_per_epoch / 5`, fixed per
    /// run) the model is evaluated on both splits, the validation metrics
    /// are recorded, and the early-stopping monitor is consulted; a stop
    /// verdict ends the run immediately, so the histories contain exactly
    /// the steps processed before termination.
    ///
    /// # Errors
    /// - `TrainError::Config` if the run is misconfigured: empty training
    ///   set, zero batch size, zero epochs, or a dataset too small for the
    ///   validation cadence. Detected before any training work.
    /// - `TrainError::Model` if a train step or evaluation fails; the
    ///   failure aborts the run and is passed through unmodified.
    pub fn train(&mut self, num_epochs: usize) -> Result<RunHistory, TrainError> {
        let cadence = self.validation_cadence(num_epochs)?;

        let mut history = RunHistory::default();
        let mut step: usize = 0;

        for epoch in 0..num_epochs {
            let loader = BatchLoader::new(&self.train_set, self.config.batch_size, self.config.shuffle);

            for batch in loader {
                let loss = self.model.train_step(&batch, &self.optimizer)?;
                history.train.loss.push(step, loss);

                if step % cadence == 0 {
                    let eval = self.model.evaluate(&self.train_set, &self.val_set)?;
                    debug!(
                        "epoch {epoch} step {step}: val_loss {:.6} train_acc {:.4} val_acc {:.4}",
                        eval.val_loss, eval.train_accuracy, eval.val_accuracy
                    );

                    history.train.accuracy.push(step, eval.train_accuracy);
                    history.val.loss.push(step, eval.val_loss);
                    history.val.accuracy.push(step, eval.val_accuracy);

                    if should_stop(&history.val.loss, step, cadence, self.config.patience) {
                        info!(
                            "stopping early at step {step}: validation loss has shown no \
                             improvement over the last {} checks",
                            self.config.patience
                        );
                        return Ok(history);
                    }
                }

                step += 1;
            }
        }

        Ok(history)
    }

    /// Validates the run configuration and computes the validation cadence.
    ///
    /// Must reject a zero cadence up front: the scheduling expression
    /// `step % cadence` would otherwise divide by zero on the first step.
    fn validation_cadence(&self, num_epochs: usize) -> Result<usize, ConfigError> {
        if self.train_set.is_empty() {
            return Err(ConfigError::EmptyTrainSet);
        }
        if self.config.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        if num_epochs == 0 {
            return Err(ConfigError::ZeroEpochs);
        }

        let batches_per_epoch = self.train_set.len() / self.config.batch_size;
        let cadence = batches_per_epoch / CHECKS_PER_EPOCH;
        if cadence == 0 {
            return Err(ConfigError::ZeroCadence { batches_per_epoch });
        }
        Ok(cadence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::Batch;
    use crate::errors::train_error::ModelError;
    use crate::model::trainable::Evaluation;

    /// Model stub whose validation losses are scripted per check.
    struct ScriptedModel {
        val_losses: Vec<f64>,
        checks: usize,
    }

    impl ScriptedModel {
        fn new(val_losses: Vec<f64>) -> ScriptedModel {
            ScriptedModel { val_losses, checks: 0 }
        }
    }

    impl TrainableModel for ScriptedModel {
        fn train_step(&mut self, _batch: &Batch, _optimizer: &Sgd) -> Result<f64, ModelError> {
            Ok(0.5)
        }

        fn evaluate(
            &mut self,
            _train_set: &Dataset,
            _val_set: &Dataset,
        ) -> Result<Evaluation, ModelError> {
            let val_loss = self.val_losses[self.checks.min(self.val_losses.len() - 1)];
            self.checks += 1;
            Ok(Evaluation {
                val_loss,
                train_accuracy: 0.5,
                val_accuracy: 0.5,
            })
        }
    }

    fn dataset(n: usize) -> Dataset {
        let inputs: Vec<Vec<f64>> = (0..n).map(|i| vec![i as f64]).collect();
        let labels: Vec<Vec<f64>> = (0..n).map(|_| vec![1.0]).collect();
        Dataset::new(inputs, labels)
    }

    fn trainer_with(model: ScriptedModel, n: usize, batch_size: usize) -> Trainer<ScriptedModel> {
        Trainer::new(
            model,
            Sgd::new(0.1),
            TrainConfig::new(batch_size, false),
            dataset(n),
            dataset(n.max(1).min(4)),
        )
    }

    #[test]
    fn too_few_batches_for_a_validation_cadence_is_rejected() {
        // 23 samples at batch size 6 leaves 3 batches per epoch, under the
        // 5 checks the schedule wants.
        let mut trainer = trainer_with(ScriptedModel::new(vec![1.0]), 23, 6);
        match trainer.train(2) {
            Err(TrainError::Config(ConfigError::ZeroCadence { batches_per_epoch })) => {
                assert_eq!(batches_per_epoch, 3);
            }
            other => panic!("expected ZeroCadence, got {other:?}"),
        }
    }

    #[test]
    fn empty_training_set_is_rejected() {
        let mut trainer = Trainer::new(
            ScriptedModel::new(vec![1.0]),
            Sgd::new(0.1),
            TrainConfig::new(2, false),
            Dataset::new(vec![], vec![]),
            dataset(2),
        );
        assert!(matches!(
            trainer.train(1),
            Err(TrainError::Config(ConfigError::EmptyTrainSet))
        ));
    }

    #[test]
    fn zero_epochs_is_rejected() {
        let mut trainer = trainer_with(ScriptedModel::new(vec![1.0]), 10, 2);
        assert!(matches!(
            trainer.train(0),
            Err(TrainError::Config(ConfigError::ZeroEpochs))
        ));
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let mut trainer = trainer_with(ScriptedModel::new(vec![1.0]), 10, 0);
        assert!(matches!(
            trainer.train(1),
            Err(TrainError::Config(ConfigError::ZeroBatchSize))
        ));
    }
}

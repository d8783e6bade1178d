//! Error types for the training harness.

use thiserror::Error;

/// Configuration problems detected before the training loop starts.
///
/// All of these are fatal for the run: the loop is never entered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("training set is empty")]
    EmptyTrainSet,

    #[error("batch size must be at least 1")]
    ZeroBatchSize,

    #[error("num_epochs must be at least 1")]
    ZeroEpochs,

    #[error(
        "validation cadence is zero: {batches_per_epoch} batches per epoch \
         is too few to schedule validation checks (need at least 5)"
    )]
    ZeroCadence { batches_per_epoch: usize },
}

/// A failure reported by a model's train-step or evaluate operation.
///
/// The harness propagates these unmodified; there is no retry or recovery
/// path for a failing model.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ModelError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ModelError {
    pub fn new(message: impl Into<String>) -> ModelError {
        ModelError {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an underlying error, keeping it reachable via `Error::source`.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> ModelError {
        ModelError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Anything that can abort a call to `Trainer::train`.
#[derive(Debug, Error)]
pub enum TrainError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub mod data;
pub mod errors;
pub mod loss;
pub mod model;
pub mod optim;
pub mod stopping;
pub mod train;

// Convenience re-exports
pub use data::batch_loader::BatchLoader;
pub use data::dataset::{Batch, Dataset};
pub use errors::train_error::{ConfigError, ModelError, TrainError};
pub use model::softmax::SoftmaxRegression;
pub use model::trainable::{Evaluation, TrainableModel};
pub use optim::sgd::Sgd;
pub use stopping::monitor::{should_stop, DEFAULT_PATIENCE};
pub use train::history::{RunHistory, StepSeries, TrainHistory, ValHistory};
pub use train::train_config::{TrainConfig, CHECKS_PER_EPOCH};
pub use train::trainer::Trainer;

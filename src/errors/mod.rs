pub mod train_error;

pub use train_error::{ConfigError, ModelError, TrainError};

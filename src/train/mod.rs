pub mod trainer;
pub mod history;
pub mod train_config;

pub use trainer::Trainer;
pub use history::{RunHistory, StepSeries, TrainHistory, ValHistory};
pub use train_config::{TrainConfig, CHECKS_PER_EPOCH};

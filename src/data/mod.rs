pub mod dataset;
pub mod batch_loader;

pub use dataset::{Batch, Dataset};
pub use batch_loader::BatchLoader;

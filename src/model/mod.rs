pub mod trainable;
pub mod softmax;

pub use trainable::{Evaluation, TrainableModel};
pub use softmax::SoftmaxRegression;

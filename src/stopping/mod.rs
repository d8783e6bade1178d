pub mod monitor;

pub use monitor::{should_stop, DEFAULT_PATIENCE};

pub mod health;
pub mod metrics;
pub mod names;

pub use health::*;
pub use names::*;

pub mod seed;
pub mod task;

pub use seed::*;
pub use task::*;

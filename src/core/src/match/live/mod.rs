pub mod contest;
pub mod engine;

pub use contest::*;
pub use engine::*;

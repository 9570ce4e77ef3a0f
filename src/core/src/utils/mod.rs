pub mod logging;
pub mod random;

pub use logging::*;
pub use random::*;

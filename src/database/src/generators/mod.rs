mod generator;
mod staff;

pub use generator::*;
pub use staff::*;

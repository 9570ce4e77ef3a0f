mod error;
mod worker;

pub use error::*;
pub use worker::*;

pub mod academy;
pub mod result;

pub use academy::*;
pub use result::*;

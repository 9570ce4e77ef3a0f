mod club;
mod loader;
mod nation;

pub use club::*;
pub use loader::*;
pub use nation::*;

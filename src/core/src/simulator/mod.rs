pub mod context;
pub mod date;
pub mod messages;
pub mod simulator;
pub mod snapshot;

pub use context::*;
pub use date::*;
pub use messages::*;
pub use simulator::*;
pub use snapshot::*;

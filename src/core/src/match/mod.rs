pub mod batch;
pub mod commentary;
pub mod live;
pub mod result;
pub mod squad;

pub use batch::*;
pub use commentary::*;
pub use live::*;
pub use result::*;
pub use squad::*;

mod error;
mod generators;
mod loaders;
mod saves;

pub use error::*;
pub use generators::*;
pub use loaders::*;
pub use saves::*;

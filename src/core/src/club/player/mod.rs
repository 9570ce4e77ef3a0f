pub mod attributes;
pub mod builder;
pub mod calculators;
pub mod generator;
pub mod morale;
pub mod player;
pub mod playstyle;
pub mod rarity;
pub mod skills;
pub mod training;
pub mod traits;

pub use attributes::*;
pub use builder::*;
pub use calculators::*;
pub use generator::*;
pub use morale::*;
pub use player::*;
pub use playstyle::*;
pub use rarity::*;
pub use skills::*;
pub use training::{PlayerTraining, PlayerTrainingResult, TRAINING_AGE_LIMIT};
pub use traits::*;

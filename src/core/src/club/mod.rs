pub mod academy;
pub mod club;
pub mod player;
pub mod staff;
pub mod tactics;

pub use academy::{last_player_id, ClubAcademy, ProduceYouthPlayersResult};
pub use club::*;
pub use player::*;
pub use staff::*;
pub use tactics::*;

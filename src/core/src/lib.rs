pub mod club;
pub mod config;
pub mod error;
pub mod league;
pub mod r#match;
pub mod nation;
pub mod simulator;

pub mod shared;
pub mod utils;

pub use club::{
    Club, ClubColors, FinancialTier, Formation, Mentality, Morale, Player,
    PlayerAttributes, PlayerGenerator, PlayerPositionType, PlayerRequest, PlayerSkills,
    Rarity, Staff, StaffCollection, StaffRole, Tactics,
};
pub use config::GameConfig;
pub use error::{NarrativeError, SimulationError, SimulationResult};
pub use league::{Fixture, LeagueTable, LeagueTableRow, ScheduleGenerator};
pub use nation::{Nation, NationCollection, PeopleNameGeneratorData};
pub use r#match::{
    ChunkResult, CommentaryContext, CommentaryProvider, LiveMatchEngine, LiveMatchState,
    MatchEvent, MatchEventKind, MatchResult, MatchSimulator, Score, TemplateCommentary,
};
pub use simulator::*;
pub use utils::*;

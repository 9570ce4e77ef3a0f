use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerTrait {
    Leader,
    Clutch,
    GlassBones,
    IronLungs,
    Hothead,
    Showboat,
    Spellsinger,
    WardBreaker,
    Loyal,
    Mercenary,
}

impl PlayerTrait {
    pub const CATALOG: [PlayerTrait; 10] = [
        PlayerTrait::Leader,
        PlayerTrait::Clutch,
        PlayerTrait::GlassBones,
        PlayerTrait::IronLungs,
        PlayerTrait::Hothead,
        PlayerTrait::Showboat,
        PlayerTrait::Spellsinger,
        PlayerTrait::WardBreaker,
        PlayerTrait::Loyal,
        PlayerTrait::Mercenary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlayerTrait::Leader => "Leader",
            PlayerTrait::Clutch => "Clutch",
            PlayerTrait::GlassBones => "Glass Bones",
            PlayerTrait::IronLungs => "Iron Lungs",
            PlayerTrait::Hothead => "Hothead",
            PlayerTrait::Showboat => "Showboat",
            PlayerTrait::Spellsinger => "Spellsinger",
            PlayerTrait::WardBreaker => "Ward Breaker",
            PlayerTrait::Loyal => "Loyal",
            PlayerTrait::Mercenary => "Mercenary",
        }
    }
}

use crate::club::{
    Morale, Player, PlayerAttributes, PlayerPositionType, PlayerPreferredFoot, PlayerSkills,
    PlayerSquadStatus, PlayerTrait, Playstyle, Rarity,
};
use crate::shared::FullName;

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    full_name: Option<FullName>,
    club_id: Option<u32>,
    nation_id: Option<u32>,
    age: Option<u8>,
    position: Option<PlayerPositionType>,
    preferred_foot: Option<PlayerPreferredFoot>,
    rarity: Option<Rarity>,
    playstyle: Option<Playstyle>,
    skills: Option<PlayerSkills>,
    player_attributes: Option<PlayerAttributes>,
    morale: Option<Morale>,
    traits: Option<Vec<PlayerTrait>>,
    squad_status: Option<PlayerSquadStatus>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: FullName) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn club_id(mut self, club_id: u32) -> Self {
        self.club_id = Some(club_id);
        self
    }

    pub fn nation_id(mut self, nation_id: u32) -> Self {
        self.nation_id = Some(nation_id);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn position(mut self, position: PlayerPositionType) -> Self {
        self.position = Some(position);
        self
    }

    pub fn preferred_foot(mut self, preferred_foot: PlayerPreferredFoot) -> Self {
        self.preferred_foot = Some(preferred_foot);
        self
    }

    pub fn rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    pub fn playstyle(mut self, playstyle: Playstyle) -> Self {
        self.playstyle = Some(playstyle);
        self
    }

    pub fn skills(mut self, skills: PlayerSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn player_attributes(mut self, player_attributes: PlayerAttributes) -> Self {
        self.player_attributes = Some(player_attributes);
        self
    }

    pub fn morale(mut self, morale: Morale) -> Self {
        self.morale = Some(morale);
        self
    }

    pub fn traits(mut self, traits: Vec<PlayerTrait>) -> Self {
        self.traits = Some(traits);
        self
    }

    pub fn squad_status(mut self, squad_status: PlayerSquadStatus) -> Self {
        self.squad_status = Some(squad_status);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        Ok(Player {
            id: self.id.ok_or("id is required")?,
            full_name: self.full_name.ok_or("full_name is required")?,
            club_id: self.club_id.ok_or("club_id is required")?,
            nation_id: self.nation_id.ok_or("nation_id is required")?,
            age: self.age.ok_or("age is required")?,
            position: self.position.ok_or("position is required")?,
            preferred_foot: self.preferred_foot.unwrap_or(PlayerPreferredFoot::Right),
            rarity: self.rarity.unwrap_or(Rarity::Common),
            playstyle: self.playstyle.unwrap_or(Playstyle::Balanced),
            skills: self.skills.unwrap_or_default(),
            player_attributes: self.player_attributes.unwrap_or_default(),
            morale: self.morale.unwrap_or_default(),
            traits: self.traits.unwrap_or_default(),
            squad_status: self.squad_status.unwrap_or(PlayerSquadStatus::Rotation),
        })
    }
}

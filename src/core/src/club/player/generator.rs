use crate::club::{
    clamp_attribute, AttributeKind, Club, Morale, Player, PlayerAttributes, PlayerPositionType,
    PlayerPreferredFoot, PlayerSkills, PlayerSquadStatus, PlayerTrait, PlayerValueCalculator,
    Playstyle, Rarity, ABILITY_MAX, SCOUTING_KNOWLEDGE_DEFAULT, SCOUTING_KNOWLEDGE_FULL,
};
use crate::error::{SimulationError, SimulationResult};
use crate::nation::{Nation, NationCollection};
use crate::shared::FullName;
use crate::utils::SeededRng;
use log::debug;

const ALIAS_CHANCE: f64 = 1.0 / 12.0;
const POSITION_EMPHASIS: i32 = 2;

const POSITION_WEIGHTS: [(PlayerPositionType, f64); 4] = [
    (PlayerPositionType::Goalkeeper, 0.10),
    (PlayerPositionType::Defender, 0.30),
    (PlayerPositionType::Midfielder, 0.35),
    (PlayerPositionType::Forward, 0.25),
];

const FALLBACK_SYLLABLES: [&str; 12] = [
    "ar", "bel", "cor", "dun", "el", "fen", "gar", "hal", "ist", "mor", "ren", "vas",
];

pub struct PlayerGenerator<'n> {
    nations: &'n NationCollection,
}

/// What the caller wants out of one generated player.
#[derive(Debug, Clone, Copy)]
pub struct PlayerRequest {
    pub id: u32,
    pub position: Option<PlayerPositionType>,
    pub is_youth: bool,
    pub fully_scouted: bool,
}

impl PlayerRequest {
    pub fn senior(id: u32, position: PlayerPositionType) -> Self {
        PlayerRequest {
            id,
            position: Some(position),
            is_youth: false,
            fully_scouted: false,
        }
    }

    pub fn youth(id: u32) -> Self {
        PlayerRequest {
            id,
            position: None,
            is_youth: true,
            fully_scouted: false,
        }
    }

    pub fn scouted(mut self, fully_scouted: bool) -> Self {
        self.fully_scouted = fully_scouted;
        self
    }
}

impl<'n> PlayerGenerator<'n> {
    pub fn new(nations: &'n NationCollection) -> Self {
        PlayerGenerator { nations }
    }

    pub fn generate(
        &self,
        rng: &mut SeededRng,
        club: &Club,
        request: PlayerRequest,
    ) -> SimulationResult<Player> {
        let nation = self.nations.find_or_fallback(club.nation_id, rng)?;

        let full_name = Self::generate_name(rng, nation);

        let position = match request.position {
            Some(position) => position,
            None => *rng.weighted(&POSITION_WEIGHTS)?,
        };

        let age = if request.is_youth {
            rng.biased(16, 20, 0.2, 0.5)
        } else {
            rng.biased(18, 35, 0.3, 0.5)
        } as u8;

        let potential_ability = rng.biased(50, ABILITY_MAX as i32, 0.7, 0.5) as u8;

        let current_ability = if request.is_youth {
            rng.range(20, 46) as u8
        } else {
            rng.biased(30, potential_ability as i32 + 1, 0.5, 0.5) as u8
        }
        .min(potential_ability);

        let skills = Self::generate_skills(rng, nation, position, current_ability);

        let rarity = Rarity::from_roll(rng.next_f64());
        let value = PlayerValueCalculator::calculate(current_ability, rarity);

        let player_trait = *rng.choice(&PlayerTrait::CATALOG)?;
        let preferred_foot = *rng.choice(&[PlayerPreferredFoot::Left, PlayerPreferredFoot::Right])?;
        let playstyle = *rng.choice(Playstyle::pool_for(position))?;

        let scouting_knowledge = if request.fully_scouted {
            SCOUTING_KNOWLEDGE_FULL
        } else {
            SCOUTING_KNOWLEDGE_DEFAULT
        };

        let player = Player::builder()
            .id(request.id)
            .full_name(full_name)
            .club_id(club.id)
            .nation_id(nation.id)
            .age(age)
            .position(position)
            .preferred_foot(preferred_foot)
            .rarity(rarity)
            .playstyle(playstyle)
            .skills(skills)
            .player_attributes(PlayerAttributes {
                current_ability,
                potential_ability,
                value,
                scouting_knowledge,
            })
            .morale(Morale::Neutral)
            .traits(vec![player_trait])
            .squad_status(PlayerSquadStatus::from_ability(current_ability, request.is_youth))
            .build()
            .map_err(SimulationError::InvalidState)?;

        debug!(
            "generated player {} for {} ({}, ca {}/{}, {:?})",
            player.full_name,
            club.short_name,
            position.get_short_name(),
            current_ability,
            potential_ability,
            rarity
        );

        Ok(player)
    }

    fn generate_skills(
        rng: &mut SeededRng,
        nation: &Nation,
        position: PlayerPositionType,
        current_ability: u8,
    ) -> PlayerSkills {
        let ability_bias = current_ability as f64 / ABILITY_MAX as f64;
        let mut skills = PlayerSkills::default();

        for kind in AttributeKind::ALL {
            let base = rng.biased(1, 21, ability_bias, 0.6);
            let emphasis = if Self::emphasised_attribute(position) == kind {
                POSITION_EMPHASIS
            } else {
                0
            };

            skills.set(kind, clamp_attribute(base + nation.bias_for(kind) + emphasis));
        }

        skills
    }

    fn emphasised_attribute(position: PlayerPositionType) -> AttributeKind {
        match position {
            PlayerPositionType::Goalkeeper => AttributeKind::Agility,
            PlayerPositionType::Defender => AttributeKind::Tackling,
            PlayerPositionType::Midfielder => AttributeKind::Passing,
            PlayerPositionType::Forward => AttributeKind::Shooting,
        }
    }

    pub fn generate_name(rng: &mut SeededRng, nation: &Nation) -> FullName {
        let names = &nation.people_names;

        let first_name = rng
            .choice(&names.first_names)
            .cloned()
            .unwrap_or_else(|_| Self::random_name(rng, 2));
        let last_name = rng
            .choice(&names.last_names)
            .cloned()
            .unwrap_or_else(|_| Self::random_name(rng, 3));

        if rng.chance(ALIAS_CHANCE) {
            if let Ok(alias) = rng.choice(&names.last_names) {
                if *alias != last_name {
                    return FullName::with_alias(first_name, last_name, alias.clone());
                }
            }
        }

        FullName::new(first_name, last_name)
    }

    fn random_name(rng: &mut SeededRng, syllables: usize) -> String {
        let raw: String = (0..syllables)
            .map(|_| FALLBACK_SYLLABLES[rng.range(0, FALLBACK_SYLLABLES.len() as i32) as usize])
            .collect();

        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => raw,
        }
    }
}

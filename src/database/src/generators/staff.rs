use guildball_core::club::{Club, PlayerGenerator, Staff, StaffRole};
use guildball_core::nation::NationCollection;
use guildball_core::{SeededRng, SimulationResult};
use log::debug;

pub const STAFF_RATING_INFLUENCE: f64 = 0.5;

pub struct StaffGenerator<'n> {
    nations: &'n NationCollection,
}

impl<'n> StaffGenerator<'n> {
    pub fn new(nations: &'n NationCollection) -> Self {
        StaffGenerator { nations }
    }

    pub fn generate(
        &self,
        rng: &mut SeededRng,
        club: &Club,
        role: StaffRole,
        id: u32,
    ) -> SimulationResult<Staff> {
        let nation = self.nations.find_or_fallback(club.nation_id, rng)?;
        let full_name = PlayerGenerator::generate_name(rng, nation);

        let rating = rng.biased(
            1,
            21,
            club.financial_tier.generation_bias(),
            STAFF_RATING_INFLUENCE,
        ) as u8;

        let staff = Staff {
            id,
            club_id: club.id,
            full_name,
            nation_id: nation.id,
            role,
            rating,
        };

        debug!("generated staff {} for {}", staff, club.short_name);

        Ok(staff)
    }

    /// One record per role, ids handed out from `first_id` upwards.
    pub fn generate_for_club(
        &self,
        rng: &mut SeededRng,
        club: &Club,
        first_id: u32,
    ) -> SimulationResult<Vec<Staff>> {
        StaffRole::ALL
            .iter()
            .zip(first_id..)
            .map(|(role, id)| self.generate(rng, club, *role, id))
            .collect()
    }
}

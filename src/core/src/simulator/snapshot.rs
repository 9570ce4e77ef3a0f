use crate::club::{Club, Player, StaffCollection};
use crate::config::GameConfig;
use crate::error::{SimulationError, SimulationResult};
use crate::league::{Fixture, LeagueTable, ScheduleGenerator};
use crate::simulator::GameDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutingAssignment {
    pub player_id: u32,
    pub days_remaining: u32,
}

/// Everything a day advance reads and replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub managed_club_id: u32,
    pub date: GameDate,
    pub clubs: Vec<Club>,
    pub players: Vec<Player>,
    #[serde(default)]
    pub staff: StaffCollection,
    pub fixtures: Vec<Fixture>,
    pub league_table: LeagueTable,
    pub scouting_assignments: Vec<ScoutingAssignment>,
}

impl WorldSnapshot {
    /// Day one of season one with a fresh schedule and an all-zero table.
    /// Fails when the season is too short for the clubs' double round robin.
    pub fn new(
        managed_club_id: u32,
        clubs: Vec<Club>,
        players: Vec<Player>,
        staff: StaffCollection,
        config: &GameConfig,
    ) -> SimulationResult<Self> {
        config.validate_for(clubs.len())?;

        let club_ids: Vec<u32> = clubs.iter().map(|c| c.id).collect();
        let date = GameDate::start();

        Ok(WorldSnapshot {
            managed_club_id,
            date,
            fixtures: ScheduleGenerator::generate(
                date.season,
                &club_ids,
                config.first_match_day,
                config.round_interval_days,
            ),
            league_table: LeagueTable::new(&club_ids),
            clubs,
            players,
            staff,
            scouting_assignments: Vec::new(),
        })
    }

    pub fn club(&self, id: u32) -> Option<&Club> {
        self.clubs.iter().find(|c| c.id == id)
    }

    pub fn managed_club(&self) -> Option<&Club> {
        self.club(self.managed_club_id)
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn club_players(&self, club_id: u32) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.club_id == club_id)
    }

    pub fn club_ids(&self) -> Vec<u32> {
        self.clubs.iter().map(|c| c.id).collect()
    }

    pub fn fixtures_on(&self, day: u32) -> Vec<&Fixture> {
        ScheduleGenerator::for_day(&self.fixtures, day)
    }

    /// The managed club's next fixture on or after `day`.
    pub fn next_managed_fixture(&self, day: u32) -> Option<&Fixture> {
        self.fixtures
            .iter()
            .filter(|f| f.day >= day && f.involves(self.managed_club_id))
            .min_by_key(|f| f.day)
    }

    /// Sends a scout after `player_id`. Already known or already assigned
    /// players are left alone.
    pub fn assign_scout(&mut self, player_id: u32, duration_days: u32) -> SimulationResult<bool> {
        let player = self
            .player(player_id)
            .ok_or_else(|| SimulationError::missing_player(player_id))?;

        if player.player_attributes.is_fully_scouted()
            || self.scouting_assignments.iter().any(|a| a.player_id == player_id)
        {
            return Ok(false);
        }

        self.scouting_assignments.push(ScoutingAssignment {
            player_id,
            days_remaining: duration_days.max(1),
        });

        Ok(true)
    }
}

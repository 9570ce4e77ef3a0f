use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: String,
    pub season: u32,
    pub day: u32,
    pub home_club_id: u32,
    pub away_club_id: u32,
}

impl Fixture {
    pub fn new(season: u32, day: u32, home_club_id: u32, away_club_id: u32) -> Self {
        Fixture {
            id: format!("{}-{}-{}-{}", season, day, home_club_id, away_club_id),
            season,
            day,
            home_club_id,
            away_club_id,
        }
    }

    pub fn involves(&self, club_id: u32) -> bool {
        self.home_club_id == club_id || self.away_club_id == club_id
    }
}

pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Double round robin by the circle method. An odd club count is padded
    /// with a bye slot and pairings against it are dropped. Round `r` is
    /// played on `first_day + r * interval`.
    pub fn generate(season: u32, club_ids: &[u32], first_day: u32, interval: u32) -> Vec<Fixture> {
        if club_ids.len() < 2 {
            return Vec::new();
        }

        let mut slots: Vec<Option<u32>> = club_ids.iter().copied().map(Some).collect();
        if slots.len() % 2 == 1 {
            slots.push(None);
        }

        let n = slots.len();
        let rounds = 2 * (n - 1);
        let mut fixtures = Vec::with_capacity(club_ids.len() * (club_ids.len() - 1));

        for round in 0..rounds {
            let day = first_day + round as u32 * interval;

            for i in 0..n / 2 {
                let (Some(first), Some(second)) = (slots[i], slots[n - 1 - i]) else {
                    continue;
                };

                // n - 1 is odd, so a pairing recurs n - 1 rounds later with
                // the opposite parity and therefore reversed venue
                let (home, away) = if round % 2 == 0 {
                    (first, second)
                } else {
                    (second, first)
                };

                fixtures.push(Fixture::new(season, day, home, away));
            }

            slots[1..].rotate_right(1);
        }

        debug!(
            "schedule: season {} generated {} fixtures over {} rounds",
            season,
            fixtures.len(),
            rounds
        );

        fixtures
    }

    pub fn for_day(fixtures: &[Fixture], day: u32) -> Vec<&Fixture> {
        fixtures.iter().filter(|f| f.day == day).collect()
    }
}

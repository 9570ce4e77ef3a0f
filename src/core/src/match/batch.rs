use crate::club::Tactics;
use crate::league::Fixture;
use crate::r#match::{MatchEvent, MatchResult, MatchSquad, Score, Side};
use crate::utils::SeededRng;
use log::debug;

pub const MATCH_MINUTES: u8 = 90;
pub const EXPECTED_GOALS: f64 = 2.7;
pub const HOME_ADVANTAGE: f32 = 2.0;
const MAX_SHARE_SHIFT: f64 = 0.35;

pub struct MatchSide<'s> {
    pub squad: &'s MatchSquad,
    pub tactics: &'s Tactics,
}

impl MatchSide<'_> {
    pub fn rating(&self) -> f32 {
        self.squad.average_ability() + self.tactics.mentality.rating_modifier()
    }
}

/// Whole-match simulator for fixtures nobody watches: goals only.
pub struct MatchSimulator;

impl MatchSimulator {
    pub fn simulate(
        fixture: &Fixture,
        home: MatchSide<'_>,
        away: MatchSide<'_>,
        rng: &mut SeededRng,
    ) -> MatchResult {
        let (home_chance, away_chance) = Self::goal_chances(home.rating() + HOME_ADVANTAGE, away.rating());

        let mut score = Score::default();
        let mut events = Vec::new();

        for minute in 1..=MATCH_MINUTES {
            for (side, squad, chance) in [
                (Side::Home, home.squad, home_chance),
                (Side::Away, away.squad, away_chance),
            ] {
                if squad.is_empty() {
                    continue;
                }

                if !rng.chance(chance) {
                    continue;
                }

                let outfield = squad.outfield();
                let Ok(scorer) = rng.choice(&outfield) else {
                    continue;
                };

                score.add_goal(side);
                events.push(MatchEvent::goal(
                    minute,
                    squad.club_id,
                    scorer.id,
                    format!("{}' Goal! {} scores", minute, scorer.name),
                ));
            }
        }

        events.sort_by_key(|e| e.minute);

        debug!(
            "match {} played: {} {} {}",
            fixture.id, fixture.home_club_id, score, fixture.away_club_id
        );

        MatchResult {
            fixture_id: fixture.id.clone(),
            season: fixture.season,
            day: fixture.day,
            home_club_id: fixture.home_club_id,
            away_club_id: fixture.away_club_id,
            score,
            events,
        }
    }

    /// Per-minute scoring probabilities. Both come from one goal budget so
    /// the total rate stays the same whatever the gap.
    pub fn goal_chances(home_rating: f32, away_rating: f32) -> (f64, f64) {
        let diff = (home_rating - away_rating) as f64;
        let home_share = 0.5 + (diff / 100.0).clamp(-MAX_SHARE_SHIFT, MAX_SHARE_SHIFT);
        let per_minute = EXPECTED_GOALS / MATCH_MINUTES as f64;

        (per_minute * home_share, per_minute * (1.0 - home_share))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{AttributeKind, Formation, Mentality, PlayerPositionType, PlayerSkills, Playstyle};
    use crate::r#match::MatchPlayer;

    fn squad(club_id: u32, ability: u8) -> MatchSquad {
        let mut skills = PlayerSkills::default();
        for kind in AttributeKind::ALL {
            skills.set(kind, 10);
        }

        let main_squad = (0..11u32)
            .map(|i| MatchPlayer {
                id: club_id * 100 + i,
                club_id,
                name: format!("P{}", i),
                position: if i == 0 {
                    PlayerPositionType::Goalkeeper
                } else {
                    PlayerPositionType::Midfielder
                },
                current_ability: ability,
                playstyle: Playstyle::Balanced,
                skills,
            })
            .collect();

        MatchSquad { club_id, main_squad }
    }

    fn fixture() -> Fixture {
        Fixture::new(1, 7, 1, 2)
    }

    #[test]
    fn test_stronger_home_side_scores_more_on_average() {
        let home = squad(1, 70);
        let away = squad(2, 50);
        let tactics = Tactics::new(Formation::T442, Mentality::Balanced);

        let mut home_total = 0u32;
        let mut away_total = 0u32;

        for seed in 42..1042u32 {
            let mut rng = SeededRng::new(seed);
            let result = MatchSimulator::simulate(
                &fixture(),
                MatchSide { squad: &home, tactics: &tactics },
                MatchSide { squad: &away, tactics: &tactics },
                &mut rng,
            );

            home_total += result.score.home as u32;
            away_total += result.score.away as u32;
        }

        assert!(home_total as f64 / 1000.0 > away_total as f64 / 1000.0);
    }

    #[test]
    fn test_goal_events_match_score_and_exclude_keeper() {
        let home = squad(1, 60);
        let away = squad(2, 60);
        let tactics = Tactics::default();

        for seed in 0..200u32 {
            let result = MatchSimulator::simulate(
                &fixture(),
                MatchSide { squad: &home, tactics: &tactics },
                MatchSide { squad: &away, tactics: &tactics },
                &mut SeededRng::new(seed),
            );

            let home_goals = result.goal_events().filter(|e| e.club_id == 1).count();
            let away_goals = result.goal_events().filter(|e| e.club_id == 2).count();

            assert_eq!(home_goals, result.score.home as usize);
            assert_eq!(away_goals, result.score.away as usize);
            assert!(result.events.windows(2).all(|w| w[0].minute <= w[1].minute));
            assert!(result.events.iter().all(|e| e.player_id != Some(100) && e.player_id != Some(200)));
        }
    }

    #[test]
    fn test_empty_side_cannot_score() {
        let home = squad(1, 60);
        let away = MatchSquad { club_id: 2, main_squad: Vec::new() };
        let tactics = Tactics::default();

        for seed in 0..100u32 {
            let result = MatchSimulator::simulate(
                &fixture(),
                MatchSide { squad: &home, tactics: &tactics },
                MatchSide { squad: &away, tactics: &tactics },
                &mut SeededRng::new(seed),
            );

            assert_eq!(result.score.away, 0);
        }
    }

    #[test]
    fn test_goal_budget_is_conserved() {
        let (even_home, even_away) = MatchSimulator::goal_chances(60.0, 60.0);
        let (home, away) = MatchSimulator::goal_chances(95.0, 20.0);

        assert!((even_home - even_away).abs() < 1e-12);
        assert!(((home + away) - (even_home + even_away)).abs() < 1e-12);
        assert!((home / (home + away) - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_mentality_moves_rating() {
        let squad = squad(1, 60);
        let attacking = Tactics::new(Formation::T442, Mentality::Attacking);
        let defensive = Tactics::new(Formation::T442, Mentality::Defensive);

        assert_eq!(MatchSide { squad: &squad, tactics: &attacking }.rating(), 65.0);
        assert_eq!(MatchSide { squad: &squad, tactics: &defensive }.rating(), 55.0);
    }

    #[test]
    fn test_same_seed_same_result() {
        let home = squad(1, 65);
        let away = squad(2, 55);
        let tactics = Tactics::default();

        let play = || {
            MatchSimulator::simulate(
                &fixture(),
                MatchSide { squad: &home, tactics: &tactics },
                MatchSide { squad: &away, tactics: &tactics },
                &mut SeededRng::new(7),
            )
        };

        assert_eq!(play(), play());
    }
}

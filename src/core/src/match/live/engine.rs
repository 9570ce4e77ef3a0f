use crate::club::{AttributeKind, Club, Mentality, Player, PlayerPositionType};
use crate::error::{SimulationError, SimulationResult};
use crate::league::Fixture;
use crate::r#match::live::contest::Contest;
use crate::r#match::{
    Commentary, CommentaryContext, CommentaryProvider, MatchEvent, MatchEventKind, MatchPlayer,
    MatchResult, MatchSquad, Score, Side, SquadSelector, TemplateCommentary, MATCH_MINUTES,
};
use crate::utils::SeededRng;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub const MIN_CHUNK_MINUTES: i32 = 5;
pub const MAX_CHUNK_MINUTES: i32 = 15;
pub const EVENT_PROBABILITY: f64 = 0.3;
pub const ATTACK_PROBABILITY: f64 = 0.85;
const DOMINANCE_SCALE: f32 = 60.0;
const MIN_ATTACK_SHARE: f32 = 0.2;
const MAX_ATTACK_SHARE: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiveMatchState {
    Uninitialized,
    Ready,
    Simulating { chunk: u32 },
    Paused,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkResult {
    pub new_time: u8,
    pub new_events: Vec<MatchEvent>,
    pub match_over: bool,
}

struct LiveSide {
    club_id: u32,
    name: String,
    mentality: Mentality,
    squad: MatchSquad,
}

impl LiveSide {
    fn new(club: &Club, players: &[Player]) -> Self {
        LiveSide {
            club_id: club.id,
            name: club.short_name.clone(),
            mentality: club.tactics.mentality,
            squad: SquadSelector::select(club.id, players),
        }
    }

    /// Defenders of the XI, or every outfield player when there are none.
    fn defenders(&self) -> Vec<&MatchPlayer> {
        let defenders = self.squad.by_position(PlayerPositionType::Defender);

        if defenders.is_empty() {
            self.squad.outfield()
        } else {
            defenders
        }
    }
}

/// Chunked simulation of the one match the manager is watching.
pub struct LiveMatchEngine {
    state: LiveMatchState,
    rng: SeededRng,
    commentary: Box<dyn CommentaryProvider>,
    fixture: Option<Fixture>,
    home: Option<LiveSide>,
    away: Option<LiveSide>,
    minute: u8,
    score: Score,
    events: Vec<MatchEvent>,
    chunks: u32,
}

impl LiveMatchEngine {
    pub fn new(rng: SeededRng) -> Self {
        Self::with_commentary(rng, Box::new(TemplateCommentary))
    }

    pub fn with_commentary(rng: SeededRng, commentary: Box<dyn CommentaryProvider>) -> Self {
        LiveMatchEngine {
            state: LiveMatchState::Uninitialized,
            rng,
            commentary,
            fixture: None,
            home: None,
            away: None,
            minute: 0,
            score: Score::default(),
            events: Vec::new(),
            chunks: 0,
        }
    }

    pub fn initialize(
        &mut self,
        fixture: &Fixture,
        all_players: &[Player],
        home_club: &Club,
        away_club: &Club,
    ) -> SimulationResult<()> {
        if fixture.home_club_id != home_club.id || fixture.away_club_id != away_club.id {
            return Err(SimulationError::InvalidState(format!(
                "fixture {} is not {} v {}",
                fixture.id, home_club.short_name, away_club.short_name
            )));
        }

        self.fixture = Some(fixture.clone());
        self.home = Some(LiveSide::new(home_club, all_players));
        self.away = Some(LiveSide::new(away_club, all_players));
        self.minute = 0;
        self.score = Score::default();
        self.events.clear();
        self.chunks = 0;
        self.state = LiveMatchState::Ready;

        info!(
            "⚽ live match ready: {} v {}",
            home_club.short_name, away_club.short_name
        );

        Ok(())
    }

    pub fn state(&self) -> LiveMatchState {
        self.state
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn simulate_next_chunk(&mut self) -> SimulationResult<ChunkResult> {
        match self.state {
            LiveMatchState::Uninitialized => {
                return Err(SimulationError::InvalidState(
                    "live match has not been initialized".to_string(),
                ));
            }
            LiveMatchState::Finished => {
                return Ok(ChunkResult {
                    new_time: self.minute,
                    new_events: Vec::new(),
                    match_over: true,
                });
            }
            _ => {}
        }

        self.chunks += 1;
        self.state = LiveMatchState::Simulating { chunk: self.chunks };

        let length = self.rng.range(MIN_CHUNK_MINUTES, MAX_CHUNK_MINUTES + 1) as u8;
        let end = self.minute.saturating_add(length).min(MATCH_MINUTES);
        let first_new = self.events.len();

        for minute in self.minute + 1..=end {
            if !self.rng.chance(EVENT_PROBABILITY) {
                continue;
            }

            if self.rng.chance(ATTACK_PROBABILITY) {
                self.play_attack(minute);
            } else {
                self.play_card(minute);
            }
        }

        self.minute = end;
        let match_over = end >= MATCH_MINUTES;

        if self.events.len() == first_new && !match_over {
            self.push_filler(end);
        }

        self.state = if match_over {
            LiveMatchState::Finished
        } else {
            LiveMatchState::Paused
        };

        let new_events = self.events[first_new..].to_vec();

        debug!(
            "live chunk {}: minute {}, {} new events, score {}",
            self.chunks,
            end,
            new_events.len(),
            self.score
        );

        Ok(ChunkResult {
            new_time: end,
            new_events,
            match_over,
        })
    }

    /// Runs whatever is left of the match.
    pub fn simulate_to_end(&mut self) -> SimulationResult<()> {
        while !self.simulate_next_chunk()?.match_over {}
        Ok(())
    }

    pub fn finish(&self) -> SimulationResult<MatchResult> {
        let (LiveMatchState::Finished, Some(fixture)) = (self.state, &self.fixture) else {
            return Err(SimulationError::InvalidState(
                "live match is not finished".to_string(),
            ));
        };

        Ok(MatchResult {
            fixture_id: fixture.id.clone(),
            season: fixture.season,
            day: fixture.day,
            home_club_id: fixture.home_club_id,
            away_club_id: fixture.away_club_id,
            score: self.score,
            events: self.events.clone(),
        })
    }

    fn sides(&self) -> Option<(&LiveSide, &LiveSide)> {
        Some((self.home.as_ref()?, self.away.as_ref()?))
    }

    fn side(&self, side: Side) -> Option<&LiveSide> {
        match side {
            Side::Home => self.home.as_ref(),
            Side::Away => self.away.as_ref(),
        }
    }

    /// Probability that the next attack belongs to the home side.
    fn home_attack_share(&self) -> f32 {
        let Some((home, away)) = self.sides() else {
            return 0.5;
        };

        let dominance = (home.squad.average_ability() - away.squad.average_ability()) / DOMINANCE_SCALE;
        let mentality = home.mentality.attack_share_shift() - away.mentality.attack_share_shift();

        (0.5 + dominance + mentality).clamp(MIN_ATTACK_SHARE, MAX_ATTACK_SHARE)
    }

    fn play_attack(&mut self, minute: u8) {
        let share = self.home_attack_share() as f64;
        let attacking = if self.rng.chance(share) {
            Side::Home
        } else {
            Side::Away
        };

        let Some(attack) = self.resolve_attack(attacking) else {
            return;
        };

        match attack {
            AttackOutcome::Lost => {}
            AttackOutcome::Saved(player) => {
                self.push_event(minute, MatchEventKind::Chance, attacking, Some(player));
            }
            AttackOutcome::Scored(player) => {
                self.score.add_goal(attacking);
                self.push_event(minute, MatchEventKind::Goal, attacking, Some(player));
            }
        }
    }

    /// Dribble against a defender, then shoot against the keeper. `None`
    /// when either side has nobody to put into the contest.
    fn resolve_attack(&mut self, attacking: Side) -> Option<AttackOutcome> {
        let attackers = self.side(attacking)?.squad.outfield().into_iter().cloned().collect::<Vec<_>>();
        let defending = self.side(attacking.opponent())?;
        let defenders = defending.defenders().into_iter().cloned().collect::<Vec<_>>();
        let keeper = defending.squad.keeper().cloned();

        let attacker = self.rng.choice(&attackers).ok()?.clone();
        let defender = self.rng.choice(&defenders).ok()?;

        if !Contest::resolve(
            attacker.effective(AttributeKind::Dribbling),
            defender.effective(AttributeKind::Tackling),
            &mut self.rng,
        ) {
            return Some(AttackOutcome::Lost);
        }

        let keeper = keeper?;

        if Contest::resolve(
            attacker.effective(AttributeKind::Shooting),
            keeper.effective(AttributeKind::Agility),
            &mut self.rng,
        ) {
            Some(AttackOutcome::Scored(attacker))
        } else {
            Some(AttackOutcome::Saved(attacker))
        }
    }

    fn play_card(&mut self, minute: u8) {
        let Ok(&side) = self.rng.choice(&[Side::Home, Side::Away]) else {
            return;
        };

        let candidates: Vec<MatchPlayer> = match self.side(side) {
            Some(live_side) => live_side
                .squad
                .main_squad
                .iter()
                .filter(|p| !p.is_goalkeeper())
                .cloned()
                .collect(),
            None => return,
        };

        if let Ok(player) = self.rng.choice(&candidates) {
            let player = player.clone();
            self.push_event(minute, MatchEventKind::Card, side, Some(player));
        }
    }

    fn push_filler(&mut self, minute: u8) {
        self.push_event(minute, MatchEventKind::Commentary, Side::Home, None);
    }

    fn push_event(&mut self, minute: u8, kind: MatchEventKind, side: Side, player: Option<MatchPlayer>) {
        let Some((home, away)) = self.sides() else {
            return;
        };

        let acting = if side == Side::Home { home } else { away };

        let ctx = CommentaryContext {
            kind,
            minute,
            home_club: &home.name,
            away_club: &away.name,
            acting_club: &acting.name,
            player_name: player.as_ref().map(|p| p.name.as_str()),
            score: self.score,
        };

        let description = Commentary::describe_or_fallback(self.commentary.as_ref(), &ctx);
        let club_id = acting.club_id;

        self.events.push(MatchEvent {
            minute,
            kind,
            club_id,
            player_id: player.map(|p| p.id),
            description,
        });
    }
}

enum AttackOutcome {
    Lost,
    Saved(MatchPlayer),
    Scored(MatchPlayer),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{ClubColors, FinancialTier, PlayerAttributes, PlayerSkills, Tactics};
    use crate::error::NarrativeError;
    use crate::shared::FullName;

    fn create_test_player(id: u32, club_id: u32, position: PlayerPositionType, ability: u8) -> Player {
        let mut skills = PlayerSkills::default();
        for kind in AttributeKind::ALL {
            skills.set(kind, 8 + ability / 10);
        }

        Player::builder()
            .id(id)
            .full_name(FullName::new("Test".to_string(), format!("Player{}", id)))
            .club_id(club_id)
            .nation_id(1)
            .age(25)
            .position(position)
            .skills(skills)
            .player_attributes(PlayerAttributes {
                current_ability: ability,
                potential_ability: 99,
                ..Default::default()
            })
            .build()
            .expect("Failed to build test player")
    }

    fn roster(club_id: u32, ability: u8) -> Vec<Player> {
        (0..14u32)
            .map(|i| {
                let position = match i {
                    0 => PlayerPositionType::Goalkeeper,
                    1..=5 => PlayerPositionType::Defender,
                    6..=9 => PlayerPositionType::Midfielder,
                    _ => PlayerPositionType::Forward,
                };
                create_test_player(club_id * 100 + i, club_id, position, ability)
            })
            .collect()
    }

    fn club(id: u32, short_name: &str) -> Club {
        Club {
            id,
            short_name: short_name.to_string(),
            name: format!("{} FC", short_name),
            nation_id: 1,
            colors: ClubColors::default(),
            financial_tier: FinancialTier::Stable,
            crest_tag: "oak".to_string(),
            tactics: Tactics::default(),
            youth_intake_day: 100,
            rivals: Vec::new(),
        }
    }

    fn players() -> Vec<Player> {
        let mut players = roster(1, 70);
        players.extend(roster(2, 55));
        players
    }

    fn ready_engine(seed: u32) -> LiveMatchEngine {
        let mut engine = LiveMatchEngine::new(SeededRng::new(seed));
        engine
            .initialize(&Fixture::new(1, 7, 1, 2), &players(), &club(1, "EMB"), &club(2, "STO"))
            .unwrap();
        engine
    }

    #[test]
    fn test_match_terminates_within_bounded_calls() {
        for seed in 0..300 {
            let mut engine = ready_engine(seed);
            let mut calls = 0;

            loop {
                calls += 1;
                let chunk = engine.simulate_next_chunk().unwrap();
                if chunk.match_over {
                    assert_eq!(chunk.new_time, 90);
                    break;
                }
                assert!(calls <= 19);
            }

            assert!(calls <= 90 / 5 + 1);
            assert_eq!(engine.state(), LiveMatchState::Finished);
        }
    }

    #[test]
    fn test_goal_events_match_final_score() {
        for seed in 0..300 {
            let mut engine = ready_engine(seed);
            engine.simulate_to_end().unwrap();

            let result = engine.finish().unwrap();
            let home_goals = result.goal_events().filter(|e| e.club_id == 1).count();
            let away_goals = result.goal_events().filter(|e| e.club_id == 2).count();

            assert_eq!(home_goals, result.score.home as usize);
            assert_eq!(away_goals, result.score.away as usize);
        }
    }

    #[test]
    fn test_unfinished_chunks_are_never_silent() {
        let mut engine = ready_engine(5);

        loop {
            let chunk = engine.simulate_next_chunk().unwrap();
            if chunk.match_over {
                break;
            }
            assert!(!chunk.new_events.is_empty());
            assert_eq!(engine.state(), LiveMatchState::Paused);
        }
    }

    #[test]
    fn test_events_are_time_ordered_and_keepers_never_booked() {
        let mut engine = ready_engine(77);
        engine.simulate_to_end().unwrap();

        let events = engine.events();
        assert!(events.windows(2).all(|w| w[0].minute <= w[1].minute));

        for event in events.iter().filter(|e| e.kind == MatchEventKind::Card) {
            assert_ne!(event.player_id, Some(100));
            assert_ne!(event.player_id, Some(200));
        }
    }

    #[test]
    fn test_finished_match_returns_no_events() {
        let mut engine = ready_engine(9);
        engine.simulate_to_end().unwrap();

        let chunk = engine.simulate_next_chunk().unwrap();

        assert!(chunk.match_over);
        assert!(chunk.new_events.is_empty());
        assert_eq!(chunk.new_time, 90);
    }

    #[test]
    fn test_uninitialized_engine_refuses_to_run() {
        let mut engine = LiveMatchEngine::new(SeededRng::new(1));

        assert!(matches!(
            engine.simulate_next_chunk(),
            Err(SimulationError::InvalidState(_))
        ));
        assert!(engine.finish().is_err());
    }

    #[test]
    fn test_initialize_rejects_mismatched_clubs() {
        let mut engine = LiveMatchEngine::new(SeededRng::new(1));

        let result = engine.initialize(&Fixture::new(1, 7, 1, 2), &players(), &club(2, "STO"), &club(1, "EMB"));

        assert!(result.is_err());
        assert_eq!(engine.state(), LiveMatchState::Uninitialized);
    }

    #[test]
    fn test_failing_commentary_does_not_stop_the_match() {
        struct Broken;

        impl CommentaryProvider for Broken {
            fn describe(&self, _: &CommentaryContext<'_>) -> Result<String, NarrativeError> {
                Err(NarrativeError::Provider("offline".to_string()))
            }
        }

        let mut engine = LiveMatchEngine::with_commentary(SeededRng::new(3), Box::new(Broken));
        engine
            .initialize(&Fixture::new(1, 7, 1, 2), &players(), &club(1, "EMB"), &club(2, "STO"))
            .unwrap();

        engine.simulate_to_end().unwrap();

        assert!(engine.events().iter().all(|e| !e.description.is_empty()));
    }

    #[test]
    fn test_empty_away_side_still_finishes() {
        let mut engine = LiveMatchEngine::new(SeededRng::new(4));
        engine
            .initialize(&Fixture::new(1, 7, 1, 2), &roster(1, 60), &club(1, "EMB"), &club(2, "STO"))
            .unwrap();

        engine.simulate_to_end().unwrap();

        assert_eq!(engine.finish().unwrap().score.away, 0);
    }

    #[test]
    fn test_same_seed_same_match() {
        let mut a = ready_engine(21);
        let mut b = ready_engine(21);
        a.simulate_to_end().unwrap();
        b.simulate_to_end().unwrap();

        assert_eq!(a.finish().unwrap(), b.finish().unwrap());
    }
}

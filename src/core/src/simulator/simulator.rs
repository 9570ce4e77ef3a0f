use crate::club::{
    last_player_id, ClubAcademy, PlayerTraining, StaffRole, SCOUTING_KNOWLEDGE_FULL,
};
use crate::error::{SimulationError, SimulationResult};
use crate::league::{Fixture, LeagueTable, ScheduleGenerator};
use crate::r#match::{MatchResult, MatchSide, MatchSimulator, SquadSelector};
use crate::simulator::{GameDate, NarrativeMessage, SimulationContext, WorldSnapshot};
use crate::utils::{Logging, SeededRng};
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

const SCOUT_PROGRESS_MIN: i32 = 2;
const SCOUT_PROGRESS_MAX: i32 = 8;

const SENDER_BOARD: &str = "Board of Directors";
const SENDER_ACADEMY: &str = "Head of Youth Development";
const SENDER_SCOUT: &str = "Chief Scout";
const SENDER_ASSISTANT: &str = "Assistant Manager";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAdvanceRequest {
    pub snapshot: WorldSnapshot,
    /// Results already played live for fixtures of the new day.
    #[serde(default)]
    pub played: Vec<MatchResult>,
}

impl DayAdvanceRequest {
    pub fn new(snapshot: WorldSnapshot) -> Self {
        DayAdvanceRequest {
            snapshot,
            played: Vec::new(),
        }
    }

    pub fn with_played(mut self, played: Vec<MatchResult>) -> Self {
        self.played = played;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAdvanceResponse {
    pub snapshot: WorldSnapshot,
    pub match_results: Vec<MatchResult>,
    pub messages: Vec<NarrativeMessage>,
}

impl DayAdvanceResponse {
    pub fn has_match_results(&self) -> bool {
        !self.match_results.is_empty()
    }
}

pub struct FootballSimulator;

impl FootballSimulator {
    pub fn advance_day(
        snapshot: WorldSnapshot,
        ctx: SimulationContext<'_>,
    ) -> SimulationResult<DayAdvanceResponse> {
        Self::advance_day_with_results(snapshot, ctx, Vec::new())
    }

    pub fn process(
        request: DayAdvanceRequest,
        ctx: SimulationContext<'_>,
    ) -> SimulationResult<DayAdvanceResponse> {
        Self::advance_day_with_results(request.snapshot, ctx, request.played)
    }

    /// One calendar step. Fixtures of the new day that appear in `played`
    /// keep that result instead of being simulated again. A rollover into
    /// a season too short for the schedule is refused before anything changes.
    pub fn advance_day_with_results(
        mut snapshot: WorldSnapshot,
        ctx: SimulationContext<'_>,
        played: Vec<MatchResult>,
    ) -> SimulationResult<DayAdvanceResponse> {
        let mut messages = Vec::new();

        let (date, new_season) = snapshot.date.next(ctx.config.season_length_days);
        if new_season {
            ctx.config.validate_for(snapshot.clubs.len())?;
            Self::roll_season(&mut snapshot, date, ctx, &mut messages);
        }
        snapshot.date = date;

        let mut rng = SeededRng::for_day(date.season, date.day);

        let match_results = Logging::estimate_result(
            || Self::play_fixtures(&mut snapshot, &mut rng, played),
            &format!("play fixtures of {}", date),
        );
        Self::report_results(&snapshot, &match_results, &mut messages);

        Self::youth_intake(&mut snapshot, ctx, &mut rng, &mut messages);
        Self::train(&mut snapshot, ctx, &mut rng);
        Self::progress_scouting(&mut snapshot, &mut rng, &mut messages);
        Self::morale_event(&mut snapshot, ctx, &mut rng, &mut messages);

        debug!(
            "advanced to {}: {} results, {} messages",
            date,
            match_results.len(),
            messages.len()
        );

        Ok(DayAdvanceResponse {
            snapshot,
            match_results,
            messages,
        })
    }

    fn roll_season(
        snapshot: &mut WorldSnapshot,
        date: GameDate,
        ctx: SimulationContext<'_>,
        messages: &mut Vec<NarrativeMessage>,
    ) {
        let finished = snapshot.date.season;

        let champion = snapshot
            .league_table
            .rows
            .first()
            .and_then(|row| snapshot.club(row.club_id))
            .map(|club| club.name.clone())
            .unwrap_or_else(|| "nobody".to_string());

        let managed_position = snapshot
            .league_table
            .get(snapshot.managed_club_id)
            .map(|row| row.position);

        info!("🏆 season {} finished, champion: {}", finished, champion);

        messages.push(NarrativeMessage::new(
            date,
            SENDER_BOARD,
            format!("Season {} review", finished),
            match managed_position {
                Some(position) => format!(
                    "{} are champions. We finished in position {}. Season {} starts today.",
                    champion, position, date.season
                ),
                None => format!("{} are champions. Season {} starts today.", champion, date.season),
            },
        ));

        snapshot.league_table = LeagueTable::new(&snapshot.club_ids());
        snapshot.fixtures = ScheduleGenerator::generate(
            date.season,
            &snapshot.club_ids(),
            ctx.config.first_match_day,
            ctx.config.round_interval_days,
        );

        for player in snapshot.players.iter_mut() {
            player.age = player.age.saturating_add(1);
        }
    }

    /// Each fixture gets its own stream derived from the day stream, so the
    /// parallel run is independent of scheduling order.
    fn play_fixtures(
        snapshot: &mut WorldSnapshot,
        rng: &mut SeededRng,
        played: Vec<MatchResult>,
    ) -> Vec<MatchResult> {
        let day = snapshot.date.day;
        let season = snapshot.date.season;

        let todays: Vec<(&Fixture, SeededRng)> = snapshot
            .fixtures
            .iter()
            .filter(|f| f.day == day && f.season == season)
            .enumerate()
            .map(|(idx, fixture)| (fixture, rng.derive(idx as u32)))
            .collect();

        if todays.is_empty() {
            return Vec::new();
        }

        let clubs = &snapshot.clubs;
        let players = &snapshot.players;

        let results: Vec<MatchResult> = todays
            .into_par_iter()
            .filter_map(|(fixture, mut fixture_rng)| {
                if let Some(result) = played.iter().find(|r| r.fixture_id == fixture.id) {
                    return Some(result.clone());
                }

                let home = clubs.iter().find(|c| c.id == fixture.home_club_id);
                let away = clubs.iter().find(|c| c.id == fixture.away_club_id);

                let (Some(home), Some(away)) = (home, away) else {
                    let missing = if home.is_none() {
                        fixture.home_club_id
                    } else {
                        fixture.away_club_id
                    };
                    warn!(
                        "skipping fixture {}: {}",
                        fixture.id,
                        SimulationError::missing_club(missing)
                    );
                    return None;
                };

                let home_squad = SquadSelector::select(home.id, players);
                let away_squad = SquadSelector::select(away.id, players);

                Some(MatchSimulator::simulate(
                    fixture,
                    MatchSide {
                        squad: &home_squad,
                        tactics: &home.tactics,
                    },
                    MatchSide {
                        squad: &away_squad,
                        tactics: &away.tactics,
                    },
                    &mut fixture_rng,
                ))
            })
            .collect();

        snapshot.league_table.update_from_results(&results);

        info!("⚽ day {}: {} matches played", day, results.len());

        results
    }

    fn report_results(snapshot: &WorldSnapshot, results: &[MatchResult], messages: &mut Vec<NarrativeMessage>) {
        let managed = snapshot.managed_club_id;

        for result in results {
            let Some((scored, conceded)) = result.goals_for(managed) else {
                continue;
            };

            let opponent = result
                .opponent_of(managed)
                .and_then(|id| snapshot.club(id))
                .map(|club| club.name.as_str())
                .unwrap_or("unknown opposition");

            let verdict = match scored.cmp(&conceded) {
                std::cmp::Ordering::Greater => "Victory",
                std::cmp::Ordering::Equal => "Draw",
                std::cmp::Ordering::Less => "Defeat",
            };

            let position = snapshot
                .league_table
                .get(managed)
                .map(|row| row.position)
                .unwrap_or_default();

            messages.push(NarrativeMessage::new(
                snapshot.date,
                SENDER_ASSISTANT,
                format!("{} against {}", verdict, opponent),
                format!(
                    "We finished {}-{} against {}. We are now in position {}.",
                    scored, conceded, opponent, position
                ),
            ));
        }
    }

    fn youth_intake(
        snapshot: &mut WorldSnapshot,
        ctx: SimulationContext<'_>,
        rng: &mut SeededRng,
        messages: &mut Vec<NarrativeMessage>,
    ) {
        let Some(club) = snapshot.managed_club() else {
            warn!(
                "youth intake skipped: {}",
                SimulationError::missing_club(snapshot.managed_club_id)
            );
            return;
        };

        let academy = ClubAcademy::new(club, ctx.config.youth_intake_size);
        if !academy.should_produce_players(snapshot.date.day) {
            return;
        }

        let produced = academy.produce_youth_players(
            ctx.nations,
            rng,
            last_player_id(&snapshot.players),
            true,
        );

        match produced {
            Ok(result) => {
                let names: Vec<String> = result
                    .players
                    .iter()
                    .map(|p| format!("{} ({}, {})", p.full_name, p.position.get_short_name(), p.age))
                    .collect();
                let club_name = club.name.clone();

                let count = result.process(&mut snapshot.players);

                info!("🎓 {} youth intake: {} players", club_name, count);

                messages.push(NarrativeMessage::new(
                    snapshot.date,
                    SENDER_ACADEMY,
                    format!("{} youth intake", club_name),
                    format!("{} youngsters join the academy: {}.", count, names.join(", ")),
                ));
            }
            Err(err) => warn!("youth intake skipped: {}", err),
        }
    }

    fn train(snapshot: &mut WorldSnapshot, ctx: SimulationContext<'_>, rng: &mut SeededRng) {
        let interval = ctx.config.training_interval_days;
        if interval == 0 || snapshot.date.day % interval != 0 {
            return;
        }

        let results = PlayerTraining::train_all(&snapshot.players, rng);
        let improved = results
            .iter()
            .filter(|result| result.process(&mut snapshot.players))
            .count();

        debug!("training: {} players improved", improved);
    }

    fn progress_scouting(
        snapshot: &mut WorldSnapshot,
        rng: &mut SeededRng,
        messages: &mut Vec<NarrativeMessage>,
    ) {
        let date = snapshot.date;
        let assignments = std::mem::take(&mut snapshot.scouting_assignments);

        let sender = snapshot
            .staff
            .find_role(snapshot.managed_club_id, StaffRole::Scout)
            .map(|scout| format!("{} ({})", scout.full_name, SENDER_SCOUT))
            .unwrap_or_else(|| SENDER_SCOUT.to_string());

        for mut assignment in assignments {
            let Some(player) = snapshot.players.iter_mut().find(|p| p.id == assignment.player_id) else {
                warn!(
                    "scouting assignment dropped: {}",
                    SimulationError::missing_player(assignment.player_id)
                );
                continue;
            };

            let progress = rng.range(SCOUT_PROGRESS_MIN, SCOUT_PROGRESS_MAX + 1) as u8;
            player.player_attributes.add_scouting_knowledge(progress);
            assignment.days_remaining = assignment.days_remaining.saturating_sub(1);

            if assignment.days_remaining > 0 && !player.player_attributes.is_fully_scouted() {
                snapshot.scouting_assignments.push(assignment);
                continue;
            }

            player.player_attributes.scouting_knowledge = SCOUTING_KNOWLEDGE_FULL;

            messages.push(NarrativeMessage::new(
                date,
                &sender,
                format!("Scouting report: {}", player.full_name),
                format!(
                    "{} is {} years old and plays as {}. Current ability {}, potential {}, value {}.",
                    player.full_name,
                    player.age,
                    player.position.get_short_name(),
                    player.current_ability(),
                    player.potential_ability(),
                    player.player_attributes.value
                ),
            ));
        }
    }

    fn morale_event(
        snapshot: &mut WorldSnapshot,
        ctx: SimulationContext<'_>,
        rng: &mut SeededRng,
        messages: &mut Vec<NarrativeMessage>,
    ) {
        if !rng.chance(ctx.config.morale_event_probability) {
            return;
        }

        let managed = snapshot.managed_club_id;
        let candidates: Vec<u32> = snapshot.club_players(managed).map(|p| p.id).collect();

        let Ok(&player_id) = rng.choice(&candidates) else {
            return;
        };

        let steps = if rng.chance(0.5) { 1 } else { -1 };

        let Some(player) = snapshot.players.iter_mut().find(|p| p.id == player_id) else {
            return;
        };

        let before = player.morale;
        player.morale = before.shifted(steps);

        if player.morale == before {
            return;
        }

        debug!("morale: {} {:?} -> {:?}", player.full_name, before, player.morale);

        let subject = if player.morale > before {
            format!("{} in high spirits", player.full_name)
        } else {
            format!("{} is unsettled", player.full_name)
        };

        messages.push(NarrativeMessage::new(
            snapshot.date,
            SENDER_ASSISTANT,
            subject,
            format!("{}'s morale is now {}.", player.full_name, player.morale.description()),
        ));
    }
}

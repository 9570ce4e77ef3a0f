use crate::r#match::MatchResult;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const FORM_LENGTH: usize = 5;

const WIN_POINTS: u32 = 3;
const DRAW_POINTS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormResult {
    Win,
    Draw,
    Loss,
}

impl FormResult {
    pub fn letter(&self) -> char {
        match self {
            FormResult::Win => 'W',
            FormResult::Draw => 'D',
            FormResult::Loss => 'L',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTableRow {
    pub club_id: u32,
    pub position: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
    /// Most recent result last.
    pub form: VecDeque<FormResult>,
}

impl LeagueTableRow {
    pub fn new(club_id: u32, position: u32) -> Self {
        LeagueTableRow {
            club_id,
            position,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            form: VecDeque::with_capacity(FORM_LENGTH),
        }
    }

    fn record(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += scored as u32;
        self.goals_against += conceded as u32;
        self.goal_difference = self.goals_for as i64 - self.goals_against as i64;

        let outcome = match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.won += 1;
                self.points += WIN_POINTS;
                FormResult::Win
            }
            std::cmp::Ordering::Equal => {
                self.drawn += 1;
                self.points += DRAW_POINTS;
                FormResult::Draw
            }
            std::cmp::Ordering::Less => {
                self.lost += 1;
                FormResult::Loss
            }
        };

        if self.form.len() == FORM_LENGTH {
            self.form.pop_front();
        }
        self.form.push_back(outcome);
    }

    pub fn form_string(&self) -> String {
        self.form.iter().map(|f| f.letter()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    pub fn new(club_ids: &[u32]) -> Self {
        let mut table = LeagueTable {
            rows: club_ids
                .iter()
                .map(|&club_id| LeagueTableRow::new(club_id, 0))
                .collect(),
        };

        table.sort();
        table
    }

    /// Season rollover: all-zero rows for the same clubs.
    pub fn reset(&mut self) {
        let club_ids: Vec<u32> = self.rows.iter().map(|r| r.club_id).collect();
        *self = LeagueTable::new(&club_ids);
    }

    pub fn get(&self, club_id: u32) -> Option<&LeagueTableRow> {
        self.rows.iter().find(|r| r.club_id == club_id)
    }

    /// Folds one result into both rows. A result naming an unknown club is
    /// skipped as a whole so the two rows never disagree.
    pub fn update(&mut self, result: &MatchResult) -> bool {
        self.record_score(
            result.home_club_id,
            result.away_club_id,
            result.score.home,
            result.score.away,
        )
    }

    pub fn update_from_results(&mut self, results: &[MatchResult]) -> usize {
        let applied = results
            .iter()
            .filter(|result| self.record_without_sort(result))
            .count();

        if applied > 0 {
            self.sort();
        }

        applied
    }

    pub fn record_score(&mut self, home_id: u32, away_id: u32, home_goals: u8, away_goals: u8) -> bool {
        if !self.apply(home_id, away_id, home_goals, away_goals) {
            return false;
        }

        self.sort();
        true
    }

    fn record_without_sort(&mut self, result: &MatchResult) -> bool {
        self.apply(
            result.home_club_id,
            result.away_club_id,
            result.score.home,
            result.score.away,
        )
    }

    fn apply(&mut self, home_id: u32, away_id: u32, home_goals: u8, away_goals: u8) -> bool {
        let home_idx = self.rows.iter().position(|r| r.club_id == home_id);
        let away_idx = self.rows.iter().position(|r| r.club_id == away_id);

        let (Some(home_idx), Some(away_idx)) = (home_idx, away_idx) else {
            warn!(
                "league table: skipping result {} v {}, club not in table",
                home_id, away_id
            );
            return false;
        };

        if home_idx == away_idx {
            warn!("league table: skipping result of club {} against itself", home_id);
            return false;
        }

        self.rows[home_idx].record(home_goals, away_goals);
        self.rows[away_idx].record(away_goals, home_goals);

        true
    }

    /// Points, then goal difference, then goals for, then club id.
    fn sort(&mut self) {
        self.rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| b.goal_difference.cmp(&a.goal_difference))
                .then_with(|| b.goals_for.cmp(&a.goals_for))
                .then_with(|| a.club_id.cmp(&b.club_id))
        });

        for (idx, row) in self.rows.iter_mut().enumerate() {
            row.position = idx as u32 + 1;
        }
    }
}

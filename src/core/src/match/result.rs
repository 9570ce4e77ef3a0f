use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Score { home, away }
    }

    pub fn add_goal(&mut self, side: Side) {
        match side {
            Side::Home => self.home += 1,
            Side::Away => self.away += 1,
        }
    }

    pub fn goals(&self, side: Side) -> u8 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.home, self.away)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchEventKind {
    Goal,
    Chance,
    Card,
    Commentary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub minute: u8,
    pub kind: MatchEventKind,
    pub club_id: u32,
    pub player_id: Option<u32>,
    pub description: String,
}

impl MatchEvent {
    pub fn goal(minute: u8, club_id: u32, player_id: u32, description: String) -> Self {
        MatchEvent {
            minute,
            kind: MatchEventKind::Goal,
            club_id,
            player_id: Some(player_id),
            description,
        }
    }

    pub fn is_goal(&self) -> bool {
        self.kind == MatchEventKind::Goal
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub fixture_id: String,
    pub season: u32,
    pub day: u32,
    pub home_club_id: u32,
    pub away_club_id: u32,
    pub score: Score,
    pub events: Vec<MatchEvent>,
}

impl MatchResult {
    pub fn goals_for(&self, club_id: u32) -> Option<(u8, u8)> {
        if club_id == self.home_club_id {
            Some((self.score.home, self.score.away))
        } else if club_id == self.away_club_id {
            Some((self.score.away, self.score.home))
        } else {
            None
        }
    }

    pub fn goal_events(&self) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter().filter(|e| e.is_goal())
    }

    pub fn opponent_of(&self, club_id: u32) -> Option<u32> {
        if club_id == self.home_club_id {
            Some(self.away_club_id)
        } else if club_id == self.away_club_id {
            Some(self.home_club_id)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goals_for_is_relative_to_club() {
        let result = MatchResult {
            fixture_id: "1-7-1-2".to_string(),
            season: 1,
            day: 7,
            home_club_id: 1,
            away_club_id: 2,
            score: Score::new(3, 1),
            events: Vec::new(),
        };

        assert_eq!(result.goals_for(1), Some((3, 1)));
        assert_eq!(result.goals_for(2), Some((1, 3)));
        assert_eq!(result.goals_for(3), None);
        assert_eq!(result.opponent_of(2), Some(1));
    }

    #[test]
    fn test_score_add_goal() {
        let mut score = Score::default();
        score.add_goal(Side::Away);
        score.add_goal(Side::Away);
        score.add_goal(Side::Home);

        assert_eq!(score.to_string(), "1:2");
        assert_eq!(score.goals(Side::Away), 2);
        assert_eq!(Side::Home.opponent(), Side::Away);
    }
}

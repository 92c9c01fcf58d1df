//! Match (game) between two teams, or a bye for a single team.

use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which side of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

/// A single match of a round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub team_1: TeamId,
    /// None for a bye.
    pub team_2: Option<TeamId>,
    /// None if not yet played.
    pub score_1: Option<u32>,
    pub score_2: Option<u32>,
    /// Court number, when the tournament has a terrain count.
    pub terrain: Option<u32>,
    /// Starts at 1.
    pub round: u32,
    pub completed: bool,
    pub is_bye: bool,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl GameMatch {
    /// Unscored match between two teams.
    pub fn new(id: MatchId, team_1: TeamId, team_2: TeamId, round: u32) -> Self {
        Self {
            id,
            team_1,
            team_2: Some(team_2),
            score_1: None,
            score_2: None,
            terrain: None,
            round,
            completed: false,
            is_bye: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Bye for `team`: already completed and won with the given score.
    pub fn bye(id: MatchId, team: TeamId, round: u32, score_for: u32, score_against: u32) -> Self {
        let now = Utc::now();
        Self {
            id,
            team_1: team,
            team_2: None,
            score_1: Some(score_for),
            score_2: Some(score_against),
            terrain: None,
            round,
            completed: true,
            is_bye: true,
            created_at: now,
            completed_at: Some(now),
        }
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.team_1 == team || self.team_2 == Some(team)
    }

    /// Which side `team` plays on, if any.
    pub fn side_of(&self, team: TeamId) -> Option<Side> {
        if self.team_1 == team {
            Some(Side::One)
        } else if self.team_2 == Some(team) {
            Some(Side::Two)
        } else {
            None
        }
    }

    /// The other team, from `team`'s point of view. None for byes or if `team` does not play.
    pub fn opponent_of(&self, team: TeamId) -> Option<TeamId> {
        match self.side_of(team)? {
            Side::One => self.team_2,
            Side::Two => Some(self.team_1),
        }
    }

    /// (own score, opponent score) for a completed match that `team` played.
    pub fn scores_for(&self, team: TeamId) -> Option<(u32, u32)> {
        if !self.completed {
            return None;
        }
        let (s1, s2) = (self.score_1?, self.score_2?);
        match self.side_of(team)? {
            Side::One => Some((s1, s2)),
            Side::Two => Some((s2, s1)),
        }
    }

    /// Winning side of a completed match.
    pub fn winner(&self) -> Option<Side> {
        if !self.completed {
            return None;
        }
        let (s1, s2) = (self.score_1?, self.score_2?);
        Some(if s1 > s2 { Side::One } else { Side::Two })
    }

    /// Winning team of a completed match.
    pub fn winning_team(&self) -> Option<TeamId> {
        match self.winner()? {
            Side::One => Some(self.team_1),
            Side::Two => self.team_2,
        }
    }

    /// Losing team of a completed match (None for byes).
    pub fn losing_team(&self) -> Option<TeamId> {
        match self.winner()? {
            Side::One => self.team_2,
            Side::Two => Some(self.team_1),
        }
    }
}

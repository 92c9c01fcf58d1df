//! TeamStats: derived per-team statistics, recomputed from the match history on demand.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Statistics view of a team (for standings / API responses). Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team_id: TeamId,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_points_for: u32,
    pub total_points_against: u32,
    pub points_difference: i64,
    /// wins / matches_played, 0 when no match has been played.
    pub win_rate: f64,
}

impl TeamStats {
    /// Stats of a team that has not played yet.
    pub fn empty(team_id: TeamId) -> Self {
        Self {
            team_id,
            ..Self::default()
        }
    }

    /// Fold one completed match into a fresh stats value.
    pub fn with_result(&self, own_score: u32, opponent_score: u32) -> Self {
        let won = own_score > opponent_score;
        let matches_played = self.matches_played + 1;
        let wins = self.wins + u32::from(won);
        let total_points_for = self.total_points_for + own_score;
        let total_points_against = self.total_points_against + opponent_score;
        Self {
            team_id: self.team_id,
            matches_played,
            wins,
            losses: self.losses + u32::from(!won),
            total_points_for,
            total_points_against,
            points_difference: i64::from(total_points_for) - i64::from(total_points_against),
            win_rate: f64::from(wins) / f64::from(matches_played),
        }
    }
}

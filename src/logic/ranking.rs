//! Team statistics and standings.

use crate::models::{GameMatch, Team, TeamStats};
use std::cmp::Ordering;

/// Reduce a team's completed matches into its statistics.
///
/// Only completed matches the team played in are counted; byes count as a win.
pub fn calculate_team_stats(team: &Team, matches: &[GameMatch]) -> TeamStats {
    matches
        .iter()
        .filter_map(|m| m.scores_for(team.id))
        .fold(TeamStats::empty(team.id), |stats, (own, opponent)| {
            stats.with_result(own, opponent)
        })
}

/// Standings order: win rate, then point difference, then points scored (all descending).
pub fn compare_standings(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.win_rate
        .total_cmp(&a.win_rate)
        .then_with(|| b.points_difference.cmp(&a.points_difference))
        .then_with(|| b.total_points_for.cmp(&a.total_points_for))
}

/// Stats of every team, leader first. Full ties keep the order `teams` was given in.
pub fn team_rankings(teams: &[Team], matches: &[GameMatch]) -> Vec<TeamStats> {
    let mut stats: Vec<TeamStats> = teams
        .iter()
        .map(|team| calculate_team_stats(team, matches))
        .collect();
    // sort_by is stable
    stats.sort_by(compare_standings);
    stats
}

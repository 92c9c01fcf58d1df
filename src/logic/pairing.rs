//! Pairing generation for the next round.

use crate::ids::IdSource;
use crate::logic::ranking::team_rankings;
use crate::logic::scoring::{BYE_SCORE_AGAINST, BYE_SCORE_FOR};
use crate::models::{GameMatch, Team, TeamId, TeamStats};

/// How many of a team's latest games count as "recent" for rematch avoidance.
const RECENT_MATCHES: usize = 2;

/// Opponents from the team's last two completed games, oldest first. Byes have no opponent
/// and are skipped.
pub fn recent_opponents(team: TeamId, matches: &[GameMatch]) -> Vec<TeamId> {
    let played: Vec<TeamId> = matches
        .iter()
        .filter(|m| m.completed && !m.is_bye)
        .filter_map(|m| m.opponent_of(team))
        .collect();
    let start = played.len().saturating_sub(RECENT_MATCHES);
    played[start..].to_vec()
}

/// Generate the matches for `round` from the standings over `existing`.
///
/// 1. Rank all teams on the existing history.
/// 2. Take the best remaining team; among the remaining teams that are not one of its
///    recent opponents pick the closest point difference (first in ranked order on ties).
///    If every remaining team is a recent opponent, take the best ranked one anyway.
/// 3. With an odd team count the team left over gets a bye (completed 13-7 win).
/// 4. Non-bye matches are spread over terrains 1..=terrain_count when it is set.
///
/// Returns an empty list when fewer than two teams exist.
pub fn generate_next_matches(
    teams: &[Team],
    existing: &[GameMatch],
    round: u32,
    terrain_count: Option<u32>,
    ids: &impl IdSource,
) -> Vec<GameMatch> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let mut available: Vec<TeamStats> = team_rankings(teams, existing);
    let mut matches = Vec::with_capacity(available.len() / 2 + 1);

    while available.len() >= 2 {
        let anchor = available.remove(0);
        let recent = recent_opponents(anchor.team_id, existing);

        let best = available
            .iter()
            .enumerate()
            .filter(|(_, s)| !recent.contains(&s.team_id))
            // min_by_key keeps the first of equal keys
            .min_by_key(|(_, s)| (anchor.points_difference - s.points_difference).unsigned_abs())
            .map(|(i, _)| i);

        let idx = match best {
            Some(i) => i,
            None => {
                log::warn!(
                    "round {}: every remaining team recently played {}, pairing a rematch",
                    round,
                    anchor.team_id
                );
                0
            }
        };
        let opponent = available.remove(idx);
        log::debug!(
            "round {}: {} ({:+}) vs {} ({:+})",
            round,
            anchor.team_id,
            anchor.points_difference,
            opponent.team_id,
            opponent.points_difference
        );
        matches.push(GameMatch::new(
            ids.next_id(),
            anchor.team_id,
            opponent.team_id,
            round,
        ));
    }

    if let Some(count) = terrain_count.filter(|&c| c > 0) {
        assign_terrains(&mut matches, count);
    }

    if let Some(leftover) = available.pop() {
        log::info!("round {}: {} gets a bye", round, leftover.team_id);
        matches.push(GameMatch::bye(
            ids.next_id(),
            leftover.team_id,
            round,
            BYE_SCORE_FOR,
            BYE_SCORE_AGAINST,
        ));
    }

    matches
}

/// Number matches 1..=count in order, wrapping around when there are more matches than courts.
fn assign_terrains(matches: &mut [GameMatch], count: u32) {
    for (m, terrain) in matches.iter_mut().zip((1..=count).cycle()) {
        m.terrain = Some(terrain);
    }
}

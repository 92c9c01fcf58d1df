//! CSV export of the standings table.

use crate::logic::ranking::team_rankings;
use crate::models::Tournament;
use serde::Serialize;

#[derive(Serialize)]
struct StandingsRow {
    rank: usize,
    team: String,
    players: String,
    played: u32,
    wins: u32,
    losses: u32,
    points_for: u32,
    points_against: u32,
    difference: i64,
    win_rate: String,
}

/// Render the current standings as CSV with a header row, leader first.
pub fn standings_csv(tournament: &Tournament) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let standings = team_rankings(&tournament.teams, &tournament.matches);

    for (i, stats) in standings.iter().enumerate() {
        let (team, players) = tournament
            .team(stats.team_id)
            .map(|t| (t.display_name(), t.players_label()))
            .unwrap_or_else(|| (stats.team_id.to_string(), String::new()));
        writer.serialize(StandingsRow {
            rank: i + 1,
            team,
            players,
            played: stats.matches_played,
            wins: stats.wins,
            losses: stats.losses,
            points_for: stats.total_points_for,
            points_against: stats.total_points_against,
            difference: stats.points_difference,
            win_rate: format!("{:.3}", stats.win_rate),
        })?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

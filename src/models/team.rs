//! Team and TournamentType (how many players make up a team).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in matches and lookups).
pub type TeamId = Uuid;

/// Petanque formats. Each one fixes the number of players per team.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum TournamentType {
    #[serde(rename = "tete-a-tete")]
    TeteATete,
    #[default]
    #[serde(rename = "doublette")]
    Doublette,
    #[serde(rename = "triplette")]
    Triplette,
    #[serde(rename = "quadrette")]
    Quadrette,
    #[serde(rename = "sextette")]
    Sextette,
    /// Pool of 4 teams playing doublette.
    #[serde(rename = "poule-4-doublette")]
    PouleDoublette,
    /// Pool of 4 teams playing triplette.
    #[serde(rename = "poule-4-triplette")]
    PouleTriplette,
}

impl TournamentType {
    pub const ALL: [TournamentType; 7] = [
        TournamentType::TeteATete,
        TournamentType::Doublette,
        TournamentType::Triplette,
        TournamentType::Quadrette,
        TournamentType::Sextette,
        TournamentType::PouleDoublette,
        TournamentType::PouleTriplette,
    ];

    pub fn players_per_team(self) -> usize {
        match self {
            TournamentType::TeteATete => 1,
            TournamentType::Doublette | TournamentType::PouleDoublette => 2,
            TournamentType::Triplette | TournamentType::PouleTriplette => 3,
            TournamentType::Quadrette => 4,
            TournamentType::Sextette => 6,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TournamentType::TeteATete => "Tête à Tête",
            TournamentType::Doublette => "Doublette",
            TournamentType::Triplette => "Triplette",
            TournamentType::Quadrette => "Quadrette",
            TournamentType::Sextette => "Sextette",
            TournamentType::PouleDoublette => "Poule de 4 en Doublette",
            TournamentType::PouleTriplette => "Poule de 4 en Triplette",
        }
    }
}

/// A team: fixed, ordered list of player names. Frozen once the tournament starts.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Position in the tournament's team list, from 1. Assigned by `Tournament::add_team`
    /// and kept contiguous when teams are removed; 0 before the team is added.
    #[serde(default)]
    pub number: u32,
    pub players: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Build a team without validation. Use `TournamentEngine::create_team` for user input.
    pub fn new(id: TeamId, players: Vec<String>) -> Self {
        Self {
            id,
            number: 0,
            players,
            created_at: Utc::now(),
        }
    }

    /// "Équipe N", as shown in standings and exports.
    pub fn display_name(&self) -> String {
        format!("Équipe {}", self.number)
    }

    /// Player names joined with ", " (for tables and exports).
    pub fn players_label(&self) -> String {
        self.players.join(", ")
    }

    /// True when the team has at least one non-blank player name.
    pub fn has_named_player(&self) -> bool {
        self.players.iter().any(|p| !p.trim().is_empty())
    }
}

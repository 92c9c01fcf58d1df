//! Tournament, TournamentStatus and the error type shared by all tournament operations.

use crate::models::game::{GameMatch, MatchId};
use crate::models::team::{Team, TeamId, TournamentType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
///
/// All of them are validation errors: the tournament snapshot passed in is left unchanged.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TournamentError {
    /// Wrong number of players, or a blank player name.
    #[error("Invalid team: {reason}")]
    InvalidTeam { reason: String },
    /// Fewer than two teams, or a team without any named player.
    #[error("Need at least 2 teams with named players to start (found {found})")]
    InsufficientTeams { found: usize },
    /// Scores do not describe a finished petanque game (winner at 13, loser below).
    #[error("Invalid score {score_1}-{score_2}: the winner must have exactly 13, no ties")]
    InvalidScore { score_1: u32, score_2: u32 },
    #[error("Match not found")]
    MatchNotFound(MatchId),
    #[error("Match already has a result")]
    MatchAlreadyCompleted(MatchId),
    #[error("Team not found")]
    TeamNotFound(TeamId),
    /// Not every match of the round has a result yet.
    #[error("Round {round} is not complete")]
    RoundNotComplete { round: u32 },
    /// Tournament is not in a state that allows this action.
    #[error("Invalid state for this action (tournament is {actual:?})")]
    InvalidState { actual: TournamentStatus },
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Lifecycle: Setup -> Active -> Completed, never backwards.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Adding teams; no matches yet.
    #[default]
    Setup,
    /// Rounds are being played.
    Active,
    /// No more rounds.
    Completed,
}

/// Per-tournament options.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSettings {
    /// Tournament completes after this many rounds. None: only `finish` (or running out
    /// of pairings) ends it.
    #[serde(default)]
    pub max_rounds: Option<u32>,
    /// Number of courts; generated matches are spread over terrains 1..=terrain_count.
    #[serde(default)]
    pub terrain_count: Option<u32>,
}

/// Full tournament snapshot: teams, match history and phase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub tournament_type: TournamentType,
    pub settings: TournamentSettings,
    /// Frozen once the tournament leaves Setup.
    pub teams: Vec<Team>,
    /// Append-only history of all rounds, in creation order.
    pub matches: Vec<GameMatch>,
    /// 0 while in Setup.
    pub current_round: u32,
    pub status: TournamentStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Tournament {
    /// Create a new tournament in Setup state with no teams.
    pub fn new(
        id: TournamentId,
        name: impl Into<String>,
        tournament_type: TournamentType,
        settings: TournamentSettings,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            tournament_type,
            settings,
            teams: Vec::new(),
            matches: Vec::new(),
            current_round: 0,
            status: TournamentStatus::Setup,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Add a team (only valid in Setup) as the next numbered team. Its size must match the
    /// tournament type.
    pub fn add_team(&mut self, team: Team) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Setup {
            return Err(TournamentError::InvalidState { actual: self.status });
        }
        let expected = self.tournament_type.players_per_team();
        if team.players.len() != expected {
            return Err(TournamentError::InvalidTeam {
                reason: format!(
                    "{} needs {} player(s) per team, got {}",
                    self.tournament_type.display_name(),
                    expected,
                    team.players.len()
                ),
            });
        }
        let mut team = team;
        team.number = self.teams.len() as u32 + 1;
        self.teams.push(team);
        Ok(())
    }

    /// Remove a team by id (only valid in Setup). Later teams move up one number.
    pub fn remove_team(&mut self, team_id: TeamId) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Setup {
            return Err(TournamentError::InvalidState { actual: self.status });
        }
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        self.teams.remove(idx);
        for (i, team) in self.teams.iter_mut().enumerate() {
            team.number = i as u32 + 1;
        }
        Ok(())
    }

    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn get_match(&self, match_id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    /// Matches of the round being played.
    pub fn current_round_matches(&self) -> impl Iterator<Item = &GameMatch> {
        let round = self.current_round;
        self.matches.iter().filter(move |m| m.round == round)
    }

    pub fn completed_match_count(&self) -> usize {
        self.matches.iter().filter(|m| m.completed).count()
    }

    /// Serialize the snapshot (timestamps as RFC 3339 strings).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

//! Tournament lifecycle: start, record results, advance rounds, finish.
//!
//! Every operation takes a tournament snapshot and returns a new one; on error the input
//! is untouched. Callers sharing a tournament must serialize `record_result`,
//! `advance_round` and `finish` for the same tournament id.

use crate::ids::{IdSource, RandomIds};
use crate::logic::{generate_next_matches, is_round_complete, is_valid_score, team_rankings};
use crate::models::{
    MatchId, Team, TeamStats, Tournament, TournamentError, TournamentSettings, TournamentStatus,
    TournamentType,
};
use chrono::Utc;

/// Orchestrates the round lifecycle. Holds only the identifier source.
#[derive(Debug, Default)]
pub struct TournamentEngine<I = RandomIds> {
    ids: I,
}

impl<I: IdSource> TournamentEngine<I> {
    pub fn new(ids: I) -> Self {
        Self { ids }
    }

    /// Validate player names and build a team. Names are trimmed; there must be exactly
    /// `expected_size` of them and none may be blank.
    pub fn create_team<S: AsRef<str>>(
        &self,
        players: &[S],
        expected_size: usize,
    ) -> Result<Team, TournamentError> {
        if players.len() != expected_size {
            return Err(TournamentError::InvalidTeam {
                reason: format!("expected {} player(s), got {}", expected_size, players.len()),
            });
        }
        let names: Vec<String> = players.iter().map(|p| p.as_ref().trim().to_string()).collect();
        if let Some(pos) = names.iter().position(|n| n.is_empty()) {
            return Err(TournamentError::InvalidTeam {
                reason: format!("player {} has no name", pos + 1),
            });
        }
        Ok(Team::new(self.ids.next_id(), names))
    }

    /// New tournament in Setup, ready for `Tournament::add_team`.
    pub fn create_tournament(
        &self,
        name: impl Into<String>,
        tournament_type: TournamentType,
        settings: TournamentSettings,
    ) -> Tournament {
        Tournament::new(self.ids.next_id(), name, tournament_type, settings)
    }

    /// One-shot start: build the tournament from `teams` and generate round 1.
    pub fn start(
        &self,
        name: impl Into<String>,
        teams: Vec<Team>,
        tournament_type: TournamentType,
        settings: TournamentSettings,
    ) -> Result<Tournament, TournamentError> {
        check_can_start(&teams)?;
        let mut tournament = self.create_tournament(name, tournament_type, settings);
        for team in teams {
            tournament.add_team(team)?;
        }
        self.start_tournament(&tournament)
    }

    /// Setup -> Active: freeze the teams and generate round 1.
    pub fn start_tournament(&self, tournament: &Tournament) -> Result<Tournament, TournamentError> {
        if tournament.status != TournamentStatus::Setup {
            return Err(TournamentError::InvalidState {
                actual: tournament.status,
            });
        }
        check_can_start(&tournament.teams)?;

        let first_round = generate_next_matches(
            &tournament.teams,
            &[],
            1,
            tournament.settings.terrain_count,
            &self.ids,
        );

        let mut next = tournament.clone();
        next.matches = first_round;
        next.current_round = 1;
        next.status = TournamentStatus::Active;
        log::info!(
            "Tournament {} started: {} teams, {} matches in round 1",
            next.id,
            next.teams.len(),
            next.matches.len()
        );
        Ok(next)
    }

    /// Record the final score of a match. One side must have exactly 13, no ties.
    pub fn record_result(
        &self,
        tournament: &Tournament,
        match_id: MatchId,
        score_1: u32,
        score_2: u32,
    ) -> Result<Tournament, TournamentError> {
        if tournament.status != TournamentStatus::Active {
            return Err(TournamentError::InvalidState {
                actual: tournament.status,
            });
        }
        let game = tournament
            .get_match(match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        if game.completed {
            return Err(TournamentError::MatchAlreadyCompleted(match_id));
        }
        if !is_valid_score(score_1, score_2) {
            return Err(TournamentError::InvalidScore { score_1, score_2 });
        }

        let mut next = tournament.clone();
        if let Some(m) = next.matches.iter_mut().find(|m| m.id == match_id) {
            m.score_1 = Some(score_1);
            m.score_2 = Some(score_2);
            m.completed = true;
            m.completed_at = Some(Utc::now());
        }
        log::debug!("Match {} recorded {}-{}", match_id, score_1, score_2);
        Ok(next)
    }

    /// Move to the next round once the current one is complete.
    ///
    /// Completes the tournament instead when the round limit is reached or no pairing can
    /// be generated.
    pub fn advance_round(&self, tournament: &Tournament) -> Result<Tournament, TournamentError> {
        self.check_round_finished(tournament)?;

        let limit_reached = tournament
            .settings
            .max_rounds
            .is_some_and(|max| tournament.current_round >= max);
        if limit_reached {
            return Ok(complete(tournament));
        }

        let next_round = tournament.current_round + 1;
        let new_matches = generate_next_matches(
            &tournament.teams,
            &tournament.matches,
            next_round,
            tournament.settings.terrain_count,
            &self.ids,
        );
        if new_matches.is_empty() {
            return Ok(complete(tournament));
        }

        let mut next = tournament.clone();
        next.current_round = next_round;
        next.matches.extend(new_matches);
        log::info!("Tournament {} advanced to round {}", next.id, next_round);
        Ok(next)
    }

    /// End an active tournament after its current round is complete.
    pub fn finish(&self, tournament: &Tournament) -> Result<Tournament, TournamentError> {
        self.check_round_finished(tournament)?;
        Ok(complete(tournament))
    }

    /// Current standings, leader first.
    pub fn rankings(&self, tournament: &Tournament) -> Vec<TeamStats> {
        team_rankings(&tournament.teams, &tournament.matches)
    }

    pub fn is_round_complete(&self, tournament: &Tournament, round: u32) -> bool {
        is_round_complete(&tournament.matches, round)
    }

    fn check_round_finished(&self, tournament: &Tournament) -> Result<(), TournamentError> {
        if tournament.status != TournamentStatus::Active {
            return Err(TournamentError::InvalidState {
                actual: tournament.status,
            });
        }
        if !is_round_complete(&tournament.matches, tournament.current_round) {
            return Err(TournamentError::RoundNotComplete {
                round: tournament.current_round,
            });
        }
        Ok(())
    }
}

/// At least two teams, each with a named player.
fn check_can_start(teams: &[Team]) -> Result<(), TournamentError> {
    let named = teams.iter().filter(|t| t.has_named_player()).count();
    if teams.len() < 2 || named < teams.len() {
        return Err(TournamentError::InsufficientTeams { found: named });
    }
    Ok(())
}

fn complete(tournament: &Tournament) -> Tournament {
    let mut next = tournament.clone();
    next.status = TournamentStatus::Completed;
    next.completed_at = Some(Utc::now());
    log::info!(
        "Tournament {} completed after {} round(s)",
        next.id,
        next.current_round
    );
    next
}

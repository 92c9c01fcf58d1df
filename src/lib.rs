//! Petanque tournament organizer: library with models, pairing/ranking logic and the
//! round lifecycle engine.

pub mod config;
pub mod engine;
pub mod ids;
pub mod logic;
pub mod models;

pub use config::ServerConfig;
pub use engine::TournamentEngine;
pub use ids::{IdSource, RandomIds, SequentialIds};
pub use logic::{
    calculate_team_stats, generate_next_matches, is_round_complete, is_valid_score,
    matches_in_round, recent_opponents, standings_csv, team_rankings,
};
pub use models::{
    GameMatch, MatchId, Side, Team, TeamId, TeamStats, Tournament, TournamentError, TournamentId,
    TournamentSettings, TournamentStatus, TournamentType,
};

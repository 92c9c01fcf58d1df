//! Data structures for the petanque tournament: teams, matches, stats, tournament state.

mod game;
mod stats;
mod team;
mod tournament;

pub use game::{GameMatch, MatchId, Side};
pub use stats::TeamStats;
pub use team::{Team, TeamId, TournamentType};
pub use tournament::{
    Tournament, TournamentError, TournamentId, TournamentSettings, TournamentStatus,
};

//! Tournament business logic: ranking, pairing, round gate, scoring, export.

mod export;
mod pairing;
mod ranking;
mod round;
mod scoring;

pub use export::standings_csv;
pub use pairing::{generate_next_matches, recent_opponents};
pub use ranking::{calculate_team_stats, compare_standings, team_rankings};
pub use round::{is_round_complete, matches_in_round};
pub use scoring::{is_valid_score, BYE_SCORE_AGAINST, BYE_SCORE_FOR, WINNING_SCORE};

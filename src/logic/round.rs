//! Round queries: which matches belong to a round and whether it is finished.

use crate::models::GameMatch;

/// Matches of `round`, in history order.
pub fn matches_in_round(matches: &[GameMatch], round: u32) -> impl Iterator<Item = &GameMatch> {
    matches.iter().filter(move |m| m.round == round)
}

/// True iff `round` has at least one match and all of them have a result.
pub fn is_round_complete(matches: &[GameMatch], round: u32) -> bool {
    let mut round_matches = matches_in_round(matches, round).peekable();
    round_matches.peek().is_some() && round_matches.all(|m| m.completed)
}

//! Petanque score rule: a game is played to 13 points and cannot end in a tie.

/// Score that wins a game.
pub const WINNING_SCORE: u32 = 13;

/// Score credited to a team receiving a bye.
pub const BYE_SCORE_FOR: u32 = 13;
/// Score recorded against a team receiving a bye.
pub const BYE_SCORE_AGAINST: u32 = 7;

/// True when the two scores describe a finished game: the winner has exactly 13, the loser
/// somewhere in 0..13.
pub fn is_valid_score(score_1: u32, score_2: u32) -> bool {
    score_1.max(score_2) == WINNING_SCORE && score_1 != score_2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_win_to_13() {
        assert!(is_valid_score(13, 10));
        assert!(is_valid_score(0, 13));
    }

    #[test]
    fn rejects_ties_and_unfinished_games() {
        assert!(!is_valid_score(13, 13));
        assert!(!is_valid_score(10, 8));
        assert!(!is_valid_score(0, 0));
    }

    #[test]
    fn rejects_scores_past_13() {
        assert!(!is_valid_score(13, 20));
        assert!(!is_valid_score(20, 13));
        assert!(!is_valid_score(14, 2));
        assert!(!is_valid_score(13, u32::MAX));
    }

    #[test]
    fn bye_score_is_a_valid_win() {
        assert!(is_valid_score(BYE_SCORE_FOR, BYE_SCORE_AGAINST));
    }
}

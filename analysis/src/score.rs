use common::{RoundRecord, Side};

use crate::sides::side_for_round;

/// Rounds won by the team that started on `start_side`, over the first
/// `through_round` rounds.
///
/// `through_round` may be anywhere in `[0, rounds.len()]`, which is what the
/// round-by-round view uses to show the score as of a point in the match.
/// Asking for more rounds than were played is a caller bug.
pub fn score_through(
    rounds: &[RoundRecord],
    start_side: Side,
    through_round: usize,
    half_length: usize,
) -> usize {
    assert!(
        through_round <= rounds.len(),
        "score through round {} of a {} round match",
        through_round,
        rounds.len()
    );

    rounds
        .iter()
        .take(through_round)
        .enumerate()
        .filter(|(i, round)| side_for_round(start_side, *i, half_length) == round.winner)
        .count()
}

use common::Side;

/// Rounds per overtime period, split into two mini-halves of 3
pub const OT_BLOCK: usize = 6;

/// Which side a team that started the match on `start` plays round
/// `round_index` (zero-based) on.
///
/// Regulation is the usual two halves with a swap in between. Overtime
/// periods alternate which side a team opens on, so that across two
/// consecutive periods each team has opened on both sides.
pub fn side_for_round(start: Side, round_index: usize, half_length: usize) -> Side {
    if round_index < half_length {
        return start;
    }
    if round_index < half_length * 2 {
        return start.other();
    }

    let ot_round = round_index - half_length * 2;
    let ot_period = ot_round / OT_BLOCK;
    let first_mini_half = (ot_round % OT_BLOCK) < OT_BLOCK / 2;

    if (ot_period % 2 == 0) == first_mini_half {
        start.other()
    } else {
        start
    }
}

use std::collections::HashMap;

use common::{MatchStats, Side, StatColumn};

/// Orders one team's players by a scoreboard column.
///
/// The roster map has no inherent order, so players are first put in
/// ascending id order. The value sort is stable on top of that, which makes
/// ties deterministic and independent of the sort direction.
pub fn order_players(
    roster: &HashMap<String, Side>,
    side: Side,
    stats: &MatchStats,
    column: StatColumn,
    descending: bool,
) -> Vec<String> {
    let mut players: Vec<&String> = roster
        .iter()
        .filter(|(_, player_side)| **player_side == side)
        .map(|(player, _)| player)
        .collect();
    players.sort_unstable();

    players.sort_by(|a, b| {
        let ordering = column
            .value(stats, a)
            .total_cmp(&column.value(stats, b));

        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });

    players.into_iter().cloned().collect()
}

use std::collections::HashMap;

use common::{MatchStats, PlayerMap, Side};

/// Enemies flashed per flashbang thrown, for every player on the roster.
///
/// The general rule for derived ratios in this layer: a missing numerator
/// counts as 0, a missing or zero denominator makes the whole ratio 0, and
/// the result is rounded to two decimal places.
pub fn flash_efficiency(roster: &HashMap<String, Side>, stats: &MatchStats) -> PlayerMap<f64> {
    roster
        .keys()
        .map(|player| {
            let ratio = per_flash(
                stats.enemies_flashed.value(player),
                stats.flashes_thrown.value(player),
            );
            (player.clone(), ratio)
        })
        .collect()
}

fn per_flash(enemies_flashed: i64, flashes_thrown: i64) -> f64 {
    if flashes_thrown == 0 {
        return 0.0;
    }

    round2(enemies_flashed as f64 / flashes_thrown as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

use common::{KillMap, RoundEvent, RoundRecord};

/// Merges a round's kill feed and bomb sub-events into one sequence ordered
/// by elapsed time in the round.
///
/// Ties on the timestamp are broken by insertion order: kills first (ordered
/// by attacker id, then victim id), then plant, defuse and explosion. A round
/// without kills or bomb events yields an empty timeline, which is a valid
/// outcome (e.g. time expiry without any engagement).
pub fn build_timeline(kill_map: &KillMap, round: &RoundRecord) -> Vec<RoundEvent> {
    let mut kills: Vec<_> = kill_map
        .iter()
        .flat_map(|(killer, victims)| {
            victims.iter().map(move |(victim, kill)| (killer, victim, kill))
        })
        .collect();
    kills.sort_unstable_by(|(ka, va, _), (kb, vb, _)| ka.cmp(kb).then_with(|| va.cmp(vb)));

    let mut events: Vec<RoundEvent> = kills
        .into_iter()
        .map(|(killer, victim, kill)| RoundEvent::Kill {
            killer: killer.clone(),
            victim: victim.clone(),
            time: kill.time_ms,
            kill: kill.clone(),
        })
        .collect();

    if let Some((planter, time)) = round.plant() {
        events.push(RoundEvent::Plant {
            planter: planter.to_owned(),
            time,
        });
    }
    if let Some((defuser, time)) = round.defuse() {
        events.push(RoundEvent::Defuse {
            defuser: defuser.to_owned(),
            time,
        });
    }
    if let Some(time) = round.explosion() {
        events.push(RoundEvent::BombExplode { time });
    }

    events.sort_by_key(|event| event.time());

    events
}

use common::MatchTelemetry;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("document reports {expected} rounds but carries {found} round records")]
    RoundCountMismatch { expected: usize, found: usize },
    #[error("kill feed covers {found} rounds but the match has {expected}")]
    KillFeedMismatch { expected: usize, found: usize },
    #[error("team roster is empty")]
    EmptyRoster,
    #[error("round {round} carries an event with a negative timestamp")]
    NegativeEventTime { round: usize },
}

/// Checks the telemetry document once, at the boundary, before any
/// derivation runs. A document that fails here is rejected as a whole; the
/// derivations themselves never try to patch around bad shape.
pub fn validate(doc: &MatchTelemetry) -> Result<(), ValidationError> {
    if doc.rounds.len() != doc.total_rounds {
        return Err(ValidationError::RoundCountMismatch {
            expected: doc.total_rounds,
            found: doc.rounds.len(),
        });
    }

    if doc.kill_feed.len() != doc.rounds.len() {
        return Err(ValidationError::KillFeedMismatch {
            expected: doc.rounds.len(),
            found: doc.kill_feed.len(),
        });
    }

    if doc.teams.is_empty() {
        return Err(ValidationError::EmptyRoster);
    }

    for (i, (round, kills)) in doc.rounds.iter().zip(doc.kill_feed.iter()).enumerate() {
        let bad_bomb_time = round.plant().is_some_and(|(_, t)| t < 0)
            || round.defuse().is_some_and(|(_, t)| t < 0)
            || round.explosion().is_some_and(|t| t < 0);
        if bad_bomb_time {
            return Err(ValidationError::NegativeEventTime { round: i });
        }

        for (attacker, victims) in kills.iter() {
            if !doc.teams.contains_key(attacker) {
                tracing::warn!(round = i, player = %attacker, "kill by player missing from roster");
            }

            if victims.values().any(|kill| kill.time_ms < 0) {
                return Err(ValidationError::NegativeEventTime { round: i });
            }
        }
    }

    Ok(())
}

//! Pure derivations over a finished match's telemetry document: side-aware
//! scores, per-round event timelines, scoreboard ordering and the handful of
//! ratios the upstream parser does not supply.

use common::{MatchAnalysis, MatchTelemetry, RoundByRoundEntry, Side};

pub mod ratios;
pub mod reasons;
pub mod score;
pub mod scoreboard;
pub mod sides;
pub mod timeline;
pub mod validate;

pub use validate::ValidationError;

/// Regulation half length in a standard MR15 pug
pub const HALF_LENGTH: usize = 15;

/// Runs one full derivation pass over a validated document.
///
/// Team A is the team that started the match on CT, team B the one that
/// started on T.
#[tracing::instrument(skip(doc))]
pub fn analyze(doc: &MatchTelemetry) -> Result<MatchAnalysis, ValidationError> {
    validate::validate(doc)?;

    let round_by_round = round_by_round(doc, HALF_LENGTH);
    let (team_a_score, team_b_score) = round_by_round
        .last()
        .map(|entry| (entry.team_a_score, entry.team_b_score))
        .unwrap_or((0, 0));

    tracing::debug!(
        rounds = doc.total_rounds,
        players = doc.teams.len(),
        team_a_score,
        team_b_score,
        "derived match analytics"
    );

    Ok(MatchAnalysis {
        team_a_score,
        team_b_score,
        round_by_round,
        ef_per_flash: ratios::flash_efficiency(&doc.teams, &doc.stats),
    })
}

/// One entry per round: cumulative scores after the round, the sides both
/// teams played it on and the merged event timeline.
///
/// Expects a document that already passed [`validate::validate`]; a kill feed
/// shorter than the round list will panic here.
pub fn round_by_round(doc: &MatchTelemetry, half_length: usize) -> Vec<RoundByRoundEntry> {
    doc.rounds
        .iter()
        .enumerate()
        .map(|(i, round)| {
            let team_a_side = sides::side_for_round(Side::Ct, i, half_length);

            RoundByRoundEntry {
                team_a_score: score::score_through(&doc.rounds, Side::Ct, i + 1, half_length),
                team_b_score: score::score_through(&doc.rounds, Side::T, i + 1, half_length),
                team_a_side,
                team_b_side: team_a_side.other(),
                events: timeline::build_timeline(&doc.kill_feed[i], round),
            }
        })
        .collect()
}

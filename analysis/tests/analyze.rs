use std::collections::HashMap;

use analysis::{analyze, round_by_round, ValidationError};
use common::{Kill, KillMap, MatchTelemetry, RoundRecord, Side};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn round_won_by(winner: Side) -> RoundRecord {
    RoundRecord {
        winner,
        win_reason: 8,
        planter: String::new(),
        defuser: String::new(),
        planter_time: 0,
        defuser_time: 0,
        bomb_explode_time: 0,
    }
}

fn roster() -> HashMap<String, Side> {
    [
        ("alice", Side::Ct),
        ("bob", Side::Ct),
        ("carol", Side::T),
        ("dave", Side::T),
    ]
    .into_iter()
    .map(|(name, side)| (name.to_owned(), side))
    .collect()
}

fn document(winners: &[Side]) -> MatchTelemetry {
    MatchTelemetry {
        total_rounds: winners.len(),
        teams: roster(),
        rounds: winners.iter().map(|w| round_won_by(*w)).collect(),
        kill_feed: winners.iter().map(|_| KillMap::new()).collect(),
        stats: Default::default(),
    }
}

#[test]
#[traced_test]
fn twenty_round_match_scores_line_up() {
    // 15 regulation rounds, 12-3 for the CT side, then 5 more after the
    // swap that all go to the T side (the CT-start team again).
    let mut winners = Vec::new();
    winners.extend(vec![Side::Ct; 12]);
    winners.extend(vec![Side::T; 3]);
    winners.extend(vec![Side::T; 5]);

    let result = analyze(&document(&winners)).unwrap();

    assert_eq!(17, result.team_a_score);
    assert_eq!(3, result.team_b_score);
    assert_eq!(20, result.round_by_round.len());

    for (i, entry) in result.round_by_round.iter().enumerate() {
        assert_eq!(
            i + 1,
            entry.team_a_score + entry.team_b_score,
            "after round {}",
            i + 1
        );
        assert_eq!(entry.team_a_side, entry.team_b_side.other());
    }

    let last = result.round_by_round.last().unwrap();
    assert_eq!(result.team_a_score, last.team_a_score);
    assert_eq!(result.team_b_score, last.team_b_score);
}

#[test]
fn sides_swap_at_halftime_and_in_overtime() {
    let entries = round_by_round(&document(&vec![Side::Ct; 10]), 2);

    let team_a_sides: Vec<Side> = entries.iter().map(|e| e.team_a_side).collect();
    assert_eq!(
        vec![
            // regulation halves of 2
            Side::Ct,
            Side::Ct,
            Side::T,
            Side::T,
            // OT 1, first mini-half of 3 on the opposite of the start side
            Side::T,
            Side::T,
            Side::T,
            Side::Ct,
            Side::Ct,
            Side::Ct,
        ],
        team_a_sides
    );
}

#[test]
fn round_count_mismatch_is_rejected_up_front() {
    let mut doc = document(&[Side::Ct, Side::T, Side::Ct]);
    doc.total_rounds = 4;

    assert_eq!(
        Err(ValidationError::RoundCountMismatch {
            expected: 4,
            found: 3,
        }),
        analyze(&doc)
    );
}

#[test]
fn truncated_kill_feed_is_rejected_up_front() {
    let mut doc = document(&[Side::Ct, Side::T, Side::Ct]);
    doc.kill_feed.pop();

    assert_eq!(
        Err(ValidationError::KillFeedMismatch {
            expected: 3,
            found: 2,
        }),
        analyze(&doc)
    );
}

#[test]
fn negative_kill_time_is_rejected_up_front() {
    let mut doc = document(&[Side::Ct, Side::T]);
    doc.kill_feed[1].entry("alice".to_owned()).or_default().insert(
        "carol".to_owned(),
        Kill {
            weapon: "awp".to_owned(),
            assister: String::new(),
            time_ms: -2,
            is_headshot: false,
            attacker_blind: false,
            assisted_flash: false,
            no_scope: false,
            through_smoke: false,
            penetrated_objects: 0,
        },
    );

    assert_eq!(
        Err(ValidationError::NegativeEventTime { round: 1 }),
        analyze(&doc)
    );
}

#[test]
#[traced_test]
fn kills_by_unknown_players_only_warn() {
    let mut doc = document(&[Side::Ct]);
    doc.kill_feed[0].entry("mallory".to_owned()).or_default().insert(
        "bob".to_owned(),
        Kill {
            weapon: "glock".to_owned(),
            assister: String::new(),
            time_ms: 9000,
            is_headshot: true,
            attacker_blind: false,
            assisted_flash: false,
            no_scope: false,
            through_smoke: false,
            penetrated_objects: 0,
        },
    );

    let result = analyze(&doc).unwrap();

    assert_eq!(1, result.round_by_round[0].events.len());
    assert!(logs_contain("kill by player missing from roster"));
}

#[test]
fn json_document_round_trips_through_the_full_pass() {
    let doc: MatchTelemetry = serde_json::from_value(serde_json::json!({
        "totalRounds": 2,
        "teams": { "alice": "CT", "bob": "T" },
        "rounds": [
            {
                "winner": "T",
                "winReason": 1,
                "planter": "bob",
                "defuser": "",
                "planterTime": 52000,
                "defuserTime": 0,
                "bombExplodeTime": 92000
            },
            {
                "winner": "CT",
                "winReason": 7,
                "planter": "bob",
                "defuser": "alice",
                "planterTime": 47000,
                "defuserTime": 80000,
                "bombExplodeTime": 0
            }
        ],
        "killFeed": [
            {
                "bob": {
                    "alice": {
                        "weapon": "ak47",
                        "assister": "",
                        "timeMs": 30000,
                        "isHeadshot": true,
                        "attackerBlind": false,
                        "assistedFlash": false,
                        "noScope": false,
                        "throughSmoke": false,
                        "penetratedObjects": 1
                    }
                }
            },
            {}
        ],
        "kills": { "bob": 1 },
        "assists": {},
        "deaths": { "alice": 1 },
        "timesTraded": {},
        "headshotPct": { "bob": 100.0 },
        "kd": { "bob": 1.0 },
        "kdiff": { "bob": 1, "alice": -1 },
        "kpr": { "bob": 0.5 },
        "adr": { "bob": 76.5 },
        "kast": { "bob": 100.0, "alice": 50.0 },
        "impact": { "bob": 1.4 },
        "hltv": { "bob": 1.21, "alice": 0.73 },
        "rws": { "bob": 11.2 },
        "utilDamage": {},
        "flashAssists": {},
        "enemiesFlashed": { "alice": 3 },
        "teammatesFlashed": {},
        "flashesThrown": { "alice": 2 },
        "smokesThrown": {},
        "molliesThrown": {},
        "HEsThrown": {},
        "2k": {},
        "3k": {},
        "4k": {},
        "5k": {}
    }))
    .unwrap();

    let result = analyze(&doc).unwrap();

    // round 1 went to the T side, round 2 to the CT side
    assert_eq!(1, result.team_a_score);
    assert_eq!(1, result.team_b_score);
    assert_eq!(1.5, result.ef_per_flash.value("alice"));
    assert_eq!(0.0, result.ef_per_flash.value("bob"));

    // round 1 timeline: kill, plant, explosion in time order
    let events = &result.round_by_round[0].events;
    assert_eq!(3, events.len());
    assert_eq!(30000, events[0].time());
    assert_eq!(52000, events[1].time());
    assert_eq!(92000, events[2].time());

    // the serialized shape keeps the wire names the viewer expects
    let serialized = serde_json::to_value(&result).unwrap();
    assert_eq!(
        "bomb_explode",
        serialized["roundByRound"][0]["events"][2]["kind"]
    );
    assert_eq!(1.5, serialized["efPerFlash"]["alice"]);
}

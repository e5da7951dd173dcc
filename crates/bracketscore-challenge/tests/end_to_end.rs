//! End-to-end tests for a challenge pool.
//!
//! Builds brackets from JSON the way an operator would, runs submissions
//! through scoring as the tournament progresses, and checks the exported
//! standings file.

use std::path::PathBuf;

use bracketscore_challenge::{BracketChallenge, PredictionSubmission, RoundStandings, formulas};
use bracketscore_core::{Bracket, BracketPrediction, BracketResult, bracket_digest_hex};
use bracketscore_types::{BracketError, ChallengeConfig, Score, Winner};
use rust_decimal::Decimal;

fn pts(n: i64) -> Decimal {
    Decimal::from(n)
}

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "bracketscore-{tag}-{}.json",
        uuid::Uuid::now_v7()
    ))
}

fn bracket(json: &str) -> Bracket {
    Bracket::from_json(json).unwrap()
}

/// Four-team bracket with both semifinals known and the final unplayed.
const RESULTS_AFTER_SEMIS: &str = r#"{
    "left":  { "left": "Duke", "right": "UNC", "winner": "Duke", "left_score": "72", "right_score": "65" },
    "right": { "left": "Kansas", "right": "Gonzaga", "winner": "Gonzaga", "left_score": "70", "right_score": "81" },
    "winner": "?",
    "left_score": "0",
    "right_score": "0"
}"#;

const RESULTS_FINAL: &str = r#"{
    "left":  { "left": "Duke", "right": "UNC", "winner": "Duke", "left_score": "72", "right_score": "65" },
    "right": { "left": "Kansas", "right": "Gonzaga", "winner": "Gonzaga", "left_score": "70", "right_score": "81" },
    "winner": "Gonzaga",
    "left_score": "77",
    "right_score": "80"
}"#;

/// Pick each match by its predicted scores; the left side takes ties.
fn pick(left: &str, right: &str, scores: (i64, i64)) -> Winner {
    if scores.0 >= scores.1 {
        Winner::decided(left)
    } else {
        Winner::decided(right)
    }
}

fn prediction(semi_left: (i64, i64), semi_right: (i64, i64), final_: (i64, i64)) -> BracketPrediction {
    let left_winner = pick("Duke", "UNC", semi_left);
    let right_winner = pick("Kansas", "Gonzaga", semi_right);
    let champion = match (left_winner.participant(), right_winner.participant()) {
        (Some(l), Some(r)) => pick(l.as_str(), r.as_str(), final_),
        _ => unreachable!("semifinal picks are always decided"),
    };

    let mut b = Bracket::builder();
    let l = b
        .add_match("Duke", "UNC", left_winner, pts(semi_left.0), pts(semi_left.1))
        .unwrap();
    let r = b
        .add_match("Kansas", "Gonzaga", right_winner, pts(semi_right.0), pts(semi_right.1))
        .unwrap();
    let root = b
        .add_match(l, r, champion, pts(final_.0), pts(final_.1))
        .unwrap();
    BracketPrediction::new(b.finish(root).unwrap())
}

fn pool(results: &str) -> BracketChallenge {
    BracketChallenge::new(
        ChallengeConfig {
            bonus_question_count: 1,
            ..ChallengeConfig::named("office-pool")
        },
        BracketResult::new(bracket(results)),
        formulas::correct_winner(vec![pts(4), pts(2)]),
        formulas::exact_answers(vec!["Gonzaga".into()], pts(3)),
    )
    .unwrap()
}

#[test]
fn tournament_progression() {
    let mut challenge = pool(RESULTS_AFTER_SEMIS);

    // alice: Duke and Gonzaga, Gonzaga champion.
    let alice = challenge
        .add_submission(PredictionSubmission::new(
            "alice",
            prediction((70, 60), (60, 70), (60, 70)),
            ["gonzaga"],
        ))
        .unwrap();
    // bob: Duke and Kansas, Duke champion.
    let bob = challenge
        .add_submission(PredictionSubmission::new(
            "bob",
            prediction((70, 60), (70, 60), (70, 60)),
            ["Duke"],
        ))
        .unwrap();
    // carol: UNC and Kansas, UNC champion.
    let carol = challenge
        .add_submission(PredictionSubmission::new(
            "carol",
            prediction((60, 70), (70, 60), (70, 60)),
            ["Gonzaga "],
        ))
        .unwrap();

    challenge.score_brackets().unwrap();
    challenge.score_bonuses().unwrap();

    let semis = challenge.results_for_round(1);
    assert_eq!(semis.challenge, "office-pool");
    assert_eq!(semis.entry(alice).unwrap().score_on_round, Score::Points(pts(4)));
    assert_eq!(semis.entry(bob).unwrap().score_on_round, Score::Points(pts(2)));
    assert_eq!(semis.entry(carol).unwrap().score_on_round, Score::Points(pts(0)));
    assert_eq!(semis.entries[0].name, "alice");

    let final_round = challenge.results_for_round(0);
    for entry in &final_round.entries {
        assert_eq!(entry.score_on_round, Score::Pending);
        assert_eq!(entry.score_through_round, Score::Pending);
    }
    // All pending: ordered by name.
    let names: Vec<&str> = final_round.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);

    assert_eq!(final_round.entry(alice).unwrap().bonus_points, Some(pts(3)));
    assert_eq!(final_round.entry(bob).unwrap().bonus_points, Some(pts(0)));
    assert_eq!(final_round.entry(carol).unwrap().bonus_points, Some(pts(3)));

    challenge
        .update_results(BracketResult::new(bracket(RESULTS_FINAL)))
        .unwrap();
    challenge.score_brackets().unwrap();

    let final_round = challenge.results_for_round(0);
    assert_eq!(
        final_round.entry(alice).unwrap().score_through_round,
        Score::Points(pts(8))
    );
    assert_eq!(
        final_round.entry(bob).unwrap().score_through_round,
        Score::Points(pts(2))
    );
    assert_eq!(
        final_round.entry(carol).unwrap().score_through_round,
        Score::Points(pts(0))
    );
    let names: Vec<&str> = final_round.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);
}

#[test]
fn standings_file_round_trip() {
    let mut challenge = pool(RESULTS_FINAL);
    let alice = challenge
        .add_submission(PredictionSubmission::new(
            "alice",
            prediction((70, 60), (60, 70), (60, 70)),
            ["Gonzaga"],
        ))
        .unwrap();
    challenge.score_brackets().unwrap();
    challenge.score_bonuses().unwrap();

    let path = temp_path("standings");
    challenge.write_results_for_round(0, &path).unwrap();
    let loaded = RoundStandings::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.depth, 0);
    assert_eq!(
        loaded.results_digest,
        Some(bracket_digest_hex(challenge.results().bracket()))
    );
    let entry = loaded.entry(alice).unwrap();
    assert_eq!(entry.score_on_round, Score::Points(pts(4)));
    assert_eq!(entry.score_through_round, Score::Points(pts(8)));
    assert_eq!(entry.bonus_points, Some(pts(3)));
    assert!(loaded.generate_report().contains("alice"));
}

#[test]
fn config_loaded_from_file() {
    let path = temp_path("config");
    std::fs::write(&path, r#"{ "name": "family", "max_submissions": 2 }"#).unwrap();
    let config = ChallengeConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut challenge = BracketChallenge::new(
        config,
        BracketResult::new(bracket(RESULTS_AFTER_SEMIS)),
        formulas::correct_winner(vec![pts(1), pts(1)]),
        |answers: &[Vec<String>]| answers.iter().map(|_| Vec::new()).collect(),
    )
    .unwrap();
    for name in ["mom", "dad"] {
        challenge
            .add_submission(PredictionSubmission::new(
                name,
                prediction((1, 0), (1, 0), (1, 0)),
                Vec::<String>::new(),
            ))
            .unwrap();
    }
    let err = challenge
        .add_submission(PredictionSubmission::new(
            "kid",
            prediction((1, 0), (1, 0), (1, 0)),
            Vec::<String>::new(),
        ))
        .unwrap_err();
    assert!(matches!(err, BracketError::SubmissionLimitReached { limit: 2 }));
    assert_eq!(challenge.len(), 2);
}

#[test]
fn mismatched_shapes_never_enter_the_pool() {
    let mut challenge = pool(RESULTS_AFTER_SEMIS);
    let two_team = bracket(
        r#"{ "left": "Duke", "right": "UNC", "winner": "Duke", "left_score": "1", "right_score": "0" }"#,
    );
    let err = challenge
        .add_submission(PredictionSubmission::new("dan", two_team.into(), ["x"]))
        .unwrap_err();
    assert!(matches!(err, BracketError::ShapeMismatch { depth: 0, .. }));
    assert!(challenge.is_empty());
}

#[test]
fn malformed_results_json_rejected() {
    let bad_winner = r#"{ "left": "Duke", "right": "UNC", "winner": "Kansas", "left_score": "1", "right_score": "0" }"#;
    assert!(matches!(
        Bracket::from_json(bad_winner),
        Err(BracketError::InvalidWinner { .. })
    ));
    assert!(matches!(
        Bracket::from_json("{ not json"),
        Err(BracketError::Serialization(_))
    ));
}

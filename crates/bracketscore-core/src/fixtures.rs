//! Test helpers: canned brackets and randomly generated full brackets.

use bracketscore_types::{Participant, Winner};
use rand::Rng;
use rust_decimal::Decimal;

use crate::{
    Bracket, BracketPrediction, BracketResult, Entrant, Match,
    nested::{NestedEntrant, NestedMatch},
};

#[must_use]
pub fn pts(n: i64) -> Decimal {
    Decimal::from(n)
}

/// `prediction.left_score + actual.right_score + depth`.
#[must_use]
pub fn left_plus_right_plus_depth(prediction: &Match, actual: &Match, depth: usize) -> Decimal {
    prediction.left_score() + actual.right_score() + Decimal::from(depth)
}

fn four_team(
    left_semi: (&str, i64, i64),
    right_semi: (&str, i64, i64),
    final_match: (Winner, i64, i64),
) -> Bracket {
    let mut b = Bracket::builder();
    let left = b
        .add_match("A", "B", Winner::decided(left_semi.0), pts(left_semi.1), pts(left_semi.2))
        .expect("left semifinal");
    let right = b
        .add_match("C", "D", Winner::decided(right_semi.0), pts(right_semi.1), pts(right_semi.2))
        .expect("right semifinal");
    let root = b
        .add_match(left, right, final_match.0, pts(final_match.1), pts(final_match.2))
        .expect("final");
    b.finish(root).expect("four-team bracket")
}

/// A beats B 4–3, C beats D 4–2, C wins the final 1–4.
#[must_use]
pub fn four_team_prediction() -> BracketPrediction {
    BracketPrediction::new(four_team(
        ("A", 4, 3),
        ("C", 4, 2),
        (Winner::decided("C"), 1, 4),
    ))
}

/// A beats B 4–0, C beats D 4–2, C wins the final 2–4.
#[must_use]
pub fn four_team_results_complete() -> BracketResult {
    BracketResult::new(four_team(
        ("A", 4, 0),
        ("C", 4, 2),
        (Winner::decided("C"), 2, 4),
    ))
}

/// Semifinals as in [`four_team_results_complete`], final not played.
#[must_use]
pub fn four_team_results_pending_final() -> BracketResult {
    BracketResult::new(four_team(("A", 4, 0), ("C", 4, 2), (Winner::Unknown, 0, 0)))
}

/// A semifinal on the left, C straight into the final on the right.
#[must_use]
pub fn three_team_results() -> BracketResult {
    let mut b = Bracket::builder();
    let semi = b
        .add_match("A", "B", Winner::decided("A"), pts(4), pts(0))
        .expect("semifinal");
    let root = b
        .add_match(semi, "C", Winner::decided("C"), pts(2), pts(4))
        .expect("final");
    BracketResult::new(b.finish(root).expect("three-team bracket"))
}

/// Perfect bracket of `rounds` rounds over participants `P0..P(2^rounds)`.
///
/// Winners and scores are random; each match is left undecided with
/// probability `unknown_ratio`.
pub fn full_bracket(rounds: u32, rng: &mut impl Rng, unknown_ratio: f64) -> Bracket {
    assert!(rounds > 0, "a bracket needs at least one round");
    let mut b = Bracket::builder();
    let mut entrants: Vec<(Entrant, Winner)> = (0..(1usize << rounds))
        .map(|i| {
            let p = Participant::new(format!("P{i}"));
            (Entrant::Participant(p.clone()), Winner::Decided(p))
        })
        .collect();

    while entrants.len() > 1 {
        let mut next = Vec::with_capacity(entrants.len() / 2);
        for pair in entrants.chunks(2) {
            let (left, left_label) = pair[0].clone();
            let (right, right_label) = pair[1].clone();
            let candidates: Vec<&Winner> = [&left_label, &right_label]
                .into_iter()
                .filter(|w| !w.is_unknown())
                .collect();
            let winner = if candidates.is_empty() || rng.gen_bool(unknown_ratio) {
                Winner::Unknown
            } else {
                candidates[rng.gen_range(0..candidates.len())].clone()
            };
            let id = b
                .add_match(
                    left,
                    right,
                    winner.clone(),
                    pts(rng.gen_range(0..100)),
                    pts(rng.gen_range(0..100)),
                )
                .expect("generated match");
            next.push((Entrant::Match(id), winner));
        }
        entrants = next;
    }

    let root = entrants[0].0.match_id().expect("root is a match");
    b.finish(root).expect("generated bracket")
}

/// Copy of `bracket` with the right semifinal's right entrant replaced by
/// a participant (a bye). `bracket` must have at least three rounds.
#[must_use]
pub fn bracket_with_bye(bracket: &Bracket) -> Bracket {
    let mut root = NestedMatch::from(bracket.clone());
    let NestedEntrant::Match(right_semi) = &mut root.right else {
        panic!("right semifinal must be a match");
    };
    let NestedEntrant::Match(quarter) = &right_semi.right else {
        panic!("right quarterfinal must be a match");
    };
    let label = quarter
        .winner
        .participant()
        .cloned()
        .unwrap_or_else(|| Participant::new("BYE"));
    right_semi.right = NestedEntrant::Participant(label);
    Bracket::try_from(root).expect("bracket with bye")
}

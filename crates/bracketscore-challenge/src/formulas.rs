//! Ready-made scoring formulas.
//!
//! Bracket formulas have the signature expected by
//! [`BracketPrediction::score`]; bonus formulas take every submission's
//! answers at once and return one row of points per submission.
//!
//! [`BracketPrediction::score`]: bracketscore_core::BracketPrediction::score

use bracketscore_core::Match;
use rust_decimal::Decimal;

fn winner_points(points_by_depth: &[Decimal], prediction: &Match, actual: &Match, depth: usize) -> Decimal {
    match actual.winner().participant() {
        Some(winner) if prediction.winner().participant() == Some(winner) => {
            points_by_depth.get(depth).copied().unwrap_or(Decimal::ZERO)
        }
        _ => Decimal::ZERO,
    }
}

/// Award `points_by_depth[depth]` for every correctly picked winner.
///
/// Index 0 is the final. Depths past the end of the table score zero.
pub fn correct_winner(
    points_by_depth: Vec<Decimal>,
) -> impl Fn(&Match, &Match, usize) -> Decimal + Send + Sync + 'static {
    move |prediction: &Match, actual: &Match, depth: usize| {
        winner_points(&points_by_depth, prediction, actual, depth)
    }
}

/// Like [`correct_winner`], plus `exact_bonus` when the winner is right and
/// both scores match exactly.
pub fn correct_winner_with_exact_score(
    points_by_depth: Vec<Decimal>,
    exact_bonus: Decimal,
) -> impl Fn(&Match, &Match, usize) -> Decimal + Send + Sync + 'static {
    move |prediction: &Match, actual: &Match, depth: usize| {
        let base = winner_points(&points_by_depth, prediction, actual, depth);
        let exact = prediction.left_score() == actual.left_score()
            && prediction.right_score() == actual.right_score();
        if exact && actual.winner() == prediction.winner() {
            base + exact_bonus
        } else {
            base
        }
    }
}

fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Bonus formula awarding `points_per_answer` for each answer equal to the
/// key (ignoring case and surrounding whitespace).
pub fn exact_answers(
    answer_key: Vec<String>,
    points_per_answer: Decimal,
) -> impl Fn(&[Vec<String>]) -> Vec<Vec<Decimal>> + Send + Sync + 'static {
    let key: Vec<String> = answer_key.iter().map(|a| normalize_answer(a)).collect();
    move |submissions: &[Vec<String>]| {
        submissions
            .iter()
            .map(|answers| {
                answers
                    .iter()
                    .enumerate()
                    .map(|(i, answer)| match key.get(i) {
                        Some(expected) if *expected == normalize_answer(answer) => points_per_answer,
                        _ => Decimal::ZERO,
                    })
                    .collect()
            })
            .collect()
    }
}

//! Wager strategy: wheel odds model and Kelly sizing.
//!
//! The three free functions below are the calculator's whole public
//! contract. They are pure and take only the scalars the host collected.

pub mod kelly;
pub mod odds;

pub use kelly::{WagerCalculator, WagerConfig, DEFAULT_SCORE_CEILING};
pub use odds::compute_win_probability;

use crate::types::{BetSide, WagerRequest};

/// Kelly fraction of the score to stake at the given win probability.
pub fn compute_optimal_fraction(win_probability: f64) -> f64 {
    kelly::optimal_fraction(win_probability)
}

/// Integer wager for a luck level, bet colour and score under `score_ceiling`.
pub fn compute_optimal_wager(
    luck_level: i32,
    is_bet_on_green: bool,
    score: i32,
    score_ceiling: i32,
) -> i32 {
    let calculator = WagerCalculator::new(WagerConfig { score_ceiling });
    calculator.optimal_wager(&WagerRequest::new(
        luck_level,
        BetSide::from_is_green(is_bet_on_green),
        score,
    ))
}

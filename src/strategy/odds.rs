//! Wheel outcome model.
//!
//! The wheel is launched with one of 30 equally likely initial velocities:
//! 22 of them come to rest on green and 8 on orange. A luck-driven
//! "lucky speedup" can additionally force the spin onto the chosen colour.

use crate::types::BetSide;

/// Initial velocities that land on green.
pub const GREEN_OUTCOMES: u32 = 22;
/// Initial velocities that land on orange.
pub const ORANGE_OUTCOMES: u32 = 8;
pub const TOTAL_OUTCOMES: u32 = GREEN_OUTCOMES + ORANGE_OUTCOMES;

/// Luck divisor for the speedup chance when betting on green.
pub const GREEN_SPEEDUP_DIVISOR: i32 = 15;
/// Luck divisor for the speedup chance when betting on orange.
pub const ORANGE_SPEEDUP_DIVISOR: i32 = 20;

fn outcomes(side: BetSide) -> i64 {
    match side {
        BetSide::Green => i64::from(GREEN_OUTCOMES),
        BetSide::Orange => i64::from(ORANGE_OUTCOMES),
    }
}

fn speedup_divisor(side: BetSide) -> i32 {
    match side {
        BetSide::Green => GREEN_SPEEDUP_DIVISOR,
        BetSide::Orange => ORANGE_SPEEDUP_DIVISOR,
    }
}

/// Exact win chance as `favourable / total`.
///
/// Kept as integers so that downstream sizing can truncate without
/// floating-point error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinOdds {
    pub favourable: i64,
    pub total: i64,
}

impl WinOdds {
    /// Odds of winning a bet on `side` at the given luck level.
    ///
    /// `P(side) + P(other) × speedup` with `speedup = clamp(luck, 0, d) / d`,
    /// over the common denominator `TOTAL_OUTCOMES × d`. With probability
    /// `speedup` the spin is forced onto the chosen side, otherwise the base
    /// odds apply, so `favourable` never exceeds `total`.
    pub fn for_bet(luck_level: i32, side: BetSide) -> Self {
        let divisor = speedup_divisor(side);
        let boosted = i64::from(luck_level.clamp(0, divisor));
        let divisor = i64::from(divisor);
        Self {
            favourable: outcomes(side) * divisor + outcomes(side.opposite()) * boosted,
            total: i64::from(TOTAL_OUTCOMES) * divisor,
        }
    }

    pub fn probability(&self) -> f64 {
        self.favourable as f64 / self.total as f64
    }
}

/// Probability that an unassisted spin lands on `side` (11/15 or 4/15).
pub fn base_probability(side: BetSide) -> f64 {
    outcomes(side) as f64 / f64::from(TOTAL_OUTCOMES)
}

/// Chance that the lucky speedup forces the spin onto `side`.
pub fn speedup_probability(luck_level: i32, side: BetSide) -> f64 {
    (f64::from(luck_level) / f64::from(speedup_divisor(side))).clamp(0.0, 1.0)
}

/// Probability of winning a bet on `side` at the given luck level.
///
/// A convex combination of values in [0, 1], so the result needs no clamp.
pub fn win_probability(luck_level: i32, side: BetSide) -> f64 {
    WinOdds::for_bet(luck_level, side).probability()
}

/// Host-shaped entry point taking the raw "bet on green" flag.
pub fn compute_win_probability(luck_level: i32, is_bet_on_green: bool) -> f64 {
    win_probability(luck_level, BetSide::from_is_green(is_bet_on_green))
}

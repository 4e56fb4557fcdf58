//! Kelly criterion wager sizing.
//!
//! The wheel pays even money, so the Kelly fraction collapses to
//! `2p - 1`. The fraction is applied to the current score and the result
//! is capped so that a win cannot push the score past the ceiling.

use tracing::debug;

use super::odds;
use crate::types::{WagerRecommendation, WagerRequest};

/// Highest score the game can hold.
pub const DEFAULT_SCORE_CEILING: i32 = 9999;

// ---------------------------------------------------------------------------
// Formulas
// ---------------------------------------------------------------------------

/// Kelly fraction for an even-money bet won with probability `win_probability`.
///
/// Kelly formula: f* = p - q / b, with b = 1 this is 2p - 1.
/// Clamped to [0, 1]: no edge (p <= 0.5) means no bet.
pub fn optimal_fraction(win_probability: f64) -> f64 {
    (2.0 * win_probability - 1.0).clamp(0.0, 1.0)
}

/// Expected log growth per spin when staking `fraction` of the score.
///
/// `p·ln(1+f) + q·ln(1-f)`. A zero-probability branch contributes nothing,
/// so staking everything on a certain win stays finite.
pub fn expected_log_growth(win_probability: f64, fraction: f64) -> f64 {
    let lose_probability = 1.0 - win_probability;
    let mut growth = 0.0;
    if win_probability > 0.0 {
        growth += win_probability * (1.0 + fraction).ln();
    }
    if lose_probability > 0.0 {
        growth += lose_probability * (1.0 - fraction).ln();
    }
    growth
}

/// Kelly stake as an exact fraction of the score.
///
/// Derived from `WinOdds` as `(2·favourable − total) / total`, clamped to
/// `[0, total]`, so applying it to a score truncates exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeFraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl StakeFraction {
    pub fn from_odds(odds: odds::WinOdds) -> Self {
        Self {
            numerator: (2 * odds.favourable - odds.total).clamp(0, odds.total),
            denominator: odds.total,
        }
    }

    /// `fraction × score`, truncated toward zero.
    pub fn of(&self, score: i32) -> i64 {
        self.numerator * i64::from(score) / self.denominator
    }

    pub fn as_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// Room left below the ceiling; never negative.
pub fn max_winnable(score: i32, score_ceiling: i32) -> i64 {
    (i64::from(score_ceiling) - i64::from(score)).max(0)
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Wager sizing configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct WagerConfig {
    /// Upper bound on the score a win can reach.
    pub score_ceiling: i32,
}

impl Default for WagerConfig {
    fn default() -> Self {
        Self {
            score_ceiling: DEFAULT_SCORE_CEILING,
        }
    }
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct WagerCalculator {
    config: WagerConfig,
}

impl WagerCalculator {
    pub fn new(config: WagerConfig) -> Self {
        Self { config }
    }

    /// Access the sizing configuration.
    pub fn config(&self) -> &WagerConfig {
        &self.config
    }

    /// The integer wager to pre-fill for `request`.
    pub fn optimal_wager(&self, request: &WagerRequest) -> i32 {
        self.recommend(request).wager
    }

    /// Size a wager and report every intermediate value.
    pub fn recommend(&self, request: &WagerRequest) -> WagerRecommendation {
        let win_odds = odds::WinOdds::for_bet(request.luck_level, request.side);
        let stake = StakeFraction::from_odds(win_odds);
        let win_probability = win_odds.probability();
        let kelly_fraction = stake.as_f64();

        let raw_wager = stake.of(request.score);
        let max_winnable = max_winnable(request.score, self.config.score_ceiling);

        // Bounded by max_winnable <= ceiling - score, so it always fits in i32.
        let wager = raw_wager.min(max_winnable).max(0) as i32;
        let expected_gain = f64::from(wager) * (2.0 * win_probability - 1.0);

        debug!(
            luck = request.luck_level,
            side = %request.side,
            score = request.score,
            win_probability = format!("{:.2}%", win_probability * 100.0),
            kelly = format!("{:.2}%", kelly_fraction * 100.0),
            raw_wager,
            max_winnable,
            wager,
            "Wager sized"
        );

        WagerRecommendation {
            side: request.side,
            win_probability,
            kelly_fraction,
            raw_wager,
            max_winnable,
            wager,
            expected_gain,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

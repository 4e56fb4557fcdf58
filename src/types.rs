//! Shared types for SmartSpin.
//!
//! Inputs and outputs of the wager calculator plus the crate's domain
//! error type. Everything here is a transient value; nothing is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Bet side
// ---------------------------------------------------------------------------

/// Which of the two wheel colours the player bet on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetSide {
    Green,
    Orange,
}

impl BetSide {
    /// Both sides (useful for iteration).
    pub const ALL: &'static [BetSide] = &[BetSide::Green, BetSide::Orange];

    /// Map the host's "is bet on green" flag to a side.
    pub fn from_is_green(is_green: bool) -> Self {
        if is_green { BetSide::Green } else { BetSide::Orange }
    }

    /// The opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            BetSide::Green => BetSide::Orange,
            BetSide::Orange => BetSide::Green,
        }
    }
}

impl fmt::Display for BetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetSide::Green => write!(f, "GREEN"),
            BetSide::Orange => write!(f, "ORANGE"),
        }
    }
}

/// Parse a side name (case-insensitive, single-letter shorthands allowed).
impl std::str::FromStr for BetSide {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "green" | "g" => Ok(BetSide::Green),
            "orange" | "o" => Ok(BetSide::Orange),
            other => Err(SmartSpinError::InvalidInput(format!(
                "unknown bet side '{other}' (expected green or orange)"
            ))
            .into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / recommendation
// ---------------------------------------------------------------------------

/// The three scalars the host collects when the wager menu opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WagerRequest {
    pub luck_level: i32,
    pub side: BetSide,
    /// Star tokens currently held.
    pub score: i32,
}

impl WagerRequest {
    pub fn new(luck_level: i32, side: BetSide, score: i32) -> Self {
        Self { luck_level, side, score }
    }
}

/// Full breakdown of a computed wager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WagerRecommendation {
    pub side: BetSide,
    pub win_probability: f64,
    /// Kelly fraction of the score, clamped to [0, 1].
    pub kelly_fraction: f64,
    /// `kelly_fraction × score`, truncated.
    pub raw_wager: i64,
    /// Headroom below the score ceiling (never negative).
    pub max_winnable: i64,
    /// The value to pre-fill.
    pub wager: i32,
    /// Expected score change of placing `wager` at even money.
    pub expected_gain: f64,
}

impl WagerRecommendation {
    /// Whether the model advises staying out of this spin.
    pub fn is_no_bet(&self) -> bool {
        self.wager == 0
    }
}

impl fmt::Display for WagerRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: wager {} (win {:.1}% | kelly {:.1}% | cap {} | EV {:+.1})",
            self.side,
            self.wager,
            self.win_probability * 100.0,
            self.kelly_fraction * 100.0,
            self.max_winnable,
            self.expected_gain,
        )
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for SmartSpin.
#[derive(Debug, thiserror::Error)]
pub enum SmartSpinError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Host error ({surface}): {message}")]
    Host { surface: String, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

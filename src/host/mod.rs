//! Host integration.
//!
//! Defines the `WagerMenu` trait the host's number-selection menu
//! implements, the snapshot of game state the host passes in when a menu
//! opens, and the hook that pre-fills the optimal wager.
//!
//! The calculator never reaches into the host: the host hands over a
//! `SpinContext` and a `WagerMenu`, and gets the recommendation back.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::strategy::WagerCalculator;
use crate::types::{BetSide, WagerRecommendation, WagerRequest};

/// Write access to the wager input of a number-selection menu.
///
/// Implementations that need to reach private UI state do so here, never
/// inside the calculator.
#[cfg_attr(test, mockall::automock)]
pub trait WagerMenu {
    /// Value currently held by the menu.
    fn wager_value(&self) -> i32;

    /// Set the underlying numeric value.
    fn set_wager_value(&mut self, wager: i32) -> Result<()>;

    /// Set the text shown in the menu's input box.
    fn set_wager_display_text(&mut self, text: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Kind of menu that just became active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    NumberSelection,
    Other,
}

/// Game state collected by the host at the moment a menu opens.
#[derive(Debug, Clone)]
pub struct SpinContext {
    /// Festival currently running, if any.
    pub festival_id: Option<String>,
    /// Key of the last dialogue question asked at the current location.
    pub last_question_key: Option<String>,
    pub menu: MenuKind,
    pub luck_level: i32,
    pub bet_on_green: bool,
    pub score: i32,
}

impl SpinContext {
    pub fn request(&self) -> WagerRequest {
        WagerRequest::new(
            self.luck_level,
            BetSide::from_is_green(self.bet_on_green),
            self.score,
        )
    }
}

/// Which festival and question identify the wheel's wager menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinTrigger {
    pub festival_id: String,
    pub question_key: String,
}

impl Default for SpinTrigger {
    fn default() -> Self {
        Self {
            festival_id: "fall16".to_string(),
            question_key: "wheelBet".to_string(),
        }
    }
}

impl SpinTrigger {
    /// Whether the context is the wheel-bet prompt at the right festival.
    pub fn matches(&self, ctx: &SpinContext) -> bool {
        ctx.festival_id.as_deref() == Some(self.festival_id.as_str())
            && ctx.last_question_key.as_deref() == Some(self.question_key.as_str())
    }
}

// ---------------------------------------------------------------------------
// Hook
// ---------------------------------------------------------------------------

/// Pre-fills the optimal wager when the wheel's wager menu opens.
#[derive(Debug, Clone, Default)]
pub struct SpinWheelHook {
    trigger: SpinTrigger,
    calculator: WagerCalculator,
}

impl SpinWheelHook {
    pub fn new(trigger: SpinTrigger, calculator: WagerCalculator) -> Self {
        Self { trigger, calculator }
    }

    pub fn calculator(&self) -> &WagerCalculator {
        &self.calculator
    }

    /// Menu-changed handler.
    ///
    /// Returns the recommendation written into `menu`, or `None` when the
    /// menu is not the wheel's wager prompt or the menu rejected the write.
    /// Never returns an error: a failed pre-fill leaves the menu as it was
    /// and is only logged.
    pub fn on_menu_changed(
        &self,
        ctx: &SpinContext,
        menu: &mut dyn WagerMenu,
    ) -> Option<WagerRecommendation> {
        if !self.trigger.matches(ctx) {
            debug!(
                festival = ?ctx.festival_id,
                question = ?ctx.last_question_key,
                "Not the wheel bet, ignoring menu"
            );
            return None;
        }
        if ctx.menu != MenuKind::NumberSelection {
            return None;
        }

        match self.prefill(&ctx.request(), menu) {
            Ok(rec) => Some(rec),
            Err(e) => {
                warn!(error = %e, "Failed to pre-fill wager");
                None
            }
        }
    }

    /// Compute the wager for `request` and write it into `menu`.
    pub fn prefill(
        &self,
        request: &WagerRequest,
        menu: &mut dyn WagerMenu,
    ) -> Result<WagerRecommendation> {
        let rec = self.calculator.recommend(request);
        let previous = menu.wager_value();

        menu.set_wager_value(rec.wager)
            .context("Failed to set wager value")?;
        menu.set_wager_display_text(&rec.wager.to_string())
            .context("Failed to set wager text")?;

        info!(
            side = %rec.side,
            luck = request.luck_level,
            score = request.score,
            previous,
            wager = rec.wager,
            "Optimal wager pre-filled"
        );
        Ok(rec)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! In-memory wager menu for integration testing.
//!
//! Mirrors the host's number-selection menu: a numeric value plus the text
//! box that displays it. Writes can be forced to fail to exercise the
//! hook's error path.

use anyhow::Result;

use smartspin::host::WagerMenu;
use smartspin::types::SmartSpinError;

/// A number-selection menu with no UI behind it.
#[derive(Debug, Default)]
pub struct MockMenu {
    pub current_value: i32,
    pub text: String,
    /// If set, writes fail with this message.
    pub force_error: Option<String>,
    pub writes: usize,
}

impl MockMenu {
    /// A menu showing `value`, as the host opens it.
    pub fn showing(value: i32) -> Self {
        Self {
            current_value: value,
            text: value.to_string(),
            ..Default::default()
        }
    }

    /// Make all subsequent writes fail.
    pub fn set_error(&mut self, msg: &str) {
        self.force_error = Some(msg.to_string());
    }

    fn check_error(&self, surface: &str) -> Result<()> {
        match &self.force_error {
            Some(message) => Err(SmartSpinError::Host {
                surface: surface.to_string(),
                message: message.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl WagerMenu for MockMenu {
    fn wager_value(&self) -> i32 {
        self.current_value
    }

    fn set_wager_value(&mut self, wager: i32) -> Result<()> {
        self.check_error("currentValue")?;
        self.current_value = wager;
        self.writes += 1;
        Ok(())
    }

    fn set_wager_display_text(&mut self, text: &str) -> Result<()> {
        self.check_error("numberSelectedBox")?;
        self.text = text.to_string();
        self.writes += 1;
        Ok(())
    }
}

//! SmartSpin — optimal wager pre-fill for the festival Spinning Wheel.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod strategy;
pub mod host;

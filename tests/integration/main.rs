//! Integration tests: the menu hook end to end against an in-memory menu.

mod mock_menu;
mod prefill;

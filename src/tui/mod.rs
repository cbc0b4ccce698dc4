//! TUI integration layer (crossterm + ratatui).
//!
//! This module is intentionally separate from `panel`/`tree` so the core can
//! be reused by other frontends without depending on terminal crates.

pub mod terminal_guard;

pub use terminal_guard::{CrosstermTerminalOps, TerminalGuard, TerminalOps, TerminalRestorer};

//! Memory-matching card game: shuffled pairs on a fixed grid, two flips per
//! turn, timed resolution.
//!
//! The [`game`] module holds the whole rule set and runs headless;
//! [`ui`] (behind the `gui` feature) is a GTK front end driving it.
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
#[cfg(feature = "gui")]
pub mod ui;

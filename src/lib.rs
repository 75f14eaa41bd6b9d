//! Tile Snake - a single-player grid snake game
//!
//! This library provides:
//! - Core game logic: mode state machine and tick simulation (game module)
//! - Input translation and key bindings (input module)
//! - TUI rendering (render module)
//! - In-memory session statistics (metrics module)
//! - The interactive terminal driver (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;

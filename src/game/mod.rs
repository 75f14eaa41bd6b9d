//! Core game logic module for Snake
//!
//! This module contains all the game logic without any terminal or rendering
//! dependencies. The terminal front end and the tests drive it through
//! [`Game::run_frame`].

pub mod board;
pub mod config;
pub mod direction;
pub mod food;
pub mod mode;
pub mod session;
pub mod simulation;

// Re-export commonly used types
pub use board::{Position, Snake};
pub use config::GameConfig;
pub use direction::{Direction, ReversalPolicy};
pub use food::place_food;
pub use mode::{GameMode, GameState, Transition};
pub use session::{FrameReport, Game, Snapshot};
pub use simulation::{CollisionType, SnakeSimulation, TickResult};

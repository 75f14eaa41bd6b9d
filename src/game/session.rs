use anyhow::{Context, Result};
use log::info;

use super::{
    board::Position,
    config::GameConfig,
    direction::Direction,
    mode::{GameMode, GameState},
    simulation::{SnakeSimulation, TickResult},
};
use crate::input::InputEvent;

/// Read-only copy of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub mode: GameMode,
    /// Snake segments, head first
    pub snake: Vec<Position>,
    pub direction: Direction,
    pub food: Position,
    pub score: u32,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Pixel edge of one tile, for front ends that draw in pixels
    pub tile_size: u32,
    pub ticks: u64,
}

impl Snapshot {
    pub fn head(&self) -> Position {
        self.snake[0]
    }
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Mode after the frame
    pub mode: GameMode,
    /// Whether a round (re)started during input handling
    pub round_started: bool,
    /// Tick result if the simulation advanced this frame
    pub tick: Option<TickResult>,
}

/// The game context: mode state machine plus the simulation it drives
pub struct Game {
    state: GameState,
    simulation: SnakeSimulation,
}

impl Game {
    /// Create a game on the intro screen
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;

        info!(
            "new game: {}x{} tiles ({}x{} px), {} fps",
            config.grid_width,
            config.grid_height,
            config.pixel_size().0,
            config.pixel_size().1,
            config.frame_rate
        );

        Ok(Self {
            state: GameState::new(config.bindings.clone()),
            simulation: SnakeSimulation::new(config),
        })
    }

    /// Run one frame: apply the queued input in order, then advance the
    /// simulation if the game is (still) playing.
    ///
    /// Events left over after the mode turns to `Quit` are dropped.
    pub fn run_frame<I>(&mut self, events: I) -> FrameReport
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut round_started = false;

        for event in events {
            if self.state.mode() == GameMode::Quit {
                break;
            }
            if let Some(transition) = self.state.handle_event(event, &mut self.simulation) {
                if transition.starts_round() {
                    info!("round started from {:?}", transition.from);
                    round_started = true;
                }
            }
        }

        let tick = if self.state.mode() == GameMode::Playing {
            let result = self.simulation.tick();
            self.state.on_tick(&result, self.simulation.score());
            Some(result)
        } else {
            None
        };

        FrameReport {
            mode: self.state.mode(),
            round_started,
            tick,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode()
    }

    pub fn simulation(&self) -> &SnakeSimulation {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut SnakeSimulation {
        &mut self.simulation
    }

    pub fn snapshot(&self) -> Snapshot {
        let config = self.simulation.config();

        Snapshot {
            mode: self.state.mode(),
            snake: self.simulation.snake().to_vec(),
            direction: self.simulation.direction(),
            food: self.simulation.food(),
            score: self.simulation.score(),
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            tile_size: config.tile_size,
            ticks: self.simulation.tick_count(),
        }
    }
}

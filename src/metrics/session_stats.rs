use std::time::{Duration, Instant};

use crate::game::GameMode;

/// In-memory statistics for this process. Nothing here is persisted.
pub struct SessionStats {
    /// Play time of the current round, frozen outside `Playing`
    pub round_time: Duration,
    pub best_score: u32,
    pub rounds_played: u32,
    last_update: Instant,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            round_time: Duration::ZERO,
            best_score: 0,
            rounds_played: 0,
            last_update: Instant::now(),
        }
    }

    /// Account for the time since the previous call if the game was playing
    pub fn update(&mut self, mode: GameMode) {
        let now = Instant::now();
        if mode == GameMode::Playing {
            self.round_time += now.duration_since(self.last_update);
        }
        self.last_update = now;
    }

    pub fn on_round_start(&mut self) {
        self.round_time = Duration::ZERO;
        self.last_update = Instant::now();
    }

    pub fn on_round_end(&mut self, final_score: u32) {
        self.rounds_played += 1;
        self.best_score = self.best_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.round_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

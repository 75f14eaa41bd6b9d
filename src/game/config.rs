use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};

use super::direction::ReversalPolicy;
use crate::input::KeyBindings;

/// Largest accepted grid side, in tiles
pub const MAX_GRID_SIDE: usize = 1024;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in tiles
    pub grid_width: usize,
    /// Height of the game grid in tiles
    pub grid_height: usize,
    /// Side of one tile in pixels, for pixel-based front ends
    pub tile_size: u32,
    /// Simulation ticks (and frames) per second
    pub frame_rate: u32,
    /// What a 180-degree turn does
    pub reversal: ReversalPolicy,
    /// Fixed seed for food placement. Random when unset.
    pub seed: Option<u64>,
    pub bindings: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        // 640x640 px board of 16 px tiles at 15 fps
        Self {
            grid_width: 40,
            grid_height: 40,
            tile_size: 16,
            frame_rate: 15,
            reversal: ReversalPolicy::Allow,
            seed: None,
            bindings: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Parse a YAML document. Missing fields keep their defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Failed to parse game config")
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).context("Failed to serialize game config")
    }

    /// Read a YAML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Time between two ticks
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    /// Board size in pixels
    pub fn pixel_size(&self) -> (u64, u64) {
        let tile = self.tile_size as u64;
        (self.grid_width as u64 * tile, self.grid_height as u64 * tile)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            "grid must be at least 1x1 tiles, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.grid_width <= MAX_GRID_SIDE && self.grid_height <= MAX_GRID_SIDE,
            "grid sides are limited to {MAX_GRID_SIDE} tiles, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        if self.grid_width * self.grid_height < 2 {
            bail!("grid needs room for both the snake and the food");
        }
        ensure!(self.tile_size > 0, "tile size must be positive");
        ensure!(
            (1..=240).contains(&self.frame_rate),
            "frame rate must be between 1 and 240, got {}",
            self.frame_rate
        );
        self.bindings.validate().context("Invalid key bindings")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 40);
        assert_eq!(config.pixel_size(), (640, 640));
        assert_eq!(config.reversal, ReversalPolicy::Allow);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.frame_rate, 15);
    }

    #[test]
    fn test_frame_interval() {
        let config = GameConfig {
            frame_rate: 20,
            ..Default::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_validation() {
        assert!(GameConfig::new(0, 10).validate().is_err());
        assert!(GameConfig::new(1, 1).validate().is_err());
        assert!(GameConfig::new(2, 1).validate().is_ok());
        assert!(GameConfig::new(MAX_GRID_SIDE + 1, 10).validate().is_err());

        let no_frames = GameConfig {
            frame_rate: 0,
            ..Default::default()
        };
        assert!(no_frames.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "grid_width: 12\nreversal: ignore\nseed: 42\nbindings:\n  pause: x\n";
        let config = GameConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, 40);
        assert_eq!(config.reversal, ReversalPolicy::Ignore);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.bindings.pause, 'x');
        assert_eq!(config.bindings.quit, 'q');
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = GameConfig {
            seed: Some(9),
            ..GameConfig::small()
        };
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("continue: 'c'"));
        assert_eq!(GameConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_bad_yaml() {
        assert!(GameConfig::from_yaml("grid_width: wide").is_err());
    }
}

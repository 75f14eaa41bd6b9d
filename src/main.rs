use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use simplelog::LevelFilter;
use tile_snake::game::{GameConfig, ReversalPolicy};
use tile_snake::logging::init_file_logger;
use tile_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "tile_snake")]
#[command(version, about = "Grid snake game for the terminal")]
struct Cli {
    /// YAML file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in tiles
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in tiles
    #[arg(long)]
    height: Option<usize>,

    /// Ticks per second
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Ignore 180-degree turns instead of letting the snake bite its neck
    #[arg(long)]
    no_reverse: bool,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level for --log-file
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    /// Defaults, then the config file, then command-line overrides
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(fps) = self.fps {
            config.frame_rate = fps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_reverse {
            config.reversal = ReversalPolicy::Ignore;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logger(path, cli.log_level)?;
    }

    let config = cli.game_config()?;

    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    info!("starting tile_snake {}", env!("CARGO_PKG_VERSION"));

    let mut play_mode = PlayMode::new(config)?;
    play_mode.run().await?;

    Ok(())
}

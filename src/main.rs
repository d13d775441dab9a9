use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use term_snake::game::GameConfig;
use term_snake::modes::{HumanMode, MAX_FPS, MIN_FPS};

#[derive(Parser)]
#[command(name = "term_snake")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// JSON file overriding the playfield size, grid size or step interval
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Frames drawn per second
    #[arg(
        long,
        default_value = "60",
        value_parser = clap::value_parser!(u32).range(MIN_FPS as i64..=MAX_FPS as i64)
    )]
    fps: u32,

    /// Where to write the log (the terminal is taken by the game)
    #[arg(long, default_value = "term_snake.log")]
    log_file: PathBuf,

    /// Log verbosity
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before anything else
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level.into(), Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    info!(
        "starting: {}x{} playfield, grid {}, step {:?}, seed {:?}",
        config.width,
        config.height,
        config.grid_size,
        config.step_interval(),
        cli.seed
    );

    let mut human_mode = HumanMode::new(config, cli.seed, cli.fps);
    human_mode.run().await?;

    info!("session ended: {:?}", human_mode.state().phase);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["term_snake"]).unwrap();
        assert_eq!(cli.config, None);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.fps, 60);
        assert_eq!(cli.log_file, PathBuf::from("term_snake.log"));
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_explicit_arguments() {
        let cli = Cli::try_parse_from([
            "term_snake",
            "--config",
            "snake.json",
            "--seed",
            "42",
            "--fps",
            "30",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("snake.json")));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.fps, 30);
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_fps_out_of_range() {
        assert!(Cli::try_parse_from(["term_snake", "--fps", "0"]).is_err());
        assert!(Cli::try_parse_from(["term_snake", "--fps", "1001"]).is_err());
        assert!(Cli::try_parse_from(["term_snake", "--fps", "4294967295"]).is_err());
        assert!(Cli::try_parse_from(["term_snake", "--fps", "1000"]).is_ok());
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LevelFilter::from(LogLevel::Off), LevelFilter::Off);
        assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::Error);
        assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::Warn);
        assert_eq!(LevelFilter::from(LogLevel::Info), LevelFilter::Info);
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
    }
}

//! Gomoku GUI
//!
//! A graphical interface for playing Gomoku against the computer or
//! another player.

use std::path::PathBuf;

use clap::Parser;
use gomoku::ui::GomokuApp;
use gomoku::{Difficulty, GameConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Freestyle Gomoku (five in a row)
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Board size (overrides the config file)
    #[arg(long)]
    size: Option<usize>,

    /// Enable or disable the computer opponent
    #[arg(long)]
    ai: Option<bool>,

    /// Computer opponent strength
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Let the computer move first
    #[arg(long)]
    second: bool,
}

impl Cli {
    fn into_config(self) -> Result<GameConfig, gomoku::ConfigError> {
        let mut config = GameConfig::load_or_default(&self.config)?;
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(enabled) = self.ai {
            config.opponent.enabled = enabled;
        }
        if let Some(difficulty) = self.difficulty {
            config.opponent.difficulty = difficulty;
        }
        if self.second {
            config.opponent.human_first = false;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    };
    info!(?config, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    if let Err(err) = eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)?))),
    ) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

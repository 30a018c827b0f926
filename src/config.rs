/// Command-line configuration for the terminal host.
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::entities::Playfield;
use crate::error::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "nebula_strike", about = "Side-scrolling arcade shooter in the terminal")]
pub struct Config {
    /// Playfield width in world units.
    #[arg(long, default_value_t = 960)]
    pub width: u32,

    /// Playfield height in world units.
    #[arg(long, default_value_t = 540)]
    pub height: u32,

    /// Seed for a reproducible game; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "nebula_strike.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Config {
    pub fn playfield(&self) -> Result<Playfield> {
        Playfield::new(self.width as f64, self.height as f64)
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures the terminal host can hit. The simulation itself never fails.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not open log file {path:?}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("playfield {width}x{height} is too small (minimum {min}x{min})")]
    InvalidPlayfield { width: f64, height: f64, min: f64 },
}

pub type Result<T> = std::result::Result<T, GameError>;

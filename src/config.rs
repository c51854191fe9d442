use strum::IntoEnumIterator;
use thiserror::Error;

use crate::piece::PieceKind;

pub const DEFAULT_HEIGHT: usize = 24;
pub const DEFAULT_WIDTH: usize = 12;
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 300;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    #[error("field height must be at least one row")]
    ZeroHeight,
    #[error("field width {width} cannot fit every piece (needs at least {min} columns)")]
    TooNarrow { width: usize, min: usize },
    #[error("tick interval must be longer than zero milliseconds")]
    ZeroTickInterval,
}

// fixed for the lifetime of a game
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub height: usize,
    pub width: usize,
    pub tick_interval_ms: u32,
}

impl Config {
    // narrowest field every piece kind can spawn in
    pub fn min_width() -> usize { PieceKind::iter().map(|k| k.width()).max().unwrap_or(1) }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = Self::min_width();
        if self.height == 0 {
            Err(ConfigError::ZeroHeight)
        } else if self.width < min {
            Err(ConfigError::TooNarrow { width: self.width, min })
        } else if self.tick_interval_ms == 0 {
            Err(ConfigError::ZeroTickInterval)
        } else {
            Ok(())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

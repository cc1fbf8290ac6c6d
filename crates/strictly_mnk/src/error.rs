//! Error types for game construction.

use crate::types::Axis;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a configuration was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// Width or height is zero.
    #[display("board dimensions must be positive (got {width}x{height})")]
    ZeroDimension {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
    },

    /// The board has more cells than can be addressed.
    #[display("board of {width}x{height} cells is too large")]
    BoardTooLarge {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
    },

    /// A win length is zero.
    #[display("{_0} win length must be positive")]
    ZeroWinLength(Axis),

    /// A win length can never fit on the board.
    #[display(
        "number of elements required to win ({required}) cannot be bigger than board dimensions ({smallest_side})"
    )]
    WinLengthExceedsBoard {
        /// Largest configured win length.
        required: usize,
        /// Smaller of width and height.
        smallest_side: usize,
    },

    /// The config file could not be read.
    #[display("failed to read config file: {_0}")]
    Read(String),

    /// The config file is not valid TOML for a game config.
    #[display("failed to parse config: {_0}")]
    Parse(String),
}

/// Configuration error with location tracking.
///
/// Returned once, at game creation; no partially built game exists.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What went wrong.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(ConfigErrorKind::Read(err.to_string()))
    }
}

impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(ConfigErrorKind::Parse(err.to_string()))
    }
}

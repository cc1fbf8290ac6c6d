//! Headless driver for strictly_mnk games.
//!
//! Builds a game from a config file or flags, feeds it a script of
//! placements and jumps, and reports what happened.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod script;

pub use cli::{BoardArgs, Cli, Command};
pub use script::{Action, ActionParseError, Skipped, parse_actions, resolve_config, run};

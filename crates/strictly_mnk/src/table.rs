//! Registry of independent games for concurrent hosts.
//!
//! Each game sits behind its own mutex, so requests against one game are
//! serialized while different games never contend on game state.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::game::Game;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game in a table.
pub type GameId = String;

/// Errors from table bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TableError {
    /// The id is already taken.
    #[display("game {_0} already exists")]
    AlreadyExists(#[error(not(source))] GameId),

    /// No game has this id.
    #[display("game {_0} not found")]
    NotFound(#[error(not(source))] GameId),

    /// The configuration was refused.
    #[display("{_0}")]
    Config(ConfigError),
}

impl From<ConfigError> for TableError {
    fn from(err: ConfigError) -> Self {
        TableError::Config(err)
    }
}

type Slot = Arc<Mutex<Game>>;

/// Shared registry of games.
#[derive(Debug, Clone, Default)]
pub struct GameTable {
    games: Arc<Mutex<HashMap<GameId, Slot>>>,
}

/// Takes the guard even if a previous holder panicked.
fn recover<'a, T>(
    result: Result<MutexGuard<'a, T>, PoisonError<MutexGuard<'a, T>>>,
) -> MutexGuard<'a, T> {
    result.unwrap_or_else(PoisonError::into_inner)
}

impl GameTable {
    /// Creates an empty table.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game table");
        Self::default()
    }

    /// Creates a game under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::AlreadyExists`] if the id is taken, or
    /// [`TableError::Config`] if the configuration is invalid.
    #[instrument(skip(self))]
    pub fn create(&self, id: &str, config: GameConfig) -> Result<GameId, TableError> {
        let id = id.to_string();
        let game = Game::from_config(config)?;
        let mut games = recover(self.games.lock());

        if games.contains_key(&id) {
            warn!(game_id = %id, "Game already exists");
            return Err(TableError::AlreadyExists(id));
        }

        games.insert(id.clone(), Arc::new(Mutex::new(game)));
        info!(game_id = %id, "Created new game");
        Ok(id)
    }

    fn slot(&self, id: &str) -> Result<Slot, TableError> {
        let games = recover(self.games.lock());
        games.get(id).cloned().ok_or_else(|| {
            debug!(game_id = id, "Game not found");
            TableError::NotFound(id.to_string())
        })
    }

    /// Runs `f` with exclusive access to one game.
    ///
    /// The table lock is released before `f` runs; only the game's own lock
    /// is held.
    #[instrument(skip(self, f))]
    pub fn with_game<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Game) -> R,
    ) -> Result<R, TableError> {
        let slot = self.slot(id)?;
        let mut game = recover(slot.lock());
        Ok(f(&mut game))
    }

    /// Replaces a game with a fresh one using the same configuration.
    #[instrument(skip(self))]
    pub fn new_game(&self, id: &str) -> Result<(), TableError> {
        self.with_game(id, |game| *game = game.restart())
    }

    /// Removes a game, returning its final state.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Result<Game, TableError> {
        let slot = recover(self.games.lock())
            .remove(id)
            .ok_or_else(|| TableError::NotFound(id.to_string()))?;
        info!(game_id = id, "Removed game");
        let game = recover(slot.lock()).clone();
        Ok(game)
    }

    /// Lists all game ids.
    #[instrument(skip(self))]
    pub fn ids(&self) -> Vec<GameId> {
        let games = recover(self.games.lock());
        let mut ids: Vec<_> = games.keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed games");
        ids
    }
}

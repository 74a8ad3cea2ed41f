//! Score session: owns the current game and its store, and sequences
//! validate → apply → persist for every user action.

use tracing::{info, warn};

use crate::domain::{
    commit_round, compute_stats, create_game, scoreboard, GameState, RoundSubmission,
    Scoreboard, StatsReport,
};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::storage::GameStore;

/// Application controller for one save slot.
pub struct ScoreSession<S: GameStore> {
    store: S,
    state: Option<GameState>,
}

impl<S: GameStore> ScoreSession<S> {
    /// Start a session, resuming whatever the store holds.
    pub fn bootstrap(store: S) -> Result<Self, AppError> {
        let state = store.load()?;
        match &state {
            Some(s) => info!(round = s.round, players = s.players.len(), "resumed saved game"),
            None => info!("no saved game; setup required"),
        }
        Ok(Self { store, state })
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn has_game(&self) -> bool {
        self.state.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn require_state(&self) -> Result<&GameState, AppError> {
        self.state
            .as_ref()
            .ok_or_else(|| AppError::no_game("set up a game first"))
    }

    /// Create and persist a new game. Refuses to replace a running game
    /// unless `replace` is set.
    pub fn start_game<N: AsRef<str>>(
        &mut self,
        player_count: usize,
        target_score: Option<&str>,
        names: &[N],
        replace: bool,
    ) -> Result<&GameState, AppError> {
        if self.state.is_some() && !replace {
            return Err(AppError::conflict(
                ErrorCode::GameExists,
                "a game is already in progress",
            ));
        }
        let state = create_game(player_count, target_score, names)
            .map_err(|e| AppError::invalid(ErrorCode::InvalidSetup, e.to_string()))?;

        self.store.save(&state)?;
        info!(players = player_count, "game started");
        Ok(&*self.state.insert(state))
    }

    /// Commit a round and persist it.
    ///
    /// The commit runs on a working copy; the session only adopts it once
    /// the store accepted it, so neither a rule violation nor a failed save
    /// leaves a partially applied round behind.
    pub fn submit_round(&mut self, submission: &RoundSubmission) -> Result<&GameState, AppError> {
        let mut next = self.require_state()?.clone();

        if let Err(e) = commit_round(&mut next, submission) {
            warn!(error = %e, "round not committed");
            return Err(e.into());
        }
        self.store.save(&next)?;
        Ok(&*self.state.insert(next))
    }

    pub fn scoreboard(&self) -> Result<Scoreboard, AppError> {
        Ok(scoreboard(self.require_state()?)?)
    }

    pub fn stats(&self) -> Result<StatsReport, AppError> {
        Ok(compute_stats(self.require_state()?)?)
    }

    /// Discard the game and clear the slot.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.store.reset()?;
        self.state = None;
        info!("game reset");
        Ok(())
    }
}

//! Building a fresh game.

use tracing::debug;

use crate::domain::state::{normalize_target, GameState, Player, PlayerId};
use crate::errors::domain::DomainError;

/// Display name used when a seat is left blank.
pub fn default_name(id: PlayerId) -> String {
    format!("P{}", id + 1)
}

/// Create a new game for `player_count` seats.
///
/// Names are matched to seats by position; a missing or blank name falls
/// back to [`default_name`]. Extra names beyond `player_count` are ignored.
/// Persisting the result is the caller's job.
pub fn create_game<S: AsRef<str>>(
    player_count: usize,
    target_score: Option<&str>,
    names: &[S],
) -> Result<GameState, DomainError> {
    if player_count == 0 {
        return Err(DomainError::precondition(
            "a game needs at least one player",
        ));
    }

    let players = (0..player_count)
        .map(|id| {
            let name = names
                .get(id)
                .map(|n| n.as_ref().trim())
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| default_name(id));
            Player::new(id, name)
        })
        .collect::<Vec<_>>();

    debug!(player_count, "created game state");

    Ok(GameState {
        players,
        round: 1,
        target_score: target_score.and_then(normalize_target),
    })
}

//! Standings. Lowest cumulative score ranks first (penalty points).

use crate::domain::state::{require_players, GameState, Player};
use crate::errors::domain::DomainError;

/// A player paired with its 1-based rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedPlayer<'a> {
    pub player: &'a Player,
    pub rank: usize,
}

/// Players sorted ascending by score. The sort is stable, so equal scores
/// keep display order.
pub fn standings(state: &GameState) -> Vec<&Player> {
    let mut sorted: Vec<&Player> = state.players.iter().collect();
    sorted.sort_by_key(|p| p.score);
    sorted
}

/// Rank of every player, returned in display order.
///
/// Ties are not grouped: two equal scores get consecutive ranks following
/// the stable sort. Ranks are matched by player id, not by score value.
pub fn rank(state: &GameState) -> Vec<RankedPlayer<'_>> {
    let sorted = standings(state);
    state
        .players
        .iter()
        .map(|player| {
            let rank = sorted
                .iter()
                .position(|p| p.id == player.id)
                .map_or(sorted.len(), |i| i + 1);
            RankedPlayer { player, rank }
        })
        .collect()
}

/// Player at rank 1.
pub fn leader(state: &GameState) -> Result<&Player, DomainError> {
    require_players(state, "leader")?;
    standings(state)
        .first()
        .copied()
        .ok_or_else(|| DomainError::precondition("game has no players (leader)"))
}

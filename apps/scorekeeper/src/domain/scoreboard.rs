//! Per-round scoreboard projection for presentation adapters.

use serde::Serialize;

use crate::domain::ranking::rank;
use crate::domain::state::{dealer_index, GameState, PlayerId, Points};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreboardRow {
    pub id: PlayerId,
    pub name: String,
    pub score: Points,
    pub rank: usize,
    pub is_leader: bool,
    pub is_dealer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub round: u32,
    pub dealer_id: PlayerId,
    pub dealer_name: String,
    pub target_score: Option<String>,
    /// Display order.
    pub rows: Vec<ScoreboardRow>,
}

pub fn scoreboard(state: &GameState) -> Result<Scoreboard, DomainError> {
    let dealer = dealer_index(state)?;
    let dealer_player = &state.players[dealer];

    let rows = rank(state)
        .into_iter()
        .map(|r| ScoreboardRow {
            id: r.player.id,
            name: r.player.name.clone(),
            score: r.player.score,
            rank: r.rank,
            is_leader: r.rank == 1,
            is_dealer: r.player.id == dealer_player.id,
        })
        .collect();

    Ok(Scoreboard {
        round: state.round,
        dealer_id: dealer_player.id,
        dealer_name: dealer_player.name.clone(),
        target_score: state.target_score.clone(),
        rows,
    })
}

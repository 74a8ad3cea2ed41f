//! End-of-game statistics. Read-only projection of a `GameState`.

use serde::Serialize;

use crate::domain::ranking::standings;
use crate::domain::state::{require_players, GameState, Player, PlayerId, Points};
use crate::errors::domain::DomainError;

/// Identity and total of a player named in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub score: Points,
}

impl From<&Player> for PlayerSummary {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            score: p.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZeroLeader {
    pub player: PlayerSummary,
    pub zero_rounds: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorstRound {
    pub player: PlayerSummary,
    pub points: Points,
}

/// Round-by-round grid: one row per committed round, one cell per player
/// in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryTable {
    pub players: Vec<String>,
    pub rows: Vec<HistoryRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    /// 1-based.
    pub round: usize,
    pub cells: Vec<Option<Points>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    pub rounds_played: usize,
    pub winner: PlayerSummary,
    pub loser: PlayerSummary,
    pub most_zeros: ZeroLeader,
    pub worst_round: WorstRound,
    pub history: HistoryTable,
}

pub fn compute_stats(state: &GameState) -> Result<StatsReport, DomainError> {
    let players = require_players(state, "compute_stats")?;

    // Winner and loser come from the stable ascending sort: first and last.
    let sorted = standings(state);
    let (winner, loser) = match (sorted.first(), sorted.last()) {
        (Some(w), Some(l)) => (*w, *l),
        _ => return Err(DomainError::precondition("game has no players (stats)")),
    };

    Ok(StatsReport {
        rounds_played: state.rounds_played(),
        winner: winner.into(),
        loser: loser.into(),
        most_zeros: most_zeros(players),
        worst_round: worst_round(players),
        history: history_table(state),
    })
}

/// Running best-so-far scan; a later player must strictly exceed the current
/// best to take over, so the earliest player wins a tie.
fn most_zeros(players: &[Player]) -> ZeroLeader {
    let mut best = &players[0];
    let mut best_count = best.zero_rounds();
    for p in &players[1..] {
        let count = p.zero_rounds();
        if count > best_count {
            best = p;
            best_count = count;
        }
    }
    ZeroLeader {
        player: best.into(),
        zero_rounds: best_count,
    }
}

/// Highest single-round score across the game, same tie rule as
/// [`most_zeros`]. A player with no rounds contributes 0.
fn worst_round(players: &[Player]) -> WorstRound {
    let mut owner = &players[0];
    let mut max_points = owner.best_round();
    for p in &players[1..] {
        let local = p.best_round();
        if local > max_points {
            owner = p;
            max_points = local;
        }
    }
    WorstRound {
        player: owner.into(),
        points: max_points,
    }
}

pub fn history_table(state: &GameState) -> HistoryTable {
    let rows = (0..state.rounds_played())
        .map(|r| HistoryRow {
            round: r + 1,
            cells: state
                .players
                .iter()
                .map(|p| p.history.get(r).copied())
                .collect(),
        })
        .collect();

    HistoryTable {
        players: state.players.iter().map(|p| p.name.clone()).collect(),
        rows,
    }
}

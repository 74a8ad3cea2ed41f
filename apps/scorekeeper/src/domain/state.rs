use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::domain::DomainError;

pub type PlayerId = usize;

/// Points scored in a single round, or a cumulative total.
pub type Points = i64;

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable 0-based index assigned at setup.
    pub id: PlayerId,
    pub name: String,
    /// Cumulative score; always equals the sum of `history`.
    pub score: Points,
    /// One entry per committed round, append-only.
    pub history: Vec<Points>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            history: Vec::new(),
        }
    }

    /// Number of rounds in which this player scored exactly zero.
    pub fn zero_rounds(&self) -> usize {
        self.history.iter().filter(|&&v| v == 0).count()
    }

    /// Highest single-round score, or 0 before the first round.
    pub fn best_round(&self) -> Points {
        self.history.iter().copied().max().unwrap_or(0)
    }
}

/// Entire scorekeeping state, sufficient for every pure domain operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Display order, fixed for the lifetime of the game.
    pub players: Vec<Player>,
    /// 1-based number of the round about to be played.
    pub round: u32,
    /// Informational only; never enforced.
    #[serde(default, deserialize_with = "lenient_target")]
    pub target_score: Option<String>,
}

impl GameState {
    /// Number of rounds already committed.
    pub fn rounds_played(&self) -> usize {
        self.round.saturating_sub(1) as usize
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Verify the structural invariants every committed state must hold.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        if self.players.is_empty() {
            return Err(DomainError::invariant("game has no players"));
        }
        if self.round < 1 {
            return Err(DomainError::invariant("round must be >= 1"));
        }
        let played = self.rounds_played();
        for (idx, p) in self.players.iter().enumerate() {
            if p.id != idx {
                return Err(DomainError::invariant(format!(
                    "player at position {idx} has id {}",
                    p.id
                )));
            }
            if p.name.trim().is_empty() {
                return Err(DomainError::invariant(format!("player {idx} has no name")));
            }
            if p.history.len() != played {
                return Err(DomainError::invariant(format!(
                    "player {idx} has {} history entries, expected {played}",
                    p.history.len()
                )));
            }
            let sum = p
                .history
                .iter()
                .try_fold(0, |acc: Points, &v| acc.checked_add(v));
            if sum != Some(p.score) {
                return Err(DomainError::invariant(format!(
                    "player {idx} score {} does not match its history",
                    p.score
                )));
            }
        }
        Ok(())
    }
}

/// Returns the player list, failing when setup has not populated it.
pub fn require_players<'a>(
    state: &'a GameState,
    ctx: &'static str,
) -> Result<&'a [Player], DomainError> {
    if state.players.is_empty() {
        return Err(DomainError::precondition(format!(
            "game has no players ({ctx})"
        )));
    }
    Ok(&state.players)
}

/// Dealer position for a 1-based round number.
///
/// Round 1 → seat 0, round 2 → seat 1, wrapping at `player_count`.
#[inline]
pub fn dealer_for_round(round: u32, player_count: usize) -> PlayerId {
    debug_assert!(round >= 1, "round is 1-based and must be >= 1");
    debug_assert!(player_count > 0, "player_count must be positive");
    round.saturating_sub(1) as usize % player_count
}

/// Index into `players` of whoever deals the round about to be played.
pub fn dealer_index(state: &GameState) -> Result<usize, DomainError> {
    let players = require_players(state, "dealer_index")?;
    Ok(dealer_for_round(state.round, players.len()))
}

// The legacy browser build stored whatever the target field held: a
// string, a number, or null. Strings are kept verbatim so a saved record
// reloads unchanged; trimming happens once, in `create_game`.
fn lenient_target<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(Raw::Text(s)) => Some(s),
        Some(Raw::Int(n)) => Some(n.to_string()),
        Some(Raw::Float(f)) => Some(f.to_string()),
    })
}

/// Blank targets are stored as `None`.
pub fn normalize_target(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

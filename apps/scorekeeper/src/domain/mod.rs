//! Domain layer: pure scorekeeping types and helpers.

pub mod ranking;
pub mod rounds;
pub mod rules;
pub mod scoreboard;
pub mod setup;
pub mod state;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_prelude;
#[cfg(test)]
mod tests_props_ranking;
#[cfg(test)]
mod tests_rounds;
#[cfg(test)]
mod tests_stats;

// Re-exports for ergonomics
pub use ranking::{leader, rank, standings, RankedPlayer};
pub use rounds::{commit_round, parse_entry, RoundSubmission};
pub use scoreboard::{scoreboard, Scoreboard, ScoreboardRow};
pub use setup::create_game;
pub use state::{dealer_for_round, dealer_index, GameState, Player, PlayerId, Points};
pub use stats::{compute_stats, StatsReport};

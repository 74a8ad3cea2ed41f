//! Property-based tests for ranking, stats, and serialization.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::ranking::{leader, rank};
use crate::domain::state::GameState;
use crate::domain::stats::compute_stats;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: rank is a bijection onto 1..=N.
    #[test]
    fn prop_rank_is_bijection(state in test_gens::game_state()) {
        let ranks: HashSet<usize> = rank(&state).iter().map(|r| r.rank).collect();
        let expected: HashSet<usize> = (1..=state.players.len()).collect();
        prop_assert_eq!(ranks, expected);
    }

    /// Property: rank 1 holds the minimum score, and ranks follow score order.
    #[test]
    fn prop_rank_orders_by_score(state in test_gens::game_state()) {
        let min = state.players.iter().map(|p| p.score).min().unwrap();
        prop_assert_eq!(leader(&state).unwrap().score, min);

        let ranked = rank(&state);
        for a in &ranked {
            for b in &ranked {
                if a.player.score < b.player.score {
                    prop_assert!(a.rank < b.rank);
                }
                if a.player.score == b.player.score && a.player.id < b.player.id {
                    prop_assert!(a.rank < b.rank);
                }
            }
        }
    }

    /// Property: winner/loser carry the extreme scores.
    #[test]
    fn prop_stats_extremes(state in test_gens::game_state()) {
        let report = compute_stats(&state).unwrap();
        let min = state.players.iter().map(|p| p.score).min().unwrap();
        let max = state.players.iter().map(|p| p.score).max().unwrap();
        prop_assert_eq!(report.winner.score, min);
        prop_assert_eq!(report.loser.score, max);
        prop_assert_eq!(report.history.rows.len(), state.rounds_played());
    }

    /// Property: JSON round-trip preserves the whole state, history order included.
    #[test]
    fn prop_json_round_trip(state in test_gens::game_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, state);
    }
}

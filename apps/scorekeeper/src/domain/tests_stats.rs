use crate::domain::rounds::{commit_round, RoundSubmission};
use crate::domain::setup::create_game;
use crate::domain::stats::compute_stats;
use crate::domain::test_state_helpers::{state_with_histories, state_with_scores};
use crate::errors::domain::DomainError;

#[test]
fn stats_for_three_player_scenario() {
    let mut state = create_game(3, None, &["A", "B", "C"]).unwrap();
    commit_round(&mut state, &RoundSubmission::from_ordered(["0", "5", "3"])).unwrap();
    let _ = commit_round(&mut state, &RoundSubmission::from_ordered(["0", "0", "1"]));
    commit_round(&mut state, &RoundSubmission::from_ordered(["", "4", "2"])).unwrap();

    let report = compute_stats(&state).unwrap();

    assert_eq!(report.rounds_played, 2);
    assert_eq!((report.winner.name.as_str(), report.winner.score), ("A", 0));
    assert_eq!((report.loser.name.as_str(), report.loser.score), ("B", 9));
    assert_eq!(report.most_zeros.player.name, "A");
    assert_eq!(report.most_zeros.zero_rounds, 2);
    assert_eq!(report.worst_round.player.name, "B");
    assert_eq!(report.worst_round.points, 5);
}

#[test]
fn history_table_is_rounds_by_players() {
    let state = state_with_histories(&["A", "B"], &[&[0, 4, 1], &[3, 0, 2]]);
    let table = compute_stats(&state).unwrap().history;

    assert_eq!(table.players, vec!["A", "B"]);
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0].round, 1);
    assert_eq!(table.rows[0].cells, vec![Some(0), Some(3)]);
    assert_eq!(table.rows[2].cells, vec![Some(1), Some(2)]);
}

#[test]
fn winner_tie_goes_to_first_and_loser_tie_to_last() {
    let state = state_with_scores(&[4, 2, 9, 2, 9]);
    let report = compute_stats(&state).unwrap();
    assert_eq!(report.winner.id, 1);
    assert_eq!(report.loser.id, 4);
}

#[test]
fn most_zeros_tie_goes_to_earliest_player() {
    let state = state_with_histories(&["A", "B", "C"], &[&[3, 1], &[0, 2], &[4, 0]]);
    let report = compute_stats(&state).unwrap();
    assert_eq!(report.most_zeros.player.id, 1);
    assert_eq!(report.most_zeros.zero_rounds, 1);
}

#[test]
fn most_zeros_with_no_zeros_is_first_player() {
    let state = state_with_histories(&["A", "B"], &[&[3], &[2]]);
    let report = compute_stats(&state).unwrap();
    assert_eq!(report.most_zeros.player.id, 0);
    assert_eq!(report.most_zeros.zero_rounds, 0);
}

#[test]
fn worst_round_tie_goes_to_earliest_player() {
    let state = state_with_histories(&["A", "B", "C"], &[&[1, 2], &[8, 0], &[8, 3]]);
    let report = compute_stats(&state).unwrap();
    assert_eq!(report.worst_round.player.id, 1);
    assert_eq!(report.worst_round.points, 8);
}

#[test]
fn worst_round_handles_negative_only_games() {
    let state = state_with_histories(&["A", "B"], &[&[-4, -2], &[-3, -6]]);
    let report = compute_stats(&state).unwrap();
    assert_eq!(report.worst_round.player.id, 0);
    assert_eq!(report.worst_round.points, -2);
}

#[test]
fn stats_before_first_round_are_degenerate_but_defined() {
    let state = create_game(2, None, &["A", "B"]).unwrap();
    let report = compute_stats(&state).unwrap();
    assert_eq!(report.rounds_played, 0);
    assert_eq!(report.winner.id, 0);
    assert_eq!(report.worst_round.points, 0);
    assert!(report.history.rows.is_empty());
}

#[test]
fn stats_do_not_mutate_state() {
    let state = state_with_scores(&[1, 2]);
    let before = state.clone();
    let _ = compute_stats(&state).unwrap();
    assert_eq!(state, before);
}

#[test]
fn stats_require_players() {
    let state = state_with_scores(&[]);
    assert!(matches!(
        compute_stats(&state),
        Err(DomainError::Precondition(_))
    ));
}

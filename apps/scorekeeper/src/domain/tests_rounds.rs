use crate::domain::rounds::{commit_round, RoundSubmission};
use crate::domain::setup::create_game;
use crate::domain::state::{dealer_index, GameState};
use crate::errors::domain::DomainError;

fn abc() -> GameState {
    create_game(3, None, &["A", "B", "C"]).unwrap()
}

fn scores(state: &GameState) -> Vec<i64> {
    state.players.iter().map(|p| p.score).collect()
}

#[test]
fn first_round_with_one_zero_is_accepted() {
    let mut state = abc();
    let sub = RoundSubmission::new().with(0, "0").with(1, "5").with(2, "3");

    commit_round(&mut state, &sub).unwrap();

    assert_eq!(scores(&state), vec![0, 5, 3]);
    assert_eq!(state.round, 2);
    assert_eq!(state.players[1].history, vec![5]);
}

#[test]
fn two_zeros_are_rejected_and_state_is_untouched() {
    let mut state = abc();
    commit_round(&mut state, &RoundSubmission::from_ordered(["0", "5", "3"])).unwrap();
    let before = state.clone();

    let err = commit_round(&mut state, &RoundSubmission::from_ordered(["0", "0", "1"]))
        .unwrap_err();

    assert_eq!(err, DomainError::RuleViolation { zero_count: 2 });
    assert_eq!(state, before);
    assert_eq!(state.round, 2);
}

#[test]
fn blank_counts_as_zero_and_is_accepted_alone() {
    let mut state = abc();
    commit_round(&mut state, &RoundSubmission::from_ordered(["0", "5", "3"])).unwrap();

    commit_round(&mut state, &RoundSubmission::from_ordered(["", "4", "2"])).unwrap();

    assert_eq!(scores(&state), vec![0, 9, 5]);
    assert_eq!(state.players[0].history, vec![0, 0]);
    assert_eq!(state.round, 3);
}

#[test]
fn blank_plus_explicit_zero_is_two_zeros() {
    let mut state = abc();
    let err = commit_round(&mut state, &RoundSubmission::from_ordered(["", "0", "7"]))
        .unwrap_err();
    assert_eq!(err, DomainError::RuleViolation { zero_count: 2 });
    assert_eq!(state, abc());
}

#[test]
fn missing_entries_count_as_zero() {
    let mut state = abc();
    let err = commit_round(&mut state, &RoundSubmission::new().with(1, "4")).unwrap_err();
    assert_eq!(err, DomainError::RuleViolation { zero_count: 2 });
}

#[test]
fn junk_entries_normalize_to_zero() {
    let mut state = abc();
    commit_round(&mut state, &RoundSubmission::from_ordered(["abc", "6", "2"])).unwrap();
    assert_eq!(scores(&state), vec![0, 6, 2]);

    let err = commit_round(&mut state, &RoundSubmission::from_ordered(["x", "?", "2"]))
        .unwrap_err();
    assert_eq!(err, DomainError::RuleViolation { zero_count: 2 });
}

#[test]
fn no_zero_round_is_fine() {
    let mut state = abc();
    commit_round(&mut state, &RoundSubmission::from_ordered(["1", "2", "3"])).unwrap();
    assert_eq!(scores(&state), vec![1, 2, 3]);
}

#[test]
fn single_player_may_score_zero() {
    let mut state = create_game(1, None, &["Solo"]).unwrap();
    commit_round(&mut state, &RoundSubmission::new()).unwrap();
    assert_eq!(state.players[0].history, vec![0]);
    assert_eq!(state.round, 2);
}

#[test]
fn unknown_ids_in_submission_are_ignored() {
    let mut state = abc();
    let sub = RoundSubmission::from_ordered(["0", "5", "3"]).with(9, "100");
    commit_round(&mut state, &sub).unwrap();
    assert_eq!(scores(&state), vec![0, 5, 3]);
}

#[test]
fn negative_entries_accumulate() {
    let mut state = abc();
    commit_round(&mut state, &RoundSubmission::from_ordered(["-5", "5", "0"])).unwrap();
    assert_eq!(scores(&state), vec![-5, 5, 0]);
    assert!(state.check_invariants().is_ok());
}

#[test]
fn dealer_advances_one_seat_per_committed_round() {
    let mut state = abc();
    let mut seen = vec![dealer_index(&state).unwrap()];
    for _ in 0..4 {
        commit_round(&mut state, &RoundSubmission::from_ordered(["1", "1", "0"])).unwrap();
        seen.push(dealer_index(&state).unwrap());
    }
    assert_eq!(seen, vec![0, 1, 2, 0, 1]);
}

#[test]
fn rejected_round_does_not_advance_dealer() {
    let mut state = abc();
    let dealer = dealer_index(&state).unwrap();
    let _ = commit_round(&mut state, &RoundSubmission::new());
    assert_eq!(dealer_index(&state).unwrap(), dealer);
}

#[test]
fn commit_without_players_is_a_precondition_failure() {
    let mut state = GameState {
        players: Vec::new(),
        round: 1,
        target_score: None,
    };
    assert!(matches!(
        commit_round(&mut state, &RoundSubmission::new()),
        Err(DomainError::Precondition(_))
    ));
}

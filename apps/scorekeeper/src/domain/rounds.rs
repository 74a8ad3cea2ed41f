//! Round commit: validate one round of raw entries, then apply it to every
//! player at once.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::domain::rules::MAX_ZEROS_PER_ROUND;
use crate::domain::state::{require_players, GameState, PlayerId, Points};
use crate::errors::domain::DomainError;

/// Raw per-player entries for the round about to be played.
///
/// Entries are kept exactly as typed; normalization happens in
/// [`commit_round`]. A player without an entry counts as blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundSubmission {
    entries: BTreeMap<PlayerId, String>,
}

impl RoundSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a submission from entries listed in display order.
    pub fn from_ordered<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .enumerate()
                .map(|(id, raw)| (id, raw.into()))
                .collect(),
        }
    }

    pub fn set(&mut self, id: PlayerId, raw: impl Into<String>) -> &mut Self {
        self.entries.insert(id, raw.into());
        self
    }

    pub fn with(mut self, id: PlayerId, raw: impl Into<String>) -> Self {
        self.set(id, raw);
        self
    }

    pub fn raw(&self, id: PlayerId) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }
}

/// Normalize one raw entry to points.
///
/// Takes an optional sign and the leading run of digits after trimming;
/// anything else is ignored. No digits, or a value too large for `i64`,
/// yields 0.
pub fn parse_entry(raw: &str) -> Points {
    let s = raw.trim();
    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = body.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }
    let digits = &body[..digits_len];
    let parsed = if negative {
        format!("-{digits}").parse::<i64>()
    } else {
        digits.parse::<i64>()
    };
    parsed.unwrap_or(0)
}

/// Parsed values for every player in display order.
pub fn parse_submission(state: &GameState, submission: &RoundSubmission) -> Vec<Points> {
    state
        .players
        .iter()
        .map(|p| submission.raw(p.id).map(parse_entry).unwrap_or(0))
        .collect()
}

/// Check a parsed round against the zero rule without touching state.
pub fn validate_zero_rule(values: &[Points]) -> Result<(), DomainError> {
    let zero_count = values.iter().filter(|&&v| v == 0).count();
    if zero_count > MAX_ZEROS_PER_ROUND {
        return Err(DomainError::rule_violation(zero_count));
    }
    Ok(())
}

/// Commit one round.
///
/// On success every player's score and history advance together and the
/// round counter increments. On any error `state` is left untouched.
pub fn commit_round(
    state: &mut GameState,
    submission: &RoundSubmission,
) -> Result<(), DomainError> {
    require_players(state, "commit_round")?;

    let values = parse_submission(state, submission);
    if let Err(e) = validate_zero_rule(&values) {
        debug!(round = state.round, error = %e, "round rejected");
        return Err(e);
    }

    let totals = state
        .players
        .iter()
        .zip(&values)
        .map(|(p, &v)| {
            p.score
                .checked_add(v)
                .ok_or_else(|| DomainError::score_overflow(p.id))
        })
        .collect::<Result<Vec<Points>, _>>()?;

    for ((player, value), total) in state.players.iter_mut().zip(values).zip(totals) {
        player.score = total;
        player.history.push(value);
    }
    state.round += 1;

    info!(round = state.round - 1, "round committed");
    Ok(())
}

//! House rules.

/// At most this many players may score exactly zero in one round (the
/// player who stops the deal).
pub const MAX_ZEROS_PER_ROUND: usize = 1;

//! Pairing of one round of a single-elimination bracket.

use crate::error::BracketError;
use crate::round::Match;

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a list of remaining players turns into.
pub enum Draw {
    /// Only one player is left standing.
    Champion(String),
    /// Matches of the next round, real pairings first and byes after them.
    Round(Vec<Match>),
}

/// Largest power of two that is less than or equal to `count`.
///
/// Returns `None` for zero, which has no such power.
pub fn bracket_size(count: usize) -> Option<usize> {
    count.checked_ilog2().map(|exponent| 1 << exponent)
}

/// Pairs `names` into the next round.
///
/// The first `bracket_size(names.len())` names are paired off in order; every
/// remaining name receives a bye. Names are expected to be distinct and
/// already arranged in seeding order.
pub fn draw(names: &[String]) -> Result<Draw, BracketError> {
    let size = bracket_size(names.len()).ok_or(BracketError::NoPlayers)?;

    if let [only] = names {
        return Ok(Draw::Champion(only.clone()));
    }

    let (contenders, leftovers) = names.split_at(size);
    log::debug!(
        "Drawing {} players: {} matches, {} byes",
        names.len(),
        contenders.len() / 2,
        leftovers.len()
    );

    // `size` is a power of two of at least 2, so every chunk is a full pair.
    let matches = contenders
        .chunks_exact(2)
        .map(|pair| Match::pending(&pair[0], &pair[1]))
        .chain(leftovers.iter().map(|name| Match::bye(name)))
        .collect();

    Ok(Draw::Round(matches))
}

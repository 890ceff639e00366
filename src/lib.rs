//! `wfsports` pairs up players for a single-elimination tournament and moves
//! the bracket forward one round at a time.
//!
//! A bracket lives in plain, headerless CSV files. The roster lists one player
//! per line; each `round<N>.csv` lists `player1,player2,winner` with the winner
//! left empty until the match is played. When the number of players is not a
//! power of two, the players left over after filling the largest power-of-two
//! bracket get a bye, recorded as a self-match they have already won.
//!
//! # Example
//!
//! ```rust
//! use wfsports::pairing::{draw, Draw};
//! use wfsports::round::{encode, Match};
//!
//! # fn demo() -> Result<(), wfsports::error::BracketError> {
//! let names = vec!["Ann".to_string(), "Bob".to_string(), "Cid".to_string()];
//! let Draw::Round(matches) = draw(&names)? else {
//!     unreachable!("three players never produce a champion");
//! };
//!
//! assert_eq!(matches, [Match::pending("Ann", "Bob"), Match::bye("Cid")]);
//! assert_eq!(encode(&matches)?, "Ann,Bob,\nCid,Cid,Cid\n");
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

pub mod error;
pub mod output;
pub mod pairing;
pub mod records;
pub mod render;
pub mod round;
pub mod seeding;

use crate::error::BracketError;
use crate::pairing::{draw, Draw};
use crate::records::Completeness;
use crate::round::{Match, FIRST_ROUND};
use crate::seeding::{arrange, dedup, SeedOrder};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of starting or advancing a bracket.
pub enum Step {
    /// A single player remains; the tournament is over.
    Champion(String),
    /// Pairings for the round with the given number.
    Round { number: u32, matches: Vec<Match> },
}

impl Step {
    /// Name of the file this step should be written to, if any.
    pub fn file_name(&self) -> Option<String> {
        match self {
            Step::Champion(_) => None,
            Step::Round { number, .. } => Some(round::round_file_name(*number)),
        }
    }
}

/// Draws the first round from the players listed in a roster file.
pub fn start(roster: &Path, order: SeedOrder) -> Result<Step, BracketError> {
    let names = records::load_roster(roster)?;
    log::info!("Loaded {} roster entries from {}", names.len(), roster.display());
    next_step(FIRST_ROUND, names, order)
}

/// Draws the round after the completed one stored at `round_file`.
///
/// The file name must be `round<N>.csv`; the new round is number `N + 1`.
pub fn advance(round_file: &Path, order: SeedOrder) -> Result<Step, BracketError> {
    let number = round::next_round_number(round_file)?;
    let matches = records::load_round(round_file, Completeness::Decided)?;
    let winners = matches.into_iter().filter_map(|record| record.winner);
    next_step(number, winners.collect(), order)
}

/// Loads a round for display; winners may still be undecided.
pub fn show(round_file: &Path) -> Result<String, BracketError> {
    let matches = records::load_round(round_file, Completeness::Pending)?;
    Ok(render::render_table(&matches))
}

fn next_step(number: u32, names: Vec<String>, order: SeedOrder) -> Result<Step, BracketError> {
    let names = arrange(dedup(names), order);
    Ok(match draw(&names)? {
        Draw::Champion(name) => Step::Champion(name),
        Draw::Round(matches) => Step::Round { number, matches },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_step_dedups_before_drawing() {
        let names = ["Ann", "Ann", "Bob"].map(String::from).to_vec();
        let step = next_step(8, names, SeedOrder::Preserve).unwrap();
        assert_eq!(
            step,
            Step::Round {
                number: 8,
                matches: vec![Match::pending("Ann", "Bob")],
            }
        );
        assert_eq!(step.file_name().as_deref(), Some("round8.csv"));
    }

    #[test]
    fn next_step_declares_single_champion() {
        let names = ["Dee", "Dee"].map(String::from).to_vec();
        let step = next_step(3, names, SeedOrder::Random).unwrap();
        assert_eq!(step, Step::Champion("Dee".to_string()));
        assert_eq!(step.file_name(), None);
    }

    #[test]
    fn next_step_without_names_fails() {
        assert!(matches!(
            next_step(1, Vec::new(), SeedOrder::Preserve),
            Err(BracketError::NoPlayers)
        ));
    }
}

//! Round records and the `round<N>.csv` naming convention.

use crate::error::BracketError;
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::LazyLock;

/// Number of the first round of every bracket.
pub const FIRST_ROUND: u32 = 1;

static ROUND_FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^round([0-9]+)\.csv$").expect("round file pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One line of a round file: two players and, once decided, the winner.
///
/// A bye is a self-match where both players and the winner are the same name.
pub struct Match {
    pub player1: String,
    pub player2: String,
    pub winner: Option<String>,
}

impl Match {
    /// An undecided match between two different players.
    pub fn pending(player1: &str, player2: &str) -> Self {
        Self {
            player1: player1.to_string(),
            player2: player2.to_string(),
            winner: None,
        }
    }

    /// A player with no opponent this round, advancing automatically.
    pub fn bye(player: &str) -> Self {
        Self {
            player1: player.to_string(),
            player2: player.to_string(),
            winner: Some(player.to_string()),
        }
    }

    pub fn is_bye(&self) -> bool {
        self.player1 == self.player2 && self.winner.as_deref() == Some(self.player1.as_str())
    }
}

pub fn round_file_name(number: u32) -> String {
    format!("round{number}.csv")
}

/// Extracts `N` from a path whose file name is exactly `round<N>.csv`.
pub fn round_number(path: &Path) -> Result<u32, BracketError> {
    let malformed = |reason: String| BracketError::MalformedFilename {
        filename: path.display().to_string(),
        reason,
    };

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| malformed("has no usable file name".to_string()))?;

    let digits = ROUND_FILE_NAME
        .captures(file_name)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| {
            malformed(format!(
                "failed to match pattern {}",
                ROUND_FILE_NAME.as_str()
            ))
        })?;

    digits.as_str().parse::<u32>().map_err(|err| {
        malformed(format!(
            "has an integer part that somehow doesn't parse ({err}), probably a bug"
        ))
    })
}

/// Number of the round that follows the one stored at `path`.
pub fn next_round_number(path: &Path) -> Result<u32, BracketError> {
    let current = round_number(path)?;
    current
        .checked_add(1)
        .ok_or_else(|| BracketError::MalformedFilename {
            filename: path.display().to_string(),
            reason: format!("has round number {current}, which cannot be advanced"),
        })
}

/// Serializes matches as headerless CSV, one match per line.
///
/// An undecided winner is written as an empty trailing field (`Ann,Bob,`).
pub fn encode(matches: &[Match]) -> Result<String, BracketError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    for record in matches {
        writer.serialize(record).map_err(BracketError::Encode)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| BracketError::Encode(err.into_error().into()))?;

    String::from_utf8(bytes).map_err(|err| {
        BracketError::Encode(
            std::io::Error::new(std::io::ErrorKind::InvalidData, err.utf8_error()).into(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("round1.csv", 1)]
    #[case("round7.csv", 7)]
    #[case("round07.csv", 7)]
    #[case("brackets/spring/round12.csv", 12)]
    fn round_number_reads_suffix(#[case] path: &str, #[case] expected: u32) {
        assert_eq!(round_number(Path::new(path)).unwrap(), expected);
    }

    #[rstest]
    #[case("roundX.csv")]
    #[case("myround3.csv")]
    #[case("round3.csv.bak")]
    #[case("round.csv")]
    #[case("round3_csv")]
    #[case("Round3.csv")]
    #[case("..")]
    fn round_number_rejects_other_names(#[case] path: &str) {
        let err = round_number(Path::new(path)).unwrap_err();
        assert!(
            matches!(err, BracketError::MalformedFilename { .. }),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn round_number_only_accepts_ascii_digits() {
        let err = round_number(Path::new("round\u{0663}.csv")).unwrap_err();
        match err {
            BracketError::MalformedFilename { reason, .. } => {
                assert!(reason.contains("failed to match pattern"), "reason: {reason}");
            }
            other => panic!("expected malformed filename, got {other:?}"),
        }
    }

    #[test]
    fn round_number_reports_overflow_as_malformed() {
        let err = round_number(Path::new("round99999999999999999999.csv")).unwrap_err();
        match err {
            BracketError::MalformedFilename { reason, .. } => {
                assert!(reason.contains("probably a bug"), "reason: {reason}");
            }
            other => panic!("expected malformed filename, got {other:?}"),
        }
    }

    #[test]
    fn next_round_number_increments() {
        assert_eq!(next_round_number(Path::new("round7.csv")).unwrap(), 8);
        assert_eq!(round_file_name(8), "round8.csv");
    }

    #[test]
    fn next_round_number_refuses_to_wrap() {
        let path = format!("round{}.csv", u32::MAX);
        assert!(matches!(
            next_round_number(Path::new(&path)),
            Err(BracketError::MalformedFilename { .. })
        ));
    }

    #[test]
    fn encode_writes_pending_matches_and_byes() {
        let matches = vec![Match::pending("Ann", "Bob"), Match::bye("Cid")];
        assert_eq!(encode(&matches).unwrap(), "Ann,Bob,\nCid,Cid,Cid\n");
    }

    #[test]
    fn encode_quotes_names_containing_commas() {
        let matches = vec![Match::pending("Smith, Ann", "Bob")];
        assert_eq!(encode(&matches).unwrap(), "\"Smith, Ann\",Bob,\n");
    }

    #[test]
    fn encode_of_empty_round_is_empty() {
        assert_eq!(encode(&[]).unwrap(), "");
    }

    #[test]
    fn bye_is_recognized() {
        assert!(Match::bye("Dee").is_bye());
        assert!(!Match::pending("Dee", "Eve").is_bye());
    }
}

//! Loading of roster and round files.
//!
//! Both file kinds are headerless, comma-delimited text. Rows keep their
//! on-disk order and remember the line they started on so validation errors
//! can point at the offending line.

use crate::error::BracketError;
use crate::round::Match;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Number of columns in a round file: player 1, player 2, winner.
pub const ROUND_COLUMNS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single record of a delimited file.
pub struct Row {
    /// 1-based line on which the record starts.
    pub line: u64,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How much of a round file must be filled in for it to load.
pub enum Completeness {
    /// Winners may still be missing, as in a freshly generated round.
    Pending,
    /// Every match must name its winner.
    Decided,
}

/// Reads every record of a headerless CSV file.
pub fn read_rows(path: &Path) -> Result<Vec<Row>, BracketError> {
    let content = fs::read(path).map_err(BracketError::io(path))?;
    let rows = parse_rows(content.as_slice()).map_err(|source| BracketError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} records from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parses headerless CSV from any reader.
///
/// Every record must have as many fields as the first one.
pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<Row>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(reader);

    reader
        .records()
        .enumerate()
        .map(|(index, record)| {
            let record = record?;
            let line = record
                .position()
                .map_or(index as u64 + 1, |position| position.line());
            Ok(Row {
                line,
                fields: record.iter().map(str::to_string).collect(),
            })
        })
        .collect()
}

/// Loads the player names listed in the first column of a roster file.
pub fn load_roster(path: &Path) -> Result<Vec<String>, BracketError> {
    roster_from_rows(read_rows(path)?)
}

/// Loads the matches of a round file.
pub fn load_round(path: &Path, completeness: Completeness) -> Result<Vec<Match>, BracketError> {
    round_from_rows(read_rows(path)?, completeness)
}

pub fn roster_from_rows(rows: Vec<Row>) -> Result<Vec<String>, BracketError> {
    rows.into_iter()
        .map(|row| {
            for column in 1..=row.fields.len() {
                require_name(&row, column)?;
            }
            row.fields
                .into_iter()
                .next()
                .ok_or(BracketError::EmptyField {
                    line: row.line,
                    column: 1,
                })
        })
        .collect()
}

pub fn round_from_rows(
    rows: Vec<Row>,
    completeness: Completeness,
) -> Result<Vec<Match>, BracketError> {
    rows.into_iter()
        .map(|row| parse_match(row, completeness))
        .collect()
}

fn parse_match(row: Row, completeness: Completeness) -> Result<Match, BracketError> {
    if row.fields.len() != ROUND_COLUMNS {
        return Err(BracketError::ColumnCount {
            line: row.line,
            expected: ROUND_COLUMNS,
            found: row.fields.len(),
        });
    }

    require_name(&row, 1)?;
    require_name(&row, 2)?;
    if completeness == Completeness::Decided {
        require_name(&row, 3)?;
    }

    let line = row.line;
    let mut fields = row.fields.into_iter();
    let (Some(player1), Some(player2), Some(winner)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(BracketError::ColumnCount {
            line,
            expected: ROUND_COLUMNS,
            found: 0,
        });
    };

    let winner = if is_blank(&winner) {
        None
    } else if winner == player1 || winner == player2 {
        Some(winner)
    } else {
        return Err(BracketError::InvalidWinner {
            line,
            winner,
            player1,
            player2,
        });
    };

    Ok(Match {
        player1,
        player2,
        winner,
    })
}

/// Fails unless the 1-based `column` of `row` holds a non-blank name.
fn require_name(row: &Row, column: usize) -> Result<(), BracketError> {
    let filled = column
        .checked_sub(1)
        .and_then(|index| row.fields.get(index))
        .is_some_and(|field| !is_blank(field));
    if filled {
        Ok(())
    } else {
        Err(BracketError::EmptyField {
            line: row.line,
            column,
        })
    }
}

fn is_blank(field: &str) -> bool {
    field.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(input: &str) -> Vec<Row> {
        parse_rows(input.as_bytes()).unwrap()
    }

    #[test]
    fn parse_rows_preserves_order_and_lines() {
        let parsed = rows("Ann\nBob\n\nCid\n");
        let names: Vec<_> = parsed.iter().map(|row| row.fields[0].as_str()).collect();
        assert_eq!(names, ["Ann", "Bob", "Cid"]);
        assert_eq!(parsed[0].line, 1);
        assert_eq!(parsed[2].line, 4);
    }

    #[test]
    fn parse_rows_handles_quoted_fields() {
        let parsed = rows("\"Smith, Ann\",Bob,\n");
        assert_eq!(parsed[0].fields, ["Smith, Ann", "Bob", ""]);
    }

    #[test]
    fn parse_rows_rejects_ragged_records() {
        assert!(parse_rows("Ann,Bob,Ann\nCid,Dee\n".as_bytes()).is_err());
    }

    #[test]
    fn roster_keeps_names_untrimmed() {
        let names = roster_from_rows(rows("Ann\n Bob \nann\n")).unwrap();
        assert_eq!(names, ["Ann", " Bob ", "ann"]);
    }

    #[test]
    fn roster_rejects_blank_name_with_line_number() {
        let err = roster_from_rows(rows("Ann\n   \nBob\n")).unwrap_err();
        assert!(
            matches!(err, BracketError::EmptyField { line: 2, column: 1 }),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn roster_requires_every_column_to_be_filled() {
        let err = roster_from_rows(rows("Ann,north\nBob,\n")).unwrap_err();
        assert!(matches!(
            err,
            BracketError::EmptyField { line: 2, column: 2 }
        ));
    }

    #[test]
    fn decided_round_loads_winners() {
        let matches =
            round_from_rows(rows("Ann,Bob,Bob\nCid,Cid,Cid\n"), Completeness::Decided).unwrap();
        assert_eq!(
            matches,
            [
                Match {
                    player1: "Ann".into(),
                    player2: "Bob".into(),
                    winner: Some("Bob".into()),
                },
                Match::bye("Cid"),
            ]
        );
    }

    #[test]
    fn decided_round_rejects_undecided_match() {
        let err =
            round_from_rows(rows("Ann,Bob,Ann\nCid,Dee,\n"), Completeness::Decided).unwrap_err();
        assert!(matches!(
            err,
            BracketError::EmptyField { line: 2, column: 3 }
        ));
    }

    #[test]
    fn pending_round_allows_missing_winner() {
        let matches =
            round_from_rows(rows("Ann,Bob,\nCid,Cid,Cid\n"), Completeness::Pending).unwrap();
        assert_eq!(matches, [Match::pending("Ann", "Bob"), Match::bye("Cid")]);
    }

    #[test]
    fn pending_round_still_requires_players() {
        let err = round_from_rows(rows("Ann, ,\n"), Completeness::Pending).unwrap_err();
        assert!(matches!(
            err,
            BracketError::EmptyField { line: 1, column: 2 }
        ));
    }

    #[test]
    fn winner_must_be_one_of_the_players() {
        let err = round_from_rows(rows("Ann,Bob,Cid\n"), Completeness::Decided).unwrap_err();
        match err {
            BracketError::InvalidWinner { line, winner, .. } => {
                assert_eq!(line, 1);
                assert_eq!(winner, "Cid");
            }
            other => panic!("expected invalid winner, got {other:?}"),
        }
    }

    #[test]
    fn round_rows_need_three_columns() {
        let err = round_from_rows(rows("Ann,Bob\n"), Completeness::Pending).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed round file: line 1 has 2 columns, expected 3"
        );
        assert!(matches!(
            err,
            BracketError::ColumnCount {
                line: 1,
                expected: 3,
                found: 2
            }
        ));
    }
}

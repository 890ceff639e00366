//! Defines custom error types for the application.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a bracket cannot be loaded, drawn or written.
pub enum BracketError {
    #[error("invalid command-line usage\n{0}")]
    Usage(String),

    #[error("could not access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed round file: line {line} has {found} columns, expected {expected}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("empty name encountered on line {line}, column {column}")]
    EmptyField { line: u64, column: usize },

    #[error("line {line}: winner '{winner}' is neither '{player1}' nor '{player2}'")]
    InvalidWinner {
        line: u64,
        winner: String,
        player1: String,
        player2: String,
    },

    #[error("no players listed")]
    NoPlayers,

    #[error("given filename {filename} {reason}")]
    MalformedFilename { filename: String, reason: String },

    #[error("could not encode round records")]
    Encode(#[source] csv::Error),
}

impl BracketError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

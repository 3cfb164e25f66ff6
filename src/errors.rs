//! Errors used throughout the diagram pipeline.
//!
//! This module defines the canonical error type returned by notation parsing,
//! move replay, and rendering. The enum `SketchError` is used as the single
//! error type across the crate to simplify propagation and matching. Each
//! variant carries contextual information where appropriate so callers can
//! present precise diagnostics.

use thiserror::Error;

/// Unified error type for the board-sketch pipeline.
///
/// Parsing and replay variants are recoverable and suitable for presenting
/// to end users (bad notation in a document source); `Io` wraps failures
/// while reading notation text in the command-line tool.
#[derive(Debug, Error)]
pub enum SketchError {
    /// The grid text contained no non-empty lines.
    #[error("grid text contains no rows")]
    EmptyGrid,

    /// A zero-length cell token reached the parser. Well-formed input can
    /// never produce one, so this is a contract violation, not a user error.
    #[error("empty cell token at row {row}, column {col}")]
    EmptyToken { row: usize, col: usize },

    /// A grid row's token count disagreed with the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A stack token carried a piece code outside the stone-color key table.
    #[error("unknown stack piece code '{code}' at row {row}, column {col}")]
    UnknownStackPiece { code: char, row: usize, col: usize },

    /// A move coordinate failed to parse as `<letter><digits>`.
    #[error("malformed move coordinate '{token}'")]
    BadMoveToken { token: String },

    /// A rectangular move coordinate resolved outside the board.
    #[error("move '{token}' is outside the {n_rows}x{n_cols} board")]
    MoveOutOfRange {
        token: String,
        n_rows: usize,
        n_cols: usize,
    },

    /// A hexagonal move coordinate resolved outside the rhombus storage.
    #[error("move '{token}' is outside the size-{size} hex board")]
    HexMoveOutOfRange { token: String, size: usize },

    /// The player marker cycle was constructed from an empty string.
    #[error("player marker cycle is empty")]
    EmptyPlayers,

    /// A hex fill sequence did not line up with the cell sequence.
    #[error("fill count {fills} does not match cell count {cells}")]
    FillCountMismatch { cells: usize, fills: usize },

    /// A caller-supplied argument could not be interpreted (a malformed
    /// command-line value, or a board parameter outside its domain).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure reading notation text from a file or stdin.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

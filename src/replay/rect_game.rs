//! Rectangular move replayer.
//!
//! Applies an ordered move list (with optional captures) to an empty
//! `n_rows x n_cols` board and serializes the final snapshot back to the
//! textual grid format the notation parser accepts.

use tracing::debug;

use crate::errors::SketchError;
use crate::replay::move_list::{coord, split_move, PlayerCycle};

/// Empty-cell symbol shared by both replayers.
pub const EMPTY_CELL: &str = ".";

/// Replay settings: whether stones are stamped with their move number, and
/// the cyclic player marker sequence.
#[derive(Debug, Clone)]
pub struct ReplayOptions {
    pub number_labels: bool,
    pub players: String,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            number_labels: true,
            players: "xo".to_owned(),
        }
    }
}

/// Final board state of a replay, row-major with row 0 at the top during
/// construction. Serialization flips to bottom-first, mirroring the
/// notation parser's convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    cells: Vec<Vec<String>>,
}

impl BoardSnapshot {
    fn empty(n_rows: usize, n_cols: usize) -> Self {
        Self {
            cells: vec![vec![EMPTY_CELL.to_owned(); n_cols]; n_rows],
        }
    }

    pub(crate) fn jagged(row_lengths: impl Iterator<Item = usize>) -> Self {
        Self {
            cells: row_lengths
                .map(|len| vec![EMPTY_CELL.to_owned(); len])
                .collect(),
        }
    }

    pub fn n_rows(&self) -> usize {
        self.cells.len()
    }

    pub fn row_len(&self, row: usize) -> usize {
        self.cells[row].len()
    }

    /// Cell content addressed with row 0 at the top (construction order).
    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.cells[row][col]
    }

    pub(crate) fn set_cell(&mut self, row: usize, col: usize, value: String) {
        self.cells[row][col] = value;
    }

    /// Serialize with reversed row order so the emitted text reads top-down
    /// while internal row 0 is the bottom. Cells are left-aligned in a
    /// 3-character field, the width the grid format conventionally uses.
    pub fn to_grid_string(&self) -> String {
        self.cells
            .iter()
            .rev()
            .map(|row| {
                row.iter()
                    .map(|cell| format!("{cell:<3}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Replay `moves` on an empty board.
///
/// Each move draws the next player marker from the cycle; its additions are
/// written first and its removals (captures) reset cells to empty
/// afterwards. Two moves writing to the same coordinate silently overwrite.
pub fn replay_rect(
    n_rows: usize,
    n_cols: usize,
    moves: &[&str],
    options: &ReplayOptions,
) -> Result<BoardSnapshot, SketchError> {
    debug!(n_rows, n_cols, n_moves = moves.len(), "replaying moves");

    let mut board = BoardSnapshot::empty(n_rows, n_cols);
    let mut players = PlayerCycle::new(&options.players)?;

    for (i, move_token) in moves.iter().enumerate() {
        let player = players.next_marker();
        let (adds, removals) = split_move(move_token)?;

        for mv in adds.split(',') {
            let (row, col) = locate(mv, n_rows, n_cols)?;
            board.set_cell(row, col, stamp(player, i, options.number_labels));
        }

        if !removals.is_empty() {
            for mv in removals.split(',') {
                let (row, col) = locate(mv, n_rows, n_cols)?;
                board.set_cell(row, col, EMPTY_CELL.to_owned());
            }
        }
    }

    Ok(board)
}

pub(crate) fn stamp(player: char, move_index: usize, number_labels: bool) -> String {
    let mut cell = player.to_string();
    if number_labels {
        cell.push_str(&(move_index + 1).to_string());
    }
    cell
}

fn locate(mv: &str, n_rows: usize, n_cols: usize) -> Result<(usize, usize), SketchError> {
    let (col, row) = coord(mv)?;
    if col < 0 || col >= n_cols as i32 || row >= n_rows as i32 {
        return Err(SketchError::MoveOutOfRange {
            token: mv.to_owned(),
            n_rows,
            n_cols,
        });
    }
    Ok((row as usize, col as usize))
}

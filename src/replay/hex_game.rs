//! Hexagonal move replayer.
//!
//! Hex boards are stored as a rhombus approximating the hex silhouette: row
//! lengths run `size ..= 2*size-1` and then mirror back down to `size`. Move
//! coordinates are axial (`<letter><digits>`) relative to a declared
//! top-left corner cell and are folded into the rhombus with an asymmetric
//! indexing rule inherited from the board geometry: the cube-coordinate
//! engine and the renderer were built against this exact encoding, so it is
//! reproduced as-is rather than normalized to a canonical axial system.

use tracing::debug;

use crate::errors::SketchError;
use crate::replay::move_list::{coord, split_move, PlayerCycle};
use crate::replay::rect_game::{stamp, BoardSnapshot, ReplayOptions, EMPTY_CELL};

/// Replay `moves` on an empty hex board with edge length `size`.
///
/// `corner` is the algebraic coordinate of the board's top-left cell; every
/// move is resolved relative to it. Additions before removals within one
/// move, silent overwrite on collisions, same as the rectangular replayer.
pub fn replay_hex(
    size: usize,
    moves: &[&str],
    corner: &str,
    options: &ReplayOptions,
) -> Result<BoardSnapshot, SketchError> {
    debug!(size, corner, n_moves = moves.len(), "replaying hex moves");

    if size == 0 {
        return Err(SketchError::InvalidArgument(
            "hex board size must be at least 1".to_owned(),
        ));
    }

    let row_lengths = (size..2 * size).chain((size..2 * size - 1).rev());
    let mut board = BoardSnapshot::jagged(row_lengths);
    let mut players = PlayerCycle::new(&options.players)?;

    let (corner_col, corner_row) = coord(corner)?;

    for (i, move_token) in moves.iter().enumerate() {
        let player = players.next_marker();
        let (adds, removals) = split_move(move_token)?;

        for mv in adds.split(',') {
            let (row, col) = locate(mv, size, corner_col, corner_row, &board)?;
            board.set_cell(row, col, stamp(player, i, options.number_labels));
        }

        if !removals.is_empty() {
            for mv in removals.split(',') {
                let (row, col) = locate(mv, size, corner_col, corner_row, &board)?;
                board.set_cell(row, col, EMPTY_CELL.to_owned());
            }
        }
    }

    Ok(board)
}

/// Fold an axial move coordinate into the rhombus storage.
///
/// The letter column counts every other file across the widest row, so the
/// stored column compresses by a factor of two; the start-of-row offset
/// differs between the upper half (anchored on the corner column) and the
/// lower half (anchored on the row's distance past the middle).
fn locate(
    mv: &str,
    size: usize,
    corner_col: i32,
    corner_row: i32,
    board: &BoardSnapshot,
) -> Result<(usize, usize), SketchError> {
    let (c, r_absolute) = coord(mv)?;
    let r = r_absolute - corner_row;

    let start_c = if r < size as i32 {
        corner_col - r - 1
    } else {
        r - size as i32 + 1
    };
    // Floor division: the storage grid holds two logical files per slot.
    let col = (c - start_c).div_euclid(2);

    if r < 0 || r >= board.n_rows() as i32 {
        return Err(out_of_range(mv, size));
    }
    let row = r as usize;
    if col < 0 || col >= board.row_len(row) as i32 {
        return Err(out_of_range(mv, size));
    }
    Ok((row, col as usize))
}

fn out_of_range(mv: &str, size: usize) -> SketchError {
    SketchError::HexMoveOutOfRange {
        token: mv.to_owned(),
        size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rhombus_rows_mirror_around_the_middle() {
        let board =
            replay_hex(3, &[], "c1", &ReplayOptions::default()).expect("empty replay");
        let lengths: Vec<usize> = (0..board.n_rows()).map(|r| board.row_len(r)).collect();
        assert_eq!(lengths, vec![3, 4, 5, 4, 3]);
    }

    #[test]
    fn moves_fold_into_the_rhombus() {
        // Size-2 board with top-left corner at b1:
        //
        //    b1 d1
        //   a2 c2 e2
        //    b3 d3
        let moves = ["b1", "a2", "e2", "d3"];
        let board =
            replay_hex(2, &moves, "b1", &ReplayOptions::default()).expect("should replay");

        assert_eq!(board.cell(0, 0), "x1");
        assert_eq!(board.cell(1, 0), "o2");
        assert_eq!(board.cell(1, 2), "x3");
        assert_eq!(board.cell(2, 1), "o4");
    }

    #[test]
    fn captures_clear_earlier_hex_stones() {
        let board = replay_hex(2, &["b1", "c2:b1"], "b1", &ReplayOptions::default())
            .expect("capture should replay");
        assert_eq!(board.cell(0, 0), EMPTY_CELL);
        assert_eq!(board.cell(1, 1), "o2");
    }

    #[test]
    fn corner_offsets_shift_the_whole_board() {
        // Same board shape declared one rank lower: h2 is the corner, so i3
        // lands in the middle row.
        let board =
            replay_hex(2, &["i3"], "h2", &ReplayOptions::default()).expect("should replay");
        assert_eq!(board.cell(1, 1), "x1");
    }

    #[test]
    fn zero_size_boards_are_rejected() {
        let err = replay_hex(0, &["a1"], "a1", &ReplayOptions::default())
            .expect_err("a size-0 board has no cells and must fail");
        assert!(matches!(err, SketchError::InvalidArgument(_)));
    }

    #[test]
    fn out_of_range_hex_moves_are_rejected() {
        // a3 resolves to a negative stored column on the bottom half; a5 is
        // past the last row entirely.
        for bad in ["a3", "a5"] {
            let err = replay_hex(2, &[bad], "b1", &ReplayOptions::default())
                .expect_err("move off the hex board must fail");
            assert!(matches!(err, SketchError::HexMoveOutOfRange { .. }));
        }
    }

    #[test]
    fn hex_snapshot_serializes_bottom_first() {
        let board =
            replay_hex(2, &["b1"], "b1", &ReplayOptions::default()).expect("should replay");
        let text = board.to_grid_string();
        let last = text.lines().last().expect("has rows");
        assert!(last.starts_with("x1"));
    }
}

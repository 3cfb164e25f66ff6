//! Textual hex-board shapes to cube coordinates.
//!
//! Each cell of a hex grid gets an `(x, y, z)` cube triple in this system's
//! specific offset encoding: `x` is the row index, and `y`/`z` walk linearly
//! across the row. For the natural hex-hex layout the invariant is
//! `x + y + z == 1` (a constant of the construction rule, not the canonical
//! zero); the renderer's vertical placement is `(y - z)`-based and depends
//! on these exact values, so the increment rule is load-bearing.

use tracing::debug;

/// Shape family of a textual hex board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexLayout {
    /// Rows grow to a widest middle row and shrink again (hex-hex board).
    Natural,
    /// Hex tiling arranged to approximate a rectangular silhouette; row
    /// parity alternates the vertical offset.
    SquareLike,
}

/// One hex cell: cube coordinates plus the original cell token
/// (category character and attached text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexCell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub token: String,
}

/// Compute cube coordinates for every cell of a textual hex board.
///
/// Rows are non-empty lines, cells whitespace-delimited; the indentation
/// that draws the silhouette in text is ignored. Cells are emitted in scan
/// order.
pub fn hex_coords(grid: &str, layout: HexLayout) -> Vec<HexCell> {
    let lines: Vec<Vec<&str>> = grid
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_whitespace().collect())
        .collect();

    debug!(n_rows = lines.len(), ?layout, "computing hex cube coordinates");

    let mut cells = Vec::new();
    let mut last_sz: Option<usize> = None;
    let mut last_y = 0;
    let mut last_z = 0;

    for (i, row) in lines.iter().enumerate() {
        let sz = row.len();
        let (x, y, z) = match layout {
            HexLayout::Natural => {
                if last_sz.map_or(true, |prev| prev < sz) {
                    // First row, or still expanding: restart the fan.
                    (i as i32, -(i as i32), 1)
                } else {
                    // Contracting half: rows keep the widest row's `y` and
                    // step `z` down once per row.
                    (i as i32, last_y, last_z - 1)
                }
            }
            HexLayout::SquareLike => (i as i32, (-(i as i32)).rem_euclid(2), 1),
        };
        last_sz = Some(sz);
        last_y = y;
        last_z = z;

        for (j, token) in (1..).zip(row.iter()) {
            cells.push(HexCell {
                x,
                y: y + j,
                z: z - j,
                token: (*token).to_owned(),
            });
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX_HEX: &str = "
       . . . .
      . x . . .
     . . o x . .
    . . . . . . .
     . . o . r .
      . . . . .
       . . . .
    ";

    #[test]
    fn natural_layout_keeps_the_cube_invariant() {
        let cells = hex_coords(HEX_HEX, HexLayout::Natural);
        assert_eq!(cells.len(), 4 + 5 + 6 + 7 + 6 + 5 + 4);
        for cell in &cells {
            assert_eq!(
                cell.x + cell.y + cell.z,
                1,
                "invariant broken at {cell:?}"
            );
        }
    }

    #[test]
    fn natural_layout_walks_rows_linearly() {
        let cells = hex_coords("a b\nc d e\nf g", HexLayout::Natural);
        // Expanding half restarts at (i, -i, 1); the contracting row keeps
        // the middle row's y and decrements z.
        assert_eq!(cells[0], hex_cell(0, 1, 0, "a"));
        assert_eq!(cells[1], hex_cell(0, 2, -1, "b"));
        assert_eq!(cells[2], hex_cell(1, 0, 0, "c"));
        assert_eq!(cells[4], hex_cell(1, 2, -2, "e"));
        assert_eq!(cells[5], hex_cell(2, 0, -1, "f"));
        assert_eq!(cells[6], hex_cell(2, 1, -2, "g"));
    }

    #[test]
    fn equal_sized_rows_count_as_contracting() {
        // A second row of the same width takes the contracting branch, same
        // as a strictly smaller one.
        let cells = hex_coords("a a\nb b", HexLayout::Natural);
        assert_eq!(cells[2], hex_cell(1, 1, -1, "b"));
        assert_eq!(cells[3], hex_cell(1, 2, -2, "b"));
    }

    #[test]
    fn tokens_ride_along_with_coordinates() {
        let cells = hex_coords(". x3 .\n. o .", HexLayout::Natural);
        assert_eq!(cells[1].token, "x3");
        assert_eq!(cells[4].token, "o");
    }

    #[test]
    fn square_like_layout_alternates_row_parity() {
        let grid = ". . .\n. . .\n. . .\n. . .\n. . .";
        let cells = hex_coords(grid, HexLayout::SquareLike);
        // Row i has base y of (-i mod 2): 0, 1, 0, 1, 0. The first cell of
        // each row sits at base + 1.
        let firsts: Vec<(i32, i32, i32)> = cells
            .chunks(3)
            .map(|row| (row[0].x, row[0].y, row[0].z))
            .collect();
        assert_eq!(
            firsts,
            vec![(0, 1, 0), (1, 2, 0), (2, 1, 0), (3, 2, 0), (4, 1, 0)]
        );
    }

    #[test]
    fn blank_lines_and_indentation_are_ignored() {
        let indented = "
          . .
         . . .
          . .
        ";
        let flat = ". .\n. . .\n. .";
        assert_eq!(
            hex_coords(indented, HexLayout::Natural),
            hex_coords(flat, HexLayout::Natural)
        );
    }

    fn hex_cell(x: i32, y: i32, z: i32, token: &str) -> HexCell {
        HexCell {
            x,
            y,
            z,
            token: token.to_owned(),
        }
    }
}

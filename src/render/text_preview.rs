//! Terminal-oriented preview renderer.
//!
//! Creates a human-readable view of parsed placements for debugging, tests,
//! and the command-line tool. This is a diagnostic back end for the
//! [`Renderer`] contract, not the published diagram artifact.

use std::fmt::Write as _;

use crate::errors::SketchError;
use crate::grid::placements::{CoordMode, PlacementSet, StoneColor};
use crate::hexes::banding::Fill;
use crate::hexes::cube_coords::HexCell;
use crate::render::contract::{RenderConfig, Renderer};

/// Accumulates previews into a string buffer; successive draw calls append.
#[derive(Debug, Default)]
pub struct TextPreview {
    out: String,
}

impl TextPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Renderer for TextPreview {
    fn draw_board(
        &mut self,
        board: &PlacementSet,
        _config: &RenderConfig,
    ) -> Result<(), SketchError> {
        // Square-mode coordinates sit at half-steps; pull them back onto
        // integer cells for the character grid.
        let shift = match board.mode {
            CoordMode::Intersection => 0.0,
            CoordMode::Square => 0.5,
        };
        let n_rows = board.n_rows.max(1);
        let n_cols = board.n_cols.max(1);

        let mut cells = vec![vec!['·'; n_cols]; n_rows];
        let mut place = |x: f32, y: f32, ch: char| {
            let col = (x - shift).round() as i32;
            let row = (y - shift).round() as i32;
            if (0..n_cols as i32).contains(&col) && (0..n_rows as i32).contains(&row) {
                cells[row as usize][col as usize] = ch;
            }
        };

        for (color, coords) in board.stones.iter() {
            let symbol = stone_symbol(color);
            for &(x, y) in coords {
                place(x, y, symbol);
            }
        }
        for stack in &board.stacks {
            // Show the topmost piece of the pile.
            if let Some(code) = stack.pieces.chars().last() {
                place(stack.x, stack.y, code);
            }
        }
        for label in &board.labels {
            // A label attached to a stone renders on the stone in the real
            // artifact; a one-character cell keeps the stone symbol and
            // only floating labels show.
            if board.stones.occupies((label.x, label.y)) {
                continue;
            }
            if let Some(ch) = label.text.chars().next() {
                place(label.x, label.y, ch);
            }
        }

        write_gutter_line(&mut self.out, n_cols);
        for row in (0..n_rows).rev() {
            let _ = write!(self.out, "{:>2} ", row + 1);
            for (col, ch) in cells[row].iter().enumerate() {
                self.out.push(*ch);
                if col + 1 < n_cols {
                    self.out.push(' ');
                }
            }
            let _ = writeln!(self.out, " {:>2}", row + 1);
        }
        write_gutter_line(&mut self.out, n_cols);
        Ok(())
    }

    fn draw_hexboard(
        &mut self,
        cells: &[HexCell],
        fills: &[Fill],
        _config: &RenderConfig,
    ) -> Result<(), SketchError> {
        if fills.len() != cells.len() {
            return Err(SketchError::FillCountMismatch {
                cells: cells.len(),
                fills: fills.len(),
            });
        }

        // Re-group into rows and indent to suggest the silhouette.
        let mut rows: Vec<Vec<&str>> = Vec::new();
        let mut last_x = None;
        for cell in cells {
            if last_x != Some(cell.x) {
                rows.push(Vec::new());
                last_x = Some(cell.x);
            }
            if let Some(row) = rows.last_mut() {
                row.push(cell.token.as_str());
            }
        }

        let max_sz = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &rows {
            let indent = max_sz - row.len();
            let _ = writeln!(self.out, "{}{}", " ".repeat(indent), row.join(" "));
        }
        Ok(())
    }
}

fn stone_symbol(color: StoneColor) -> char {
    match color {
        StoneColor::Black => 'x',
        StoneColor::White => 'o',
        StoneColor::Red => 'r',
        StoneColor::Blue => 'l',
        StoneColor::Green => 'g',
        StoneColor::Purple => 'p',
        StoneColor::Yellow => 'y',
        StoneColor::Silver => 's',
    }
}

fn write_gutter_line(out: &mut String, n_cols: usize) {
    out.push_str("   ");
    for col in 0..n_cols {
        out.push(char::from(b'a' + (col % 26) as u8));
        if col + 1 < n_cols {
            out.push(' ');
        }
    }
    out.push('\n');
}

//! Row-banded fill pattern for hex boards.
//!
//! Assigns each cell of a coordinate sequence a fill color so that adjacent
//! rows start at rotated palette offsets (no vertical stripes) and bands
//! stay diagonally aligned when the board narrows. Fully deterministic: the
//! same coordinates and palette always produce the same sequence.

use crate::hexes::cube_coords::HexCell;

/// A fill handed to the renderer: an RGB triple or a color name the
/// renderer resolves.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Rgb(f32, f32, f32),
    Named(String),
}

/// Palette used to band a hex board.
#[derive(Debug, Clone, PartialEq)]
pub enum Palette {
    /// Three warm tones.
    Earth,
    /// Three light hues.
    Rgb,
    /// A single repeated fill.
    Solid(Fill),
}

impl Palette {
    fn fills(&self) -> Vec<Fill> {
        match self {
            Palette::Earth => vec![
                Fill::Rgb(0.82, 0.54, 0.27),
                Fill::Rgb(0.91, 0.68, 0.44),
                Fill::Rgb(1.0, 0.81, 0.62),
            ],
            Palette::Rgb => vec![
                Fill::Named("lightsalmon".to_owned()),
                Fill::Named("skyblue".to_owned()),
                Fill::Named("palegreen".to_owned()),
            ],
            Palette::Solid(fill) => vec![fill.clone()],
        }
    }
}

/// Compute one fill per cell, in cell order.
///
/// Cells sharing an `x` value form a row. Each row's palette cycle starts
/// rotated by the row ordinal; when a row is narrower than the one before
/// it, the cycle additionally skips ahead by the difference between the
/// widest row and this row, keeping the bands diagonal across the
/// silhouette instead of snapping left-aligned.
pub fn pattern(cells: &[HexCell], palette: &Palette) -> Vec<Fill> {
    let fills = palette.fills();

    let row_sizes = consecutive_row_sizes(cells);
    let max_sz = row_sizes.iter().copied().max().unwrap_or(0);

    let mut colors = Vec::with_capacity(cells.len());
    let mut last_sz: Option<usize> = None;

    for (row, &sz) in row_sizes.iter().enumerate() {
        let mut k = row % fills.len();
        if last_sz.is_some_and(|prev| prev > sz) {
            k += max_sz - sz;
        }
        last_sz = Some(sz);

        for _ in 0..sz {
            colors.push(fills[k % fills.len()].clone());
            k += 1;
        }
    }

    colors
}

/// Row sizes by consecutive runs of equal `x`.
fn consecutive_row_sizes(cells: &[HexCell]) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut last_x = None;
    for cell in cells {
        if last_x == Some(cell.x) {
            if let Some(last) = sizes.last_mut() {
                *last += 1;
            }
        } else {
            sizes.push(1);
            last_x = Some(cell.x);
        }
    }
    sizes
}

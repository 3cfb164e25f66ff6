//! Grid-notation-to-placement parser.
//!
//! Turns a multi-line text block (rows separated by line breaks, cells by
//! whitespace, blank lines ignored) into a fully-populated [`PlacementSet`].
//! The first character of each cell token selects its category; trailing
//! characters become an attached label:
//!
//! ```text
//! .  x1 .  o2 .  .
//! .  3  .  4  .  .
//! [xo .  .  .  .  .
//! Q  O  #  .  X  r
//! ```
//!
//! Black symbols are `x`, `X` (ringed), `#` (small-squared); white symbols
//! are `o`, `O` (ringed), `Q` (squared). Extra colors use the lowercase keys
//! from the stone-color table, `[` opens a stack, and anything else floats
//! as a label. Text row 0 is the top of the board but output row 0 is the
//! bottom, so rows are flipped on the way through.

use tracing::debug;

use crate::errors::SketchError;
use crate::grid::placements::{
    CoordMode, Label, Marker, MarkerShape, PlacementSet, Stack, StoneColor, Stones,
    DARK_SQUARE_MARKER_SIZE, MARKER_EPSILON, RING_MARKER_SIZE, SMALL_SQUARE_MARKER_SIZE,
};

/// Parse a grid in Intersection mode (stones on line crossings, Go-style).
pub fn intersections(grid: &str) -> Result<PlacementSet, SketchError> {
    let lines: Vec<Vec<&str>> = grid
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_whitespace().collect())
        .collect();

    if lines.is_empty() {
        return Err(SketchError::EmptyGrid);
    }

    let n_rows = lines.len();
    let n_cols = lines[0].len();
    debug!(n_rows, n_cols, "parsing grid notation");

    let mut stones = Stones::default();
    let mut labels = Vec::new();
    let mut markers = Vec::new();
    let mut stacks = Vec::new();

    for (row, cells) in lines.iter().enumerate() {
        if cells.len() != n_cols {
            return Err(SketchError::RowLengthMismatch {
                row,
                expected: n_cols,
                found: cells.len(),
            });
        }

        for (col, token) in cells.iter().enumerate() {
            let x = col as f32;
            let y = (n_rows - row - 1) as f32;

            let head = token
                .chars()
                .next()
                .ok_or(SketchError::EmptyToken { row, col })?;
            let tail = &token[head.len_utf8()..];

            match head {
                'x' | 'X' | '#' => {
                    stones.push(StoneColor::Black, (x, y));
                    if head == 'X' {
                        markers.push(ring_marker(x, y, "gray"));
                    }
                    if head == '#' {
                        markers.push(square_marker(x, y, "white", SMALL_SQUARE_MARKER_SIZE));
                    }
                    push_attached_label(&mut labels, x, y, tail);
                }
                'o' | 'O' | 'Q' => {
                    stones.push(StoneColor::White, (x, y));
                    if head == 'O' {
                        markers.push(ring_marker(x, y, "lightgray"));
                    }
                    if head == 'Q' {
                        markers.push(square_marker(x, y, "black", DARK_SQUARE_MARKER_SIZE));
                    }
                    push_attached_label(&mut labels, x, y, tail);
                }
                '[' => {
                    for code in tail.chars() {
                        if StoneColor::from_stack_code(code).is_none() {
                            return Err(SketchError::UnknownStackPiece { code, row, col });
                        }
                    }
                    stacks.push(Stack {
                        x,
                        y,
                        pieces: tail.to_owned(),
                    });
                }
                '.' => {
                    // An empty cell, optionally annotated with floating text.
                    push_attached_label(&mut labels, x, y, tail);
                }
                other => {
                    if let Some(color) = StoneColor::from_key(other) {
                        stones.push(color, (x, y));
                        push_attached_label(&mut labels, x, y, tail);
                    } else {
                        labels.push(Label {
                            x,
                            y,
                            text: (*token).to_owned(),
                        });
                    }
                }
            }
        }
    }

    Ok(PlacementSet {
        n_rows,
        n_cols,
        stones,
        labels,
        markers,
        stacks,
        mode: CoordMode::Intersection,
    })
}

/// Parse a grid in Square mode (stones inside cells, Chess-style).
///
/// Same notation as [`intersections`]; every element shifts from the line
/// crossings to the middle of the squares and the reported size grows by
/// one in each direction.
pub fn squares(grid: &str) -> Result<PlacementSet, SketchError> {
    let mut placed = intersections(grid)?;

    placed.stones.shift(0.5);
    for label in &mut placed.labels {
        label.x += 0.5;
        label.y += 0.5;
    }
    for marker in &mut placed.markers {
        marker.x += 0.5;
        marker.y += 0.5;
    }
    for stack in &mut placed.stacks {
        stack.x += 0.5;
        stack.y += 0.5;
    }

    placed.n_rows += 1;
    placed.n_cols += 1;
    placed.mode = CoordMode::Square;
    Ok(placed)
}

fn push_attached_label(labels: &mut Vec<Label>, x: f32, y: f32, tail: &str) {
    if !tail.is_empty() {
        labels.push(Label {
            x,
            y,
            text: tail.to_owned(),
        });
    }
}

fn ring_marker(x: f32, y: f32, color: &'static str) -> Marker {
    Marker {
        x: x + MARKER_EPSILON,
        y,
        color,
        size: RING_MARKER_SIZE,
        shape: MarkerShape::Circle,
    }
}

fn square_marker(x: f32, y: f32, color: &'static str, size: f32) -> Marker {
    Marker {
        x: x + MARKER_EPSILON,
        y,
        color,
        size,
        shape: MarkerShape::Square,
    }
}

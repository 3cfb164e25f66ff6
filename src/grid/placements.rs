//! Placement data model shared by the notation parser and the renderer
//! contract.
//!
//! A parsed grid becomes a [`PlacementSet`]: stones grouped by color, labels,
//! auxiliary markers, and stacked piles, together with the board dimensions
//! and the coordinate convention. Coordinates are `f32` pairs because Square
//! mode shifts every element by `+0.5` and markers sit at a small horizontal
//! epsilon off their stone.

/// Horizontal offset applied to markers so they are not suppressed when a
/// stone occupies the same coordinate.
pub const MARKER_EPSILON: f32 = 0.001;

/// Base marker sizes (before the renderer applies its display ratio).
pub const RING_MARKER_SIZE: f32 = 28.0;
pub const SMALL_SQUARE_MARKER_SIZE: f32 = 12.0;
pub const DARK_SQUARE_MARKER_SIZE: f32 = 14.0;

/// Stone color resolved from the fixed symbol table.
///
/// `x`/`X`/`#` map to black and `o`/`O`/`Q` to white; the remaining variants
/// are keyed by a single lowercase letter in grid notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoneColor {
    Black,
    White,
    Red,
    Blue,
    Green,
    Purple,
    Yellow,
    Silver,
}

impl StoneColor {
    /// Color name handed to the renderer (which resolves names to paint).
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            StoneColor::Black => "black",
            StoneColor::White => "white",
            StoneColor::Red => "red",
            StoneColor::Blue => "blue",
            StoneColor::Green => "green",
            StoneColor::Purple => "purple",
            StoneColor::Yellow => "yellow",
            StoneColor::Silver => "silver",
        }
    }

    /// Resolve an extra-color key (the lowercase letters beyond `x`/`o`).
    ///
    /// Returns `None` for unknown keys; callers decide whether that means
    /// "treat the token as a floating label" (grid cells) or "reject"
    /// (stack piece codes).
    #[inline]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            'r' => Some(StoneColor::Red),
            'l' => Some(StoneColor::Blue),
            'g' => Some(StoneColor::Green),
            'p' => Some(StoneColor::Purple),
            'y' => Some(StoneColor::Yellow),
            's' => Some(StoneColor::Silver),
            _ => None,
        }
    }

    /// Resolve a single-character stack piece code. Stacks accept the two
    /// main colors by their lowercase symbols plus every extra-color key.
    #[inline]
    pub const fn from_stack_code(code: char) -> Option<Self> {
        match code {
            'x' => Some(StoneColor::Black),
            'o' => Some(StoneColor::White),
            other => Self::from_key(other),
        }
    }
}

/// Marker outline shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
}

/// Auxiliary visual annotation attached near a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub x: f32,
    pub y: f32,
    pub color: &'static str,
    pub size: f32,
    pub shape: MarkerShape,
}

/// Text rendered at a coordinate, attached to a stone or floating on an
/// empty cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// An ordered pile of piece codes drawn vertically at one coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    pub x: f32,
    pub y: f32,
    /// Piece codes bottom-to-top, each a valid stack code
    /// (see [`StoneColor::from_stack_code`]).
    pub pieces: String,
}

/// Stones grouped by color.
///
/// Colors keep first-appearance order and each color's coordinates keep scan
/// order (top row to bottom row, left to right), which downstream renderers
/// rely on for stable output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stones {
    entries: Vec<(StoneColor, Vec<(f32, f32)>)>,
}

impl Stones {
    pub fn push(&mut self, color: StoneColor, at: (f32, f32)) {
        if let Some((_, list)) = self.entries.iter_mut().find(|(c, _)| *c == color) {
            list.push(at);
        } else {
            self.entries.push((color, vec![at]));
        }
    }

    /// Coordinates recorded for one color (empty slice if the color never
    /// appeared).
    pub fn get(&self, color: StoneColor) -> &[(f32, f32)] {
        self.entries
            .iter()
            .find(|(c, _)| *c == color)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (StoneColor, &[(f32, f32)])> {
        self.entries.iter().map(|(c, list)| (*c, list.as_slice()))
    }

    /// Whether any color has a stone at exactly this coordinate.
    pub fn occupies(&self, at: (f32, f32)) -> bool {
        self.entries.iter().any(|(_, list)| list.contains(&at))
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, list)| list.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Shift every coordinate by the same delta (Square-mode adjustment).
    pub(crate) fn shift(&mut self, d: f32) {
        for (_, list) in &mut self.entries {
            for at in list.iter_mut() {
                at.0 += d;
                at.1 += d;
            }
        }
    }
}

/// Coordinate convention of a parsed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordMode {
    /// Stones sit on grid line crossings (Go convention).
    Intersection,
    /// Stones sit inside cells (Chess convention); every coordinate is
    /// shifted by `+0.5` and the reported bounds grow by one.
    Square,
}

/// Everything the renderer needs for one rectangular board.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSet {
    pub n_rows: usize,
    pub n_cols: usize,
    pub stones: Stones,
    pub labels: Vec<Label>,
    pub markers: Vec<Marker>,
    pub stacks: Vec<Stack>,
    pub mode: CoordMode,
}

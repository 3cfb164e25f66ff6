//! Contract between the notation/geometry core and an external renderer.
//!
//! The core hands a renderer fully-resolved placement data; everything
//! visual (grid lines, circles, text metrics, artifact emission) happens on
//! the other side of the [`Renderer`] trait. Scaling is carried by an
//! explicit [`RenderConfig`] value rather than process-wide state, so two
//! diagrams with different ratios can be produced in one process.

use crate::errors::SketchError;
use crate::grid::placements::PlacementSet;
use crate::hexes::banding::Fill;
use crate::hexes::cube_coords::HexCell;

/// Base font/marker sizes before the display ratio divides them.
const PIECE_BASE_SIZE: f32 = 42.0;
const LABEL_BASE_SIZE: f32 = 24.0;
const COORD_BASE_SIZE: f32 = 12.0;

/// Display scaling shared by every size a renderer draws.
///
/// A ratio of 1 renders at full size; larger ratios shrink the diagram.
/// Prefer ratio 1 and resizing at the consumer — shrinking here degrades
/// text legibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub ratio: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { ratio: 1.0 }
    }
}

impl RenderConfig {
    pub fn new(ratio: f32) -> Self {
        Self { ratio }
    }

    #[inline]
    pub fn piece_size(&self) -> f32 {
        PIECE_BASE_SIZE / self.ratio
    }

    #[inline]
    pub fn label_size(&self) -> f32 {
        LABEL_BASE_SIZE / self.ratio
    }

    #[inline]
    pub fn coord_size(&self) -> f32 {
        COORD_BASE_SIZE / self.ratio
    }

    /// Scale an element-specific base size (marker diameters and the like).
    #[inline]
    pub fn scale(&self, base: f32) -> f32 {
        base / self.ratio
    }
}

/// A diagram back end.
///
/// Implementations are side-effecting (they emit or accumulate an artifact)
/// and must not reinterpret coordinates: the placement data is already in
/// final board space.
pub trait Renderer {
    /// Draw a rectangular board from parsed placements.
    fn draw_board(
        &mut self,
        board: &PlacementSet,
        config: &RenderConfig,
    ) -> Result<(), SketchError>;

    /// Draw a hex board from cube-coordinate cells and their fills.
    /// `fills` must be parallel to `cells`.
    fn draw_hexboard(
        &mut self,
        cells: &[HexCell],
        fills: &[Fill],
        config: &RenderConfig,
    ) -> Result<(), SketchError>;
}

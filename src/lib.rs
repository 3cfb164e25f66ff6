//! Crate root module declarations for the board-sketch diagram pipeline.
//!
//! This file exposes all top-level subsystems (grid notation parsing, move
//! replay, hex geometry, and the renderer contract) so binaries, tests, and
//! external tooling can import stable module paths.

pub mod errors;

pub mod grid {
    pub mod notation;
    pub mod placements;
}

pub mod replay {
    pub mod hex_game;
    pub mod move_list;
    pub mod rect_game;
}

pub mod hexes {
    pub mod banding;
    pub mod cube_coords;
}

pub mod render {
    pub mod contract;
    pub mod text_preview;
}

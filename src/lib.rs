// Builds GPU ribbon geometry for cable meshes (edge-only polylines with per-vertex
// radius, diffuse factor, micromovement scale and phase offset).

pub mod cable;

pub use cable::*;

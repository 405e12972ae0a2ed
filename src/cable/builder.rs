// Cable ribbon geometry: CableMesh → pieces → per-vertex tangents/chord distances → CableVertexBuffer.
//
// Every segment (pair of consecutive piece vertices v0, v1) becomes two triangles:
//
//   A = v0 -r     B = v1 -r     C = v0 +r     D = v1 +r
//   triangles (A, B, C) and (C, B, D)
//
// The shader pushes each vertex sideways by its signed radius, turning the flat
// quad into a camera-facing ribbon.

use glam::{Vec2, Vec3};

use super::attributes::{CableAttr, get_float_values, get_float2_values};
use super::error::CableError;
use super::mesh::CableMesh;
use super::pieces::{output_vertex_count, segment_pieces};
use super::vertex::{CableVertex, CableVertexBuffer};

/// Chords shorter than this (squared) are treated as zero length.
const DEGENERATE_CHORD_SQ: f32 = 1e-12;

// ============================================================================
// OPTIONS
// ============================================================================

/// How tangents are picked for vertices between the two ends of a piece.
/// The first vertex always points at the second and the last vertex always
/// points away from the one before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TangentMode {
    /// Direction from the vertex to the next one.
    #[default]
    Forward,
    /// Direction from the previous vertex to the next one.
    Central,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    pub tangent_mode: TangentMode,
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builds the ribbon vertex buffer for one cable mesh.
/// Construction fails with `InvalidMesh` unless the mesh passes `is_cable_mesh`.
pub struct CableVertexBufferBuilder<'a> {
    mesh:    &'a CableMesh,
    options: BuildOptions,
}

impl<'a> CableVertexBufferBuilder<'a> {
    pub fn new(mesh: &'a CableMesh) -> Result<Self, CableError> {
        if !mesh.is_cable() {
            return Err(CableError::InvalidMesh);
        }
        mesh.check_indices()?;
        Ok(Self { mesh, options: BuildOptions::default() })
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(&self) -> Result<CableVertexBuffer, CableError> {
        let mesh = self.mesh;

        // Step 1: dense per-vertex inputs
        let mut attrs = VertexAttributes {
            radius:         get_float_values(mesh, CableAttr::Radius)?,
            diffuse_factor: get_float_values(mesh, CableAttr::DiffuseFactor)?,
            um_scale:       get_float_values(mesh, CableAttr::UmScale)?,
            phase_offset:   get_float2_values(mesh, CableAttr::PhaseOffset)?,
        };
        attrs.clamp_unit_ranges();

        // Step 2: pieces + exact output size
        let pieces = segment_pieces(mesh.vertex_count(), &mesh.edges);
        let num_output_verts = output_vertex_count(&pieces);
        let mut vertices = Vec::with_capacity(num_output_verts);

        // Steps 3 & 4: per piece, tangents/distances then one quad per segment
        for piece in pieces.iter().filter(|p| p.len() >= 2) {
            let points: Vec<Vec3> = piece.iter().map(|&v| mesh.positions[v]).collect();
            let tangents = piece_tangents(&points, self.options.tangent_mode);
            let distances = chord_distances(&points);

            for i0 in 0..piece.len() - 1 {
                let i1 = i0 + 1;
                let a = attrs.encode(piece[i0], points[i0], tangents[i0], distances[i0]);
                let b = attrs.encode(piece[i1], points[i1], tangents[i1], distances[i1]);
                let c = a.mirrored();
                let d = b.mirrored();
                vertices.extend_from_slice(&[a, b, c, c, b, d]);
            }
        }

        debug_assert_eq!(vertices.len(), num_output_verts);
        log::debug!(
            "Built cable vertex buffer: {} pieces, {} vertices",
            pieces.len(),
            vertices.len(),
        );

        Ok(CableVertexBuffer { vertices })
    }
}

/// Build `mesh` with default options.
pub fn build_cable_vertex_buffer(mesh: &CableMesh) -> Result<CableVertexBuffer, CableError> {
    CableVertexBufferBuilder::new(mesh)?.build()
}

// ============================================================================
// ATTRIBUTE ENCODING
// ============================================================================

struct VertexAttributes {
    radius:         Vec<f32>,
    diffuse_factor: Vec<f32>,
    um_scale:       Vec<f32>,
    phase_offset:   Vec<Vec2>,
}

impl VertexAttributes {
    /// Out-of-range diffuse factors and phase offsets are clamped, never rejected.
    fn clamp_unit_ranges(&mut self) {
        for d in &mut self.diffuse_factor {
            *d = d.clamp(0.0, 1.0);
        }
        for p in &mut self.phase_offset {
            *p = p.clamp(Vec2::ZERO, Vec2::ONE);
        }
    }

    /// Ribbon vertex for mesh vertex `v` on the negative-radius side.
    fn encode(&self, v: usize, position: Vec3, tangent: Vec3, distance: f32) -> CableVertex {
        let phase = self.phase_offset[v];
        CableVertex {
            position:  position.to_array(),
            normal:    tangent.to_array(),
            colour0:   [unorm8(phase.x), unorm8(phase.y), 0, unorm8(self.diffuse_factor[v])],
            texcoord0: [-self.radius[v], distance * self.um_scale[v]],
        }
    }
}

/// [0, 1] → [0, 255], truncating. `as` saturates, so the result always fits.
fn unorm8(value: f32) -> u8 {
    (value * 255.0) as u8
}

// ============================================================================
// PIECE GEOMETRY
// ============================================================================

/// Unit tangent per piece vertex. Zero-length segments give a zero tangent.
pub fn piece_tangents(points: &[Vec3], mode: TangentMode) -> Vec<Vec3> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (from, to) = if i + 1 == n {
                (i.saturating_sub(1), i)
            } else {
                match mode {
                    TangentMode::Central if i > 0 => (i - 1, i + 1),
                    _ => (i, i + 1),
                }
            };
            (points[to] - points[from]).normalize_or_zero()
        })
        .collect()
}

/// Distance from every piece vertex to the line through the first and last vertex.
/// All zero when the piece starts and ends at the same spot (closed loops).
pub fn chord_distances(points: &[Vec3]) -> Vec<f32> {
    let (Some(&start), Some(&end)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    points.iter().map(|&p| distance_point_to_line(start, end, p)).collect()
}

/// Perpendicular distance from `point` to the infinite line through `start` and `end`.
pub fn distance_point_to_line(start: Vec3, end: Vec3, point: Vec3) -> f32 {
    let axis = end - start;
    let len_sq = axis.length_squared();
    if len_sq < DEGENERATE_CHORD_SQ {
        return 0.0;
    }
    (point - start).cross(axis).length() / len_sq.sqrt()
}

// ============================================================================
// TESTS
// ============================================================================

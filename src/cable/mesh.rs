// Cable mesh value type and the cable-mesh predicate.
//
// A cable mesh is a face-less vertex/edge graph with a single cable material.
// Per-vertex shading data lives in `attributes`, see attributes.rs.

use std::collections::BTreeMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::attributes::AttributeData;
use super::error::CableError;

/// Shader file every cable material must use.
pub const CABLE_SHADER_NAME: &str = "cable.sps";

/// A material slot. Only the shader identifier matters for cable validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub name:   String,
    pub shader: String,
}

impl Material {
    pub fn new(name: impl Into<String>, shader: impl Into<String>) -> Self {
        Self { name: name.into(), shader: shader.into() }
    }

    /// Material using the cable shader.
    pub fn cable(name: impl Into<String>) -> Self {
        Self::new(name, CABLE_SHADER_NAME)
    }
}

// ============================================================================
// CABLE MESH
// ============================================================================

/// Editable mesh snapshot: positions, undirected edges, optional faces, materials and
/// named per-vertex attributes. Vertex index is the identity key everywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CableMesh {
    pub positions:  Vec<Vec3>,
    pub edges:      Vec<[usize; 2]>,
    #[serde(default)]
    pub faces:      Vec<Vec<usize>>,
    #[serde(default)]
    pub materials:  Vec<Material>,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeData>,
}

impl CableMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex and return its index.
    pub fn add_vertex(&mut self, pos: Vec3) -> usize {
        let idx = self.positions.len();
        self.positions.push(pos);
        idx
    }

    /// Add an undirected edge between two existing vertices.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        debug_assert!(a != b, "Edge must join two distinct vertices");
        self.edges.push([a, b]);
    }

    pub fn add_face(&mut self, indices: Vec<usize>) {
        debug_assert!(indices.len() >= 3, "Face must have at least 3 vertices");
        self.faces.push(indices);
    }

    pub fn add_material(&mut self, material: Material) {
        self.materials.push(material);
    }

    /// Add vertices at `points` joined in order by edges. Returns the new indices.
    pub fn add_polyline(&mut self, points: &[Vec3]) -> Vec<usize> {
        let indices: Vec<usize> = points.iter().map(|&p| self.add_vertex(p)).collect();
        for pair in indices.windows(2) {
            self.add_edge(pair[0], pair[1]);
        }
        indices
    }

    pub fn vertex_count(&self) -> usize { self.positions.len() }
    pub fn edge_count(&self) -> usize   { self.edges.len() }
    pub fn face_count(&self) -> usize   { self.faces.len() }

    /// Reject edges or faces that reference a vertex that does not exist.
    /// Meshes built through `add_*` are fine; this guards deserialized input.
    pub fn check_indices(&self) -> Result<(), CableError> {
        let count = self.vertex_count();
        let referenced = self.edges.iter().flatten().chain(self.faces.iter().flatten());
        match referenced.copied().find(|&v| v >= count) {
            Some(index) => Err(CableError::VertexOutOfRange { index, count }),
            None => Ok(()),
        }
    }

    /// True if this mesh qualifies as a cable mesh, see `is_cable_mesh`.
    pub fn is_cable(&self) -> bool {
        self.face_count() == 0
            && self.vertex_count() > 0
            && self.edge_count() > 0
            && self.materials.len() == 1
            && self.materials[0].shader == CABLE_SHADER_NAME
    }
}

/// Gets whether `mesh` is a valid cable mesh: no faces, at least one vertex and one edge,
/// and exactly one material, which uses the cable shader. A missing mesh is not a cable mesh.
pub fn is_cable_mesh(mesh: Option<&CableMesh>) -> bool {
    mesh.is_some_and(CableMesh::is_cable)
}

// ============================================================================
// TESTS
// ============================================================================

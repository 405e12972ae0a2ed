// Cable mesh → ribbon vertex buffer pipeline.
//
//   CableMesh ─ is_cable_mesh() ─► segment_pieces() ─► CableVertexBufferBuilder::build() ─► CableVertexBuffer → GPU
//                  attributes.rs supplies radius / diffuse / um scale / phase offset per vertex

pub mod attributes;
pub mod builder;
pub mod error;
pub mod mesh;
pub mod phase;
pub mod pieces;
pub mod vertex;

// Re-export commonly used items
pub use attributes::{
    AttributeData, AttributeDomain, AttributeType, AttributeValue, CableAttr, add_attribute,
    get_attribute_values, get_float_values, get_float2_values, has_attribute, set_attribute_values,
};
pub use builder::{
    BuildOptions, CableVertexBufferBuilder, TangentMode, build_cable_vertex_buffer,
};
pub use error::CableError;
pub use mesh::{CABLE_SHADER_NAME, CableMesh, Material, is_cable_mesh};
pub use phase::randomize_phase_offsets;
pub use pieces::{Piece, output_vertex_count, segment_pieces};
pub use vertex::{CableVertex, CableVertexBuffer};

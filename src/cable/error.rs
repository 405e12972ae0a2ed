// Error type shared by the cable attribute, validation and build stages.
// All variants are caller contract violations; nothing here is retried.

use super::attributes::{AttributeDomain, AttributeType};

/// Errors raised by cable mesh operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CableError {
    #[error("mesh is not a cable mesh (needs no faces, at least one vertex and edge, and a single cable material)")]
    InvalidMesh,

    #[error("attribute '{attribute}' uses unsupported domain {domain:?}")]
    UnsupportedDomain {
        attribute: &'static str,
        domain:    AttributeDomain,
    },

    #[error("attribute '{0}' already exists on the mesh")]
    DuplicateAttribute(&'static str),

    #[error("attribute '{attribute}' holds data of the wrong type (expected {expected:?})")]
    AttributeTypeMismatch {
        attribute: &'static str,
        expected:  AttributeType,
    },

    #[error("vertex index {index} out of range (mesh has {count} vertices)")]
    VertexOutOfRange {
        index: usize,
        count: usize,
    },
}

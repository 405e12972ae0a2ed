// Per-vertex cable attributes: schema, dense reads with default overlay, and writes.
//
// Attribute data lives on CableMesh keyed by name. Missing attributes (or vertices
// appended after an attribute was created) read back as the schema default.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::error::CableError;
use super::mesh::CableMesh;

// ============================================================================
// SCHEMA
// ============================================================================

/// Scalar kind stored by an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Float,
    Float2,
}

/// Mesh element an attribute is defined over.
/// Cable attributes only ever use `Point`; the other domains exist in the host data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeDomain {
    Point,
    Edge,
    Face,
}

/// The four shading attributes a cable mesh carries per vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CableAttr {
    Radius,
    DiffuseFactor,
    UmScale,
    PhaseOffset,
}

impl CableAttr {
    pub const ALL: [CableAttr; 4] = [
        CableAttr::Radius,
        CableAttr::DiffuseFactor,
        CableAttr::UmScale,
        CableAttr::PhaseOffset,
    ];

    /// Storage key on the mesh.
    pub fn name(self) -> &'static str {
        match self {
            CableAttr::Radius        => ".cable.radius",
            CableAttr::DiffuseFactor => ".cable.diffuse_factor",
            CableAttr::UmScale       => ".cable.um_scale",
            CableAttr::PhaseOffset   => ".cable.phase_offset",
        }
    }

    pub fn attr_type(self) -> AttributeType {
        match self {
            CableAttr::PhaseOffset => AttributeType::Float2,
            _ => AttributeType::Float,
        }
    }

    pub fn domain(self) -> AttributeDomain {
        AttributeDomain::Point
    }

    pub fn default_value(self) -> AttributeValue {
        match self {
            CableAttr::Radius        => AttributeValue::Float(0.02),
            CableAttr::DiffuseFactor => AttributeValue::Float(1.0),
            CableAttr::UmScale       => AttributeValue::Float(1.0),
            CableAttr::PhaseOffset   => AttributeValue::Float2(Vec2::ZERO),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CableAttr::Radius        => "Radius",
            CableAttr::DiffuseFactor => "Diffuse Factor",
            CableAttr::UmScale       => "Micromovements Scale",
            CableAttr::PhaseOffset   => "Phase Offset",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CableAttr::Radius => "Determines the size of the cable",
            CableAttr::DiffuseFactor => {
                "Interpolation factor for the cable diffuse color: 0 = shader_cableDiffuse, 1 = shader_cableDiffuse2"
            }
            CableAttr::UmScale => "Determines how much the cable moves: 0 = no micromovements",
            CableAttr::PhaseOffset => "",
        }
    }

    /// Editor value limits `(min, max)`, applied per component.
    /// Hints for an editing UI only; writes are not checked against them.
    pub fn range(self) -> (f32, Option<f32>) {
        match self {
            CableAttr::Radius        => (0.0001, None),
            CableAttr::DiffuseFactor => (0.0, Some(1.0)),
            CableAttr::UmScale       => (0.0, None),
            CableAttr::PhaseOffset   => (0.0, Some(1.0)),
        }
    }
}

// ============================================================================
// VALUES + STORAGE
// ============================================================================

/// A single attribute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Float(f32),
    Float2(Vec2),
}

impl AttributeValue {
    pub fn attr_type(&self) -> AttributeType {
        match self {
            AttributeValue::Float(_)  => AttributeType::Float,
            AttributeValue::Float2(_) => AttributeType::Float2,
        }
    }
}

/// Dense attribute storage, one entry per vertex in vertex-index order.
/// Serialized as `{"float": [...]}` or `{"float2": [[x, y], ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeData {
    Float(Vec<f32>),
    Float2(Vec<Vec2>),
}

impl AttributeData {
    /// Storage of `len` entries, all set to `value`.
    pub fn filled(value: AttributeValue, len: usize) -> Self {
        match value {
            AttributeValue::Float(v)  => AttributeData::Float(vec![v; len]),
            AttributeValue::Float2(v) => AttributeData::Float2(vec![v; len]),
        }
    }

    pub fn attr_type(&self) -> AttributeType {
        match self {
            AttributeData::Float(_)  => AttributeType::Float,
            AttributeData::Float2(_) => AttributeType::Float2,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AttributeData::Float(values)  => values.len(),
            AttributeData::Float2(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// ACCESS
// ============================================================================

pub fn has_attribute(mesh: &CableMesh, attr: CableAttr) -> bool {
    mesh.attributes.contains_key(attr.name())
}

/// Create `attr` on the mesh, every vertex set to the schema default.
/// Fails with `DuplicateAttribute` if it already exists; check `has_attribute` first.
pub fn add_attribute(mesh: &mut CableMesh, attr: CableAttr) -> Result<(), CableError> {
    if has_attribute(mesh, attr) {
        return Err(CableError::DuplicateAttribute(attr.name()));
    }
    let len = domain_size(mesh, attr, attr.domain())?;
    mesh.attributes
        .insert(attr.name().to_string(), AttributeData::filled(attr.default_value(), len));
    Ok(())
}

/// Number of elements in `domain`. Only the point domain is backed by cable storage.
fn domain_size(mesh: &CableMesh, attr: CableAttr, domain: AttributeDomain) -> Result<usize, CableError> {
    match domain {
        AttributeDomain::Point => Ok(mesh.vertex_count()),
        other => Err(CableError::UnsupportedDomain { attribute: attr.name(), domain: other }),
    }
}

/// Read `attr` for every vertex, in vertex-index order.
///
/// Every entry starts at the schema default; stored values are overlaid on top.
/// Vertices past the end of the stored data keep the default.
pub fn get_attribute_values(mesh: &CableMesh, attr: CableAttr) -> Result<AttributeData, CableError> {
    let n = domain_size(mesh, attr, attr.domain())?;
    let mut values = AttributeData::filled(attr.default_value(), n);

    match (&mut values, mesh.attributes.get(attr.name())) {
        (_, None) => {}
        (AttributeData::Float(out), Some(AttributeData::Float(stored))) => overlay(out, stored),
        (AttributeData::Float2(out), Some(AttributeData::Float2(stored))) => overlay(out, stored),
        (_, Some(_)) => {
            return Err(CableError::AttributeTypeMismatch {
                attribute: attr.name(),
                expected:  attr.attr_type(),
            });
        }
    }

    Ok(values)
}

fn overlay<T: Copy>(out: &mut [T], stored: &[T]) {
    let len = stored.len().min(out.len());
    out[..len].copy_from_slice(&stored[..len]);
}

/// `get_attribute_values` for a scalar attribute.
pub fn get_float_values(mesh: &CableMesh, attr: CableAttr) -> Result<Vec<f32>, CableError> {
    match get_attribute_values(mesh, attr)? {
        AttributeData::Float(values) => Ok(values),
        AttributeData::Float2(_) => Err(CableError::AttributeTypeMismatch {
            attribute: attr.name(),
            expected:  AttributeType::Float2,
        }),
    }
}

/// `get_attribute_values` for a 2-component attribute.
pub fn get_float2_values(mesh: &CableMesh, attr: CableAttr) -> Result<Vec<Vec2>, CableError> {
    match get_attribute_values(mesh, attr)? {
        AttributeData::Float2(values) => Ok(values),
        AttributeData::Float(_) => Err(CableError::AttributeTypeMismatch {
            attribute: attr.name(),
            expected:  AttributeType::Float,
        }),
    }
}

/// Store `value` on each of `vertices`, creating the attribute first if needed.
/// Vertices not listed keep their current value (or the schema default).
pub fn set_attribute_values(
    mesh: &mut CableMesh,
    attr: CableAttr,
    vertices: &[usize],
    value: AttributeValue,
) -> Result<(), CableError> {
    if value.attr_type() != attr.attr_type() {
        return Err(CableError::AttributeTypeMismatch {
            attribute: attr.name(),
            expected:  attr.attr_type(),
        });
    }
    let count = mesh.vertex_count();
    if let Some(&index) = vertices.iter().find(|&&v| v >= count) {
        return Err(CableError::VertexOutOfRange { index, count });
    }

    if !has_attribute(mesh, attr) {
        add_attribute(mesh, attr)?;
    }

    let mismatch = CableError::AttributeTypeMismatch {
        attribute: attr.name(),
        expected:  attr.attr_type(),
    };
    let Some(data) = mesh.attributes.get_mut(attr.name()) else {
        return Err(mismatch);
    };
    match (data, value, attr.default_value()) {
        (AttributeData::Float(stored), AttributeValue::Float(v), AttributeValue::Float(d)) => {
            write(stored, vertices, v, d, count);
        }
        (AttributeData::Float2(stored), AttributeValue::Float2(v), AttributeValue::Float2(d)) => {
            write(stored, vertices, v, d, count);
        }
        _ => return Err(mismatch),
    }
    Ok(())
}

fn write<T: Copy>(stored: &mut Vec<T>, vertices: &[usize], value: T, default: T, count: usize) {
    if stored.len() < count {
        stored.resize(count, default);
    }
    for &v in vertices {
        stored[v] = value;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn five_vertex_mesh() -> CableMesh {
        let mut mesh = CableMesh::new();
        for i in 0..5 {
            mesh.add_vertex(Vec3::new(i as f32, 0.0, 0.0));
        }
        mesh
    }

    #[test]
    fn absent_attribute_reads_as_default() {
        let mesh = five_vertex_mesh();
        assert!(!has_attribute(&mesh, CableAttr::Radius));
        assert_eq!(get_float_values(&mesh, CableAttr::Radius).unwrap(), vec![0.02; 5]);
        assert_eq!(get_float_values(&mesh, CableAttr::UmScale).unwrap(), vec![1.0; 5]);
        assert_eq!(
            get_float2_values(&mesh, CableAttr::PhaseOffset).unwrap(),
            vec![Vec2::ZERO; 5]
        );
    }

    #[test]
    fn add_attribute_fills_defaults_and_rejects_duplicates() {
        let mut mesh = five_vertex_mesh();
        add_attribute(&mut mesh, CableAttr::DiffuseFactor).unwrap();
        assert!(has_attribute(&mesh, CableAttr::DiffuseFactor));
        assert_eq!(
            mesh.attributes[CableAttr::DiffuseFactor.name()],
            AttributeData::Float(vec![1.0; 5])
        );
        assert_eq!(
            add_attribute(&mut mesh, CableAttr::DiffuseFactor),
            Err(CableError::DuplicateAttribute(".cable.diffuse_factor"))
        );
    }

    #[test]
    fn set_values_touches_only_listed_vertices() {
        let mut mesh = five_vertex_mesh();
        set_attribute_values(&mut mesh, CableAttr::Radius, &[1, 3], AttributeValue::Float(0.5)).unwrap();
        assert_eq!(
            get_float_values(&mesh, CableAttr::Radius).unwrap(),
            vec![0.02, 0.5, 0.02, 0.5, 0.02]
        );
    }

    #[test]
    fn short_storage_overlays_leading_vertices_only() {
        let mut mesh = five_vertex_mesh();
        mesh.attributes.insert(
            CableAttr::UmScale.name().to_string(),
            AttributeData::Float(vec![3.0, 4.0]),
        );
        assert_eq!(
            get_float_values(&mesh, CableAttr::UmScale).unwrap(),
            vec![3.0, 4.0, 1.0, 1.0, 1.0]
        );

        // A write pads the missing tail with the default.
        set_attribute_values(&mut mesh, CableAttr::UmScale, &[4], AttributeValue::Float(2.0)).unwrap();
        assert_eq!(
            mesh.attributes[CableAttr::UmScale.name()],
            AttributeData::Float(vec![3.0, 4.0, 1.0, 1.0, 2.0])
        );
    }

    #[test]
    fn mismatched_types_are_rejected() {
        let mut mesh = five_vertex_mesh();
        let err = set_attribute_values(&mut mesh, CableAttr::PhaseOffset, &[0], AttributeValue::Float(0.5));
        assert!(matches!(err, Err(CableError::AttributeTypeMismatch { .. })));
        assert!(!has_attribute(&mesh, CableAttr::PhaseOffset));

        mesh.attributes.insert(
            CableAttr::PhaseOffset.name().to_string(),
            AttributeData::Float(vec![0.0; 5]),
        );
        assert!(matches!(
            get_attribute_values(&mesh, CableAttr::PhaseOffset),
            Err(CableError::AttributeTypeMismatch { expected: AttributeType::Float2, .. })
        ));
    }

    #[test]
    fn out_of_range_write_is_rejected() {
        let mut mesh = five_vertex_mesh();
        assert_eq!(
            set_attribute_values(&mut mesh, CableAttr::Radius, &[0, 7], AttributeValue::Float(0.1)),
            Err(CableError::VertexOutOfRange { index: 7, count: 5 })
        );
    }

    #[test]
    fn non_point_domain_is_unsupported() {
        let mesh = five_vertex_mesh();
        assert_eq!(
            domain_size(&mesh, CableAttr::Radius, AttributeDomain::Edge),
            Err(CableError::UnsupportedDomain {
                attribute: ".cable.radius",
                domain:    AttributeDomain::Edge,
            })
        );
    }

    #[test]
    fn schema_is_point_domain_with_expected_types() {
        for attr in CableAttr::ALL {
            assert_eq!(attr.domain(), AttributeDomain::Point);
            assert_eq!(attr.default_value().attr_type(), attr.attr_type());
            assert!(!attr.label().is_empty());
        }
        assert_eq!(CableAttr::PhaseOffset.attr_type(), AttributeType::Float2);
    }
}

// Random phase offsets: one shared value per piece so each cable sways out of sync
// with its neighbours. Unlike the geometry build this is not reproducible unless the
// caller supplies a seeded generator.

use glam::Vec2;
use rand::Rng;

use super::attributes::{AttributeValue, CableAttr, set_attribute_values};
use super::error::CableError;
use super::mesh::CableMesh;
use super::pieces::segment_pieces;

/// Write a random phase offset in [0, 1)² to every vertex of each piece.
/// Returns the number of pieces that received a value.
pub fn randomize_phase_offsets<R: Rng>(mesh: &mut CableMesh, rng: &mut R) -> Result<usize, CableError> {
    if !mesh.is_cable() {
        return Err(CableError::InvalidMesh);
    }
    mesh.check_indices()?;

    let pieces = segment_pieces(mesh.vertex_count(), &mesh.edges);
    for piece in &pieces {
        let offset = Vec2::new(rng.r#gen(), rng.r#gen());
        set_attribute_values(mesh, CableAttr::PhaseOffset, piece, AttributeValue::Float2(offset))?;
    }

    log::debug!("Randomized phase offsets for {} pieces", pieces.len());
    Ok(pieces.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cable::attributes::get_float2_values;
    use crate::cable::mesh::Material;
    use glam::Vec3;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn two_cables() -> CableMesh {
        let mut mesh = CableMesh::new();
        mesh.add_polyline(&[Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0)]);
        mesh.add_polyline(&[Vec3::Y, Vec3::new(1.0, 1.0, 0.0)]);
        mesh.add_material(Material::cable("cable"));
        mesh
    }

    #[test]
    fn each_piece_shares_one_offset() {
        let mut mesh = two_cables();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(randomize_phase_offsets(&mut mesh, &mut rng).unwrap(), 2);

        let offsets = get_float2_values(&mesh, CableAttr::PhaseOffset).unwrap();
        assert_eq!(offsets[0], offsets[1]);
        assert_eq!(offsets[1], offsets[2]);
        assert_eq!(offsets[3], offsets[4]);
        assert_ne!(offsets[0], offsets[3]);
        for o in offsets {
            assert!(o.cmpge(Vec2::ZERO).all() && o.cmplt(Vec2::ONE).all());
        }
    }

    #[test]
    fn same_seed_gives_same_offsets() {
        let mut a = two_cables();
        let mut b = two_cables();
        randomize_phase_offsets(&mut a, &mut StdRng::seed_from_u64(42)).unwrap();
        randomize_phase_offsets(&mut b, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.attributes, b.attributes);
    }

    #[test]
    fn non_cable_mesh_is_left_alone() {
        let mut mesh = two_cables();
        mesh.materials.clear();
        let result = randomize_phase_offsets(&mut mesh, &mut StdRng::seed_from_u64(1));
        assert_eq!(result, Err(CableError::InvalidMesh));
        assert!(mesh.attributes.is_empty());
    }
}

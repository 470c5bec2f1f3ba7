//! Vertex normal recomputation.

use glam::Vec3;

use crate::Vertex;

/// Area-weighted smooth normals for an indexed triangle list.
///
/// Each triangle's unnormalized face normal is added to its three corners,
/// then every sum is normalized. Vertices no triangle touches, or whose
/// faces cancel out, get [`Vec3::ZERO`]. Triangles referencing an index past
/// the end of `positions` are skipped.
///
/// Call this after every [`Morpher::apply`](crate::Morpher::apply); morphed
/// positions invalidate the previous frame's normals.
///
/// # Arguments
///
/// * `positions` - Vertex buffer
/// * `indices` - Triangle list, three indices per triangle
#[must_use]
pub fn compute_vertex_normals(positions: &[Vertex], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let (Some(&pa), Some(&pb), Some(&pc)) =
            (positions.get(a), positions.get(b), positions.get(c))
        else {
            continue;
        };

        let face = (pb - pa).cross(pc - pa);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    for n in &mut normals {
        *n = n.normalize_or_zero();
    }
    normals
}

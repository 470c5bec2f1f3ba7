//! Closest-direction vertex matching.
//!
//! Shapes in the cycle have different vertex counts, so there is no fixed
//! index-to-index mapping between them. Instead each reference vertex is
//! matched to the target vertex pointing the same way from the origin.

use crate::Vertex;

/// Index of the target whose direction from the origin is closest to
/// `source`'s.
///
/// Directions are compared by the dot product of unit vectors. Zero-length
/// targets are ignored. On exact ties the earliest target wins.
///
/// A zero-length `source` has no direction and maps to index 0, as does a
/// target set made only of zero-length vertices.
///
/// # Returns
///
/// `None` if `targets` is empty.
#[must_use]
pub fn find_nearest_index(source: Vertex, targets: &[Vertex]) -> Option<usize> {
    if targets.is_empty() {
        return None;
    }

    let Some(direction) = source.try_normalize() else {
        return Some(0);
    };

    let mut nearest = 0;
    let mut max_dot = f32::NEG_INFINITY;
    for (i, target) in targets.iter().enumerate() {
        let Some(target_direction) = target.try_normalize() else {
            continue;
        };
        let dot = direction.dot(target_direction);
        if dot > max_dot {
            max_dot = dot;
            nearest = i;
        }
    }

    Some(nearest)
}

/// The target whose direction from the origin is closest to `source`'s.
///
/// Always returns one of `targets` unchanged, never a synthesized point.
/// See [`find_nearest_index`] for the matching rules.
#[must_use]
pub fn find_nearest_vertex(source: Vertex, targets: &[Vertex]) -> Option<Vertex> {
    find_nearest_index(source, targets).map(|i| targets[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ShapeKind, generate_shape_vertices};
    use glam::Vec3;
    use proptest::prelude::*;

    #[test]
    fn picks_aligned_target() {
        let targets = [Vec3::X, Vec3::Y, Vec3::Z * 3.0];
        assert_eq!(find_nearest_vertex(Vec3::new(0.1, 0.2, 5.0), &targets), Some(Vec3::Z * 3.0));
        assert_eq!(find_nearest_vertex(Vec3::new(2.0, 0.1, 0.0), &targets), Some(Vec3::X));
    }

    #[test]
    fn magnitude_does_not_matter() {
        let targets = [Vec3::X * 0.1, Vec3::Y * 100.0];
        assert_eq!(find_nearest_index(Vec3::new(0.9, 1.0, 0.0), &targets), Some(1));
    }

    #[test]
    fn empty_targets() {
        assert_eq!(find_nearest_vertex(Vec3::ONE, &[]), None);
    }

    #[test]
    fn zero_source_falls_back_to_first() {
        let targets = [Vec3::NEG_X, Vec3::Y];
        assert_eq!(find_nearest_vertex(Vec3::ZERO, &targets), Some(Vec3::NEG_X));
    }

    #[test]
    fn zero_targets_are_skipped() {
        let targets = [Vec3::ZERO, Vec3::NEG_Y, Vec3::X];
        assert_eq!(find_nearest_index(Vec3::X, &targets), Some(2));
        assert_eq!(find_nearest_index(Vec3::Y, &targets), Some(2));
    }

    #[test]
    fn all_zero_targets_fall_back_to_first() {
        assert_eq!(find_nearest_index(Vec3::X, &[Vec3::ZERO, Vec3::ZERO]), Some(0));
    }

    #[test]
    fn ties_keep_first_seen() {
        // Both targets are 45 degrees away from the source.
        let targets = [Vec3::X, Vec3::Y];
        assert_eq!(find_nearest_index(Vec3::new(1.0, 1.0, 0.0), &targets), Some(0));
        let targets = [Vec3::Y, Vec3::X];
        assert_eq!(find_nearest_index(Vec3::new(1.0, 1.0, 0.0), &targets), Some(0));
    }

    #[test]
    fn shape_vertices_map_to_themselves() {
        for kind in ShapeKind::CYCLE {
            let vertices = generate_shape_vertices(kind, 1.2, 4);
            for v in &vertices {
                let nearest = find_nearest_vertex(*v, &vertices).unwrap();
                assert!(nearest.distance(*v) < 1e-5, "{kind}: {v} -> {nearest}");
            }
        }
    }

    fn vertex() -> impl Strategy<Value = Vec3> {
        prop::array::uniform3(-10.0f32..10.0).prop_map(Vec3::from_array)
    }

    proptest! {
        #[test]
        fn result_is_a_member(source in vertex(), targets in prop::collection::vec(vertex(), 1..32)) {
            let nearest = find_nearest_vertex(source, &targets).unwrap();
            prop_assert!(targets.iter().any(|t| t.to_array() == nearest.to_array()));
        }

        #[test]
        fn lookup_is_deterministic(source in vertex(), targets in prop::collection::vec(vertex(), 1..32)) {
            let first = find_nearest_vertex(source, &targets).unwrap();
            let second = find_nearest_vertex(source, &targets).unwrap();
            prop_assert_eq!(first.to_array().map(f32::to_bits), second.to_array().map(f32::to_bits));
        }

        #[test]
        fn no_target_is_better_aligned(source in vertex(), targets in prop::collection::vec(vertex(), 1..32)) {
            prop_assume!(source.length() > 1e-3);
            let best = targets[find_nearest_index(source, &targets).unwrap()];
            prop_assume!(best.length() > 1e-3);
            let best_dot = source.normalize().dot(best.normalize());
            for t in targets.iter().filter(|t| t.length() > 1e-3) {
                prop_assert!(source.normalize().dot(t.normalize()) <= best_dot + 1e-6);
            }
        }
    }
}

//! Easing curves and vertex interpolation.

use crate::Vertex;

/// Cubic ease-in-out.
///
/// Starts and ends with zero velocity, so a morph phase neither starts nor
/// stops with a visible jump. Maps 0 to 0, 0.5 to 0.5 and 1 to 1.
#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Hermite smoothstep, `t²(3 − 2t)`.
#[must_use]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation between two vertices.
///
/// Exact at both ends: `t = 0` gives `a` and `t = 1` gives `b`.
#[must_use]
pub fn lerp_vertex(a: Vertex, b: Vertex, t: f32) -> Vertex {
    a * (1.0 - t) + b * t
}

/// Curve applied to raw phase progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    Smoothstep,
    #[default]
    InOutCubic,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::Smoothstep => smoothstep(t),
            Easing::InOutCubic => ease_in_out_cubic(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use proptest::prelude::*;

    #[test]
    fn cubic_fixed_points() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
    }

    #[test]
    fn cubic_is_flat_at_the_ends() {
        let h = 1e-3;
        assert!(ease_in_out_cubic(h) < h * 0.01);
        assert!(1.0 - ease_in_out_cubic(1.0 - h) < h * 0.01);
    }

    #[test]
    fn every_easing_keeps_endpoints() {
        for easing in [Easing::Linear, Easing::Smoothstep, Easing::InOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn lerp_midpoint() {
        let a = Vec3::new(1.0, 0.0, -2.0);
        let b = Vec3::new(3.0, 4.0, 2.0);
        assert_eq!(lerp_vertex(a, b, 0.5), Vec3::new(2.0, 2.0, 0.0));
    }

    proptest! {
        #[test]
        fn cubic_is_monotonic(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_in_out_cubic(lo) <= ease_in_out_cubic(hi));
        }

        #[test]
        fn cubic_stays_in_unit_range(t in 0.0f32..=1.0) {
            let eased = ease_in_out_cubic(t);
            prop_assert!((0.0..=1.0).contains(&eased));
        }

        #[test]
        fn lerp_hits_endpoints(
            a in prop::array::uniform3(-100.0f32..100.0),
            b in prop::array::uniform3(-100.0f32..100.0),
        ) {
            let a = Vec3::from_array(a);
            let b = Vec3::from_array(b);
            prop_assert_eq!(lerp_vertex(a, b, 0.0), a);
            prop_assert_eq!(lerp_vertex(a, b, 1.0), b);
        }
    }
}

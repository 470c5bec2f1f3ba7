//! End-to-end behaviour of the morph driver over a full cycle.

use polymorph::{
    MorphConfig, Morpher, ShapeKind, Vertex, compute_morphed_positions, ease_in_out_cubic,
    find_nearest_vertex, generate_shape_vertices, lerp_vertex, sphere_vertices,
};

const RADIUS: f32 = 1.2;
const SEGMENTS: u32 = 4;
const CYCLE: f32 = 18.0;

struct Scene {
    reference: Vec<Vertex>,
    shapes: Vec<Vec<Vertex>>,
}

impl Scene {
    fn new() -> Self {
        Self {
            reference: sphere_vertices(RADIUS, SEGMENTS),
            shapes: ShapeKind::CYCLE
                .iter()
                .map(|&kind| generate_shape_vertices(kind, RADIUS, SEGMENTS))
                .collect(),
        }
    }

    fn at(&self, time: f32) -> Vec<Vertex> {
        self.at_speed(time, 1.0)
    }

    fn at_speed(&self, time: f32, speed: f32) -> Vec<Vertex> {
        compute_morphed_positions(time, speed, &self.reference, &self.shapes, CYCLE)
    }

    fn nearest(&self, shape: usize, i: usize) -> Vertex {
        find_nearest_vertex(self.reference[i], &self.shapes[shape]).unwrap()
    }
}

fn max_distance(a: &[Vertex], b: &[Vertex]) -> f32 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(p, q)| p.distance(*q))
        .fold(0.0, f32::max)
}

#[test]
fn output_matches_reference_size() {
    let scene = Scene::new();
    assert_eq!(scene.reference.len(), 25);
    for time in [0.0, 2.2, 7.0, 13.1, 17.5] {
        assert_eq!(scene.at(time).len(), scene.reference.len());
    }
}

#[test]
fn starts_on_tetrahedron() {
    let scene = Scene::new();
    let positions = scene.at(0.0);
    for (i, p) in positions.iter().enumerate() {
        assert!(p.distance(scene.nearest(0, i)) < 1e-6, "vertex {i}");
    }
    // The 25 sphere vertices collapse onto the 4 tetrahedron corners.
    let corners = polymorph::dedup_vertices(&positions, 1e-4);
    assert!(corners.len() <= 4, "{corners:?}");
}

#[test]
fn halfway_through_first_phase_is_the_midpoint() {
    let scene = Scene::new();
    assert_eq!(ease_in_out_cubic(0.5), 0.5);
    let positions = scene.at(1.5);
    for (i, p) in positions.iter().enumerate() {
        let expected = lerp_vertex(scene.nearest(0, i), scene.nearest(1, i), 0.5);
        assert!(p.distance(expected) < 1e-5, "vertex {i}: {p} != {expected}");
    }
}

#[test]
fn each_phase_starts_on_its_shape() {
    let scene = Scene::new();
    for shape in 0..6u8 {
        let positions = scene.at(f32::from(shape) * 3.0);
        for (i, p) in positions.iter().enumerate() {
            let expected = scene.nearest(usize::from(shape), i);
            assert!(p.distance(expected) < 1e-4, "shape {shape} vertex {i}");
        }
    }
}

#[test]
fn full_cycle_is_periodic() {
    let scene = Scene::new();
    assert_eq!(scene.at(CYCLE), scene.at(0.0));
    assert!(max_distance(&scene.at(CYCLE + 4.2), &scene.at(4.2)) < 1e-4);
}

#[test]
fn wraparound_is_continuous() {
    let scene = Scene::new();
    let epsilon = 1e-3;
    let before = scene.at(CYCLE - epsilon);
    let after = scene.at(CYCLE + epsilon);
    assert!(max_distance(&before, &after) < 1e-4);
}

#[test]
fn motion_is_continuous_within_the_cycle() {
    // Small steps in time never make a vertex jump.
    let scene = Scene::new();
    let step = 0.01;
    let mut previous = scene.at(0.0);
    let mut time = step;
    while time < CYCLE * 2.0 {
        let current = scene.at(time);
        assert!(
            max_distance(&previous, &current) < 0.05,
            "jump at t={time}"
        );
        previous = current;
        time += step;
    }
}

#[test]
fn speed_scales_elapsed_time() {
    let scene = Scene::new();
    for time in [0.0, 0.75, 2.6, 4.1, 8.8, 13.3] {
        assert_eq!(scene.at_speed(time, 2.0), scene.at(2.0 * time), "t={time}");
        assert_eq!(scene.at_speed(time, -1.0), scene.at(-time), "t={time}");
    }
    // Halfway through the first phase at double speed.
    assert_ne!(scene.at_speed(0.75, 2.0), scene.at(0.75));
}

#[test]
fn morpher_agrees_with_free_function() {
    let scene = Scene::new();
    let morpher = Morpher::new(
        MorphConfig::default()
            .with_radius(RADIUS)
            .with_segments(SEGMENTS)
            .with_cycle_duration(CYCLE),
    )
    .unwrap();

    let mut buffer = morpher.reference_buffer();
    for time in [0.0, 1.5, 5.9, 9.0, 16.2, 18.0, 40.3] {
        morpher.apply(time, &mut buffer);
        assert_eq!(buffer, scene.at(time), "t={time}");
    }
}

#[test]
fn every_output_vertex_stays_inside_the_sphere() {
    let scene = Scene::new();
    for step in 0..180u8 {
        let time = f32::from(step) * 0.1;
        for p in scene.at(time) {
            assert!(p.length() <= RADIUS + 1e-4, "t={time}: {p}");
        }
    }
}

//! Vertex sets of the morph targets.
//!
//! The five polyhedra come from closed-form coordinates, normalized onto a
//! sphere of the requested radius. The sixth target is the lat/long sphere
//! itself, see [`crate::sphere`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use glam::Vec3;

use crate::Vertex;
use crate::error::ParseShapeError;
use crate::sphere::{sphere_vertex_count, sphere_vertices};

/// Golden ratio.
const PHI: f32 = 1.618_034;
const INV_PHI: f32 = 1.0 / PHI;

// Row order is observable: when a direction is equally close to several
// vertices, correspondence picks the earliest row. Reordering a table changes
// which vertex the sphere's poles and seams land on.

const TETRAHEDRON: [[f32; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
];

const OCTAHEDRON: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

const CUBE: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
];

const ICOSAHEDRON: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

const DODECAHEDRON: [[f32; 3]; 20] = [
    // Cube corners.
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    // Rectangles in the three coordinate planes.
    [0.0, -INV_PHI, -PHI],
    [0.0, -INV_PHI, PHI],
    [0.0, INV_PHI, -PHI],
    [0.0, INV_PHI, PHI],
    [-INV_PHI, -PHI, 0.0],
    [-INV_PHI, PHI, 0.0],
    [INV_PHI, -PHI, 0.0],
    [INV_PHI, PHI, 0.0],
    [-PHI, 0.0, -INV_PHI],
    [PHI, 0.0, -INV_PHI],
    [-PHI, 0.0, INV_PHI],
    [PHI, 0.0, INV_PHI],
];

/// One of the six morph targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Tetrahedron,
    Octahedron,
    Cube,
    Icosahedron,
    Dodecahedron,
    Sphere,
}

impl ShapeKind {
    /// Every shape, simplest first. This is the order the animation cycles
    /// through before wrapping back to the start.
    pub const CYCLE: [ShapeKind; 6] = [
        ShapeKind::Tetrahedron,
        ShapeKind::Octahedron,
        ShapeKind::Cube,
        ShapeKind::Icosahedron,
        ShapeKind::Dodecahedron,
        ShapeKind::Sphere,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Tetrahedron => "tetrahedron",
            ShapeKind::Octahedron => "octahedron",
            ShapeKind::Cube => "cube",
            ShapeKind::Icosahedron => "icosahedron",
            ShapeKind::Dodecahedron => "dodecahedron",
            ShapeKind::Sphere => "sphere",
        }
    }

    /// Number of vertices [`generate_shape_vertices`] produces.
    ///
    /// Only the sphere depends on `segments`.
    #[must_use]
    pub fn vertex_count(self, segments: u32) -> usize {
        match self {
            ShapeKind::Tetrahedron => TETRAHEDRON.len(),
            ShapeKind::Octahedron => OCTAHEDRON.len(),
            ShapeKind::Cube => CUBE.len(),
            ShapeKind::Icosahedron => ICOSAHEDRON.len(),
            ShapeKind::Dodecahedron => DODECAHEDRON.len(),
            ShapeKind::Sphere => sphere_vertex_count(segments),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::CYCLE
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseShapeError(s.to_owned()))
    }
}

/// Generate the vertex set of `kind` inscribed at `radius`.
///
/// Every vertex lies at distance `radius` from the origin. A zero radius
/// collapses everything onto the origin.
///
/// # Arguments
///
/// * `kind` - Which solid to generate
/// * `radius` - Distance of every vertex from the origin
/// * `segments` - Lat/long subdivision, only used for [`ShapeKind::Sphere`]
#[must_use]
pub fn generate_shape_vertices(kind: ShapeKind, radius: f32, segments: u32) -> Vec<Vertex> {
    match kind {
        ShapeKind::Tetrahedron => tetrahedron_vertices(radius),
        ShapeKind::Octahedron => octahedron_vertices(radius),
        ShapeKind::Cube => cube_vertices(radius),
        ShapeKind::Icosahedron => icosahedron_vertices(radius),
        ShapeKind::Dodecahedron => dodecahedron_vertices(radius),
        ShapeKind::Sphere => sphere_vertices(radius, segments),
    }
}

/// The 4 alternating corners of a cube.
#[must_use]
pub fn tetrahedron_vertices(radius: f32) -> Vec<Vertex> {
    project(&TETRAHEDRON, radius)
}

/// The 6 points on the coordinate axes.
#[must_use]
pub fn octahedron_vertices(radius: f32) -> Vec<Vertex> {
    project(&OCTAHEDRON, radius)
}

/// The 8 corners `(±1, ±1, ±1)`.
#[must_use]
pub fn cube_vertices(radius: f32) -> Vec<Vertex> {
    project(&CUBE, radius)
}

/// The 12 vertices of three orthogonal golden rectangles.
#[must_use]
pub fn icosahedron_vertices(radius: f32) -> Vec<Vertex> {
    project(&ICOSAHEDRON, radius)
}

/// The 20 vertices: a cube plus three golden rectangles.
#[must_use]
pub fn dodecahedron_vertices(radius: f32) -> Vec<Vertex> {
    project(&DODECAHEDRON, radius)
}

fn project(points: &[[f32; 3]], radius: f32) -> Vec<Vertex> {
    points
        .iter()
        .map(|&p| Vec3::from_array(p).normalize_or_zero() * radius)
        .collect()
}

/// Drop vertices that coincide within `tolerance`.
///
/// Coordinates are rounded to multiples of `tolerance` and the first vertex
/// seen for each rounded triple is kept, in input order. A tolerance that is
/// not strictly positive returns the input unchanged.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn dedup_vertices(vertices: &[Vertex], tolerance: f32) -> Vec<Vertex> {
    if tolerance.is_nan() || tolerance <= 0.0 {
        return vertices.to_vec();
    }

    let key = |v: Vertex| {
        let r = (v / tolerance).round();
        (r.x as i64, r.y as i64, r.z as i64)
    };

    let mut seen = HashSet::with_capacity(vertices.len());
    vertices
        .iter()
        .copied()
        .filter(|&v| seen.insert(key(v)))
        .collect()
}

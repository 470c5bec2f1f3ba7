//! Vertex morphing between regular polyhedra.
//!
//! This crate drives an animated low-poly blob: a lat/long sphere whose
//! vertices are pulled onto a sequence of regular solids, blending from one
//! to the next on a fixed timer. All functions are pure and synchronous -
//! the caller owns the render loop, the vertex buffer and the elapsed time.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **Caller-owned state**: Caches are built once and passed in explicitly
//! - **Never fails per frame**: Degenerate input degrades, it does not panic
//! - **Web-compatible**: Compiles to WASM
//!
//! # Key functions
//!
//! - [`generate_shape_vertices`]: Vertex set of a solid at a given radius
//! - [`find_nearest_vertex`]: Closest-direction vertex in a target set
//! - [`ease_in_out_cubic`]: Cubic easing with zero velocity at both ends
//! - [`lerp_vertex`]: Linear interpolation between two vertices
//! - [`compute_morphed_positions`]: Morphed sphere positions for a time
//! - [`Morpher`]: Pre-computed targets plus timing, applied to a buffer

mod error;

pub mod config;
pub mod correspondence;
pub mod cycle;
pub mod easing;
pub mod morph;
pub mod normals;
pub mod shapes;
pub mod sphere;

pub use config::MorphConfig;
pub use correspondence::{find_nearest_index, find_nearest_vertex};
pub use cycle::{CyclePhase, ShapeCycle, cycle_phase};
pub use easing::{Easing, ease_in_out_cubic, lerp_vertex, smoothstep};
pub use error::{ConfigError, ConfigResult, ParseShapeError};
pub use morph::{FrameOutcome, MorphTargets, Morpher, compute_morphed_positions};
pub use normals::compute_vertex_normals;
pub use shapes::{ShapeKind, dedup_vertices, generate_shape_vertices};
pub use sphere::{SphereMesh, sphere_vertices};

/// A point in 3D space, relative to the origin.
pub type Vertex = glam::Vec3;

/// Number of shapes in the morph cycle.
pub const SHAPE_COUNT: usize = 6;

/// Default radius every shape is inscribed at.
pub const DEFAULT_RADIUS: f32 = 1.2;

/// Default lat/long subdivision of the sphere. Kept low so the silhouette
/// stays visibly faceted.
pub const DEFAULT_SEGMENTS: u32 = 4;

/// Fewest segments for which the sphere has at least as many vertices as the
/// dodecahedron, so the cycle keeps growing in complexity.
pub const MIN_SEGMENTS: u32 = 4;

/// Default duration of one full pass through every shape, in seconds.
pub const DEFAULT_CYCLE_DURATION: f32 = 18.0;

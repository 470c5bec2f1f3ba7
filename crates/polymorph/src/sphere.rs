//! Lat/long sphere.
//!
//! The sphere is both the shape the blob renders with and the last target
//! of the cycle. Its vertices are a `(width + 1) × (height + 1)` grid in
//! row-major order from the north pole down. The first and last rows all
//! sit on a pole, and the first and last columns share the seam; these
//! duplicates are kept so positions line up index for index with the render
//! buffer.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::Vertex;

/// Vertex positions and triangle indices of a lat/long sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMesh {
    pub positions: Vec<Vertex>,
    /// Triangle list, counter-clockwise when viewed from outside.
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Build a sphere of `radius` subdivided into `segments` around and
    /// `segments` from pole to pole.
    ///
    /// At least 3 segments are used around and 2 from pole to pole.
    #[must_use]
    pub fn new(radius: f32, segments: u32) -> Self {
        let (width, height) = grid_size(segments);
        let positions = sphere_vertices(radius, segments);

        let row = width + 1;
        let mut indices = Vec::with_capacity((width * (height - 1) * 6) as usize);
        for iy in 0..height {
            for ix in 0..width {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;

                // The first and last rows collapse to a point, so only one
                // triangle of each pole cell has any area.
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != height - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self { positions, indices }
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Sample the lat/long grid without building triangles.
///
/// # Arguments
///
/// * `radius` - Distance of every vertex from the origin
/// * `segments` - Subdivision around and from pole to pole
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sphere_vertices(radius: f32, segments: u32) -> Vec<Vertex> {
    let (width, height) = grid_size(segments);
    let mut vertices = Vec::with_capacity(sphere_vertex_count(segments));

    for iy in 0..=height {
        let theta = PI * (iy as f32 / height as f32);
        let (sin_theta, cos_theta) = theta.sin_cos();
        for ix in 0..=width {
            let phi = TAU * (ix as f32 / width as f32);
            let (sin_phi, cos_phi) = phi.sin_cos();
            vertices.push(Vec3::new(
                -radius * cos_phi * sin_theta,
                radius * cos_theta,
                radius * sin_phi * sin_theta,
            ));
        }
    }

    vertices
}

/// Number of vertices [`sphere_vertices`] yields for `segments`.
#[must_use]
pub fn sphere_vertex_count(segments: u32) -> usize {
    let (width, height) = grid_size(segments);
    (width as usize + 1) * (height as usize + 1)
}

fn grid_size(segments: u32) -> (u32, u32) {
    (segments.max(3), segments.max(2))
}

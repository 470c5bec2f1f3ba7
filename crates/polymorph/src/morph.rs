//! Per-frame morph driver.
//!
//! Every frame, each vertex of the reference sphere is matched to its
//! closest-direction vertex in the current and the next shape of the cycle,
//! and the output position is the eased blend of the two matches.

use crate::Vertex;
use crate::config::MorphConfig;
use crate::correspondence::find_nearest_vertex;
use crate::cycle::{CyclePhase, ShapeCycle, cycle_phase};
use crate::easing::{Easing, lerp_vertex};
use crate::error::ConfigResult;
use crate::shapes::{ShapeKind, generate_shape_vertices};

/// Whether a frame touched the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Every buffer entry was rewritten.
    Updated,
    /// The targets were empty; the buffer was left as it was.
    Skipped,
}

/// Vertex sets computed once per radius and segment count.
///
/// Nothing mutates these after construction, so they can be shared across
/// frames freely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MorphTargets {
    /// Reference directions, index-aligned with the render buffer.
    pub sphere_vertices: Vec<Vertex>,
    /// Vertex set of each shape, in cycle order.
    pub shape_vertices: Vec<Vec<Vertex>>,
}

impl MorphTargets {
    /// Generate the sphere and every shape of `cycle` at `radius`.
    #[must_use]
    pub fn new(cycle: &ShapeCycle, radius: f32, segments: u32) -> Self {
        Self {
            sphere_vertices: generate_shape_vertices(ShapeKind::Sphere, radius, segments),
            shape_vertices: cycle
                .order
                .iter()
                .map(|&kind| generate_shape_vertices(kind, radius, segments))
                .collect(),
        }
    }

    /// True once there is something to morph between.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        targets_ready(&self.sphere_vertices, &self.shape_vertices)
    }
}

/// Morphed positions of every reference vertex at `elapsed_time`.
///
/// The output has one entry per entry of `sphere_reference`. Progress within
/// each phase is eased with [`ease_in_out_cubic`](crate::ease_in_out_cubic).
/// If any input set is empty, `sphere_reference` is returned as is.
///
/// # Arguments
///
/// * `elapsed_time` - Seconds since the animation started
/// * `speed` - Multiplier applied to `elapsed_time`
/// * `sphere_reference` - Reference direction for each output vertex
/// * `shapes` - Vertex set of each shape, in cycle order
/// * `cycle_duration` - Seconds for one pass through every shape
#[must_use]
pub fn compute_morphed_positions(
    elapsed_time: f32,
    speed: f32,
    sphere_reference: &[Vertex],
    shapes: &[Vec<Vertex>],
    cycle_duration: f32,
) -> Vec<Vertex> {
    let mut positions = sphere_reference.to_vec();
    morph_buffer(
        elapsed_time * speed,
        cycle_duration,
        Easing::InOutCubic,
        sphere_reference,
        shapes,
        &mut positions,
    );
    positions
}

fn targets_ready(sphere_reference: &[Vertex], shapes: &[Vec<Vertex>]) -> bool {
    !sphere_reference.is_empty() && !shapes.is_empty() && shapes.iter().all(|s| !s.is_empty())
}

fn morph_buffer(
    time: f32,
    cycle_duration: f32,
    easing: Easing,
    sphere_reference: &[Vertex],
    shapes: &[Vec<Vertex>],
    buffer: &mut [Vertex],
) -> FrameOutcome {
    if !targets_ready(sphere_reference, shapes) {
        tracing::trace!("Morph targets not ready, skipping frame");
        return FrameOutcome::Skipped;
    }

    let phase = cycle_phase(time, cycle_duration, shapes.len());
    let current = &shapes[phase.current];
    let next = &shapes[phase.next];
    let eased = easing.apply(phase.progress);

    for (i, slot) in buffer.iter_mut().enumerate() {
        // A buffer longer than the reference set uses its own position as
        // the direction for the extra entries.
        let reference = sphere_reference.get(i).copied().unwrap_or(*slot);
        let (Some(from), Some(to)) = (
            find_nearest_vertex(reference, current),
            find_nearest_vertex(reference, next),
        ) else {
            continue;
        };
        *slot = lerp_vertex(from, to, eased);
    }

    FrameOutcome::Updated
}

/// Pre-computed targets plus the timing to drive them.
#[derive(Debug, Clone)]
pub struct Morpher {
    config: MorphConfig,
    cycle: ShapeCycle,
    targets: MorphTargets,
}

impl Morpher {
    /// Validate `config` and generate every target shape.
    pub fn new(config: MorphConfig) -> ConfigResult<Self> {
        config.validate()?;

        let cycle = ShapeCycle::new(config.cycle_duration);
        let targets = MorphTargets::new(&cycle, config.radius, config.segments);
        tracing::debug!(
            "Built morph targets: radius={}, segments={}, sphere={} vertices, shapes={:?}",
            config.radius,
            config.segments,
            targets.sphere_vertices.len(),
            targets.shape_vertices.iter().map(Vec::len).collect::<Vec<_>>()
        );

        Ok(Self {
            config,
            cycle,
            targets,
        })
    }

    #[must_use]
    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    #[must_use]
    pub fn cycle(&self) -> &ShapeCycle {
        &self.cycle
    }

    #[must_use]
    pub fn targets(&self) -> &MorphTargets {
        &self.targets
    }

    /// A fresh buffer holding the undeformed sphere.
    #[must_use]
    pub fn reference_buffer(&self) -> Vec<Vertex> {
        self.targets.sphere_vertices.clone()
    }

    /// Phase at `elapsed_time`, after applying the configured speed.
    #[must_use]
    pub fn phase_at(&self, elapsed_time: f32) -> CyclePhase {
        self.cycle.phase_at(elapsed_time * self.config.speed)
    }

    /// Shapes being morphed between at `elapsed_time`.
    #[must_use]
    pub fn shapes_at(&self, elapsed_time: f32) -> (ShapeKind, ShapeKind) {
        self.cycle.shapes_at(elapsed_time * self.config.speed)
    }

    /// Overwrite `buffer` with the morphed positions at `elapsed_time`.
    ///
    /// Entry `i` is driven by sphere vertex `i`. The caller should recompute
    /// normals afterwards (see [`compute_vertex_normals`](crate::compute_vertex_normals)).
    pub fn apply(&self, elapsed_time: f32, buffer: &mut [Vertex]) -> FrameOutcome {
        morph_buffer(
            elapsed_time * self.config.speed,
            self.cycle.cycle_duration,
            self.config.easing,
            &self.targets.sphere_vertices,
            &self.targets.shape_vertices,
            buffer,
        )
    }

    /// Morphed positions at `elapsed_time` in a new buffer.
    #[must_use]
    pub fn positions_at(&self, elapsed_time: f32) -> Vec<Vertex> {
        let mut buffer = self.reference_buffer();
        self.apply(elapsed_time, &mut buffer);
        buffer
    }
}

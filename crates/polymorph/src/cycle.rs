//! Shape cycle timing.
//!
//! One cycle is split into equal phases, one per shape. During phase `i`
//! the blob travels from shape `i` to shape `i + 1`; the last phase travels
//! back to shape 0, so the animation loops without a jump.

use crate::shapes::ShapeKind;
use crate::{DEFAULT_CYCLE_DURATION, SHAPE_COUNT};

/// Where in the cycle a point in time falls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CyclePhase {
    /// Index of the shape being morphed away from.
    pub current: usize,
    /// Index of the shape being morphed towards.
    pub next: usize,
    /// Un-eased progress from `current` to `next`, in `[0, 1]`.
    pub progress: f32,
}

/// Compute the phase at `time` seconds.
///
/// Time wraps every `cycle_duration` seconds, negative time included. A
/// non-finite time, a non-positive duration or an empty cycle yields the
/// start of the first phase.
///
/// # Arguments
///
/// * `time` - Elapsed time, already scaled by speed
/// * `cycle_duration` - Seconds for one pass through every shape
/// * `shape_count` - Number of shapes in the cycle
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn cycle_phase(time: f32, cycle_duration: f32, shape_count: usize) -> CyclePhase {
    let start = CyclePhase {
        current: 0,
        next: 1 % shape_count.max(1),
        progress: 0.0,
    };
    if shape_count == 0
        || !time.is_finite()
        || !cycle_duration.is_finite()
        || cycle_duration <= 0.0
    {
        return start;
    }

    let shape_duration = cycle_duration / shape_count as f32;
    let cycle_time = time.rem_euclid(cycle_duration);
    let scaled = cycle_time / shape_duration;
    // Rounding can push `scaled` to exactly `shape_count`; that is the end of
    // the last phase, not the start of a seventh one.
    let current = (scaled.floor() as usize).min(shape_count - 1);
    let progress = (scaled - current as f32).clamp(0.0, 1.0);

    CyclePhase {
        current,
        next: (current + 1) % shape_count,
        progress,
    }
}

/// The fixed circular order of shapes and how long one pass takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeCycle {
    pub order: [ShapeKind; SHAPE_COUNT],
    pub cycle_duration: f32,
}

impl Default for ShapeCycle {
    fn default() -> Self {
        Self::new(DEFAULT_CYCLE_DURATION)
    }
}

impl ShapeCycle {
    /// The canonical simplest-to-most-complex order.
    #[must_use]
    pub fn new(cycle_duration: f32) -> Self {
        Self {
            order: ShapeKind::CYCLE,
            cycle_duration,
        }
    }

    /// Seconds each shape holds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn shape_duration(&self) -> f32 {
        self.cycle_duration / SHAPE_COUNT as f32
    }

    /// Phase at `time` seconds, already scaled by speed.
    #[must_use]
    pub fn phase_at(&self, time: f32) -> CyclePhase {
        cycle_phase(time, self.cycle_duration, SHAPE_COUNT)
    }

    /// Shapes being morphed between at `time`.
    #[must_use]
    pub fn shapes_at(&self, time: f32) -> (ShapeKind, ShapeKind) {
        let phase = self.phase_at(time);
        (self.order[phase.current], self.order[phase.next])
    }
}

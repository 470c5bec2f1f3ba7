//! Morph configuration.

use crate::easing::Easing;
use crate::error::{ConfigError, ConfigResult};
use crate::shapes::ShapeKind;
use crate::{DEFAULT_CYCLE_DURATION, DEFAULT_RADIUS, DEFAULT_SEGMENTS, SHAPE_COUNT};

/// Parameters fixed when a [`Morpher`](crate::Morpher) is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphConfig {
    /// Radius every shape is inscribed at.
    pub radius: f32,
    /// Lat/long subdivision of the reference sphere.
    pub segments: u32,
    /// Seconds for one pass through all shapes.
    pub cycle_duration: f32,
    /// Multiplier applied to elapsed time.
    pub speed: f32,
    /// Curve applied to the progress within each phase.
    pub easing: Easing,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            segments: DEFAULT_SEGMENTS,
            cycle_duration: DEFAULT_CYCLE_DURATION,
            speed: 1.0,
            easing: Easing::InOutCubic,
        }
    }
}

impl MorphConfig {
    #[must_use]
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    #[must_use]
    pub fn with_cycle_duration(mut self, cycle_duration: f32) -> Self {
        self.cycle_duration = cycle_duration;
        self
    }

    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// How long each shape holds before the next one takes over.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn shape_duration(&self) -> f32 {
        self.cycle_duration / SHAPE_COUNT as f32
    }

    /// Check every field is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if ShapeKind::Sphere.vertex_count(self.segments)
            < ShapeKind::Dodecahedron.vertex_count(self.segments)
        {
            return Err(ConfigError::InvalidSegments(self.segments));
        }
        if !self.cycle_duration.is_finite() || self.cycle_duration <= 0.0 {
            return Err(ConfigError::InvalidCycleDuration(self.cycle_duration));
        }
        if !self.speed.is_finite() {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        Ok(())
    }
}

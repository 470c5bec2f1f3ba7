//! Print morphed positions at chosen times as JSON.
//!
//! Useful for checking the animation offline, or for diffing the output of
//! two versions of the engine.
//!
//! Run: `cargo run -p polymorph --features tools --bin sample_frames -- [times...]`
//!
//! Without arguments, samples the start and middle of every phase.

use std::env;

use polymorph::{MorphConfig, Morpher, ShapeKind, Vertex};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = MorphConfig::default();
    let morpher = Morpher::new(config)?;

    let times = env::args()
        .skip(1)
        .map(|arg| arg.parse::<f32>())
        .collect::<Result<Vec<_>, _>>()?;
    let times = if times.is_empty() {
        default_times(config.shape_duration())
    } else {
        times
    };

    let shapes: Vec<_> = ShapeKind::CYCLE
        .iter()
        .zip(&morpher.targets().shape_vertices)
        .map(|(kind, vertices)| {
            json!({
                "name": kind.name(),
                "vertex_count": vertices.len(),
            })
        })
        .collect();

    let frames: Vec<_> = times
        .iter()
        .map(|&time| {
            let phase = morpher.phase_at(time);
            let (from, to) = morpher.shapes_at(time);
            let positions: Vec<[f32; 3]> = morpher
                .positions_at(time)
                .iter()
                .map(Vertex::to_array)
                .collect();
            json!({
                "time": time,
                "from": from.name(),
                "to": to.name(),
                "progress": phase.progress,
                "eased": config.easing.apply(phase.progress),
                "positions": positions,
            })
        })
        .collect();

    let output = json!({
        "config": {
            "radius": config.radius,
            "segments": config.segments,
            "cycle_duration": config.cycle_duration,
            "speed": config.speed,
            "easing": format!("{:?}", config.easing),
        },
        "shapes": shapes,
        "frames": frames,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn default_times(shape_duration: f32) -> Vec<f32> {
    (0..6u8)
        .flat_map(|i| {
            let start = f32::from(i) * shape_duration;
            [start, start + shape_duration / 2.0]
        })
        .collect()
}

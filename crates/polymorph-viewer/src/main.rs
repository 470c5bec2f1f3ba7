//! Desktop and browser viewer for the morphing blob.
//!
//! Controls:
//! - `M`: pause or resume motion
//! - `R`: toggle auto-rotation

mod args;
mod blob;

use bevy::prelude::*;
use polymorph::Morpher;

use crate::args::Command;
use crate::blob::MorphPlugin;

fn main() {
    init_logging();

    let config = match args::parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{}", args::USAGE);
            return;
        }
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let morpher = match Morpher::new(config) {
        Ok(morpher) => morpher,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    tracing::info!(
        "Starting viewer: radius={}, segments={}, cycle={}s, speed={}",
        config.radius,
        config.segments,
        config.cycle_duration,
        config.speed
    );

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "polymorph".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.04, 0.04, 0.05)))
        .add_plugins(MorphPlugin { morpher })
        .add_systems(Startup, setup_scene)
        .run();
}

#[cfg(not(target_family = "wasm"))]
fn init_logging() {
    tracing_subscriber::fmt::init();
}

#[cfg(target_family = "wasm")]
fn init_logging() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Camera looking at the blob from the front, plus a key light.
fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 50.0_f32.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(3.0, 4.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

//! The morphing blob.
//!
//! Owns the vertex buffer the engine writes into. Each frame the clock
//! advances, the buffer is morphed, and positions plus recomputed normals
//! are pushed into the Bevy mesh. Stopping motion stops calling the engine
//! entirely; the blob freezes in its current pose.

use std::f32::consts::TAU;

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use polymorph::{FrameOutcome, Morpher, ShapeKind, SphereMesh, Vertex, compute_vertex_normals};

/// Auto-rotation speed in radians per second (a full turn every 200 seconds).
pub const AUTO_ROTATE_SPEED: f32 = TAU / 200.0;

/// Plugin for the morphing blob.
pub struct MorphPlugin {
    pub morpher: Morpher,
}

impl Plugin for MorphPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(BlobMorpher(self.morpher.clone()))
            .init_resource::<MorphClock>()
            .init_resource::<BlobSettings>()
            .add_systems(Startup, spawn_blob)
            .add_systems(
                Update,
                (
                    toggle_motion,
                    advance_clock.run_if(motion_enabled),
                    morph_blob.run_if(motion_enabled),
                    rotate_blob.run_if(motion_enabled),
                )
                    .chain(),
            );
    }
}

/// The engine, with its targets pre-computed.
#[derive(Resource)]
pub struct BlobMorpher(pub Morpher);

/// Animation time, advanced only while motion is enabled.
#[derive(Resource, Default)]
pub struct MorphClock {
    /// Seconds of animation so far.
    pub elapsed: f32,
    /// Whether motion is disabled (the reduced-motion equivalent).
    pub paused: bool,
    /// Shapes of the phase last logged.
    last_shapes: Option<(ShapeKind, ShapeKind)>,
}

/// User-facing toggles.
#[derive(Resource)]
pub struct BlobSettings {
    pub auto_rotate: bool,
}

impl Default for BlobSettings {
    fn default() -> Self {
        Self { auto_rotate: true }
    }
}

/// Marker and buffer for the blob entity.
#[derive(Component)]
pub struct MorphingBlob {
    /// Positions written by the engine; index-aligned with the mesh.
    positions: Vec<Vertex>,
    indices: Vec<u32>,
}

/// Convert engine positions to mesh attribute data.
fn to_attribute(values: &[Vertex]) -> Vec<[f32; 3]> {
    values.iter().map(Vertex::to_array).collect()
}

fn build_mesh(positions: &[Vertex], indices: &[u32]) -> Mesh {
    let normals = compute_vertex_normals(positions, indices);
    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, to_attribute(positions))
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, to_attribute(&normals))
    .with_inserted_indices(Indices::U32(indices.to_vec()))
}

/// Spawn the blob as an undeformed sphere.
#[allow(clippy::needless_pass_by_value)]
fn spawn_blob(
    mut commands: Commands,
    morpher: Res<BlobMorpher>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let config = morpher.0.config();
    let sphere = SphereMesh::new(config.radius, config.segments);
    let mesh = build_mesh(&sphere.positions, &sphere.indices);

    tracing::info!(
        "Spawning blob: {} vertices, {} triangles",
        sphere.positions.len(),
        sphere.triangle_count()
    );

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.85, 0.85, 0.88),
            perceptual_roughness: 0.6,
            ..default()
        })),
        Transform::default(),
        MorphingBlob {
            positions: sphere.positions,
            indices: sphere.indices,
        },
    ));
}

#[allow(clippy::needless_pass_by_value)]
fn motion_enabled(clock: Res<MorphClock>) -> bool {
    !clock.paused
}

/// `M` toggles motion, `R` toggles auto-rotation.
#[allow(clippy::needless_pass_by_value)]
fn toggle_motion(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<MorphClock>,
    mut settings: ResMut<BlobSettings>,
) {
    if keyboard.just_pressed(KeyCode::KeyM) {
        clock.paused = !clock.paused;
        tracing::info!(
            "Motion {} at t={:.2}s",
            if clock.paused { "paused" } else { "resumed" },
            clock.elapsed
        );
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        settings.auto_rotate = !settings.auto_rotate;
        tracing::info!("Auto-rotate {}", if settings.auto_rotate { "on" } else { "off" });
    }
}

/// Advance animation time by the frame delta.
#[allow(clippy::needless_pass_by_value)]
fn advance_clock(time: Res<Time>, morpher: Res<BlobMorpher>, mut clock: ResMut<MorphClock>) {
    clock.elapsed += time.delta_secs();

    let shapes = morpher.0.shapes_at(clock.elapsed);
    if clock.last_shapes != Some(shapes) {
        tracing::debug!("Morphing {} -> {}", shapes.0, shapes.1);
        clock.last_shapes = Some(shapes);
    }
}

/// Morph the buffer and push positions and normals to the mesh.
#[allow(clippy::needless_pass_by_value)]
fn morph_blob(
    morpher: Res<BlobMorpher>,
    clock: Res<MorphClock>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut query: Query<(&Mesh3d, &mut MorphingBlob)>,
) {
    for (handle, mut blob) in &mut query {
        if morpher.0.apply(clock.elapsed, &mut blob.positions) == FrameOutcome::Skipped {
            continue;
        }
        let Some(mesh) = meshes.get_mut(&handle.0) else {
            continue;
        };

        let normals = compute_vertex_normals(&blob.positions, &blob.indices);
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, to_attribute(&blob.positions));
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, to_attribute(&normals));
    }
}

/// Slowly spin the blob around its vertical axis.
#[allow(clippy::needless_pass_by_value)]
fn rotate_blob(
    time: Res<Time>,
    settings: Res<BlobSettings>,
    mut query: Query<&mut Transform, With<MorphingBlob>>,
) {
    if !settings.auto_rotate {
        return;
    }
    for mut transform in &mut query {
        transform.rotate_y(AUTO_ROTATE_SPEED * time.delta_secs());
    }
}

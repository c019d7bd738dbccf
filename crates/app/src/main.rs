//! Entry point for Veles3D: builds a small demo scene and runs it headless
//! for a fixed number of ticks.

use anyhow::Result;
use asset::{MeshData, MeshFormat, MeshVertex, TextureData};
use corelib::{Mat4, vec3};
use scene::{
    GameObject, GraphicsModule, InputModule, InputState, PhysicsModule, PoseBoard,
    SoundModule, World,
};

fn parse_mesh_args() -> (Option<String>, Option<MeshFormat>) {
    // Accept: --mesh=path [--format=obj|dump]
    let mut path: Option<String> = None;
    let mut format: Option<MeshFormat> = None;
    for arg in std::env::args() {
        if let Some(v) = arg.strip_prefix("--mesh=") {
            path = Some(v.to_string());
        } else if let Some(v) = arg.strip_prefix("--format=") {
            format = match v.to_ascii_lowercase().as_str() {
                "obj" => Some(MeshFormat::FaceIndexed),
                "dump" => Some(MeshFormat::VertexDump),
                other => {
                    eprintln!("[warn] Unknown format '{}', inferring from extension.", other);
                    None
                }
            };
        }
    }
    (path, format)
}

fn parse_texture_arg() -> Option<String> {
    std::env::args()
        .find_map(|arg| arg.strip_prefix("--texture=").map(str::to_string))
}

fn parse_ticks_arg() -> u32 {
    for arg in std::env::args() {
        if let Some(v) = arg.strip_prefix("--ticks=") {
            if let Ok(n) = v.parse::<u32>() {
                return n;
            }
        }
    }
    8
}

/// Unit right triangle in the XY plane, used when no mesh file is given.
fn builtin_triangle() -> MeshData {
    MeshData::new(
        vec![
            MeshVertex::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
            MeshVertex::new([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
            MeshVertex::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
        ],
        vec![0, 1, 2],
    )
}

fn load_mesh_or_builtin() -> Result<MeshData> {
    let (path, format) = parse_mesh_args();
    match path {
        Some(p) => asset::load_mesh(&p, format),
        None => {
            log::info!("no --mesh given, using built-in triangle");
            Ok(builtin_triangle())
        }
    }
}

fn load_texture_or_checkerboard() -> Result<TextureData> {
    match parse_texture_arg() {
        Some(p) => TextureData::load_png(&p),
        None => Ok(TextureData::checkerboard(64, 8)),
    }
}

/// Scripted stand-in for a rigid-body simulation: drops the actor along -y
/// and settles it on the ground plane.
fn publish_drop_pose(poses: &mut PoseBoard, actor: scene::ActorId, tick: u32) {
    let start_y = 4.0;
    let fall_per_tick = 0.7;
    let y = (start_y - fall_per_tick * tick as f32).max(0.0);
    poses.publish(actor, Mat4::from_translation(vec3(3.0, y, 0.0)));
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let ticks = parse_ticks_arg();
    let mesh = load_mesh_or_builtin()?;
    let texture = load_texture_or_checkerboard()?;
    log::info!(
        "Starting Veles3D demo. ticks={}, mesh: {} vertices, texture: {}x{}",
        ticks,
        mesh.vertices.len(),
        texture.width,
        texture.height
    );

    let mut world = World::new();

    let player = world.spawn(GameObject::new(
        "player",
        vec3(0.0, 0.0, 0.0),
        Some(InputModule::new()),
        Some(SoundModule::new("footsteps", vec3(0.0, 0.0, 0.0))),
        Some(GraphicsModule::new(mesh.clone(), 1, 1)),
    ));

    const CRATE_ACTOR: scene::ActorId = 1;
    let falling = world.spawn(GameObject::new(
        "crate",
        vec3(3.0, 4.0, 0.0),
        None,
        None,
        Some(GraphicsModule::new(mesh, 1, 1)),
    ));
    if let Some(entity) = world.get_mut(falling) {
        entity.attach_physics(PhysicsModule::new(CRATE_ACTOR));
        let (positions, indices) = entity.collision_geometry()?;
        log::info!(
            "cooked collision geometry for 'crate': {} points, {} triangles",
            positions.len(),
            indices.len() / 3
        );
    }

    let mut poses = PoseBoard::new();

    // Scripted input: hold right for the first half of the run, then release.
    for tick in 0..ticks {
        let input = if tick < ticks / 2 {
            InputState {
                right: true,
                ..InputState::none()
            }
        } else {
            InputState::none()
        };

        publish_drop_pose(&mut poses, CRATE_ACTOR, tick);
        world.tick(&input, &poses);

        if let Some(entity) = world.get_mut(player) {
            if input.right {
                entity.sound_mut()?.play();
            } else {
                entity.sound_mut()?.stop();
            }
        }

        for (id, entity) in world.iter() {
            let pos = entity.world().to_cols_array();
            log::info!(
                "tick {:>2} {:?} '{}' at ({:.2}, {:.2}, {:.2})",
                tick,
                id,
                entity.name(),
                pos[12],
                pos[13],
                pos[14]
            );
        }
    }

    log::info!("Graceful shutdown. Bye!");
    Ok(())
}

//! The composed entity: a name, a transform and optional capability
//! modules.
//!
//! An entity does nothing by itself. Input, sound, graphics and physics are
//! separate modules attached at construction (or later, for physics), and
//! accessors that need an absent module return [`NoCapability`] instead of
//! pretending.

use corelib::transform::Transform;
use corelib::{Mat4, Vec3};

use crate::error::NoCapability;
use crate::graphics::GraphicsModule;
use crate::input::{InputModule, InputState};
use crate::physics::{PhysicsModule, PoseBoard};
use crate::sound::SoundModule;

pub struct GameObject {
    name: String,
    /// Local decomposed transform, mutated by input commands.
    transform: Transform,
    /// World matrix used for rendering. Recomputed every tick; a simulated
    /// pose from the board replaces it wholesale.
    world: Mat4,
    input: Option<InputModule>,
    sound: Option<SoundModule>,
    graphics: Option<GraphicsModule>,
    physics: Option<PhysicsModule>,
}

impl GameObject {
    /// Build an entity at `position` with whichever modules it should carry.
    /// Physics is attached separately once the simulation knows the actor.
    pub fn new(
        name: impl Into<String>,
        position: Vec3,
        input: Option<InputModule>,
        sound: Option<SoundModule>,
        graphics: Option<GraphicsModule>,
    ) -> Self {
        Self {
            name: name.into(),
            transform: Transform::from_translation(position),
            world: Mat4::from_translation(position),
            input,
            sound,
            graphics,
            physics: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// World matrix as of the last [`GameObject::update`].
    pub fn world(&self) -> Mat4 {
        self.world
    }

    /// Bind this entity to a simulated actor. From the next update on, a
    /// published pose for that actor overrides the local transform.
    pub fn attach_physics(&mut self, physics: PhysicsModule) {
        self.physics = Some(physics);
    }

    pub fn physics(&self) -> Option<&PhysicsModule> {
        self.physics.as_ref()
    }

    pub fn sound(&self) -> Result<&SoundModule, NoCapability> {
        self.sound.as_ref().ok_or(NoCapability::Sound)
    }

    pub fn sound_mut(&mut self) -> Result<&mut SoundModule, NoCapability> {
        self.sound.as_mut().ok_or(NoCapability::Sound)
    }

    pub fn graphics(&self) -> Result<&GraphicsModule, NoCapability> {
        self.graphics.as_ref().ok_or(NoCapability::Graphics)
    }

    /// Vertex buffer of the renderable mesh.
    pub fn vertices(&self) -> Result<&[asset::MeshVertex], NoCapability> {
        Ok(&self.graphics()?.mesh().vertices)
    }

    /// Index buffer of the renderable mesh.
    pub fn indices(&self) -> Result<&[u32], NoCapability> {
        Ok(&self.graphics()?.mesh().indices)
    }

    /// Triangle soup for physics cooking: flat positions plus the index
    /// buffer. Requires the graphics module, which owns the mesh.
    pub fn collision_geometry(&self) -> Result<(Vec<[f32; 3]>, Vec<u32>), NoCapability> {
        let mesh = self.graphics()?.mesh();
        Ok((mesh.positions(), mesh.indices.clone()))
    }

    /// Advance one tick.
    ///
    /// Order matters: the input command mutates the local transform first,
    /// then the world matrix is recomposed from it, and last a simulated
    /// pose (if this entity has a physics actor with a published pose)
    /// replaces the result. The simulation always wins.
    pub fn update(&mut self, input: &InputState, poses: &PoseBoard) {
        if let Some(module) = &self.input {
            if let Some(command) = module.handle(input) {
                command.apply(&mut self.transform);
            }
        }

        self.world = self.transform.world_matrix();

        if let Some(physics) = &self.physics {
            if let Some(pose) = poses.pose(physics.actor()) {
                self.world = pose;
            }
        }

        if let Some(sound) = &mut self.sound {
            sound.set_emitter(self.transform.translation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MOVE_STEP;
    use asset::{MeshData, MeshVertex};
    use corelib::vec3;

    fn triangle() -> MeshData {
        MeshData::new(
            vec![
                MeshVertex::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
                MeshVertex::new([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
                MeshVertex::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
            ],
            vec![0, 1, 2],
        )
    }

    fn renderable(name: &str) -> GameObject {
        GameObject::new(
            name,
            vec3(0.0, 0.0, 0.0),
            Some(InputModule::new()),
            None,
            Some(GraphicsModule::new(triangle(), 1, 1)),
        )
    }

    #[test]
    fn bare_entity_reports_missing_capabilities() {
        let bare = GameObject::new("marker", vec3(0.0, 0.0, 0.0), None, None, None);
        assert_eq!(bare.vertices().unwrap_err(), NoCapability::Graphics);
        assert_eq!(bare.indices().unwrap_err(), NoCapability::Graphics);
        assert_eq!(
            bare.collision_geometry().unwrap_err(),
            NoCapability::Graphics
        );
        assert_eq!(bare.sound().unwrap_err(), NoCapability::Sound);
    }

    #[test]
    fn construction_places_world_at_position() {
        let obj = GameObject::new("prop", vec3(2.0, 0.0, -1.0), None, None, None);
        assert_eq!(obj.world(), Mat4::from_translation(vec3(2.0, 0.0, -1.0)));
    }

    #[test]
    fn left_key_moves_one_step_per_tick() {
        let mut obj = renderable("player");
        let left = InputState {
            left: true,
            ..InputState::none()
        };
        let poses = PoseBoard::new();

        obj.update(&left, &poses);
        assert_eq!(obj.transform().translation, vec3(-MOVE_STEP, 0.0, 0.0));

        // Releasing the key stops the motion; the command is not latched.
        obj.update(&InputState::none(), &poses);
        assert_eq!(obj.transform().translation, vec3(-MOVE_STEP, 0.0, 0.0));
    }

    #[test]
    fn update_recomposes_world_from_transform() {
        let mut obj = renderable("player");
        obj.transform_mut().translate(vec3(0.0, 3.0, 0.0));
        obj.update(&InputState::none(), &PoseBoard::new());
        assert_eq!(obj.world(), Mat4::from_translation(vec3(0.0, 3.0, 0.0)));
    }

    #[test]
    fn simulated_pose_overrides_local_composition() {
        let mut obj = renderable("crate");
        obj.attach_physics(PhysicsModule::new(9));

        let mut poses = PoseBoard::new();
        let dropped = Mat4::from_translation(vec3(0.0, -4.0, 0.0));
        poses.publish(9, dropped);

        let right = InputState {
            right: true,
            ..InputState::none()
        };
        obj.update(&right, &poses);

        // The local transform still moved, but the rendered pose is the
        // simulated one.
        assert_eq!(obj.transform().translation, vec3(MOVE_STEP, 0.0, 0.0));
        assert_eq!(obj.world(), dropped);
    }

    #[test]
    fn physics_without_published_pose_keeps_local_pose() {
        let mut obj = renderable("crate");
        obj.attach_physics(PhysicsModule::new(9));
        obj.update(&InputState::none(), &PoseBoard::new());
        assert_eq!(obj.world(), Mat4::IDENTITY);
    }

    #[test]
    fn sound_emitter_tracks_entity_position() {
        let mut obj = GameObject::new(
            "radio",
            vec3(1.0, 0.0, 0.0),
            Some(InputModule::new()),
            Some(SoundModule::new("static", vec3(1.0, 0.0, 0.0))),
            None,
        );
        let right = InputState {
            right: true,
            ..InputState::none()
        };
        obj.update(&right, &PoseBoard::new());
        assert_eq!(
            obj.sound().expect("sound module").emitter(),
            vec3(1.0 + MOVE_STEP, 0.0, 0.0)
        );
    }

    #[test]
    fn collision_geometry_matches_mesh() {
        let obj = renderable("crate");
        let (positions, indices) = obj.collision_geometry().expect("geometry");
        assert_eq!(positions.len(), 3);
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(positions[1], [1.0, 0.0, 0.0]);
    }
}

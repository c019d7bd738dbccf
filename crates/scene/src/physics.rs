//! Physics attachment and the pose board that carries simulated poses back
//! into the scene.
//!
//! The simulation itself lives outside this crate. Each tick it publishes a
//! world matrix per actor; entities with a physics module look their actor
//! up by id and adopt that pose verbatim.

use corelib::Mat4;
use std::collections::HashMap;

/// Identifier of a rigid body inside the external simulation.
pub type ActorId = u32;

/// Binds an entity to a simulated actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysicsModule {
    actor: ActorId,
}

impl PhysicsModule {
    pub fn new(actor: ActorId) -> Self {
        Self { actor }
    }

    pub fn actor(&self) -> ActorId {
        self.actor
    }
}

/// Latest simulated pose per actor, keyed by id. Lookup is a map access,
/// not a scan over names.
#[derive(Clone, Debug, Default)]
pub struct PoseBoard {
    poses: HashMap<ActorId, Mat4>,
}

impl PoseBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pose for an actor, replacing any previous one.
    pub fn publish(&mut self, actor: ActorId, pose: Mat4) {
        self.poses.insert(actor, pose);
    }

    /// The last published pose, or `None` if the actor has never reported.
    pub fn pose(&self, actor: ActorId) -> Option<Mat4> {
        self.poses.get(&actor).copied()
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

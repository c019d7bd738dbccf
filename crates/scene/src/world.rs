//! Entity storage and the per-tick driver.

use crate::gameobject::GameObject;
use crate::input::InputState;
use crate::physics::PoseBoard;

/// Dense handle into the world's entity list. Ids are assigned in spawn
/// order and never reused; the world does not support despawning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Owns every entity in the scene and updates them synchronously.
#[derive(Default)]
pub struct World {
    entities: Vec<GameObject>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of an entity and hand back its id.
    pub fn spawn(&mut self, entity: GameObject) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        log::debug!("spawned entity '{}' as {:?}", entity.name(), id);
        self.entities.push(entity);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&GameObject> {
        self.entities.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut GameObject> {
        self.entities.get_mut(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &GameObject)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityId(i as u32), e))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Advance every entity one tick, in spawn order, against the same input
    /// snapshot and pose board.
    pub fn tick(&mut self, input: &InputState, poses: &PoseBoard) {
        for entity in &mut self.entities {
            entity.update(input, poses);
        }
    }
}

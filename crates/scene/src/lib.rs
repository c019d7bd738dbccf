//! Entity composition: game objects assembled from optional capability
//! modules, plus the world that ticks them.

pub mod error;
pub mod gameobject;
pub mod graphics;
pub mod input;
pub mod physics;
pub mod sound;
pub mod world;

pub use error::NoCapability;
pub use gameobject::GameObject;
pub use graphics::{GraphicsModule, ShaderId, TextureId};
pub use input::{Command, InputModule, InputState, MOVE_STEP};
pub use physics::{ActorId, PhysicsModule, PoseBoard};
pub use sound::SoundModule;
pub use world::{EntityId, World};

use thiserror::Error;

/// Returned when an accessor needs a capability module the entity was built
/// without. The caller treats this as "not renderable" / "not audible"
/// rather than a fault.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum NoCapability {
    #[error("entity has no graphics module")]
    Graphics,

    #[error("entity has no input module")]
    Input,

    #[error("entity has no sound module")]
    Sound,

    #[error("entity has no physics module")]
    Physics,
}

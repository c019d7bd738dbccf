//! Core types: math re-exports and the decomposed entity transform.

pub use glam::{EulerRot, Mat4, Quat, Vec3, vec3};

pub mod transform;

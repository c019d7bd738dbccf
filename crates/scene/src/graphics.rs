//! Renderable state: the mesh plus opaque GPU resource handles.

use asset::MeshData;

/// Handle to a compiled shader program owned by the render backend.
pub type ShaderId = u32;

/// Handle to an uploaded texture owned by the render backend.
pub type TextureId = u32;

/// Mesh data and the backend handles needed to draw it. The module owns the
/// CPU copy of the mesh; the ids are opaque and never dereferenced here.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphicsModule {
    mesh: MeshData,
    shader: ShaderId,
    texture: TextureId,
}

impl GraphicsModule {
    pub fn new(mesh: MeshData, shader: ShaderId, texture: TextureId) -> Self {
        Self {
            mesh,
            shader,
            texture,
        }
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    pub fn shader(&self) -> ShaderId {
        self.shader
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset::MeshVertex;

    #[test]
    fn module_exposes_its_parts() {
        let mesh = MeshData::new(vec![MeshVertex::default(); 3], vec![0, 1, 2]);
        let gfx = GraphicsModule::new(mesh.clone(), 7, 11);
        assert_eq!(gfx.mesh(), &mesh);
        assert_eq!(gfx.shader(), 7);
        assert_eq!(gfx.texture(), 11);
    }
}

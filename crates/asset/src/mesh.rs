//! CPU-side mesh representation shared by the parsers.

use bytemuck::{Pod, Zeroable};

/// Vertex with position/normal/uv. Values are in object space.
///
/// `repr(C)` and `Pod` so a vertex slice can be handed to an upload path as
/// raw bytes without copying field by field.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

/// Indexed triangle mesh with tightly-packed vertices. Vertex order is draw
/// order; indices address positions within the vertex sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Returns `true` if every index addresses a stored vertex.
    pub fn indices_in_bounds(&self) -> bool {
        let len = self.vertices.len() as u32;
        self.indices.iter().all(|&i| i < len)
    }

    /// Returns `true` if both buffers are non-empty and the indices are in
    /// bounds.
    pub fn is_valid(&self) -> bool {
        !self.vertices.is_empty() && !self.indices.is_empty() && self.indices_in_bounds()
    }

    /// Flat position list, one entry per vertex. Physics cooking consumes
    /// this together with [`MeshData::indices`] as its triangle soup.
    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.vertices.iter().map(|v| v.position).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_data_validity() {
        let data = MeshData::new(vec![MeshVertex::default()], vec![0]);
        assert!(data.is_valid());

        let out_of_bounds = MeshData::new(vec![MeshVertex::default()], vec![1]);
        assert!(!out_of_bounds.is_valid());
    }

    #[test]
    fn vertex_is_tightly_packed() {
        // 8 f32 scalars, nothing else.
        assert_eq!(std::mem::size_of::<MeshVertex>(), 32);
    }

    #[test]
    fn positions_follow_vertex_order() {
        let data = MeshData::new(
            vec![
                MeshVertex::new([1.0, 2.0, 3.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
                MeshVertex::new([4.0, 5.0, 6.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
            ],
            vec![0, 1],
        );
        assert_eq!(data.positions(), vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }
}

//! Asset parsing: CPU-side meshes from text formats, plus RGBA8 textures.
//!
//! Two mesh formats are supported. The face-indexed format carries shared
//! attribute lists and explicit triangle faces; the vertex dump format is a
//! declared count followed by eight scalars per vertex. Both produce the same
//! [`MeshData`] so downstream code never cares which file it came from.

pub mod error;
pub mod mesh;
pub mod texture;
pub mod vertex_dump;
pub mod wavefront;

pub use error::ParseError;
pub use mesh::{MeshData, MeshVertex};
pub use texture::TextureData;

use anyhow::Context;
use std::path::Path;

/// Which text layout a mesh file uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshFormat {
    /// Face-indexed: `v`/`vt`/`vn` attribute lines and triangle `f` lines.
    FaceIndexed,
    /// Count-prefixed flat stream of eight scalars per vertex.
    VertexDump,
}

impl MeshFormat {
    /// Guess the format from a file extension. `obj` is face-indexed,
    /// `txt` is a vertex dump; anything else is unknown.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "obj" => Some(Self::FaceIndexed),
            "txt" => Some(Self::VertexDump),
            _ => None,
        }
    }
}

/// Parse in-memory text in the given format.
pub fn parse_mesh(input: &str, format: MeshFormat) -> Result<MeshData, ParseError> {
    match format {
        MeshFormat::FaceIndexed => wavefront::parse_wavefront(input),
        MeshFormat::VertexDump => vertex_dump::parse_vertex_dump(input),
    }
}

/// Read a mesh file from disk and parse it. The format is taken from the
/// extension unless `format` overrides it.
pub fn load_mesh<P: AsRef<Path>>(
    path: P,
    format: Option<MeshFormat>,
) -> anyhow::Result<MeshData> {
    let path = path.as_ref();
    let format = match format {
        Some(f) => f,
        None => path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(MeshFormat::from_extension)
            .with_context(|| {
                format!("cannot infer mesh format for {}", path.display())
            })?,
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read mesh file {}", path.display()))?;
    let mesh = parse_mesh(&contents, format)
        .with_context(|| format!("failed to parse mesh file {}", path.display()))?;
    log::info!(
        "loaded mesh {} ({} vertices, {} triangles)",
        path.display(),
        mesh.vertices.len(),
        mesh.indices.len() / 3
    );
    Ok(mesh)
}

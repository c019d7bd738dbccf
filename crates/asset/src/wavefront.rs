//! Face-indexed text mesh parser: a constrained Wavefront subset.
//!
//! Supported line tags are `v`, `vt`, `vn` and triangle `f` lines with
//! `position[/uv]/normal` elements (1-based). Attribute lists stream as the
//! file is scanned, so a face may only reference indices already seen above
//! it. Faces never share vertex entries: every face appends three fresh
//! vertices and the index buffer is a plain running counter.

use crate::error::ParseError;
use crate::mesh::{MeshData, MeshVertex};

/// Parse format-A text into a mesh. Pure function of the input; blank lines
/// and `#` comments are skipped, unrecognized tags (`o`, `g`, `s`,
/// `usemtl`, ...) are ignored.
pub fn parse_wavefront(input: &str) -> Result<MeshData, ParseError> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();

    let mut vertices: Vec<MeshVertex> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for (line_no, raw) in input.lines().enumerate() {
        let line = line_no + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let Some(tag) = parts.next() else {
            continue;
        };

        match tag {
            "v" => {
                let x = parse_float(parts.next(), line)?;
                let y = parse_float(parts.next(), line)?;
                let z = parse_float(parts.next(), line)?;
                positions.push([x, y, z]);
            }
            "vt" => {
                let u = parse_float(parts.next(), line)?;
                let v = parse_float(parts.next(), line)?;
                uvs.push([u, v]);
            }
            "vn" => {
                let nx = parse_float(parts.next(), line)?;
                let ny = parse_float(parts.next(), line)?;
                let nz = parse_float(parts.next(), line)?;
                normals.push([nx, ny, nz]);
            }
            "f" => {
                // Exactly three elements per face; no n-gon triangulation.
                for _ in 0..3 {
                    let token = parts
                        .next()
                        .ok_or(ParseError::MalformedNumber { line })?;
                    let (pi, ti, ni) = split_face_element(token, line)?;

                    let position = *positions
                        .get(pi)
                        .ok_or(ParseError::IndexOutOfRange { line })?;
                    let normal = *normals
                        .get(ni)
                        .ok_or(ParseError::IndexOutOfRange { line })?;
                    let uv = match ti {
                        Some(t) => {
                            *uvs.get(t).ok_or(ParseError::IndexOutOfRange { line })?
                        }
                        None => [0.0, 0.0],
                    };

                    let next = indices.len() as u32;
                    vertices.push(MeshVertex::new(position, normal, uv));
                    indices.push(next);
                }
            }
            _ => {}
        }
    }

    Ok(MeshData::new(vertices, indices))
}

fn parse_float(token: Option<&str>, line: usize) -> Result<f32, ParseError> {
    token
        .and_then(|t| t.parse::<f32>().ok())
        .ok_or(ParseError::MalformedNumber { line })
}

/// Split a `position[/uv]/normal` element into 0-based indices. The uv slot
/// may be empty (`p//n`); position and normal are mandatory.
fn split_face_element(
    token: &str,
    line: usize,
) -> Result<(usize, Option<usize>, usize), ParseError> {
    let mut segments = token.split('/');
    let position = resolve_index(segments.next(), line)?;
    let uv = match segments.next() {
        None | Some("") => None,
        Some(seg) => Some(resolve_index(Some(seg), line)?),
    };
    let normal = resolve_index(segments.next(), line)?;
    Ok((position, uv, normal))
}

/// Convert a 1-based index token to 0-based. Zero is below the valid range.
fn resolve_index(token: Option<&str>, line: usize) -> Result<usize, ParseError> {
    let raw = token
        .filter(|t| !t.is_empty())
        .ok_or(ParseError::MalformedNumber { line })?
        .parse::<usize>()
        .map_err(|_| ParseError::MalformedNumber { line })?;
    if raw == 0 {
        return Err(ParseError::IndexOutOfRange { line });
    }
    Ok(raw - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vn 0.0 0.0 1.0
f 1//1 2//1 3//1
";

    #[test]
    fn parse_triangle_without_uvs() {
        let mesh = parse_wavefront(TRIANGLE).expect("parse triangle");
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.vertices[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[2].position, [0.0, 1.0, 0.0]);
        for v in &mesh.vertices {
            assert_eq!(v.normal, [0.0, 0.0, 1.0]);
            assert_eq!(v.uv, [0.0, 0.0]);
        }
    }

    #[test]
    fn parse_triangle_with_uvs() {
        let src = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 0.0 1.0
vn 0.0 0.0 1.0
f 1/1/1 2/2/1 3/3/1
";
        let mesh = parse_wavefront(src).expect("parse triangle");
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.vertices[1].uv, [1.0, 0.0]);
        assert_eq!(mesh.vertices[2].uv, [0.0, 1.0]);
    }

    #[test]
    fn faces_never_share_vertex_entries() {
        let src = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
v 1.0 1.0 0.0
vn 0.0 0.0 1.0
f 1//1 2//1 3//1
f 2//1 4//1 3//1
";
        let mesh = parse_wavefront(src).expect("parse quad");
        // Two faces, six fresh vertices, running-counter indices.
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        // Shared attribute triples are value-equal but distinct entries.
        assert_eq!(mesh.vertices[1], mesh.vertices[3]);
        assert_eq!(mesh.vertices[2], mesh.vertices[5]);
    }

    #[test]
    fn output_invariants_hold() {
        let src = "\
# a comment

v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vn 0.0 0.0 1.0
usemtl ignored
f 1//1 2//1 3//1
f 3//1 2//1 1//1
";
        let mesh = parse_wavefront(src).expect("parse");
        assert!(mesh.indices_in_bounds());
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn face_index_past_collected_list_is_rejected() {
        let src = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vn 0.0 0.0 1.0
f 1//1 2//1 4//1
";
        let err = parse_wavefront(src).unwrap_err();
        assert_eq!(err, ParseError::IndexOutOfRange { line: 5 });
    }

    #[test]
    fn forward_reference_to_later_attribute_is_rejected() {
        // The normal appears after the face that references it.
        let src = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f 1//1 2//1 3//1
vn 0.0 0.0 1.0
";
        let err = parse_wavefront(src).unwrap_err();
        assert_eq!(err, ParseError::IndexOutOfRange { line: 4 });
    }

    #[test]
    fn zero_index_is_out_of_range() {
        let src = "\
v 0.0 0.0 0.0
vn 0.0 0.0 1.0
f 0//1 1//1 1//1
";
        let err = parse_wavefront(src).unwrap_err();
        assert_eq!(err, ParseError::IndexOutOfRange { line: 3 });
    }

    #[test]
    fn malformed_number_names_the_line() {
        let src = "\
v 0.0 0.0 0.0
v 1.0 nope 0.0
";
        let err = parse_wavefront(src).unwrap_err();
        assert_eq!(err, ParseError::MalformedNumber { line: 2 });
    }

    #[test]
    fn face_element_without_normal_is_malformed() {
        let src = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vn 0.0 0.0 1.0
f 1 2 3
";
        let err = parse_wavefront(src).unwrap_err();
        assert_eq!(err, ParseError::MalformedNumber { line: 5 });
    }

    #[test]
    fn empty_input_yields_empty_mesh() {
        let mesh = parse_wavefront("# nothing but comments\n\n").expect("parse");
        assert!(mesh.vertices.is_empty());
        assert!(mesh.indices.is_empty());
    }
}

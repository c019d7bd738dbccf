//! Flat vertex dump parser: a declared count followed by raw scalars.
//!
//! The first token is the vertex count; after it the file is one long
//! whitespace-separated float stream, eight scalars per vertex in
//! position/normal/uv order. Line breaks carry no meaning past the count, so
//! a vertex may span lines. Indices are implicit: vertex `i` is index `i`.

use crate::error::ParseError;
use crate::mesh::{MeshData, MeshVertex};

const SCALARS_PER_VERTEX: usize = 8;

/// Parse format-B text into a mesh. Scalars beyond the declared count are
/// ignored, mirroring a reader that stops after `count` records.
pub fn parse_vertex_dump(input: &str) -> Result<MeshData, ParseError> {
    let mut tokens = input.lines().enumerate().flat_map(|(line_no, raw)| {
        raw.split_whitespace().map(move |tok| (line_no + 1, tok))
    });

    let Some((count_line, count_tok)) = tokens.next() else {
        return Err(ParseError::TruncatedInput {
            expected: 0,
            found: 0,
        });
    };
    let expected = count_tok
        .parse::<usize>()
        .map_err(|_| ParseError::MalformedNumber { line: count_line })?;

    let needed = expected * SCALARS_PER_VERTEX;
    let mut scalars: Vec<f32> = Vec::with_capacity(needed);
    for (line, tok) in tokens {
        if scalars.len() == needed {
            break;
        }
        let value = tok
            .parse::<f32>()
            .map_err(|_| ParseError::MalformedNumber { line })?;
        scalars.push(value);
    }

    if scalars.len() < needed {
        return Err(ParseError::TruncatedInput {
            expected,
            found: scalars.len() / SCALARS_PER_VERTEX,
        });
    }

    let vertices: Vec<MeshVertex> = scalars
        .chunks_exact(SCALARS_PER_VERTEX)
        .map(|c| {
            MeshVertex::new([c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7]])
        })
        .collect();
    let indices: Vec<u32> = (0..expected as u32).collect();

    Ok(MeshData::new(vertices, indices))
}

/// Parser for the comma-separated wireframe description format
///
/// ```text
/// <vertexCount>,<faceCount>
/// <label>,<x>,<y>,<z>          (vertexCount lines)
/// <idx1>,<idx2>,...,<idxK>     (faceCount lines, 1-based indices)
/// ```
use std::fs;
use std::path::Path;

use log::debug;
use nom::{
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res},
    number::complete::double,
    sequence::{delimited, separated_pair},
    IResult,
};

use crate::error::FormatError;
use crate::geometry::{Face, Mesh, Vertex};

/// Read and parse a mesh file
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Mesh, FormatError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let mesh = load(&text)?;
    debug!(
        "loaded {}: {} vertices, {} faces",
        path.display(),
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}

/// Parse a mesh description. Either the whole mesh loads or an error is
/// returned; face indices come back 0-based.
pub fn load(source: &str) -> Result<Mesh, FormatError> {
    let lines: Vec<&str> = source.lines().map(str::trim).collect();

    let header_line = lines.first().copied().unwrap_or_default();
    let (vertex_count, face_count) = match header(header_line) {
        Ok((_, counts)) => counts,
        Err(_) => {
            return Err(FormatError::Header {
                content: header_line.to_string(),
            })
        }
    };

    let body = lines.get(1..).unwrap_or_default();
    if body.len() < vertex_count {
        return Err(FormatError::MissingLines {
            section: "vertex",
            expected: vertex_count,
            found: body.len(),
        });
    }
    let (vertex_lines, rest) = body.split_at(vertex_count);
    if rest.len() < face_count {
        return Err(FormatError::MissingLines {
            section: "face",
            expected: face_count,
            found: rest.len(),
        });
    }
    let face_lines = &rest[..face_count];

    let mut mesh = Mesh::with_capacity(vertex_count, face_count);

    for (n, line) in vertex_lines.iter().enumerate() {
        mesh.add_vertex(parse_vertex(line, n + 2)?);
    }

    // The first face line fixes the column count for every face.
    let width = face_lines.first().map_or(0, |line| line.split(',').count());
    for (n, line) in face_lines.iter().enumerate() {
        let line_no = vertex_count + n + 2;
        mesh.add_face(parse_face(line, line_no, width, vertex_count)?);
    }

    Ok(mesh)
}

fn count(input: &str) -> IResult<&str, usize> {
    map_res(delimited(space0, digit1, space0), str::parse::<usize>)(input)
}

fn header(input: &str) -> IResult<&str, (usize, usize)> {
    all_consuming(separated_pair(count, char(','), count))(input)
}

fn number(input: &str) -> IResult<&str, f64> {
    all_consuming(delimited(space0, double, space0))(input)
}

/// Parse field `field` (0-based) of a record as a float truncated toward zero
fn truncated_field(fields: &[&str], field: usize, line: usize) -> Result<f64, FormatError> {
    let value = fields.get(field).ok_or(FormatError::MissingField {
        line,
        field: field + 1,
    })?;

    match number(value) {
        Ok((_, n)) if n.is_finite() => Ok(n.trunc()),
        _ => Err(FormatError::InvalidNumber {
            line,
            field: field + 1,
            value: value.to_string(),
        }),
    }
}

fn parse_vertex(line: &str, line_no: usize) -> Result<Vertex, FormatError> {
    let fields: Vec<&str> = line.split(',').collect();

    let x = truncated_field(&fields, 1, line_no)?;
    let y = truncated_field(&fields, 2, line_no)?;
    let z = truncated_field(&fields, 3, line_no)?;

    Ok(Vertex::new(fields[0].trim(), x, y, z))
}

fn parse_face(
    line: &str,
    line_no: usize,
    width: usize,
    vertex_count: usize,
) -> Result<Face, FormatError> {
    let fields: Vec<&str> = line.split(',').collect();

    let mut indices = Vec::with_capacity(width);
    for field in 0..width {
        let index = truncated_field(&fields, field, line_no)?;
        if index < 1.0 || index > vertex_count as f64 {
            return Err(FormatError::IndexOutOfRange {
                line: line_no,
                index: index as i64,
                vertex_count,
            });
        }
        indices.push(index as usize - 1);
    }

    Ok(Face::new(indices))
}

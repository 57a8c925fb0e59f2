/// OBJ subset parser: vertex and face records only
///
/// The viewer consumes a line-oriented slice of the OBJ format:
///
/// ```text
/// v <x> <y> <z>      vertex position (extra tokens ignored)
/// f <ref> <ref> ...  face; each <ref> is `index` or `index/...`,
///                    only the 1-based vertex index is used
/// ```
///
/// Every other record (`vn`, `vt`, comments, groups, materials) is skipped
/// without error. A vertex line with fewer than three coordinates is skipped
/// too; a coordinate or index token that fails to parse aborts the load.
use nom::{character::complete::u32 as uint, combinator::all_consuming, number::complete::float, IResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::geometry::{Face, Mesh};

/// Errors surfaced by the mesh loader.
///
/// `FileNotFound` is kept distinct from other I/O failures so the front-end
/// can report a missing model without treating it as a crash.
#[derive(Debug, Error)]
pub enum ObjError {
    #[error("mesh file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: malformed coordinate {token:?}")]
    MalformedNumber { line: usize, token: String },

    #[error("line {line}: malformed vertex index {token:?}")]
    MalformedIndex { line: usize, token: String },
}

/// Load a mesh from an OBJ file.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, ObjError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ObjError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ObjError::Io(e)
        }
    })?;

    let mut mesh = Mesh::new();
    parse_obj(BufReader::new(file), &mut mesh)?;
    Ok(mesh)
}

/// Load a mesh into an existing instance, resetting it first.
///
/// On failure the target is left empty rather than partially populated.
pub fn load_obj_into<P: AsRef<Path>>(path: P, mesh: &mut Mesh) -> Result<(), ObjError> {
    mesh.clear();
    *mesh = load_obj(path)?;
    Ok(())
}

/// Parse OBJ text from any buffered reader into `mesh`.
///
/// The mesh is cleared before the first line is read.
pub fn parse_obj<R: BufRead>(reader: R, mesh: &mut Mesh) -> Result<(), ObjError> {
    mesh.clear();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        parse_line(line.trim(), index + 1, mesh)?;
    }
    Ok(())
}

fn parse_line(line: &str, number: usize, mesh: &mut Mesh) -> Result<(), ObjError> {
    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some("v") => parse_vertex(tokens, number, mesh),
        Some("f") => parse_face(tokens, number, mesh),
        // Normals, texture coordinates, comments, groups, blank lines
        _ => Ok(()),
    }
}

fn parse_vertex<'a, I>(mut tokens: I, number: usize, mesh: &mut Mesh) -> Result<(), ObjError>
where
    I: Iterator<Item = &'a str>,
{
    // A vertex record needs three coordinates; shorter lines are skipped
    // before any token is parsed. Tokens past the third are ignored.
    let (Some(x), Some(y), Some(z)) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Ok(());
    };
    mesh.add_vertex(
        parse_coordinate(x, number)?,
        parse_coordinate(y, number)?,
        parse_coordinate(z, number)?,
    );
    Ok(())
}

fn parse_face<'a, I>(tokens: I, number: usize, mesh: &mut Mesh) -> Result<(), ObjError>
where
    I: Iterator<Item = &'a str>,
{
    let mut indices = Vec::new();
    for token in tokens {
        indices.push(parse_index(token, number)?);
    }
    // An `f` line with no references produces no face at all
    if !indices.is_empty() {
        mesh.add_face(Face::new(indices));
    }
    Ok(())
}

fn float_token(input: &str) -> IResult<&str, f32> {
    float(input)
}

fn uint_token(input: &str) -> IResult<&str, u32> {
    uint(input)
}

fn parse_coordinate(token: &str, line: usize) -> Result<f32, ObjError> {
    match all_consuming(float_token)(token) {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(ObjError::MalformedNumber {
            line,
            token: token.to_string(),
        }),
    }
}

/// Parse one face reference, keeping only the part before the first `/`.
///
/// Indices are 1-based in the file; the stored index is 0-based. A zero
/// index has no 0-based counterpart and is rejected with the rest of the
/// malformed tokens.
fn parse_index(token: &str, line: usize) -> Result<usize, ObjError> {
    let head = token.split('/').next().unwrap_or(token);
    match all_consuming(uint_token)(head) {
        Ok((_, index)) if index >= 1 => Ok(index as usize - 1),
        _ => Err(ObjError::MalformedIndex {
            line,
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Mesh, ObjError> {
        let mut mesh = Mesh::new();
        parse_obj(Cursor::new(text), &mut mesh)?;
        Ok(mesh)
    }

    #[test]
    fn test_parse_vertex() {
        let mesh = parse("v 1 2 3").unwrap();
        assert_eq!(mesh.vertices.len(), 1);
        assert_eq!(mesh.vertices[0], nalgebra::Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_short_vertex_line_is_skipped() {
        let mesh = parse("v 1 2").unwrap();
        assert!(mesh.vertices.is_empty());
    }

    #[test]
    fn test_extra_vertex_tokens_are_ignored() {
        let mesh = parse("v 1 2 3 0.5 0.5").unwrap();
        assert_eq!(mesh.vertices.len(), 1);
    }

    #[test]
    fn test_parse_face() {
        let mesh = parse("f 1 2 3").unwrap();
        assert_eq!(mesh.faces.len(), 1);
        assert_eq!(mesh.faces[0].indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_face_reference_keeps_pre_slash_index() {
        let mesh = parse("f 1/2/3 4/5/6").unwrap();
        assert_eq!(mesh.faces[0].indices, vec![0, 3]);
    }

    #[test]
    fn test_empty_face_line_produces_no_face() {
        let mesh = parse("f").unwrap();
        assert!(mesh.faces.is_empty());
    }

    #[test]
    fn test_unknown_records_are_ignored() {
        let text = "# comment\nvn 0 0 1\nvt 0.5 0.5\ng group\nusemtl red\n\nv 1 2 3\n";
        let mesh = parse(text).unwrap();
        assert_eq!(mesh.vertices.len(), 1);
        assert!(mesh.faces.is_empty());
    }

    #[test]
    fn test_whitespace_runs_are_one_delimiter() {
        let mesh = parse("   v \t 1   2 \t 3   ").unwrap();
        assert_eq!(mesh.vertices.len(), 1);
    }

    #[test]
    fn test_malformed_coordinate_aborts() {
        let err = parse("v 1 2 x").unwrap_err();
        assert!(matches!(err, ObjError::MalformedNumber { line: 1, .. }));
    }

    #[test]
    fn test_malformed_index_aborts() {
        let err = parse("f 1 banana 3").unwrap_err();
        assert!(matches!(err, ObjError::MalformedIndex { line: 1, .. }));
    }

    #[test]
    fn test_zero_index_is_rejected() {
        let err = parse("f 0 1 2").unwrap_err();
        assert!(matches!(err, ObjError::MalformedIndex { .. }));
    }

    #[test]
    fn test_unit_corner_pattern() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 0 0 1\n";
        let mesh = parse(text).unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.faces.len(), 0);
        assert!((mesh.extent() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file_is_distinguishable() {
        let err = load_obj("no/such/model.obj").unwrap_err();
        assert!(matches!(err, ObjError::FileNotFound { .. }));
    }

    #[test]
    fn test_failed_load_into_leaves_mesh_empty() {
        let mut mesh = Mesh::cube(1.0);
        let result = load_obj_into("no/such/model.obj", &mut mesh);
        assert!(result.is_err());
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_parse_resets_previous_contents() {
        let mut mesh = Mesh::cube(1.0);
        parse_obj(Cursor::new("v 9 9 9"), &mut mesh).unwrap();
        assert_eq!(mesh.vertices.len(), 1);
        assert!(mesh.faces.is_empty());
    }
}

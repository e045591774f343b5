use std::io::{self, BufRead};
use std::num;

use lattice::{Vec2, Vec3};
use log::{debug, warn};
use mf_format::Model;

use super::builder::*;
use crate::config::ReaderConfig;

#[derive(thiserror::Error, Debug)]
pub enum ParserError {
    #[error("Failed to read model: {0}")]
    Io(#[from] io::Error),
    #[error("Line {line}: failed to parse number: {source}")]
    ParseFloat {
        line: usize,
        source: num::ParseFloatError,
    },
    #[error("Line {line}: failed to parse index: {source}")]
    ParseInt {
        line: usize,
        source: num::ParseIntError,
    },
    #[error("Line {line}: expected at least {expected} values, found {found}")]
    MissingValues {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: malformed face element \"{element}\"")]
    ParseFace { line: usize, element: String },
    #[error("Line {line}: {kind} index {index} is out of range ({len} defined)")]
    IndexOutOfRange {
        line: usize,
        kind: &'static str,
        index: i64,
        len: usize,
    },
    #[error("Line {line}: face mixes elements with and without {kind} indices")]
    InconsistentFace { line: usize, kind: &'static str },
    #[error("Line {line}: unsupported statement \"{token}\"")]
    UnknownToken { line: usize, token: String },
}

// parses wavefront obj (https://en.wikipedia.org/wiki/Wavefront_.obj_file)
// everything except geometry is skipped, faces are resolved while reading
pub fn parse<R: BufRead>(reader: R, config: &ReaderConfig) -> Result<Model, ParserError> {
    let mut builder = ObjModelBuilder::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        // drop trailing comments
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        debug!("Parsing: \"{}\"", content);

        let mut parts = content.split_whitespace();
        if let Some(token) = parts.next() {
            let values: Vec<&str> = parts.collect();
            parse_token(token, &values, line_no, &mut builder, config)?;
        }
    }

    Ok(builder.build_model())
}

pub fn parse_str(text: &str, config: &ReaderConfig) -> Result<Model, ParserError> {
    parse(text.as_bytes(), config)
}

fn parse_token(
    token: &str,
    values: &[&str],
    line: usize,
    builder: &mut ObjModelBuilder,
    config: &ReaderConfig,
) -> Result<(), ParserError> {
    match token {
        // vertex, optional w or color components are dropped
        "v" => {
            let numbers = parse_numbers(values, 3, line)?;
            builder.push_vertex(Vec3::new(numbers[0], numbers[1], numbers[2]));
        }
        // texture coordinates, v defaults to 0
        "vt" => {
            let numbers = parse_numbers(values, 1, line)?;
            builder.push_uv(Vec2::new(numbers[0], numbers.get(1).copied().unwrap_or(0.0)));
        }
        // vertex normals
        "vn" => {
            let numbers = parse_numbers(values, 3, line)?;
            builder.push_normal(Vec3::new(numbers[0], numbers[1], numbers[2]));
        }
        "f" => builder.push_face(line, parse_face(values, line)?)?,
        // name and group
        "o" | "g" => debug!("Ignoring {} \"{}\"", token, values.join(" ")),
        "s" => warn!("Smoothing groups not supported. Ignoring."),
        "usemtl" | "mtllib" => warn!("Materials not supported. Ignoring."),
        "vp" => warn!("Parameter space vertices not supported. Ignoring."),
        _ if config.strict => {
            return Err(ParserError::UnknownToken {
                line,
                token: token.into(),
            })
        }
        _ => warn!("Line {}: unsupported statement \"{}\". Ignoring.", line, token),
    };

    Ok(())
}

// parses at least `expected` numbers
fn parse_numbers(values: &[&str], expected: usize, line: usize) -> Result<Vec<f32>, ParserError> {
    if values.len() < expected {
        return Err(ParserError::MissingValues {
            line,
            expected,
            found: values.len(),
        });
    }

    values
        .iter()
        .map(|x| x.parse())
        .collect::<Result<_, _>>()
        .map_err(|source| ParserError::ParseFloat { line, source })
}

fn parse_face(values: &[&str], line: usize) -> Result<ObjFace, ParserError> {
    if values.len() < 3 {
        return Err(ParserError::MissingValues {
            line,
            expected: 3,
            found: values.len(),
        });
    }

    let face_i = values
        .iter()
        .map(|x| parse_face_index(x, line))
        .collect::<Result<_, _>>()?;

    Ok(ObjFace { face_i })
}

// parses a single `v`, `v/vt`, `v//vn` or `v/vt/vn` element
fn parse_face_index(value: &str, line: usize) -> Result<ObjFaceIndex, ParserError> {
    let malformed = || ParserError::ParseFace {
        line,
        element: value.into(),
    };

    let triplet = parse_triplet(value)
        .map_err(|source| ParserError::ParseInt { line, source })?
        .ok_or_else(malformed)?;

    Ok(ObjFaceIndex {
        vert_i: triplet[0].ok_or_else(malformed)?,
        uv_i: triplet[1],
        normal_i: triplet[2],
    })
}

// splits at slashes, `None` if there are more than three parts
fn parse_triplet(value: &str) -> Result<Option<[Option<i64>; 3]>, num::ParseIntError> {
    let mut ret = [None; 3];
    let mut parts = value.split('/');

    for (a, b) in ret.iter_mut().zip(&mut parts) {
        *a = if b.is_empty() { None } else { Some(b.parse()?) }
    }

    if parts.next().is_some() {
        return Ok(None);
    }

    Ok(Some(ret))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::num::ParseIntError;

    const STRICT: ReaderConfig = ReaderConfig { strict: true };

    #[test]
    fn test_parse_token() -> Result<(), ParserError> {
        let mut builder = ObjModelBuilder::default();
        let config = ReaderConfig::default();

        parse_token("o", &["foo", "bar"], 1, &mut builder, &config)?;
        parse_token("v", &["1", "2", "3"], 2, &mut builder, &config)?;
        parse_token("v", &["4", "5", "6", "1.0"], 3, &mut builder, &config)?;
        parse_token("v", &["7", "8", "9"], 4, &mut builder, &config)?;
        parse_token("f", &["1", "2", "3"], 5, &mut builder, &config)?;
        parse_token("g", &["new", "group"], 6, &mut builder, &config)?;
        parse_token("curv", &["0", "1"], 7, &mut builder, &config)?;

        let model = builder.build_model();
        assert_eq!(
            model.vertices,
            vec![
                Vec3::new(1.0, 2.0, 3.0),
                Vec3::new(4.0, 5.0, 6.0),
                Vec3::new(7.0, 8.0, 9.0),
            ]
        );
        assert_eq!(model.polygons.len(), 1);

        Ok(())
    }

    #[test]
    fn test_parse_token_strict() {
        let mut builder = ObjModelBuilder::default();

        assert!(matches!(
            parse_token("curv", &["0", "1"], 7, &mut builder, &STRICT),
            Err(ParserError::UnknownToken { line: 7, .. })
        ));
        assert!(parse_token("usemtl", &["wood"], 8, &mut builder, &STRICT).is_ok());
    }

    #[test]
    fn test_parse_numbers() -> Result<(), ParserError> {
        assert_eq!(parse_numbers(&["1", "-2.5", "3e2"], 3, 1)?, vec![1.0, -2.5, 300.0]);
        assert!(matches!(
            parse_numbers(&["1", "2"], 3, 4),
            Err(ParserError::MissingValues {
                line: 4,
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            parse_numbers(&["1", "x", "2"], 3, 9),
            Err(ParserError::ParseFloat { line: 9, .. })
        ));

        Ok(())
    }

    #[test]
    fn test_parse_face() -> Result<(), ParserError> {
        assert_eq!(
            parse_face(&["1", "2/2", "3/2/1", "5//2"], 1)?,
            ObjFace {
                face_i: vec![
                    ObjFaceIndex {
                        vert_i: 1,
                        ..ObjFaceIndex::default()
                    },
                    ObjFaceIndex {
                        vert_i: 2,
                        uv_i: Some(2),
                        ..ObjFaceIndex::default()
                    },
                    ObjFaceIndex {
                        vert_i: 3,
                        uv_i: Some(2),
                        normal_i: Some(1),
                    },
                    ObjFaceIndex {
                        vert_i: 5,
                        normal_i: Some(2),
                        ..ObjFaceIndex::default()
                    }
                ]
            }
        );

        assert!(matches!(
            parse_face(&["1", "2"], 3),
            Err(ParserError::MissingValues { line: 3, .. })
        ));
        assert!(matches!(
            parse_face(&["1", "/2", "3"], 3),
            Err(ParserError::ParseFace { line: 3, .. })
        ));
        assert!(matches!(
            parse_face(&["1/1/1/1", "2", "3"], 3),
            Err(ParserError::ParseFace { line: 3, .. })
        ));
        assert!(matches!(
            parse_face(&["1", "b", "3"], 3),
            Err(ParserError::ParseInt { line: 3, .. })
        ));

        Ok(())
    }

    #[test]
    fn test_parse_triplet() -> Result<(), ParseIntError> {
        assert_eq!(parse_triplet("1")?, Some([Some(1), None, None]));
        assert_eq!(parse_triplet("1/3")?, Some([Some(1), Some(3), None]));
        assert_eq!(parse_triplet("1/2/3")?, Some([Some(1), Some(2), Some(3)]));
        assert_eq!(parse_triplet("1//3")?, Some([Some(1), None, Some(3)]));
        assert_eq!(parse_triplet("-1/-2/-3")?, Some([Some(-1), Some(-2), Some(-3)]));
        assert_eq!(parse_triplet("1/2/3/4")?, None);

        Ok(())
    }

    #[test]
    fn test_parse_model() -> Result<(), ParserError> {
        let text = "\
# a single textured quad
o quad
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0   # trailing comment
vt 0 0
vt 1
vn 0 0 1

f 1/1/1 2/2/1 3/2/1 4/1/1
f -4 -3 -2
";
        let model = parse_str(text, &ReaderConfig::default())?;

        assert_eq!(model.vertex_count(), 4);
        assert_eq!(model.texture_vertices, vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
        assert_eq!(model.normals, vec![Vec3::new(0.0, 0.0, 1.0)]);
        assert_eq!(model.polygon_count(), 2);
        assert_eq!(model.polygons[0].texture_vertex_indices, vec![0, 1, 1, 0]);
        assert_eq!(model.polygons[0].normal_indices, vec![0, 0, 0, 0]);
        assert_eq!(model.polygons[1].vertex_indices, vec![0, 1, 2]);

        Ok(())
    }

    #[test]
    fn test_parse_model_reports_line() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\n\nf 1 2 4\n";

        let err = parse_str(text, &ReaderConfig::default()).unwrap_err();

        assert!(matches!(
            err,
            ParserError::IndexOutOfRange {
                line: 5,
                index: 4,
                len: 3,
                ..
            }
        ));
        assert!(err.to_string().starts_with("Line 5:"));
    }
}

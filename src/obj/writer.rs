use std::io::{self, Write};

use mf_format::{FormatError, Model, Polygon};

use crate::config::WriterConfig;

#[derive(thiserror::Error, Debug)]
pub enum WriterError {
    #[error("Failed to write model: {0}")]
    Io(#[from] io::Error),
    #[error("Model is inconsistent: {0}")]
    Format(#[from] FormatError),
}

/// Writes `model` as Wavefront OBJ. Indices are written 1-based.
pub fn write<W: Write>(model: &Model, mut out: W, config: &WriterConfig) -> Result<(), WriterError> {
    model.validate()?;
    let precision = config.precision;

    if config.header {
        writeln!(out, "# meshform")?;
        writeln!(
            out,
            "# {} vertices, {} texture vertices, {} normals, {} polygons",
            model.vertex_count(),
            model.texture_vertices.len(),
            model.normals.len(),
            model.polygon_count()
        )?;
    }

    for v in &model.vertices {
        writeln!(out, "v {:.*} {:.*} {:.*}", precision, v.x(), precision, v.y(), precision, v.z())?;
    }
    for vt in &model.texture_vertices {
        writeln!(out, "vt {:.*} {:.*}", precision, vt.x(), precision, vt.y())?;
    }
    for vn in &model.normals {
        writeln!(out, "vn {:.*} {:.*} {:.*}", precision, vn.x(), precision, vn.y(), precision, vn.z())?;
    }
    for polygon in &model.polygons {
        write_face(&mut out, polygon)?;
    }

    out.flush()?;
    Ok(())
}

pub fn write_string(model: &Model, config: &WriterConfig) -> Result<String, WriterError> {
    let mut buffer = Vec::new();
    write(model, &mut buffer, config)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_face<W: Write>(out: &mut W, polygon: &Polygon) -> io::Result<()> {
    write!(out, "f")?;

    for (i, vert_i) in polygon.vertex_indices.iter().enumerate() {
        let uv_i = polygon.texture_vertex_indices.get(i);
        let normal_i = polygon.normal_indices.get(i);

        match (uv_i, normal_i) {
            (Some(uv_i), Some(normal_i)) => write!(out, " {}/{}/{}", vert_i + 1, uv_i + 1, normal_i + 1)?,
            (Some(uv_i), None) => write!(out, " {}/{}", vert_i + 1, uv_i + 1)?,
            (None, Some(normal_i)) => write!(out, " {}//{}", vert_i + 1, normal_i + 1)?,
            (None, None) => write!(out, " {}", vert_i + 1)?,
        }
    }

    writeln!(out)
}

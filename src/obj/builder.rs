use lattice::{Vec2, Vec3};
use log::debug;
use mf_format::{Model, Polygon};

use super::parser::ParserError;

/// One `v/vt/vn` element of a face, with the raw (1-based or negative)
/// indices as written in the file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ObjFaceIndex {
    pub(crate) vert_i: i64,
    pub(crate) uv_i: Option<i64>,
    pub(crate) normal_i: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ObjFace {
    pub(crate) face_i: Vec<ObjFaceIndex>,
}

#[derive(Debug, Default)]
pub(crate) struct ObjModelBuilder {
    pub(crate) model: Model,
}

impl ObjModelBuilder {
    pub(crate) fn push_vertex(&mut self, position: Vec3) {
        self.model.vertices.push(position);
    }

    pub(crate) fn push_uv(&mut self, uv: Vec2) {
        self.model.texture_vertices.push(uv);
    }

    pub(crate) fn push_normal(&mut self, normal: Vec3) {
        self.model.normals.push(normal);
    }

    /// Resolves the face against the lists read so far and stores it.
    pub(crate) fn push_face(&mut self, line: usize, face: ObjFace) -> Result<(), ParserError> {
        let count = face.face_i.len();
        let with_uv = face.face_i.iter().filter(|x| x.uv_i.is_some()).count();
        let with_normal = face.face_i.iter().filter(|x| x.normal_i.is_some()).count();

        if with_uv != 0 && with_uv != count {
            return Err(ParserError::InconsistentFace {
                line,
                kind: "texture vertex",
            });
        }
        if with_normal != 0 && with_normal != count {
            return Err(ParserError::InconsistentFace {
                line,
                kind: "normal",
            });
        }

        let mut polygon = Polygon::default();
        for index in &face.face_i {
            polygon.vertex_indices.push(Self::resolve(
                line,
                "vertex",
                index.vert_i,
                self.model.vertices.len(),
            )?);

            if let Some(uv_i) = index.uv_i {
                polygon.texture_vertex_indices.push(Self::resolve(
                    line,
                    "texture vertex",
                    uv_i,
                    self.model.texture_vertices.len(),
                )?);
            }

            if let Some(normal_i) = index.normal_i {
                polygon.normal_indices.push(Self::resolve(
                    line,
                    "normal",
                    normal_i,
                    self.model.normals.len(),
                )?);
            }
        }

        debug!("Face {:?}", polygon.vertex_indices);
        self.model.polygons.push(polygon);
        Ok(())
    }

    // 1-based from the front, negative from the back, zero is never valid
    fn resolve(line: usize, kind: &'static str, index: i64, len: usize) -> Result<usize, ParserError> {
        let resolved = if index > 0 {
            usize::try_from(index - 1).ok()
        } else if index < 0 {
            usize::try_from(index.unsigned_abs())
                .ok()
                .and_then(|back| len.checked_sub(back))
        } else {
            None
        };

        match resolved {
            Some(idx) if idx < len => Ok(idx),
            _ => Err(ParserError::IndexOutOfRange {
                line,
                kind,
                index,
                len,
            }),
        }
    }

    pub(crate) fn build_model(self) -> Model {
        self.model
    }
}

use crate::error::{FormatError, Result};
use lattice::{Vec2, Vec3, VertexBuffer};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One face. Index lists are 0-based; the texture and normal lists are either
/// empty or as long as `vertex_indices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertex_indices: Vec<usize>,
    pub texture_vertex_indices: Vec<usize>,
    pub normal_indices: Vec<usize>,
}

impl Polygon {
    pub fn new(vertex_indices: Vec<usize>) -> Self {
        Self {
            vertex_indices,
            ..Default::default()
        }
    }

    pub fn has_texture_vertices(&self) -> bool {
        !self.texture_vertex_indices.is_empty()
    }

    pub fn has_normals(&self) -> bool {
        !self.normal_indices.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub vertices: Vec<Vec3>,
    pub texture_vertices: Vec<Vec2>,
    pub normals: Vec<Vec3>,
    pub polygons: Vec<Polygon>,
}

impl Model {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Checks that every polygon has at least three vertices, that its
    /// texture and normal lists are empty or match the vertex list, and that
    /// it only references existing entries.
    pub fn validate(&self) -> Result<()> {
        for (polygon_idx, polygon) in self.polygons.iter().enumerate() {
            let expected = polygon.vertex_indices.len();
            if expected < 3 {
                return Err(FormatError::DegeneratePolygon {
                    polygon: polygon_idx,
                    found: expected,
                });
            }

            let attributes = [
                ("texture vertex", polygon.texture_vertex_indices.len()),
                ("normal", polygon.normal_indices.len()),
            ];
            for (kind, found) in attributes {
                if found != 0 && found != expected {
                    return Err(FormatError::MismatchedIndices {
                        polygon: polygon_idx,
                        kind,
                        found,
                        expected,
                    });
                }
            }

            let lists: [(&'static str, &[usize], usize); 3] = [
                ("vertex", polygon.vertex_indices.as_slice(), self.vertices.len()),
                (
                    "texture vertex",
                    polygon.texture_vertex_indices.as_slice(),
                    self.texture_vertices.len(),
                ),
                ("normal", polygon.normal_indices.as_slice(), self.normals.len()),
            ];

            for (kind, indices, len) in lists {
                if let Some(&index) = indices.iter().find(|&&index| index >= len) {
                    return Err(FormatError::DanglingIndex {
                        polygon: polygon_idx,
                        kind,
                        index,
                        len,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let model = bincode::deserialize::<Model>(&bytes)?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Model::from_bytes(data)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self)?)
    }
}

impl VertexBuffer for Model {
    fn vertices_mut(&mut self) -> &mut [Vec3] {
        &mut self.vertices
    }
}

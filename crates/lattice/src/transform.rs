use std::{fmt, str::FromStr};

use crate::{
    angle::ToAngle,
    error::MathError,
    mat4::Mat4,
    vector::Vec3,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl FromStr for Axis {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            other => Err(MathError::InvalidArgument(format!(
                "unknown axis '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// Anything holding an ordered, index-addressable list of positions.
pub trait VertexBuffer {
    fn vertices_mut(&mut self) -> &mut [Vec3];
}

impl VertexBuffer for [Vec3] {
    fn vertices_mut(&mut self) -> &mut [Vec3] {
        self
    }
}

impl VertexBuffer for Vec<Vec3> {
    fn vertices_mut(&mut self) -> &mut [Vec3] {
        self.as_mut_slice()
    }
}

/// Accumulates a sequence of affine operations into a single 4x4 matrix.
///
/// Every operation right-multiplies the accumulated matrix (`M = M * P`), so
/// an operation takes effect in the frame set up by the calls before it:
///
/// ```
/// use lattice::{AffineTransform, Vec3};
///
/// let mut transform = AffineTransform::new();
/// transform.scale_by_ratio(2.0).translation(1.0, 2.0, 3.0);
///
/// assert_eq!(
///     transform.apply_to_vector(&Vec3::new(1.0, 1.0, 1.0)),
///     Vec3::new(4.0, 6.0, 8.0)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AffineTransform {
    matrix: Mat4,
}

impl AffineTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    fn push(&mut self, operation: Mat4) -> &mut Self {
        self.matrix = self.matrix * operation;
        self
    }

    /// Rotates about the X axis. `angle` is in degrees.
    pub fn rotation_x(&mut self, angle: f32) -> &mut Self {
        self.push(Mat4::rotation_x(angle.deg()))
    }

    /// Rotates about the Y axis. `angle` is in degrees.
    pub fn rotation_y(&mut self, angle: f32) -> &mut Self {
        self.push(Mat4::rotation_y(angle.deg()))
    }

    /// Rotates about the Z axis. `angle` is in degrees.
    pub fn rotation_z(&mut self, angle: f32) -> &mut Self {
        self.push(Mat4::rotation_z(angle.deg()))
    }

    pub fn rotate(&mut self, axis: Axis, angle: f32) -> &mut Self {
        match axis {
            Axis::X => self.rotation_x(angle),
            Axis::Y => self.rotation_y(angle),
            Axis::Z => self.rotation_z(angle),
        }
    }

    pub fn translation(&mut self, tx: f32, ty: f32, tz: f32) -> &mut Self {
        self.push(Mat4::translation(&Vec3::new(tx, ty, tz)))
    }

    pub fn translation_by_vector(&mut self, offset: &Vec3) -> &mut Self {
        self.push(Mat4::translation(offset))
    }

    pub fn translation_by_x(&mut self, tx: f32) -> &mut Self {
        self.translation(tx, 0.0, 0.0)
    }

    pub fn translation_by_y(&mut self, ty: f32) -> &mut Self {
        self.translation(0.0, ty, 0.0)
    }

    pub fn translation_by_z(&mut self, tz: f32) -> &mut Self {
        self.translation(0.0, 0.0, tz)
    }

    pub fn translate(&mut self, axis: Axis, distance: f32) -> &mut Self {
        match axis {
            Axis::X => self.translation_by_x(distance),
            Axis::Y => self.translation_by_y(distance),
            Axis::Z => self.translation_by_z(distance),
        }
    }

    /// Zero and negative factors are accepted and produce a degenerate or
    /// mirrored map respectively.
    pub fn scaling(&mut self, sx: f32, sy: f32, sz: f32) -> &mut Self {
        self.push(Mat4::scaling(&Vec3::new(sx, sy, sz)))
    }

    pub fn scaling_by_x(&mut self, sx: f32) -> &mut Self {
        self.scaling(sx, 1.0, 1.0)
    }

    pub fn scaling_by_y(&mut self, sy: f32) -> &mut Self {
        self.scaling(1.0, sy, 1.0)
    }

    pub fn scaling_by_z(&mut self, sz: f32) -> &mut Self {
        self.scaling(1.0, 1.0, sz)
    }

    pub fn scale_by_ratio(&mut self, ratio: f32) -> &mut Self {
        self.scaling(ratio, ratio, ratio)
    }

    pub fn scale_by_vector(&mut self, factors: &Vec3) -> &mut Self {
        self.push(Mat4::scaling(factors))
    }

    pub fn scale(&mut self, axis: Axis, ratio: f32) -> &mut Self {
        match axis {
            Axis::X => self.scaling_by_x(ratio),
            Axis::Y => self.scaling_by_y(ratio),
            Axis::Z => self.scaling_by_z(ratio),
        }
    }

    /// Appends `other` to this transform in place.
    pub fn apply(&mut self, other: &AffineTransform) -> &mut Self {
        self.push(other.matrix)
    }

    /// Returns `self` followed by `other` as a new transform. Neither operand
    /// changes.
    pub fn combination(&self, other: &AffineTransform) -> AffineTransform {
        Self::from_matrix(self.matrix * other.matrix)
    }

    /// Snapshot of the current state. Later calls on `self` do not affect it.
    pub fn build(&self) -> AffineTransform {
        self.clone()
    }

    pub fn reset(&mut self) -> &mut Self {
        self.matrix.make_identity();
        self
    }

    pub fn apply_to_vector(&self, vector: &Vec3) -> Vec3 {
        self.matrix.transform_point(vector)
    }

    /// Rewrites every vertex of `mesh` with [`Self::apply_to_vector`].
    ///
    /// Only positions are touched. Normals are not re-orthonormalized.
    pub fn apply_to_model<M>(&self, mesh: &mut M)
    where
        M: VertexBuffer + ?Sized,
    {
        for vertex in mesh.vertices_mut() {
            *vertex = self.apply_to_vector(vertex);
        }
    }

    /// True when the linear part collapses space onto a plane or lower.
    pub fn is_degenerate(&self) -> bool {
        crate::scalar::is_near_zero(self.matrix.linear_part().determinant())
    }
}

impl From<Mat4> for AffineTransform {
    fn from(matrix: Mat4) -> Self {
        Self::from_matrix(matrix)
    }
}

impl fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}

use crate::{angle::Angle, mat3::Mat3, matn::MatN, vector::Vec3};

pub type Mat4 = MatN<4>;

impl Mat4 {
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        r0c0: f32, r0c1: f32, r0c2: f32, r0c3: f32,
        r1c0: f32, r1c1: f32, r1c2: f32, r1c3: f32,
        r2c0: f32, r2c1: f32, r2c2: f32, r2c3: f32,
        r3c0: f32, r3c1: f32, r3c2: f32, r3c3: f32,
    ) -> Self {
        Self::from_data([
            [r0c0, r0c1, r0c2, r0c3],
            [r1c0, r1c1, r1c2, r1c3],
            [r2c0, r2c1, r2c2, r2c3],
            [r3c0, r3c1, r3c2, r3c3],
        ])
    }

    /// Identity with the last column set to `(offset, 1)`.
    pub fn translation(offset: &Vec3) -> Self {
        let [x, y, z] = offset.components();
        let mut matrix = Self::identity();
        matrix.data[0][3] = x;
        matrix.data[1][3] = y;
        matrix.data[2][3] = z;
        matrix
    }

    /// Diagonal `(sx, sy, sz, 1)`. Zero and negative factors are kept as is.
    pub fn scaling(factors: &Vec3) -> Self {
        let [x, y, z] = factors.components();
        let mut matrix = Self::identity();
        matrix.data[0][0] = x;
        matrix.data[1][1] = y;
        matrix.data[2][2] = z;
        matrix
    }

    #[rustfmt::skip]
    pub fn rotation_x(angle: Angle) -> Self {
        let (sin, cos) = angle.sin_cos();

        Self::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, cos, -sin, 0.0,
            0.0, sin, cos, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    #[rustfmt::skip]
    pub fn rotation_y(angle: Angle) -> Self {
        let (sin, cos) = angle.sin_cos();

        Self::new(
            cos, 0.0, sin, 0.0,
            0.0, 1.0, 0.0, 0.0,
            -sin, 0.0, cos, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    #[rustfmt::skip]
    pub fn rotation_z(angle: Angle) -> Self {
        let (sin, cos) = angle.sin_cos();

        Self::new(
            cos, -sin, 0.0, 0.0,
            sin, cos, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Upper-left 3x3 block, i.e. the map without its translation.
    pub fn linear_part(&self) -> Mat3 {
        let mut matrix = Mat3::zero();
        for (row, source) in matrix.data.iter_mut().zip(self.data.iter()) {
            row.copy_from_slice(&source[..3]);
        }
        matrix
    }

    /// Multiplies `(point, 1)` and demotes the product back to 3D.
    ///
    /// The result is divided by the resulting `w` only when `w` is neither
    /// exactly `0` nor exactly `1`. Values merely close to those (say
    /// `1 + 1e-7`) still divide.
    #[allow(clippy::float_cmp)]
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let product = *self * point.extend(1.0);
        let w = product.w();

        if w != 0.0 && w != 1.0 {
            product.xyz().map(|value| value / w)
        } else {
            product.xyz()
        }
    }
}

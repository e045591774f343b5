use crate::matn::MatN;

pub type Mat3 = MatN<3>;

impl Mat3 {
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        r0c0: f32, r0c1: f32, r0c2: f32,
        r1c0: f32, r1c1: f32, r1c2: f32,
        r2c0: f32, r2c1: f32, r2c2: f32,
    ) -> Self {
        Self::from_data([
            [r0c0, r0c1, r0c2],
            [r1c0, r1c1, r1c2],
            [r2c0, r2c1, r2c2],
        ])
    }

    /// Zero for a singular map, negative when the map mirrors space.
    pub fn determinant(&self) -> f32 {
        let m = &self.data;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }
}

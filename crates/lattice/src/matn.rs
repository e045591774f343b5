use crate::matrix::Matrix;

pub type MatN<const SIDE: usize> = Matrix<SIDE, SIDE>;

impl<const SIDE: usize> MatN<SIDE> {
    pub fn identity() -> Self {
        let mut matrix = Self::zero();
        matrix.make_identity();
        matrix
    }

    pub fn make_identity(&mut self) {
        for (row_idx, row) in self.data.iter_mut().enumerate() {
            for (col_idx, value) in row.iter_mut().enumerate() {
                *value = if row_idx == col_idx { 1.0 } else { 0.0 };
            }
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl<const SIDE: usize> Default for MatN<SIDE> {
    fn default() -> Self {
        Self::identity()
    }
}

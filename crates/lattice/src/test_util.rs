use std::fmt;

use crate::matrix::Matrix;

#[derive(Debug, Clone)]
pub struct MatrixCmp<T> {
    error_margin: T,
}

impl MatrixCmp<f32> {
    pub const DEFAULT: Self = Self { error_margin: 1e-4 };

    pub fn eq_margin<const R: usize, const C: usize>(
        &self,
        mat_one: &Matrix<R, C>,
        mat_two: &Matrix<R, C>,
        error_margin: f32,
    ) {
        for row_idx in 0..R {
            for col_idx in 0..C {
                let (v1, v2) = (mat_one.data[row_idx][col_idx], mat_two.data[row_idx][col_idx]);
                let diff_abs = (v1 - v2).abs();

                assert!(
                    diff_abs <= error_margin,
                    "is: {:?} should: {:?} (+- {:?}) @ ({}, {})",
                    v1,
                    v2,
                    error_margin,
                    row_idx,
                    col_idx
                );
            }
        }
    }

    pub fn eq<const R: usize, const C: usize>(&self, mat_one: &Matrix<R, C>, mat_two: &Matrix<R, C>) {
        self.eq_margin(mat_one, mat_two, self.error_margin)
    }

    pub fn eq_scalar<T>(&self, is: T, should: T)
    where
        T: Into<f64> + Copy + fmt::Debug,
    {
        let diff_abs = (is.into() - should.into()).abs();

        assert!(
            diff_abs <= f64::from(self.error_margin),
            "is: {:?} should: {:?} (+- {:?})",
            is,
            should,
            self.error_margin
        );
    }
}

impl Default for MatrixCmp<f32> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

use std::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{
    error::{MathError, Result},
    scalar::{is_near_zero, EQUALITY_TOLERANCE},
};

/// Dense `R`x`C` grid of `f32`, stored row by row.
///
/// Vectors are column matrices (see [`crate::Vec3`]), so matrix-matrix and
/// matrix-vector products share the same implementation.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Matrix<const R: usize, const C: usize> {
    pub(crate) data: [[f32; C]; R],
}

impl<const R: usize, const C: usize> Matrix<R, C> {
    pub const fn from_data(data: [[f32; C]; R]) -> Self {
        Self { data }
    }

    pub const fn zero() -> Self {
        Self::from_data([[0.0; C]; R])
    }

    /// Builds a matrix from a grid of rows.
    ///
    /// Fails with [`MathError::InvalidArgument`] unless there are exactly `R`
    /// rows holding exactly `C` values each.
    pub fn from_rows<Row: AsRef<[f32]>>(rows: &[Row]) -> Result<Self> {
        if rows.len() != R {
            return Err(MathError::InvalidArgument(format!(
                "expected {} rows, got {}",
                R,
                rows.len()
            )));
        }

        let mut matrix = Self::zero();
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != C {
                return Err(MathError::InvalidArgument(format!(
                    "row {} must have {} values, got {}",
                    row_idx,
                    C,
                    row.len()
                )));
            }
            matrix.data[row_idx].copy_from_slice(row);
        }

        Ok(matrix)
    }

    pub const fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    pub fn rows(&self) -> &[[f32; C]; R] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        Self::check_index(row, col)?;
        Ok(self.data[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        Self::check_index(row, col)?;
        self.data[row][col] = value;
        Ok(())
    }

    fn check_index(row: usize, col: usize) -> Result<()> {
        if row >= R || col >= C {
            return Err(MathError::IndexOutOfRange {
                row,
                col,
                rows: R,
                cols: C,
            });
        }
        Ok(())
    }

    pub fn make_zero(&mut self) {
        self.data = [[0.0; C]; R];
    }

    pub fn transpose(&self) -> Matrix<C, R> {
        let mut matrix = Matrix::<C, R>::zero();

        for row_idx in 0..R {
            for col_idx in 0..C {
                matrix.data[col_idx][row_idx] = self.data[row_idx][col_idx];
            }
        }

        matrix
    }

    /// Standard product: `result[i][j] = Σ_k self[i][k] * rhs[k][j]`.
    pub fn multiply<const K: usize>(&self, rhs: &Matrix<C, K>) -> Matrix<R, K> {
        let mut matrix = Matrix::<R, K>::zero();

        for row_idx in 0..R {
            for col_idx in 0..K {
                let mut value = 0.0;
                for idx in 0..C {
                    value += self.data[row_idx][idx] * rhs.data[idx][col_idx];
                }
                matrix.data[row_idx][col_idx] = value;
            }
        }

        matrix
    }

    /// Elementwise sum, also available as `+`.
    pub fn plus(&self, rhs: &Self) -> Self {
        self.zip_map(rhs, |lhs, rhs| lhs + rhs)
    }

    /// Elementwise difference, also available as `-`.
    pub fn subtract(&self, rhs: &Self) -> Self {
        self.zip_map(rhs, |lhs, rhs| lhs - rhs)
    }

    /// Multiplies every element by `factor`, also available as `* f32`.
    pub fn scale(&self, factor: f32) -> Self {
        self.map(|value| value * factor)
    }

    /// Divides every element by `divisor`.
    ///
    /// Fails with [`MathError::DivideByZero`] when `|divisor|` is below
    /// [`EPSILON`](crate::scalar::EPSILON).
    pub fn divide(&self, divisor: f32) -> Result<Self> {
        if is_near_zero(divisor) {
            return Err(MathError::DivideByZero(divisor));
        }

        Ok(self.map(|value| value / divisor))
    }

    pub fn approx_eq_margin(&self, other: &Self, margin: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(lhs, rhs)| (lhs - rhs).abs() <= margin)
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_margin(other, EQUALITY_TOLERANCE)
    }

    pub(crate) fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        let mut matrix = *self;
        for value in matrix.data.iter_mut().flatten() {
            *value = f(*value);
        }
        matrix
    }

    pub(crate) fn zip_map<F>(&self, rhs: &Self, mut f: F) -> Self
    where
        F: FnMut(f32, f32) -> f32,
    {
        let mut matrix = *self;
        for (value, rhs) in matrix
            .data
            .iter_mut()
            .flatten()
            .zip(rhs.data.iter().flatten())
        {
            *value = f(*value, *rhs);
        }
        matrix
    }
}

impl<const R: usize, const C: usize> fmt::Debug for Matrix<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &self.shape())
            .field("data", &self.data)
            .finish()
    }
}

impl<const R: usize, const C: usize> fmt::Display for Matrix<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        for (row_idx, row) in self.data.iter().enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (col_idx, value) in row.iter().enumerate() {
                if col_idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:>10.*}", precision, value)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl<const R: usize, const C: usize> PartialEq<Self> for Matrix<R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl<const R: usize, const C: usize> From<[[f32; C]; R]> for Matrix<R, C> {
    fn from(data: [[f32; C]; R]) -> Self {
        Self::from_data(data)
    }
}

impl<const R: usize, const C: usize> From<Matrix<R, C>> for [[f32; C]; R] {
    fn from(value: Matrix<R, C>) -> Self {
        value.data
    }
}

impl<const R: usize, const C: usize> Add for Matrix<R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(&rhs)
    }
}

impl<const R: usize, const C: usize> AddAssign for Matrix<R, C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const R: usize, const C: usize> Sub for Matrix<R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl<const R: usize, const C: usize> SubAssign for Matrix<R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const R: usize, const SHARED: usize, const RC: usize> Mul<Matrix<SHARED, RC>>
    for Matrix<R, SHARED>
{
    type Output = Matrix<R, RC>;

    fn mul(self, rhs: Matrix<SHARED, RC>) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<'a, 'b, const R: usize, const SHARED: usize, const RC: usize> Mul<&'a Matrix<SHARED, RC>>
    for &'b Matrix<R, SHARED>
{
    type Output = Matrix<R, RC>;

    fn mul(self, rhs: &'a Matrix<SHARED, RC>) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<const R: usize, const C: usize> Mul<f32> for Matrix<R, C> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl<const R: usize, const C: usize> MulAssign<f32> for Matrix<R, C> {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl<const R: usize, const C: usize> Neg for Matrix<R, C> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|value| -value)
    }
}

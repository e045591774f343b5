use crate::{
    error::{MathError, Result},
    matrix::Matrix,
    scalar::{is_near_zero, EPSILON},
};

pub type RowVector<const C: usize> = Matrix<1, C>;
pub type ColVector<const R: usize> = Matrix<R, 1>;

pub type Vec2 = ColVector<2>;
pub type Vec3 = ColVector<3>;
pub type Vec4 = ColVector<4>;

pub struct VecLen0 {}
pub struct VecLen1 {}
pub struct VecLen2 {}
pub struct VecLen3 {}

pub struct Greater;
pub trait VecLenCmp<T> {
    type Cmp;
}

macro_rules! impl_vec_len_gt {
    ( $($vec:ty => $( $len:ty )+  ;)+ ) => {
        $($(
            impl VecLenCmp<$len> for $vec {
                type Cmp = Greater;
            }
        )+)+
    };
}

impl_vec_len_gt! {
    Vec2 => VecLen0 VecLen1;
    Vec3 => VecLen0 VecLen1 VecLen2;
    Vec4 => VecLen0 VecLen1 VecLen2 VecLen3;
}

macro_rules! impl_vec_component {
    ( $( $idx:literal => $len:ty, $get:ident, $set:ident, $unit:ident ;)+ ) => {
        impl<const R: usize> ColVector<R> {
            $(
                pub fn $get(&self) -> f32
                where
                    Self: VecLenCmp<$len, Cmp = Greater>,
                {
                    self.data[$idx][0]
                }

                pub fn $set(&mut self, value: f32)
                where
                    Self: VecLenCmp<$len, Cmp = Greater>,
                {
                    self.data[$idx][0] = value;
                }

                pub fn $unit() -> Self
                where
                    Self: VecLenCmp<$len, Cmp = Greater>,
                {
                    let mut zero = Self::zero();
                    zero.data[$idx][0] = 1.0;
                    zero
                }
            )+
        }
    };
}

impl_vec_component! {
    0 => VecLen0, x, set_x, unit_x;
    1 => VecLen1, y, set_y, unit_y;
    2 => VecLen2, z, set_z, unit_z;
    3 => VecLen3, w, set_w, unit_w;
}

impl<const R: usize> ColVector<R> {
    pub fn components(&self) -> [f32; R] {
        let mut components = [0.0; R];
        for (component, row) in components.iter_mut().zip(self.data.iter()) {
            *component = row[0];
        }
        components
    }

    pub fn dot(&self, rhs: &Self) -> f32 {
        self.data
            .iter()
            .zip(rhs.data.iter())
            .map(|(lhs, rhs)| lhs[0] * rhs[0])
            .sum()
    }

    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean norm; `0.0` for the zero vector.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// Fails with [`MathError::InvalidOperation`] when the length is below
    /// [`EPSILON`].
    pub fn normalize(&self) -> Result<Self> {
        let length = self.length();
        if length < EPSILON {
            return Err(MathError::InvalidOperation(
                "cannot normalize a zero-length vector",
            ));
        }
        Ok(self.map(|value| value / length))
    }

    /// Like [`normalize`](Self::normalize), but a degenerate vector is
    /// returned unchanged instead of failing.
    pub fn normalize_safe(&self) -> Self {
        self.normalize().unwrap_or(*self)
    }
}

impl<const R: usize> From<[f32; R]> for ColVector<R> {
    fn from(components: [f32; R]) -> Self {
        let mut vector = Self::zero();
        for (row, component) in vector.data.iter_mut().zip(components) {
            row[0] = component;
        }
        vector
    }
}

impl<const R: usize> From<ColVector<R>> for [f32; R] {
    fn from(vector: ColVector<R>) -> Self {
        vector.components()
    }
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self::from_data([[x], [y]])
    }
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_data([[x], [y], [z]])
    }

    /// Right-handed cross product.
    pub fn cross(&self, rhs: &Self) -> Self {
        let [a1, a2, a3] = self.components();
        let [b1, b2, b3] = rhs.components();

        Self::new(a2 * b3 - a3 * b2, a3 * b1 - a1 * b3, a1 * b2 - a2 * b1)
    }

    /// Lifts the vector into homogeneous coordinates with the given `w`.
    pub const fn extend(&self, w: f32) -> Vec4 {
        Vec4::new(self.data[0][0], self.data[1][0], self.data[2][0], w)
    }
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_data([[x], [y], [z], [w]])
    }

    /// Drops `w` without dividing.
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.data[0][0], self.data[1][0], self.data[2][0])
    }

    /// Homogeneous divide: `(x/w, y/w, z/w)`.
    ///
    /// Fails with [`MathError::InvalidOperation`] when `|w|` is below
    /// [`EPSILON`].
    pub fn to_vec3(&self) -> Result<Vec3> {
        let w = self.w();
        if is_near_zero(w) {
            return Err(MathError::InvalidOperation(
                "cannot convert a point at infinity (w = 0) to 3D",
            ));
        }
        Ok(self.xyz().map(|value| value / w))
    }

    /// Like [`to_vec3`](Self::to_vec3), but returns the unscaled XYZ
    /// components when `w` is near zero.
    pub fn to_vec3_safe(&self) -> Vec3 {
        self.to_vec3().unwrap_or_else(|_| self.xyz())
    }
}

mod angle;
mod error;
mod mat3;
mod mat4;
mod matn;
mod matrix;
pub mod scalar;
mod transform;
mod vector;

#[cfg(feature = "serde-serialize")]
mod serde;

#[cfg(test)]
mod test_util;

pub use crate::angle::{Angle, ToAngle};
pub use crate::error::{MathError, Result};
pub use crate::mat3::Mat3;
pub use crate::mat4::Mat4;
pub use crate::matn::MatN;
pub use crate::matrix::Matrix;
pub use crate::transform::{AffineTransform, Axis, VertexBuffer};
pub use crate::vector::{ColVector, RowVector, Vec2, Vec3, Vec4};

pub mod prelude {
    pub use crate::angle::{Angle, ToAngle};
    pub use crate::mat3::Mat3;
    pub use crate::mat4::Mat4;
    pub use crate::transform::{AffineTransform, Axis, VertexBuffer};
    pub use crate::vector::{Vec2, Vec3, Vec4};
}

mod error;
mod model;

pub use crate::error::{FormatError, Result};
pub use crate::model::{Model, Polygon};

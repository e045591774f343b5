use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, MathError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Index ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("Division by zero (divisor: {0:e})")]
    DivideByZero(f32),
    #[error("Invalid operation: {0}")]
    InvalidOperation(&'static str),
}

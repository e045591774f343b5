use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, FormatError>;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Serialization Error: {0}")]
    SerializationError(#[from] Box<bincode::ErrorKind>),
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Polygon {polygon} references missing {kind} {index} (have {len})")]
    DanglingIndex {
        polygon: usize,
        kind: &'static str,
        index: usize,
        len: usize,
    },
    #[error("Polygon {polygon} has {found} vertices, at least 3 are needed")]
    DegeneratePolygon { polygon: usize, found: usize },
    #[error("Polygon {polygon} has {found} {kind} indices for {expected} vertices")]
    MismatchedIndices {
        polygon: usize,
        kind: &'static str,
        found: usize,
        expected: usize,
    },
}

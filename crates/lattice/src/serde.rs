use std::fmt;

use serde::{
    de::{Error, SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::matrix::Matrix;

/// Matrices serialize as a flat row-major sequence of `R * C` floats.
impl<const R: usize, const C: usize> Serialize for Matrix<R, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(R * C))?;
        for element in self.data.iter().flatten() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, const R: usize, const C: usize> Deserialize<'de> for Matrix<R, C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(MatrixVisitor::<R, C>)
    }
}

struct MatrixVisitor<const R: usize, const C: usize>;

impl<'de, const R: usize, const C: usize> Visitor<'de> for MatrixVisitor<R, C> {
    type Value = Matrix<R, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a {}x{} matrix as {} floats", R, C, R * C)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let size_expected = R * C;

        if let Some(size_hint) = seq.size_hint() {
            if size_hint != size_expected {
                return Err(A::Error::invalid_length(size_hint, &self));
            }
        }

        let mut matrix = Matrix::<R, C>::zero();
        for (idx, value) in matrix.data.iter_mut().flatten().enumerate() {
            *value = seq
                .next_element::<f32>()?
                .ok_or_else(|| A::Error::invalid_length(idx, &self))?;
        }

        if seq.next_element::<f32>()?.is_some() {
            return Err(A::Error::invalid_length(size_expected + 1, &self));
        }

        Ok(matrix)
    }
}

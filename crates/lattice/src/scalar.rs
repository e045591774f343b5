//! Thresholds shared by every fallible operation in the crate.

/// Divisors, lengths and homogeneous `w` components with a magnitude below
/// this value are treated as zero.
pub const EPSILON: f32 = 1e-10;

/// Elementwise tolerance used when comparing matrices and vectors for equality.
pub const EQUALITY_TOLERANCE: f32 = 1e-10;

/// Returns `true` if `value` is too small to divide by.
#[inline]
pub fn is_near_zero(value: f32) -> bool {
    value.abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_zero_threshold() {
        assert!(is_near_zero(0.0));
        assert!(is_near_zero(-1e-11));
        assert!(!is_near_zero(1e-9));
        assert!(!is_near_zero(-1.0));
    }
}

/// Euclidean length `sqrt(x² + y² + z²)`.
///
/// Zero for the zero vector; `inf` when squaring overflows.
#[inline(always)]
pub fn length(x: f32, y: f32, z: f32) -> f32 {
    (x * x + y * y + z * z).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_pythagorean() {
        assert_eq!(length(3.0, 4.0, 0.0), 5.0);
        assert_eq!(length(2.0, 3.0, 6.0), 7.0);
    }

    #[test]
    fn test_length_zero() {
        assert_eq!(length(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_length_sign_independent() {
        assert_eq!(length(-3.0, -4.0, 0.0), length(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_length_overflow_is_inf() {
        assert_eq!(length(f32::MAX, 0.0, 0.0), f32::INFINITY);
    }
}

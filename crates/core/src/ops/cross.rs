//! Dot and cross products.

/// Dot product of `(x1, y1, z1)` and `(x2, y2, z2)`.
#[inline(always)]
pub fn dot(x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) -> f32 {
    x1 * x2 + y1 * y2 + z1 * z2
}

/// Right-handed cross product `a × b`, returned as `(x, y, z)`.
///
/// Accepts any input, including the zero vector (which yields the zero
/// vector). Never fails.
#[inline(always)]
pub fn cross(x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) -> (f32, f32, f32) {
    (y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - y1 * x2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_right_handed() {
        assert_eq!(cross(1.0, 0.0, 0.0, 0.0, 1.0, 0.0), (0.0, 0.0, 1.0));
        assert_eq!(cross(0.0, 1.0, 0.0, 1.0, 0.0, 0.0), (0.0, 0.0, -1.0));
    }

    #[test]
    fn test_cross_known_value() {
        // (1,2,3) × (4,5,6) = (-3, 6, -3)
        assert_eq!(cross(1.0, 2.0, 3.0, 4.0, 5.0, 6.0), (-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_cross_with_zero_vector() {
        let (x, y, z) = cross(0.0, 0.0, 0.0, 7.0, -2.0, 3.5);
        assert_eq!((x.abs(), y.abs(), z.abs()), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_dot_known_value() {
        assert_eq!(dot(1.0, 2.0, 3.0, 4.0, 5.0, 6.0), 32.0);
        assert_eq!(dot(1.0, 0.0, 0.0, 0.0, 1.0, 0.0), 0.0);
    }
}

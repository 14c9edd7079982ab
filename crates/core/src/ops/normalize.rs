use super::{divide, length};

/// Scale `(x, y, z)` to unit length in place.
///
/// Divides by [`length()`] with no special case for the zero vector, which
/// therefore becomes `(nan, nan, nan)`.
#[inline(always)]
pub fn normalize(x: &mut f32, y: &mut f32, z: &mut f32) {
    let len = length(*x, *y, *z);
    divide(x, y, z, len);
}

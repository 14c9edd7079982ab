/// Divide `x`, `y` and `z` by `divisor` in place.
///
/// There is no zero guard. A zero divisor turns non-zero components into
/// `±inf` and zero components into `nan`, exactly as IEEE-754 division does.
#[inline(always)]
pub fn divide(x: &mut f32, y: &mut f32, z: &mut f32, divisor: f32) {
    *x /= divisor;
    *y /= divisor;
    *z /= divisor;
}

use device_vec3_core::ops::{self, AngleMode};
use device_vec3_core::Vec3;

use crate::error::Vec3ErrorCode;
use crate::helpers::require_outputs;

/// Write the cross product `(x1, y1, z1) × (x2, y2, z2)` to `x`, `y`, `z`.
///
/// # Returns
/// - `Vec3ErrorCode::Ok` (0) on success
/// - `Vec3ErrorCode::NullPointer` (1) if any output is null; nothing is written
///
/// # Safety
/// `x`, `y` and `z` must be valid for writes. They must not alias each other.
#[no_mangle]
pub unsafe extern "C" fn vec3_cross_prod(
    x: *mut f32,
    y: *mut f32,
    z: *mut f32,
    x1: f32,
    y1: f32,
    z1: f32,
    x2: f32,
    y2: f32,
    z2: f32,
) -> Vec3ErrorCode {
    if let Err(code) = require_outputs(x, y, z) {
        return code;
    }

    let (cx, cy, cz) = ops::cross(x1, y1, z1, x2, y2, z2);
    unsafe {
        *x = cx;
        *y = cy;
        *z = cz;
    }
    Vec3ErrorCode::Ok
}

/// Divide `x`, `y`, `z` by `divisor` in place.
///
/// A zero divisor is not an error: components become `inf`/`nan`.
///
/// # Safety
/// `x`, `y` and `z` must be valid for reads and writes and must not alias.
#[no_mangle]
pub unsafe extern "C" fn vec3_div(
    x: *mut f32,
    y: *mut f32,
    z: *mut f32,
    divisor: f32,
) -> Vec3ErrorCode {
    if let Err(code) = require_outputs(x, y, z) {
        return code;
    }

    let (mut vx, mut vy, mut vz) = unsafe { (*x, *y, *z) };
    ops::divide(&mut vx, &mut vy, &mut vz, divisor);
    unsafe {
        *x = vx;
        *y = vy;
        *z = vz;
    }
    Vec3ErrorCode::Ok
}

/// Euclidean length of `(x, y, z)`.
#[no_mangle]
pub extern "C" fn vec3_length(x: f32, y: f32, z: f32) -> f32 {
    ops::length(x, y, z)
}

/// Normalize `x`, `y`, `z` in place.
///
/// The zero vector becomes `(nan, nan, nan)`; this is not an error.
///
/// # Safety
/// `x`, `y` and `z` must be valid for reads and writes and must not alias.
#[no_mangle]
pub unsafe extern "C" fn vec3_normalize(x: *mut f32, y: *mut f32, z: *mut f32) -> Vec3ErrorCode {
    if let Err(code) = require_outputs(x, y, z) {
        return code;
    }

    let (mut vx, mut vy, mut vz) = unsafe { (*x, *y, *z) };
    ops::normalize(&mut vx, &mut vy, &mut vz);
    unsafe {
        *x = vx;
        *y = vy;
        *z = vz;
    }
    Vec3ErrorCode::Ok
}

/// Angle in radians between two vectors, in `[0, π]`.
#[no_mangle]
pub extern "C" fn vec3_angle_between(x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) -> f32 {
    ops::angle_between(Vec3::new(x1, y1, z1), Vec3::new(x2, y2, z2))
}

/// Angle in radians with the legacy guard: returns `0` when `|dot| <= 1e-10`.
///
/// Perpendicular vectors therefore report `0`, not π/2. Provided for step
/// functions that must reproduce results of older device code.
#[no_mangle]
pub extern "C" fn vec3_angle_between_legacy(
    x1: f32,
    y1: f32,
    z1: f32,
    x2: f32,
    y2: f32,
    z2: f32,
) -> f32 {
    ops::angle_between_legacy(
        Vec3::new(x1, y1, z1),
        Vec3::new(x2, y2, z2),
        AngleMode::LEGACY_EPSILON,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{vec3_clear_last_error, vec3_get_last_error_code};
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};
    use std::ptr::{self, addr_of_mut};

    #[test]
    fn test_cross_prod_writes_outputs() {
        let (mut x, mut y, mut z) = (0.0, 0.0, 0.0);
        let code = unsafe {
            vec3_cross_prod(
                addr_of_mut!(x),
                addr_of_mut!(y),
                addr_of_mut!(z),
                1.0,
                2.0,
                3.0,
                4.0,
                5.0,
                6.0,
            )
        };
        assert_eq!(code, Vec3ErrorCode::Ok);
        assert_eq!((x, y, z), (-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_cross_prod_null_output() {
        vec3_clear_last_error();
        let (mut x, mut y) = (7.0, 7.0);
        let code = unsafe {
            vec3_cross_prod(
                addr_of_mut!(x),
                addr_of_mut!(y),
                ptr::null_mut(),
                1.0,
                0.0,
                0.0,
                0.0,
                1.0,
                0.0,
            )
        };
        assert_eq!(code, Vec3ErrorCode::NullPointer);
        assert_eq!(vec3_get_last_error_code(), Vec3ErrorCode::NullPointer);
        // Nothing written on failure
        assert_eq!((x, y), (7.0, 7.0));
    }

    #[test]
    fn test_div_by_zero_is_ok() {
        let (mut x, mut y, mut z) = (1.0_f32, -1.0_f32, 0.0_f32);
        let code = unsafe { vec3_div(addr_of_mut!(x), addr_of_mut!(y), addr_of_mut!(z), 0.0) };
        assert_eq!(code, Vec3ErrorCode::Ok);
        assert_eq!(x, f32::INFINITY);
        assert_eq!(y, f32::NEG_INFINITY);
        assert!(z.is_nan());
    }

    #[test]
    fn test_normalize() {
        let (mut x, mut y, mut z) = (0.0, 3.0, 4.0);
        let code = unsafe { vec3_normalize(addr_of_mut!(x), addr_of_mut!(y), addr_of_mut!(z)) };
        assert_eq!(code, Vec3ErrorCode::Ok);
        assert_abs_diff_eq!(vec3_length(x, y, z), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(y, 0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let (mut x, mut y, mut z) = (0.0_f32, 0.0_f32, 0.0_f32);
        let code = unsafe { vec3_normalize(addr_of_mut!(x), addr_of_mut!(y), addr_of_mut!(z)) };
        assert_eq!(code, Vec3ErrorCode::Ok);
        assert!(x.is_nan() && y.is_nan() && z.is_nan());
    }

    #[test]
    fn test_normalize_null_output() {
        let mut y = 1.0;
        let mut z = 1.0;
        let code = unsafe { vec3_normalize(ptr::null_mut(), addr_of_mut!(y), addr_of_mut!(z)) };
        assert_eq!(code, Vec3ErrorCode::NullPointer);
    }

    #[test]
    fn test_angles() {
        assert_eq!(vec3_angle_between(1.0, 0.0, 0.0, 1.0, 0.0, 0.0), 0.0);
        assert_abs_diff_eq!(vec3_angle_between(1.0, 0.0, 0.0, -1.0, 0.0, 0.0), PI, epsilon = 1e-6);
        assert_abs_diff_eq!(
            vec3_angle_between(1.0, 0.0, 0.0, 0.0, 1.0, 0.0),
            FRAC_PI_2,
            epsilon = 1e-6
        );
        assert_eq!(vec3_angle_between_legacy(1.0, 0.0, 0.0, 0.0, 1.0, 0.0), 0.0);
    }
}

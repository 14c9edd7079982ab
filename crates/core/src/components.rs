//! Device-style component API
//!
//! Agent-stepping frameworks usually hand each agent function its variables as
//! separate scalars and expect results written back through references. These
//! wrappers keep that calling convention so step functions can call the
//! kernels without building a [`Vec3`](crate::Vec3) first.
//!
//! `get_angle_between_vec` keeps the legacy epsilon guard so existing step
//! functions produce identical results. New code should prefer
//! [`vec3_angle_between`].

use crate::ops::{self, AngleMode};
use crate::Vec3;

/// Write `(x1, y1, z1) × (x2, y2, z2)` into `x`, `y`, `z`.
#[inline(always)]
pub fn vec3_cross_prod(
    x: &mut f32,
    y: &mut f32,
    z: &mut f32,
    x1: f32,
    y1: f32,
    z1: f32,
    x2: f32,
    y2: f32,
    z2: f32,
) {
    (*x, *y, *z) = ops::cross(x1, y1, z1, x2, y2, z2);
}

/// Divide `x`, `y`, `z` by `divisor` in place. No zero guard.
pub use crate::ops::divide::divide as vec3_div;
/// Euclidean length of `(x, y, z)`.
pub use crate::ops::length::length as vec3_length;
/// Normalize `x`, `y`, `z` in place. The zero vector becomes `nan`.
pub use crate::ops::normalize::normalize as vec3_normalize;

/// Exact angle in radians between two vectors.
#[inline(always)]
pub fn vec3_angle_between(x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) -> f32 {
    ops::angle_between(Vec3::new(x1, y1, z1), Vec3::new(x2, y2, z2))
}

/// Angle in radians with the legacy `|dot| > 1e-10` guard.
///
/// Returns `0` for perpendicular vectors.
#[inline(always)]
pub fn get_angle_between_vec(x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) -> f32 {
    ops::angle_between_legacy(
        Vec3::new(x1, y1, z1),
        Vec3::new(x2, y2, z2),
        AngleMode::LEGACY_EPSILON,
    )
}

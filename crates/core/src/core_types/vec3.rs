//! Plain-data 3D vector for per-agent kernels.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Div, DivAssign, Mul, Neg};

use crate::ops;

/// 3D vector of single-precision components.
///
/// Three fields, no heap, `Copy`. The layout is `#[repr(C)]` so a slice of
/// agent vectors has the same memory layout as a packed `[f32; 3]` array and
/// can be handed to native callers unchanged.
///
/// In-place operations ([`Vec3::divide`], [`Vec3::normalize`]) mutate `self`;
/// queries ([`Vec3::length`], [`Vec3::cross`], [`Vec3::angle_between`]) return
/// a fresh value. Degenerate inputs follow IEEE-754: normalizing the zero
/// vector yields `nan` components rather than an error.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "gpu", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector along +X.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline(always)]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Components as an array `[x, y, z]`.
    #[inline(always)]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product `self · other`.
    #[inline(always)]
    pub fn dot(self, other: Self) -> f32 {
        ops::dot(self.x, self.y, self.z, other.x, other.y, other.z)
    }

    /// Right-handed cross product `self × other`.
    #[inline(always)]
    pub fn cross(self, other: Self) -> Self {
        let (x, y, z) = ops::cross(self.x, self.y, self.z, other.x, other.y, other.z);
        Self::new(x, y, z)
    }

    /// Euclidean length.
    #[inline(always)]
    pub fn length(self) -> f32 {
        ops::length(self.x, self.y, self.z)
    }

    /// Divide every component by `divisor` in place.
    ///
    /// A zero divisor produces `inf`/`nan` components.
    #[inline(always)]
    pub fn divide(&mut self, divisor: f32) {
        ops::divide(&mut self.x, &mut self.y, &mut self.z, divisor);
    }

    /// Scale to unit length in place.
    ///
    /// The zero vector becomes `(nan, nan, nan)`.
    #[inline(always)]
    pub fn normalize(&mut self) {
        ops::normalize(&mut self.x, &mut self.y, &mut self.z);
    }

    /// Unit-length copy of `self`; see [`Vec3::normalize`].
    #[inline(always)]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Unsigned angle to `other` in radians, `[0, π]`.
    ///
    /// Uses the exact `atan2(|a × b|, a · b)` form. For the guarded form kept
    /// for parity with older device code see [`crate::AngleMode::Legacy`].
    #[inline(always)]
    pub fn angle_between(self, other: Self) -> f32 {
        ops::angle_between(self, other)
    }

    /// True when every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// True when any component is `nan`.
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self::Output {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, divisor: f32) {
        self.divide(divisor);
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    fn div(mut self, divisor: f32) -> Self::Output {
        self.divide(divisor);
        self
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl From<Vector3<f32>> for Vec3 {
    fn from(v: Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3<f32> {
    fn from(v: Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

//! Angle between two vectors
//!
//! The angle is computed as `atan2(|a × b|, a · b)` rather than
//! `acos(a · b / (|a| |b|))`. The `atan2` form stays accurate near 0 and π,
//! needs no normalized inputs and has no domain error for degenerate vectors.
//!
//! Two variants exist:
//!
//! - [`AngleMode::Exact`] returns `atan2(det, dot)` for every input. This is
//!   well-defined at `dot == 0` and returns π/2 for perpendicular vectors.
//! - [`AngleMode::Legacy`] reproduces older device code that returned `0`
//!   whenever `|dot| <= ε`. That guard also fires for perpendicular vectors,
//!   so it reports `0` where the true angle is π/2. Use it only when results
//!   must match that code exactly.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::Vec3;

/// Selects how [`AngleConfig::angle_between`] treats a near-zero dot product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum AngleMode {
    /// `atan2(|a × b|, a · b)` with no guard.
    #[default]
    Exact,
    /// Return `0` when `|a · b| <= epsilon`, otherwise `atan2(|a × b|, a · b)`.
    Legacy { epsilon: f32 },
}

impl AngleMode {
    /// Guard threshold of the legacy device kernels.
    pub const LEGACY_EPSILON: f32 = 1e-10;

    /// Legacy mode with [`AngleMode::LEGACY_EPSILON`].
    pub const fn legacy() -> Self {
        Self::Legacy {
            epsilon: Self::LEGACY_EPSILON,
        }
    }
}

/// Angle computation settings, embeddable in a simulation config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AngleConfig {
    pub mode: AngleMode,
}

impl AngleConfig {
    pub fn new(mode: AngleMode) -> Self {
        if mode != AngleMode::Exact {
            debug!(?mode, "Angle computation using non-default mode");
        }
        Self { mode }
    }

    /// Angle between `a` and `b` in radians under the configured mode.
    #[inline]
    pub fn angle_between(&self, a: Vec3, b: Vec3) -> f32 {
        match self.mode {
            AngleMode::Exact => angle_between(a, b),
            AngleMode::Legacy { epsilon } => angle_between_legacy(a, b, epsilon),
        }
    }
}

/// Unsigned angle between `a` and `b` in radians, in `[0, π]`.
///
/// Inputs need not be unit length; the result is scale invariant. Two zero
/// vectors give `0`.
#[inline(always)]
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
    let dot = a.dot(b);
    let det = a.cross(b).length();
    det.atan2(dot)
}

/// Guarded angle: `0` when `|a · b| <= epsilon`, otherwise the same value as
/// [`angle_between`].
///
/// Returns `0` for perpendicular vectors. See the module docs.
#[inline(always)]
pub fn angle_between_legacy(a: Vec3, b: Vec3, epsilon: f32) -> f32 {
    let dot = a.dot(b);
    let det = a.cross(b).length();
    if dot.abs() > epsilon {
        return det.atan2(dot);
    }
    if det > 0.0 {
        trace!(dot, det, "Near-zero dot product, legacy guard returns 0");
    }
    0.0
}

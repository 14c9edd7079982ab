//! C ABI for the device vector kernels.
//!
//! Agent step functions written in C or C++ pass components by value and
//! receive in-place results through `float*` outputs, matching the reference
//! calling convention of the kernels in `device-vec3-core`.
//!
//! In-place functions return [`Vec3ErrorCode`]; the only failure is a null
//! output pointer. Numeric degeneracies (division by zero, normalizing the
//! zero vector) are not errors and come back as `inf`/`nan`.
//!
//! A C header (`DeviceVec3FFI.h`) is generated by the build script.

mod error;
mod helpers;
mod vector;

pub use error::{
    vec3_clear_last_error, vec3_get_last_error, vec3_get_last_error_code, Vec3ErrorCode,
};
pub use vector::{
    vec3_angle_between, vec3_angle_between_legacy, vec3_cross_prod, vec3_div, vec3_length,
    vec3_normalize,
};

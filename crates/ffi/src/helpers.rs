use crate::error::{with_last_error_mut, DefaultVec3Error, Vec3ErrorCode, Vec3FfiError};
use std::ffi::CString;
use tracing::warn;

/// Set the thread-local error message and code.
/// Accepts any type implementing `Vec3FfiError` trait.
pub(crate) fn set_last_error(error: &impl Vec3FfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl Vec3FfiError) -> Vec3ErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = Vec3ErrorCode::Ok;
    });
}

/// Reject null `x`/`y`/`z` output pointers, recording the first one found.
#[inline]
pub(crate) fn require_outputs(
    x: *const f32,
    y: *const f32,
    z: *const f32,
) -> Result<(), Vec3ErrorCode> {
    for (name, ptr) in [("x", x), ("y", y), ("z", z)] {
        if ptr.is_null() {
            warn!(param = name, "Null output pointer passed to vector function");
            return Err(track_error(&DefaultVec3Error::null_pointer(name)));
        }
    }
    Ok(())
}

use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// The vector kernels themselves never fail; numeric degeneracies come back
/// as `inf`/`nan`. The only failure at this boundary is a bad output pointer,
/// but errors still go through this trait so the code and message travel
/// together into thread-local storage.
///
/// # Example
/// ```rust,ignore
/// let err = DefaultVec3Error::null_pointer("x");
/// assert_eq!(err.code(), Vec3ErrorCode::NullPointer);
/// assert_eq!(err.msg(), "Parameter 'x' cannot be null");
/// ```
pub(crate) trait Vec3FfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> Vec3ErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `Vec3FfiError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultVec3Error {
    code: Vec3ErrorCode,
    msg: String,
}

impl DefaultVec3Error {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"x"`, `"z"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: Vec3ErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl Vec3FfiError for DefaultVec3Error {
    fn code(&self) -> Vec3ErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by the in-place vector functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vec3ErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where an output was required.
    NullPointer = 1,
}

impl From<DefaultVec3Error> for Vec3ErrorCode {
    fn from(error: DefaultVec3Error) -> Self {
        error.code
    }
}

thread_local! {
    /// Most recent FFI error on this thread (C string, error code).
    /// The CString is kept here so the pointer handed to C stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, Vec3ErrorCode)> = const { RefCell::new((None, Vec3ErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, Vec3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, Vec3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if no error has occurred since the last clear.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each device worker or host thread
/// sees only its own failures.
///
/// # Lifetime
/// The returned pointer is valid until the next failing call or
/// `vec3_clear_last_error` on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// if (vec3_normalize(&x, &y, nullptr) != Ok) {
///     const char* error = vec3_get_last_error();
///     if (error) {
///         printf("normalize failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn vec3_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `Vec3ErrorCode::Ok` (0) if no error has occurred since the last clear.
#[no_mangle]
pub extern "C" fn vec3_get_last_error_code() -> Vec3ErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

/// Reset this thread's last error to `Ok`.
///
/// Successful calls leave the last error untouched so the hot path never
/// writes thread-local storage; call this before a batch to start clean.
#[no_mangle]
pub extern "C" fn vec3_clear_last_error() {
    crate::helpers::clear_last_error();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::track_error;
    use std::ffi::CStr;

    #[test]
    fn test_null_pointer_message() {
        let err = DefaultVec3Error::null_pointer("y");
        assert_eq!(err.code(), Vec3ErrorCode::NullPointer);
        assert_eq!(err.msg(), "Parameter 'y' cannot be null");
        assert_eq!(Vec3ErrorCode::from(err), Vec3ErrorCode::NullPointer);
    }

    #[test]
    fn test_last_error_round_trip() {
        vec3_clear_last_error();
        assert!(vec3_get_last_error().is_null());
        assert_eq!(vec3_get_last_error_code(), Vec3ErrorCode::Ok);

        let code = track_error(&DefaultVec3Error::null_pointer("z"));
        assert_eq!(code, Vec3ErrorCode::NullPointer);
        assert_eq!(vec3_get_last_error_code(), Vec3ErrorCode::NullPointer);

        let msg = unsafe { CStr::from_ptr(vec3_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "Parameter 'z' cannot be null");

        vec3_clear_last_error();
        assert!(vec3_get_last_error().is_null());
    }

    #[test]
    fn test_last_error_is_per_thread() {
        track_error(&DefaultVec3Error::null_pointer("x"));
        let other = std::thread::spawn(|| vec3_get_last_error_code()).join().unwrap();
        assert_eq!(other, Vec3ErrorCode::Ok);
        assert_eq!(vec3_get_last_error_code(), Vec3ErrorCode::NullPointer);
    }
}

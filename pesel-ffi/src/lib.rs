#![allow(clippy::missing_safety_doc)]

use core::panic::UnwindSafe;
use pesel::PeselValidator;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ffi::{c_char, CStr, CString};
use std::sync::Arc;

pub mod native;

pub const ERR_INVALID_CONFIG: i64 = -6;
pub const ERR_PANIC: i64 = -7;

const PANIC_FALLBACK_MESSAGE: &str = "Rust panicked. No more information is available.";

pub type ValidatorPtr = Arc<PeselValidator>;

/// An error reported to the foreign caller: a negative code returned directly, and a
/// message written to `error_out`.
#[derive(Debug, PartialEq)]
pub struct FfiError {
    pub code: i64,
    pub message: String,
}

impl FfiError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FfiError {
            code: ERR_INVALID_CONFIG,
            message: message.into(),
        }
    }

    pub fn panic(message: impl Into<String>) -> Self {
        FfiError {
            code: ERR_PANIC,
            message: message.into(),
        }
    }
}

/// # Safety
///
/// The pointer passed in must be a valid cstr pointer.
pub unsafe fn read_json<T: DeserializeOwned>(raw_value: *const c_char) -> Result<T, FfiError> {
    let text = unsafe { CStr::from_ptr(raw_value) }.to_string_lossy();
    let jd = &mut serde_json::Deserializer::from_str(&text);

    serde_path_to_error::deserialize(jd).map_err(|e| {
        FfiError::invalid_config(format!(
            "Failed to deserialize JSON: {} at path: {}",
            e.inner(),
            e.path()
        ))
    })
}

/// Serializes `value` into a newly allocated C string, to be released with `free_string`.
pub fn write_json<T: Serialize>(value: &T) -> Result<*const c_char, FfiError> {
    let json = serde_json::to_string(value)
        .map_err(|e| FfiError::panic(format!("Failed to serialize JSON: {e}")))?;
    let c_string = CString::new(json)
        .map_err(|_| FfiError::panic("Serialized JSON contained a null byte"))?;
    Ok(c_string.into_raw())
}

/// Writes the message of `err` to `error_out` (when it isn't null) and returns its code.
pub fn report_error(err: FfiError, error_out: *mut *const c_char) -> i64 {
    // This code MUST NOT panic, since it is handling a panic.
    if !error_out.is_null() {
        let c_str = CString::new(err.message)
            .unwrap_or_else(|_| CString::new(PANIC_FALLBACK_MESSAGE).unwrap_or_default());
        unsafe {
            *error_out = c_str.into_raw();
        }
    }
    err.code
}

/// Runs `f` for a function that returns a status code or an id. Errors, caught panics
/// included, are reported through `error_out` and their negative code is returned.
pub fn handle_panic_code_return(
    error_out: *mut *const c_char,
    f: impl FnOnce() -> Result<i64, FfiError> + UnwindSafe,
) -> i64 {
    match catch_panic(f).and_then(|result| result) {
        Ok(code) => code,
        Err(err) => report_error(err, error_out),
    }
}

/// Runs `f` for a function that returns an owned C string. Errors, caught panics included,
/// are reported through `error_out` and `null` is returned.
pub fn handle_panic_ptr_return(
    error_out: *mut *const c_char,
    f: impl FnOnce() -> Result<*const c_char, FfiError> + UnwindSafe,
) -> *const c_char {
    match catch_panic(f).and_then(|result| result) {
        Ok(ptr) => ptr,
        Err(err) => {
            report_error(err, error_out);
            std::ptr::null()
        }
    }
}

pub fn catch_panic<R>(f: impl FnOnce() -> R + UnwindSafe) -> Result<R, FfiError> {
    std::panic::catch_unwind(f).map_err(|payload| {
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            string.to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            PANIC_FALLBACK_MESSAGE.to_string()
        };
        FfiError::panic(message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::validate::free_string;
    use pesel::ValidatorConfig;

    unsafe fn take_string(error_out: *const c_char) -> String {
        assert!(!error_out.is_null());
        unsafe {
            let message = CStr::from_ptr(error_out).to_string_lossy().into_owned();
            free_string(error_out);
            message
        }
    }

    #[test]
    fn panic_in_pointer_function_returns_null() {
        let mut error_out: *const c_char = std::ptr::null();
        let ptr = handle_panic_ptr_return(&mut error_out, || panic!("boom"));

        assert!(ptr.is_null());
        assert_eq!(unsafe { take_string(error_out) }, "boom");
    }

    #[test]
    fn error_in_pointer_function_returns_null() {
        let mut error_out: *const c_char = std::ptr::null();
        let ptr = handle_panic_ptr_return(&mut error_out, || {
            Err(FfiError::panic("Serialized JSON contained a null byte"))
        });

        assert!(ptr.is_null());
        assert_eq!(
            unsafe { take_string(error_out) },
            "Serialized JSON contained a null byte"
        );
    }

    #[test]
    fn panic_in_code_function_returns_panic_code() {
        let mut error_out: *const c_char = std::ptr::null();
        let code = handle_panic_code_return(&mut error_out, || panic!("{} failed", "validation"));

        assert_eq!(code, ERR_PANIC);
        assert_eq!(unsafe { take_string(error_out) }, "validation failed");
    }

    #[test]
    fn success_leaves_error_out_untouched() {
        let mut error_out: *const c_char = std::ptr::null();
        assert_eq!(handle_panic_code_return(&mut error_out, || Ok(42)), 42);
        assert!(error_out.is_null());
    }

    #[test]
    fn null_error_out_is_tolerated() {
        let code = handle_panic_code_return(std::ptr::null_mut(), || panic!("boom"));
        assert_eq!(code, ERR_PANIC);

        let code = report_error(FfiError::invalid_config("bad"), std::ptr::null_mut());
        assert_eq!(code, ERR_INVALID_CONFIG);
    }

    #[test]
    fn message_with_null_byte_falls_back() {
        let mut error_out: *const c_char = std::ptr::null();
        report_error(FfiError::panic("nul\0byte"), &mut error_out);
        assert_eq!(unsafe { take_string(error_out) }, PANIC_FALLBACK_MESSAGE);
    }

    #[test]
    fn read_json_reports_the_failing_path() {
        let raw = CString::new(r#"{"labels": {"service": 1}}"#).unwrap();
        let err = unsafe { read_json::<ValidatorConfig>(raw.as_ptr()) }.unwrap_err();

        assert_eq!(err.code, ERR_INVALID_CONFIG);
        assert!(err.message.contains("labels"), "{}", err.message);
    }

    #[test]
    fn write_json_round_trips_through_a_c_string() {
        let ptr = write_json(&pesel::validate("123")).unwrap();
        let json = unsafe { take_string(ptr) };
        assert!(json.starts_with(r#"{"valid":false,"pesel":"123""#), "{}", json);
    }
}

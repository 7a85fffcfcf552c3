use crate::{handle_panic_code_return, handle_panic_ptr_return, write_json, ValidatorPtr};
use pesel::{default_validator, PeselValidator};
use serde_json::Value;
use std::ffi::{c_char, CStr, CString};
use std::mem::ManuallyDrop;

/// Runs `f` with the validator behind `validator_id`, or the shared default one when the id is 0.
unsafe fn with_validator<R>(validator_id: i64, f: impl FnOnce(&PeselValidator) -> R) -> R {
    if validator_id == 0 {
        return f(default_validator());
    }
    // the caller keeps ownership, so the Arc must not be dropped here
    let validator =
        ManuallyDrop::new(unsafe { ValidatorPtr::from_raw(validator_id as usize as *const _) });
    f(&validator)
}

/// # Safety
///
/// This function dereferences `input` and `error_out` which are pointers to c_char.
/// The caller must ensure that the pointers are valid, and that `validator_id` is either
/// 0 or an id returned by `create_validator` that hasn't been deleted.
///
/// Thread Safety: This is safe to call simultaneously from multiple threads.
/// Return value: the JSON encoded validation result, to be released with `free_string`.
/// `null` if an error was reported through `error_out`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn validate_pesel(
    validator_id: i64,
    input: *const c_char,
    error_out: *mut *const c_char,
) -> *const c_char {
    handle_panic_ptr_return(error_out, || {
        let pesel = unsafe { CStr::from_ptr(input) }.to_string_lossy();
        let result = unsafe { with_validator(validator_id, |v| v.validate(&pesel)) };
        write_json(&result)
    })
}

/// Same as `validate_pesel`, but `value` is JSON text of any type. Only a JSON string is
/// validated as a PESEL, any other value (or text that isn't JSON at all) is reported as
/// not being a string.
///
/// # Safety
///
/// Same requirements as `validate_pesel`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn validate_pesel_json(
    validator_id: i64,
    value: *const c_char,
    error_out: *mut *const c_char,
) -> *const c_char {
    handle_panic_ptr_return(error_out, || {
        let raw = unsafe { CStr::from_ptr(value) }.to_string_lossy();
        let result = unsafe {
            with_validator(validator_id, |v| match serde_json::from_str::<Value>(&raw) {
                Ok(value) => v.validate_value(&value),
                // not JSON at all, echo the raw text
                Err(_) => v.reject_non_string(&*raw),
            })
        };
        write_json(&result)
    })
}

/// # Safety
///
/// Same requirements as `validate_pesel`.
///
/// Return value: 0 if the PESEL is valid, otherwise the negative code of the first failed check.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pesel_error_code(
    validator_id: i64,
    input: *const c_char,
    error_out: *mut *const c_char,
) -> i64 {
    handle_panic_code_return(error_out, || {
        let pesel = unsafe { CStr::from_ptr(input) }.to_string_lossy();
        let result = unsafe { with_validator(validator_id, |v| v.validate(&pesel)) };
        Ok(result.error().map(i64::from).unwrap_or(0))
    })
}

/// # Safety
///
/// `ptr` must be a string returned by this library, and must only be freed once.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_string(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(ptr as *mut c_char));
    }
}

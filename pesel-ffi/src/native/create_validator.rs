use crate::{handle_panic_code_return, read_json, ValidatorPtr};
use pesel::{PeselValidator, ValidatorConfig};
use std::ffi::c_char;
use std::sync::Arc;

/// # Safety
///
/// This function makes use of `read_json` which is unsafe as it dereferences a pointer to a c_char.
/// The caller must ensure that the pointer is valid and points to a valid JSON string.
///
/// Return value: a validator id (the address of the validator), or a negative error code.
/// The id must be released with `delete_validator`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn create_validator(
    json_config: *const c_char,
    error_out: *mut *const c_char,
) -> i64 {
    handle_panic_code_return(error_out, || {
        let config: ValidatorConfig = unsafe { read_json(json_config) }?;
        let validator: ValidatorPtr = Arc::new(PeselValidator::new(&config));
        Ok(Arc::into_raw(validator) as usize as i64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ERR_INVALID_CONFIG;
    use crate::native::delete_validator::delete_validator;
    use std::ffi::{CStr, CString};

    #[test]
    fn test_create_validator() {
        let config = CString::new(r#"{"labels": {"service": "forms"}}"#).unwrap();
        let mut error_out: *const c_char = std::ptr::null();

        unsafe {
            let validator_id = create_validator(config.as_ptr(), &mut error_out);
            assert!(validator_id > 0);
            assert!(error_out.is_null());
            delete_validator(validator_id);
        }
    }

    #[test]
    fn test_create_validator_invalid_config() {
        let config = CString::new(r#"{"labels": ["service"]}"#).unwrap();
        let mut error_out: *const c_char = std::ptr::null();

        unsafe {
            let result = create_validator(config.as_ptr(), &mut error_out);
            assert_eq!(result, ERR_INVALID_CONFIG);
            assert!(!error_out.is_null());

            let message = CStr::from_ptr(error_out).to_string_lossy().into_owned();
            assert!(message.contains("labels"), "{}", message);

            let _ = CString::from_raw(error_out as *mut c_char);
        }
    }
}

use crate::{catch_panic, ValidatorPtr};

/// # Safety
///
/// `validator_id` must come from `create_validator` and must not be used afterwards.
/// The default validator (id 0) is never released, deleting it does nothing.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn delete_validator(validator_id: i64) {
    if validator_id == 0 {
        return;
    }
    let _ = catch_panic(|| {
        let validator = unsafe { ValidatorPtr::from_raw(validator_id as usize as *const _) };
        drop(validator);
    });
}

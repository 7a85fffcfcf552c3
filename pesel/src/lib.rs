// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod birth_date;
mod checksum;
mod digits;
mod error;
mod gender;
mod observability;
mod result;
mod validator;

// This is the public API of the PESEL library
pub use birth_date::{decode_month_and_century, parse_birth_date};
pub use checksum::calc_control_digit;
pub use error::PeselError;
pub use gender::{extract_gender, Gender};
pub use observability::labels::Labels;
pub use result::{PeselDetails, ValidationResult};
pub use validator::{
    config::ValidatorConfig, default_validator, inspect, validate, validate_value, PeselValidator,
};

#[cfg(feature = "bench")]
pub use crate::digits::PeselDigits;

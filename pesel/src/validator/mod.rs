use crate::birth_date::parse_birth_date;
use crate::checksum::verify_control_digit;
use crate::digits::PeselDigits;
use crate::error::PeselError;
use crate::gender::Gender;
use crate::result::{PeselDetails, ValidationResult};
use crate::validator::config::ValidatorConfig;
use crate::validator::metrics::Metrics;
use lazy_static::lazy_static;
use serde_json::Value;

pub mod config;
pub mod metrics;


lazy_static! {
    static ref DEFAULT_VALIDATOR: PeselValidator = PeselValidator::default();
}

/// The shared validator behind [validate] and [validate_value], built on first use.
pub fn default_validator() -> &'static PeselValidator {
    &DEFAULT_VALIDATOR
}

/// Validates a PESEL with the default configuration.
pub fn validate(pesel: &str) -> ValidationResult {
    DEFAULT_VALIDATOR.validate(pesel)
}

/// Validates an untyped value, as received from a form or a foreign caller.
///
/// Only a JSON string is checked as a PESEL. Anything else is rejected with
/// [PeselError::NotAString], echoing the value's JSON text.
pub fn validate_value(value: &Value) -> ValidationResult {
    DEFAULT_VALIDATOR.validate_value(value)
}

/// Runs every check in order and stops at the first failure.
pub fn inspect(pesel: &str) -> Result<PeselDetails, PeselError> {
    let digits = PeselDigits::parse(pesel)?;
    verify_control_digit(&digits)?;

    let birth_date = parse_birth_date(
        digits.year_within_century(),
        digits.month_code(),
        digits.day(),
    )?;

    Ok(PeselDetails {
        birth_date,
        gender: Gender::from(&digits),
    })
}

/// Holds nothing but metric handles, so a single instance can be shared between threads.
pub struct PeselValidator {
    metrics: Metrics,
}

impl PeselValidator {
    pub fn new(config: &ValidatorConfig) -> Self {
        PeselValidator {
            metrics: Metrics::new(&config.labels),
        }
    }

    pub fn builder() -> ValidatorConfig {
        ValidatorConfig::new()
    }

    pub fn validate(&self, pesel: &str) -> ValidationResult {
        self.finish(pesel, inspect(pesel))
    }

    pub fn validate_value(&self, value: &Value) -> ValidationResult {
        match value {
            Value::String(pesel) => self.validate(pesel),
            other => self.reject_non_string(other.to_string()),
        }
    }

    /// Result for a value that never was text. `rendered` is echoed back as the PESEL.
    pub fn reject_non_string(&self, rendered: impl Into<String>) -> ValidationResult {
        self.finish(rendered, Err(PeselError::NotAString))
    }

    fn finish(
        &self,
        pesel: impl Into<String>,
        outcome: Result<PeselDetails, PeselError>,
    ) -> ValidationResult {
        self.metrics.record(&outcome);
        ValidationResult::new(pesel, outcome)
    }
}

impl Default for PeselValidator {
    fn default() -> Self {
        PeselValidator {
            metrics: Metrics::default(),
        }
    }
}

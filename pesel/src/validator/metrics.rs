use crate::error::PeselError;
use crate::observability::labels::{Labels, NO_LABEL};
use crate::result::PeselDetails;
use metrics::{counter, Counter};

pub struct Metrics {
    pub valid: Counter,
    pub invalid: Counter,
    pub not_a_string: Counter,
    pub invalid_format: Counter,
    pub invalid_control_digit: Counter,
    pub invalid_month: Counter,
    pub invalid_birth_date: Counter,
}

const VALIDATIONS: &str = "pesel.validations";
const VALIDATION_ERRORS: &str = "pesel.validation_errors";
const OUTCOME: &str = "outcome";
const ERROR: &str = "error";

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        let error_counter = |error: PeselError| {
            counter!(
                VALIDATION_ERRORS,
                labels.clone_with_labels(&[(ERROR, error.kind())])
            )
        };

        Metrics {
            valid: counter!(VALIDATIONS, labels.clone_with_labels(&[(OUTCOME, "valid")])),
            invalid: counter!(
                VALIDATIONS,
                labels.clone_with_labels(&[(OUTCOME, "invalid")])
            ),
            not_a_string: error_counter(PeselError::NotAString),
            invalid_format: error_counter(PeselError::InvalidFormat),
            invalid_control_digit: error_counter(PeselError::InvalidControlDigit),
            invalid_month: error_counter(PeselError::InvalidMonth),
            invalid_birth_date: error_counter(PeselError::InvalidBirthDate),
        }
    }

    pub fn record(&self, outcome: &Result<PeselDetails, PeselError>) {
        match outcome {
            Ok(_) => self.valid.increment(1),
            Err(error) => {
                self.invalid.increment(1);
                self.error_counter(*error).increment(1);
            }
        }
    }

    fn error_counter(&self, error: PeselError) -> &Counter {
        match error {
            PeselError::NotAString => &self.not_a_string,
            PeselError::InvalidFormat => &self.invalid_format,
            PeselError::InvalidControlDigit => &self.invalid_control_digit,
            PeselError::InvalidMonth => &self.invalid_month,
            PeselError::InvalidBirthDate => &self.invalid_birth_date,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::new(&NO_LABEL)
    }
}

use crate::error::PeselError;
use crate::gender::Gender;
use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// What a valid PESEL encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeselDetails {
    pub birth_date: NaiveDate,
    pub gender: Gender,
}

/// Outcome of validating a single PESEL.
///
/// Wraps the `Result` of the checks, so a valid result always carries a birth date
/// and a gender and never an error, and an invalid one carries only the error.
///
/// Serialized as `{"valid", "pesel", "error", "birth_date", "gender"}`. `error` is `null`
/// on success, `birth_date` and `gender` are left out on failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pesel: String,
    outcome: Result<PeselDetails, PeselError>,
}

impl ValidationResult {
    /// `pesel` is echoed back as given, whatever the outcome.
    pub fn new(pesel: impl Into<String>, outcome: Result<PeselDetails, PeselError>) -> Self {
        ValidationResult {
            pesel: pesel.into(),
            outcome,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn pesel(&self) -> &str {
        &self.pesel
    }

    pub fn error(&self) -> Option<PeselError> {
        self.outcome.err()
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.details().map(|d| d.birth_date)
    }

    pub fn gender(&self) -> Option<Gender> {
        self.details().map(|d| d.gender)
    }

    pub fn details(&self) -> Option<PeselDetails> {
        self.outcome.ok()
    }

    pub fn into_result(self) -> Result<PeselDetails, PeselError> {
        self.outcome
    }
}

impl From<ValidationResult> for Result<PeselDetails, PeselError> {
    fn from(result: ValidationResult) -> Self {
        result.outcome
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.is_valid() { 5 } else { 3 };
        let mut state = serializer.serialize_struct("ValidationResult", len)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("pesel", &self.pesel)?;
        state.serialize_field("error", &self.error())?;
        if let Ok(details) = &self.outcome {
            state.serialize_field("birth_date", &details.birth_date)?;
            state.serialize_field("gender", &details.gender)?;
        }
        state.end()
    }
}

use serde::{Serialize, Serializer};
use strum::IntoStaticStr;
use thiserror::Error;

/// Reasons a PESEL is rejected. Variants are listed in the order the checks run,
/// only the first failing check is ever reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum PeselError {
    /// The raw value handed over at the boundary was not text
    #[error("PESEL musi być łańcuchem znaków")]
    NotAString,

    /// Wrong length or a character that isn't an ASCII digit
    #[error("PESEL musi składać się z 11 cyfr")]
    InvalidFormat,

    #[error("Nieprawidłowa cyfra kontrolna")]
    InvalidControlDigit,

    /// The encoded month is outside every century range
    #[error("Nieprawidłowy miesiąc")]
    InvalidMonth,

    /// The month decodes, but the day doesn't exist in it (e.g. February 30th)
    #[error("Nieprawidłowa data urodzenia")]
    InvalidBirthDate,
}

impl PeselError {
    /// Stable snake_case name, used as a metric label value.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

// Callers render the message directly, so the error is written out as its text.
impl Serialize for PeselError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<PeselError> for i64 {
    fn from(value: PeselError) -> i64 {
        match value {
            PeselError::NotAString => -1,
            PeselError::InvalidFormat => -2,
            PeselError::InvalidControlDigit => -3,
            PeselError::InvalidMonth => -4,
            PeselError::InvalidBirthDate => -5,
        }
    }
}

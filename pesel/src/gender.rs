use crate::digits::PeselDigits;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Gender {
    #[serde(rename = "Mężczyzna")]
    #[strum(serialize = "Mężczyzna")]
    Male,
    #[serde(rename = "Kobieta")]
    #[strum(serialize = "Kobieta")]
    Female,
}

impl Gender {
    /// Odd digits are male, even digits female.
    pub fn from_digit(digit: u32) -> Self {
        if digit % 2 == 1 {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

impl From<&PeselDigits> for Gender {
    fn from(digits: &PeselDigits) -> Self {
        Gender::from_digit(digits.gender_digit())
    }
}

/// Reads the gender digit (the 10th) of a PESEL string.
///
/// Nothing else is validated, the input is expected to have passed the other checks.
pub fn extract_gender(pesel: &str) -> Option<Gender> {
    pesel
        .chars()
        .nth(9)
        .and_then(|c| if c.is_ascii_digit() { c.to_digit(10) } else { None })
        .map(Gender::from_digit)
}

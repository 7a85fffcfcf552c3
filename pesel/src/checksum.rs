use crate::digits::{PeselDigits, PESEL_LENGTH};
use crate::error::PeselError;

const WEIGHTS: [u32; PESEL_LENGTH - 1] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

/// Computes the control digit from the first 10 digits (values 0-9).
///
/// The digits beyond the tenth are ignored, fewer than ten digits are summed as-is.
pub fn control_digit<I>(digits: I) -> u32
where
    I: IntoIterator,
    I::Item: Into<u32>,
{
    // calculate A×1 + B×3 + C×7 + D×9 + E×1 + F×3 + G×7 + H×9 + I×1 + J×3
    let sum: u32 = digits
        .into_iter()
        .zip(WEIGHTS.iter())
        .map(|(d, w)| Into::<u32>::into(d) * w)
        .sum();

    // the last digit of (10 − last digit of the sum), so a sum ending in 0 gives 0
    (10 - (sum % 10)) % 10
}

/// Control digit for a 10 digit prefix, `None` unless the prefix is exactly 10 ASCII digits.
pub fn calc_control_digit(prefix: &str) -> Option<u32> {
    if prefix.len() != PESEL_LENGTH - 1 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(control_digit(prefix.bytes().map(|b| b - b'0')))
}

pub fn verify_control_digit(digits: &PeselDigits) -> Result<(), PeselError> {
    let expected = control_digit(digits.payload().iter().copied());
    if expected != digits.control_digit() {
        return Err(PeselError::InvalidControlDigit);
    }
    Ok(())
}

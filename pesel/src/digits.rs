use crate::error::PeselError;

pub const PESEL_LENGTH: usize = 11;

/// The 11 digits of a structurally valid PESEL, in order.
///
/// Layout: `YYMMDDZZZXQ` where `YY` is the year within the century, `MM` the
/// encoded month (carries the century), `DD` the day, `ZZZX` the serial number
/// whose last digit `X` gives the gender, and `Q` the control digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeselDigits([u8; PESEL_LENGTH]);

impl PeselDigits {
    /// Only exactly 11 ASCII digits are accepted. Any other character, including
    /// surrounding whitespace and non-ASCII digits, fails the check.
    pub fn parse(input: &str) -> Result<Self, PeselError> {
        // all-ASCII means the byte length is also the character count
        if input.len() != PESEL_LENGTH || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PeselError::InvalidFormat);
        }

        let mut digits = [0u8; PESEL_LENGTH];
        for (slot, byte) in digits.iter_mut().zip(input.bytes()) {
            *slot = byte - b'0';
        }
        Ok(PeselDigits(digits))
    }

    /// The 10 digits covered by the checksum.
    pub fn payload(&self) -> &[u8] {
        &self.0[..PESEL_LENGTH - 1]
    }

    pub fn control_digit(&self) -> u32 {
        self.0[10].into()
    }

    pub fn year_within_century(&self) -> u32 {
        self.pair(0)
    }

    pub fn month_code(&self) -> u32 {
        self.pair(2)
    }

    pub fn day(&self) -> u32 {
        self.pair(4)
    }

    /// The digit right before the control digit, its parity encodes gender.
    pub fn gender_digit(&self) -> u32 {
        self.0[9].into()
    }

    fn pair(&self, start: usize) -> u32 {
        u32::from(self.0[start]) * 10 + u32::from(self.0[start + 1])
    }
}

use crate::error::PeselError;
use chrono::NaiveDate;

/// Encoded month ranges, each mapping to the first year of a century.
/// The month offset is the start of the range minus one.
const CENTURIES: [(u32, i32); 5] = [(1, 1900), (21, 2000), (41, 2100), (61, 2200), (81, 1800)];

const MONTHS_PER_CENTURY: u32 = 12;

/// Splits an encoded month (1-99) into `(century_base, real_month)`.
///
/// Returns `None` when the code falls outside all five ranges.
pub fn decode_month_and_century(month_code: u32) -> Option<(i32, u32)> {
    CENTURIES
        .iter()
        .find(|(first, _)| (*first..*first + MONTHS_PER_CENTURY).contains(&month_code))
        .map(|(first, century_base)| (*century_base, month_code - first + 1))
}

pub fn parse_birth_date(
    year_within_century: u32,
    month_code: u32,
    day: u32,
) -> Result<NaiveDate, PeselError> {
    let (century_base, month) =
        decode_month_and_century(month_code).ok_or(PeselError::InvalidMonth)?;

    // year_within_century comes from two digits, it's always < 100
    let year = century_base + year_within_century as i32;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(PeselError::InvalidBirthDate)
}

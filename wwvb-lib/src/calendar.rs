use crate::{Error, Result};

/// Days elapsed through the end of each month in a non-leap year.
const CUMULATIVE_DAYS: [u32; 12] = [31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// Converts a 1-based day of year to a `(month, day)` pair, both 1-based.
///
/// # Errors
/// [`Error::InvalidDayOfYear`] for day 0 or a day past the end of the year
/// (365, or 366 when `is_leap_year`). The frame carries no checksum, so a
/// noisy day-of-year field can decode to any weight sum up to 465.
pub fn month_day(day_of_year: u32, is_leap_year: bool) -> Result<(u32, u32)> {
    let last = if is_leap_year { 366 } else { 365 };
    if day_of_year == 0 || day_of_year > last {
        return Err(Error::InvalidDayOfYear { day: day_of_year });
    }

    let mut prev = 0;
    for (month0, &days) in CUMULATIVE_DAYS.iter().enumerate() {
        // Leap years push every boundary after January out by one.
        let days = days + u32::from(is_leap_year && month0 > 0);
        if day_of_year <= days {
            return Ok((month0 as u32 + 1, day_of_year - prev));
        }
        prev = days;
    }
    unreachable!("day {day_of_year} is within {last}")
}

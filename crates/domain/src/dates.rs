// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::{Date, Duration, Month};

/// Computes the inclusive first/last day pair for a calendar month.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - The month number (1-12)
///
/// # Returns
///
/// * `Ok((first, last))` with the inclusive bounds of the month
/// * `Err(DomainError::InvalidMonth)` if the month number is out of range
///
/// # Errors
///
/// Returns an error if the month number is not between 1 and 12, or the
/// year is outside the representable calendar range.
pub fn month_range(year: i32, month: u8) -> Result<(Date, Date), DomainError> {
    let month_enum: Month = Month::try_from(month).map_err(|_| DomainError::InvalidMonth(month))?;

    let first: Date =
        Date::from_calendar_date(year, month_enum, 1).map_err(|e| DomainError::DateParse {
            date_string: format!("{year}-{month}"),
            reason: e.to_string(),
        })?;

    let next_first: Date = if month_enum == Month::December {
        Date::from_calendar_date(year + 1, Month::January, 1)
    } else {
        Date::from_calendar_date(year, month_enum.next(), 1)
    }
    .map_err(|e| DomainError::DateParse {
        date_string: format!("{year}-{month}"),
        reason: e.to_string(),
    })?;

    let last: Date = next_first
        .previous_day()
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: String::from("computing last day of month"),
        })?;

    Ok((first, last))
}

/// Computes the inclusive 7-day window starting at `start`.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the window end would
/// exceed the representable calendar range.
pub fn week_range(start: Date) -> Result<(Date, Date), DomainError> {
    let end: Date =
        start
            .checked_add(Duration::days(6))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: String::from("computing week window end"),
            })?;
    Ok((start, end))
}

/// Validates that a date range is not reversed.
///
/// # Errors
///
/// Returns `DomainError::InvalidDateRange` when `from` is after `to`.
pub const fn validate_date_range(from: Date, to: Date) -> Result<(), DomainError> {
    if from.to_julian_day() > to.to_julian_day() {
        return Err(DomainError::InvalidDateRange { from, to });
    }
    Ok(())
}

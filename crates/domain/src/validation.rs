// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::{Date, Month};

/// Validates a raw identifier string as a positive base-10 integer.
///
/// Parsing stops at the first non-digit character and leading zeros are
/// accepted ("00123" parses as 123). This mirrors the tolerant numeric
/// parsing the roster inherited from its form layer; callers relying on it
/// should not.
///
/// # Arguments
///
/// * `raw` - The raw identifier string
///
/// # Returns
///
/// * `Ok(i64)` with the parsed identifier
/// * `Err(DomainError::InvalidIdFormat)` if no leading digit run exists
/// * `Err(DomainError::InvalidIdValue)` if the parsed value is zero or negative
///
/// # Errors
///
/// Returns an error if the string does not start with an optionally signed
/// digit run, or parses to a non-positive value.
pub fn validate_numeric_id(raw: &str) -> Result<i64, DomainError> {
    let trimmed: &str = raw.trim_start();
    let (negative, unsigned): (bool, &str) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digit_len: usize = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 {
        return Err(DomainError::InvalidIdFormat(raw.to_string()));
    }

    let magnitude: i64 = unsigned[..digit_len]
        .parse::<i64>()
        .map_err(|_| DomainError::InvalidIdFormat(raw.to_string()))?;
    let value: i64 = if negative { -magnitude } else { magnitude };

    if value <= 0 {
        return Err(DomainError::InvalidIdValue(value));
    }
    Ok(value)
}

/// Validates a raw `YYYY-MM-DD` date string into a calendar date.
///
/// Single-digit month/day components are accepted ("2025-3-5").
/// Calendar-impossible dates (e.g. February 30) are rejected rather than
/// rolled forward into the next month.
///
/// # Arguments
///
/// * `raw` - The raw date string
///
/// # Returns
///
/// * `Ok(Date)` with the parsed date
/// * `Err(DomainError::DateParse)` if the string is unparsable or the date
///   does not exist on the calendar
///
/// # Errors
///
/// Returns an error if the string is not three dash-separated numeric
/// components forming a real calendar date.
pub fn validate_date_string(raw: &str) -> Result<Date, DomainError> {
    let date_parse_error = |reason: String| DomainError::DateParse {
        date_string: raw.to_string(),
        reason,
    };

    let parts: Vec<&str> = raw.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(date_parse_error(String::from(
            "expected YYYY-MM-DD with three components",
        )));
    }

    let year: i32 = parts[0]
        .parse::<i32>()
        .map_err(|e| date_parse_error(format!("invalid year component: {e}")))?;
    let month_number: u8 = parts[1]
        .parse::<u8>()
        .map_err(|e| date_parse_error(format!("invalid month component: {e}")))?;
    let day: u8 = parts[2]
        .parse::<u8>()
        .map_err(|e| date_parse_error(format!("invalid day component: {e}")))?;

    let month: Month =
        Month::try_from(month_number).map_err(|e| date_parse_error(e.to_string()))?;

    Date::from_calendar_date(year, month, day).map_err(|e| date_parse_error(e.to_string()))
}

/// Formats a calendar date as zero-padded `YYYY-MM-DD`.
///
/// Formatting uses the date's own year/month/day components. No timezone is
/// involved at any point, so the result never shifts by a day for processes
/// running in offset timezones.
#[must_use]
pub fn format_date_string(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Validates that every required key is present with a non-empty value.
///
/// A key counts as missing when it is absent from `params`, present with
/// `None`, or present with an empty string. Every missing key is reported,
/// not just the first.
///
/// # Arguments
///
/// * `params` - Key/value pairs as received from the request layer
/// * `required_keys` - The keys that must carry a value
///
/// # Returns
///
/// * `Ok(())` if all required keys are present
/// * `Err(DomainError::MissingParams)` listing every missing key
///
/// # Errors
///
/// Returns an error if any required key is missing or empty.
pub fn validate_required_params(
    params: &[(&str, Option<&str>)],
    required_keys: &[&str],
) -> Result<(), DomainError> {
    let missing: Vec<String> = required_keys
        .iter()
        .filter(|key| {
            !params
                .iter()
                .any(|(k, v)| k == *key && matches!(v, Some(s) if !s.is_empty()))
        })
        .map(|key| (*key).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::MissingParams { missing })
    }
}

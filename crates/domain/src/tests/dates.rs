// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, month_range, validate_date_range, week_range};
use time::{Date, Month};

#[test]
fn test_month_range_regular_month() {
    let (first, last): (Date, Date) = month_range(2025, 1).unwrap();
    assert_eq!(
        first,
        Date::from_calendar_date(2025, Month::January, 1).unwrap()
    );
    assert_eq!(
        last,
        Date::from_calendar_date(2025, Month::January, 31).unwrap()
    );
}

#[test]
fn test_month_range_february_leap_year() {
    let (_, last): (Date, Date) = month_range(2024, 2).unwrap();
    assert_eq!(
        last,
        Date::from_calendar_date(2024, Month::February, 29).unwrap()
    );
}

#[test]
fn test_month_range_february_common_year() {
    let (_, last): (Date, Date) = month_range(2025, 2).unwrap();
    assert_eq!(
        last,
        Date::from_calendar_date(2025, Month::February, 28).unwrap()
    );
}

#[test]
fn test_month_range_december_crosses_year_boundary() {
    let (first, last): (Date, Date) = month_range(2025, 12).unwrap();
    assert_eq!(
        first,
        Date::from_calendar_date(2025, Month::December, 1).unwrap()
    );
    assert_eq!(
        last,
        Date::from_calendar_date(2025, Month::December, 31).unwrap()
    );
}

#[test]
fn test_month_range_rejects_invalid_month() {
    assert_eq!(month_range(2025, 13), Err(DomainError::InvalidMonth(13)));
    assert_eq!(month_range(2025, 0), Err(DomainError::InvalidMonth(0)));
}

#[test]
fn test_week_range_spans_seven_days() {
    let start: Date = Date::from_calendar_date(2025, Month::January, 27).unwrap();
    let (from, to): (Date, Date) = week_range(start).unwrap();
    assert_eq!(from, start);
    assert_eq!(
        to,
        Date::from_calendar_date(2025, Month::February, 2).unwrap()
    );
}

#[test]
fn test_validate_date_range_accepts_ordered_bounds() {
    let from: Date = Date::from_calendar_date(2025, Month::January, 1).unwrap();
    let to: Date = Date::from_calendar_date(2025, Month::January, 31).unwrap();
    assert!(validate_date_range(from, to).is_ok());
}

#[test]
fn test_validate_date_range_accepts_single_day() {
    let day: Date = Date::from_calendar_date(2025, Month::January, 1).unwrap();
    assert!(validate_date_range(day, day).is_ok());
}

#[test]
fn test_validate_date_range_rejects_reversed_bounds() {
    let from: Date = Date::from_calendar_date(2025, Month::February, 1).unwrap();
    let to: Date = Date::from_calendar_date(2025, Month::January, 1).unwrap();
    assert_eq!(
        validate_date_range(from, to),
        Err(DomainError::InvalidDateRange { from, to })
    );
}

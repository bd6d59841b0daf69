// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier string could not be parsed as a number.
    InvalidIdFormat(String),
    /// An identifier parsed but is not a positive integer.
    InvalidIdValue(i64),
    /// Failed to parse a calendar date from a string.
    DateParse {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        reason: String,
    },
    /// One or more required parameters are missing.
    MissingParams {
        /// Every missing key, not just the first.
        missing: Vec<String>,
    },
    /// Instructor status string is not recognized.
    InvalidStatus(String),
    /// A date range has its bounds reversed.
    InvalidDateRange {
        /// The start of the range.
        from: Date,
        /// The end of the range.
        to: Date,
    },
    /// A month number outside 1-12.
    InvalidMonth(u8),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Department does not exist.
    DepartmentNotFound(i64),
    /// Shift type does not exist.
    ShiftTypeNotFound(i64),
    /// Instructor does not exist.
    InstructorNotFound(i64),
    /// Shift does not exist.
    ShiftNotFound(i64),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdFormat(raw) => {
                write!(f, "Identifier '{raw}' is not a number")
            }
            Self::InvalidIdValue(value) => {
                write!(f, "Identifier must be a positive integer, got {value}")
            }
            Self::DateParse {
                date_string,
                reason,
            } => {
                write!(f, "Failed to parse date '{date_string}': {reason}")
            }
            Self::MissingParams { missing } => {
                write!(f, "Missing required parameters: {}", missing.join(", "))
            }
            Self::InvalidStatus(raw) => write!(f, "Unknown instructor status: {raw}"),
            Self::InvalidDateRange { from, to } => {
                write!(f, "Invalid date range: {from} is after {to}")
            }
            Self::InvalidMonth(month) => {
                write!(f, "Invalid month: {month}. Must be between 1 and 12")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DepartmentNotFound(id) => write!(f, "Department {id} not found"),
            Self::ShiftTypeNotFound(id) => write!(f, "Shift type {id} not found"),
            Self::InstructorNotFound(id) => write!(f, "Instructor {id} not found"),
            Self::ShiftNotFound(id) => write!(f, "Shift {id} not found"),
        }
    }
}

impl std::error::Error for DomainError {}

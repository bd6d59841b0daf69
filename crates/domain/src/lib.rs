// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod dates;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use dates::{month_range, validate_date_range, week_range};
pub use error::DomainError;
pub use types::{
    Certification, Department, Instructor, InstructorCertification, InstructorStatus,
    NO_CERTIFICATION_SUMMARY, Shift, ShiftAssignment, ShiftType,
};
pub use validation::{
    format_date_string, validate_date_string, validate_numeric_id, validate_required_params,
};

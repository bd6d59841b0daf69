// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API layer for the Yukiyama duty roster.
//!
//! This crate wires validated operator input to the core session machine
//! and the persistence layer. It owns the API contract: the DTO shapes,
//! the error taxonomy, and the translation of domain/core/persistence
//! errors into it. Nothing here holds state between requests.

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
#![allow(clippy::multiple_crate_versions)]

pub mod conflicts;
pub mod edit_data;
pub mod eligibility;
mod error;
pub mod mutations;
pub mod reports;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    translate_core_error, translate_domain_error, translate_persistence_error, ApiError,
};
pub use request_response::{
    AssignedInstructorSummary, AvailableInstructor, ConflictInfo, ConflictingShiftInfo,
    CreateShiftRequest, CreateShiftResponse, DeleteShiftResponse, EditDataQuery, EditDataResponse,
    EditFormData, EditMode, FormattedShift, ReportDateRange, ReportSummary, ShiftDetail,
    ShiftReportResponse, ShiftStats, UpdateShiftRequest, UpdateShiftResponse,
};

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs for the API layer.
//!
//! These types define the API contract and are independent of domain types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw query parameters for the edit-data endpoint.
///
/// Every field arrives as an optional raw string; validation reports all
/// missing keys together before any parsing happens.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditDataQuery {
    /// The target calendar date as `YYYY-MM-DD`.
    pub date: Option<String>,
    /// The department whose slot is being edited.
    pub department_id: Option<String>,
    /// The duty type of the slot.
    pub shift_type_id: Option<String>,
}

/// Whether the queried slot already holds a persisted shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// The slot is occupied; the form edits the existing shift.
    Edit,
    /// The slot is empty; saving creates a new shift.
    Create,
}

/// The persisted shift occupying the queried slot, when one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDetail {
    /// Canonical shift ID.
    pub shift_id: i64,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    /// Owning department ID.
    pub department_id: i64,
    /// Duty type ID.
    pub shift_type_id: i64,
    /// Free-text description, if any.
    pub description: Option<String>,
    /// IDs of assigned instructors, ascending.
    pub assigned_instructor_ids: Vec<i64>,
}

/// One instructor row in the assignment picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableInstructor {
    /// Canonical instructor ID.
    pub instructor_id: i64,
    /// Display name ("last first").
    pub display_name: String,
    /// Kana display name, each part falling back to kanji when unrecorded.
    pub display_name_kana: String,
    /// Lifecycle status string (always `ACTIVE` for eligible rows).
    pub status: String,
    /// Comma-joined certification short names, or the no-certification
    /// sentinel.
    pub certification_summary: String,
    /// Whether this instructor is assigned to the shift being edited.
    pub is_assigned: bool,
    /// Whether this instructor is already on another shift the same day.
    pub has_conflict: bool,
}

/// The shift a conflicted instructor is already assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictingShiftInfo {
    /// Canonical shift ID.
    pub shift_id: i64,
    /// Display name of the shift's department.
    pub department_name: String,
    /// Display name of the shift's duty type.
    pub shift_type_name: String,
}

/// One conflict advisory: an eligible instructor already booked elsewhere
/// on the queried date, with one example shift as the witness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictInfo {
    /// The double-booked instructor.
    pub instructor_id: i64,
    /// The instructor's display name.
    pub instructor_name: String,
    /// The first shift found holding the conflicting assignment.
    pub conflicting_shift: ConflictingShiftInfo,
}

/// Pre-filled form values for the edit screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditFormData {
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    /// Department ID.
    pub department_id: i64,
    /// Duty type ID.
    pub shift_type_id: i64,
    /// Description text; empty when absent.
    pub description: String,
    /// Currently selected instructor IDs.
    pub selected_instructor_ids: Vec<i64>,
}

/// Everything the edit screen needs for one `(date, department, duty type)`
/// slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDataResponse {
    /// Edit vs create mode for the slot.
    pub mode: EditMode,
    /// The occupying shift in edit mode, `None` in create mode.
    pub shift: Option<ShiftDetail>,
    /// Eligible instructors with assignment and conflict flags.
    pub available_instructors: Vec<AvailableInstructor>,
    /// Conflict advisories for flagged instructors.
    pub conflicts: Vec<ConflictInfo>,
    /// Pre-filled form values.
    pub form_data: EditFormData,
}

/// Request body for creating a shift.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShiftRequest {
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    /// Owning department ID.
    pub department_id: i64,
    /// Duty type ID.
    pub shift_type_id: i64,
    /// Optional free-text description.
    pub description: Option<String>,
    /// The instructors to assign; at least one, no duplicates.
    pub assigned_instructor_ids: Vec<i64>,
    /// When true, same-day double bookings are accepted instead of being
    /// rejected as a rule violation.
    #[serde(default)]
    pub force: bool,
}

/// Request body for updating a shift.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShiftRequest {
    /// The new description; `None` clears it.
    pub description: Option<String>,
    /// The complete replacement assignment set.
    pub assigned_instructor_ids: Vec<i64>,
}

/// Response body after a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateShiftResponse {
    /// The canonical ID assigned to the new shift.
    pub shift_id: i64,
    /// A human-readable confirmation.
    pub message: String,
}

/// Response body after a successful update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateShiftResponse {
    /// A human-readable confirmation.
    pub message: String,
}

/// Response body after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteShiftResponse {
    /// A human-readable confirmation.
    pub message: String,
}

/// One assigned instructor inside a report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedInstructorSummary {
    /// Canonical instructor ID.
    pub instructor_id: i64,
    /// Display name ("last first").
    pub display_name: String,
}

/// Per-shift statistics in a report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftStats {
    /// Number of assigned instructors.
    pub assigned_count: usize,
    /// Whether the shift carries a non-empty description.
    pub has_notes: bool,
}

/// One shift formatted for the report surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedShift {
    /// Canonical shift ID.
    pub shift_id: i64,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    /// Department display name.
    pub department: String,
    /// Duty type display name.
    pub shift_type: String,
    /// Assigned instructors with display names.
    pub assigned_instructors: Vec<AssignedInstructorSummary>,
    /// Per-shift statistics.
    pub stats: ShiftStats,
    /// Free-text description, if any.
    pub description: Option<String>,
}

/// The inclusive date range a report covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDateRange {
    /// First day, `YYYY-MM-DD`.
    pub from: String,
    /// Last day, `YYYY-MM-DD`.
    pub to: String,
}

/// Aggregate statistics over a report's shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total number of shifts in range.
    pub total_shifts: usize,
    /// Total number of instructor assignments in range.
    pub total_assignments: usize,
    /// The inclusive range queried.
    pub date_range: ReportDateRange,
    /// Shift counts per department name, name-ordered.
    pub by_department: BTreeMap<String, usize>,
}

/// Response body for the shift report endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftReportResponse {
    /// Formatted shifts, date-ordered.
    pub shifts: Vec<FormattedShift>,
    /// Aggregate statistics.
    pub summary: ReportSummary,
}

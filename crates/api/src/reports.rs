// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date-range aggregation: formatted shift listings with summary statistics.

use crate::error::{translate_domain_error, translate_persistence_error, ApiError};
use crate::request_response::{
    AssignedInstructorSummary, FormattedShift, ReportDateRange, ReportSummary, ShiftReportResponse,
    ShiftStats,
};
use std::collections::BTreeMap;
use time::Date;
use yukiyama_roster_domain::{format_date_string, validate_date_range};
use yukiyama_roster_persistence::{AssignedInstructor, Persistence, ShiftWithAssignments};

/// Builds the shift report for an inclusive date range.
///
/// Shifts come back date-ordered; the summary counts shifts and
/// assignments and breaks shift counts down per department name.
///
/// # Errors
///
/// Returns `InvalidInput` when `from` is after `to`, and `Internal` when
/// the database fails.
pub fn load_shift_report(
    persistence: &Persistence,
    from: Date,
    to: Date,
) -> Result<ShiftReportResponse, ApiError> {
    validate_date_range(from, to).map_err(translate_domain_error)?;

    let rows: Vec<ShiftWithAssignments> = persistence
        .shifts_in_range(from, to)
        .map_err(|e| translate_persistence_error(&e))?;

    let mut shifts: Vec<FormattedShift> = Vec::with_capacity(rows.len());
    let mut total_assignments: usize = 0;
    let mut by_department: BTreeMap<String, usize> = BTreeMap::new();

    for row in rows {
        let shift_id: i64 = row.shift.shift_id.ok_or_else(|| ApiError::Internal {
            message: String::from("stored shift without ID"),
        })?;
        let assigned: Vec<AssignedInstructor> = persistence
            .assigned_instructors(shift_id)
            .map_err(|e| translate_persistence_error(&e))?;
        let assigned_instructors: Vec<AssignedInstructorSummary> = assigned
            .iter()
            .map(|a| AssignedInstructorSummary {
                instructor_id: a.instructor_id,
                display_name: format!("{} {}", a.last_name, a.first_name),
            })
            .collect();

        total_assignments += assigned_instructors.len();
        *by_department.entry(row.department_name.clone()).or_insert(0) += 1;

        let has_notes: bool = row
            .shift
            .description
            .as_deref()
            .is_some_and(|d| !d.is_empty());
        shifts.push(FormattedShift {
            shift_id,
            date: format_date_string(row.shift.date),
            department: row.department_name,
            shift_type: row.shift_type_name,
            stats: ShiftStats {
                assigned_count: assigned_instructors.len(),
                has_notes,
            },
            assigned_instructors,
            description: row.shift.description,
        });
    }

    let summary: ReportSummary = ReportSummary {
        total_shifts: shifts.len(),
        total_assignments,
        date_range: ReportDateRange {
            from: format_date_string(from),
            to: format_date_string(to),
        },
        by_department,
    };

    Ok(ShiftReportResponse { shifts, summary })
}

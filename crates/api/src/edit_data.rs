// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Edit-data orchestrator: one read assembling everything the edit screen
//! needs for a `(date, department, duty type)` slot.
//!
//! The same call is re-issued verbatim after every successful mutation;
//! absent intervening writes it is idempotent, so the screen can always be
//! rebuilt from a fresh response instead of patched locally.

use crate::conflicts::{build_conflict_set, collect_conflicts};
use crate::eligibility::available_instructors;
use crate::error::{translate_domain_error, translate_persistence_error, ApiError};
use crate::request_response::{
    AvailableInstructor, ConflictInfo, EditDataQuery, EditDataResponse, EditFormData, EditMode,
    ShiftDetail,
};
use std::collections::HashSet;
use time::Date;
use yukiyama_roster::{SlotForm, SHIFT_TYPE_UNSELECTED};
use yukiyama_roster_domain::{
    format_date_string, validate_date_string, validate_numeric_id, validate_required_params,
    DomainError, Shift,
};
use yukiyama_roster_persistence::{Persistence, ShiftWithAssignments};

fn invalid_input(field: &str, err: &DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Assembles the edit screen's data for one slot.
///
/// Validation order: all required keys first (every missing key reported
/// together), then each parameter individually, then existence checks for
/// the department and duty type, and only then the slot lookup. A
/// nonexistent department is a missing resource, not a malformed input.
///
/// # Errors
///
/// Returns `InvalidInput` for missing or malformed parameters,
/// `ResourceNotFound` for an unknown department or duty type, and
/// `Internal` when the database fails.
pub fn load_edit_data(
    persistence: &Persistence,
    query: &EditDataQuery,
) -> Result<EditDataResponse, ApiError> {
    validate_required_params(
        &[
            ("date", query.date.as_deref()),
            ("department_id", query.department_id.as_deref()),
            ("shift_type_id", query.shift_type_id.as_deref()),
        ],
        &["date", "department_id", "shift_type_id"],
    )
    .map_err(translate_domain_error)?;

    // All three are present past this point.
    let date_raw: &str = query.date.as_deref().unwrap_or_default();
    let department_raw: &str = query.department_id.as_deref().unwrap_or_default();
    let shift_type_raw: &str = query.shift_type_id.as_deref().unwrap_or_default();

    let date: Date = validate_date_string(date_raw).map_err(|e| invalid_input("date", &e))?;
    let department_id: i64 =
        validate_numeric_id(department_raw).map_err(|e| invalid_input("department_id", &e))?;
    let shift_type_id: i64 =
        validate_numeric_id(shift_type_raw).map_err(|e| invalid_input("shift_type_id", &e))?;

    ensure_department_exists(persistence, department_id)?;
    ensure_shift_type_exists(persistence, shift_type_id)?;

    let existing: Option<Shift> = persistence
        .find_shift_by_natural_key(date, department_id, shift_type_id)
        .map_err(|e| translate_persistence_error(&e))?;

    let (mode, shift_detail, assigned_ids) = match existing {
        Some(shift) => {
            let shift_id: i64 = shift.shift_id.ok_or_else(|| ApiError::Internal {
                message: String::from("stored shift without ID"),
            })?;
            let assigned: Vec<i64> = persistence
                .shift_assignments(shift_id)
                .map_err(|e| translate_persistence_error(&e))?;
            let detail: ShiftDetail = ShiftDetail {
                shift_id,
                date: format_date_string(shift.date),
                department_id: shift.department_id,
                shift_type_id: shift.shift_type_id,
                description: shift.description,
                assigned_instructor_ids: assigned.clone(),
            };
            (EditMode::Edit, Some(detail), assigned)
        }
        None => (EditMode::Create, None, Vec::new()),
    };

    let other_shifts: Vec<ShiftWithAssignments> = persistence
        .shifts_on_date(date, shift_detail.as_ref().map(|d| d.shift_id))
        .map_err(|e| translate_persistence_error(&e))?;

    let assigned_set: HashSet<i64> = assigned_ids.iter().copied().collect();
    let conflict_set: HashSet<i64> = build_conflict_set(&other_shifts);
    let instructors: Vec<AvailableInstructor> =
        available_instructors(persistence, department_id, &assigned_set, &conflict_set)?;
    let conflicts: Vec<ConflictInfo> = collect_conflicts(&instructors, &other_shifts);

    let form_data: EditFormData = EditFormData {
        date: format_date_string(date),
        department_id,
        shift_type_id,
        description: shift_detail
            .as_ref()
            .and_then(|d| d.description.clone())
            .unwrap_or_default(),
        selected_instructor_ids: assigned_ids,
    };

    Ok(EditDataResponse {
        mode,
        shift: shift_detail,
        available_instructors: instructors,
        conflicts,
        form_data,
    })
}

/// Loads every shift on a date as slot forms, seeding an edit session.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn day_slot_forms(persistence: &Persistence, date: Date) -> Result<Vec<SlotForm>, ApiError> {
    let shifts: Vec<ShiftWithAssignments> = persistence
        .shifts_on_date(date, None)
        .map_err(|e| translate_persistence_error(&e))?;
    let forms: Vec<SlotForm> = shifts
        .into_iter()
        .map(|s| SlotForm::from_shift(&s.shift, s.assigned_instructor_ids))
        .collect();
    debug_assert!(forms.iter().all(|f| f.shift_type_id > SHIFT_TYPE_UNSELECTED));
    Ok(forms)
}

pub(crate) fn ensure_department_exists(
    persistence: &Persistence,
    department_id: i64,
) -> Result<(), ApiError> {
    let exists: bool = persistence
        .department_exists(department_id)
        .map_err(|e| translate_persistence_error(&e))?;
    if exists {
        Ok(())
    } else {
        Err(translate_domain_error(DomainError::DepartmentNotFound(
            department_id,
        )))
    }
}

pub(crate) fn ensure_shift_type_exists(
    persistence: &Persistence,
    shift_type_id: i64,
) -> Result<(), ApiError> {
    let exists: bool = persistence
        .shift_type_exists(shift_type_id)
        .map_err(|e| translate_persistence_error(&e))?;
    if exists {
        Ok(())
    } else {
        Err(translate_domain_error(DomainError::ShiftTypeNotFound(
            shift_type_id,
        )))
    }
}

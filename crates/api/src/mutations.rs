// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations: create, update, and delete shifts.
//!
//! Every write is a single transaction in the persistence layer. Validation
//! happens here, before any transaction starts; a request that fails
//! validation never touches the store.

use crate::edit_data::{ensure_department_exists, ensure_shift_type_exists};
use crate::error::{translate_domain_error, translate_persistence_error, ApiError};
use crate::request_response::{
    CreateShiftRequest, CreateShiftResponse, DeleteShiftResponse, UpdateShiftRequest,
    UpdateShiftResponse,
};
use std::collections::HashSet;
use time::Date;
use yukiyama_roster::SessionEffect;
use yukiyama_roster_domain::{validate_date_string, DomainError, Shift};
use yukiyama_roster_persistence::{Persistence, PersistenceError, ShiftWithAssignments};

/// Creates a shift with its assignment set.
///
/// An occupied `(date, department, duty type)` slot is a hard rule
/// violation that no flag overrides. A same-day double booking is a *soft*
/// violation: rejected when `force` is false, accepted when the operator
/// re-submits with `force` set.
///
/// # Errors
///
/// Returns `InvalidInput` for malformed fields, `ResourceNotFound` for
/// unknown references, and `DomainRuleViolation` for an occupied slot or
/// an unforced double booking.
pub fn create_shift(
    persistence: &mut Persistence,
    request: &CreateShiftRequest,
) -> Result<CreateShiftResponse, ApiError> {
    let date: Date = validate_date_string(&request.date).map_err(|e| ApiError::InvalidInput {
        field: String::from("date"),
        message: e.to_string(),
    })?;
    validate_assignment_set(&request.assigned_instructor_ids)?;
    ensure_department_exists(persistence, request.department_id)?;
    ensure_shift_type_exists(persistence, request.shift_type_id)?;
    ensure_instructors_exist(persistence, &request.assigned_instructor_ids)?;

    let occupied: Option<Shift> = persistence
        .find_shift_by_natural_key(date, request.department_id, request.shift_type_id)
        .map_err(|e| translate_persistence_error(&e))?;
    if occupied.is_some() {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("unique_shift_slot"),
            message: format!(
                "A shift already exists for {} in this department and shift type",
                request.date
            ),
        });
    }

    if !request.force {
        check_double_booking(persistence, date, &request.assigned_instructor_ids)?;
    }

    let shift: Shift = Shift::new(
        date,
        request.department_id,
        request.shift_type_id,
        request.description.clone().filter(|d| !d.is_empty()),
    );
    let shift_id: i64 = persistence
        .create_shift(&shift, &request.assigned_instructor_ids)
        .map_err(|e| translate_persistence_error(&e))?;
    tracing::info!(shift_id, date = %request.date, "shift created");
    Ok(CreateShiftResponse {
        shift_id,
        message: String::from("Shift created"),
    })
}

/// Updates a shift's description and replaces its assignment set.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift, `InvalidInput` for a
/// bad assignment set, and `ResourceNotFound` for unknown instructors.
pub fn update_shift(
    persistence: &mut Persistence,
    shift_id: i64,
    request: &UpdateShiftRequest,
) -> Result<UpdateShiftResponse, ApiError> {
    let existing: Option<Shift> = persistence
        .find_shift_by_id(shift_id)
        .map_err(|e| translate_persistence_error(&e))?;
    if existing.is_none() {
        return Err(translate_domain_error(DomainError::ShiftNotFound(shift_id)));
    }
    validate_assignment_set(&request.assigned_instructor_ids)?;
    ensure_instructors_exist(persistence, &request.assigned_instructor_ids)?;

    persistence
        .update_shift(
            shift_id,
            request.description.as_deref().filter(|d| !d.is_empty()),
            &request.assigned_instructor_ids,
        )
        .map_err(|e| translate_persistence_error(&e))?;
    tracing::info!(shift_id, "shift updated");
    Ok(UpdateShiftResponse {
        message: String::from("Shift updated"),
    })
}

/// Deletes a shift; its assignments are removed with it.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift.
pub fn delete_shift(
    persistence: &mut Persistence,
    shift_id: i64,
) -> Result<DeleteShiftResponse, ApiError> {
    match persistence.delete_shift(shift_id) {
        Ok(()) => {
            tracing::info!(shift_id, "shift deleted");
            Ok(DeleteShiftResponse {
                message: String::from("Shift deleted"),
            })
        }
        Err(PersistenceError::NotFound(_)) => {
            Err(translate_domain_error(DomainError::ShiftNotFound(shift_id)))
        }
        Err(e) => Err(translate_persistence_error(&e)),
    }
}

/// Carries out a persistence effect emitted by an edit-session transition.
///
/// The session's save gate has already validated the slot, and double
/// bookings were surfaced as advisories while editing, so effects apply
/// directly without re-running the request-level checks.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn apply_session_effect(
    persistence: &mut Persistence,
    effect: &SessionEffect,
) -> Result<(), ApiError> {
    match effect {
        SessionEffect::CreateShift {
            shift,
            instructor_ids,
        } => {
            persistence
                .create_shift(shift, instructor_ids)
                .map_err(|e| translate_persistence_error(&e))?;
        }
        SessionEffect::UpdateShift {
            shift_id,
            description,
            instructor_ids,
        } => {
            persistence
                .update_shift(*shift_id, description.as_deref(), instructor_ids)
                .map_err(|e| translate_persistence_error(&e))?;
        }
        SessionEffect::DeleteShift { shift_id } => {
            persistence
                .delete_shift(*shift_id)
                .map_err(|e| translate_persistence_error(&e))?;
        }
    }
    Ok(())
}

fn validate_assignment_set(instructor_ids: &[i64]) -> Result<(), ApiError> {
    if instructor_ids.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("assigned_instructor_ids"),
            message: String::from("At least one instructor must be assigned"),
        });
    }
    let mut seen: HashSet<i64> = HashSet::with_capacity(instructor_ids.len());
    for id in instructor_ids {
        if !seen.insert(*id) {
            return Err(ApiError::InvalidInput {
                field: String::from("assigned_instructor_ids"),
                message: format!("Instructor {id} appears more than once"),
            });
        }
    }
    Ok(())
}

fn ensure_instructors_exist(
    persistence: &Persistence,
    instructor_ids: &[i64],
) -> Result<(), ApiError> {
    for id in instructor_ids {
        let exists: bool = persistence
            .instructor_exists(*id)
            .map_err(|e| translate_persistence_error(&e))?;
        if !exists {
            return Err(translate_domain_error(DomainError::InstructorNotFound(*id)));
        }
    }
    Ok(())
}

fn check_double_booking(
    persistence: &Persistence,
    date: Date,
    instructor_ids: &[i64],
) -> Result<(), ApiError> {
    let same_day: Vec<ShiftWithAssignments> = persistence
        .shifts_on_date(date, None)
        .map_err(|e| translate_persistence_error(&e))?;
    let booked: Vec<i64> = instructor_ids
        .iter()
        .copied()
        .filter(|id| {
            same_day
                .iter()
                .any(|shift| shift.assigned_instructor_ids.contains(id))
        })
        .collect();
    if booked.is_empty() {
        Ok(())
    } else {
        let listing: String = booked
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join(", ");
        Err(ApiError::DomainRuleViolation {
            rule: String::from("double_booking_override_required"),
            message: format!(
                "Instructors already assigned on this date: {listing}. \
                 Re-submit with force to assign anyway"
            ),
        })
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Eligibility resolution: which instructors may staff a department's slot.

use crate::error::{translate_persistence_error, ApiError};
use crate::request_response::AvailableInstructor;
use std::collections::HashSet;
use yukiyama_roster_domain::NO_CERTIFICATION_SUMMARY;
use yukiyama_roster_persistence::{EligibleInstructor, Persistence};

/// Joins certification short names for list display.
///
/// An empty set renders as the literal no-certification sentinel rather
/// than an empty string.
#[must_use]
pub fn certification_summary(short_names: &[String]) -> String {
    if short_names.is_empty() {
        String::from(NO_CERTIFICATION_SUMMARY)
    } else {
        short_names.join(", ")
    }
}

/// Loads the instructors eligible for a department and annotates each row
/// with assignment and conflict flags.
///
/// Eligibility itself (ACTIVE status, at least one active certification of
/// the department, kana-reading order) is resolved by the persistence query;
/// this function only attaches the per-slot flags: `is_assigned` from the
/// editing shift's assignment set, `has_conflict` from the union of every
/// other same-day assignment set. The two flags are independent.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn available_instructors(
    persistence: &Persistence,
    department_id: i64,
    assigned: &HashSet<i64>,
    conflict_set: &HashSet<i64>,
) -> Result<Vec<AvailableInstructor>, ApiError> {
    let eligible: Vec<EligibleInstructor> = persistence
        .eligible_instructors(department_id)
        .map_err(|e| translate_persistence_error(&e))?;

    let rows: Vec<AvailableInstructor> = eligible
        .iter()
        .filter_map(|row| {
            let instructor_id: i64 = row.instructor.instructor_id?;
            Some(AvailableInstructor {
                instructor_id,
                display_name: row.instructor.display_name(),
                display_name_kana: row.instructor.display_name_kana(),
                status: row.instructor.status.to_string(),
                certification_summary: certification_summary(&row.certification_short_names),
                is_assigned: assigned.contains(&instructor_id),
                has_conflict: conflict_set.contains(&instructor_id),
            })
        })
        .collect();
    Ok(rows)
}

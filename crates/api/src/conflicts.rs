// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conflict detection: same-day double bookings surfaced as advisories.
//!
//! Conflicts never block anything here. They annotate the instructor list
//! and produce witness entries; enforcement (the `force` flag) happens in
//! the mutation layer.

use crate::request_response::{AvailableInstructor, ConflictInfo, ConflictingShiftInfo};
use std::collections::HashSet;
use yukiyama_roster_persistence::ShiftWithAssignments;

/// Builds the conflict set: every instructor assigned to any of the given
/// same-day shifts.
#[must_use]
pub fn build_conflict_set(other_shifts: &[ShiftWithAssignments]) -> HashSet<i64> {
    other_shifts
        .iter()
        .flat_map(|shift| shift.assigned_instructor_ids.iter().copied())
        .collect()
}

/// Produces one conflict advisory per flagged instructor, each pointing at
/// the **first** same-day shift holding the conflicting assignment. One
/// witness suffices; the operator follows it to the roster, so no
/// exhaustive list is built.
///
/// A flagged instructor with no locatable shift is a data anomaly: it is
/// logged and dropped, never an error.
#[must_use]
pub fn collect_conflicts(
    instructors: &[AvailableInstructor],
    other_shifts: &[ShiftWithAssignments],
) -> Vec<ConflictInfo> {
    let mut conflicts: Vec<ConflictInfo> = Vec::new();
    for instructor in instructors.iter().filter(|i| i.has_conflict) {
        let witness: Option<&ShiftWithAssignments> = other_shifts.iter().find(|shift| {
            shift
                .assigned_instructor_ids
                .contains(&instructor.instructor_id)
        });
        match witness {
            Some(shift) => {
                if let Some(shift_id) = shift.shift.shift_id {
                    conflicts.push(ConflictInfo {
                        instructor_id: instructor.instructor_id,
                        instructor_name: instructor.display_name.clone(),
                        conflicting_shift: ConflictingShiftInfo {
                            shift_id,
                            department_name: shift.department_name.clone(),
                            shift_type_name: shift.shift_type_name.clone(),
                        },
                    });
                }
            }
            None => {
                tracing::warn!(
                    instructor_id = instructor.instructor_id,
                    "conflict flagged but no same-day shift holds the assignment; dropping"
                );
            }
        }
    }
    conflicts
}

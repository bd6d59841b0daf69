// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use yukiyama_roster_domain::{Instructor, Shift};

/// An instructor eligible for assignment within one department, together
/// with the short names of the active certifications that qualify them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleInstructor {
    /// The instructor row, fully hydrated.
    pub instructor: Instructor,
    /// Short names of active certifications held for the queried
    /// department, in certification ID order.
    pub certification_short_names: Vec<String>,
}

/// A persisted shift joined with its display names and assignment set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftWithAssignments {
    /// The shift row.
    pub shift: Shift,
    /// Display name of the owning department.
    pub department_name: String,
    /// Display name of the duty type.
    pub shift_type_name: String,
    /// IDs of assigned instructors, ascending.
    pub assigned_instructor_ids: Vec<i64>,
}

/// An instructor assigned to a shift, with the name parts needed for
/// report formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedInstructor {
    /// Canonical instructor ID.
    pub instructor_id: i64,
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
}

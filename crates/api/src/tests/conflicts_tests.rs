// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::conflicts::{build_conflict_set, collect_conflicts};
use crate::request_response::AvailableInstructor;
use std::collections::HashSet;
use time::{Date, Month};
use yukiyama_roster_domain::Shift;
use yukiyama_roster_persistence::ShiftWithAssignments;

fn day_shift(shift_id: i64, department_name: &str, assigned: Vec<i64>) -> ShiftWithAssignments {
    let date: Date = Date::from_calendar_date(2025, Month::January, 15).unwrap();
    ShiftWithAssignments {
        shift: Shift::with_id(shift_id, date, 1, 1, None),
        department_name: department_name.to_string(),
        shift_type_name: String::from("午前レッスン"),
        assigned_instructor_ids: assigned,
    }
}

fn eligible(instructor_id: i64, has_conflict: bool) -> AvailableInstructor {
    AvailableInstructor {
        instructor_id,
        display_name: format!("instructor {instructor_id}"),
        display_name_kana: format!("instructor {instructor_id}"),
        status: String::from("ACTIVE"),
        certification_summary: String::from("指導員"),
        is_assigned: false,
        has_conflict,
    }
}

#[test]
fn test_conflict_set_is_the_union_of_assignments() {
    let shifts: Vec<ShiftWithAssignments> = vec![
        day_shift(10, "スキー", vec![7, 8]),
        day_shift(11, "スノーボード", vec![8, 9]),
    ];

    let set: HashSet<i64> = build_conflict_set(&shifts);
    assert_eq!(set, [7, 8, 9].into_iter().collect());
}

#[test]
fn test_every_flagged_conflict_has_a_witness_shift() {
    let shifts: Vec<ShiftWithAssignments> = vec![
        day_shift(10, "スキー", vec![7]),
        day_shift(11, "スノーボード", vec![7, 9]),
    ];
    let instructors: Vec<AvailableInstructor> =
        vec![eligible(7, true), eligible(8, false), eligible(9, true)];

    let conflicts = collect_conflicts(&instructors, &shifts);

    assert_eq!(conflicts.len(), 2);
    // First matching shift wins: instructor 7 appears on both, shift 10 is
    // reported.
    assert_eq!(conflicts[0].instructor_id, 7);
    assert_eq!(conflicts[0].conflicting_shift.shift_id, 10);
    assert_eq!(conflicts[0].conflicting_shift.department_name, "スキー");
    assert_eq!(conflicts[1].instructor_id, 9);
    assert_eq!(conflicts[1].conflicting_shift.shift_id, 11);
}

#[test]
fn test_unflagged_instructors_produce_no_entries() {
    let shifts: Vec<ShiftWithAssignments> = vec![day_shift(10, "スキー", vec![7])];
    let instructors: Vec<AvailableInstructor> = vec![eligible(7, false)];

    let conflicts = collect_conflicts(&instructors, &shifts);
    assert!(conflicts.is_empty());
}

#[test]
fn test_flag_without_locatable_shift_is_dropped_not_fatal() {
    // Inconsistent inputs: instructor 7 is flagged but no shift holds the
    // assignment. The entry is dropped and the rest of the result stands.
    let shifts: Vec<ShiftWithAssignments> = vec![day_shift(11, "スノーボード", vec![9])];
    let instructors: Vec<AvailableInstructor> = vec![eligible(7, true), eligible(9, true)];

    let conflicts = collect_conflicts(&instructors, &shifts);

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].instructor_id, 9);
}

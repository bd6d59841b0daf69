// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{seeded, test_date};
use crate::{EligibleInstructor, Persistence, ShiftWithAssignments};
use time::{Date, Month};
use yukiyama_roster_domain::Shift;

#[test]
fn test_foreign_keys_enforced_on_fresh_database() {
    let mut persistence: Persistence = Persistence::new_in_memory().expect("in-memory db");
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_eligible_instructors_require_active_status_and_active_certification() {
    let (persistence, ids) = seeded();

    let eligible: Vec<EligibleInstructor> =
        persistence.eligible_instructors(ids.ski).unwrap();
    let eligible_ids: Vec<i64> = eligible
        .iter()
        .map(|e| e.instructor.instructor_id.unwrap())
        .collect();

    // Sato is INACTIVE, Yamada holds only a deactivated certification,
    // Kobayashi is certified for the other department.
    assert!(eligible_ids.contains(&ids.tanaka));
    assert!(eligible_ids.contains(&ids.suzuki));
    assert!(!eligible_ids.contains(&ids.sato));
    assert!(!eligible_ids.contains(&ids.yamada));
    assert!(!eligible_ids.contains(&ids.kobayashi));
}

#[test]
fn test_eligible_instructors_appear_once_with_all_short_names() {
    let (persistence, ids) = seeded();

    let eligible: Vec<EligibleInstructor> =
        persistence.eligible_instructors(ids.ski).unwrap();
    let tanaka: &EligibleInstructor = eligible
        .iter()
        .find(|e| e.instructor.instructor_id == Some(ids.tanaka))
        .expect("tanaka eligible");

    // Two active ski certifications produce one row with both short names.
    assert_eq!(
        eligible
            .iter()
            .filter(|e| e.instructor.instructor_id == Some(ids.tanaka))
            .count(),
        1
    );
    assert_eq!(
        tanaka.certification_short_names,
        vec![String::from("指導員"), String::from("準指導員")]
    );
}

#[test]
fn test_eligible_instructors_ordered_by_kana_with_kanji_fallback() {
    let (persistence, ids) = seeded();

    let eligible: Vec<EligibleInstructor> =
        persistence.eligible_instructors(ids.ski).unwrap();
    let ordered: Vec<i64> = eligible
        .iter()
        .map(|e| e.instructor.instructor_id.unwrap())
        .collect();

    // Tanaka has a katakana reading; Suzuki falls back to kanji, which
    // sorts after katakana codepoints.
    assert_eq!(ordered, vec![ids.tanaka, ids.suzuki]);
}

#[test]
fn test_natural_key_lookup_distinguishes_occupied_and_empty_slots() {
    let (mut persistence, ids) = seeded();
    let date: Date = test_date();
    let shift: Shift = Shift::new(date, ids.ski, ids.morning, None);
    let shift_id: i64 = persistence.create_shift(&shift, &[ids.tanaka]).unwrap();

    let found: Option<Shift> = persistence
        .find_shift_by_natural_key(date, ids.ski, ids.morning)
        .unwrap();
    assert_eq!(found.and_then(|s| s.shift_id), Some(shift_id));

    let empty: Option<Shift> = persistence
        .find_shift_by_natural_key(date, ids.ski, ids.afternoon)
        .unwrap();
    assert!(empty.is_none());
}

#[test]
fn test_find_shift_by_id_returns_none_for_unknown_id() {
    let (persistence, _ids) = seeded();
    let found: Option<Shift> = persistence.find_shift_by_id(9999).unwrap();
    assert!(found.is_none());
}

#[test]
fn test_shifts_on_date_excludes_the_given_shift() {
    let (mut persistence, ids) = seeded();
    let date: Date = test_date();
    let first: i64 = persistence
        .create_shift(&Shift::new(date, ids.ski, ids.morning, None), &[ids.tanaka])
        .unwrap();
    let second: i64 = persistence
        .create_shift(
            &Shift::new(date, ids.snowboard, ids.morning, None),
            &[ids.kobayashi],
        )
        .unwrap();

    let all: Vec<ShiftWithAssignments> = persistence.shifts_on_date(date, None).unwrap();
    assert_eq!(all.len(), 2);

    let others: Vec<ShiftWithAssignments> =
        persistence.shifts_on_date(date, Some(first)).unwrap();
    assert_eq!(others.len(), 1);
    assert_eq!(others[0].shift.shift_id, Some(second));
    assert_eq!(others[0].assigned_instructor_ids, vec![ids.kobayashi]);
}

#[test]
fn test_shifts_in_range_is_inclusive_and_date_ordered() {
    let (mut persistence, ids) = seeded();
    let jan_10: Date = Date::from_calendar_date(2025, Month::January, 10).unwrap();
    let jan_15: Date = test_date();
    let jan_20: Date = Date::from_calendar_date(2025, Month::January, 20).unwrap();
    let jan_21: Date = Date::from_calendar_date(2025, Month::January, 21).unwrap();

    // Inserted out of chronological order on purpose.
    persistence
        .create_shift(&Shift::new(jan_20, ids.ski, ids.morning, None), &[ids.tanaka])
        .unwrap();
    persistence
        .create_shift(&Shift::new(jan_10, ids.ski, ids.morning, None), &[ids.tanaka])
        .unwrap();
    persistence
        .create_shift(&Shift::new(jan_15, ids.ski, ids.morning, None), &[ids.tanaka])
        .unwrap();
    persistence
        .create_shift(&Shift::new(jan_21, ids.ski, ids.morning, None), &[ids.tanaka])
        .unwrap();

    let in_range: Vec<ShiftWithAssignments> =
        persistence.shifts_in_range(jan_10, jan_20).unwrap();
    let dates: Vec<Date> = in_range.iter().map(|s| s.shift.date).collect();
    assert_eq!(dates, vec![jan_10, jan_15, jan_20]);
}

#[test]
fn test_shifts_on_date_carry_display_names() {
    let (mut persistence, ids) = seeded();
    let date: Date = test_date();
    persistence
        .create_shift(&Shift::new(date, ids.ski, ids.morning, None), &[ids.tanaka])
        .unwrap();

    let shifts: Vec<ShiftWithAssignments> = persistence.shifts_on_date(date, None).unwrap();
    assert_eq!(shifts[0].department_name, "スキー");
    assert_eq!(shifts[0].shift_type_name, "午前レッスン");
}

#[test]
fn test_assigned_instructors_carry_name_parts() {
    let (mut persistence, ids) = seeded();
    let shift_id: i64 = persistence
        .create_shift(
            &Shift::new(test_date(), ids.ski, ids.morning, None),
            &[ids.tanaka, ids.suzuki],
        )
        .unwrap();

    let assigned = persistence.assigned_instructors(shift_id).unwrap();
    assert_eq!(assigned.len(), 2);
    assert_eq!(assigned[0].instructor_id, ids.tanaka);
    assert_eq!(assigned[0].last_name, "田中");
    assert_eq!(assigned[1].last_name, "鈴木");
}

#[test]
fn test_existence_checks() {
    let (persistence, ids) = seeded();
    assert!(persistence.department_exists(ids.ski).unwrap());
    assert!(!persistence.department_exists(9999).unwrap());
    assert!(persistence.shift_type_exists(ids.morning).unwrap());
    assert!(!persistence.shift_type_exists(9999).unwrap());
    assert!(persistence.instructor_exists(ids.tanaka).unwrap());
    assert!(!persistence.instructor_exists(9999).unwrap());
}

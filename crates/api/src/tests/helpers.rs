// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::EditDataQuery;
use time::{Date, Month};
use yukiyama_roster_domain::{Certification, Instructor, InstructorStatus, Shift};
use yukiyama_roster_persistence::Persistence;

/// IDs from the seeded two-shift scenario.
pub struct Scenario {
    pub ski: i64,
    pub snowboard: i64,
    pub kids: i64,
    pub lesson_am: i64,
    pub lesson_pm: i64,
    pub patrol: i64,
    /// Certified for all three departments; assigned to both seeded shifts.
    pub hayashi: i64,
    /// Certified for ski and kids; assigned nowhere.
    pub mori: i64,
    /// INACTIVE but certified for ski; must never appear as eligible.
    pub okada: i64,
    /// The ski shift on the scenario date (holds hayashi).
    pub shift_ski: i64,
    /// The snowboard shift on the scenario date (holds hayashi).
    pub shift_snowboard: i64,
}

pub fn scenario_date() -> Date {
    Date::from_calendar_date(2025, Month::January, 15).unwrap()
}

fn cert(department_id: i64, short_name: &str) -> Certification {
    Certification {
        certification_id: None,
        department_id,
        organization: String::from("SAJ"),
        name: format!("{short_name} certification"),
        short_name: short_name.to_string(),
        is_active: true,
    }
}

fn active(last: &str, first: &str, last_kana: &str, first_kana: &str) -> Instructor {
    Instructor::new(
        last.to_string(),
        first.to_string(),
        Some(last_kana.to_string()),
        Some(first_kana.to_string()),
        InstructorStatus::Active,
        None,
    )
}

/// Seeds the canonical two-shift scenario: one instructor on two different
/// shifts of the same date, a free instructor, and an inactive one.
pub fn scenario() -> (Persistence, Scenario) {
    let mut persistence: Persistence = Persistence::new_in_memory().expect("in-memory db");

    let ski: i64 = persistence.insert_department("スキー", "SKI").unwrap();
    let snowboard: i64 = persistence
        .insert_department("スノーボード", "SNOWBOARD")
        .unwrap();
    let kids: i64 = persistence.insert_department("キッズ", "KIDS").unwrap();

    let lesson_am: i64 = persistence.insert_shift_type("午前レッスン").unwrap();
    let lesson_pm: i64 = persistence.insert_shift_type("午後レッスン").unwrap();
    let patrol: i64 = persistence.insert_shift_type("パトロール補助").unwrap();

    let ski_cert: i64 = persistence.insert_certification(&cert(ski, "指導員")).unwrap();
    let snowboard_cert: i64 = persistence
        .insert_certification(&cert(snowboard, "C級"))
        .unwrap();
    let kids_cert: i64 = persistence
        .insert_certification(&cert(kids, "キッズリーダー"))
        .unwrap();

    let hayashi: i64 = persistence
        .insert_instructor(&active("林", "誠", "ハヤシ", "マコト"))
        .unwrap();
    let mori: i64 = persistence
        .insert_instructor(&active("森", "由美", "モリ", "ユミ"))
        .unwrap();
    let okada: i64 = persistence
        .insert_instructor(&Instructor::new(
            String::from("岡田"),
            String::from("隆"),
            Some(String::from("オカダ")),
            Some(String::from("タカシ")),
            InstructorStatus::Inactive,
            None,
        ))
        .unwrap();

    persistence.certify_instructor(hayashi, ski_cert).unwrap();
    persistence
        .certify_instructor(hayashi, snowboard_cert)
        .unwrap();
    persistence.certify_instructor(hayashi, kids_cert).unwrap();
    persistence.certify_instructor(mori, ski_cert).unwrap();
    persistence.certify_instructor(mori, kids_cert).unwrap();
    persistence.certify_instructor(okada, ski_cert).unwrap();

    let date: Date = scenario_date();
    let shift_ski: i64 = persistence
        .create_shift(&Shift::new(date, ski, lesson_am, None), &[hayashi])
        .unwrap();
    let shift_snowboard: i64 = persistence
        .create_shift(&Shift::new(date, snowboard, patrol, None), &[hayashi])
        .unwrap();

    let scenario: Scenario = Scenario {
        ski,
        snowboard,
        kids,
        lesson_am,
        lesson_pm,
        patrol,
        hayashi,
        mori,
        okada,
        shift_ski,
        shift_snowboard,
    };
    (persistence, scenario)
}

/// Builds a fully populated edit-data query for the scenario date.
pub fn query(department_id: i64, shift_type_id: i64) -> EditDataQuery {
    EditDataQuery {
        date: Some(String::from("2025-01-15")),
        department_id: Some(department_id.to_string()),
        shift_type_id: Some(shift_type_id.to_string()),
    }
}

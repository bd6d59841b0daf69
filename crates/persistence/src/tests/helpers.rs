// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use time::{Date, Month};
use yukiyama_roster_domain::{Certification, Instructor, InstructorStatus};

/// IDs assigned while seeding the test database.
pub struct Seeded {
    pub ski: i64,
    pub snowboard: i64,
    pub morning: i64,
    pub afternoon: i64,
    /// Active, kana recorded, two active ski certifications.
    pub tanaka: i64,
    /// Active, no kana recorded, one active ski certification.
    pub suzuki: i64,
    /// Inactive status, but holds an active ski certification.
    pub sato: i64,
    /// Active status, but only an inactive ski certification.
    pub yamada: i64,
    /// Active, snowboard-certified only.
    pub kobayashi: i64,
}

pub fn test_date() -> Date {
    Date::from_calendar_date(2025, Month::January, 15).unwrap()
}

fn instructor(
    last: &str,
    first: &str,
    last_kana: Option<&str>,
    first_kana: Option<&str>,
    status: InstructorStatus,
) -> Instructor {
    Instructor::new(
        last.to_string(),
        first.to_string(),
        last_kana.map(String::from),
        first_kana.map(String::from),
        status,
        None,
    )
}

fn certification(department_id: i64, short_name: &str, is_active: bool) -> Certification {
    Certification {
        certification_id: None,
        department_id,
        organization: String::from("SAJ"),
        name: format!("{short_name} certification"),
        short_name: short_name.to_string(),
        is_active,
    }
}

/// Builds an in-memory database seeded with two departments, two duty
/// types, and five instructors covering every eligibility edge.
pub fn seeded() -> (Persistence, Seeded) {
    let mut persistence: Persistence = Persistence::new_in_memory().expect("in-memory db");

    let ski: i64 = persistence.insert_department("スキー", "SKI").unwrap();
    let snowboard: i64 = persistence
        .insert_department("スノーボード", "SNOWBOARD")
        .unwrap();
    let morning: i64 = persistence.insert_shift_type("午前レッスン").unwrap();
    let afternoon: i64 = persistence.insert_shift_type("午後レッスン").unwrap();

    let ski_level1: i64 = persistence
        .insert_certification(&certification(ski, "指導員", true))
        .unwrap();
    let ski_level2: i64 = persistence
        .insert_certification(&certification(ski, "準指導員", true))
        .unwrap();
    let ski_retired_cert: i64 = persistence
        .insert_certification(&certification(ski, "旧指導員", false))
        .unwrap();
    let snowboard_cert: i64 = persistence
        .insert_certification(&certification(snowboard, "C級", true))
        .unwrap();

    let tanaka: i64 = persistence
        .insert_instructor(&instructor(
            "田中",
            "一郎",
            Some("タナカ"),
            Some("イチロウ"),
            InstructorStatus::Active,
        ))
        .unwrap();
    let suzuki: i64 = persistence
        .insert_instructor(&instructor(
            "鈴木",
            "花子",
            None,
            None,
            InstructorStatus::Active,
        ))
        .unwrap();
    let sato: i64 = persistence
        .insert_instructor(&instructor(
            "佐藤",
            "健",
            Some("サトウ"),
            Some("ケン"),
            InstructorStatus::Inactive,
        ))
        .unwrap();
    let yamada: i64 = persistence
        .insert_instructor(&instructor(
            "山田",
            "太郎",
            Some("ヤマダ"),
            Some("タロウ"),
            InstructorStatus::Active,
        ))
        .unwrap();
    let kobayashi: i64 = persistence
        .insert_instructor(&instructor(
            "小林",
            "直子",
            Some("コバヤシ"),
            Some("ナオコ"),
            InstructorStatus::Active,
        ))
        .unwrap();

    persistence.certify_instructor(tanaka, ski_level1).unwrap();
    persistence.certify_instructor(tanaka, ski_level2).unwrap();
    persistence.certify_instructor(suzuki, ski_level1).unwrap();
    persistence.certify_instructor(sato, ski_level1).unwrap();
    persistence
        .certify_instructor(yamada, ski_retired_cert)
        .unwrap();
    persistence
        .certify_instructor(kobayashi, snowboard_cert)
        .unwrap();

    let seeded: Seeded = Seeded {
        ski,
        snowboard,
        morning,
        afternoon,
        tanaka,
        suzuki,
        sato,
        yamada,
        kobayashi,
    };
    (persistence, seeded)
}

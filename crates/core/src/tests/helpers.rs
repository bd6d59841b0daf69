// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EditSession, SlotForm};
use time::{Date, Month};

/// The day every session test runs against.
pub fn test_date() -> Date {
    Date::from_calendar_date(2025, Month::January, 15).unwrap()
}

/// A form for a persisted shift with the given id and assignment set.
pub fn persisted_form(shift_id: i64, instructor_ids: Vec<i64>) -> SlotForm {
    SlotForm {
        shift_id: Some(shift_id),
        department_id: 1,
        shift_type_id: 2,
        description: String::from("morning lesson"),
        instructor_ids,
    }
}

/// A session seeded with one persisted shift (id 10, instructor 7).
pub fn session_with_one_shift() -> EditSession {
    EditSession::from_loaded(test_date(), vec![persisted_form(10, vec![7])])
}

/// An empty session for the test day.
pub fn empty_session() -> EditSession {
    EditSession::from_loaded(test_date(), Vec::new())
}

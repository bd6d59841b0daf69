// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Schema applied on every connection.
///
/// Dates are stored as `TEXT` in `YYYY-MM-DD` form so lexicographic
/// comparison matches chronological comparison; range queries rely on this.
/// The `(shift_date, department_id, shift_type_id)` natural key is enforced
/// by a `UNIQUE` constraint, and assignments cascade when a shift is deleted.
pub const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS departments (
    department_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    code TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS shift_types (
    shift_type_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS instructors (
    instructor_id INTEGER PRIMARY KEY AUTOINCREMENT,
    last_name TEXT NOT NULL,
    first_name TEXT NOT NULL,
    last_name_kana TEXT,
    first_name_kana TEXT,
    status TEXT NOT NULL DEFAULT 'ACTIVE'
        CHECK (status IN ('ACTIVE', 'INACTIVE', 'RETIRED')),
    notes TEXT
);

CREATE TABLE IF NOT EXISTS certifications (
    certification_id INTEGER PRIMARY KEY AUTOINCREMENT,
    department_id INTEGER NOT NULL REFERENCES departments (department_id),
    organization TEXT NOT NULL,
    name TEXT NOT NULL,
    short_name TEXT NOT NULL,
    is_active INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS instructor_certifications (
    instructor_id INTEGER NOT NULL REFERENCES instructors (instructor_id),
    certification_id INTEGER NOT NULL REFERENCES certifications (certification_id),
    PRIMARY KEY (instructor_id, certification_id)
);

CREATE TABLE IF NOT EXISTS shifts (
    shift_id INTEGER PRIMARY KEY AUTOINCREMENT,
    shift_date TEXT NOT NULL,
    department_id INTEGER NOT NULL REFERENCES departments (department_id),
    shift_type_id INTEGER NOT NULL REFERENCES shift_types (shift_type_id),
    description TEXT,
    UNIQUE (shift_date, department_id, shift_type_id)
);

CREATE TABLE IF NOT EXISTS shift_assignments (
    shift_id INTEGER NOT NULL REFERENCES shifts (shift_id) ON DELETE CASCADE,
    instructor_id INTEGER NOT NULL REFERENCES instructors (instructor_id),
    PRIMARY KEY (shift_id, instructor_id)
);

CREATE INDEX IF NOT EXISTS idx_shifts_date ON shifts (shift_date);
CREATE INDEX IF NOT EXISTS idx_certifications_department
    ON certifications (department_id);
";

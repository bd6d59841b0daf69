// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::models::{AssignedInstructor, EligibleInstructor, ShiftWithAssignments};
use crate::Persistence;
use rusqlite::{params, OptionalExtension};
use std::str::FromStr;
use time::Date;
use yukiyama_roster_domain::{
    format_date_string, validate_date_string, Instructor, InstructorStatus, Shift,
};

/// Raw shift columns as stored, before date parsing.
struct ShiftRow {
    shift_id: i64,
    shift_date: String,
    department_id: i64,
    shift_type_id: i64,
    description: Option<String>,
    department_name: String,
    shift_type_name: String,
}

impl ShiftRow {
    /// Hydrates the stored row into a domain shift. A date that no longer
    /// parses is a corrupted row, not a recoverable condition.
    fn into_shift(self) -> Result<(Shift, String, String), PersistenceError> {
        let date: Date = validate_date_string(&self.shift_date).map_err(|e| {
            PersistenceError::DataIntegrity(format!(
                "shift {} has unparseable date '{}': {e}",
                self.shift_id, self.shift_date
            ))
        })?;
        let shift: Shift = Shift::with_id(
            self.shift_id,
            date,
            self.department_id,
            self.shift_type_id,
            self.description,
        );
        Ok((shift, self.department_name, self.shift_type_name))
    }
}

const SHIFT_SELECT: &str = "SELECT s.shift_id, s.shift_date, s.department_id, \
     s.shift_type_id, s.description, d.name, t.name \
     FROM shifts s \
     JOIN departments d ON d.department_id = s.department_id \
     JOIN shift_types t ON t.shift_type_id = s.shift_type_id";

impl Persistence {
    /// Finds the shift occupying a `(date, department, duty type)` slot.
    ///
    /// Returns `None` when the slot is empty; the caller uses this to decide
    /// between edit and create mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn find_shift_by_natural_key(
        &self,
        date: Date,
        department_id: i64,
        shift_type_id: i64,
    ) -> Result<Option<Shift>, PersistenceError> {
        let date_string: String = format_date_string(date);
        let row: Option<(i64, Option<String>)> = self
            .conn
            .query_row(
                "SELECT shift_id, description FROM shifts \
                 WHERE shift_date = ?1 AND department_id = ?2 AND shift_type_id = ?3",
                params![date_string, department_id, shift_type_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        Ok(row.map(|(shift_id, description)| {
            Shift::with_id(shift_id, date, department_id, shift_type_id, description)
        }))
    }

    /// Retrieves a shift by its canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried or the stored
    /// date fails to parse.
    pub fn find_shift_by_id(&self, shift_id: i64) -> Result<Option<Shift>, PersistenceError> {
        let row: Option<(String, i64, i64, Option<String>)> = self
            .conn
            .query_row(
                "SELECT shift_date, department_id, shift_type_id, description \
                 FROM shifts WHERE shift_id = ?1",
                params![shift_id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .optional()?;
        match row {
            None => Ok(None),
            Some((date_string, department_id, shift_type_id, description)) => {
                let date: Date = validate_date_string(&date_string).map_err(|e| {
                    PersistenceError::DataIntegrity(format!(
                        "shift {shift_id} has unparseable date '{date_string}': {e}"
                    ))
                })?;
                Ok(Some(Shift::with_id(
                    shift_id,
                    date,
                    department_id,
                    shift_type_id,
                    description,
                )))
            }
        }
    }

    /// Returns the instructor IDs assigned to a shift, ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn shift_assignments(&self, shift_id: i64) -> Result<Vec<i64>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT instructor_id FROM shift_assignments \
             WHERE shift_id = ?1 ORDER BY instructor_id",
        )?;
        let ids: Vec<i64> = stmt
            .query_map(params![shift_id], |row| row.get(0))?
            .collect::<Result<Vec<i64>, rusqlite::Error>>()?;
        Ok(ids)
    }

    /// Returns every shift on a date, joined with display names and
    /// assignment sets.
    ///
    /// When `exclude_shift_id` is set, that shift is omitted; conflict
    /// detection uses this so a shift never conflicts with itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried or a stored
    /// date fails to parse.
    pub fn shifts_on_date(
        &self,
        date: Date,
        exclude_shift_id: Option<i64>,
    ) -> Result<Vec<ShiftWithAssignments>, PersistenceError> {
        let date_string: String = format_date_string(date);
        let sql: String = format!(
            "{SHIFT_SELECT} WHERE s.shift_date = ?1 \
             AND (?2 IS NULL OR s.shift_id <> ?2) \
             ORDER BY s.shift_id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows: Vec<ShiftRow> = stmt
            .query_map(params![date_string, exclude_shift_id], |row| {
                Ok(ShiftRow {
                    shift_id: row.get(0)?,
                    shift_date: row.get(1)?,
                    department_id: row.get(2)?,
                    shift_type_id: row.get(3)?,
                    description: row.get(4)?,
                    department_name: row.get(5)?,
                    shift_type_name: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<ShiftRow>, rusqlite::Error>>()?;
        self.attach_assignments(rows)
    }

    /// Returns every shift in the inclusive `[from, to]` date range,
    /// ordered by date, then department, then duty type.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried or a stored
    /// date fails to parse.
    pub fn shifts_in_range(
        &self,
        from: Date,
        to: Date,
    ) -> Result<Vec<ShiftWithAssignments>, PersistenceError> {
        let from_string: String = format_date_string(from);
        let to_string: String = format_date_string(to);
        let sql: String = format!(
            "{SHIFT_SELECT} WHERE s.shift_date >= ?1 AND s.shift_date <= ?2 \
             ORDER BY s.shift_date, s.department_id, s.shift_type_id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows: Vec<ShiftRow> = stmt
            .query_map(params![from_string, to_string], |row| {
                Ok(ShiftRow {
                    shift_id: row.get(0)?,
                    shift_date: row.get(1)?,
                    department_id: row.get(2)?,
                    shift_type_id: row.get(3)?,
                    description: row.get(4)?,
                    department_name: row.get(5)?,
                    shift_type_name: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<ShiftRow>, rusqlite::Error>>()?;
        self.attach_assignments(rows)
    }

    fn attach_assignments(
        &self,
        rows: Vec<ShiftRow>,
    ) -> Result<Vec<ShiftWithAssignments>, PersistenceError> {
        let mut results: Vec<ShiftWithAssignments> = Vec::with_capacity(rows.len());
        for row in rows {
            let (shift, department_name, shift_type_name) = row.into_shift()?;
            let shift_id: i64 = shift.shift_id.ok_or_else(|| {
                PersistenceError::DataIntegrity(String::from("stored shift without ID"))
            })?;
            let assigned_instructor_ids: Vec<i64> = self.shift_assignments(shift_id)?;
            results.push(ShiftWithAssignments {
                shift,
                department_name,
                shift_type_name,
                assigned_instructor_ids,
            });
        }
        Ok(results)
    }

    /// Returns the instructors assigned to a shift with their name parts,
    /// ordered by instructor ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn assigned_instructors(
        &self,
        shift_id: i64,
    ) -> Result<Vec<AssignedInstructor>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT i.instructor_id, i.last_name, i.first_name \
             FROM shift_assignments sa \
             JOIN instructors i ON i.instructor_id = sa.instructor_id \
             WHERE sa.shift_id = ?1 \
             ORDER BY i.instructor_id",
        )?;
        let rows: Vec<AssignedInstructor> = stmt
            .query_map(params![shift_id], |row| {
                Ok(AssignedInstructor {
                    instructor_id: row.get(0)?,
                    last_name: row.get(1)?,
                    first_name: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<AssignedInstructor>, rusqlite::Error>>()?;
        Ok(rows)
    }

    /// Returns the instructors eligible for assignment within a department.
    ///
    /// Eligibility requires `ACTIVE` status and at least one *active*
    /// certification recognized by the department. Results are ordered by
    /// kana reading (falling back to kanji per name part), so rosters list
    /// instructors the way a Japanese name index would.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried or a stored
    /// status fails to parse.
    pub fn eligible_instructors(
        &self,
        department_id: i64,
    ) -> Result<Vec<EligibleInstructor>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT i.instructor_id, i.last_name, i.first_name, \
             i.last_name_kana, i.first_name_kana, i.status, i.notes \
             FROM instructors i \
             JOIN instructor_certifications ic ON ic.instructor_id = i.instructor_id \
             JOIN certifications c ON c.certification_id = ic.certification_id \
             WHERE i.status = 'ACTIVE' AND c.is_active = 1 AND c.department_id = ?1 \
             ORDER BY i.instructor_id",
        )?;
        let raw: Vec<(i64, String, String, Option<String>, Option<String>, String, Option<String>)> =
            stmt.query_map(params![department_id], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                    row.get(6)?,
                ))
            })?
            .collect::<Result<Vec<_>, rusqlite::Error>>()?;

        let mut results: Vec<EligibleInstructor> = Vec::with_capacity(raw.len());
        for (instructor_id, last_name, first_name, last_name_kana, first_name_kana, status, notes) in
            raw
        {
            let status: InstructorStatus = InstructorStatus::from_str(&status).map_err(|e| {
                PersistenceError::DataIntegrity(format!(
                    "instructor {instructor_id} has invalid status: {e}"
                ))
            })?;
            let instructor: Instructor = Instructor::with_id(
                instructor_id,
                last_name,
                first_name,
                last_name_kana,
                first_name_kana,
                status,
                notes,
            );
            let certification_short_names: Vec<String> =
                self.certification_short_names(instructor_id, department_id)?;
            results.push(EligibleInstructor {
                instructor,
                certification_short_names,
            });
        }
        results.sort_by(|a, b| {
            a.instructor
                .collation_key()
                .cmp(&b.instructor.collation_key())
                .then(a.instructor.instructor_id.cmp(&b.instructor.instructor_id))
        });
        Ok(results)
    }

    fn certification_short_names(
        &self,
        instructor_id: i64,
        department_id: i64,
    ) -> Result<Vec<String>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT c.short_name \
             FROM instructor_certifications ic \
             JOIN certifications c ON c.certification_id = ic.certification_id \
             WHERE ic.instructor_id = ?1 AND c.department_id = ?2 AND c.is_active = 1 \
             ORDER BY c.certification_id",
        )?;
        let names: Vec<String> = stmt
            .query_map(params![instructor_id, department_id], |row| row.get(0))?
            .collect::<Result<Vec<String>, rusqlite::Error>>()?;
        Ok(names)
    }

    /// Checks whether a department exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn department_exists(&self, department_id: i64) -> Result<bool, PersistenceError> {
        self.row_exists(
            "SELECT 1 FROM departments WHERE department_id = ?1",
            department_id,
        )
    }

    /// Checks whether a duty type exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn shift_type_exists(&self, shift_type_id: i64) -> Result<bool, PersistenceError> {
        self.row_exists(
            "SELECT 1 FROM shift_types WHERE shift_type_id = ?1",
            shift_type_id,
        )
    }

    /// Checks whether an instructor exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn instructor_exists(&self, instructor_id: i64) -> Result<bool, PersistenceError> {
        self.row_exists(
            "SELECT 1 FROM instructors WHERE instructor_id = ?1",
            instructor_id,
        )
    }

    fn row_exists(&self, sql: &str, id: i64) -> Result<bool, PersistenceError> {
        let found: Option<i64> = self
            .conn
            .query_row(sql, params![id], |row| row.get(0))
            .optional()?;
        Ok(found.is_some())
    }
}

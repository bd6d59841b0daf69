// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::Persistence;
use rusqlite::{params, Transaction};
use yukiyama_roster_domain::{format_date_string, Certification, Instructor, Shift};

impl Persistence {
    /// Creates a shift and its assignment set in one transaction.
    ///
    /// # Arguments
    ///
    /// * `shift` - The shift to persist (`shift_id` is ignored)
    /// * `instructor_ids` - The instructors to assign
    ///
    /// # Returns
    ///
    /// The canonical ID assigned to the new shift.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the
    /// `(date, department, duty type)` slot is already occupied.
    pub fn create_shift(
        &mut self,
        shift: &Shift,
        instructor_ids: &[i64],
    ) -> Result<i64, PersistenceError> {
        let date_string: String = format_date_string(shift.date);
        let tx: Transaction<'_> = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO shifts (shift_date, department_id, shift_type_id, description) \
             VALUES (?1, ?2, ?3, ?4)",
            params![
                date_string,
                shift.department_id,
                shift.shift_type_id,
                shift.description
            ],
        )?;
        let shift_id: i64 = tx.last_insert_rowid();
        insert_assignments(&tx, shift_id, instructor_ids)?;
        tx.commit()?;
        tracing::debug!(shift_id, date = %date_string, "shift created");
        Ok(shift_id)
    }

    /// Updates a shift's description and replaces its assignment set.
    ///
    /// The assignment set is replaced wholesale: rows for unassigned
    /// instructors disappear, rows for new ones appear, all in one
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::NotFound`] if no shift has the given ID.
    pub fn update_shift(
        &mut self,
        shift_id: i64,
        description: Option<&str>,
        instructor_ids: &[i64],
    ) -> Result<(), PersistenceError> {
        let tx: Transaction<'_> = self.conn.transaction()?;
        let updated: usize = tx.execute(
            "UPDATE shifts SET description = ?1 WHERE shift_id = ?2",
            params![description, shift_id],
        )?;
        if updated == 0 {
            return Err(PersistenceError::NotFound(format!("Shift {shift_id}")));
        }
        tx.execute(
            "DELETE FROM shift_assignments WHERE shift_id = ?1",
            params![shift_id],
        )?;
        insert_assignments(&tx, shift_id, instructor_ids)?;
        tx.commit()?;
        tracing::debug!(shift_id, "shift updated");
        Ok(())
    }

    /// Deletes a shift. Assignments cascade.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::NotFound`] if no shift has the given ID.
    pub fn delete_shift(&mut self, shift_id: i64) -> Result<(), PersistenceError> {
        let deleted: usize = self.conn.execute(
            "DELETE FROM shifts WHERE shift_id = ?1",
            params![shift_id],
        )?;
        if deleted == 0 {
            return Err(PersistenceError::NotFound(format!("Shift {shift_id}")));
        }
        tracing::debug!(shift_id, "shift deleted");
        Ok(())
    }

    // ========================================================================
    // Master data
    // ========================================================================

    /// Inserts a department and returns its canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_department(&mut self, name: &str, code: &str) -> Result<i64, PersistenceError> {
        self.conn.execute(
            "INSERT INTO departments (name, code) VALUES (?1, ?2)",
            params![name, code],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Inserts a duty type and returns its canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_shift_type(&mut self, name: &str) -> Result<i64, PersistenceError> {
        self.conn.execute(
            "INSERT INTO shift_types (name) VALUES (?1)",
            params![name],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Inserts an instructor and returns their canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_instructor(&mut self, instructor: &Instructor) -> Result<i64, PersistenceError> {
        self.conn.execute(
            "INSERT INTO instructors \
             (last_name, first_name, last_name_kana, first_name_kana, status, notes) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                instructor.last_name,
                instructor.first_name,
                instructor.last_name_kana,
                instructor.first_name_kana,
                instructor.status.as_str(),
                instructor.notes
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Inserts a certification and returns its canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_certification(
        &mut self,
        certification: &Certification,
    ) -> Result<i64, PersistenceError> {
        self.conn.execute(
            "INSERT INTO certifications \
             (department_id, organization, name, short_name, is_active) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                certification.department_id,
                certification.organization,
                certification.name,
                certification.short_name,
                i64::from(certification.is_active)
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Records that an instructor holds a certification.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn certify_instructor(
        &mut self,
        instructor_id: i64,
        certification_id: i64,
    ) -> Result<(), PersistenceError> {
        self.conn.execute(
            "INSERT INTO instructor_certifications (instructor_id, certification_id) \
             VALUES (?1, ?2)",
            params![instructor_id, certification_id],
        )?;
        Ok(())
    }
}

fn insert_assignments(
    tx: &Transaction<'_>,
    shift_id: i64,
    instructor_ids: &[i64],
) -> Result<(), PersistenceError> {
    let mut stmt = tx.prepare(
        "INSERT INTO shift_assignments (shift_id, instructor_id) VALUES (?1, ?2)",
    )?;
    for instructor_id in instructor_ids {
        stmt.execute(params![shift_id, instructor_id])?;
    }
    Ok(())
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Summary text shown when an instructor holds no certification for the
/// queried department. Kept as the literal the roster UI displays.
pub const NO_CERTIFICATION_SUMMARY: &str = "なし";

/// Represents the lifecycle state of an instructor.
///
/// Only `Active` instructors are eligible for new shift assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InstructorStatus {
    /// Currently teaching. Eligible for assignment.
    #[default]
    Active,
    /// Temporarily not teaching (injury, leave of absence).
    Inactive,
    /// Permanently left the school.
    Retired,
}

impl FromStr for InstructorStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "RETIRED" => Ok(Self::Retired),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for InstructorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl InstructorStatus {
    /// Converts this status to its storage string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Retired => "RETIRED",
        }
    }

    /// Returns whether an instructor in this status may receive new
    /// assignments.
    #[must_use]
    pub const fn is_assignable(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Represents a teaching department.
///
/// Departments are immutable reference data (e.g. "SKI", "SNOWBOARD")
/// owned by the master-data collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the department has not been persisted yet.
    department_id: Option<i64>,
    /// Human-readable department name.
    name: String,
    /// Short department code (e.g. "SKI").
    code: String,
}

impl Department {
    /// Creates a new `Department` without a persisted ID.
    #[must_use]
    pub const fn new(name: String, code: String) -> Self {
        Self {
            department_id: None,
            name,
            code,
        }
    }

    /// Creates a `Department` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(department_id: i64, name: String, code: String) -> Self {
        Self {
            department_id: Some(department_id),
            name,
            code,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn department_id(&self) -> Option<i64> {
        self.department_id
    }

    /// Returns the department name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the short department code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Represents an instructor.
///
/// Instructors are owned by the master-data collaborator; the roster core
/// references them but never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    /// Canonical internal identifier (opaque, stable, immutable).
    /// Optional to support creation before persistence.
    pub instructor_id: Option<i64>,
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Kana reading of the family name, when recorded.
    pub last_name_kana: Option<String>,
    /// Kana reading of the given name, when recorded.
    pub first_name_kana: Option<String>,
    /// Lifecycle status. Only `Active` instructors may be assigned.
    pub status: InstructorStatus,
    /// Free-text notes (medical restrictions, preferred slopes, ...).
    pub notes: Option<String>,
}

impl Instructor {
    /// Creates a new `Instructor` without a persisted ID.
    #[must_use]
    pub const fn new(
        last_name: String,
        first_name: String,
        last_name_kana: Option<String>,
        first_name_kana: Option<String>,
        status: InstructorStatus,
        notes: Option<String>,
    ) -> Self {
        Self {
            instructor_id: None,
            last_name,
            first_name,
            last_name_kana,
            first_name_kana,
            status,
            notes,
        }
    }

    /// Creates an `Instructor` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        instructor_id: i64,
        last_name: String,
        first_name: String,
        last_name_kana: Option<String>,
        first_name_kana: Option<String>,
        status: InstructorStatus,
        notes: Option<String>,
    ) -> Self {
        Self {
            instructor_id: Some(instructor_id),
            last_name,
            first_name,
            last_name_kana,
            first_name_kana,
            status,
            notes,
        }
    }

    /// Returns the flattened display name ("last first").
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Returns the kana display name.
    ///
    /// Each name part falls back to its kanji form independently when the
    /// kana reading is absent.
    #[must_use]
    pub fn display_name_kana(&self) -> String {
        let last: &str = self.last_name_kana.as_deref().unwrap_or(&self.last_name);
        let first: &str = self.first_name_kana.as_deref().unwrap_or(&self.first_name);
        format!("{last} {first}")
    }

    /// Returns the key used to order instructor lists: kana reading when
    /// present, kanji otherwise, last name before first name.
    #[must_use]
    pub fn collation_key(&self) -> (String, String) {
        (
            self.last_name_kana
                .clone()
                .unwrap_or_else(|| self.last_name.clone()),
            self.first_name_kana
                .clone()
                .unwrap_or_else(|| self.first_name.clone()),
        )
    }
}

/// Represents a certification issued by a department.
///
/// Certifications link instructors to departments through
/// [`InstructorCertification`]; eligibility is derived transitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// The canonical numeric identifier assigned by the database.
    pub certification_id: Option<i64>,
    /// The department that recognizes this certification.
    pub department_id: i64,
    /// Issuing organization (e.g. "SAJ", "JSBA").
    pub organization: String,
    /// Full certification name.
    pub name: String,
    /// Short name used in list summaries.
    pub short_name: String,
    /// Whether this certification is currently recognized.
    pub is_active: bool,
}

/// The binding of one instructor to one certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstructorCertification {
    /// The certified instructor.
    pub instructor_id: i64,
    /// The certification held.
    pub certification_id: i64,
}

/// Represents a duty type (e.g. "morning lesson", "patrol support").
///
/// Master data; referenced by shifts for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftType {
    /// The canonical numeric identifier assigned by the database.
    pub shift_type_id: Option<i64>,
    /// Human-readable duty type name.
    pub name: String,
}

/// A duty slot for one department/date/duty-type combination.
///
/// At most one persisted `Shift` exists per
/// `(date, department_id, shift_type_id)` triple; that triple is the natural
/// key used to decide edit-vs-create mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The canonical numeric identifier. `None` while unpersisted.
    pub shift_id: Option<i64>,
    /// Calendar date (date-only, no time-of-day semantics).
    pub date: Date,
    /// The department this slot belongs to.
    pub department_id: i64,
    /// The duty type of this slot.
    pub shift_type_id: i64,
    /// Optional free-text description.
    pub description: Option<String>,
}

impl Shift {
    /// Creates a new unpersisted `Shift`.
    #[must_use]
    pub const fn new(
        date: Date,
        department_id: i64,
        shift_type_id: i64,
        description: Option<String>,
    ) -> Self {
        Self {
            shift_id: None,
            date,
            department_id,
            shift_type_id,
            description,
        }
    }

    /// Creates a `Shift` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        shift_id: i64,
        date: Date,
        department_id: i64,
        shift_type_id: i64,
        description: Option<String>,
    ) -> Self {
        Self {
            shift_id: Some(shift_id),
            date,
            department_id,
            shift_type_id,
            description,
        }
    }

    /// Returns the natural key of this shift.
    #[must_use]
    pub const fn natural_key(&self) -> (Date, i64, i64) {
        (self.date, self.department_id, self.shift_type_id)
    }
}

/// The binding of one instructor to one shift.
///
/// An instructor appears at most once per shift. The same instructor on two
/// different shifts of the same date is a *soft* conflict: surfaced to the
/// operator, never enforced as a hard invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// The shift.
    pub shift_id: i64,
    /// The assigned instructor.
    pub instructor_id: i64,
}

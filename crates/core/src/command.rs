// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A command represents operator intent as data only.
///
/// Commands are the only way to request edit-session changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Append a new, unsaved slot and open it for editing.
    AddSlot {
        /// The department the new slot belongs to.
        department_id: i64,
    },
    /// Open an existing slot for editing. At most one slot may be in the
    /// editing state at a time across the whole day.
    EditSlot {
        /// The slot index within the session.
        index: usize,
    },
    /// Cancel the edit in progress: a never-saved slot is removed, a
    /// persisted slot is restored to its pre-edit snapshot.
    CancelEdit {
        /// The slot index within the session.
        index: usize,
    },
    /// Toggle an instructor on the slot currently being edited: added if
    /// absent, removed if present.
    ToggleInstructor {
        /// The instructor to toggle.
        instructor_id: i64,
    },
    /// Run the pre-save gate and request persistence of the slot
    /// (create when never saved, update otherwise).
    SaveSlot {
        /// The slot index within the session.
        index: usize,
    },
    /// Delete a slot. A never-saved slot is removed locally without any
    /// persistence call; deleting a persisted shift requires confirmation.
    DeleteSlot {
        /// The slot index within the session.
        index: usize,
        /// Whether the operator confirmed deleting a persisted shift.
        confirmed: bool,
    },
}

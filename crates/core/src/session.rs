// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use time::Date;
use yukiyama_roster_domain::Shift;

/// The value `shift_type_id` holds while the operator has not picked a duty
/// type yet. Never a valid persisted id.
pub const SHIFT_TYPE_UNSELECTED: i64 = 0;

/// The editable fields of one duty slot.
///
/// This is a pure domain value: it carries no UI state, so the save gate and
/// the conflict/eligibility engine can be tested without any session concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotForm {
    /// The persisted shift id, or `None` while the slot has never been saved.
    pub shift_id: Option<i64>,
    /// The department this slot belongs to.
    pub department_id: i64,
    /// The selected duty type, or [`SHIFT_TYPE_UNSELECTED`].
    pub shift_type_id: i64,
    /// Free-text description. Empty means absent.
    pub description: String,
    /// The assigned instructors. Order is irrelevant; an id appears at most
    /// once.
    pub instructor_ids: Vec<i64>,
}

impl SlotForm {
    /// Creates the form for a brand-new slot in a department.
    #[must_use]
    pub const fn new(department_id: i64) -> Self {
        Self {
            shift_id: None,
            department_id,
            shift_type_id: SHIFT_TYPE_UNSELECTED,
            description: String::new(),
            instructor_ids: Vec::new(),
        }
    }

    /// Creates the form for a persisted shift and its assignment set.
    #[must_use]
    pub fn from_shift(shift: &Shift, instructor_ids: Vec<i64>) -> Self {
        Self {
            shift_id: shift.shift_id,
            department_id: shift.department_id,
            shift_type_id: shift.shift_type_id,
            description: shift.description.clone().unwrap_or_default(),
            instructor_ids,
        }
    }

    /// Converts this form into an unpersisted [`Shift`] for the given date.
    #[must_use]
    pub fn to_shift(&self, date: Date) -> Shift {
        Shift::new(
            date,
            self.department_id,
            self.shift_type_id,
            self.optional_description(),
        )
    }

    /// Returns the description with empty mapped to `None`.
    #[must_use]
    pub fn optional_description(&self) -> Option<String> {
        if self.description.is_empty() {
            None
        } else {
            Some(self.description.clone())
        }
    }

    /// Returns whether the instructor is currently assigned on this form.
    #[must_use]
    pub fn has_instructor(&self, instructor_id: i64) -> bool {
        self.instructor_ids.contains(&instructor_id)
    }

    /// Adds the instructor if absent, removes it if present.
    pub(crate) fn toggle_instructor(&mut self, instructor_id: i64) {
        if let Some(position) = self
            .instructor_ids
            .iter()
            .position(|id| *id == instructor_id)
        {
            self.instructor_ids.remove(position);
        } else {
            self.instructor_ids.push(instructor_id);
        }
    }
}

/// Validates a slot against the pre-save gate.
///
/// Every violated rule is collected and reported together; the check never
/// short-circuits on the first failure.
///
/// # Errors
///
/// Returns `CoreError::SlotValidation` listing each violation: department
/// unselected, duty type unselected, or no instructor assigned.
pub fn validate_slot_for_save(form: &SlotForm) -> Result<(), CoreError> {
    let mut messages: Vec<String> = Vec::new();

    if form.department_id <= 0 {
        messages.push(String::from("Select a department"));
    }
    if form.shift_type_id <= SHIFT_TYPE_UNSELECTED {
        messages.push(String::from("Select a shift type"));
    }
    if form.instructor_ids.is_empty() {
        messages.push(String::from("At least one instructor must be assigned"));
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(CoreError::SlotValidation { messages })
    }
}

/// The UI-facing state of one slot card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// Read-only card.
    Viewing,
    /// Form visible, fields mutable.
    Editing,
}

/// One duty slot inside an edit session: a pure [`SlotForm`] wrapped by its
/// editing envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftSlot {
    /// The editable fields.
    pub form: SlotForm,
    /// Snapshot taken when editing opened; restored on cancel.
    pub(crate) baseline: SlotForm,
    /// Whether the card is read-only or in form mode.
    pub edit_state: EditState,
    /// True until the slot's first successful save.
    pub is_new: bool,
}

impl ShiftSlot {
    /// Creates a slot for a shift loaded from the store.
    #[must_use]
    pub fn from_persisted(form: SlotForm) -> Self {
        Self {
            baseline: form.clone(),
            form,
            edit_state: EditState::Viewing,
            is_new: false,
        }
    }

    /// Creates a brand-new slot, already open for editing.
    #[must_use]
    pub fn new_unsaved(department_id: i64) -> Self {
        let form: SlotForm = SlotForm::new(department_id);
        Self {
            baseline: form.clone(),
            form,
            edit_state: EditState::Editing,
            is_new: true,
        }
    }

    /// Returns whether this slot is currently in form mode.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.edit_state, EditState::Editing)
    }
}

/// The transient working set of duty slots for one calendar day.
///
/// The currently-editing slot is tracked by an explicit index, maintained
/// solely by the session transitions; no operation scans the collection to
/// find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// The day being edited.
    pub date: Date,
    /// One slot per shift on the day, plus any unsaved additions.
    pub slots: Vec<ShiftSlot>,
    /// The index of the slot in the editing state, if any. At most one slot
    /// is ever in that state.
    pub editing: Option<usize>,
    /// True while a save or delete round-trip is in flight; blocks further
    /// save/delete commands until the session is rebuilt.
    pub is_submitting: bool,
}

impl EditSession {
    /// Seeds a session from freshly loaded day data.
    #[must_use]
    pub fn from_loaded(date: Date, forms: Vec<SlotForm>) -> Self {
        Self {
            date,
            slots: forms.into_iter().map(ShiftSlot::from_persisted).collect(),
            editing: None,
            is_submitting: false,
        }
    }

    /// Returns the slot currently being edited, if any.
    #[must_use]
    pub fn editing_slot(&self) -> Option<&ShiftSlot> {
        self.editing.and_then(|index| self.slots.get(index))
    }
}

/// A persistence request emitted by a session transition.
///
/// The session never talks to the store itself: effects are handed to the
/// caller, and after the write succeeds the whole session is rebuilt from a
/// fresh orchestrator response rather than patched locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Persist a brand-new shift with its assignment set.
    CreateShift {
        /// The shift to create (unpersisted, id `None`).
        shift: Shift,
        /// The instructors to assign.
        instructor_ids: Vec<i64>,
    },
    /// Update a persisted shift, replacing its whole assignment set.
    UpdateShift {
        /// The shift to update.
        shift_id: i64,
        /// The new description, absent when cleared.
        description: Option<String>,
        /// The complete new assignment set.
        instructor_ids: Vec<i64>,
    },
    /// Delete a persisted shift; assignments are removed with it.
    DeleteShift {
        /// The shift to delete.
        shift_id: i64,
    },
}

/// The result of a successful session transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTransition {
    /// The new session after the transition.
    pub new_session: EditSession,
    /// The persistence request to carry out, if the transition produced one.
    pub effect: Option<SessionEffect>,
}

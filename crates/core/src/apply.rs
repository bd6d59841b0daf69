// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::SessionCommand;
use crate::error::CoreError;
use crate::session::{
    EditSession, EditState, SessionEffect, SessionTransition, ShiftSlot, validate_slot_for_save,
};

/// Applies a command to the current session, producing a new session and an
/// optional persistence effect.
///
/// The input session is never mutated; a failed command leaves no trace.
///
/// # Arguments
///
/// * `session` - The current edit session (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(SessionTransition)` containing the new session and, for save/delete
///   of persisted shifts, the persistence effect to carry out
/// * `Err(CoreError)` if the command is invalid in the current session
///
/// # Errors
///
/// Returns an error if:
/// - The command references a slot index outside the collection
/// - An edit is requested while another slot is being edited
/// - The pre-save gate rejects the slot
/// - A persisted delete lacks confirmation
/// - A save or delete arrives while one is already in flight
#[allow(clippy::too_many_lines)]
pub fn apply(
    session: &EditSession,
    command: SessionCommand,
) -> Result<SessionTransition, CoreError> {
    match command {
        SessionCommand::AddSlot { department_id } => {
            if let Some(editing_index) = session.editing {
                return Err(CoreError::EditInProgress { editing_index });
            }

            let mut new_session: EditSession = session.clone();
            new_session.slots.push(ShiftSlot::new_unsaved(department_id));
            new_session.editing = Some(new_session.slots.len() - 1);

            Ok(SessionTransition {
                new_session,
                effect: None,
            })
        }
        SessionCommand::EditSlot { index } => {
            check_index(session, index)?;
            if let Some(editing_index) = session.editing {
                if editing_index == index {
                    // Already the editing slot; nothing to do.
                    return Ok(SessionTransition {
                        new_session: session.clone(),
                        effect: None,
                    });
                }
                return Err(CoreError::EditInProgress { editing_index });
            }

            let mut new_session: EditSession = session.clone();
            let slot: &mut ShiftSlot = &mut new_session.slots[index];
            slot.baseline = slot.form.clone();
            slot.edit_state = EditState::Editing;
            new_session.editing = Some(index);

            Ok(SessionTransition {
                new_session,
                effect: None,
            })
        }
        SessionCommand::CancelEdit { index } => {
            check_index(session, index)?;
            if session.editing != Some(index) {
                return Err(CoreError::SlotNotEditing { index });
            }

            let mut new_session: EditSession = session.clone();
            if new_session.slots[index].is_new {
                // A never-saved slot disappears entirely on cancel.
                new_session.slots.remove(index);
            } else {
                let slot: &mut ShiftSlot = &mut new_session.slots[index];
                slot.form = slot.baseline.clone();
                slot.edit_state = EditState::Viewing;
            }
            new_session.editing = None;

            Ok(SessionTransition {
                new_session,
                effect: None,
            })
        }
        SessionCommand::ToggleInstructor { instructor_id } => {
            let Some(index) = session.editing else {
                return Err(CoreError::NoSlotEditing);
            };

            let mut new_session: EditSession = session.clone();
            new_session.slots[index].form.toggle_instructor(instructor_id);

            Ok(SessionTransition {
                new_session,
                effect: None,
            })
        }
        SessionCommand::SaveSlot { index } => {
            if session.is_submitting {
                return Err(CoreError::SubmissionInFlight);
            }
            check_index(session, index)?;
            if session.editing != Some(index) {
                return Err(CoreError::SlotNotEditing { index });
            }

            let slot: &ShiftSlot = &session.slots[index];
            validate_slot_for_save(&slot.form)?;

            let effect: SessionEffect = if slot.is_new {
                SessionEffect::CreateShift {
                    shift: slot.form.to_shift(session.date),
                    instructor_ids: slot.form.instructor_ids.clone(),
                }
            } else {
                let Some(shift_id) = slot.form.shift_id else {
                    return Err(CoreError::SlotMissingShiftId { index });
                };
                SessionEffect::UpdateShift {
                    shift_id,
                    description: slot.form.optional_description(),
                    instructor_ids: slot.form.instructor_ids.clone(),
                }
            };

            let mut new_session: EditSession = session.clone();
            new_session.is_submitting = true;

            Ok(SessionTransition {
                new_session,
                effect: Some(effect),
            })
        }
        SessionCommand::DeleteSlot { index, confirmed } => {
            if session.is_submitting {
                return Err(CoreError::SubmissionInFlight);
            }
            check_index(session, index)?;

            match session.slots[index].form.shift_id {
                None => {
                    // Never persisted: removed locally, no persistence call.
                    let mut new_session: EditSession = session.clone();
                    new_session.slots.remove(index);
                    new_session.editing = match new_session.editing {
                        Some(editing) if editing == index => None,
                        Some(editing) if editing > index => Some(editing - 1),
                        other => other,
                    };

                    Ok(SessionTransition {
                        new_session,
                        effect: None,
                    })
                }
                Some(shift_id) => {
                    if !confirmed {
                        return Err(CoreError::DeleteNotConfirmed { index });
                    }

                    let mut new_session: EditSession = session.clone();
                    new_session.is_submitting = true;

                    Ok(SessionTransition {
                        new_session,
                        effect: Some(SessionEffect::DeleteShift { shift_id }),
                    })
                }
            }
        }
    }
}

/// Validates that a slot index lies within the session.
fn check_index(session: &EditSession, index: usize) -> Result<(), CoreError> {
    if index >= session.slots.len() {
        return Err(CoreError::SlotIndexOutOfRange {
            index,
            len: session.slots.len(),
        });
    }
    Ok(())
}

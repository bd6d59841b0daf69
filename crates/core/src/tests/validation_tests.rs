// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{empty_session, persisted_form};
use crate::{
    CoreError, EditSession, SessionCommand, SlotForm, apply, validate_slot_for_save,
};

#[test]
fn test_complete_slot_passes_gate() {
    let form: SlotForm = persisted_form(10, vec![7]);
    assert!(validate_slot_for_save(&form).is_ok());
}

#[test]
fn test_empty_instructor_set_is_rejected() {
    let form: SlotForm = persisted_form(10, Vec::new());

    let result = validate_slot_for_save(&form);
    match result {
        Err(CoreError::SlotValidation { messages }) => {
            assert_eq!(messages.len(), 1);
            assert!(messages[0].contains("At least one instructor"));
        }
        other => panic!("expected SlotValidation, got {other:?}"),
    }
}

#[test]
fn test_all_violations_collected_together() {
    let form: SlotForm = SlotForm::new(0);

    let result = validate_slot_for_save(&form);
    match result {
        Err(CoreError::SlotValidation { messages }) => {
            // Department, shift type, and instructors all reported at once.
            assert_eq!(messages.len(), 3);
            assert!(messages.iter().any(|m| m.contains("department")));
            assert!(messages.iter().any(|m| m.contains("shift type")));
            assert!(messages.iter().any(|m| m.contains("At least one instructor")));
        }
        other => panic!("expected SlotValidation, got {other:?}"),
    }
}

#[test]
fn test_unselected_shift_type_is_rejected() {
    let mut form: SlotForm = persisted_form(10, vec![7]);
    form.shift_type_id = 0;

    let result = validate_slot_for_save(&form);
    match result {
        Err(CoreError::SlotValidation { messages }) => {
            assert_eq!(messages.len(), 1);
            assert!(messages[0].contains("shift type"));
        }
        other => panic!("expected SlotValidation, got {other:?}"),
    }
}

#[test]
fn test_invalid_slot_never_reaches_save_effect() {
    // An empty duty slot is stopped by the gate: no effect is emitted.
    let session: EditSession = empty_session();
    let mut session: EditSession = apply(&session, SessionCommand::AddSlot { department_id: 1 })
        .unwrap()
        .new_session;
    session.slots[0].form.shift_type_id = 2;

    let result = apply(&session, SessionCommand::SaveSlot { index: 0 });
    match result {
        Err(CoreError::SlotValidation { messages }) => {
            assert!(messages.iter().any(|m| m.contains("At least one instructor")));
        }
        other => panic!("expected SlotValidation, got {other:?}"),
    }
    // Session untouched: still not submitting.
    assert!(!session.is_submitting);
}

#[test]
fn test_validation_error_joins_messages_for_display() {
    let form: SlotForm = SlotForm::new(0);
    let error: CoreError = validate_slot_for_save(&form).unwrap_err();
    let rendered: String = error.to_string();
    assert_eq!(rendered.lines().count(), 3);
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during edit-session transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The pre-save gate rejected the slot. Every violated rule is listed,
    /// not just the first.
    SlotValidation {
        /// One human-readable line per violated rule.
        messages: Vec<String>,
    },
    /// A command referenced a slot index outside the collection.
    SlotIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of slots in the session.
        len: usize,
    },
    /// Another slot is already in the editing state.
    EditInProgress {
        /// The index of the slot currently being edited.
        editing_index: usize,
    },
    /// The command targets a slot that is not being edited.
    SlotNotEditing {
        /// The targeted index.
        index: usize,
    },
    /// An instructor toggle arrived while no slot was being edited.
    NoSlotEditing,
    /// Deleting a persisted shift was requested without confirmation.
    DeleteNotConfirmed {
        /// The targeted index.
        index: usize,
    },
    /// A save or delete round-trip is already in flight.
    SubmissionInFlight,
    /// A slot marked as persisted carries no shift id.
    SlotMissingShiftId {
        /// The targeted index.
        index: usize,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SlotValidation { messages } => write!(f, "{}", messages.join("\n")),
            Self::SlotIndexOutOfRange { index, len } => {
                write!(f, "Slot index {index} is out of range ({len} slots)")
            }
            Self::EditInProgress { editing_index } => {
                write!(f, "Slot {editing_index} is already being edited")
            }
            Self::SlotNotEditing { index } => {
                write!(f, "Slot {index} is not being edited")
            }
            Self::NoSlotEditing => {
                write!(
                    f,
                    "No slot is being edited. Open a slot for editing before toggling instructors"
                )
            }
            Self::DeleteNotConfirmed { index } => {
                write!(f, "Deleting the saved shift in slot {index} requires confirmation")
            }
            Self::SubmissionInFlight => {
                write!(f, "A save or delete is already in progress")
            }
            Self::SlotMissingShiftId { index } => {
                write!(f, "Slot {index} is marked as saved but carries no shift id")
            }
        }
    }
}

impl std::error::Error for CoreError {}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use yukiyama_roster::CoreError;
use yukiyama_roster_domain::DomainError;
use yukiyama_roster_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidIdFormat(_) | DomainError::InvalidIdValue(_) => ApiError::InvalidInput {
            field: String::from("id"),
            message: err.to_string(),
        },
        DomainError::DateParse { .. } | DomainError::DateArithmeticOverflow { .. } => {
            ApiError::InvalidInput {
                field: String::from("date"),
                message: err.to_string(),
            }
        }
        DomainError::MissingParams { ref missing } => ApiError::InvalidInput {
            field: missing.join(", "),
            message: err.to_string(),
        },
        DomainError::InvalidStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message: err.to_string(),
        },
        DomainError::InvalidDateRange { .. } => ApiError::InvalidInput {
            field: String::from("date_range"),
            message: err.to_string(),
        },
        DomainError::InvalidMonth(_) => ApiError::InvalidInput {
            field: String::from("month"),
            message: err.to_string(),
        },
        DomainError::DepartmentNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Department"),
            message: format!("Department {id} does not exist"),
        },
        DomainError::ShiftTypeNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Shift type"),
            message: format!("Shift type {id} does not exist"),
        },
        DomainError::InstructorNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Instructor"),
            message: format!("Instructor {id} does not exist"),
        },
        DomainError::ShiftNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Shift"),
            message: format!("Shift {id} does not exist"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::SlotValidation { ref messages } => ApiError::InvalidInput {
            field: String::from("slot"),
            message: messages.join("\n"),
        },
        CoreError::SlotIndexOutOfRange { .. } => ApiError::InvalidInput {
            field: String::from("index"),
            message: err.to_string(),
        },
        CoreError::EditInProgress { .. } => ApiError::DomainRuleViolation {
            rule: String::from("single_slot_editing"),
            message: err.to_string(),
        },
        CoreError::SlotNotEditing { .. } | CoreError::NoSlotEditing => {
            ApiError::DomainRuleViolation {
                rule: String::from("edit_session_shape"),
                message: err.to_string(),
            }
        }
        CoreError::DeleteNotConfirmed { .. } => ApiError::DomainRuleViolation {
            rule: String::from("delete_confirmation"),
            message: err.to_string(),
        },
        CoreError::SubmissionInFlight => ApiError::DomainRuleViolation {
            rule: String::from("submission_in_flight"),
            message: err.to_string(),
        },
        CoreError::SlotMissingShiftId { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// A missing row surfaces as `ResourceNotFound`; everything else is logged
/// in full and returned to the operator as a generic internal error so
/// database detail never leaks.
#[must_use]
pub fn translate_persistence_error(err: &PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Shift"),
            message: message.clone(),
        },
        other => {
            tracing::error!(error = %other, "persistence operation failed");
            ApiError::Internal {
                message: String::from("A database error occurred"),
            }
        }
    }
}

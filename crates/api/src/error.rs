// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use thiserror::Error;
use u_planner::CoreError;
use u_planner_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. The server layer maps each variant to an HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The candidate entry collides with an admitted entry.
    #[error("Scheduling conflict ({rule}): {message}")]
    Conflict {
        /// The violated non-overlap rule.
        rule: String,
        /// A human-readable description of the collision.
        message: String,
        /// The admitted entry blocking the candidate.
        conflicting_entry_id: i64,
    },
    /// A domain rule other than the non-overlap invariants was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownReference { kind, id } => ApiError::ResourceNotFound {
            resource_type: kind.as_str().to_string(),
            message: format!("Referenced {kind} {id} does not exist"),
        },
        DomainError::RoomConflict { conflicting_entry } => ApiError::Conflict {
            rule: String::from("room_slot_unique"),
            message: format!(
                "Room is already occupied during this slot by entry {}",
                conflicting_entry.value()
            ),
            conflicting_entry_id: conflicting_entry.value(),
        },
        DomainError::TeacherConflict { conflicting_entry } => ApiError::Conflict {
            rule: String::from("teacher_slot_unique"),
            message: format!(
                "Teacher is already scheduled during this slot by entry {}",
                conflicting_entry.value()
            ),
            conflicting_entry_id: conflicting_entry.value(),
        },
        DomainError::InvalidFilter { entity, field } => ApiError::InvalidInput {
            field,
            message: format!("Unknown filter field for {entity}"),
        },
        DomainError::RoomCapacityExceeded {
            room_capacity,
            enrolled_students,
        } => ApiError::DomainRuleViolation {
            rule: String::from("room_capacity"),
            message: format!(
                "Room capacity ({room_capacity}) is less than enrolled students ({enrolled_students})"
            ),
        },
        DomainError::RoomTypeMismatch {
            room_type,
            required_room_type,
        } => ApiError::DomainRuleViolation {
            rule: String::from("room_type"),
            message: format!(
                "Room is of type '{room_type}', but the subject requires '{required_room_type}'"
            ),
        },
        DomainError::TeacherUnavailable {
            teacher,
            day,
            time_module,
        } => ApiError::DomainRuleViolation {
            rule: String::from("teacher_availability"),
            message: format!(
                "Teacher {} is not available on day {} module {}",
                teacher.value(),
                day.value(),
                time_module.value()
            ),
        },
        DomainError::DuplicateDayCode(code) => ApiError::DomainRuleViolation {
            rule: String::from("unique_day_code"),
            message: format!("Day code '{code}' already exists"),
        },
        DomainError::DuplicateModHor(code) => ApiError::DomainRuleViolation {
            rule: String::from("unique_mod_hor"),
            message: format!("Time module code '{code}' already exists"),
        },
        DomainError::DuplicateRoomCode(code) => ApiError::DomainRuleViolation {
            rule: String::from("unique_room_code"),
            message: format!("Room code '{code}' already exists"),
        },
        DomainError::DuplicateRoomType(name) => ApiError::DomainRuleViolation {
            rule: String::from("unique_room_type"),
            message: format!("Room type '{name}' already exists"),
        },
        DomainError::DuplicateRut(rut) => ApiError::DomainRuleViolation {
            rule: String::from("unique_rut"),
            message: format!("Teacher rut '{rut}' already exists"),
        },
        DomainError::DuplicateFaculty(name) => ApiError::DomainRuleViolation {
            rule: String::from("unique_faculty"),
            message: format!("Faculty '{name}' already exists"),
        },
        DomainError::DuplicateRoomGroup(name) => ApiError::DomainRuleViolation {
            rule: String::from("unique_room_group"),
            message: format!("Room group '{name}' already exists"),
        },
        DomainError::DuplicateAvailability {
            teacher,
            day,
            time_module,
        } => ApiError::DomainRuleViolation {
            rule: String::from("unique_availability"),
            message: format!(
                "Availability already declared for teacher {} on day {} module {}",
                teacher.value(),
                day.value(),
                time_module.value()
            ),
        },
        DomainError::InvalidTimeRange {
            start_time,
            end_time,
        } => ApiError::InvalidInput {
            field: String::from("start_time"),
            message: format!("Start ({start_time}) must be before end ({end_time})"),
        },
        DomainError::InvalidCapacity { capacity } => ApiError::InvalidInput {
            field: String::from("capacity"),
            message: format!("Capacity must be positive, got {capacity}"),
        },
        DomainError::InvalidCode(msg) => ApiError::InvalidInput {
            field: String::from("code"),
            message: msg,
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidSemester(value) => ApiError::InvalidInput {
            field: String::from("semester"),
            message: format!("Semester must be '1' or '2', got '{value}'"),
        },
        DomainError::EmptyRoomGroup(name) => ApiError::InvalidInput {
            field: String::from("room_codes"),
            message: format!("Room group '{name}' must have at least one member room"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

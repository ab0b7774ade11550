// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::{Day, Faculty, Room, RoomGroup, RoomType, Teacher, TimeModule};
use crate::error::DomainError;
use time::Time;

/// Validates a day's field constraints.
///
/// # Errors
///
/// Returns an error if the code or name is empty.
pub fn validate_day_fields(code: &str, name: &str) -> Result<(), DomainError> {
    if code.trim().is_empty() {
        return Err(DomainError::InvalidCode(String::from(
            "Day code cannot be empty",
        )));
    }
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Day name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates a time module's field constraints.
///
/// # Errors
///
/// Returns an error if the `mod_hor` code is empty or the start time is
/// not strictly before the end time.
pub fn validate_time_module_fields(
    mod_hor: &str,
    start_time: Time,
    end_time: Time,
) -> Result<(), DomainError> {
    if mod_hor.trim().is_empty() {
        return Err(DomainError::InvalidCode(String::from(
            "Time module code cannot be empty",
        )));
    }
    // Rule: start_time < end_time
    if start_time >= end_time {
        return Err(DomainError::InvalidTimeRange {
            start_time,
            end_time,
        });
    }
    Ok(())
}

/// Validates a room's field constraints.
///
/// # Errors
///
/// Returns an error if the code or name is empty, or the capacity is zero.
pub fn validate_room_fields(code: &str, name: &str, capacity: u32) -> Result<(), DomainError> {
    if code.trim().is_empty() {
        return Err(DomainError::InvalidCode(String::from(
            "Room code cannot be empty",
        )));
    }
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Room name cannot be empty",
        )));
    }
    // Rule: capacity > 0
    if capacity == 0 {
        return Err(DomainError::InvalidCapacity { capacity });
    }
    Ok(())
}

/// Validates a teacher's field constraints.
///
/// # Errors
///
/// Returns an error if the full name or rut is empty.
pub fn validate_teacher_fields(full_name: &str, rut: &str) -> Result<(), DomainError> {
    if full_name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Teacher name cannot be empty",
        )));
    }
    if rut.trim().is_empty() {
        return Err(DomainError::InvalidCode(String::from(
            "Teacher rut cannot be empty",
        )));
    }
    Ok(())
}

/// Validates a subject's field constraints.
///
/// # Errors
///
/// Returns an error if the display name is empty.
pub fn validate_subject_fields(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Subject name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that a day code is unique among existing days.
///
/// Codes are compared case-insensitively; the caller is expected to pass
/// the raw (unnormalized) candidate code.
///
/// # Errors
///
/// Returns an error if the code already exists.
pub fn validate_day_code_unique(code: &str, existing: &[Day]) -> Result<(), DomainError> {
    let normalized: String = code.trim().to_uppercase();
    if existing.iter().any(|day| day.code == normalized) {
        return Err(DomainError::DuplicateDayCode(normalized));
    }
    Ok(())
}

/// Validates that a time module code is unique among existing modules.
///
/// # Errors
///
/// Returns an error if the `mod_hor` code already exists.
pub fn validate_mod_hor_unique(mod_hor: &str, existing: &[TimeModule]) -> Result<(), DomainError> {
    let normalized: String = mod_hor.trim().to_uppercase();
    if existing.iter().any(|module| module.mod_hor == normalized) {
        return Err(DomainError::DuplicateModHor(normalized));
    }
    Ok(())
}

/// Validates that a room code is unique among existing rooms.
///
/// # Errors
///
/// Returns an error if the code already exists.
pub fn validate_room_code_unique(code: &str, existing: &[Room]) -> Result<(), DomainError> {
    let normalized: String = code.trim().to_uppercase();
    if existing.iter().any(|room| room.code == normalized) {
        return Err(DomainError::DuplicateRoomCode(normalized));
    }
    Ok(())
}

/// Validates that a room type name is unique among existing types.
///
/// # Errors
///
/// Returns an error if the name already exists.
pub fn validate_room_type_unique(name: &str, existing: &[RoomType]) -> Result<(), DomainError> {
    let trimmed: &str = name.trim();
    if existing
        .iter()
        .any(|room_type| room_type.name.eq_ignore_ascii_case(trimmed))
    {
        return Err(DomainError::DuplicateRoomType(trimmed.to_string()));
    }
    Ok(())
}

/// Validates that a teacher rut is unique among existing teachers.
///
/// # Errors
///
/// Returns an error if the rut already exists.
pub fn validate_rut_unique(rut: &str, existing: &[Teacher]) -> Result<(), DomainError> {
    let normalized: String = rut.trim().to_uppercase();
    if existing.iter().any(|teacher| teacher.rut == normalized) {
        return Err(DomainError::DuplicateRut(normalized));
    }
    Ok(())
}

/// Validates that a faculty name is unique among existing faculties.
///
/// # Errors
///
/// Returns an error if the name already exists.
pub fn validate_faculty_unique(name: &str, existing: &[Faculty]) -> Result<(), DomainError> {
    let trimmed: &str = name.trim();
    if existing
        .iter()
        .any(|faculty| faculty.name.eq_ignore_ascii_case(trimmed))
    {
        return Err(DomainError::DuplicateFaculty(trimmed.to_string()));
    }
    Ok(())
}

/// Validates that a room group name is unique among existing groups.
///
/// # Errors
///
/// Returns an error if the name already exists.
pub fn validate_group_name_unique(name: &str, existing: &[RoomGroup]) -> Result<(), DomainError> {
    let trimmed: &str = name.trim();
    if existing
        .iter()
        .any(|group| group.name.eq_ignore_ascii_case(trimmed))
    {
        return Err(DomainError::DuplicateRoomGroup(trimmed.to_string()));
    }
    Ok(())
}

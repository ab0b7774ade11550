// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{DayId, EntryId, TeacherId, TimeModuleId};

/// The kind of catalog record a foreign reference points at.
///
/// Used by [`DomainError::UnknownReference`] so callers can report which
/// referenced entity is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// A day of the week.
    Day,
    /// A time module (block within a day).
    TimeModule,
    /// A room type.
    RoomType,
    /// A room.
    Room,
    /// A named room group.
    RoomGroup,
    /// A teacher.
    Teacher,
    /// A faculty.
    Faculty,
    /// A subject.
    Subject,
    /// A schedule entry.
    Entry,
}

impl ReferenceKind {
    /// Returns the string representation of this reference kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::TimeModule => "time module",
            Self::RoomType => "room type",
            Self::Room => "room",
            Self::RoomGroup => "room group",
            Self::Teacher => "teacher",
            Self::Faculty => "faculty",
            Self::Subject => "subject",
            Self::Entry => "schedule entry",
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A foreign reference does not resolve to a catalog record.
    UnknownReference {
        /// The kind of record that was referenced.
        kind: ReferenceKind,
        /// The identifier that failed to resolve.
        id: i64,
    },
    /// The room already hosts another entry in the same slot.
    RoomConflict {
        /// The entry already occupying the slot.
        conflicting_entry: EntryId,
    },
    /// The teacher is already assigned elsewhere in the same slot.
    TeacherConflict {
        /// The entry already claiming the teacher.
        conflicting_entry: EntryId,
    },
    /// A column filter referenced a field the entity does not expose.
    InvalidFilter {
        /// The entity kind being filtered.
        entity: &'static str,
        /// The unknown field name.
        field: String,
    },
    /// The room cannot seat the subject's enrolled students.
    RoomCapacityExceeded {
        /// The room's capacity.
        room_capacity: u32,
        /// The subject's enrolled student count.
        enrolled_students: u32,
    },
    /// The room's type does not match the subject's required type.
    RoomTypeMismatch {
        /// The room's type name.
        room_type: String,
        /// The type name the subject requires.
        required_room_type: String,
    },
    /// The teacher declared availability and this slot is not among it.
    TeacherUnavailable {
        /// The teacher.
        teacher: TeacherId,
        /// The requested day.
        day: DayId,
        /// The requested time module.
        time_module: TimeModuleId,
    },
    /// Day code already exists.
    DuplicateDayCode(String),
    /// Time module `mod_hor` code already exists.
    DuplicateModHor(String),
    /// Room code already exists.
    DuplicateRoomCode(String),
    /// Room type name already exists.
    DuplicateRoomType(String),
    /// Teacher rut already exists.
    DuplicateRut(String),
    /// Faculty name already exists.
    DuplicateFaculty(String),
    /// Room group name already exists.
    DuplicateRoomGroup(String),
    /// The availability slot was already declared for this teacher.
    DuplicateAvailability {
        /// The teacher.
        teacher: TeacherId,
        /// The day of the duplicate slot.
        day: DayId,
        /// The time module of the duplicate slot.
        time_module: TimeModuleId,
    },
    /// A time module's start time is not before its end time.
    InvalidTimeRange {
        /// The start time.
        start_time: time::Time,
        /// The end time.
        end_time: time::Time,
    },
    /// Room capacity must be positive.
    InvalidCapacity {
        /// The rejected capacity value.
        capacity: u32,
    },
    /// A code field is empty or invalid.
    InvalidCode(String),
    /// A name field is empty or invalid.
    InvalidName(String),
    /// Semester value is not recognized.
    InvalidSemester(String),
    /// A room group must have at least one member.
    EmptyRoomGroup(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownReference { kind, id } => {
                write!(f, "Unknown {kind} reference: {id}")
            }
            Self::RoomConflict { conflicting_entry } => {
                write!(
                    f,
                    "Room is already occupied during this slot by entry {}",
                    conflicting_entry.value()
                )
            }
            Self::TeacherConflict { conflicting_entry } => {
                write!(
                    f,
                    "Teacher is already scheduled during this slot by entry {}",
                    conflicting_entry.value()
                )
            }
            Self::InvalidFilter { entity, field } => {
                write!(f, "Unknown filter field '{field}' for {entity}")
            }
            Self::RoomCapacityExceeded {
                room_capacity,
                enrolled_students,
            } => {
                write!(
                    f,
                    "Room capacity ({room_capacity}) is less than enrolled students ({enrolled_students})"
                )
            }
            Self::RoomTypeMismatch {
                room_type,
                required_room_type,
            } => {
                write!(
                    f,
                    "Room type mismatch: room is '{room_type}', but subject requires '{required_room_type}'"
                )
            }
            Self::TeacherUnavailable {
                teacher,
                day,
                time_module,
            } => {
                write!(
                    f,
                    "Teacher {} is not available on day {} module {}",
                    teacher.value(),
                    day.value(),
                    time_module.value()
                )
            }
            Self::DuplicateDayCode(code) => write!(f, "Day code '{code}' already exists"),
            Self::DuplicateModHor(code) => {
                write!(f, "Time module code '{code}' already exists")
            }
            Self::DuplicateRoomCode(code) => write!(f, "Room code '{code}' already exists"),
            Self::DuplicateRoomType(name) => {
                write!(f, "Room type '{name}' already exists")
            }
            Self::DuplicateRut(rut) => write!(f, "Teacher rut '{rut}' already exists"),
            Self::DuplicateFaculty(name) => write!(f, "Faculty '{name}' already exists"),
            Self::DuplicateRoomGroup(name) => {
                write!(f, "Room group '{name}' already exists")
            }
            Self::DuplicateAvailability {
                teacher,
                day,
                time_module,
            } => {
                write!(
                    f,
                    "Availability already declared for teacher {} on day {} module {}",
                    teacher.value(),
                    day.value(),
                    time_module.value()
                )
            }
            Self::InvalidTimeRange {
                start_time,
                end_time,
            } => {
                write!(
                    f,
                    "Time module start ({start_time}) must be before end ({end_time})"
                )
            }
            Self::InvalidCapacity { capacity } => {
                write!(f, "Room capacity must be positive, got {capacity}")
            }
            Self::InvalidCode(msg) => write!(f, "Invalid code: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidSemester(value) => write!(f, "Invalid semester: {value}"),
            Self::EmptyRoomGroup(name) => {
                write!(f, "Room group '{name}' must have at least one member room")
            }
        }
    }
}

impl std::error::Error for DomainError {}

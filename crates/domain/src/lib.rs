// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod entry;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use catalog::{Day, Faculty, Room, RoomGroup, RoomType, Subject, Teacher, TimeModule};
pub use entry::{EntryDraft, ScheduleEntry};
pub use error::{DomainError, ReferenceKind};
pub use types::{
    DayId, EntryId, FacultyId, RoomGroupId, RoomId, RoomTypeId, Semester, Slot, SubjectId,
    TeacherId, Term, TimeModuleId,
};
pub use validation::{
    validate_day_code_unique, validate_day_fields, validate_faculty_unique,
    validate_group_name_unique, validate_mod_hor_unique, validate_room_code_unique,
    validate_room_fields, validate_room_type_unique, validate_rut_unique, validate_subject_fields,
    validate_teacher_fields, validate_time_module_fields,
};

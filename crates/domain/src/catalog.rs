// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{DayId, FacultyId, RoomGroupId, RoomId, RoomTypeId, SubjectId, TeacherId, TimeModuleId};
use serde::{Deserialize, Serialize};
use time::Time;

/// A day of the week as loaded from the institutional sheet.
///
/// The `code` is the canonical short form ("LU", "MA", ...) used for
/// matching; `name` is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Canonical identifier assigned by the catalog.
    pub id: DayId,
    /// The unique day code, normalized to uppercase.
    pub code: String,
    /// The display name (e.g., "Lunes").
    pub name: String,
}

impl Day {
    /// Creates a new `Day`.
    ///
    /// Codes are normalized to uppercase so matching is case-insensitive.
    #[must_use]
    pub fn new(id: DayId, code: &str, name: &str) -> Self {
        Self {
            id,
            code: code.trim().to_uppercase(),
            name: name.to_string(),
        }
    }
}

/// A time module: one block within the institutional day grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeModule {
    /// Canonical identifier assigned by the catalog.
    pub id: TimeModuleId,
    /// The unique module-horario code (e.g., "LU1").
    pub mod_hor: String,
    /// Start of the block.
    pub start_time: Time,
    /// End of the block. Always after `start_time`.
    pub end_time: Time,
    /// Display label for the range (e.g., "08:30 - 09:50").
    pub range_label: String,
    /// The module's ordinal position within the day.
    pub module_number: u8,
}

impl TimeModule {
    /// Creates a new `TimeModule`.
    #[must_use]
    pub fn new(
        id: TimeModuleId,
        mod_hor: &str,
        start_time: Time,
        end_time: Time,
        range_label: &str,
        module_number: u8,
    ) -> Self {
        Self {
            id,
            mod_hor: mod_hor.trim().to_uppercase(),
            start_time,
            end_time,
            range_label: range_label.to_string(),
            module_number,
        }
    }
}

/// A classification of rooms (e.g., "Teórica", "Computación").
///
/// Subjects may require a room type; assignment into a room of a
/// different type is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    /// Canonical identifier assigned by the catalog.
    pub id: RoomTypeId,
    /// The unique type name.
    pub name: String,
}

impl RoomType {
    /// Creates a new `RoomType`.
    #[must_use]
    pub fn new(id: RoomTypeId, name: &str) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
        }
    }
}

/// A physical room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Canonical identifier assigned by the catalog.
    pub id: RoomId,
    /// The unique room code, normalized to uppercase.
    pub code: String,
    /// The display name.
    pub name: String,
    /// Seating capacity. Always positive.
    pub capacity: u32,
    /// The room's type, if classified.
    pub room_type: Option<RoomTypeId>,
}

impl Room {
    /// Creates a new `Room`.
    #[must_use]
    pub fn new(
        id: RoomId,
        code: &str,
        name: &str,
        capacity: u32,
        room_type: Option<RoomTypeId>,
    ) -> Self {
        Self {
            id,
            code: code.trim().to_uppercase(),
            name: name.to_string(),
            capacity,
            room_type,
        }
    }
}

/// A named set of rooms (e.g., "Aulas A") used for grouped occupancy.
///
/// Membership is held by room id: groups are defined from room codes, but
/// the codes are resolved when the group is created, so occupancy never
/// falls back to name matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomGroup {
    /// Canonical identifier assigned by the catalog.
    pub id: RoomGroupId,
    /// The unique group name.
    pub name: String,
    /// The member rooms.
    pub members: Vec<RoomId>,
}

impl RoomGroup {
    /// Creates a new `RoomGroup`.
    #[must_use]
    pub fn new(id: RoomGroupId, name: &str, members: Vec<RoomId>) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            members,
        }
    }

    /// Checks whether a room belongs to this group.
    #[must_use]
    pub fn contains(&self, room: RoomId) -> bool {
        self.members.contains(&room)
    }
}

/// A teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Canonical identifier assigned by the catalog.
    pub id: TeacherId,
    /// The teacher's full display name.
    pub full_name: String,
    /// The national identifier, unique and normalized to uppercase
    /// (the verification digit may be "K").
    pub rut: String,
}

impl Teacher {
    /// Creates a new `Teacher`.
    #[must_use]
    pub fn new(id: TeacherId, full_name: &str, rut: &str) -> Self {
        Self {
            id,
            full_name: full_name.trim().to_string(),
            rut: rut.trim().to_uppercase(),
        }
    }
}

/// A faculty subjects belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Canonical identifier assigned by the catalog.
    pub id: FacultyId,
    /// The unique faculty name.
    pub name: String,
}

impl Faculty {
    /// Creates a new `Faculty`.
    #[must_use]
    pub fn new(id: FacultyId, name: &str) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
        }
    }
}

/// A subject/section as loaded from the academic offer sheet.
///
/// Most columns are free text in the source sheet and optional here; only
/// the display name is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Canonical identifier assigned by the catalog.
    pub id: SubjectId,
    /// Plan year column (AÑO_PLAN).
    pub plan_year: Option<String>,
    /// Career code column (CODCARR).
    pub career_code: Option<String>,
    /// The faculty this subject belongs to.
    pub faculty: Option<FacultyId>,
    /// Level column (NIVEL).
    pub level: Option<String>,
    /// Subject code column (CODRAMO).
    pub code: Option<String>,
    /// The display name (ASIGNATURA).
    pub name: String,
    /// Equivalent subject code, if any (EQUIVALENTE).
    pub equivalent_code: Option<String>,
    /// Section column (SECCION).
    pub section: Option<String>,
    /// Enrolled student count (CUPO).
    pub enrolled_students: u32,
    /// The room type this subject requires, if any.
    pub required_room_type: Option<RoomTypeId>,
}

impl Subject {
    /// Creates a new `Subject`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: SubjectId,
        plan_year: Option<String>,
        career_code: Option<String>,
        faculty: Option<FacultyId>,
        level: Option<String>,
        code: Option<String>,
        name: &str,
        equivalent_code: Option<String>,
        section: Option<String>,
        enrolled_students: u32,
        required_room_type: Option<RoomTypeId>,
    ) -> Self {
        Self {
            id,
            plan_year,
            career_code,
            faculty,
            level,
            code,
            name: name.trim().to_string(),
            equivalent_code,
            section,
            enrolled_students,
            required_room_type,
        }
    }
}

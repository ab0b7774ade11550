// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use u_planner_domain::{DayId, EntryDraft, EntryId, FacultyId, RoomTypeId, TeacherId, TimeModuleId};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes. Catalog commands
/// (the `Register*`/`Define*`/`Declare*` variants) go through
/// [`crate::apply_bootstrap`]; schedule commands go through
/// [`crate::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a day of the week.
    RegisterDay {
        /// The unique day code (e.g., "LU").
        code: String,
        /// The display name (e.g., "Lunes").
        name: String,
    },
    /// Register a time module.
    RegisterTimeModule {
        /// The unique module-horario code.
        mod_hor: String,
        /// Start of the block.
        start_time: time::Time,
        /// End of the block.
        end_time: time::Time,
        /// Display label for the range.
        range_label: String,
        /// The module's ordinal position within the day.
        module_number: u8,
    },
    /// Register a room type.
    RegisterRoomType {
        /// The unique type name.
        name: String,
    },
    /// Register a room.
    RegisterRoom {
        /// The unique room code.
        code: String,
        /// The display name.
        name: String,
        /// Seating capacity (must be positive).
        capacity: u32,
        /// The room's type, if classified.
        room_type: Option<RoomTypeId>,
    },
    /// Define a named room group from room codes.
    ///
    /// Codes are resolved to room ids at definition time; an unknown code
    /// rejects the whole definition.
    DefineRoomGroup {
        /// The unique group name.
        name: String,
        /// The member room codes.
        room_codes: Vec<String>,
    },
    /// Register a teacher.
    RegisterTeacher {
        /// The teacher's full display name.
        full_name: String,
        /// The unique national identifier.
        rut: String,
    },
    /// Declare a teacher available in a slot.
    ///
    /// A teacher with no declared slots is unrestricted; the first
    /// declaration opts the teacher into availability enforcement.
    DeclareAvailability {
        /// The teacher.
        teacher: TeacherId,
        /// The available day.
        day: DayId,
        /// The available time module.
        time_module: TimeModuleId,
    },
    /// Register a faculty.
    RegisterFaculty {
        /// The unique faculty name.
        name: String,
    },
    /// Register a subject/section.
    RegisterSubject {
        /// Plan year column.
        plan_year: Option<String>,
        /// Career code column.
        career_code: Option<String>,
        /// The owning faculty, if any.
        faculty: Option<FacultyId>,
        /// Level column.
        level: Option<String>,
        /// Subject code column.
        code: Option<String>,
        /// The display name.
        name: String,
        /// Equivalent subject code, if any.
        equivalent_code: Option<String>,
        /// Section column.
        section: Option<String>,
        /// Enrolled student count.
        enrolled_students: u32,
        /// The room type this subject requires, if any.
        required_room_type: Option<RoomTypeId>,
    },
    /// Admit a candidate schedule entry after conflict validation.
    AdmitEntry {
        /// The candidate entry.
        draft: EntryDraft,
    },
    /// Retract an admitted entry.
    RetractEntry {
        /// The entry to retract.
        entry_id: EntryId,
    },
    /// Replace an admitted entry with a new candidate.
    ///
    /// The candidate is validated against the store with the prior entry
    /// retracted; if the candidate is rejected, the prior entry stays in
    /// place (no net effect).
    ReplaceEntry {
        /// The entry to replace.
        entry_id: EntryId,
        /// The replacement candidate.
        draft: EntryDraft,
    },
    /// Drop every entry in the planning period.
    ClearTerm,
}

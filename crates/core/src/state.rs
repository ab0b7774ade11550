// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;
use u_planner_audit::{AuditEvent, StateSnapshot};
use u_planner_domain::{
    Day, DayId, EntryDraft, EntryId, Faculty, FacultyId, Room, RoomGroup, RoomGroupId, RoomId,
    RoomType, RoomTypeId, ScheduleEntry, Slot, Subject, SubjectId, Teacher, TeacherId, Term,
    TimeModule, TimeModuleId,
};

/// The catalog of reference entities the engine validates against.
///
/// Populated by external import/sync collaborators before any schedule
/// entry can reference its records. The catalog assigns every record an
/// opaque identifier from a single monotonic counter, and entities are
/// read-only once registered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    /// All registered days.
    pub days: Vec<Day>,
    /// All registered time modules.
    pub time_modules: Vec<TimeModule>,
    /// All registered room types.
    pub room_types: Vec<RoomType>,
    /// All registered rooms.
    pub rooms: Vec<Room>,
    /// All defined room groups.
    pub room_groups: Vec<RoomGroup>,
    /// All registered teachers.
    pub teachers: Vec<Teacher>,
    /// All registered faculties.
    pub faculties: Vec<Faculty>,
    /// All registered subjects.
    pub subjects: Vec<Subject>,
    /// Declared teacher availability slots. A teacher with no declared
    /// slots is unrestricted.
    pub availability: Vec<(TeacherId, Slot)>,
    /// The next identifier to assign.
    next_id: i64,
}

impl Catalog {
    /// Creates a new empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            days: Vec::new(),
            time_modules: Vec::new(),
            room_types: Vec::new(),
            rooms: Vec::new(),
            room_groups: Vec::new(),
            teachers: Vec::new(),
            faculties: Vec::new(),
            subjects: Vec::new(),
            availability: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocates the next catalog identifier.
    pub(crate) const fn allocate_id(&mut self) -> i64 {
        let id: i64 = self.next_id;
        self.next_id += 1;
        id
    }

    /// Looks up a day by id.
    #[must_use]
    pub fn day(&self, id: DayId) -> Option<&Day> {
        self.days.iter().find(|day| day.id == id)
    }

    /// Looks up a time module by id.
    #[must_use]
    pub fn time_module(&self, id: TimeModuleId) -> Option<&TimeModule> {
        self.time_modules.iter().find(|module| module.id == id)
    }

    /// Looks up a room type by id.
    #[must_use]
    pub fn room_type(&self, id: RoomTypeId) -> Option<&RoomType> {
        self.room_types.iter().find(|room_type| room_type.id == id)
    }

    /// Looks up a room by id.
    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Looks up a room by its unique code (case-insensitive).
    #[must_use]
    pub fn room_by_code(&self, code: &str) -> Option<&Room> {
        let normalized: String = code.trim().to_uppercase();
        self.rooms.iter().find(|room| room.code == normalized)
    }

    /// Looks up a room group by id.
    #[must_use]
    pub fn room_group(&self, id: RoomGroupId) -> Option<&RoomGroup> {
        self.room_groups.iter().find(|group| group.id == id)
    }

    /// Looks up a room group by its unique name (case-insensitive).
    #[must_use]
    pub fn room_group_by_name(&self, name: &str) -> Option<&RoomGroup> {
        let trimmed: &str = name.trim();
        self.room_groups
            .iter()
            .find(|group| group.name.eq_ignore_ascii_case(trimmed))
    }

    /// Looks up a teacher by id.
    #[must_use]
    pub fn teacher(&self, id: TeacherId) -> Option<&Teacher> {
        self.teachers.iter().find(|teacher| teacher.id == id)
    }

    /// Looks up a faculty by id.
    #[must_use]
    pub fn faculty(&self, id: FacultyId) -> Option<&Faculty> {
        self.faculties.iter().find(|faculty| faculty.id == id)
    }

    /// Looks up a subject by id.
    #[must_use]
    pub fn subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id == id)
    }

    /// Checks whether a teacher has declared any availability slots.
    #[must_use]
    pub fn teacher_has_declared_availability(&self, teacher: TeacherId) -> bool {
        self.availability.iter().any(|(id, _)| *id == teacher)
    }

    /// Checks whether a teacher declared a specific slot as available.
    #[must_use]
    pub fn teacher_declared_slot(&self, teacher: TeacherId, slot: Slot) -> bool {
        self.availability
            .iter()
            .any(|(id, declared)| *id == teacher && *declared == slot)
    }

    pub(crate) fn add_day(&mut self, code: &str, name: &str) -> DayId {
        let id: DayId = DayId::new(self.allocate_id());
        self.days.push(Day::new(id, code, name));
        id
    }

    pub(crate) fn add_time_module(
        &mut self,
        mod_hor: &str,
        start_time: time::Time,
        end_time: time::Time,
        range_label: &str,
        module_number: u8,
    ) -> TimeModuleId {
        let id: TimeModuleId = TimeModuleId::new(self.allocate_id());
        self.time_modules.push(TimeModule::new(
            id,
            mod_hor,
            start_time,
            end_time,
            range_label,
            module_number,
        ));
        id
    }

    pub(crate) fn add_room_type(&mut self, name: &str) -> RoomTypeId {
        let id: RoomTypeId = RoomTypeId::new(self.allocate_id());
        self.room_types.push(RoomType::new(id, name));
        id
    }

    pub(crate) fn add_room(
        &mut self,
        code: &str,
        name: &str,
        capacity: u32,
        room_type: Option<RoomTypeId>,
    ) -> RoomId {
        let id: RoomId = RoomId::new(self.allocate_id());
        self.rooms.push(Room::new(id, code, name, capacity, room_type));
        id
    }

    pub(crate) fn add_room_group(&mut self, name: &str, members: Vec<RoomId>) -> RoomGroupId {
        let id: RoomGroupId = RoomGroupId::new(self.allocate_id());
        self.room_groups.push(RoomGroup::new(id, name, members));
        id
    }

    pub(crate) fn add_teacher(&mut self, full_name: &str, rut: &str) -> TeacherId {
        let id: TeacherId = TeacherId::new(self.allocate_id());
        self.teachers.push(Teacher::new(id, full_name, rut));
        id
    }

    pub(crate) fn add_faculty(&mut self, name: &str) -> FacultyId {
        let id: FacultyId = FacultyId::new(self.allocate_id());
        self.faculties.push(Faculty::new(id, name));
        id
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn add_subject(
        &mut self,
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
    ) -> SubjectId {
        let id: SubjectId = SubjectId::new(self.allocate_id());
        self.subjects.push(Subject::new(
            id,
            plan_year,
            career_code,
            faculty,
            level,
            code,
            name,
            equivalent_code,
            section,
            enrolled_students,
            required_room_type,
        ));
        id
    }

    pub(crate) fn add_availability(&mut self, teacher: TeacherId, slot: Slot) {
        self.availability.push((teacher, slot));
    }

    /// Converts the catalog to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "days={},modules={},rooms={},teachers={},subjects={}",
            self.days.len(),
            self.time_modules.len(),
            self.rooms.len(),
            self.teachers.len(),
            self.subjects.len()
        ))
    }
}

/// The canonical set of admitted schedule entries for one planning period.
///
/// Conflict lookups go through hash indexes keyed by `(room, slot)` and
/// `(teacher, slot)` so the validator's checks are O(1); the entry vector
/// preserves admission order for the list views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleState {
    /// The planning period this state is scoped to.
    pub term: Term,
    /// All admitted entries, in admission order.
    pub entries: Vec<ScheduleEntry>,
    /// Index from `(room, day, module)` to the occupying entry.
    room_index: HashMap<(RoomId, DayId, TimeModuleId), EntryId>,
    /// Index from `(teacher, day, module)` to the claiming entry.
    teacher_index: HashMap<(TeacherId, DayId, TimeModuleId), EntryId>,
    /// The next entry identifier to assign. Never reused, even after
    /// retraction or a term clear.
    next_entry_id: i64,
}

impl ScheduleState {
    /// Creates a new empty state for a planning period.
    #[must_use]
    pub fn new(term: Term) -> Self {
        Self {
            term,
            entries: Vec::new(),
            room_index: HashMap::new(),
            teacher_index: HashMap::new(),
            next_entry_id: 1,
        }
    }

    /// Returns the entry occupying a room in a slot, if any.
    #[must_use]
    pub fn room_occupant(&self, room: RoomId, slot: Slot) -> Option<EntryId> {
        self.room_index
            .get(&(room, slot.day, slot.time_module))
            .copied()
    }

    /// Returns the entry claiming a teacher in a slot, if any.
    #[must_use]
    pub fn teacher_engagement(&self, teacher: TeacherId, slot: Slot) -> Option<EntryId> {
        self.teacher_index
            .get(&(teacher, slot.day, slot.time_module))
            .copied()
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Appends an already-validated draft, assigning it a fresh entry id.
    ///
    /// Callers must have run the conflict checks first; this only
    /// maintains the indexes.
    pub(crate) fn admit(&mut self, draft: EntryDraft) -> EntryId {
        let id: EntryId = EntryId::new(self.next_entry_id);
        self.next_entry_id += 1;
        self.room_index
            .insert((draft.room, draft.day, draft.time_module), id);
        self.teacher_index
            .insert((draft.teacher, draft.day, draft.time_module), id);
        self.entries.push(ScheduleEntry::from_draft(id, draft));
        id
    }

    /// Removes an entry and its index claims, returning the entry.
    pub(crate) fn retract(&mut self, id: EntryId) -> Option<ScheduleEntry> {
        let position: usize = self.entries.iter().position(|entry| entry.id == id)?;
        let entry: ScheduleEntry = self.entries.remove(position);
        self.room_index
            .remove(&(entry.room, entry.day, entry.time_module));
        self.teacher_index
            .remove(&(entry.teacher, entry.day, entry.time_module));
        Some(entry)
    }

    /// Drops every entry while preserving the id counter.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.room_index.clear();
        self.teacher_index.clear();
    }

    /// Converts the state to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "term={},entries_count={}",
            self.term,
            self.entries.len()
        ))
    }
}

/// The catalog record created by a successful bootstrap operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogRecordId {
    /// A day was registered.
    Day(DayId),
    /// A time module was registered.
    TimeModule(TimeModuleId),
    /// A room type was registered.
    RoomType(RoomTypeId),
    /// A room was registered.
    Room(RoomId),
    /// A room group was defined.
    RoomGroup(RoomGroupId),
    /// A teacher was registered.
    Teacher(TeacherId),
    /// A faculty was registered.
    Faculty(FacultyId),
    /// A subject was registered.
    Subject(SubjectId),
}

/// The result of a successful catalog (bootstrap) operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapResult {
    /// The new catalog after the operation.
    pub new_catalog: Catalog,
    /// The audit event recording this operation.
    pub audit_event: AuditEvent,
    /// The created record, if the operation created one.
    pub created: Option<CatalogRecordId>,
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: ScheduleState,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// The entry admitted by this transition, if any.
    pub admitted_entry: Option<EntryId>,
}

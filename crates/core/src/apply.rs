// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{BootstrapResult, Catalog, CatalogRecordId, ScheduleState, TransitionResult};
use u_planner_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use u_planner_domain::{
    DayId, DomainError, EntryDraft, EntryId, FacultyId, ReferenceKind, Room, RoomGroupId, RoomId,
    RoomTypeId, Slot, Subject, SubjectId, TeacherId, TimeModuleId, validate_day_code_unique,
    validate_day_fields, validate_faculty_unique, validate_group_name_unique,
    validate_mod_hor_unique, validate_room_code_unique, validate_room_fields,
    validate_room_type_unique, validate_rut_unique, validate_subject_fields,
    validate_teacher_fields, validate_time_module_fields,
};

/// Validates a candidate entry against the catalog and the current store.
///
/// This is the Conflict Validator's read-only check: it never modifies
/// the store, and its verdict depends only on the catalog, the store
/// content, and the candidate, so re-running it on an unchanged store
/// yields the same result.
///
/// Checks, in order:
/// 1. Every foreign reference resolves in the catalog.
/// 2. The room can seat the subject's enrolled students.
/// 3. The room's type matches the subject's required type (when both
///    are classified).
/// 4. The teacher declared this slot available (when the teacher
///    declared any availability at all).
/// 5. No existing entry occupies the room in this slot.
/// 6. No existing entry claims the teacher in this slot.
///
/// # Errors
///
/// Returns the first violated rule as a [`CoreError::DomainViolation`];
/// conflicts carry the id of the blocking entry.
pub fn validate_entry(
    catalog: &Catalog,
    state: &ScheduleState,
    draft: &EntryDraft,
) -> Result<(), CoreError> {
    let subject: &Subject = catalog.subject(draft.subject).ok_or_else(|| {
        CoreError::unknown_reference(ReferenceKind::Subject, draft.subject.value())
    })?;
    if catalog.teacher(draft.teacher).is_none() {
        return Err(CoreError::unknown_reference(ReferenceKind::Teacher, draft.teacher.value()));
    }
    let room: &Room = catalog.room(draft.room).ok_or_else(|| {
        CoreError::unknown_reference(ReferenceKind::Room, draft.room.value())
    })?;
    if catalog.day(draft.day).is_none() {
        return Err(CoreError::unknown_reference(ReferenceKind::Day, draft.day.value()));
    }
    if catalog.time_module(draft.time_module).is_none() {
        return Err(CoreError::unknown_reference(
            ReferenceKind::TimeModule,
            draft.time_module.value(),
        ));
    }

    // Capacity check
    if room.capacity < subject.enrolled_students {
        return Err(CoreError::DomainViolation(
            DomainError::RoomCapacityExceeded {
                room_capacity: room.capacity,
                enrolled_students: subject.enrolled_students,
            },
        ));
    }

    // Room type check, when both sides are classified
    if let (Some(room_type), Some(required)) = (room.room_type, subject.required_room_type) {
        if room_type != required {
            let room_type_name: String = catalog
                .room_type(room_type)
                .map_or_else(|| room_type.value().to_string(), |t| t.name.clone());
            let required_name: String = catalog
                .room_type(required)
                .map_or_else(|| required.value().to_string(), |t| t.name.clone());
            return Err(CoreError::DomainViolation(DomainError::RoomTypeMismatch {
                room_type: room_type_name,
                required_room_type: required_name,
            }));
        }
    }

    // Availability check, only for teachers that declared slots
    let slot: Slot = draft.slot();
    if catalog.teacher_has_declared_availability(draft.teacher)
        && !catalog.teacher_declared_slot(draft.teacher, slot)
    {
        return Err(CoreError::DomainViolation(DomainError::TeacherUnavailable {
            teacher: draft.teacher,
            day: draft.day,
            time_module: draft.time_module,
        }));
    }

    // Hard constraint: one entry per (room, day, module)
    if let Some(conflicting_entry) = state.room_occupant(draft.room, slot) {
        return Err(CoreError::DomainViolation(DomainError::RoomConflict {
            conflicting_entry,
        }));
    }

    // Hard constraint: one entry per (teacher, day, module)
    if let Some(conflicting_entry) = state.teacher_engagement(draft.teacher, slot) {
        return Err(CoreError::DomainViolation(DomainError::TeacherConflict {
            conflicting_entry,
        }));
    }

    Ok(())
}

/// Applies a catalog (bootstrap) command, producing a new catalog and an
/// audit event.
///
/// Catalog commands populate the reference entities that schedule
/// entries point at. They are global, not scoped to a planning period.
///
/// # Arguments
///
/// * `catalog` - The current catalog (immutable)
/// * `command` - The catalog command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if the command violates domain rules (empty or
/// duplicate fields, unresolved references).
#[allow(clippy::too_many_lines)]
pub fn apply_bootstrap(
    catalog: &Catalog,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<BootstrapResult, CoreError> {
    let before: StateSnapshot = catalog.to_snapshot();
    match command {
        Command::RegisterDay { code, name } => {
            validate_day_fields(&code, &name)?;
            validate_day_code_unique(&code, &catalog.days)?;

            let mut new_catalog: Catalog = catalog.clone();
            let id: DayId = new_catalog.add_day(&code, &name);

            let action: Action = Action::new(
                String::from("RegisterDay"),
                Some(format!("Registered day '{}'", code.trim().to_uppercase())),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                new_catalog.to_snapshot(),
                None,
            );

            Ok(BootstrapResult {
                new_catalog,
                audit_event,
                created: Some(CatalogRecordId::Day(id)),
            })
        }
        Command::RegisterTimeModule {
            mod_hor,
            start_time,
            end_time,
            range_label,
            module_number,
        } => {
            validate_time_module_fields(&mod_hor, start_time, end_time)?;
            validate_mod_hor_unique(&mod_hor, &catalog.time_modules)?;

            let mut new_catalog: Catalog = catalog.clone();
            let id: TimeModuleId = new_catalog.add_time_module(
                &mod_hor,
                start_time,
                end_time,
                &range_label,
                module_number,
            );

            let action: Action = Action::new(
                String::from("RegisterTimeModule"),
                Some(format!(
                    "Registered time module '{}' ({start_time}-{end_time})",
                    mod_hor.trim().to_uppercase()
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                new_catalog.to_snapshot(),
                None,
            );

            Ok(BootstrapResult {
                new_catalog,
                audit_event,
                created: Some(CatalogRecordId::TimeModule(id)),
            })
        }
        Command::RegisterRoomType { name } => {
            if name.trim().is_empty() {
                return Err(CoreError::DomainViolation(DomainError::InvalidName(
                    String::from("Room type name cannot be empty"),
                )));
            }
            validate_room_type_unique(&name, &catalog.room_types)?;

            let mut new_catalog: Catalog = catalog.clone();
            let id: RoomTypeId = new_catalog.add_room_type(&name);

            let action: Action = Action::new(
                String::from("RegisterRoomType"),
                Some(format!("Registered room type '{}'", name.trim())),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                new_catalog.to_snapshot(),
                None,
            );

            Ok(BootstrapResult {
                new_catalog,
                audit_event,
                created: Some(CatalogRecordId::RoomType(id)),
            })
        }
        Command::RegisterRoom {
            code,
            name,
            capacity,
            room_type,
        } => {
            validate_room_fields(&code, &name, capacity)?;
            validate_room_code_unique(&code, &catalog.rooms)?;
            if let Some(room_type_id) = room_type {
                if catalog.room_type(room_type_id).is_none() {
                    return Err(CoreError::unknown_reference(
                        ReferenceKind::RoomType,
                        room_type_id.value(),
                    ));
                }
            }

            let mut new_catalog: Catalog = catalog.clone();
            let id: RoomId = new_catalog.add_room(&code, &name, capacity, room_type);

            let action: Action = Action::new(
                String::from("RegisterRoom"),
                Some(format!(
                    "Registered room '{}' (capacity {capacity})",
                    code.trim().to_uppercase()
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                new_catalog.to_snapshot(),
                None,
            );

            Ok(BootstrapResult {
                new_catalog,
                audit_event,
                created: Some(CatalogRecordId::Room(id)),
            })
        }
        Command::DefineRoomGroup { name, room_codes } => {
            if name.trim().is_empty() {
                return Err(CoreError::DomainViolation(DomainError::InvalidName(
                    String::from("Room group name cannot be empty"),
                )));
            }
            validate_group_name_unique(&name, &catalog.room_groups)?;
            if room_codes.is_empty() {
                return Err(CoreError::DomainViolation(DomainError::EmptyRoomGroup(
                    name.trim().to_string(),
                )));
            }

            // Resolve codes to ids now; membership is by id from here on
            let mut members: Vec<RoomId> = Vec::with_capacity(room_codes.len());
            for code in &room_codes {
                let room: &Room = catalog.room_by_code(code).ok_or_else(|| {
                    CoreError::DomainViolation(DomainError::InvalidCode(format!(
                        "Room group '{}' references unknown room code '{}'",
                        name.trim(),
                        code.trim().to_uppercase()
                    )))
                })?;
                if !members.contains(&room.id) {
                    members.push(room.id);
                }
            }

            let mut new_catalog: Catalog = catalog.clone();
            let member_count: usize = members.len();
            let id: RoomGroupId = new_catalog.add_room_group(&name, members);

            let action: Action = Action::new(
                String::from("DefineRoomGroup"),
                Some(format!(
                    "Defined room group '{}' with {member_count} rooms",
                    name.trim()
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                new_catalog.to_snapshot(),
                None,
            );

            Ok(BootstrapResult {
                new_catalog,
                audit_event,
                created: Some(CatalogRecordId::RoomGroup(id)),
            })
        }
        Command::RegisterTeacher { full_name, rut } => {
            validate_teacher_fields(&full_name, &rut)?;
            validate_rut_unique(&rut, &catalog.teachers)?;

            let mut new_catalog: Catalog = catalog.clone();
            let id: TeacherId = new_catalog.add_teacher(&full_name, &rut);

            let action: Action = Action::new(
                String::from("RegisterTeacher"),
                Some(format!("Registered teacher '{}'", full_name.trim())),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                new_catalog.to_snapshot(),
                None,
            );

            Ok(BootstrapResult {
                new_catalog,
                audit_event,
                created: Some(CatalogRecordId::Teacher(id)),
            })
        }
        Command::DeclareAvailability {
            teacher,
            day,
            time_module,
        } => {
            if catalog.teacher(teacher).is_none() {
                return Err(CoreError::unknown_reference(ReferenceKind::Teacher, teacher.value()));
            }
            if catalog.day(day).is_none() {
                return Err(CoreError::unknown_reference(ReferenceKind::Day, day.value()));
            }
            if catalog.time_module(time_module).is_none() {
                return Err(CoreError::unknown_reference(
                    ReferenceKind::TimeModule,
                    time_module.value(),
                ));
            }
            let slot: Slot = Slot::new(day, time_module);
            if catalog.teacher_declared_slot(teacher, slot) {
                return Err(CoreError::DomainViolation(
                    DomainError::DuplicateAvailability {
                        teacher,
                        day,
                        time_module,
                    },
                ));
            }

            let mut new_catalog: Catalog = catalog.clone();
            new_catalog.add_availability(teacher, slot);

            let action: Action = Action::new(
                String::from("DeclareAvailability"),
                Some(format!(
                    "Declared teacher {} available on day {} module {}",
                    teacher.value(),
                    day.value(),
                    time_module.value()
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                new_catalog.to_snapshot(),
                None,
            );

            Ok(BootstrapResult {
                new_catalog,
                audit_event,
                created: None,
            })
        }
        Command::RegisterFaculty { name } => {
            if name.trim().is_empty() {
                return Err(CoreError::DomainViolation(DomainError::InvalidName(
                    String::from("Faculty name cannot be empty"),
                )));
            }
            validate_faculty_unique(&name, &catalog.faculties)?;

            let mut new_catalog: Catalog = catalog.clone();
            let id: FacultyId = new_catalog.add_faculty(&name);

            let action: Action = Action::new(
                String::from("RegisterFaculty"),
                Some(format!("Registered faculty '{}'", name.trim())),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                new_catalog.to_snapshot(),
                None,
            );

            Ok(BootstrapResult {
                new_catalog,
                audit_event,
                created: Some(CatalogRecordId::Faculty(id)),
            })
        }
        Command::RegisterSubject {
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
        } => {
            validate_subject_fields(&name)?;
            if let Some(faculty_id) = faculty {
                if catalog.faculty(faculty_id).is_none() {
                    return Err(CoreError::unknown_reference(
                        ReferenceKind::Faculty,
                        faculty_id.value(),
                    ));
                }
            }
            if let Some(room_type_id) = required_room_type {
                if catalog.room_type(room_type_id).is_none() {
                    return Err(CoreError::unknown_reference(
                        ReferenceKind::RoomType,
                        room_type_id.value(),
                    ));
                }
            }

            let mut new_catalog: Catalog = catalog.clone();
            let id: SubjectId = new_catalog.add_subject(
                plan_year,
                career_code,
                faculty,
                level,
                code,
                &name,
                equivalent_code,
                section,
                enrolled_students,
                required_room_type,
            );

            let action: Action = Action::new(
                String::from("RegisterSubject"),
                Some(format!("Registered subject '{}'", name.trim())),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                new_catalog.to_snapshot(),
                None,
            );

            Ok(BootstrapResult {
                new_catalog,
                audit_event,
                created: Some(CatalogRecordId::Subject(id)),
            })
        }
        Command::AdmitEntry { .. }
        | Command::RetractEntry { .. }
        | Command::ReplaceEntry { .. }
        | Command::ClearTerm => {
            // Schedule commands should use apply() instead
            unreachable!("apply_bootstrap called with schedule command")
        }
    }
}

/// Applies a schedule command to the current state, producing a new state
/// and an audit event.
///
/// The transition is atomic: `state` is never modified, and the caller
/// publishes `new_state` only on `Ok`, so a rejected candidate leaves no
/// partial state behind.
///
/// # Arguments
///
/// * `catalog` - The catalog to validate references against
/// * `state` - The current state (immutable)
/// * `command` - The schedule command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if the command violates the non-overlap invariants,
/// a supplementary constraint (capacity, room type, availability), or
/// references an unknown catalog record or entry.
pub fn apply(
    catalog: &Catalog,
    state: &ScheduleState,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::AdmitEntry { draft } => {
            validate_entry(catalog, state, &draft)?;

            let before: StateSnapshot = state.to_snapshot();
            let mut new_state: ScheduleState = state.clone();
            let details: String = format!(
                "Admitted entry for subject {} in room {} (day {}, module {})",
                draft.subject.value(),
                draft.room.value(),
                draft.day.value(),
                draft.time_module.value()
            );
            let entry_id: EntryId = new_state.admit(draft);

            let action: Action = Action::new(String::from("AdmitEntry"), Some(details));
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                new_state.to_snapshot(),
                Some(state.term),
            );

            Ok(TransitionResult {
                new_state,
                audit_event,
                admitted_entry: Some(entry_id),
            })
        }
        Command::RetractEntry { entry_id } => {
            if state.entry(entry_id).is_none() {
                return Err(CoreError::unknown_reference(ReferenceKind::Entry, entry_id.value()));
            }

            let before: StateSnapshot = state.to_snapshot();
            let mut new_state: ScheduleState = state.clone();
            new_state.retract(entry_id);

            let action: Action = Action::new(
                String::from("RetractEntry"),
                Some(format!("Retracted entry {}", entry_id.value())),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                new_state.to_snapshot(),
                Some(state.term),
            );

            Ok(TransitionResult {
                new_state,
                audit_event,
                admitted_entry: None,
            })
        }
        Command::ReplaceEntry { entry_id, draft } => {
            if state.entry(entry_id).is_none() {
                return Err(CoreError::unknown_reference(ReferenceKind::Entry, entry_id.value()));
            }

            // Retract-then-admit: the candidate is checked against the
            // store without the prior entry. The retraction is never
            // published on rejection, so the prior entry stays in place.
            let mut new_state: ScheduleState = state.clone();
            new_state.retract(entry_id);
            validate_entry(catalog, &new_state, &draft)?;

            let before: StateSnapshot = state.to_snapshot();
            let new_entry_id: EntryId = new_state.admit(draft);

            let action: Action = Action::new(
                String::from("ReplaceEntry"),
                Some(format!(
                    "Replaced entry {} with entry {}",
                    entry_id.value(),
                    new_entry_id.value()
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                new_state.to_snapshot(),
                Some(state.term),
            );

            Ok(TransitionResult {
                new_state,
                audit_event,
                admitted_entry: Some(new_entry_id),
            })
        }
        Command::ClearTerm => {
            let before: StateSnapshot = state.to_snapshot();
            let mut new_state: ScheduleState = state.clone();
            let dropped: usize = new_state.entries.len();
            new_state.clear();

            let action: Action = Action::new(
                String::from("ClearTerm"),
                Some(format!("Cleared {dropped} entries from {}", state.term)),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                new_state.to_snapshot(),
                Some(state.term),
            );

            Ok(TransitionResult {
                new_state,
                audit_event,
                admitted_entry: None,
            })
        }
        _ => {
            // Catalog commands should use apply_bootstrap() instead
            unreachable!("apply called with catalog command")
        }
    }
}

/// How a bulk admission treats per-draft failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkMode {
    /// Each draft is admitted or rejected on its own; failures do not
    /// affect the other drafts.
    Independent,
    /// If any draft is rejected, no draft is admitted.
    AllOrNothing,
}

/// The result of a bulk admission.
///
/// `outcomes` always carries one result per input draft, in input order,
/// regardless of mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkAdmitResult {
    /// The new state after the bulk operation.
    pub new_state: ScheduleState,
    /// Per-draft outcomes, in input order.
    pub outcomes: Vec<Result<EntryId, CoreError>>,
    /// The audit event recording the bulk operation.
    pub audit_event: AuditEvent,
}

/// Admits a batch of candidate entries.
///
/// Drafts are validated in input order against the progressively updated
/// store, so two drafts claiming the same slot reject the second one. In
/// [`BulkMode::AllOrNothing`], any rejection reverts the store to its
/// input state while the per-draft outcomes are still reported.
#[must_use]
pub fn apply_bulk(
    catalog: &Catalog,
    state: &ScheduleState,
    drafts: Vec<EntryDraft>,
    mode: BulkMode,
    actor: Actor,
    cause: Cause,
) -> BulkAdmitResult {
    let before: StateSnapshot = state.to_snapshot();
    let mut new_state: ScheduleState = state.clone();
    let mut outcomes: Vec<Result<EntryId, CoreError>> = Vec::with_capacity(drafts.len());

    for draft in drafts {
        match validate_entry(catalog, &new_state, &draft) {
            Ok(()) => {
                let entry_id: EntryId = new_state.admit(draft);
                outcomes.push(Ok(entry_id));
            }
            Err(err) => outcomes.push(Err(err)),
        }
    }

    let rejected: usize = outcomes.iter().filter(|outcome| outcome.is_err()).count();
    let admitted: usize = outcomes.len() - rejected;

    let reverted: bool = mode == BulkMode::AllOrNothing && rejected > 0;
    if reverted {
        new_state = state.clone();
    }

    let action: Action = Action::new(
        String::from("BulkAdmitEntries"),
        Some(format!(
            "Bulk admission: {admitted} admitted, {rejected} rejected{}",
            if reverted { " (reverted)" } else { "" }
        )),
    );
    let audit_event: AuditEvent = AuditEvent::new(
        actor,
        cause,
        action,
        before,
        new_state.to_snapshot(),
        Some(state.term),
    );

    BulkAdmitResult {
        new_state,
        outcomes,
        audit_event,
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use std::collections::{BTreeMap, BTreeSet};

use time::Time;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use u_planner::{
    BootstrapResult, BulkAdmitResult, BulkMode, Catalog, CatalogRecordId, Command, GroupOccupancy,
    OccupancyFilter, OccupancyStat, ScheduleEntryView, ScheduleState, TransitionResult, apply,
    apply_bootstrap, apply_bulk, entry_views, filter_records, group_occupancy, room_occupancy,
};
use u_planner_audit::{Actor, AuditEvent, Cause};
use u_planner_domain::{
    DayId, EntryDraft, EntryId, FacultyId, Room, RoomGroup, RoomId, RoomTypeId, Subject, SubjectId,
    Teacher, TeacherId, TimeModuleId,
};

use crate::error::{ApiError, translate_core_error};
use crate::request_response::{
    BulkEntriesRequest, BulkEntriesResponse, BulkEntryRowResult, BulkRowStatus, ClearTermResponse,
    CreateEntryRequest, CreateEntryResponse, DeclareAvailabilityRequest,
    DeclareAvailabilityResponse, DefineRoomGroupRequest, DefineRoomGroupResponse,
    GroupOccupancyInfo, ListRoomsResponse, ListSchedulesResponse, ListSubjectsResponse,
    ListTeachersResponse, OccupancyBand, OccupancyRequest, OccupancyResponse, RegisterDayRequest,
    RegisterDayResponse, RegisterFacultyRequest, RegisterFacultyResponse, RegisterRoomRequest,
    RegisterRoomResponse, RegisterRoomTypeRequest, RegisterRoomTypeResponse,
    RegisterSubjectRequest, RegisterSubjectResponse, RegisterTeacherRequest,
    RegisterTeacherResponse, RegisterTimeModuleRequest, RegisterTimeModuleResponse,
    ReplaceEntryResponse, RetractEntryResponse, RoomInfo, RoomOccupancyInfo, SubjectInfo,
    TeacherInfo,
};

const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// The result of a state-changing API operation on the schedule store.
///
/// This ensures that successful API operations always produce an audit
/// trail alongside the new state the caller must publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The audit event generated by this operation.
    pub audit_event: AuditEvent,
    /// The new state after the operation.
    pub new_state: ScheduleState,
}

/// The result of a catalog-changing API operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogApiResult<T> {
    /// The API response.
    pub response: T,
    /// The audit event generated by this operation.
    pub audit_event: AuditEvent,
    /// The new catalog after the operation.
    pub new_catalog: Catalog,
}

fn parse_time(field: &'static str, value: &str) -> Result<Time, ApiError> {
    Time::parse(value, TIME_FORMAT).map_err(|err| ApiError::InvalidInput {
        field: String::from(field),
        message: format!("Expected HH:MM, got '{value}': {err}"),
    })
}

fn created_id(result: &BootstrapResult) -> Result<i64, ApiError> {
    match result.created {
        Some(CatalogRecordId::Day(id)) => Ok(id.value()),
        Some(CatalogRecordId::TimeModule(id)) => Ok(id.value()),
        Some(CatalogRecordId::RoomType(id)) => Ok(id.value()),
        Some(CatalogRecordId::Room(id)) => Ok(id.value()),
        Some(CatalogRecordId::RoomGroup(id)) => Ok(id.value()),
        Some(CatalogRecordId::Teacher(id)) => Ok(id.value()),
        Some(CatalogRecordId::Faculty(id)) => Ok(id.value()),
        Some(CatalogRecordId::Subject(id)) => Ok(id.value()),
        None => Err(ApiError::Internal {
            message: String::from("Catalog operation did not report a created record"),
        }),
    }
}

/// Registers a day via the API boundary.
///
/// # Errors
///
/// Returns an error if the code is empty or already registered.
pub fn register_day(
    catalog: &Catalog,
    request: RegisterDayRequest,
    actor: Actor,
    cause: Cause,
) -> Result<CatalogApiResult<RegisterDayResponse>, ApiError> {
    let command: Command = Command::RegisterDay {
        code: request.code,
        name: request.name,
    };
    let result: BootstrapResult =
        apply_bootstrap(catalog, command, actor, cause).map_err(translate_core_error)?;
    let day_id: i64 = created_id(&result)?;
    let code: String = result
        .new_catalog
        .day(DayId::new(day_id))
        .map_or_else(String::new, |day| day.code.clone());
    tracing::info!(day_id, code, "registered day");

    Ok(CatalogApiResult {
        response: RegisterDayResponse {
            day_id,
            code: code.clone(),
            message: format!("Successfully registered day '{code}'"),
        },
        audit_event: result.audit_event,
        new_catalog: result.new_catalog,
    })
}

/// Registers a time module via the API boundary.
///
/// # Errors
///
/// Returns an error if a time string does not parse, the range is
/// inverted, or the code is already registered.
pub fn register_time_module(
    catalog: &Catalog,
    request: RegisterTimeModuleRequest,
    actor: Actor,
    cause: Cause,
) -> Result<CatalogApiResult<RegisterTimeModuleResponse>, ApiError> {
    let start_time: Time = parse_time("start_time", &request.start_time)?;
    let end_time: Time = parse_time("end_time", &request.end_time)?;

    let command: Command = Command::RegisterTimeModule {
        mod_hor: request.mod_hor,
        start_time,
        end_time,
        range_label: request.range_label,
        module_number: request.module_number,
    };
    let result: BootstrapResult =
        apply_bootstrap(catalog, command, actor, cause).map_err(translate_core_error)?;
    let time_module_id: i64 = created_id(&result)?;
    let mod_hor: String = result
        .new_catalog
        .time_module(TimeModuleId::new(time_module_id))
        .map_or_else(String::new, |module| module.mod_hor.clone());
    tracing::info!(time_module_id, mod_hor, "registered time module");

    Ok(CatalogApiResult {
        response: RegisterTimeModuleResponse {
            time_module_id,
            mod_hor: mod_hor.clone(),
            message: format!("Successfully registered time module '{mod_hor}'"),
        },
        audit_event: result.audit_event,
        new_catalog: result.new_catalog,
    })
}

/// Registers a room type via the API boundary.
///
/// # Errors
///
/// Returns an error if the name is empty or already registered.
pub fn register_room_type(
    catalog: &Catalog,
    request: RegisterRoomTypeRequest,
    actor: Actor,
    cause: Cause,
) -> Result<CatalogApiResult<RegisterRoomTypeResponse>, ApiError> {
    let name: String = request.name.trim().to_string();
    let command: Command = Command::RegisterRoomType {
        name: request.name,
    };
    let result: BootstrapResult =
        apply_bootstrap(catalog, command, actor, cause).map_err(translate_core_error)?;
    let room_type_id: i64 = created_id(&result)?;
    tracing::info!(room_type_id, name, "registered room type");

    Ok(CatalogApiResult {
        response: RegisterRoomTypeResponse {
            room_type_id,
            name: name.clone(),
            message: format!("Successfully registered room type '{name}'"),
        },
        audit_event: result.audit_event,
        new_catalog: result.new_catalog,
    })
}

/// Registers a room via the API boundary.
///
/// # Errors
///
/// Returns an error if a field is invalid, the code is taken, or the
/// room type does not exist.
pub fn register_room(
    catalog: &Catalog,
    request: RegisterRoomRequest,
    actor: Actor,
    cause: Cause,
) -> Result<CatalogApiResult<RegisterRoomResponse>, ApiError> {
    let command: Command = Command::RegisterRoom {
        code: request.code,
        name: request.name,
        capacity: request.capacity,
        room_type: request.room_type_id.map(RoomTypeId::new),
    };
    let result: BootstrapResult =
        apply_bootstrap(catalog, command, actor, cause).map_err(translate_core_error)?;
    let room_id: i64 = created_id(&result)?;
    let code: String = result
        .new_catalog
        .room(RoomId::new(room_id))
        .map_or_else(String::new, |room| room.code.clone());
    tracing::info!(room_id, code, "registered room");

    Ok(CatalogApiResult {
        response: RegisterRoomResponse {
            room_id,
            code: code.clone(),
            message: format!("Successfully registered room '{code}'"),
        },
        audit_event: result.audit_event,
        new_catalog: result.new_catalog,
    })
}

/// Defines a room group via the API boundary.
///
/// # Errors
///
/// Returns an error if the name is taken, the member list is empty, or a
/// member code does not resolve.
pub fn define_room_group(
    catalog: &Catalog,
    request: DefineRoomGroupRequest,
    actor: Actor,
    cause: Cause,
) -> Result<CatalogApiResult<DefineRoomGroupResponse>, ApiError> {
    let name: String = request.name.trim().to_string();
    let command: Command = Command::DefineRoomGroup {
        name: request.name,
        room_codes: request.room_codes,
    };
    let result: BootstrapResult =
        apply_bootstrap(catalog, command, actor, cause).map_err(translate_core_error)?;
    let room_group_id: i64 = created_id(&result)?;
    let member_count: usize = result
        .new_catalog
        .room_group_by_name(&name)
        .map_or(0, |group| group.members.len());
    tracing::info!(room_group_id, name, member_count, "defined room group");

    Ok(CatalogApiResult {
        response: DefineRoomGroupResponse {
            room_group_id,
            name: name.clone(),
            member_count,
            message: format!("Successfully defined room group '{name}'"),
        },
        audit_event: result.audit_event,
        new_catalog: result.new_catalog,
    })
}

/// Registers a teacher via the API boundary.
///
/// # Errors
///
/// Returns an error if a field is empty or the rut is already taken.
pub fn register_teacher(
    catalog: &Catalog,
    request: RegisterTeacherRequest,
    actor: Actor,
    cause: Cause,
) -> Result<CatalogApiResult<RegisterTeacherResponse>, ApiError> {
    let full_name: String = request.full_name.trim().to_string();
    let command: Command = Command::RegisterTeacher {
        full_name: request.full_name,
        rut: request.rut,
    };
    let result: BootstrapResult =
        apply_bootstrap(catalog, command, actor, cause).map_err(translate_core_error)?;
    let teacher_id: i64 = created_id(&result)?;
    tracing::info!(teacher_id, full_name, "registered teacher");

    Ok(CatalogApiResult {
        response: RegisterTeacherResponse {
            teacher_id,
            full_name: full_name.clone(),
            message: format!("Successfully registered teacher '{full_name}'"),
        },
        audit_event: result.audit_event,
        new_catalog: result.new_catalog,
    })
}

/// Declares a teacher availability slot via the API boundary.
///
/// # Errors
///
/// Returns an error if a reference does not resolve or the slot was
/// already declared.
pub fn declare_availability(
    catalog: &Catalog,
    request: DeclareAvailabilityRequest,
    actor: Actor,
    cause: Cause,
) -> Result<CatalogApiResult<DeclareAvailabilityResponse>, ApiError> {
    let command: Command = Command::DeclareAvailability {
        teacher: TeacherId::new(request.teacher_id),
        day: DayId::new(request.day_id),
        time_module: TimeModuleId::new(request.time_module_id),
    };
    let result: BootstrapResult =
        apply_bootstrap(catalog, command, actor, cause).map_err(translate_core_error)?;
    tracing::info!(
        teacher_id = request.teacher_id,
        day_id = request.day_id,
        time_module_id = request.time_module_id,
        "declared availability"
    );

    Ok(CatalogApiResult {
        response: DeclareAvailabilityResponse {
            message: format!(
                "Declared teacher {} available on day {} module {}",
                request.teacher_id, request.day_id, request.time_module_id
            ),
        },
        audit_event: result.audit_event,
        new_catalog: result.new_catalog,
    })
}

/// Registers a faculty via the API boundary.
///
/// # Errors
///
/// Returns an error if the name is empty or already registered.
pub fn register_faculty(
    catalog: &Catalog,
    request: RegisterFacultyRequest,
    actor: Actor,
    cause: Cause,
) -> Result<CatalogApiResult<RegisterFacultyResponse>, ApiError> {
    let name: String = request.name.trim().to_string();
    let command: Command = Command::RegisterFaculty {
        name: request.name,
    };
    let result: BootstrapResult =
        apply_bootstrap(catalog, command, actor, cause).map_err(translate_core_error)?;
    let faculty_id: i64 = created_id(&result)?;
    tracing::info!(faculty_id, name, "registered faculty");

    Ok(CatalogApiResult {
        response: RegisterFacultyResponse {
            faculty_id,
            name: name.clone(),
            message: format!("Successfully registered faculty '{name}'"),
        },
        audit_event: result.audit_event,
        new_catalog: result.new_catalog,
    })
}

/// Registers a subject via the API boundary.
///
/// # Errors
///
/// Returns an error if the name is empty or a referenced faculty or room
/// type does not exist.
pub fn register_subject(
    catalog: &Catalog,
    request: RegisterSubjectRequest,
    actor: Actor,
    cause: Cause,
) -> Result<CatalogApiResult<RegisterSubjectResponse>, ApiError> {
    let name: String = request.name.trim().to_string();
    let command: Command = Command::RegisterSubject {
        plan_year: request.plan_year,
        career_code: request.career_code,
        faculty: request.faculty_id.map(FacultyId::new),
        level: request.level,
        code: request.code,
        name: request.name,
        equivalent_code: request.equivalent_code,
        section: request.section,
        enrolled_students: request.enrolled_students,
        required_room_type: request.required_room_type_id.map(RoomTypeId::new),
    };
    let result: BootstrapResult =
        apply_bootstrap(catalog, command, actor, cause).map_err(translate_core_error)?;
    let subject_id: i64 = created_id(&result)?;
    tracing::info!(subject_id, name, "registered subject");

    Ok(CatalogApiResult {
        response: RegisterSubjectResponse {
            subject_id,
            name: name.clone(),
            message: format!("Successfully registered subject '{name}'"),
        },
        audit_event: result.audit_event,
        new_catalog: result.new_catalog,
    })
}

fn draft_from_request(request: CreateEntryRequest) -> EntryDraft {
    EntryDraft {
        subject: SubjectId::new(request.subject_id),
        teacher: TeacherId::new(request.teacher_id),
        room: RoomId::new(request.room_id),
        day: DayId::new(request.day_id),
        time_module: TimeModuleId::new(request.time_module_id),
        section: request.section,
        career: request.career,
        level: request.level,
    }
}

/// Admits a schedule entry via the API boundary.
///
/// The candidate runs through the full conflict validation; a rejection
/// is returned as a structured, user-facing error and leaves the store
/// unchanged.
///
/// # Errors
///
/// Returns an error if a reference does not resolve, a supplementary
/// constraint fails, or the room or teacher slot is taken.
pub fn create_entry(
    catalog: &Catalog,
    state: &ScheduleState,
    request: CreateEntryRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<CreateEntryResponse>, ApiError> {
    let command: Command = Command::AdmitEntry {
        draft: draft_from_request(request),
    };
    let transition: TransitionResult =
        apply(catalog, state, command, actor, cause).map_err(translate_core_error)?;
    let entry_id: i64 = transition
        .admitted_entry
        .map(|id| id.value())
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Admission did not report an entry id"),
        })?;
    tracing::info!(entry_id, "admitted schedule entry");

    Ok(ApiResult {
        response: CreateEntryResponse {
            entry_id,
            message: format!("Successfully admitted entry {entry_id}"),
        },
        audit_event: transition.audit_event,
        new_state: transition.new_state,
    })
}

/// Retracts a schedule entry via the API boundary.
///
/// # Errors
///
/// Returns an error if the entry does not exist.
pub fn retract_entry(
    catalog: &Catalog,
    state: &ScheduleState,
    entry_id: i64,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<RetractEntryResponse>, ApiError> {
    let command: Command = Command::RetractEntry {
        entry_id: EntryId::new(entry_id),
    };
    let transition: TransitionResult =
        apply(catalog, state, command, actor, cause).map_err(translate_core_error)?;
    tracing::info!(entry_id, "retracted schedule entry");

    Ok(ApiResult {
        response: RetractEntryResponse {
            entry_id,
            message: format!("Successfully retracted entry {entry_id}"),
        },
        audit_event: transition.audit_event,
        new_state: transition.new_state,
    })
}

/// Replaces a schedule entry via the API boundary.
///
/// The replacement validates against the store without the prior entry;
/// on rejection the prior entry stays in place.
///
/// # Errors
///
/// Returns an error if the entry does not exist or the replacement fails
/// validation.
pub fn replace_entry(
    catalog: &Catalog,
    state: &ScheduleState,
    entry_id: i64,
    request: CreateEntryRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<ReplaceEntryResponse>, ApiError> {
    let command: Command = Command::ReplaceEntry {
        entry_id: EntryId::new(entry_id),
        draft: draft_from_request(request),
    };
    let transition: TransitionResult =
        apply(catalog, state, command, actor, cause).map_err(translate_core_error)?;
    let new_entry_id: i64 = transition
        .admitted_entry
        .map(|id| id.value())
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Replacement did not report an entry id"),
        })?;
    tracing::info!(
        replaced_entry_id = entry_id,
        entry_id = new_entry_id,
        "replaced schedule entry"
    );

    Ok(ApiResult {
        response: ReplaceEntryResponse {
            replaced_entry_id: entry_id,
            entry_id: new_entry_id,
            message: format!("Successfully replaced entry {entry_id} with {new_entry_id}"),
        },
        audit_event: transition.audit_event,
        new_state: transition.new_state,
    })
}

/// Clears every entry in the planning period via the API boundary.
///
/// # Errors
///
/// Returns an error only on internal failure; clearing an empty term is
/// a no-op.
pub fn clear_term(
    catalog: &Catalog,
    state: &ScheduleState,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<ClearTermResponse>, ApiError> {
    let dropped_count: usize = state.entries.len();
    let transition: TransitionResult =
        apply(catalog, state, Command::ClearTerm, actor, cause).map_err(translate_core_error)?;
    tracing::info!(dropped_count, "cleared planning period");

    Ok(ApiResult {
        response: ClearTermResponse {
            dropped_count,
            message: format!("Cleared {dropped_count} entries"),
        },
        audit_event: transition.audit_event,
        new_state: transition.new_state,
    })
}

/// Admits a batch of schedule entries via the API boundary.
///
/// Always succeeds at the API level; per-row verdicts are reported in the
/// response. With `atomic` set, any rejection reverts the whole batch.
#[must_use]
pub fn bulk_entries(
    catalog: &Catalog,
    state: &ScheduleState,
    request: BulkEntriesRequest,
    actor: Actor,
    cause: Cause,
) -> ApiResult<BulkEntriesResponse> {
    let mode: BulkMode = if request.atomic {
        BulkMode::AllOrNothing
    } else {
        BulkMode::Independent
    };
    let drafts: Vec<EntryDraft> = request.entries.into_iter().map(draft_from_request).collect();
    let result: BulkAdmitResult = apply_bulk(catalog, state, drafts, mode, actor, cause);

    let reverted: bool = request.atomic && result.outcomes.iter().any(Result::is_err);
    let results: Vec<BulkEntryRowResult> = result
        .outcomes
        .into_iter()
        .enumerate()
        .map(|(row, outcome)| match outcome {
            Ok(entry_id) if !reverted => BulkEntryRowResult {
                row,
                status: BulkRowStatus::Admitted,
                entry_id: Some(entry_id.value()),
                error: None,
            },
            // Validated, but rolled back with the batch; its entry id
            // no longer refers to anything.
            Ok(_) => BulkEntryRowResult {
                row,
                status: BulkRowStatus::Reverted,
                entry_id: None,
                error: None,
            },
            Err(err) => BulkEntryRowResult {
                row,
                status: BulkRowStatus::Rejected,
                entry_id: None,
                error: Some(translate_core_error(err).to_string()),
            },
        })
        .collect();
    let admitted_count: usize = results
        .iter()
        .filter(|row| row.status == BulkRowStatus::Admitted)
        .count();
    let rejected_count: usize = results
        .iter()
        .filter(|row| row.status == BulkRowStatus::Rejected)
        .count();
    tracing::info!(admitted_count, rejected_count, reverted, "bulk admission");

    ApiResult {
        response: BulkEntriesResponse {
            results,
            admitted_count,
            rejected_count,
            reverted,
        },
        audit_event: result.audit_event,
        new_state: result.new_state,
    }
}

/// Lists teachers matching the given column filters.
///
/// # Errors
///
/// Returns an error if a filter names an unknown field.
pub fn list_teachers(
    catalog: &Catalog,
    filters: &BTreeMap<String, String>,
) -> Result<ListTeachersResponse, ApiError> {
    let teachers: Vec<&Teacher> =
        filter_records(&catalog.teachers, filters).map_err(translate_core_error)?;

    Ok(ListTeachersResponse {
        teachers: teachers
            .into_iter()
            .map(|teacher| TeacherInfo {
                teacher_id: teacher.id.value(),
                full_name: teacher.full_name.clone(),
                rut: teacher.rut.clone(),
            })
            .collect(),
    })
}

/// Lists rooms matching the given column filters.
///
/// # Errors
///
/// Returns an error if a filter names an unknown field.
pub fn list_rooms(
    catalog: &Catalog,
    filters: &BTreeMap<String, String>,
) -> Result<ListRoomsResponse, ApiError> {
    let rooms: Vec<&Room> =
        filter_records(&catalog.rooms, filters).map_err(translate_core_error)?;

    Ok(ListRoomsResponse {
        rooms: rooms
            .into_iter()
            .map(|room| RoomInfo {
                room_id: room.id.value(),
                code: room.code.clone(),
                name: room.name.clone(),
                capacity: room.capacity,
                room_type_id: room.room_type.map(|id| id.value()),
            })
            .collect(),
    })
}

/// Lists subjects matching the given column filters.
///
/// # Errors
///
/// Returns an error if a filter names an unknown field.
pub fn list_subjects(
    catalog: &Catalog,
    filters: &BTreeMap<String, String>,
) -> Result<ListSubjectsResponse, ApiError> {
    let subjects: Vec<&Subject> =
        filter_records(&catalog.subjects, filters).map_err(translate_core_error)?;

    Ok(ListSubjectsResponse {
        subjects: subjects
            .into_iter()
            .map(|subject| SubjectInfo {
                subject_id: subject.id.value(),
                code: subject.code.clone(),
                name: subject.name.clone(),
                career_code: subject.career_code.clone(),
                level: subject.level.clone(),
                section: subject.section.clone(),
                enrolled_students: subject.enrolled_students,
            })
            .collect(),
    })
}

/// Lists schedule entries matching the given column filters, with their
/// references resolved to display values.
///
/// # Errors
///
/// Returns an error if a filter names an unknown field.
pub fn list_schedules(
    catalog: &Catalog,
    state: &ScheduleState,
    filters: &BTreeMap<String, String>,
) -> Result<ListSchedulesResponse, ApiError> {
    let views: Vec<ScheduleEntryView> = entry_views(catalog, state);
    let entries: Vec<ScheduleEntryView> = filter_records(&views, filters)
        .map_err(translate_core_error)?
        .into_iter()
        .cloned()
        .collect();

    Ok(ListSchedulesResponse { entries })
}

/// Computes per-room (and optionally group) occupancy under a filter.
///
/// # Errors
///
/// Returns an error if a filter id does not resolve or the requested
/// group does not exist.
pub fn occupancy(
    catalog: &Catalog,
    state: &ScheduleState,
    request: &OccupancyRequest,
) -> Result<OccupancyResponse, ApiError> {
    let filter: OccupancyFilter = OccupancyFilter {
        rooms: None,
        days: request
            .day_ids
            .as_ref()
            .map(|ids| ids.iter().copied().map(DayId::new).collect::<BTreeSet<_>>()),
        modules: request.time_module_ids.as_ref().map(|ids| {
            ids.iter()
                .copied()
                .map(TimeModuleId::new)
                .collect::<BTreeSet<_>>()
        }),
    };

    let stats: BTreeMap<RoomId, OccupancyStat> =
        room_occupancy(catalog, state, &filter).map_err(translate_core_error)?;
    let rooms: Vec<RoomOccupancyInfo> = stats
        .into_iter()
        .map(|(room_id, stat)| RoomOccupancyInfo {
            room_id: room_id.value(),
            code: catalog
                .room(room_id)
                .map_or_else(String::new, |room| room.code.clone()),
            slots_used: stat.slots_used,
            slots_available: stat.slots_available,
            percentage: stat.percentage,
            band: OccupancyBand::classify(stat.percentage),
        })
        .collect();

    let group: Option<GroupOccupancyInfo> = match &request.group {
        Some(name) => {
            let group: &RoomGroup =
                catalog
                    .room_group_by_name(name)
                    .ok_or_else(|| ApiError::ResourceNotFound {
                        resource_type: String::from("room group"),
                        message: format!("Room group '{name}' does not exist"),
                    })?;
            let stat: GroupOccupancy =
                group_occupancy(catalog, state, group, &filter).map_err(translate_core_error)?;
            Some(GroupOccupancyInfo {
                name: group.name.clone(),
                occupied_room_count: stat.occupied_room_count,
                total_room_count: stat.total_room_count,
                percentage: stat.percentage,
                band: OccupancyBand::classify(stat.percentage),
            })
        }
        None => None,
    };

    Ok(OccupancyResponse { rooms, group })
}

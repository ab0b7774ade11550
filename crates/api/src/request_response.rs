// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use u_planner::ScheduleEntryView;

/// Occupancy severity band derived from a raw percentage.
///
/// Bands are presentation classifications; the engine itself only
/// reports the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyBand {
    /// Below 40% utilization.
    Available,
    /// 40% to 79% utilization.
    Balanced,
    /// 80% utilization or above.
    High,
}

impl OccupancyBand {
    /// Classifies a raw percentage into a band.
    #[must_use]
    pub const fn classify(percentage: u32) -> Self {
        if percentage < 40 {
            Self::Available
        } else if percentage < 80 {
            Self::Balanced
        } else {
            Self::High
        }
    }
}

/// API request to register a day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterDayRequest {
    /// The canonical short code (e.g., "LU").
    pub code: String,
    /// The display name.
    pub name: String,
}

/// API response for a successful day registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterDayResponse {
    /// The canonical day identifier.
    pub day_id: i64,
    /// The normalized day code.
    pub code: String,
    /// A success message.
    pub message: String,
}

/// API request to register a time module.
///
/// Times are ISO "HH:MM" strings; the handler parses them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterTimeModuleRequest {
    /// The unique module-horario code.
    pub mod_hor: String,
    /// Start of the block ("HH:MM").
    pub start_time: String,
    /// End of the block ("HH:MM").
    pub end_time: String,
    /// Display label for the range.
    pub range_label: String,
    /// The module's ordinal position within the day.
    pub module_number: u8,
}

/// API response for a successful time module registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterTimeModuleResponse {
    /// The canonical time module identifier.
    pub time_module_id: i64,
    /// The normalized module code.
    pub mod_hor: String,
    /// A success message.
    pub message: String,
}

/// API request to register a room type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterRoomTypeRequest {
    /// The unique type name.
    pub name: String,
}

/// API response for a successful room type registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterRoomTypeResponse {
    /// The canonical room type identifier.
    pub room_type_id: i64,
    /// The type name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API request to register a room.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterRoomRequest {
    /// The unique room code.
    pub code: String,
    /// The display name.
    pub name: String,
    /// Seating capacity (must be positive).
    pub capacity: u32,
    /// The room's type identifier, if classified.
    pub room_type_id: Option<i64>,
}

/// API response for a successful room registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterRoomResponse {
    /// The canonical room identifier.
    pub room_id: i64,
    /// The normalized room code.
    pub code: String,
    /// A success message.
    pub message: String,
}

/// API request to define a named room group from room codes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DefineRoomGroupRequest {
    /// The unique group name.
    pub name: String,
    /// The member room codes.
    pub room_codes: Vec<String>,
}

/// API response for a successful room group definition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DefineRoomGroupResponse {
    /// The canonical group identifier.
    pub room_group_id: i64,
    /// The group name.
    pub name: String,
    /// The number of member rooms.
    pub member_count: usize,
    /// A success message.
    pub message: String,
}

/// API request to register a teacher.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterTeacherRequest {
    /// The teacher's full display name.
    pub full_name: String,
    /// The unique national identifier.
    pub rut: String,
}

/// API response for a successful teacher registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterTeacherResponse {
    /// The canonical teacher identifier.
    pub teacher_id: i64,
    /// The teacher's full name.
    pub full_name: String,
    /// A success message.
    pub message: String,
}

/// API request to declare a teacher available in a slot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeclareAvailabilityRequest {
    /// The teacher identifier.
    pub teacher_id: i64,
    /// The day identifier.
    pub day_id: i64,
    /// The time module identifier.
    pub time_module_id: i64,
}

/// API response for a successful availability declaration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeclareAvailabilityResponse {
    /// A success message.
    pub message: String,
}

/// API request to register a faculty.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterFacultyRequest {
    /// The unique faculty name.
    pub name: String,
}

/// API response for a successful faculty registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterFacultyResponse {
    /// The canonical faculty identifier.
    pub faculty_id: i64,
    /// The faculty name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API request to register a subject/section.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterSubjectRequest {
    /// Plan year column.
    pub plan_year: Option<String>,
    /// Career code column.
    pub career_code: Option<String>,
    /// The owning faculty identifier, if any.
    pub faculty_id: Option<i64>,
    /// Level column.
    pub level: Option<String>,
    /// Subject code column.
    pub code: Option<String>,
    /// The display name.
    pub name: String,
    /// Equivalent subject code, if any.
    pub equivalent_code: Option<String>,
    /// Section column.
    pub section: Option<String>,
    /// Enrolled student count.
    pub enrolled_students: u32,
    /// The required room type identifier, if any.
    pub required_room_type_id: Option<i64>,
}

/// API response for a successful subject registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterSubjectResponse {
    /// The canonical subject identifier.
    pub subject_id: i64,
    /// The subject name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API request to create a schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateEntryRequest {
    /// The subject identifier.
    pub subject_id: i64,
    /// The teacher identifier.
    pub teacher_id: i64,
    /// The room identifier.
    pub room_id: i64,
    /// The day identifier.
    pub day_id: i64,
    /// The time module identifier.
    pub time_module_id: i64,
    /// Section label.
    #[serde(default)]
    pub section: String,
    /// Career label.
    #[serde(default)]
    pub career: String,
    /// Level label.
    #[serde(default)]
    pub level: String,
}

/// API response for a successfully admitted entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateEntryResponse {
    /// The assigned entry identifier.
    pub entry_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for a successful retraction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RetractEntryResponse {
    /// The retracted entry identifier.
    pub entry_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for a successful replacement.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReplaceEntryResponse {
    /// The entry that was replaced.
    pub replaced_entry_id: i64,
    /// The freshly admitted entry identifier.
    pub entry_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for a term clear.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClearTermResponse {
    /// The number of entries dropped.
    pub dropped_count: usize,
    /// A success message.
    pub message: String,
}

/// API request to admit a batch of entries.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BulkEntriesRequest {
    /// The candidate entries, in order.
    pub entries: Vec<CreateEntryRequest>,
    /// When true, any rejection reverts the whole batch.
    #[serde(default)]
    pub atomic: bool,
}

/// The outcome of one row in a bulk admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkRowStatus {
    /// The row was admitted and is in the store.
    Admitted,
    /// The row was rejected.
    Rejected,
    /// The row passed validation, but the all-or-nothing batch was
    /// rolled back; nothing was stored for it.
    Reverted,
}

/// Per-row result of a bulk admission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BulkEntryRowResult {
    /// The zero-based input row index.
    pub row: usize,
    /// Whether the row was admitted.
    pub status: BulkRowStatus,
    /// The assigned entry identifier, only when the row was stored.
    pub entry_id: Option<i64>,
    /// The rejection reason, when rejected.
    pub error: Option<String>,
}

/// API response for a bulk admission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BulkEntriesResponse {
    /// Per-row results, in input order.
    pub results: Vec<BulkEntryRowResult>,
    /// The number of rows actually stored; zero when the batch reverted.
    pub admitted_count: usize,
    /// The number of rejected rows.
    pub rejected_count: usize,
    /// Whether a rejection reverted the whole batch.
    pub reverted: bool,
}

/// Teacher information for list views.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeacherInfo {
    /// The canonical teacher identifier.
    pub teacher_id: i64,
    /// The teacher's full name.
    pub full_name: String,
    /// The teacher's rut.
    pub rut: String,
}

/// API response listing teachers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListTeachersResponse {
    /// The matching teachers, in registration order.
    pub teachers: Vec<TeacherInfo>,
}

/// Room information for list views.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoomInfo {
    /// The canonical room identifier.
    pub room_id: i64,
    /// The room code.
    pub code: String,
    /// The room display name.
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
    /// The room's type identifier, if classified.
    pub room_type_id: Option<i64>,
}

/// API response listing rooms.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListRoomsResponse {
    /// The matching rooms, in registration order.
    pub rooms: Vec<RoomInfo>,
}

/// Subject information for list views.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubjectInfo {
    /// The canonical subject identifier.
    pub subject_id: i64,
    /// Subject code column.
    pub code: Option<String>,
    /// The display name.
    pub name: String,
    /// Career code column.
    pub career_code: Option<String>,
    /// Level column.
    pub level: Option<String>,
    /// Section column.
    pub section: Option<String>,
    /// Enrolled student count.
    pub enrolled_students: u32,
}

/// API response listing subjects.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListSubjectsResponse {
    /// The matching subjects, in registration order.
    pub subjects: Vec<SubjectInfo>,
}

/// API response listing schedule entries.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListSchedulesResponse {
    /// The matching entries, in admission order.
    pub entries: Vec<ScheduleEntryView>,
}

/// API request for an occupancy aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct OccupancyRequest {
    /// The day identifiers in scope, or all days.
    pub day_ids: Option<Vec<i64>>,
    /// The time module identifiers in scope, or all modules.
    pub time_module_ids: Option<Vec<i64>>,
    /// A room group name to aggregate, if any.
    pub group: Option<String>,
}

/// Per-room occupancy information.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoomOccupancyInfo {
    /// The canonical room identifier.
    pub room_id: i64,
    /// The room code.
    pub code: String,
    /// Entries occupying the room within the filtered slots.
    pub slots_used: u32,
    /// Filtered days times filtered modules.
    pub slots_available: u32,
    /// Rounded utilization percentage.
    pub percentage: u32,
    /// Severity band for presentation.
    pub band: OccupancyBand,
}

/// Room group occupancy information.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GroupOccupancyInfo {
    /// The group name.
    pub name: String,
    /// Member rooms with at least one entry in scope.
    pub occupied_room_count: u32,
    /// Total member rooms.
    pub total_room_count: u32,
    /// Rounded utilization percentage.
    pub percentage: u32,
    /// Severity band for presentation.
    pub band: OccupancyBand,
}

/// API response for an occupancy query.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OccupancyResponse {
    /// Per-room statistics, ordered by room id.
    pub rooms: Vec<RoomOccupancyInfo>,
    /// Group statistics, when a group was requested.
    pub group: Option<GroupOccupancyInfo>,
}

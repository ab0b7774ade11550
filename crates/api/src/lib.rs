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

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, CatalogApiResult, bulk_entries, clear_term, create_entry, declare_availability,
    define_room_group, list_rooms, list_schedules, list_subjects, list_teachers, occupancy,
    register_day, register_faculty, register_room, register_room_type, register_subject,
    register_teacher, register_time_module, replace_entry, retract_entry,
};
pub use request_response::{
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

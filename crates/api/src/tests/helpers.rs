// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use u_planner::{Catalog, ScheduleState};
use u_planner_audit::{Actor, Cause};
use u_planner_domain::{Semester, Term};

use crate::request_response::{
    CreateEntryRequest, RegisterDayRequest, RegisterRoomRequest, RegisterSubjectRequest,
    RegisterTeacherRequest, RegisterTimeModuleRequest,
};
use crate::{
    register_day, register_room, register_subject, register_teacher, register_time_module,
};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("planner-1"), String::from("user"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-789"), String::from("Planner request"))
}

pub fn create_test_state() -> ScheduleState {
    ScheduleState::new(Term::new(2026, Semester::First))
}

/// A catalog populated through the API handlers, with the assigned ids.
pub struct ApiFixture {
    pub catalog: Catalog,
    pub lunes_id: i64,
    pub martes_id: i64,
    pub module_1_id: i64,
    pub module_2_id: i64,
    pub r101_id: i64,
    pub r202_id: i64,
    pub turing_id: i64,
    pub lovelace_id: i64,
    pub algoritmos_id: i64,
}

pub fn create_api_fixture() -> ApiFixture {
    let catalog: Catalog = Catalog::new();

    let result = register_day(
        &catalog,
        RegisterDayRequest {
            code: String::from("LU"),
            name: String::from("Lunes"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("day should register");
    let lunes_id: i64 = result.response.day_id;

    let result = register_day(
        &result.new_catalog,
        RegisterDayRequest {
            code: String::from("MA"),
            name: String::from("Martes"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("day should register");
    let martes_id: i64 = result.response.day_id;

    let result = register_time_module(
        &result.new_catalog,
        RegisterTimeModuleRequest {
            mod_hor: String::from("M1"),
            start_time: String::from("08:00"),
            end_time: String::from("09:00"),
            range_label: String::from("08:00 - 09:00"),
            module_number: 1,
        },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("module should register");
    let module_1_id: i64 = result.response.time_module_id;

    let result = register_time_module(
        &result.new_catalog,
        RegisterTimeModuleRequest {
            mod_hor: String::from("M2"),
            start_time: String::from("09:10"),
            end_time: String::from("10:10"),
            range_label: String::from("09:10 - 10:10"),
            module_number: 2,
        },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("module should register");
    let module_2_id: i64 = result.response.time_module_id;

    let result = register_room(
        &result.new_catalog,
        RegisterRoomRequest {
            code: String::from("R101"),
            name: String::from("Sala R101"),
            capacity: 40,
            room_type_id: None,
        },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("room should register");
    let r101_id: i64 = result.response.room_id;

    let result = register_room(
        &result.new_catalog,
        RegisterRoomRequest {
            code: String::from("R202"),
            name: String::from("Sala R202"),
            capacity: 30,
            room_type_id: None,
        },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("room should register");
    let r202_id: i64 = result.response.room_id;

    let result = register_teacher(
        &result.new_catalog,
        RegisterTeacherRequest {
            full_name: String::from("Alan Turing"),
            rut: String::from("11.111.111-1"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("teacher should register");
    let turing_id: i64 = result.response.teacher_id;

    let result = register_teacher(
        &result.new_catalog,
        RegisterTeacherRequest {
            full_name: String::from("Ada Lovelace"),
            rut: String::from("22.222.222-2"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("teacher should register");
    let lovelace_id: i64 = result.response.teacher_id;

    let result = register_subject(
        &result.new_catalog,
        RegisterSubjectRequest {
            plan_year: Some(String::from("2024")),
            career_code: Some(String::from("ICI")),
            faculty_id: None,
            level: Some(String::from("3")),
            code: Some(String::from("ALG101")),
            name: String::from("Algoritmos"),
            equivalent_code: None,
            section: Some(String::from("001")),
            enrolled_students: 30,
            required_room_type_id: None,
        },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("subject should register");
    let algoritmos_id: i64 = result.response.subject_id;

    ApiFixture {
        catalog: result.new_catalog,
        lunes_id,
        martes_id,
        module_1_id,
        module_2_id,
        r101_id,
        r202_id,
        turing_id,
        lovelace_id,
        algoritmos_id,
    }
}

pub fn create_entry_request(
    fixture: &ApiFixture,
    teacher_id: i64,
    room_id: i64,
    day_id: i64,
    time_module_id: i64,
) -> CreateEntryRequest {
    CreateEntryRequest {
        subject_id: fixture.algoritmos_id,
        teacher_id,
        room_id,
        day_id,
        time_module_id,
        section: String::from("001"),
        career: String::from("ICI"),
        level: String::from("3"),
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BootstrapResult, Catalog, CatalogRecordId, Command, apply_bootstrap};
use time::macros::time;
use u_planner_audit::{Actor, Cause};
use u_planner_domain::{
    DayId, EntryDraft, RoomId, RoomTypeId, Semester, SubjectId, TeacherId, Term, TimeModuleId,
};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin-123"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Admin request"))
}

pub fn create_test_term() -> Term {
    Term::new(2026, Semester::First)
}

/// A populated catalog plus the ids of every record in it.
pub struct TestCatalog {
    pub catalog: Catalog,
    pub lunes: DayId,
    pub martes: DayId,
    pub module_1: TimeModuleId,
    pub module_2: TimeModuleId,
    pub aula: RoomTypeId,
    pub laboratorio: RoomTypeId,
    pub r101: RoomId,
    pub r202: RoomId,
    pub lab1: RoomId,
    pub turing: TeacherId,
    pub lovelace: TeacherId,
    pub algoritmos: SubjectId,
    pub quimica: SubjectId,
}

/// Applies a catalog command, panicking on rejection.
pub fn bootstrap(catalog: &Catalog, command: Command) -> BootstrapResult {
    apply_bootstrap(catalog, command, create_test_actor(), create_test_cause())
        .expect("bootstrap command should be accepted")
}

fn day_id(result: &BootstrapResult) -> DayId {
    match result.created {
        Some(CatalogRecordId::Day(id)) => id,
        _ => panic!("expected a day record"),
    }
}

fn module_id(result: &BootstrapResult) -> TimeModuleId {
    match result.created {
        Some(CatalogRecordId::TimeModule(id)) => id,
        _ => panic!("expected a time module record"),
    }
}

fn room_type_id(result: &BootstrapResult) -> RoomTypeId {
    match result.created {
        Some(CatalogRecordId::RoomType(id)) => id,
        _ => panic!("expected a room type record"),
    }
}

fn room_id(result: &BootstrapResult) -> RoomId {
    match result.created {
        Some(CatalogRecordId::Room(id)) => id,
        _ => panic!("expected a room record"),
    }
}

fn teacher_id(result: &BootstrapResult) -> TeacherId {
    match result.created {
        Some(CatalogRecordId::Teacher(id)) => id,
        _ => panic!("expected a teacher record"),
    }
}

fn subject_id(result: &BootstrapResult) -> SubjectId {
    match result.created {
        Some(CatalogRecordId::Subject(id)) => id,
        _ => panic!("expected a subject record"),
    }
}

/// Builds the shared fixture: two days, two modules, three rooms (one a
/// laboratory), two teachers, and two subjects (one requiring a lab).
pub fn create_test_catalog() -> TestCatalog {
    let catalog: Catalog = Catalog::new();

    let result: BootstrapResult = bootstrap(
        &catalog,
        Command::RegisterDay {
            code: String::from("LU"),
            name: String::from("Lunes"),
        },
    );
    let lunes: DayId = day_id(&result);

    let result: BootstrapResult = bootstrap(
        &result.new_catalog,
        Command::RegisterDay {
            code: String::from("MA"),
            name: String::from("Martes"),
        },
    );
    let martes: DayId = day_id(&result);

    let result: BootstrapResult = bootstrap(
        &result.new_catalog,
        Command::RegisterTimeModule {
            mod_hor: String::from("M1"),
            start_time: time!(08:00),
            end_time: time!(09:00),
            range_label: String::from("08:00 - 09:00"),
            module_number: 1,
        },
    );
    let module_1: TimeModuleId = module_id(&result);

    let result: BootstrapResult = bootstrap(
        &result.new_catalog,
        Command::RegisterTimeModule {
            mod_hor: String::from("M2"),
            start_time: time!(09:10),
            end_time: time!(10:10),
            range_label: String::from("09:10 - 10:10"),
            module_number: 2,
        },
    );
    let module_2: TimeModuleId = module_id(&result);

    let result: BootstrapResult = bootstrap(
        &result.new_catalog,
        Command::RegisterRoomType {
            name: String::from("Aula"),
        },
    );
    let aula: RoomTypeId = room_type_id(&result);

    let result: BootstrapResult = bootstrap(
        &result.new_catalog,
        Command::RegisterRoomType {
            name: String::from("Laboratorio"),
        },
    );
    let laboratorio: RoomTypeId = room_type_id(&result);

    let result: BootstrapResult = bootstrap(
        &result.new_catalog,
        Command::RegisterRoom {
            code: String::from("R101"),
            name: String::from("Sala R101"),
            capacity: 40,
            room_type: Some(aula),
        },
    );
    let r101: RoomId = room_id(&result);

    let result: BootstrapResult = bootstrap(
        &result.new_catalog,
        Command::RegisterRoom {
            code: String::from("R202"),
            name: String::from("Sala R202"),
            capacity: 30,
            room_type: Some(aula),
        },
    );
    let r202: RoomId = room_id(&result);

    let result: BootstrapResult = bootstrap(
        &result.new_catalog,
        Command::RegisterRoom {
            code: String::from("LAB1"),
            name: String::from("Laboratorio 1"),
            capacity: 25,
            room_type: Some(laboratorio),
        },
    );
    let lab1: RoomId = room_id(&result);

    let result: BootstrapResult = bootstrap(
        &result.new_catalog,
        Command::RegisterTeacher {
            full_name: String::from("Alan Turing"),
            rut: String::from("11.111.111-1"),
        },
    );
    let turing: TeacherId = teacher_id(&result);

    let result: BootstrapResult = bootstrap(
        &result.new_catalog,
        Command::RegisterTeacher {
            full_name: String::from("Ada Lovelace"),
            rut: String::from("22.222.222-2"),
        },
    );
    let lovelace: TeacherId = teacher_id(&result);

    let result: BootstrapResult = bootstrap(
        &result.new_catalog,
        Command::RegisterSubject {
            plan_year: Some(String::from("2024")),
            career_code: Some(String::from("ICI")),
            faculty: None,
            level: Some(String::from("3")),
            code: Some(String::from("ALG101")),
            name: String::from("Algoritmos"),
            equivalent_code: None,
            section: Some(String::from("001")),
            enrolled_students: 30,
            required_room_type: None,
        },
    );
    let algoritmos: SubjectId = subject_id(&result);

    let result: BootstrapResult = bootstrap(
        &result.new_catalog,
        Command::RegisterSubject {
            plan_year: Some(String::from("2024")),
            career_code: Some(String::from("IQ")),
            faculty: None,
            level: Some(String::from("2")),
            code: Some(String::from("QUI201")),
            name: String::from("Quimica Organica"),
            equivalent_code: None,
            section: Some(String::from("002")),
            enrolled_students: 20,
            required_room_type: Some(laboratorio),
        },
    );
    let quimica: SubjectId = subject_id(&result);

    TestCatalog {
        catalog: result.new_catalog,
        lunes,
        martes,
        module_1,
        module_2,
        aula,
        laboratorio,
        r101,
        r202,
        lab1,
        turing,
        lovelace,
        algoritmos,
        quimica,
    }
}

/// Builds a draft for the fixture's algorithms subject with default
/// section labels.
pub fn create_test_draft(
    fixture: &TestCatalog,
    teacher: TeacherId,
    room: RoomId,
    day: DayId,
    time_module: TimeModuleId,
) -> EntryDraft {
    EntryDraft {
        subject: fixture.algoritmos,
        teacher,
        room,
        day,
        time_module,
        section: String::from("001"),
        career: String::from("ICI"),
        level: String::from("3"),
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use crate::request_response::{DefineRoomGroupRequest, OccupancyBand, OccupancyRequest};
use crate::tests::helpers::{
    create_api_fixture, create_entry_request, create_test_actor, create_test_cause,
    create_test_state,
};
use crate::{
    ApiError, create_entry, define_room_group, list_schedules, list_teachers, occupancy,
};
use u_planner::ScheduleState;

fn filters(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(field, needle)| (String::from(*field), String::from(*needle)))
        .collect()
}

#[test]
fn test_list_teachers_applies_column_filters() {
    let fixture = create_api_fixture();

    let all = list_teachers(&fixture.catalog, &BTreeMap::new()).expect("filter should apply");
    assert_eq!(all.teachers.len(), 2);

    let filtered = list_teachers(&fixture.catalog, &filters(&[("full_name", "lovelace")]))
        .expect("filter should apply");
    assert_eq!(filtered.teachers.len(), 1);
    assert_eq!(filtered.teachers[0].full_name, "Ada Lovelace");
}

#[test]
fn test_list_teachers_rejects_unknown_filter_field() {
    let fixture = create_api_fixture();

    let result = list_teachers(&fixture.catalog, &filters(&[("salary", "1")]));

    assert!(matches!(
        result.err(),
        Some(ApiError::InvalidInput { field, .. }) if field == "salary"
    ));
}

#[test]
fn test_list_schedules_filters_by_teacher_display_name() {
    let fixture = create_api_fixture();
    let state: ScheduleState = create_test_state();
    let admitted = create_entry(
        &fixture.catalog,
        &state,
        create_entry_request(
            &fixture,
            fixture.turing_id,
            fixture.r101_id,
            fixture.lunes_id,
            fixture.module_1_id,
        ),
        create_test_actor(),
        create_test_cause(),
    )
    .expect("entry should be admitted");
    let admitted = create_entry(
        &fixture.catalog,
        &admitted.new_state,
        create_entry_request(
            &fixture,
            fixture.lovelace_id,
            fixture.r202_id,
            fixture.lunes_id,
            fixture.module_1_id,
        ),
        create_test_actor(),
        create_test_cause(),
    )
    .expect("entry should be admitted");

    let result = list_schedules(
        &fixture.catalog,
        &admitted.new_state,
        &filters(&[("docente", "turing")]),
    )
    .expect("filter should apply");

    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].docente, "Alan Turing");
    assert_eq!(result.entries[0].sala, "R101");
}

#[test]
fn test_occupancy_reports_stats_and_bands() {
    let fixture = create_api_fixture();
    let state: ScheduleState = create_test_state();
    let admitted = create_entry(
        &fixture.catalog,
        &state,
        create_entry_request(
            &fixture,
            fixture.turing_id,
            fixture.r101_id,
            fixture.lunes_id,
            fixture.module_1_id,
        ),
        create_test_actor(),
        create_test_cause(),
    )
    .expect("entry should be admitted");
    let admitted = create_entry(
        &fixture.catalog,
        &admitted.new_state,
        create_entry_request(
            &fixture,
            fixture.turing_id,
            fixture.r101_id,
            fixture.lunes_id,
            fixture.module_2_id,
        ),
        create_test_actor(),
        create_test_cause(),
    )
    .expect("entry should be admitted");

    // Restrict to Lunes: R101 uses 2 of 2 slots, R202 none.
    let response = occupancy(
        &fixture.catalog,
        &admitted.new_state,
        &OccupancyRequest {
            day_ids: Some(vec![fixture.lunes_id]),
            time_module_ids: None,
            group: None,
        },
    )
    .expect("occupancy should compute");

    assert_eq!(response.rooms.len(), 2);
    let r101 = response
        .rooms
        .iter()
        .find(|room| room.room_id == fixture.r101_id)
        .expect("R101 should be present");
    assert_eq!(r101.slots_used, 2);
    assert_eq!(r101.slots_available, 2);
    assert_eq!(r101.percentage, 100);
    assert_eq!(r101.band, OccupancyBand::High);

    let r202 = response
        .rooms
        .iter()
        .find(|room| room.room_id == fixture.r202_id)
        .expect("R202 should be present");
    assert_eq!(r202.percentage, 0);
    assert_eq!(r202.band, OccupancyBand::Available);
}

#[test]
fn test_occupancy_with_group_reports_group_stats() {
    let mut fixture = create_api_fixture();
    let defined = define_room_group(
        &fixture.catalog,
        DefineRoomGroupRequest {
            name: String::from("Aulas A"),
            room_codes: vec![String::from("R101"), String::from("R202")],
        },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("group should be defined");
    fixture.catalog = defined.new_catalog;

    let state: ScheduleState = create_test_state();
    let admitted = create_entry(
        &fixture.catalog,
        &state,
        create_entry_request(
            &fixture,
            fixture.turing_id,
            fixture.r101_id,
            fixture.lunes_id,
            fixture.module_1_id,
        ),
        create_test_actor(),
        create_test_cause(),
    )
    .expect("entry should be admitted");

    let response = occupancy(
        &fixture.catalog,
        &admitted.new_state,
        &OccupancyRequest {
            day_ids: None,
            time_module_ids: None,
            group: Some(String::from("Aulas A")),
        },
    )
    .expect("occupancy should compute");

    let group = response.group.expect("group stats should be present");
    assert_eq!(group.occupied_room_count, 1);
    assert_eq!(group.total_room_count, 2);
    assert_eq!(group.percentage, 50);
    assert_eq!(group.band, OccupancyBand::Balanced);
}

#[test]
fn test_occupancy_with_unknown_group_is_not_found() {
    let fixture = create_api_fixture();
    let state: ScheduleState = create_test_state();

    let result = occupancy(
        &fixture.catalog,
        &state,
        &OccupancyRequest {
            day_ids: None,
            time_module_ids: None,
            group: Some(String::from("Aulas Z")),
        },
    );

    assert!(matches!(
        result.err(),
        Some(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "room group"
    ));
}

#[test]
fn test_band_classification_boundaries() {
    assert_eq!(OccupancyBand::classify(0), OccupancyBand::Available);
    assert_eq!(OccupancyBand::classify(39), OccupancyBand::Available);
    assert_eq!(OccupancyBand::classify(40), OccupancyBand::Balanced);
    assert_eq!(OccupancyBand::classify(79), OccupancyBand::Balanced);
    assert_eq!(OccupancyBand::classify(80), OccupancyBand::High);
    assert_eq!(OccupancyBand::classify(100), OccupancyBand::High);
}

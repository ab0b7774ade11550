// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use crate::tests::helpers::{
    TestCatalog, create_test_actor, create_test_catalog, create_test_cause, create_test_draft,
    create_test_term,
};
use crate::{
    Command, CoreError, ScheduleEntryView, ScheduleState, TransitionResult, apply, entry_views,
    filter_records,
};
use u_planner_domain::{DomainError, EntryDraft, Room, Subject, Teacher};

fn predicates(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(field, needle)| (String::from(*field), String::from(*needle)))
        .collect()
}

#[test]
fn test_empty_predicates_return_all_records_in_order() {
    let fixture = create_test_catalog();

    let result: Vec<&Teacher> =
        filter_records(&fixture.catalog.teachers, &BTreeMap::new()).expect("filter should apply");

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].full_name, "Alan Turing");
    assert_eq!(result[1].full_name, "Ada Lovelace");
}

#[test]
fn test_substring_match_is_case_insensitive() {
    let fixture = create_test_catalog();

    let result: Vec<&Teacher> =
        filter_records(&fixture.catalog.teachers, &predicates(&[("full_name", "TURING")]))
            .expect("filter should apply");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].full_name, "Alan Turing");
}

#[test]
fn test_every_nonempty_needle_must_match() {
    let fixture = create_test_catalog();

    let result: Vec<&Teacher> = filter_records(
        &fixture.catalog.teachers,
        &predicates(&[("full_name", "a"), ("rut", "22")]),
    )
    .expect("filter should apply");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].rut, "22.222.222-2");
}

#[test]
fn test_empty_needle_is_no_constraint() {
    let fixture = create_test_catalog();

    let result: Vec<&Teacher> = filter_records(
        &fixture.catalog.teachers,
        &predicates(&[("full_name", ""), ("rut", "")]),
    )
    .expect("filter should apply");

    assert_eq!(result.len(), 2);
}

#[test]
fn test_needle_whitespace_is_matched_literally() {
    let fixture = create_test_catalog();

    // " lan " is not a substring of "alan turing".
    let result: Vec<&Teacher> = filter_records(
        &fixture.catalog.teachers,
        &predicates(&[("full_name", " lan ")]),
    )
    .expect("filter should apply");
    assert!(result.is_empty());

    // A lone space is, for both names.
    let result: Vec<&Teacher> =
        filter_records(&fixture.catalog.teachers, &predicates(&[("full_name", " ")]))
            .expect("filter should apply");
    assert_eq!(result.len(), 2);
}

#[test]
fn test_unknown_field_is_rejected() {
    let fixture = create_test_catalog();

    let result: Result<Vec<&Teacher>, CoreError> =
        filter_records(&fixture.catalog.teachers, &predicates(&[("salary", "1")]));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidFilter {
            entity: "teacher",
            field: String::from("salary"),
        }))
    );
}

#[test]
fn test_missing_subject_columns_match_as_empty() {
    let fixture = create_test_catalog();
    let mut subjects: Vec<Subject> = fixture.catalog.subjects.clone();
    subjects[0].code = None;

    // An unset column never contains a non-empty needle.
    let result: Vec<&Subject> =
        filter_records(&subjects, &predicates(&[("code", "ALG")])).expect("filter should apply");
    assert!(result.is_empty());

    // But it passes a blank needle.
    let result: Vec<&Subject> =
        filter_records(&subjects, &predicates(&[("code", "")])).expect("filter should apply");
    assert_eq!(result.len(), 2);
}

#[test]
fn test_room_capacity_filters_as_text() {
    let fixture = create_test_catalog();

    let result: Vec<&Room> =
        filter_records(&fixture.catalog.rooms, &predicates(&[("capacity", "40")]))
            .expect("filter should apply");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].code, "R101");
}

fn build_two_entry_state(fixture: &TestCatalog) -> ScheduleState {
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let first: EntryDraft = create_test_draft(
        fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    let transition: TransitionResult = apply(
        &fixture.catalog,
        &state,
        Command::AdmitEntry { draft: first },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("entry should be admitted");

    let second: EntryDraft = create_test_draft(
        fixture,
        fixture.lovelace,
        fixture.r202,
        fixture.martes,
        fixture.module_2,
    );
    let transition: TransitionResult = apply(
        &fixture.catalog,
        &transition.new_state,
        Command::AdmitEntry { draft: second },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("entry should be admitted");
    transition.new_state
}

#[test]
fn test_entry_views_resolve_display_columns() {
    let fixture = create_test_catalog();
    let state: ScheduleState = build_two_entry_state(&fixture);

    let views: Vec<ScheduleEntryView> = entry_views(&fixture.catalog, &state);

    assert_eq!(views.len(), 2);
    assert_eq!(views[0].asignatura, "Algoritmos");
    assert_eq!(views[0].docente, "Alan Turing");
    assert_eq!(views[0].sala, "R101");
    assert_eq!(views[0].dia, "LU");
    assert_eq!(views[0].modulo, "M1");
}

#[test]
fn test_entry_views_filter_by_teacher_name() {
    let fixture = create_test_catalog();
    let state: ScheduleState = build_two_entry_state(&fixture);
    let views: Vec<ScheduleEntryView> = entry_views(&fixture.catalog, &state);

    let result: Vec<&ScheduleEntryView> =
        filter_records(&views, &predicates(&[("docente", "turing")]))
            .expect("filter should apply");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].docente, "Alan Turing");
    for view in &views {
        let matches: bool = view.docente.to_lowercase().contains("turing");
        assert_eq!(matches, result.contains(&view));
    }
}

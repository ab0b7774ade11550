// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    bootstrap, create_test_actor, create_test_catalog, create_test_cause, create_test_draft,
    create_test_term,
};
use crate::{
    BootstrapResult, Command, CoreError, ScheduleState, TransitionResult, apply, validate_entry,
};
use u_planner_domain::{DomainError, EntryDraft, EntryId, ReferenceKind, SubjectId};

fn admit(
    fixture: &super::helpers::TestCatalog,
    state: &ScheduleState,
    draft: EntryDraft,
) -> TransitionResult {
    apply(
        &fixture.catalog,
        state,
        Command::AdmitEntry { draft },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("entry should be admitted")
}

#[test]
fn test_admit_entry_returns_new_state_with_entry() {
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let draft: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );

    let transition: TransitionResult = admit(&fixture, &state, draft);

    assert_eq!(transition.new_state.entries.len(), 1);
    assert_eq!(transition.admitted_entry, Some(EntryId::new(1)));
    assert_eq!(transition.new_state.entries[0].subject, fixture.algoritmos);
    // Input state is untouched
    assert_eq!(state.entries.len(), 0);
}

#[test]
fn test_admit_entry_emits_audit_event() {
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let draft: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );

    let transition: TransitionResult = admit(&fixture, &state, draft);

    assert_eq!(transition.audit_event.action.name, "AdmitEntry");
    assert_eq!(transition.audit_event.term, Some(create_test_term()));
    assert_eq!(transition.audit_event.before.data, "term=2026-1,entries_count=0");
    assert_eq!(transition.audit_event.after.data, "term=2026-1,entries_count=1");
}

#[test]
fn test_room_conflict_rejects_second_entry_in_same_slot() {
    // Scenario: R101 already hosts a class on (Lunes, M1); a different
    // teacher and subject cannot take the same room slot.
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let first: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    let transition: TransitionResult = admit(&fixture, &state, first);

    let mut second: EntryDraft = create_test_draft(
        &fixture,
        fixture.lovelace,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    second.section = String::from("002");
    let result: Result<TransitionResult, CoreError> = apply(
        &fixture.catalog,
        &transition.new_state,
        Command::AdmitEntry { draft: second },
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::RoomConflict {
            conflicting_entry: EntryId::new(1),
        }))
    );
}

#[test]
fn test_teacher_conflict_rejects_second_engagement_in_same_slot() {
    // Scenario: Turing teaches in R101 on (Lunes, M1); he cannot also
    // teach in R202 in the same slot.
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let first: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    let transition: TransitionResult = admit(&fixture, &state, first);

    let second: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r202,
        fixture.lunes,
        fixture.module_1,
    );
    let result: Result<TransitionResult, CoreError> = apply(
        &fixture.catalog,
        &transition.new_state,
        Command::AdmitEntry { draft: second },
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::TeacherConflict {
            conflicting_entry: EntryId::new(1),
        }))
    );
}

#[test]
fn test_same_room_different_slot_is_accepted() {
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let first: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    let transition: TransitionResult = admit(&fixture, &state, first);

    let second: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_2,
    );
    let transition: TransitionResult = admit(&fixture, &transition.new_state, second);

    assert_eq!(transition.new_state.entries.len(), 2);
}

#[test]
fn test_unknown_subject_is_rejected_before_conflict_checks() {
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let mut draft: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    draft.subject = SubjectId::new(999);

    let result: Result<(), CoreError> = validate_entry(&fixture.catalog, &state, &draft);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::UnknownReference {
            kind: ReferenceKind::Subject,
            id: 999,
        }))
    );
}

#[test]
fn test_rejection_is_idempotent_on_unchanged_state() {
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let first: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    let transition: TransitionResult = admit(&fixture, &state, first);

    let candidate: EntryDraft = create_test_draft(
        &fixture,
        fixture.lovelace,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );

    let first_verdict: Result<(), CoreError> =
        validate_entry(&fixture.catalog, &transition.new_state, &candidate);
    let second_verdict: Result<(), CoreError> =
        validate_entry(&fixture.catalog, &transition.new_state, &candidate);

    assert_eq!(first_verdict, second_verdict);
    assert!(first_verdict.is_err());
}

#[test]
fn test_capacity_check_rejects_overfull_room() {
    // LAB1 seats 25; Algoritmos enrolls 30.
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let draft: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.lab1,
        fixture.lunes,
        fixture.module_1,
    );

    let result: Result<(), CoreError> = validate_entry(&fixture.catalog, &state, &draft);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::RoomCapacityExceeded {
                room_capacity: 25,
                enrolled_students: 30,
            }
        ))
    );
}

#[test]
fn test_room_type_check_rejects_mismatched_room() {
    // Quimica requires a laboratory; R101 is a plain classroom.
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let mut draft: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    draft.subject = fixture.quimica;

    let result: Result<(), CoreError> = validate_entry(&fixture.catalog, &state, &draft);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::RoomTypeMismatch {
            room_type: String::from("Aula"),
            required_room_type: String::from("Laboratorio"),
        }))
    );
}

#[test]
fn test_room_type_check_accepts_matching_room() {
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let mut draft: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.lab1,
        fixture.lunes,
        fixture.module_1,
    );
    draft.subject = fixture.quimica;

    assert_eq!(validate_entry(&fixture.catalog, &state, &draft), Ok(()));
}

#[test]
fn test_teacher_without_declared_availability_is_unrestricted() {
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let draft: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.martes,
        fixture.module_2,
    );

    assert_eq!(validate_entry(&fixture.catalog, &state, &draft), Ok(()));
}

#[test]
fn test_declared_availability_restricts_to_declared_slots() {
    let mut fixture = create_test_catalog();
    let result: BootstrapResult = bootstrap(
        &fixture.catalog,
        Command::DeclareAvailability {
            teacher: fixture.turing,
            day: fixture.lunes,
            time_module: fixture.module_1,
        },
    );
    fixture.catalog = result.new_catalog;
    let state: ScheduleState = ScheduleState::new(create_test_term());

    let declared: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    assert_eq!(validate_entry(&fixture.catalog, &state, &declared), Ok(()));

    let undeclared: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.martes,
        fixture.module_1,
    );
    assert_eq!(
        validate_entry(&fixture.catalog, &state, &undeclared),
        Err(CoreError::DomainViolation(DomainError::TeacherUnavailable {
            teacher: fixture.turing,
            day: fixture.martes,
            time_module: fixture.module_1,
        }))
    );
}

#[test]
fn test_retract_entry_frees_the_slot() {
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let first: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    let transition: TransitionResult = admit(&fixture, &state, first);

    let retraction: TransitionResult = apply(
        &fixture.catalog,
        &transition.new_state,
        Command::RetractEntry {
            entry_id: EntryId::new(1),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("retraction should succeed");

    assert_eq!(retraction.new_state.entries.len(), 0);
    assert_eq!(retraction.audit_event.action.name, "RetractEntry");

    // The slot is reusable, and the retracted id is not.
    let again: EntryDraft = create_test_draft(
        &fixture,
        fixture.lovelace,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    let transition: TransitionResult = admit(&fixture, &retraction.new_state, again);
    assert_eq!(transition.admitted_entry, Some(EntryId::new(2)));
}

#[test]
fn test_retract_unknown_entry_is_rejected() {
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());

    let result: Result<TransitionResult, CoreError> = apply(
        &fixture.catalog,
        &state,
        Command::RetractEntry {
            entry_id: EntryId::new(7),
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::UnknownReference {
            kind: ReferenceKind::Entry,
            id: 7,
        }))
    );
}

#[test]
fn test_replace_entry_validates_without_the_prior_entry() {
    // Moving an entry within its own slot must not conflict with itself.
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let first: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    let transition: TransitionResult = admit(&fixture, &state, first);

    let mut replacement: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    replacement.section = String::from("002");
    let replaced: TransitionResult = apply(
        &fixture.catalog,
        &transition.new_state,
        Command::ReplaceEntry {
            entry_id: EntryId::new(1),
            draft: replacement,
        },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("replacement should succeed");

    assert_eq!(replaced.new_state.entries.len(), 1);
    assert_eq!(replaced.admitted_entry, Some(EntryId::new(2)));
    assert_eq!(replaced.new_state.entries[0].section, "002");
}

#[test]
fn test_rejected_replacement_leaves_prior_entry_in_place() {
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let first: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    let transition: TransitionResult = admit(&fixture, &state, first);
    let second: EntryDraft = create_test_draft(
        &fixture,
        fixture.lovelace,
        fixture.r202,
        fixture.lunes,
        fixture.module_1,
    );
    let transition: TransitionResult = admit(&fixture, &transition.new_state, second);

    // Move entry 1 onto R202 (Lunes, M1), which entry 2 occupies.
    let replacement: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r202,
        fixture.lunes,
        fixture.module_1,
    );
    let result: Result<TransitionResult, CoreError> = apply(
        &fixture.catalog,
        &transition.new_state,
        Command::ReplaceEntry {
            entry_id: EntryId::new(1),
            draft: replacement,
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::RoomConflict {
            conflicting_entry: EntryId::new(2),
        }))
    );
    // Caller keeps the prior state on rejection; both entries remain.
    assert_eq!(transition.new_state.entries.len(), 2);
    assert!(transition.new_state.entry(EntryId::new(1)).is_some());
}

#[test]
fn test_clear_term_drops_entries_and_keeps_id_counter() {
    let fixture = create_test_catalog();
    let state: ScheduleState = ScheduleState::new(create_test_term());
    let first: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    let transition: TransitionResult = admit(&fixture, &state, first);

    let cleared: TransitionResult = apply(
        &fixture.catalog,
        &transition.new_state,
        Command::ClearTerm,
        create_test_actor(),
        create_test_cause(),
    )
    .expect("clear should succeed");

    assert_eq!(cleared.new_state.entries.len(), 0);
    assert_eq!(cleared.audit_event.action.name, "ClearTerm");

    let after: EntryDraft = create_test_draft(
        &fixture,
        fixture.turing,
        fixture.r101,
        fixture.lunes,
        fixture.module_1,
    );
    let transition: TransitionResult = admit(&fixture, &cleared.new_state, after);
    assert_eq!(transition.admitted_entry, Some(EntryId::new(2)));
}

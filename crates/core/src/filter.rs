// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::state::{Catalog, ScheduleState};
use u_planner_domain::{DomainError, EntryId, Room, ScheduleEntry, Subject, Teacher};

/// A record the filter engine can evaluate predicates against.
///
/// Each implementor declares the fields callers may filter on; any other
/// field name is rejected with `InvalidFilter` rather than silently
/// matching nothing.
pub trait Filterable {
    /// The entity kind name used in filter error messages.
    fn entity_name() -> &'static str;

    /// The field names callers may filter on.
    fn filter_fields() -> &'static [&'static str];

    /// The string representation of a field, empty when the record has
    /// no value for it. Only called with names from [`filter_fields`].
    ///
    /// [`filter_fields`]: Filterable::filter_fields
    fn field_value(&self, field: &str) -> String;
}

/// Filters records by case-insensitive substring predicates.
///
/// A record passes when every non-empty needle is a case-insensitive
/// substring of the record's value for that field. Needles are matched
/// literally, whitespace included; only the empty needle is no
/// constraint, so an empty predicate map returns every record. Output
/// preserves input order.
///
/// # Errors
///
/// Returns `InvalidFilter` if a predicate names a field the entity does
/// not allow filtering on.
pub fn filter_records<'a, T: Filterable>(
    records: &'a [T],
    predicates: &BTreeMap<String, String>,
) -> Result<Vec<&'a T>, CoreError> {
    for field in predicates.keys() {
        if !T::filter_fields().contains(&field.as_str()) {
            return Err(CoreError::DomainViolation(DomainError::InvalidFilter {
                entity: T::entity_name(),
                field: field.clone(),
            }));
        }
    }

    let needles: Vec<(&String, String)> = predicates
        .iter()
        .filter(|(_, needle)| !needle.is_empty())
        .map(|(field, needle)| (field, needle.to_lowercase()))
        .collect();

    Ok(records
        .iter()
        .filter(|record| {
            needles.iter().all(|(field, needle)| {
                record.field_value(field).to_lowercase().contains(needle)
            })
        })
        .collect())
}

impl Filterable for Teacher {
    fn entity_name() -> &'static str {
        "teacher"
    }

    fn filter_fields() -> &'static [&'static str] {
        &["full_name", "rut"]
    }

    fn field_value(&self, field: &str) -> String {
        match field {
            "full_name" => self.full_name.clone(),
            "rut" => self.rut.clone(),
            _ => String::new(),
        }
    }
}

impl Filterable for Room {
    fn entity_name() -> &'static str {
        "room"
    }

    fn filter_fields() -> &'static [&'static str] {
        &["code", "name", "capacity"]
    }

    fn field_value(&self, field: &str) -> String {
        match field {
            "code" => self.code.clone(),
            "name" => self.name.clone(),
            "capacity" => self.capacity.to_string(),
            _ => String::new(),
        }
    }
}

impl Filterable for Subject {
    fn entity_name() -> &'static str {
        "subject"
    }

    fn filter_fields() -> &'static [&'static str] {
        &["code", "name", "career_code", "level", "section", "plan_year"]
    }

    fn field_value(&self, field: &str) -> String {
        match field {
            "code" => self.code.clone().unwrap_or_default(),
            "name" => self.name.clone(),
            "career_code" => self.career_code.clone().unwrap_or_default(),
            "level" => self.level.clone().unwrap_or_default(),
            "section" => self.section.clone().unwrap_or_default(),
            "plan_year" => self.plan_year.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }
}

/// A schedule entry with its references resolved to display strings, the
/// shape every entry list view filters and renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntryView {
    /// The underlying entry id.
    pub entry_id: EntryId,
    /// The subject display name.
    pub asignatura: String,
    /// The teacher display name.
    pub docente: String,
    /// The room code.
    pub sala: String,
    /// The day code.
    pub dia: String,
    /// The time module code.
    pub modulo: String,
    /// The entry's section, empty when unset.
    pub seccion: String,
    /// The entry's career code, empty when unset.
    pub carrera: String,
    /// The entry's level, empty when unset.
    pub nivel: String,
}

impl Filterable for ScheduleEntryView {
    fn entity_name() -> &'static str {
        "schedule_entry"
    }

    fn filter_fields() -> &'static [&'static str] {
        &[
            "asignatura",
            "docente",
            "sala",
            "dia",
            "modulo",
            "seccion",
            "carrera",
            "nivel",
        ]
    }

    fn field_value(&self, field: &str) -> String {
        match field {
            "asignatura" => self.asignatura.clone(),
            "docente" => self.docente.clone(),
            "sala" => self.sala.clone(),
            "dia" => self.dia.clone(),
            "modulo" => self.modulo.clone(),
            "seccion" => self.seccion.clone(),
            "carrera" => self.carrera.clone(),
            "nivel" => self.nivel.clone(),
            _ => String::new(),
        }
    }
}

/// Resolves the admitted entries to display views, in admission order.
///
/// References admitted through the validator always resolve, so a
/// missing catalog record renders as an empty string rather than
/// failing the whole listing.
#[must_use]
pub fn entry_views(catalog: &Catalog, state: &ScheduleState) -> Vec<ScheduleEntryView> {
    state
        .entries
        .iter()
        .map(|entry: &ScheduleEntry| ScheduleEntryView {
            entry_id: entry.id,
            asignatura: catalog
                .subject(entry.subject)
                .map_or_else(String::new, |subject| subject.name.clone()),
            docente: catalog
                .teacher(entry.teacher)
                .map_or_else(String::new, |teacher| teacher.full_name.clone()),
            sala: catalog
                .room(entry.room)
                .map_or_else(String::new, |room| room.code.clone()),
            dia: catalog
                .day(entry.day)
                .map_or_else(String::new, |day| day.code.clone()),
            modulo: catalog
                .time_module(entry.time_module)
                .map_or_else(String::new, |module| module.mod_hor.clone()),
            seccion: entry.section.clone(),
            carrera: entry.career.clone(),
            nivel: entry.level.clone(),
        })
        .collect()
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{DayId, EntryId, RoomId, Slot, SubjectId, TeacherId, TimeModuleId};
use serde::{Deserialize, Serialize};

/// A candidate schedule entry, before validation and id assignment.
///
/// The `section`, `career`, and `level` columns mirror the denormalized
/// academic sheet and are carried as text rather than re-derived from the
/// subject, so synced rows that disagree with the catalog stay
/// representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    /// The subject taught.
    pub subject: SubjectId,
    /// The assigned teacher.
    pub teacher: TeacherId,
    /// The assigned room.
    pub room: RoomId,
    /// The day of the week.
    pub day: DayId,
    /// The time module within the day.
    pub time_module: TimeModuleId,
    /// Section label.
    pub section: String,
    /// Career label.
    pub career: String,
    /// Level label.
    pub level: String,
}

impl EntryDraft {
    /// Returns the slot this draft claims.
    #[must_use]
    pub const fn slot(&self) -> Slot {
        Slot::new(self.day, self.time_module)
    }
}

/// An admitted schedule entry.
///
/// Entries are immutable once admitted; an edit is modeled as
/// retract-then-admit so the non-overlap invariants are re-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Canonical identifier assigned on admission.
    pub id: EntryId,
    /// The subject taught.
    pub subject: SubjectId,
    /// The assigned teacher.
    pub teacher: TeacherId,
    /// The assigned room.
    pub room: RoomId,
    /// The day of the week.
    pub day: DayId,
    /// The time module within the day.
    pub time_module: TimeModuleId,
    /// Section label.
    pub section: String,
    /// Career label.
    pub career: String,
    /// Level label.
    pub level: String,
}

impl ScheduleEntry {
    /// Creates an entry from an admitted draft.
    #[must_use]
    pub fn from_draft(id: EntryId, draft: EntryDraft) -> Self {
        Self {
            id,
            subject: draft.subject,
            teacher: draft.teacher,
            room: draft.room,
            day: draft.day,
            time_module: draft.time_module,
            section: draft.section,
            career: draft.career,
            level: draft.level,
        }
    }

    /// Returns the slot this entry occupies.
    #[must_use]
    pub const fn slot(&self) -> Slot {
        Slot::new(self.day, self.time_module)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier for a day of the week.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct DayId(i64);

impl DayId {
    /// Creates a new `DayId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Identifier for a time module.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TimeModuleId(i64);

impl TimeModuleId {
    /// Creates a new `TimeModuleId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Identifier for a room type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoomTypeId(i64);

impl RoomTypeId {
    /// Creates a new `RoomTypeId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Identifier for a room.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoomId(i64);

impl RoomId {
    /// Creates a new `RoomId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Identifier for a named room group.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoomGroupId(i64);

impl RoomGroupId {
    /// Creates a new `RoomGroupId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Identifier for a teacher.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TeacherId(i64);

impl TeacherId {
    /// Creates a new `TeacherId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Identifier for a faculty.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct FacultyId(i64);

impl FacultyId {
    /// Creates a new `FacultyId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Identifier for a subject.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SubjectId(i64);

impl SubjectId {
    /// Creates a new `SubjectId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Identifier for a schedule entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntryId(i64);

impl EntryId {
    /// Creates a new `EntryId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// The half of the academic year a term covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Semester {
    /// First semester (March through July).
    First,
    /// Second semester (August–December).
    Second,
}

impl Semester {
    /// Parses a semester from its numeric string form ("1" or "2").
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not "1" or "2".
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "1" => Ok(Self::First),
            "2" => Ok(Self::Second),
            _ => Err(DomainError::InvalidSemester(s.to_string())),
        }
    }

    /// Returns the semester number (1 or 2).
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

impl FromStr for Semester {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A planning period: one semester of one academic year.
///
/// The assignment store is scoped to a single term. Clearing a term drops
/// every entry scheduled within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    /// The academic year (e.g., 2026).
    year: u16,
    /// The semester within the year.
    semester: Semester,
}

impl Term {
    /// Creates a new `Term`.
    #[must_use]
    pub const fn new(year: u16, semester: Semester) -> Self {
        Self { year, semester }
    }

    /// Returns the academic year.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the semester.
    #[must_use]
    pub const fn semester(&self) -> Semester {
        self.semester
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.year, self.semester)
    }
}

/// A `(day, time module)` pair — the atomic unit of scheduling.
///
/// Two entries conflict when they claim the same slot through the same
/// room or the same teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// The day of the week.
    pub day: DayId,
    /// The time module within the day.
    pub time_module: TimeModuleId,
}

impl Slot {
    /// Creates a new `Slot`.
    #[must_use]
    pub const fn new(day: DayId, time_module: TimeModuleId) -> Self {
        Self { day, time_module }
    }
}

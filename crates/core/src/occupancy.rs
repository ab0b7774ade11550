// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::CoreError;
use crate::state::{Catalog, ScheduleState};
use u_planner_domain::{DayId, ReferenceKind, RoomGroup, RoomId, ScheduleEntry, TimeModuleId};

/// Restricts an occupancy aggregation to a subset of the catalog.
///
/// `None` on any axis means "all records of that kind". Every id named in
/// a filter must resolve in the catalog; an empty set is legal and simply
/// yields zero available slots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OccupancyFilter {
    /// The rooms to aggregate over, or all rooms.
    pub rooms: Option<BTreeSet<RoomId>>,
    /// The days to count, or all days.
    pub days: Option<BTreeSet<DayId>>,
    /// The time modules to count, or all modules.
    pub modules: Option<BTreeSet<TimeModuleId>>,
}

/// Per-room utilization under a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyStat {
    /// Entries occupying the room within the filtered slots.
    pub slots_used: u32,
    /// Filtered days times filtered modules.
    pub slots_available: u32,
    /// `round(100 * slots_used / slots_available)`, or 0 when no slots
    /// are available.
    pub percentage: u32,
}

/// Per-group utilization under a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupOccupancy {
    /// Member rooms with at least one entry within the filtered slots.
    pub occupied_room_count: u32,
    /// Total member rooms.
    pub total_room_count: u32,
    /// `round(100 * occupied_room_count / total_room_count)`, or 0 for
    /// an empty group.
    pub percentage: u32,
}

/// Rounds `100 * used / available` to the nearest integer, halves up.
/// Defined as 0 when nothing is available.
const fn ratio_percentage(used: u32, available: u32) -> u32 {
    if available == 0 {
        0
    } else {
        (200 * used + available) / (2 * available)
    }
}

fn validate_filter(catalog: &Catalog, filter: &OccupancyFilter) -> Result<(), CoreError> {
    if let Some(rooms) = &filter.rooms {
        for room in rooms {
            if catalog.room(*room).is_none() {
                return Err(CoreError::unknown_reference(ReferenceKind::Room, room.value()));
            }
        }
    }
    if let Some(days) = &filter.days {
        for day in days {
            if catalog.day(*day).is_none() {
                return Err(CoreError::unknown_reference(ReferenceKind::Day, day.value()));
            }
        }
    }
    if let Some(modules) = &filter.modules {
        for module in modules {
            if catalog.time_module(*module).is_none() {
                return Err(CoreError::unknown_reference(ReferenceKind::TimeModule, module.value()));
            }
        }
    }
    Ok(())
}

/// Counts the available slots under a filter: filtered day count times
/// filtered module count, falling back to the catalog totals when an
/// axis is unconstrained.
#[allow(clippy::cast_possible_truncation)]
fn available_slots(catalog: &Catalog, filter: &OccupancyFilter) -> u32 {
    let day_count: usize = filter
        .days
        .as_ref()
        .map_or_else(|| catalog.days.len(), BTreeSet::len);
    let module_count: usize = filter
        .modules
        .as_ref()
        .map_or_else(|| catalog.time_modules.len(), BTreeSet::len);
    (day_count * module_count) as u32
}

fn entry_matches_slot_filter(entry: &ScheduleEntry, filter: &OccupancyFilter) -> bool {
    let day_ok: bool = filter
        .days
        .as_ref()
        .is_none_or(|days| days.contains(&entry.day));
    let module_ok: bool = filter
        .modules
        .as_ref()
        .is_none_or(|modules| modules.contains(&entry.time_module));
    day_ok && module_ok
}

/// Computes per-room utilization under a filter.
///
/// Every room in scope appears in the result, including rooms with zero
/// matching entries. An entry counts toward a room only through its room
/// reference; display names play no part.
///
/// # Arguments
///
/// * `catalog` - The catalog providing the room, day, and module universe
/// * `state` - The admitted entries to aggregate
/// * `filter` - The rooms, days, and modules in scope
///
/// # Returns
///
/// A map from each room in scope to its [`OccupancyStat`], ordered by
/// room id.
///
/// # Errors
///
/// Returns an error if the filter names an id the catalog does not hold.
pub fn room_occupancy(
    catalog: &Catalog,
    state: &ScheduleState,
    filter: &OccupancyFilter,
) -> Result<BTreeMap<RoomId, OccupancyStat>, CoreError> {
    validate_filter(catalog, filter)?;

    let slots_available: u32 = available_slots(catalog, filter);
    let mut stats: BTreeMap<RoomId, OccupancyStat> = BTreeMap::new();
    match &filter.rooms {
        Some(rooms) => {
            for room in rooms {
                stats.insert(
                    *room,
                    OccupancyStat {
                        slots_used: 0,
                        slots_available,
                        percentage: 0,
                    },
                );
            }
        }
        None => {
            for room in &catalog.rooms {
                stats.insert(
                    room.id,
                    OccupancyStat {
                        slots_used: 0,
                        slots_available,
                        percentage: 0,
                    },
                );
            }
        }
    }

    for entry in &state.entries {
        if !entry_matches_slot_filter(entry, filter) {
            continue;
        }
        if let Some(stat) = stats.get_mut(&entry.room) {
            stat.slots_used += 1;
        }
    }

    for stat in stats.values_mut() {
        stat.percentage = ratio_percentage(stat.slots_used, stat.slots_available);
    }

    Ok(stats)
}

/// Computes utilization for a room group under a filter.
///
/// A member room counts as occupied when it has at least one entry within
/// the filtered slots. The filter's own room subset is ignored here; the
/// group defines the rooms in scope.
///
/// # Errors
///
/// Returns an error if the filter names a day or module the catalog does
/// not hold.
pub fn group_occupancy(
    catalog: &Catalog,
    state: &ScheduleState,
    group: &RoomGroup,
    filter: &OccupancyFilter,
) -> Result<GroupOccupancy, CoreError> {
    let member_filter: OccupancyFilter = OccupancyFilter {
        rooms: Some(group.members.iter().copied().collect()),
        days: filter.days.clone(),
        modules: filter.modules.clone(),
    };
    let stats: BTreeMap<RoomId, OccupancyStat> = room_occupancy(catalog, state, &member_filter)?;

    #[allow(clippy::cast_possible_truncation)]
    let total_room_count: u32 = group.members.len() as u32;
    #[allow(clippy::cast_possible_truncation)]
    let occupied_room_count: u32 =
        stats.values().filter(|stat| stat.slots_used > 0).count() as u32;

    Ok(GroupOccupancy {
        occupied_room_count,
        total_room_count,
        percentage: ratio_percentage(occupied_room_count, total_room_count),
    })
}

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

mod apply;
mod command;
mod error;
mod filter;
mod occupancy;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types
pub use apply::{BulkAdmitResult, BulkMode, apply, apply_bootstrap, apply_bulk, validate_entry};
pub use command::Command;
pub use error::CoreError;
pub use filter::{Filterable, ScheduleEntryView, entry_views, filter_records};
pub use occupancy::{
    GroupOccupancy, OccupancyFilter, OccupancyStat, group_occupancy, room_occupancy,
};
pub use state::{
    BootstrapResult, Catalog, CatalogRecordId, ScheduleState, TransitionResult,
};

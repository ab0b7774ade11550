// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit trail types for the scheduling engine.
//!
//! Every successful catalog write or schedule transition produces exactly
//! one [`AuditEvent`] answering who changed the state, why, what the
//! change was, and what the state looked like on either side of it.
//! Events are plain immutable data; storage and exposure belong to the
//! caller.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use u_planner_domain::Term;

/// Who initiated a state change: a planner, a system process, or an
/// external collaborator such as the sheet-sync feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// Stable identifier of the initiator.
    pub id: String,
    /// Kind of initiator, e.g. "user" or "system".
    pub actor_type: String,
}

impl Actor {
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Why a state change happened, typically tied to an inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// Correlation identifier, e.g. a request id.
    pub id: String,
    /// Free-text explanation.
    pub description: String,
}

impl Cause {
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// What happened, named after the command that was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Command name, e.g. "`AdmitEntry`".
    pub name: String,
    /// Human-readable detail line, when the command has one.
    pub details: Option<String>,
}

impl Action {
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact textual summary of engine state at one point in time.
///
/// Snapshots summarize counts rather than embedding the record lists, so
/// an event shows what a transition changed without duplicating the
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// The summary text.
    pub data: String,
}

impl StateSnapshot {
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// One immutable record of a completed state transition.
///
/// Schedule transitions carry the [`Term`] they are scoped to; catalog
/// writes are term-independent and carry `None`. Rejected commands never
/// produce an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Who initiated the change.
    pub actor: Actor,
    /// Why the change happened.
    pub cause: Cause,
    /// What the change was.
    pub action: Action,
    /// State summary before the transition.
    pub before: StateSnapshot,
    /// State summary after the transition.
    pub after: StateSnapshot,
    /// Planning period scope, for schedule transitions.
    pub term: Option<Term>,
}

impl AuditEvent {
    /// Assembles an event; all provenance fields are required up front
    /// so no half-attributed event can exist.
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        term: Option<Term>,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
            term,
        }
    }
}

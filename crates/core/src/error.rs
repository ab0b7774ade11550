// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use u_planner_domain::{DomainError, ReferenceKind};

/// Error produced by a rejected command or query.
///
/// Today every rejection is a domain rule violation; the wrapper is the
/// core crate's error seam so callers translate one type regardless of
/// which rule fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl CoreError {
    /// A violation for a reference that does not resolve in the catalog
    /// or the store.
    #[must_use]
    pub(crate) const fn unknown_reference(kind: ReferenceKind, id: i64) -> Self {
        Self::DomainViolation(DomainError::UnknownReference { kind, id })
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) => Some(err),
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

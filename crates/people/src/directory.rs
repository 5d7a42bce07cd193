//! Known person identifiers.
//!
//! There is no person store; existence is a membership check against a fixed
//! set of identifiers.

use core::fmt;

use serde::{Deserialize, Serialize};

use roster_core::{DomainError, DomainResult, Report, Validate};

pub const UNKNOWN_PERSON_MESSAGE: &str = "!This person doesn't exist!";

/// Person identifier as it appears in request paths. Must be positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub i64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Validate for PersonId {
    fn validate_into(&self, report: &mut Report) {
        report.greater_than("person_id", self.0, 0);
    }
}

/// Read-only set of identifiers that are considered to exist.
#[derive(Debug, Clone, Copy)]
pub struct PersonDirectory {
    known: &'static [i64],
}

impl Default for PersonDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonDirectory {
    pub const KNOWN_IDS: [i64; 5] = [1, 2, 3, 4, 5];

    pub const fn new() -> Self {
        Self {
            known: &Self::KNOWN_IDS,
        }
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.known.contains(&id.0)
    }

    pub fn ensure_exists(&self, id: PersonId) -> DomainResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(DomainError::not_found(UNKNOWN_PERSON_MESSAGE))
        }
    }
}

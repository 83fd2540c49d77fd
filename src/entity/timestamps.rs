//! Audit timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation and modification instants for a persisted record.
///
/// `created_at` is set once at construction and never changes; `updated_at`
/// starts equal to it and advances on every `touch`. Both are UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    /// UTC instant of record creation (immutable)
    pub created_at: DateTime<Utc>,

    /// UTC instant of last modification
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    /// Timestamps for a record created right now.
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a modification: advances `updated_at`, leaves `created_at`
    /// untouched.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Timestamps {
    fn default() -> Self {
        Self::now()
    }
}

//! Soft-delete tombstone state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tombstone state for a record that is hidden instead of destroyed.
///
/// Instead of permanently removing records, they are marked deleted and
/// keep their data, which enables recovery and preserves references. The
/// flag and instant always move together: deleted records carry the
/// deletion time, restored records carry neither.
///
/// Neither `delete` nor `restore` persists anything; the owning store
/// decides when to write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftDelete {
    /// True if the record is deleted
    pub is_deleted: bool,

    /// UTC instant of deletion, present exactly while deleted
    pub deleted_at: Option<DateTime<Utc>>,
}

impl SoftDelete {
    /// State for a freshly created, active record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the record deleted at the current instant.
    ///
    /// Deleting an already-deleted record refreshes the instant.
    pub fn delete(&mut self) {
        self.is_deleted = true;
        self.deleted_at = Some(Utc::now());
    }

    /// Bring a deleted record back: clears the flag and the instant.
    pub fn restore(&mut self) {
        self.is_deleted = false;
        self.deleted_at = None;
    }

    /// Whether the record is visible (not deleted).
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_active() {
        let state = SoftDelete::new();

        assert!(!state.is_deleted);
        assert!(state.deleted_at.is_none());
        assert!(state.is_active());
    }

    #[test]
    fn test_delete_sets_flag_and_instant() {
        let mut state = SoftDelete::new();

        state.delete();

        assert!(state.is_deleted);
        assert!(state.deleted_at.is_some());
        assert!(!state.is_active());
    }

    #[test]
    fn test_restore_clears_flag_and_instant() {
        let mut state = SoftDelete::new();
        state.delete();

        state.restore();

        assert!(!state.is_deleted);
        assert!(state.deleted_at.is_none());
        assert!(state.is_active());
    }

    #[test]
    fn test_delete_restore_cycles_repeat() {
        let mut state = SoftDelete::new();

        state.delete();
        assert!(state.is_deleted);

        state.restore();
        assert!(state.is_active());

        state.delete();
        assert!(state.is_deleted);
        assert!(state.deleted_at.is_some());
    }

    #[test]
    fn test_redelete_refreshes_instant() {
        let mut state = SoftDelete::new();

        state.delete();
        let first = state.deleted_at.expect("set by delete");
        state.delete();
        let second = state.deleted_at.expect("still set");

        assert!(second >= first);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut state = SoftDelete::new();
        state.delete();

        let json = serde_json::to_string(&state).expect("serialize");
        let restored: SoftDelete = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(restored, state);
    }
}

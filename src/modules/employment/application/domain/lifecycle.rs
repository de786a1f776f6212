//! Lifecycle rules for employment records.
//!
//! A record is active iff its deletion marker is absent. The marker is a
//! timestamp; its *presence* is the only signal, never its value. Transitions:
//! Active --soft-delete--> Trashed --restore--> Active, and
//! Trashed --hard-delete--> gone. Hard-deleting an active record is rejected.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::CallerIdentity;

/// Presence of the marker decides, not its value.
pub fn is_trashed(deleted_at: Option<&DateTime<Utc>>) -> bool {
    deleted_at.is_some()
}

/// Soft delete and purge share one authorization rule: admins may act on any
/// record, everyone else only on records they own.
pub fn may_discard(caller: &CallerIdentity, owner: Uuid) -> bool {
    caller.is_admin() || caller.user_id == owner
}

/// Visibility of the trash listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrashScope {
    /// Admins see every trashed record.
    All,
    /// Everyone else sees only records whose owning alumni equals their id.
    OwnedBy(Uuid),
}

impl TrashScope {
    pub fn for_caller(caller: &CallerIdentity) -> Self {
        if caller.is_admin() {
            TrashScope::All
        } else {
            TrashScope::OwnedBy(caller.user_id)
        }
    }
}

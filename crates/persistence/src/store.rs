// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::slot::DraftSlot;
use crate::snapshot::{DraftSnapshot, SnapshotHeader};
use ssok_survey::WizardState;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

/// The draft store: saves and restores in-progress wizard snapshots over a
/// single storage slot.
///
/// Saves overwrite unconditionally (last-write-wins, no merge). Loads honor
/// a draft only when its format version matches and it is younger than the
/// validity window; stale or unreadable drafts are eagerly deleted.
#[derive(Debug)]
pub struct DraftStore<S: DraftSlot> {
    slot: S,
}

impl<S: DraftSlot> DraftStore<S> {
    /// Creates a draft store over the given slot.
    #[must_use]
    pub const fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Serializes and saves the durable projection of a wizard state.
    ///
    /// # Arguments
    ///
    /// * `state` - The wizard state to persist
    /// * `now` - The save timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the slot write fails.
    pub fn save(&self, state: &WizardState, now: OffsetDateTime) -> Result<(), PersistenceError> {
        let snapshot: DraftSnapshot = DraftSnapshot::capture(state, now);
        let encoded: String = serde_json::to_string(&snapshot)?;
        self.slot.write(&encoded)?;
        debug!(screen = %snapshot.state.screen, "Draft saved");
        Ok(())
    }

    /// Loads the saved draft, if one is present and still honorable.
    ///
    /// Version-mismatched, expired, and unreadable drafts are deleted as a
    /// side effect and reported as absent.
    ///
    /// # Arguments
    ///
    /// * `now` - The current time
    ///
    /// # Errors
    ///
    /// Returns an error if the slot itself cannot be read or cleared.
    pub fn load(&self, now: OffsetDateTime) -> Result<Option<DraftSnapshot>, PersistenceError> {
        let Some(raw) = self.slot.read()? else {
            return Ok(None);
        };

        let snapshot: DraftSnapshot = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "Unreadable draft discarded");
                self.slot.clear()?;
                return Ok(None);
            }
        };

        if !snapshot.is_fresh(now) {
            info!(
                format_version = %snapshot.format_version,
                saved_at = %snapshot.saved_at,
                "Stale draft discarded"
            );
            self.slot.clear()?;
            return Ok(None);
        }

        Ok(Some(snapshot))
    }

    /// Cheap existence-and-freshness check.
    ///
    /// Only the snapshot header is deserialized; the saved state is never
    /// materialized. Any error reads as "no draft".
    ///
    /// # Arguments
    ///
    /// * `now` - The current time
    #[must_use]
    pub fn has_valid_draft(&self, now: OffsetDateTime) -> bool {
        match self.slot.read() {
            Ok(Some(raw)) => serde_json::from_str::<SnapshotHeader>(&raw)
                .is_ok_and(|header| header.is_fresh(now)),
            Ok(None) | Err(_) => false,
        }
    }

    /// Deletes any saved draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be cleared.
    pub fn discard(&self) -> Result<(), PersistenceError> {
        self.slot.clear()
    }

    /// Decomposes the store back into its slot.
    #[must_use]
    pub fn into_slot(self) -> S {
        self.slot
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use ssok_survey::{StateSnapshot, WizardState, total_steps_for};
use ssok_survey_catalog as catalog;
use ssok_survey_domain::Screen;
use time::{Duration, OffsetDateTime};

/// The current draft serialization format.
///
/// Bumped whenever the durable projection changes shape; drafts carrying any
/// other version are discarded on load.
pub const DRAFT_FORMAT_VERSION: &str = "1";

/// How long a saved draft remains honorable.
pub const DRAFT_VALIDITY_WINDOW: Duration = Duration::hours(24);

/// A persisted, versioned, time-bounded projection of wizard state.
///
/// Question catalogs are never persisted; the restore path recomputes the
/// active questions from the saved service and track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    /// The serialization format this draft was written with.
    pub format_version: String,
    /// When the draft was saved.
    #[serde(with = "time::serde::rfc3339")]
    pub saved_at: OffsetDateTime,
    /// The durable wizard fields.
    pub state: StateSnapshot,
}

impl DraftSnapshot {
    /// Captures the durable projection of a wizard state.
    ///
    /// # Arguments
    ///
    /// * `state` - The wizard state to project
    /// * `now` - The save timestamp
    #[must_use]
    pub fn capture(state: &WizardState, now: OffsetDateTime) -> Self {
        Self {
            format_version: String::from(DRAFT_FORMAT_VERSION),
            saved_at: now,
            state: state.snapshot(),
        }
    }

    /// Returns whether this draft is still honorable: matching format
    /// version and saved within the validity window.
    ///
    /// # Arguments
    ///
    /// * `now` - The current time
    #[must_use]
    pub fn is_fresh(&self, now: OffsetDateTime) -> bool {
        self.format_version == DRAFT_FORMAT_VERSION && now - self.saved_at <= DRAFT_VALIDITY_WINDOW
    }

    /// Rebuilds a live wizard state from this draft.
    ///
    /// The active questions are recomputed from the saved service and
    /// track, the cursor is clamped to the track bounds, and the totals are
    /// recomputed so a catalog revision between save and load cannot leave
    /// the progress indicator inconsistent. A draft claiming to be on the
    /// survey screen without a saved service falls back to the
    /// service-selection screen.
    #[must_use]
    pub fn restore(&self) -> WizardState {
        let mut state: WizardState = WizardState::from_snapshot(self.state.clone());

        match state.service {
            None => {
                if state.screen == Screen::Survey {
                    state.screen = Screen::ServiceSelection;
                }
                state.total_steps = 0;
                state.current_step = 0;
            }
            Some(service) => {
                let track_len: usize = catalog::question_count(state.survey.track);
                state.survey.position = state.survey.position.min(track_len);
                state.total_steps = total_steps_for(service);
                state.current_step = state.current_step.min(state.total_steps);
            }
        }

        state
    }
}

/// The slim header used for freshness checks without materializing the
/// full state. Unknown fields are ignored during deserialization.
#[derive(Debug, Deserialize)]
pub(crate) struct SnapshotHeader {
    pub format_version: String,
    #[serde(with = "time::serde::rfc3339")]
    pub saved_at: OffsetDateTime,
}

impl SnapshotHeader {
    pub(crate) fn is_fresh(&self, now: OffsetDateTime) -> bool {
        self.format_version == DRAFT_FORMAT_VERSION && now - self.saved_at <= DRAFT_VALIDITY_WINDOW
    }
}

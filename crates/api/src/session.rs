// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{ApiError, SubmissionError};
use crate::payload::SubmissionPayload;
use crate::submit::{SubmissionTransport, submit};
use ssok_survey::{Command, CoreError, TransitionResult, WizardState, apply};
use ssok_survey_domain::Screen;
use ssok_survey_events::WizardEvent;
use ssok_survey_persistence::{DraftSlot, DraftSnapshot, DraftStore, PersistenceError};
use time::OffsetDateTime;
use tracing::warn;

/// Owns one wizard's state and its draft store.
///
/// The session is the single entry point the presentation layer talks to:
/// it applies commands, persists a draft after every committed transition,
/// and handles startup draft recovery. Draft persistence is best-effort: a
/// failing slot is logged and the wizard continues without reload recovery
/// for the session.
#[derive(Debug)]
pub struct WizardSession<S: DraftSlot> {
    state: WizardState,
    store: DraftStore<S>,
}

impl<S: DraftSlot> WizardSession<S> {
    /// Creates a fresh session over the given draft slot.
    #[must_use]
    pub fn new(slot: S) -> Self {
        Self {
            state: WizardState::new(),
            store: DraftStore::new(slot),
        }
    }

    /// Returns the current wizard state.
    #[must_use]
    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    /// Decomposes the session into its state and draft slot.
    #[must_use]
    pub fn into_parts(self) -> (WizardState, S) {
        (self.state, self.store.into_slot())
    }

    /// Applies a command and persists the outcome.
    ///
    /// On success the new state is saved as a draft. When the flow completed
    /// or was reset, any saved draft is deleted instead, since there is
    /// nothing left to recover. On failure the state and the saved draft are
    /// both untouched.
    ///
    /// # Arguments
    ///
    /// * `command` - The command to apply
    /// * `now` - The current time, used to stamp the draft
    ///
    /// # Errors
    ///
    /// Returns the untouched transition error for display.
    pub fn dispatch(
        &mut self,
        command: Command,
        now: OffsetDateTime,
    ) -> Result<Vec<WizardEvent>, CoreError> {
        let result: TransitionResult = apply(&self.state, command)?;
        self.state = result.new_state;

        let flow_over: bool = result
            .events
            .iter()
            .any(|e| matches!(e, WizardEvent::SurveyCompleted | WizardEvent::WizardReset));
        let persisted: Result<(), PersistenceError> = if flow_over {
            self.store.discard()
        } else {
            self.store.save(&self.state, now)
        };
        if let Err(err) = persisted {
            // Degrade silently to "no reload recovery" for this session.
            warn!(error = %err, "Draft persistence failed");
        }

        Ok(result.events)
    }

    /// Returns whether an honorable draft exists to offer resuming.
    #[must_use]
    pub fn has_resumable_draft(&self, now: OffsetDateTime) -> bool {
        self.store.has_valid_draft(now)
    }

    /// Restores the saved draft into the live wizard.
    ///
    /// # Arguments
    ///
    /// * `now` - The current time, used for the freshness check
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoDraft` if no honorable draft exists, or a
    /// persistence error if the slot itself fails.
    pub fn restore_draft(&mut self, now: OffsetDateTime) -> Result<Vec<WizardEvent>, ApiError> {
        let snapshot: DraftSnapshot = self.store.load(now)?.ok_or(ApiError::NoDraft)?;
        self.state = snapshot.restore();

        Ok(vec![
            WizardEvent::DraftRestored {
                screen: self.state.screen,
            },
            WizardEvent::ScreenChanged {
                screen: self.state.screen,
            },
            WizardEvent::ProgressChanged {
                current_step: self.state.current_step,
                total_steps: self.state.total_steps,
            },
        ])
    }

    /// Discards any saved draft and starts the wizard fresh.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the slot cannot be cleared.
    pub fn discard_draft(&mut self) -> Result<Vec<WizardEvent>, ApiError> {
        self.store.discard()?;
        self.state = WizardState::new();
        Ok(vec![
            WizardEvent::WizardReset,
            WizardEvent::ScreenChanged {
                screen: Screen::Intro,
            },
        ])
    }

    /// Builds the submission payload for the completed survey.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::SurveyIncomplete` unless the wizard is on
    /// the completion screen.
    pub fn submission_payload(&self) -> Result<SubmissionPayload, SubmissionError> {
        if self.state.screen != Screen::Completion {
            return Err(SubmissionError::SurveyIncomplete);
        }
        SubmissionPayload::from_state(&self.state)
    }

    /// Builds and posts the submission.
    ///
    /// Failure is retryable: nothing local is rolled back, and calling this
    /// again re-sends an identical payload.
    ///
    /// # Arguments
    ///
    /// * `transport` - The transport to post through
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be built or the post fails.
    pub fn submit<T: SubmissionTransport>(&self, transport: &T) -> Result<(), SubmissionError> {
        let payload: SubmissionPayload = self.submission_payload()?;
        submit(transport, &payload)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use ssok_survey_catalog as catalog;
use ssok_survey_domain::{Answer, Profile, Question, QuestionId, Screen, Service, Track};
use ssok_survey_events::WizardEvent;
use std::collections::BTreeMap;

/// The fixed number of profile/navigation steps before the survey proper:
/// intro, brand intro, profile, service selection.
pub const FIXED_PROFILE_STEPS: usize = 4;

/// Maximum number of history snapshots kept for back navigation.
/// Pushing past the bound drops the oldest entry.
pub const HISTORY_CAPACITY: usize = 32;

/// Cursor and committed answers for the survey proper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyState {
    /// The track currently being asked.
    pub track: Track,
    /// Index into the active track's questions; equal to the track length
    /// when the track is finished.
    pub position: usize,
    /// Committed answers, keyed by question id. Only validated answers are
    /// ever stored here.
    pub answers: BTreeMap<QuestionId, Answer>,
}

impl SurveyState {
    /// Creates an empty survey cursor on the primary track.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            track: Track::Primary,
            position: 0,
            answers: BTreeMap::new(),
        }
    }
}

/// The durable projection of the wizard: everything except the history
/// stack. Snapshots are what back navigation restores and what the draft
/// store persists; question catalogs are never part of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// The active screen.
    pub screen: Screen,
    /// The chosen service, once one is selected.
    pub service: Option<Service>,
    /// The customer profile.
    pub profile: Profile,
    /// The survey cursor and answers.
    pub survey: SurveyState,
    /// Total step count for the progress indicator; zero until a service
    /// is chosen.
    pub total_steps: usize,
    /// Current global step index.
    pub current_step: usize,
}

/// The complete wizard state.
///
/// Mutation happens exclusively through [`crate::apply`]; the state itself
/// only offers read accessors and snapshot conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    /// The active screen.
    pub screen: Screen,
    /// Prior snapshots for cross-screen back navigation, oldest first.
    pub history: Vec<StateSnapshot>,
    /// The chosen service, once one is selected.
    pub service: Option<Service>,
    /// The customer profile.
    pub profile: Profile,
    /// The survey cursor and answers.
    pub survey: SurveyState,
    /// Total step count for the progress indicator.
    pub total_steps: usize,
    /// Current global step index.
    pub current_step: usize,
}

impl WizardState {
    /// Creates a fresh wizard at the intro screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects the durable fields into a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            screen: self.screen,
            service: self.service,
            profile: self.profile.clone(),
            survey: self.survey.clone(),
            total_steps: self.total_steps,
            current_step: self.current_step,
        }
    }

    /// Rebuilds a wizard from a snapshot, with an empty history stack.
    #[must_use]
    pub fn from_snapshot(snapshot: StateSnapshot) -> Self {
        Self {
            screen: snapshot.screen,
            history: Vec::new(),
            service: snapshot.service,
            profile: snapshot.profile,
            survey: snapshot.survey,
            total_steps: snapshot.total_steps,
            current_step: snapshot.current_step,
        }
    }

    /// Pushes the current durable state onto the history stack, dropping
    /// the oldest entry once the bound is reached.
    pub(crate) fn push_history(&mut self) {
        if self.history.len() >= HISTORY_CAPACITY {
            self.history.remove(0);
        }
        let snapshot: StateSnapshot = self.snapshot();
        self.history.push(snapshot);
    }

    /// Returns the question currently on screen, or `None` when the flow
    /// is complete or the wizard is not on the survey screen.
    #[must_use]
    pub fn current_question(&self) -> Option<Question> {
        if self.screen != Screen::Survey {
            return None;
        }
        catalog::questions_for(self.survey.track)
            .into_iter()
            .nth(self.survey.position)
    }

    /// Returns the committed answer for a question, if any.
    ///
    /// Used to pre-fill the widget when the user navigates back over an
    /// already-answered question.
    #[must_use]
    pub fn saved_answer(&self, id: &QuestionId) -> Option<&Answer> {
        self.survey.answers.get(id)
    }

    /// Returns the number of answers committed so far.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.survey.answers.len()
    }

    /// Returns progress as a fraction in `[0, 1]`.
    ///
    /// A total of zero means there is no progress to show and yields `0.0`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        if self.total_steps == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction: f64 = self.current_step as f64 / self.total_steps as f64;
        fraction.clamp(0.0, 1.0)
    }
}

/// Returns the total step count for a chosen service: the fixed
/// profile/navigation steps plus every question the service asks.
#[must_use]
pub fn total_steps_for(service: Service) -> usize {
    FIXED_PROFILE_STEPS + catalog::question_total(service)
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects, returning the events the presentation layer should react
/// to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: WizardState,
    /// The lifecycle events describing what changed.
    pub events: Vec<WizardEvent>,
}

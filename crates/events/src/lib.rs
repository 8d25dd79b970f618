// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use ssok_survey_domain::{QuestionId, Screen, Service, Track};

/// A lifecycle event emitted by a wizard state transition.
///
/// Every successful transition produces one or more events describing what
/// changed. The presentation layer consumes them to re-render, update the
/// progress indicator, prompt the user, and relay high-level lifecycle
/// signals to a host-embedding channel. Events are immutable once created
/// and carry no behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// The active screen changed.
    ScreenChanged {
        /// The screen now active.
        screen: Screen,
    },
    /// The progress counters changed.
    ProgressChanged {
        /// The current global step index.
        current_step: usize,
        /// The total step count; zero means "no progress to show".
        total_steps: usize,
    },
    /// A validated answer was committed to the answer map.
    AnswerCommitted {
        /// The answered question's id.
        question: QuestionId,
    },
    /// The survey silently switched tracks mid-flow (combo service).
    TrackSwitched {
        /// The track now active.
        track: Track,
    },
    /// The whole flow completed; the summary screen should be shown.
    SurveyCompleted,
    /// The user picked a different service card while progress exists.
    ///
    /// Nothing was switched; the presentation should prompt the user to
    /// either keep the current service or confirm the change.
    ServiceChangeRequested {
        /// The service currently in effect.
        current: Service,
        /// The service the user clicked.
        requested: Service,
        /// Questions answered so far under the current service.
        answered: usize,
        /// Total questions the current service asks.
        total: usize,
    },
    /// A saved draft was restored into the wizard.
    DraftRestored {
        /// The screen the draft resumes at.
        screen: Screen,
    },
    /// The wizard was reset to its initial state.
    WizardReset,
}

impl WizardEvent {
    /// Returns a short, stable name for this event.
    ///
    /// Host channels use the name as the outbound message type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ScreenChanged { .. } => "screen-changed",
            Self::ProgressChanged { .. } => "progress-changed",
            Self::AnswerCommitted { .. } => "answer-committed",
            Self::TrackSwitched { .. } => "track-switched",
            Self::SurveyCompleted => "survey-completed",
            Self::ServiceChangeRequested { .. } => "service-change-requested",
            Self::DraftRestored { .. } => "draft-restored",
            Self::WizardReset => "wizard-reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_stable() {
        let event: WizardEvent = WizardEvent::ScreenChanged {
            screen: Screen::Survey,
        };
        assert_eq!(event.name(), "screen-changed");

        let event: WizardEvent = WizardEvent::ServiceChangeRequested {
            current: Service::BrandSong,
            requested: Service::Combo,
            answered: 3,
            total: 20,
        };
        assert_eq!(event.name(), "service-change-requested");

        assert_eq!(WizardEvent::SurveyCompleted.name(), "survey-completed");
    }

    #[test]
    fn test_progress_event_carries_counters() {
        let event: WizardEvent = WizardEvent::ProgressChanged {
            current_step: 5,
            total_steps: 24,
        };
        assert_eq!(event.name(), "progress-changed");
        assert_eq!(
            event,
            WizardEvent::ProgressChanged {
                current_step: 5,
                total_steps: 24,
            }
        );
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{
    FIXED_PROFILE_STEPS, StateSnapshot, SurveyState, TransitionResult, WizardState,
    total_steps_for,
};
use ssok_survey_catalog as catalog;
use ssok_survey_domain::{
    Answer, Profile, Question, RawInput, Screen, Service, Track, collect_answer, validate_profile,
};
use ssok_survey_events::WizardEvent;

/// Applies a command to the current state, producing a new state and the
/// lifecycle events the presentation layer should react to.
///
/// The input state is never mutated: a transition either succeeds completely
/// or fails leaving everything byte-for-byte unchanged.
///
/// History snapshots are taken after data mutation but before the screen
/// change, so popping one lands on the previous screen with its data (typed
/// profile, chosen service, committed answers) still in place.
///
/// # Arguments
///
/// * `state` - The current wizard state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and its events
/// * `Err(CoreError)` if the command is invalid on this state
///
/// # Errors
///
/// Returns an error if:
/// - The submitted input fails validation
/// - The command is not valid on the current screen
pub fn apply(state: &WizardState, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::Advance => advance_screen(state),
        Command::SubmitProfile {
            brand_name,
            email,
            industry,
        } => submit_profile(state, &brand_name, &email, &industry),
        Command::SelectService { service } => select_service(state, service),
        Command::ConfirmServiceChange { service } => confirm_service_change(state, service),
        Command::SubmitAnswer { input } => submit_answer(state, &input),
        Command::GoBack => go_back(state),
        Command::Restart => Ok(restart()),
    }
}

fn advance_screen(state: &WizardState) -> Result<TransitionResult, CoreError> {
    let next: Screen = match state.screen {
        Screen::Intro => Screen::BrandIntro,
        Screen::BrandIntro => Screen::Profile,
        screen => return Err(CoreError::CommandNotAllowed { screen }),
    };

    let mut new_state: WizardState = state.clone();
    new_state.push_history();
    new_state.screen = next;

    Ok(TransitionResult {
        new_state,
        events: vec![WizardEvent::ScreenChanged { screen: next }],
    })
}

fn submit_profile(
    state: &WizardState,
    brand_name: &str,
    email: &str,
    industry: &str,
) -> Result<TransitionResult, CoreError> {
    if state.screen != Screen::Profile {
        return Err(CoreError::CommandNotAllowed {
            screen: state.screen,
        });
    }

    let profile: Profile = Profile::new(brand_name, email, industry);
    validate_profile(&profile)?;

    let mut new_state: WizardState = state.clone();
    new_state.profile = profile;
    new_state.push_history();
    new_state.screen = Screen::ServiceSelection;

    Ok(TransitionResult {
        new_state,
        events: vec![WizardEvent::ScreenChanged {
            screen: Screen::ServiceSelection,
        }],
    })
}

fn select_service(state: &WizardState, service: Service) -> Result<TransitionResult, CoreError> {
    if state.screen != Screen::ServiceSelection {
        return Err(CoreError::CommandNotAllowed {
            screen: state.screen,
        });
    }

    match state.service {
        // Re-selecting the chosen service resumes at the same position.
        Some(current) if current == service => Ok(resume_survey(state)),
        // A different card while progress exists prompts instead of
        // switching; a single mis-click never discards anything.
        Some(current) if !state.survey.answers.is_empty() || state.profile.has_any_field() => {
            Ok(TransitionResult {
                new_state: state.clone(),
                events: vec![WizardEvent::ServiceChangeRequested {
                    current,
                    requested: service,
                    answered: state.answered_count(),
                    total: catalog::question_total(current),
                }],
            })
        }
        _ => Ok(enter_service(state, service)),
    }
}

fn confirm_service_change(
    state: &WizardState,
    service: Service,
) -> Result<TransitionResult, CoreError> {
    if state.screen != Screen::ServiceSelection {
        return Err(CoreError::CommandNotAllowed {
            screen: state.screen,
        });
    }

    // Deliberate restart into the new service: survey answers and cursor
    // go, the typed profile stays.
    let mut cleared: WizardState = state.clone();
    cleared.survey = SurveyState::new();
    Ok(enter_service(&cleared, service))
}

/// Enters a freshly chosen service: recomputes totals, points the cursor at
/// the service's first track, and moves to the survey (or straight to
/// completion for the no-question service).
fn enter_service(state: &WizardState, service: Service) -> TransitionResult {
    let mut new_state: WizardState = state.clone();
    new_state.service = Some(service);
    new_state.total_steps = total_steps_for(service);
    new_state.current_step = FIXED_PROFILE_STEPS;
    new_state.survey.track = service.tracks().first().copied().unwrap_or_default();
    new_state.survey.position = 0;
    new_state.push_history();

    let mut events: Vec<WizardEvent> = Vec::new();

    if service.tracks().is_empty() {
        new_state.screen = Screen::Completion;
        new_state.current_step = new_state.total_steps;
        events.push(WizardEvent::ScreenChanged {
            screen: Screen::Completion,
        });
        events.push(progress_event(&new_state));
        events.push(WizardEvent::SurveyCompleted);
    } else {
        new_state.screen = Screen::Survey;
        events.push(WizardEvent::ScreenChanged {
            screen: Screen::Survey,
        });
        events.push(progress_event(&new_state));
    }

    TransitionResult { new_state, events }
}

/// Moves back onto the survey screen without touching the cursor or any
/// committed answers.
fn resume_survey(state: &WizardState) -> TransitionResult {
    let mut new_state: WizardState = state.clone();
    new_state.push_history();
    new_state.screen = Screen::Survey;

    let events: Vec<WizardEvent> = vec![
        WizardEvent::ScreenChanged {
            screen: Screen::Survey,
        },
        progress_event(&new_state),
    ];
    TransitionResult { new_state, events }
}

fn submit_answer(state: &WizardState, input: &RawInput) -> Result<TransitionResult, CoreError> {
    if state.screen != Screen::Survey {
        return Err(CoreError::CommandNotAllowed {
            screen: state.screen,
        });
    }
    let Some(service) = state.service else {
        return Err(CoreError::NoServiceSelected);
    };

    let questions: Vec<Question> = catalog::questions_for(state.survey.track);
    let Some(question) = questions.get(state.survey.position) else {
        return Err(CoreError::SurveyComplete);
    };

    // Validation happens before anything is copied or committed; a
    // rejection leaves the input state untouched.
    let answer: Answer = collect_answer(question, input)?;

    let mut new_state: WizardState = state.clone();
    new_state.survey.answers.insert(question.id.clone(), answer);
    new_state.survey.position += 1;
    new_state.current_step += 1;

    let mut events: Vec<WizardEvent> = vec![
        WizardEvent::AnswerCommitted {
            question: question.id.clone(),
        },
        progress_event(&new_state),
    ];

    if new_state.survey.position == questions.len() {
        complete_track(&mut new_state, service, &mut events);
    }

    Ok(TransitionResult { new_state, events })
}

/// Handles the boundary reached when the last question of the active track
/// is answered: either the silent combo track switch, or flow completion.
fn complete_track(state: &mut WizardState, service: Service, events: &mut Vec<WizardEvent>) {
    if service.is_combo() && state.survey.track == Track::Primary {
        state.survey.track = Track::Secondary;
        state.survey.position = 0;
        events.push(WizardEvent::TrackSwitched {
            track: Track::Secondary,
        });
        return;
    }

    state.push_history();
    state.screen = Screen::Completion;
    state.current_step = state.total_steps;
    events.push(WizardEvent::ScreenChanged {
        screen: Screen::Completion,
    });
    events.push(progress_event(state));
    events.push(WizardEvent::SurveyCompleted);
}

fn go_back(state: &WizardState) -> Result<TransitionResult, CoreError> {
    if state.screen == Screen::Survey {
        if state.survey.position > 0 {
            let mut new_state: WizardState = state.clone();
            new_state.survey.position -= 1;
            new_state.current_step -= 1;
            let event: WizardEvent = progress_event(&new_state);
            return Ok(TransitionResult {
                new_state,
                events: vec![event],
            });
        }

        // At the top of the secondary track of a combo flow, back means
        // returning to the last primary question.
        if state.survey.track == Track::Secondary && state.service.is_some_and(|s| s.is_combo()) {
            let mut new_state: WizardState = state.clone();
            new_state.survey.track = Track::Primary;
            new_state.survey.position = catalog::question_count(Track::Primary) - 1;
            new_state.current_step -= 1;
            let events: Vec<WizardEvent> = vec![
                WizardEvent::TrackSwitched {
                    track: Track::Primary,
                },
                progress_event(&new_state),
            ];
            return Ok(TransitionResult { new_state, events });
        }

        return Ok(leave_survey(state));
    }

    pop_history(state)
}

/// Leaves the survey for the service-selection screen, keeping the chosen
/// service, the cursor, and every committed answer in place so the user can
/// resume (or deliberately switch services) without losing progress.
fn leave_survey(state: &WizardState) -> TransitionResult {
    let mut new_state: WizardState = state.clone();
    // Consume the snapshot taken when the survey was entered; live data
    // supersedes it.
    if new_state
        .history
        .last()
        .is_some_and(|s| s.screen == Screen::ServiceSelection)
    {
        new_state.history.pop();
    }
    new_state.screen = Screen::ServiceSelection;

    let events: Vec<WizardEvent> = vec![
        WizardEvent::ScreenChanged {
            screen: Screen::ServiceSelection,
        },
        progress_event(&new_state),
    ];
    TransitionResult { new_state, events }
}

/// Restores the most recent history snapshot wholesale. With no history to
/// pop the command is a no-op.
fn pop_history(state: &WizardState) -> Result<TransitionResult, CoreError> {
    let mut new_state: WizardState = state.clone();
    let Some(snapshot) = new_state.history.pop() else {
        return Ok(TransitionResult {
            new_state,
            events: Vec::new(),
        });
    };

    let history: Vec<StateSnapshot> = new_state.history;
    new_state = WizardState::from_snapshot(snapshot);
    new_state.history = history;

    let events: Vec<WizardEvent> = vec![
        WizardEvent::ScreenChanged {
            screen: new_state.screen,
        },
        progress_event(&new_state),
    ];
    Ok(TransitionResult { new_state, events })
}

fn restart() -> TransitionResult {
    let new_state: WizardState = WizardState::new();
    let events: Vec<WizardEvent> = vec![
        WizardEvent::WizardReset,
        WizardEvent::ScreenChanged {
            screen: Screen::Intro,
        },
        WizardEvent::ProgressChanged {
            current_step: 0,
            total_steps: 0,
        },
    ];
    TransitionResult { new_state, events }
}

fn progress_event(state: &WizardState) -> WizardEvent {
    WizardEvent::ProgressChanged {
        current_step: state.current_step,
        total_steps: state.total_steps,
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{state_at_service_selection, state_in_survey, step};
use crate::{Command, CoreError, FIXED_PROFILE_STEPS, TransitionResult, WizardState, apply};
use ssok_survey_domain::{Screen, Service, ValidationError};
use ssok_survey_events::WizardEvent;

#[test]
fn test_fresh_wizard_starts_at_intro() {
    let state: WizardState = WizardState::new();
    assert_eq!(state.screen, Screen::Intro);
    assert_eq!(state.total_steps, 0);
    assert!((state.progress_fraction() - 0.0).abs() < f64::EPSILON);
    assert!(state.current_question().is_none());
}

#[test]
fn test_advance_walks_informational_screens() {
    let state: WizardState = WizardState::new();
    let state: WizardState = step(&state, Command::Advance);
    assert_eq!(state.screen, Screen::BrandIntro);

    let state: WizardState = step(&state, Command::Advance);
    assert_eq!(state.screen, Screen::Profile);

    // The survey screen does not accept a bare advance.
    let result: Result<TransitionResult, CoreError> = apply(&state, Command::Advance);
    assert!(matches!(
        result,
        Err(CoreError::CommandNotAllowed { screen: Screen::Profile })
    ));
}

#[test]
fn test_submit_profile_requires_valid_fields() {
    let state: WizardState = WizardState::new();
    let state: WizardState = step(&state, Command::Advance);
    let state: WizardState = step(&state, Command::Advance);

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::SubmitProfile {
            brand_name: String::from("Cafe Mocha"),
            email: String::from("not-an-email"),
            industry: String::from("cafe"),
        },
    );
    assert!(matches!(
        result,
        Err(CoreError::Validation(ValidationError::InvalidEmail(_)))
    ));
    assert_eq!(state.screen, Screen::Profile);
}

#[test]
fn test_submit_profile_stores_trimmed_fields() {
    let state: WizardState = state_at_service_selection();
    assert_eq!(state.screen, Screen::ServiceSelection);
    assert_eq!(state.profile.brand_name, "Cafe Mocha");
    assert_eq!(state.profile.industry, "cafe");
}

#[test]
fn test_select_service_enters_survey_with_totals() {
    let state: WizardState = state_in_survey(Service::BrandSong);

    assert_eq!(state.screen, Screen::Survey);
    assert_eq!(state.total_steps, FIXED_PROFILE_STEPS + 20);
    assert_eq!(state.current_step, FIXED_PROFILE_STEPS);
    assert_eq!(
        state.current_question().unwrap().id.value(),
        "q1"
    );
}

#[test]
fn test_playlist_service_jumps_to_completion() {
    let state: WizardState = state_at_service_selection();
    let result: TransitionResult = apply(
        &state,
        Command::SelectService {
            service: Service::Playlist,
        },
    )
    .unwrap();

    let new_state: WizardState = result.new_state;
    assert_eq!(new_state.screen, Screen::Completion);
    assert_eq!(new_state.total_steps, FIXED_PROFILE_STEPS);
    assert_eq!(new_state.current_step, FIXED_PROFILE_STEPS);
    assert!(result.events.contains(&WizardEvent::SurveyCompleted));
    assert!(new_state.current_question().is_none());
}

#[test]
fn test_progress_fraction_is_clamped() {
    let mut state: WizardState = state_in_survey(Service::BrandSong);
    assert!(state.progress_fraction() > 0.0);
    assert!(state.progress_fraction() < 1.0);

    state.current_step = state.total_steps + 5;
    assert!((state.progress_fraction() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_go_back_across_screens_restores_snapshot() {
    let state: WizardState = state_at_service_selection();
    let state: WizardState = step(&state, Command::GoBack);
    assert_eq!(state.screen, Screen::Profile);

    let state: WizardState = step(&state, Command::GoBack);
    assert_eq!(state.screen, Screen::BrandIntro);

    let state: WizardState = step(&state, Command::GoBack);
    assert_eq!(state.screen, Screen::Intro);

    // Nothing left to pop: back is a no-op at the very start.
    let result: TransitionResult = apply(&state, Command::GoBack).unwrap();
    assert_eq!(result.new_state.screen, Screen::Intro);
    assert!(result.events.is_empty());
}

#[test]
fn test_restart_resets_everything() {
    let state: WizardState = state_in_survey(Service::Combo);
    let result: TransitionResult = apply(&state, Command::Restart).unwrap();

    assert_eq!(result.new_state, WizardState::new());
    assert!(result.events.contains(&WizardEvent::WizardReset));
}

#[test]
fn test_select_service_requires_selection_screen() {
    let state: WizardState = WizardState::new();
    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::SelectService {
            service: Service::BrandSong,
        },
    );
    assert!(matches!(result, Err(CoreError::CommandNotAllowed { .. })));
}

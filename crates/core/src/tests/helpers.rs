// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, TransitionResult, WizardState, apply};
use ssok_survey_domain::{
    Question, QuestionKind, RawInput, SelectedOption, Service, StructuralRule,
};

/// Applies a command that is expected to succeed and returns the new state.
pub fn step(state: &WizardState, command: Command) -> WizardState {
    let result: TransitionResult = apply(state, command).unwrap();
    result.new_state
}

/// Drives a fresh wizard to the service-selection screen with a valid
/// profile in place.
pub fn state_at_service_selection() -> WizardState {
    let state: WizardState = WizardState::new();
    let state: WizardState = step(&state, Command::Advance);
    let state: WizardState = step(&state, Command::Advance);
    step(
        &state,
        Command::SubmitProfile {
            brand_name: String::from("Cafe Mocha"),
            email: String::from("owner@cafemocha.kr"),
            industry: String::from("cafe"),
        },
    )
}

/// Drives a fresh wizard into the survey for the given service.
pub fn state_in_survey(service: Service) -> WizardState {
    let state: WizardState = state_at_service_selection();
    step(&state, Command::SelectService { service })
}

/// Builds a valid input for a question, honoring its structural rule.
pub fn valid_input_for(question: &Question) -> RawInput {
    match question.kind {
        QuestionKind::ShortText | QuestionKind::LongText => RawInput::Text {
            value: valid_text_for(question),
            not_applicable: false,
        },
        QuestionKind::SingleChoice => RawInput::Selection {
            selected: vec![plain_selection(question)],
        },
        QuestionKind::MultiChoice => RawInput::Selection {
            selected: vec![plain_selection(question)],
        },
        QuestionKind::RankedChoice => RawInput::Ranking {
            ranked: question
                .options
                .iter()
                .take(3)
                .map(|o| o.label.clone())
                .collect(),
        },
    }
}

fn valid_text_for(question: &Question) -> String {
    match question.rule {
        Some(StructuralRule::ExactCommaTokens(n)) => {
            (1..=n).map(|i| format!("item{i}")).collect::<Vec<_>>().join(", ")
        }
        Some(StructuralRule::MinWordCount(n)) => vec!["word"; n].join(" "),
        Some(StructuralRule::RequiresComma) => String::from("warm beige, Sunday afternoon"),
        Some(StructuralRule::MinLines(n)) => vec!["a line of detail"; n].join("\n"),
        Some(StructuralRule::MaxCommaTokens(_)) | None => String::from("a plain answer"),
    }
}

fn plain_selection(question: &Question) -> SelectedOption {
    let option = question
        .options
        .iter()
        .find(|o| !o.requires_detail)
        .unwrap();
    SelectedOption::new(&option.label)
}

/// Answers the question currently on screen with a valid input.
pub fn answer_current(state: &WizardState) -> WizardState {
    let question: Question = state.current_question().unwrap();
    step(
        state,
        Command::SubmitAnswer {
            input: valid_input_for(&question),
        },
    )
}

/// Answers the next `count` questions in order.
pub fn answer_n(state: &WizardState, count: usize) -> WizardState {
    let mut current: WizardState = state.clone();
    for _ in 0..count {
        current = answer_current(&current);
    }
    current
}

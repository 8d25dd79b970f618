// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SubmissionError;
use crate::session::WizardSession;
use crate::submit::SubmissionTransport;
use ssok_survey::Command;
use ssok_survey_domain::{
    Question, QuestionKind, RawInput, SelectedOption, Service, StructuralRule,
};
use ssok_survey_persistence::MemorySlot;
use std::sync::Mutex;
use time::OffsetDateTime;
use time::macros::datetime;

/// A fixed reference instant for draft stamping.
pub fn reference_now() -> OffsetDateTime {
    datetime!(2026-02-10 12:00 UTC)
}

/// A transport that records every posted body instead of touching the
/// network, optionally failing each post.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    /// Bodies posted so far.
    pub bodies: Mutex<Vec<String>>,
    /// When true, every post fails with a transport error.
    pub fail: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            bodies: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn posted_count(&self) -> usize {
        self.bodies.lock().unwrap().len()
    }
}

impl SubmissionTransport for RecordingTransport {
    fn post(&self, body: &str) -> Result<(), SubmissionError> {
        if self.fail {
            return Err(SubmissionError::Transport(String::from(
                "connection refused",
            )));
        }
        self.bodies.lock().unwrap().push(body.to_string());
        Ok(())
    }
}

/// Drives a fresh session to the service-selection screen.
pub fn session_at_selection() -> WizardSession<MemorySlot> {
    let mut session: WizardSession<MemorySlot> = WizardSession::new(MemorySlot::new());
    session.dispatch(Command::Advance, reference_now()).unwrap();
    session.dispatch(Command::Advance, reference_now()).unwrap();
    session
        .dispatch(
            Command::SubmitProfile {
                brand_name: String::from("Cafe Mocha"),
                email: String::from("owner@cafemocha.kr"),
                industry: String::from("cafe"),
            },
            reference_now(),
        )
        .unwrap();
    session
}

/// Drives a fresh session into the survey for the given service.
pub fn session_in_survey(service: Service) -> WizardSession<MemorySlot> {
    let mut session: WizardSession<MemorySlot> = session_at_selection();
    session
        .dispatch(Command::SelectService { service }, reference_now())
        .unwrap();
    session
}

/// Answers every remaining question of the active flow with valid inputs.
pub fn answer_to_completion(session: &mut WizardSession<MemorySlot>) {
    while let Some(question) = session.state().current_question() {
        session
            .dispatch(
                Command::SubmitAnswer {
                    input: valid_input_for(&question),
                },
                reference_now(),
            )
            .unwrap();
    }
}

/// Builds a valid input for a question, honoring its structural rule.
pub fn valid_input_for(question: &Question) -> RawInput {
    match question.kind {
        QuestionKind::ShortText | QuestionKind::LongText => RawInput::Text {
            value: match question.rule {
                Some(StructuralRule::ExactCommaTokens(n)) => (1..=n)
                    .map(|i| format!("item{i}"))
                    .collect::<Vec<_>>()
                    .join(", "),
                Some(StructuralRule::MinWordCount(n)) => vec!["word"; n].join(" "),
                Some(StructuralRule::RequiresComma) => String::from("warm beige, Sunday 2pm"),
                Some(StructuralRule::MinLines(n)) => vec!["a detail line"; n].join("\n"),
                Some(StructuralRule::MaxCommaTokens(_)) | None => String::from("a plain answer"),
            },
            not_applicable: false,
        },
        QuestionKind::SingleChoice | QuestionKind::MultiChoice => RawInput::Selection {
            selected: vec![SelectedOption::new(
                &question
                    .options
                    .iter()
                    .find(|o| !o.requires_detail)
                    .unwrap()
                    .label,
            )],
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

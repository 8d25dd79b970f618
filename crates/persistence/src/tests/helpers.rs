// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ssok_survey::{Command, WizardState, apply};
use ssok_survey_domain::{RawInput, Service};
use time::OffsetDateTime;
use time::macros::datetime;

/// A fixed reference instant for freshness checks.
pub fn reference_now() -> OffsetDateTime {
    datetime!(2026-02-10 12:00 UTC)
}

fn step(state: &WizardState, command: Command) -> WizardState {
    apply(state, command).unwrap().new_state
}

/// Drives a fresh wizard two answers into the combo survey.
pub fn mid_survey_state() -> WizardState {
    let state: WizardState = WizardState::new();
    let state: WizardState = step(&state, Command::Advance);
    let state: WizardState = step(&state, Command::Advance);
    let state: WizardState = step(
        &state,
        Command::SubmitProfile {
            brand_name: String::from("Cafe Mocha"),
            email: String::from("owner@cafemocha.kr"),
            industry: String::from("cafe"),
        },
    );
    let state: WizardState = step(
        &state,
        Command::SelectService {
            service: Service::Combo,
        },
    );
    let state: WizardState = step(
        &state,
        Command::SubmitAnswer {
            input: RawInput::Text {
                value: String::from("because the neighborhood needed one"),
                not_applicable: false,
            },
        },
    );
    step(
        &state,
        Command::SubmitAnswer {
            input: RawInput::Text {
                value: String::from("good coffee always costs too much"),
                not_applicable: false,
            },
        },
    )
}

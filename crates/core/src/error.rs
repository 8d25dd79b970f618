// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ssok_survey_domain::{Screen, ValidationError};

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The submitted input failed validation; the state is unchanged and
    /// the user can correct and retry in place.
    Validation(ValidationError),
    /// The command is not valid on the current screen.
    CommandNotAllowed {
        /// The screen the wizard is on.
        screen: Screen,
    },
    /// A survey command arrived before any service was selected.
    NoServiceSelected,
    /// An answer was submitted after the active track was already finished.
    SurveyComplete,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::CommandNotAllowed { screen } => {
                write!(f, "Command not allowed on the '{screen}' screen")
            }
            Self::NoServiceSelected => write!(f, "No service has been selected"),
            Self::SurveyComplete => write!(f, "The survey is already complete"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

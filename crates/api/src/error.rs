// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the session and submission boundary.

use ssok_survey::CoreError;
use ssok_survey_persistence::PersistenceError;
use thiserror::Error;

/// Errors surfaced by the session boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A state transition was refused; the wizard is unchanged.
    #[error("{0}")]
    Core(#[from] CoreError),
    /// No honorable draft is available to restore.
    #[error("No saved draft is available to restore")]
    NoDraft,
    /// The draft slot failed outright.
    #[error("{0}")]
    Persistence(#[from] PersistenceError),
}

/// Errors raised while building or sending the submission.
///
/// All submission errors are retryable: collected answers stay intact and
/// re-sending the same payload is safe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The wizard has not reached the completion screen yet.
    #[error("The survey is not complete yet")]
    SurveyIncomplete,
    /// The payload could not be encoded.
    #[error("Submission payload could not be encoded: {0}")]
    Encoding(String),
    /// The network call failed; the user can retry.
    #[error("Submission request failed: {0}")]
    Transport(String),
}

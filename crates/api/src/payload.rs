// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SubmissionError;
use serde::{Deserialize, Serialize};
use ssok_survey::WizardState;
use ssok_survey_catalog as catalog;
use ssok_survey_domain::{Service, Track};
use std::collections::BTreeMap;

/// The one-way JSON document posted to the spreadsheet backend.
///
/// Track answer maps are keyed by question title, matching the sheet's
/// column headers. Building a payload is pure and idempotent: the same
/// state always produces the same document, and re-sending it is safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// The brand or store name.
    pub brand_name: String,
    /// The customer's industry.
    pub industry: String,
    /// The contact email address.
    pub email: String,
    /// The chosen service's display label.
    pub selected_service: String,
    /// Primary-track answers, question title → flattened answer.
    pub primary_track_answers: BTreeMap<String, String>,
    /// Secondary-track answers, question title → flattened answer.
    pub secondary_track_answers: BTreeMap<String, String>,
}

impl SubmissionPayload {
    /// Builds the payload from a completed wizard state.
    ///
    /// Only answers for tracks the chosen service visits are included; a
    /// track the service skips yields an empty map.
    ///
    /// # Arguments
    ///
    /// * `state` - The wizard state to project
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::SurveyIncomplete` if no service has been
    /// chosen yet.
    pub fn from_state(state: &WizardState) -> Result<Self, SubmissionError> {
        let Some(service) = state.service else {
            return Err(SubmissionError::SurveyIncomplete);
        };

        Ok(Self {
            brand_name: state.profile.brand_name.clone(),
            industry: state.profile.industry.clone(),
            email: state.profile.email.clone(),
            selected_service: String::from(service.label()),
            primary_track_answers: track_answers(state, service, Track::Primary),
            secondary_track_answers: track_answers(state, service, Track::Secondary),
        })
    }
}

fn track_answers(state: &WizardState, service: Service, track: Track) -> BTreeMap<String, String> {
    if !service.tracks().contains(&track) {
        return BTreeMap::new();
    }

    catalog::questions_for(track)
        .into_iter()
        .filter_map(|question| {
            state
                .saved_answer(&question.id)
                .map(|answer| (question.title, answer.flattened()))
        })
        .collect()
}

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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod brand_song;
mod narration;

#[cfg(test)]
mod tests;

use ssok_survey_domain::{Question, QuestionId, Service, Track};

/// Returns the questions of one track, in display order.
#[must_use]
pub fn questions_for(track: Track) -> Vec<Question> {
    match track {
        Track::Primary => brand_song::questions(),
        Track::Secondary => narration::questions(),
    }
}

/// Returns the number of questions in one track.
#[must_use]
pub fn question_count(track: Track) -> usize {
    questions_for(track).len()
}

/// Returns every question a service asks, across its tracks, in order.
///
/// Used for totals, the summary screen, and the submission payload.
#[must_use]
pub fn questions_for_service(service: Service) -> Vec<Question> {
    service
        .tracks()
        .iter()
        .flat_map(|track| questions_for(*track))
        .collect()
}

/// Returns the total question count a service asks across its tracks.
#[must_use]
pub fn question_total(service: Service) -> usize {
    service
        .tracks()
        .iter()
        .map(|track| question_count(*track))
        .sum()
}

/// Looks up a question by id across both tracks.
#[must_use]
pub fn question_by_id(id: &QuestionId) -> Option<Question> {
    questions_for(Track::Primary)
        .into_iter()
        .chain(questions_for(Track::Secondary))
        .find(|q| &q.id == id)
}

/// Returns both tracks' questions, primary first.
#[must_use]
pub fn all_questions() -> Vec<Question> {
    let mut questions: Vec<Question> = questions_for(Track::Primary);
    questions.extend(questions_for(Track::Secondary));
    questions
}

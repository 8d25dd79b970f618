// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SubmissionError;
use crate::session::WizardSession;
use crate::tests::helpers::{RecordingTransport, answer_to_completion, session_in_survey};
use ssok_survey_domain::Service;
use ssok_survey_persistence::MemorySlot;

#[test]
fn test_submit_posts_the_encoded_payload_once() {
    let mut session: WizardSession<MemorySlot> = session_in_survey(Service::BrandSong);
    answer_to_completion(&mut session);

    let transport: RecordingTransport = RecordingTransport::new();
    session.submit(&transport).unwrap();

    assert_eq!(transport.posted_count(), 1);
    let body: String = transport.bodies.lock().unwrap()[0].clone();
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["brandName"], "Cafe Mocha");
    assert_eq!(json["selectedService"], "Brand Song");
}

#[test]
fn test_submit_before_completion_is_refused() {
    let session: WizardSession<MemorySlot> = session_in_survey(Service::BrandSong);
    let transport: RecordingTransport = RecordingTransport::new();

    assert_eq!(
        session.submit(&transport),
        Err(SubmissionError::SurveyIncomplete)
    );
    assert_eq!(transport.posted_count(), 0);
}

#[test]
fn test_failed_submit_keeps_answers_and_allows_retry() {
    let mut session: WizardSession<MemorySlot> = session_in_survey(Service::Narration);
    answer_to_completion(&mut session);
    let answered_before: usize = session.state().answered_count();

    let failing: RecordingTransport = RecordingTransport::failing();
    assert!(matches!(
        session.submit(&failing),
        Err(SubmissionError::Transport(_))
    ));

    // Nothing local was rolled back; the retry sends an identical payload.
    assert_eq!(session.state().answered_count(), answered_before);
    let transport: RecordingTransport = RecordingTransport::new();
    session.submit(&transport).unwrap();
    session.submit(&transport).unwrap();
    assert_eq!(transport.posted_count(), 2);
    let bodies = transport.bodies.lock().unwrap();
    assert_eq!(bodies[0], bodies[1]);
}

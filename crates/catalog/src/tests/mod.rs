// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::{all_questions, question_by_id, question_count, question_total, questions_for};
use ssok_survey_domain::{
    Question, QuestionId, QuestionKind, Service, Track, validate_catalog,
};

#[test]
fn test_catalog_passes_integrity_validation() {
    let questions: Vec<Question> = all_questions();
    validate_catalog(&questions).unwrap();
}

#[test]
fn test_track_lengths_are_stable() {
    assert_eq!(question_count(Track::Primary), 20);
    assert_eq!(question_count(Track::Secondary), 30);
}

#[test]
fn test_every_primary_question_is_short_text() {
    for question in questions_for(Track::Primary) {
        assert_eq!(question.kind, QuestionKind::ShortText, "{}", question.id);
        assert_eq!(question.track, Track::Primary);
    }
}

#[test]
fn test_secondary_track_covers_every_kind_but_short_text() {
    let questions: Vec<Question> = questions_for(Track::Secondary);
    for kind in [
        QuestionKind::LongText,
        QuestionKind::SingleChoice,
        QuestionKind::MultiChoice,
        QuestionKind::RankedChoice,
    ] {
        assert!(
            questions.iter().any(|q| q.kind == kind),
            "no {kind} question in the narration track"
        );
    }
    for question in &questions {
        assert_eq!(question.track, Track::Secondary);
    }
}

#[test]
fn test_service_totals_sum_visited_tracks() {
    assert_eq!(question_total(Service::BrandSong), 20);
    assert_eq!(question_total(Service::Narration), 30);
    assert_eq!(question_total(Service::Combo), 50);
    assert_eq!(question_total(Service::Playlist), 0);
}

#[test]
fn test_combo_orders_primary_before_secondary() {
    let questions: Vec<Question> = crate::questions_for_service(Service::Combo);
    assert_eq!(questions.len(), 50);
    assert!(
        questions[..20].iter().all(|q| q.track == Track::Primary)
            && questions[20..].iter().all(|q| q.track == Track::Secondary)
    );
}

#[test]
fn test_question_lookup_by_id_spans_both_tracks() {
    assert!(question_by_id(&QuestionId::new("q18")).is_some());
    assert!(question_by_id(&QuestionId::new("priority_ranking")).is_some());
    assert!(question_by_id(&QuestionId::new("q99")).is_none());
}

#[test]
fn test_multi_choice_caps_are_explicit() {
    let moods: Question = question_by_id(&QuestionId::new("brand_moods")).unwrap();
    assert_eq!(moods.kind, QuestionKind::MultiChoice);
    assert_eq!(moods.max_selections, Some(3));
}

#[test]
fn test_other_options_are_flagged_for_detail() {
    let voice: Question = question_by_id(&QuestionId::new("voice_preference")).unwrap();
    let other = voice.option_by_label("Other (please specify)").unwrap();
    assert!(other.requires_detail);
    assert_eq!(other.base_label(), "Other");
}

#[test]
fn test_not_applicable_flags_sit_on_content_questions() {
    for id in ["prepared_content", "existing_script", "reference_style"] {
        let question: Question = question_by_id(&QuestionId::new(id)).unwrap();
        assert!(question.allows_not_applicable, "{id}");
        assert_eq!(question.kind, QuestionKind::LongText, "{id}");
    }
}

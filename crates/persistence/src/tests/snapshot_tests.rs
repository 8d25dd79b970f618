// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{mid_survey_state, reference_now};
use crate::{DRAFT_FORMAT_VERSION, DraftSnapshot};
use ssok_survey::{WizardState, total_steps_for};
use ssok_survey_domain::{Screen, Service};

#[test]
fn test_capture_stamps_version_and_time() {
    let snapshot: DraftSnapshot = DraftSnapshot::capture(&mid_survey_state(), reference_now());
    assert_eq!(snapshot.format_version, DRAFT_FORMAT_VERSION);
    assert_eq!(snapshot.saved_at, reference_now());
}

#[test]
fn test_capture_excludes_history() {
    let state: WizardState = mid_survey_state();
    assert!(!state.history.is_empty());

    let snapshot: DraftSnapshot = DraftSnapshot::capture(&state, reference_now());
    let restored: WizardState = snapshot.restore();
    assert!(restored.history.is_empty());
}

#[test]
fn test_restore_clamps_out_of_range_cursor() {
    let mut snapshot: DraftSnapshot = DraftSnapshot::capture(&mid_survey_state(), reference_now());
    snapshot.state.survey.position = 999;
    snapshot.state.current_step = 999;

    let restored: WizardState = snapshot.restore();
    assert_eq!(
        restored.survey.position,
        ssok_survey_catalog::question_count(restored.survey.track)
    );
    assert_eq!(restored.current_step, restored.total_steps);
}

#[test]
fn test_restore_recomputes_totals_from_service() {
    let mut snapshot: DraftSnapshot = DraftSnapshot::capture(&mid_survey_state(), reference_now());
    snapshot.state.total_steps = 7;

    let restored: WizardState = snapshot.restore();
    assert_eq!(restored.total_steps, total_steps_for(Service::Combo));
}

#[test]
fn test_restore_without_service_leaves_survey_screen() {
    let mut snapshot: DraftSnapshot = DraftSnapshot::capture(&mid_survey_state(), reference_now());
    snapshot.state.service = None;

    let restored: WizardState = snapshot.restore();
    assert_eq!(restored.screen, Screen::ServiceSelection);
    assert_eq!(restored.total_steps, 0);
    assert_eq!(restored.current_step, 0);
}

#[test]
fn test_freshness_window_is_inclusive_of_24_hours() {
    let snapshot: DraftSnapshot = DraftSnapshot::capture(&mid_survey_state(), reference_now());
    assert!(snapshot.is_fresh(reference_now() + time::Duration::hours(24)));
    assert!(!snapshot.is_fresh(reference_now() + time::Duration::hours(24) + time::Duration::seconds(1)));
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{RANKING_SIZE, Ranking, RawInput, ValidationError};

#[test]
fn test_toggle_appends_in_selection_order() {
    let mut ranking: Ranking = Ranking::new();
    ranking.toggle("B").unwrap();
    ranking.toggle("A").unwrap();

    assert_eq!(ranking.entries(), &["B", "A"]);
    assert_eq!(ranking.rank_of("B"), Some(1));
    assert_eq!(ranking.rank_of("A"), Some(2));
    assert!(!ranking.is_complete());
}

#[test]
fn test_fourth_selection_rejected_and_existing_untouched() {
    let mut ranking: Ranking = Ranking::new();
    ranking.toggle("A").unwrap();
    ranking.toggle("B").unwrap();
    ranking.toggle("C").unwrap();

    let result: Result<(), ValidationError> = ranking.toggle("D");
    assert_eq!(result, Err(ValidationError::RankingFull { cap: RANKING_SIZE }));
    assert_eq!(ranking.entries(), &["A", "B", "C"]);
}

#[test]
fn test_deselecting_shifts_later_ranks_down() {
    let mut ranking: Ranking = Ranking::new();
    ranking.toggle("A").unwrap();
    ranking.toggle("B").unwrap();
    ranking.toggle("C").unwrap();

    ranking.toggle("A").unwrap();

    assert_eq!(ranking.entries(), &["B", "C"]);
    assert_eq!(ranking.rank_of("B"), Some(1));
    assert_eq!(ranking.rank_of("C"), Some(2));
    assert_eq!(ranking.rank_of("A"), None);
}

#[test]
fn test_deselect_then_reselect_takes_last_rank() {
    let mut ranking: Ranking = Ranking::new();
    ranking.toggle("A").unwrap();
    ranking.toggle("B").unwrap();
    ranking.toggle("A").unwrap();
    ranking.toggle("A").unwrap();

    assert_eq!(ranking.entries(), &["B", "A"]);
}

#[test]
fn test_complete_ranking_converts_to_input() {
    let mut ranking: Ranking = Ranking::new();
    ranking.toggle("A").unwrap();
    ranking.toggle("B").unwrap();
    ranking.toggle("C").unwrap();
    assert!(ranking.is_complete());

    let input: RawInput = ranking.into_input();
    assert_eq!(
        input,
        RawInput::Ranking {
            ranked: vec![String::from("A"), String::from("B"), String::from("C")],
        }
    );
}

#[test]
fn test_from_entries_restores_committed_ranking() {
    let ranking: Ranking =
        Ranking::from_entries(vec![String::from("C"), String::from("A"), String::from("B")]);

    assert!(ranking.is_complete());
    assert_eq!(ranking.rank_of("C"), Some(1));
}

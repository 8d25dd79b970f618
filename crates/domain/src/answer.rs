// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::question::QuestionKind;
use serde::{Deserialize, Serialize};

/// The fixed sentinel committed when a question is marked "not applicable".
pub const NOT_APPLICABLE: &str = "Not applicable";

/// A committed, validated answer keyed by its question id.
///
/// Only committed answers enter the answer map; an answer's shape always
/// matches its question's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Free text (short or long), or the "not applicable" sentinel.
    Text(String),
    /// One option label, or a `"<base label>: <detail>"` composite.
    Choice(String),
    /// Selected option labels/composites, bounded by the question's cap.
    Selections(Vec<String>),
    /// Exactly three distinct option labels; rank is implied by position.
    Ranking(Vec<String>),
}

impl Answer {
    /// Returns whether this answer's shape matches the given question kind.
    #[must_use]
    pub const fn matches_kind(&self, kind: QuestionKind) -> bool {
        matches!(
            (self, kind),
            (Self::Text(_), QuestionKind::ShortText | QuestionKind::LongText)
                | (Self::Choice(_), QuestionKind::SingleChoice)
                | (Self::Selections(_), QuestionKind::MultiChoice)
                | (Self::Ranking(_), QuestionKind::RankedChoice)
        )
    }

    /// Returns whether this is the "not applicable" sentinel.
    #[must_use]
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::Text(v) if v == NOT_APPLICABLE)
    }

    /// Flattens the answer to a single display string.
    ///
    /// List shapes are joined with `", "`; rank order is preserved.
    #[must_use]
    pub fn flattened(&self) -> String {
        match self {
            Self::Text(v) | Self::Choice(v) => v.clone(),
            Self::Selections(items) | Self::Ranking(items) => items.join(", "),
        }
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifies one ordered question set within the wizard.
///
/// The primary track carries the brand-identity questions; the secondary
/// track carries the narration/industry questions. The combo service visits
/// both, primary first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    /// Brand-identity question set.
    #[default]
    Primary,
    /// Narration question set.
    Secondary,
}

impl Track {
    /// Converts this track to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl FromStr for Track {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            _ => Err(ValidationError::UnknownTrack(s.to_string())),
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The answer shape a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    /// A single line of free text.
    ShortText,
    /// Multi-line free text.
    LongText,
    /// Exactly one option from the question's option list.
    SingleChoice,
    /// One or more options, optionally bounded by a per-question cap.
    MultiChoice,
    /// An ordered top-3 drawn from the question's option list.
    RankedChoice,
}

impl QuestionKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ShortText => "short-text",
            Self::LongText => "long-text",
            Self::SingleChoice => "single-choice",
            Self::MultiChoice => "multi-choice",
            Self::RankedChoice => "ranked-choice",
        }
    }

    /// Returns whether this kind draws its answers from an option list.
    #[must_use]
    pub const fn requires_options(&self) -> bool {
        matches!(
            self,
            Self::SingleChoice | Self::MultiChoice | Self::RankedChoice
        )
    }

    /// Returns whether this kind accepts free text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::ShortText | Self::LongText)
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A question's unique, stable key.
///
/// Ids are unique across BOTH tracks and are the sole key of the answer map.
/// Serializes transparently as its string value, so answer maps keyed by id
/// encode as plain JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId {
    /// The id value (e.g., "q4", "voice_preference").
    value: String,
}

impl QuestionId {
    /// Creates a new `QuestionId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The id value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// One entry in a choice-style question's option list.
///
/// An option flagged `requires_detail` is an "other"-style placeholder:
/// selecting it requires an accompanying free-text value, and the committed
/// answer is the composite `"<base label>: <detail>"`. The flag is explicit
/// catalog data; it is never inferred from the label text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// The display label, exactly as rendered.
    pub label: String,
    /// Whether selecting this option requires free-text detail.
    pub requires_detail: bool,
}

impl ChoiceOption {
    /// Creates a plain option.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            requires_detail: false,
        }
    }

    /// Creates an "other"-style option that requires free-text detail.
    #[must_use]
    pub fn with_detail(label: &str) -> Self {
        Self {
            label: label.to_string(),
            requires_detail: true,
        }
    }

    /// Returns the label with any trailing parenthetical stripped.
    ///
    /// `"Other (please specify)"` becomes `"Other"`; this is the prefix used
    /// when composing the committed `"<base label>: <detail>"` answer.
    #[must_use]
    pub fn base_label(&self) -> &str {
        self.label
            .split('(')
            .next()
            .map_or(self.label.as_str(), str::trim_end)
    }
}

/// A structural constraint on a free-text answer.
///
/// Rules are explicit catalog data attached to individual questions; the
/// collector only interprets them. Each rule carries its own user-facing
/// violation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralRule {
    /// The answer must contain exactly this many comma-separated items.
    ExactCommaTokens(usize),
    /// The answer must contain at most this many comma-separated items.
    MaxCommaTokens(usize),
    /// The answer must contain at least this many whitespace-separated words.
    MinWordCount(usize),
    /// The answer must contain a separating comma.
    RequiresComma,
    /// The answer must span at least this many non-empty lines.
    MinLines(usize),
}

impl StructuralRule {
    /// Checks a trimmed answer value against this rule.
    ///
    /// # Arguments
    ///
    /// * `value` - The trimmed answer text
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::StructuralRuleViolation` carrying this
    /// rule's message if the value does not satisfy the rule.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        let satisfied: bool = match self {
            Self::ExactCommaTokens(n) => comma_tokens(value) == *n,
            Self::MaxCommaTokens(n) => comma_tokens(value) <= *n,
            Self::MinWordCount(n) => value.split_whitespace().count() >= *n,
            Self::RequiresComma => value.contains(','),
            Self::MinLines(n) => value.lines().filter(|l| !l.trim().is_empty()).count() >= *n,
        };

        if satisfied {
            Ok(())
        } else {
            Err(ValidationError::StructuralRuleViolation {
                message: self.message(),
            })
        }
    }

    /// Returns the user-facing message shown when this rule is violated.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ExactCommaTokens(n) => {
                format!("Enter exactly {n} items, separated by commas")
            }
            Self::MaxCommaTokens(n) => format!("Enter at most {n} items, separated by commas"),
            Self::MinWordCount(n) => format!("Enter at least {n} words"),
            Self::RequiresComma => String::from("Separate the two parts with a comma"),
            Self::MinLines(n) => format!("Write at least {n} lines of detail"),
        }
    }
}

fn comma_tokens(value: &str) -> usize {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .count()
}

/// An immutable catalog entry.
///
/// Everything the collector needs to validate an answer is explicit data on
/// the question record: the option list, the "other" flags, the multi-choice
/// cap, and the structural rule. Nothing is derived from display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Unique, stable key (unique across both tracks).
    pub id: QuestionId,
    /// The track this question belongs to.
    pub track: Track,
    /// The answer shape this question expects.
    pub kind: QuestionKind,
    /// Optional section header shown above the question.
    pub section: Option<String>,
    /// Short display title (e.g., "Q4. Brand mood").
    pub title: String,
    /// The full question prompt.
    pub prompt: String,
    /// Optional inline example shown below the prompt.
    pub example: Option<String>,
    /// Option list; non-empty exactly when `kind` requires options.
    pub options: Vec<ChoiceOption>,
    /// Whether a "not applicable" answer is accepted (text kinds only).
    pub allows_not_applicable: bool,
    /// Maximum selection count (multi-choice only; `None` = unbounded).
    pub max_selections: Option<usize>,
    /// Optional structural constraint on the answer text.
    pub rule: Option<StructuralRule>,
}

impl Question {
    /// Creates a short-text question.
    #[must_use]
    pub fn short_text(track: Track, id: &str, title: &str, prompt: &str) -> Self {
        Self::base(track, id, title, prompt, QuestionKind::ShortText)
    }

    /// Creates a long-text question.
    #[must_use]
    pub fn long_text(track: Track, id: &str, title: &str, prompt: &str) -> Self {
        Self::base(track, id, title, prompt, QuestionKind::LongText)
    }

    fn base(track: Track, id: &str, title: &str, prompt: &str, kind: QuestionKind) -> Self {
        Self {
            id: QuestionId::new(id),
            track,
            kind,
            section: None,
            title: title.to_string(),
            prompt: prompt.to_string(),
            example: None,
            options: Vec::new(),
            allows_not_applicable: false,
            max_selections: None,
            rule: None,
        }
    }

    /// Creates a single-choice question.
    #[must_use]
    pub fn single_choice(
        track: Track,
        id: &str,
        title: &str,
        prompt: &str,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            options,
            ..Self::base(track, id, title, prompt, QuestionKind::SingleChoice)
        }
    }

    /// Creates a multi-choice question.
    #[must_use]
    pub fn multi_choice(
        track: Track,
        id: &str,
        title: &str,
        prompt: &str,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            options,
            ..Self::base(track, id, title, prompt, QuestionKind::MultiChoice)
        }
    }

    /// Creates a ranked-choice question.
    #[must_use]
    pub fn ranked_choice(
        track: Track,
        id: &str,
        title: &str,
        prompt: &str,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            options,
            ..Self::base(track, id, title, prompt, QuestionKind::RankedChoice)
        }
    }

    /// Sets the section header.
    #[must_use]
    pub fn in_section(mut self, section: &str) -> Self {
        self.section = Some(section.to_string());
        self
    }

    /// Sets the inline example.
    #[must_use]
    pub fn with_example(mut self, example: &str) -> Self {
        self.example = Some(example.to_string());
        self
    }

    /// Attaches a structural rule to the answer text.
    #[must_use]
    pub const fn with_rule(mut self, rule: StructuralRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Marks the question as accepting a "not applicable" answer.
    #[must_use]
    pub const fn not_applicable_allowed(mut self) -> Self {
        self.allows_not_applicable = true;
        self
    }

    /// Caps the number of selections (multi-choice).
    #[must_use]
    pub const fn capped(mut self, max_selections: usize) -> Self {
        self.max_selections = Some(max_selections);
        self
    }

    /// Looks up an option by its exact label.
    #[must_use]
    pub fn option_by_label(&self, label: &str) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.label == label)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::answer::{Answer, NOT_APPLICABLE};
use crate::error::ValidationError;
use crate::question::{ChoiceOption, Question, QuestionKind};
use crate::ranking::RANKING_SIZE;
use std::collections::HashSet;

/// One selected option as reported by the presentation layer.
///
/// `detail` carries the free-text value for "other"-style options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedOption {
    /// The option label, exactly as defined in the catalog.
    pub label: String,
    /// Free-text detail, when the user typed any.
    pub detail: Option<String>,
}

impl SelectedOption {
    /// Creates a selection without detail text.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            detail: None,
        }
    }

    /// Creates a selection with detail text.
    #[must_use]
    pub fn with_detail(label: &str, detail: &str) -> Self {
        Self {
            label: label.to_string(),
            detail: Some(detail.to_string()),
        }
    }
}

/// Raw captured input as reported by the presentation layer.
///
/// The collector works exclusively from this explicit structure; it never
/// re-derives intent from rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Free text with an optional "not applicable" mark.
    Text {
        /// The typed text, untrimmed.
        value: String,
        /// Whether the user marked the question "not applicable".
        not_applicable: bool,
    },
    /// The currently selected options, in selection order.
    Selection {
        /// The selected options.
        selected: Vec<SelectedOption>,
    },
    /// An in-progress ranking, in selection order.
    Ranking {
        /// The ranked option labels.
        ranked: Vec<String>,
    },
}

/// Turns raw captured input into a committed answer, or rejects it.
///
/// This function is pure: all storage mutation is the state machine's
/// responsibility, and a rejection leaves nothing partially committed.
///
/// # Arguments
///
/// * `question` - The question being answered
/// * `input` - The raw input reported by the presentation layer
///
/// # Returns
///
/// * `Ok(Answer)` with a shape matching the question's kind
/// * `Err(ValidationError)` naming the specific problem
///
/// # Errors
///
/// Returns an error if the input is empty where an answer is required,
/// violates the question's structural rule, selects unknown or duplicate
/// options, exceeds the selection cap, omits required "other" detail, or
/// commits an incomplete ranking.
pub fn collect_answer(question: &Question, input: &RawInput) -> Result<Answer, ValidationError> {
    match question.kind {
        QuestionKind::ShortText | QuestionKind::LongText => collect_text(question, input),
        QuestionKind::SingleChoice => collect_single_choice(question, input),
        QuestionKind::MultiChoice => collect_multi_choice(question, input),
        QuestionKind::RankedChoice => collect_ranking(question, input),
    }
}

fn collect_text(question: &Question, input: &RawInput) -> Result<Answer, ValidationError> {
    let RawInput::Text {
        value,
        not_applicable,
    } = input
    else {
        return Err(mismatch(question.kind));
    };

    // An explicit "not applicable" mark wins over any typed text.
    if *not_applicable && question.allows_not_applicable {
        return Ok(Answer::Text(String::from(NOT_APPLICABLE)));
    }

    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::AnswerRequired);
    }

    if let Some(rule) = &question.rule {
        rule.check(trimmed)?;
    }

    Ok(Answer::Text(trimmed.to_string()))
}

fn collect_single_choice(question: &Question, input: &RawInput) -> Result<Answer, ValidationError> {
    let RawInput::Selection { selected } = input else {
        return Err(mismatch(question.kind));
    };

    match selected.as_slice() {
        [] => Err(ValidationError::OptionRequired),
        [choice] => {
            let option: &ChoiceOption = question
                .option_by_label(&choice.label)
                .ok_or_else(|| ValidationError::UnknownOption(choice.label.clone()))?;
            Ok(Answer::Choice(resolve_selection(option, choice)?))
        }
        _ => Err(ValidationError::TooManySelections { max: 1 }),
    }
}

fn collect_multi_choice(question: &Question, input: &RawInput) -> Result<Answer, ValidationError> {
    let RawInput::Selection { selected } = input else {
        return Err(mismatch(question.kind));
    };

    if selected.is_empty() {
        return Err(ValidationError::OptionRequired);
    }
    if let Some(max) = question.max_selections
        && selected.len() > max
    {
        return Err(ValidationError::TooManySelections { max });
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut out: Vec<String> = Vec::with_capacity(selected.len());
    for choice in selected {
        if !seen.insert(choice.label.as_str()) {
            return Err(ValidationError::DuplicateSelection(choice.label.clone()));
        }
        let option: &ChoiceOption = question
            .option_by_label(&choice.label)
            .ok_or_else(|| ValidationError::UnknownOption(choice.label.clone()))?;
        out.push(resolve_selection(option, choice)?);
    }

    Ok(Answer::Selections(out))
}

fn collect_ranking(question: &Question, input: &RawInput) -> Result<Answer, ValidationError> {
    let RawInput::Ranking { ranked } = input else {
        return Err(mismatch(question.kind));
    };

    if ranked.len() != RANKING_SIZE {
        return Err(ValidationError::IncompleteRanking {
            required: RANKING_SIZE,
        });
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for label in ranked {
        if question.option_by_label(label).is_none() {
            return Err(ValidationError::UnknownOption(label.clone()));
        }
        if !seen.insert(label.as_str()) {
            return Err(ValidationError::DuplicateSelection(label.clone()));
        }
    }

    Ok(Answer::Ranking(ranked.clone()))
}

/// Resolves one selection to its committed string form.
///
/// Plain options commit their label; "other"-style options require non-empty
/// detail and commit the `"<base label>: <detail>"` composite.
fn resolve_selection(
    option: &ChoiceOption,
    choice: &SelectedOption,
) -> Result<String, ValidationError> {
    if !option.requires_detail {
        return Ok(option.label.clone());
    }

    let detail: &str = choice.detail.as_deref().unwrap_or("").trim();
    if detail.is_empty() {
        return Err(ValidationError::DetailRequired {
            option: option.label.clone(),
        });
    }
    Ok(format!("{}: {detail}", option.base_label()))
}

const fn mismatch(kind: QuestionKind) -> ValidationError {
    ValidationError::InputMismatch {
        expected: kind.as_str(),
    }
}

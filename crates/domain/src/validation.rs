// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{CatalogError, ValidationError};
use crate::profile::Profile;
use crate::question::{Question, QuestionKind};
use crate::ranking::RANKING_SIZE;
use std::collections::HashSet;

/// Validates the customer profile's field constraints.
///
/// # Arguments
///
/// * `profile` - The profile to validate
///
/// # Returns
///
/// * `Ok(())` if all fields are acceptable
/// * `Err(ValidationError)` naming the first failing field
///
/// # Errors
///
/// Returns an error if:
/// - The brand name is empty
/// - The email does not have a plausible `local@domain` shape
/// - The industry is empty
pub fn validate_profile(profile: &Profile) -> Result<(), ValidationError> {
    if profile.brand_name.trim().is_empty() {
        return Err(ValidationError::BrandNameRequired);
    }

    validate_email(&profile.email)?;

    if profile.industry.trim().is_empty() {
        return Err(ValidationError::IndustryRequired);
    }

    Ok(())
}

/// Validates that an email has a plausible `local@domain` shape.
///
/// This is deliberately shallow: the address is only used as a callback
/// contact, and the backend performs no verification either.
///
/// # Errors
///
/// Returns `ValidationError::InvalidEmail` if the value is empty, lacks a
/// single `@`, or has an empty local part or dot-less domain.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed: &str = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidEmail(String::from(
            "email is required",
        )));
    }

    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(ValidationError::InvalidEmail(String::from("missing '@'")));
    };
    if local.is_empty() {
        return Err(ValidationError::InvalidEmail(String::from(
            "missing name before '@'",
        )));
    }
    if domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err(ValidationError::InvalidEmail(format!(
            "'{domain}' is not a valid domain"
        )));
    }

    Ok(())
}

/// Validates the integrity of a question catalog.
///
/// This function is pure and deterministic. It checks authoring invariants
/// across the full question list:
/// - ids are unique across all questions
/// - options are present exactly when the kind requires them
/// - option labels are unique within a question
/// - selection caps appear only on multi-choice questions and are non-zero
/// - "not applicable" appears only on text questions
/// - ranked questions offer at least `RANKING_SIZE` options
///
/// # Arguments
///
/// * `questions` - The complete question list, both tracks
///
/// # Errors
///
/// Returns the first `CatalogError` found.
pub fn validate_catalog(questions: &[Question]) -> Result<(), CatalogError> {
    let mut ids: HashSet<&str> = HashSet::new();

    for question in questions {
        let id: &str = question.id.value();
        if !ids.insert(id) {
            return Err(CatalogError::DuplicateQuestionId(id.to_string()));
        }

        if question.kind.requires_options() {
            if question.options.is_empty() {
                return Err(CatalogError::MissingOptions(id.to_string()));
            }
        } else if !question.options.is_empty() {
            return Err(CatalogError::UnexpectedOptions(id.to_string()));
        }

        let mut labels: HashSet<&str> = HashSet::new();
        for option in &question.options {
            if !labels.insert(option.label.as_str()) {
                return Err(CatalogError::DuplicateOptionLabel {
                    question: id.to_string(),
                    label: option.label.clone(),
                });
            }
        }

        match question.max_selections {
            Some(0) => return Err(CatalogError::ZeroSelectionCap(id.to_string())),
            Some(_) if question.kind != QuestionKind::MultiChoice => {
                return Err(CatalogError::CapOnNonMultiChoice(id.to_string()));
            }
            _ => {}
        }

        if question.allows_not_applicable && !question.kind.is_text() {
            return Err(CatalogError::NotApplicableOnChoiceKind(id.to_string()));
        }

        if question.kind == QuestionKind::RankedChoice && question.options.len() < RANKING_SIZE
        {
            return Err(CatalogError::TooFewRankedOptions {
                question: id.to_string(),
                present: question.options.len(),
            });
        }
    }

    Ok(())
}

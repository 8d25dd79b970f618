// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// User-correctable errors raised while collecting an answer or profile.
///
/// Every variant names the specific problem; the display string is the
/// message shown to the user. A refused input never mutates wizard state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required free-text answer is empty.
    AnswerRequired,
    /// No option is selected where at least one is required.
    OptionRequired,
    /// The reported input shape does not match the question's kind.
    InputMismatch {
        /// The kind the question expects, as a display string.
        expected: &'static str,
    },
    /// A reported option label does not exist on the question.
    UnknownOption(String),
    /// The same option was reported more than once.
    DuplicateSelection(String),
    /// An "other"-style option is selected without its free-text detail.
    DetailRequired {
        /// The option label missing its detail.
        option: String,
    },
    /// More options are selected than the question allows.
    TooManySelections {
        /// The maximum selection count.
        max: usize,
    },
    /// A ranking was committed with the wrong number of entries.
    IncompleteRanking {
        /// The required entry count.
        required: usize,
    },
    /// A ranking already holds its maximum number of entries.
    RankingFull {
        /// The ranking capacity.
        cap: usize,
    },
    /// A structural rule on the answer text was violated.
    StructuralRuleViolation {
        /// The rule's user-facing message.
        message: String,
    },
    /// The brand name field is empty.
    BrandNameRequired,
    /// The contact email is missing or malformed.
    InvalidEmail(String),
    /// The industry field is empty.
    IndustryRequired,
    /// An unrecognized service identifier.
    UnknownService(String),
    /// An unrecognized track identifier.
    UnknownTrack(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnswerRequired => write!(f, "Please enter an answer"),
            Self::OptionRequired => write!(f, "Please select an option"),
            Self::InputMismatch { expected } => {
                write!(f, "This question expects a {expected} answer")
            }
            Self::UnknownOption(label) => write!(f, "'{label}' is not one of the options"),
            Self::DuplicateSelection(label) => write!(f, "'{label}' is selected more than once"),
            Self::DetailRequired { option } => {
                write!(f, "Please fill in the details for '{option}'")
            }
            Self::TooManySelections { max } => {
                write!(f, "You can select up to {max} options")
            }
            Self::IncompleteRanking { required } => {
                write!(f, "Please rank your top {required} choices")
            }
            Self::RankingFull { cap } => write!(f, "You can rank up to {cap} items"),
            Self::StructuralRuleViolation { message } => write!(f, "{message}"),
            Self::BrandNameRequired => write!(f, "Please enter your brand or store name"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email address: {msg}"),
            Self::IndustryRequired => write!(f, "Please enter your industry"),
            Self::UnknownService(s) => write!(f, "Unknown service: {s}"),
            Self::UnknownTrack(s) => write!(f, "Unknown track: {s}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Catalog-authoring errors found by integrity validation.
///
/// These indicate a defective question definition, not bad user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The same id appears on more than one question.
    DuplicateQuestionId(String),
    /// A choice-style question has an empty option list.
    MissingOptions(String),
    /// A text question carries options.
    UnexpectedOptions(String),
    /// A selection cap is set on a non-multi-choice question.
    CapOnNonMultiChoice(String),
    /// A selection cap is zero.
    ZeroSelectionCap(String),
    /// A "not applicable" flag is set on a choice-style question.
    NotApplicableOnChoiceKind(String),
    /// The same option label appears twice on one question.
    DuplicateOptionLabel {
        /// The question id.
        question: String,
        /// The duplicated label.
        label: String,
    },
    /// A ranked question has fewer options than the ranking size.
    TooFewRankedOptions {
        /// The question id.
        question: String,
        /// The number of options present.
        present: usize,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateQuestionId(id) => {
                write!(f, "Question id '{id}' is defined more than once")
            }
            Self::MissingOptions(id) => {
                write!(f, "Question '{id}' requires options but defines none")
            }
            Self::UnexpectedOptions(id) => {
                write!(f, "Text question '{id}' must not define options")
            }
            Self::CapOnNonMultiChoice(id) => {
                write!(
                    f,
                    "Question '{id}' has a selection cap but is not multi-choice"
                )
            }
            Self::ZeroSelectionCap(id) => {
                write!(f, "Question '{id}' has a selection cap of zero")
            }
            Self::NotApplicableOnChoiceKind(id) => {
                write!(
                    f,
                    "Question '{id}' allows 'not applicable' but is not a text question"
                )
            }
            Self::DuplicateOptionLabel { question, label } => {
                write!(f, "Question '{question}' defines option '{label}' twice")
            }
            Self::TooFewRankedOptions { question, present } => {
                write!(f, "Ranked question '{question}' has only {present} options")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

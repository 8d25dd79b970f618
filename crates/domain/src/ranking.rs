// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collect::RawInput;
use crate::error::ValidationError;

/// The number of entries a committed ranking must hold.
pub const RANKING_SIZE: usize = 3;

/// An in-progress ranking built by repeated option toggles.
///
/// The presentation layer keeps one of these while a ranked question is on
/// screen and feeds the result to the collector on commit. Rank equals
/// position: the first toggled option is rank 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    /// The ranked option labels, in selection order.
    entries: Vec<String>,
}

impl Ranking {
    /// Creates an empty ranking.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Re-creates a ranking from previously committed entries.
    ///
    /// Used to pre-fill the widget when the user navigates back to an
    /// already-answered ranked question.
    #[must_use]
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Toggles an option in or out of the ranking.
    ///
    /// Removing an entry shifts every later rank down by one. Adding is
    /// refused once the ranking is full; the existing entries are untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RankingFull` when the option is not yet
    /// ranked and the ranking already holds `RANKING_SIZE` entries.
    pub fn toggle(&mut self, option: &str) -> Result<(), ValidationError> {
        if let Some(index) = self.entries.iter().position(|e| e == option) {
            self.entries.remove(index);
            return Ok(());
        }
        if self.entries.len() >= RANKING_SIZE {
            return Err(ValidationError::RankingFull { cap: RANKING_SIZE });
        }
        self.entries.push(option.to_string());
        Ok(())
    }

    /// Returns the 1-based rank of an option, if it is ranked.
    #[must_use]
    pub fn rank_of(&self, option: &str) -> Option<usize> {
        self.entries.iter().position(|e| e == option).map(|i| i + 1)
    }

    /// Returns the ranked labels in rank order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns whether the ranking holds exactly `RANKING_SIZE` entries.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries.len() == RANKING_SIZE
    }

    /// Converts the ranking into collector input.
    #[must_use]
    pub fn into_input(self) -> RawInput {
        RawInput::Ranking {
            ranked: self.entries,
        }
    }
}

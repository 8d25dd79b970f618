// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during draft persistence operations.
///
/// All of these are non-fatal to the wizard: a failed save or load only
/// costs reload recovery for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// An I/O error occurred while touching the draft slot.
    Io(String),
    /// Snapshot encoding or decoding failed.
    Serialization(String),
    /// The draft slot is unavailable (e.g., a poisoned lock).
    SlotUnavailable(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "Draft I/O error: {msg}"),
            Self::Serialization(msg) => write!(f, "Draft serialization error: {msg}"),
            Self::SlotUnavailable(msg) => write!(f, "Draft slot unavailable: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

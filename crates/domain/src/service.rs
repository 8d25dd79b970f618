// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ValidationError;
use crate::question::Track;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The product the customer chose on the service-selection screen.
///
/// The service determines which question tracks the wizard visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    /// Brand song production: primary track only.
    BrandSong,
    /// Narration production: secondary track only.
    Narration,
    /// Brand song plus narration: primary track, then secondary track.
    Combo,
    /// Curated playlist: no questions, straight to completion.
    Playlist,
}

impl Service {
    /// Returns the tracks this service visits, in order.
    #[must_use]
    pub const fn tracks(&self) -> &'static [Track] {
        match self {
            Self::BrandSong => &[Track::Primary],
            Self::Narration => &[Track::Secondary],
            Self::Combo => &[Track::Primary, Track::Secondary],
            Self::Playlist => &[],
        }
    }

    /// Returns whether this service visits both tracks.
    #[must_use]
    pub const fn is_combo(&self) -> bool {
        matches!(self, Self::Combo)
    }

    /// Converts this service to its identifier string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BrandSong => "brand-song",
            Self::Narration => "narration",
            Self::Combo => "combo",
            Self::Playlist => "playlist",
        }
    }

    /// Returns the customer-facing display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BrandSong => "Brand Song",
            Self::Narration => "Narration",
            Self::Combo => "Brand Song + Narration",
            Self::Playlist => "Playlist",
        }
    }
}

impl FromStr for Service {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brand-song" => Ok(Self::BrandSong),
            "narration" => Ok(Self::Narration),
            "combo" => Ok(Self::Combo),
            "playlist" => Ok(Self::Playlist),
            _ => Err(ValidationError::UnknownService(s.to_string())),
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The wizard's enumerated screens, in forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Greeting screen.
    #[default]
    Intro,
    /// Studio introduction screen.
    BrandIntro,
    /// Brand name / email / industry entry.
    Profile,
    /// Service card selection.
    ServiceSelection,
    /// The survey proper.
    Survey,
    /// Summary and thank-you screen.
    Completion,
}

impl Screen {
    /// Converts this screen to its identifier string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::BrandIntro => "brand-intro",
            Self::Profile => "profile",
            Self::ServiceSelection => "service-selection",
            Self::Survey => "survey",
            Self::Completion => "completion",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

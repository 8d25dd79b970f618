// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Customer profile collected before the survey proper.
///
/// All three fields are free text; values are stored trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// The brand or store name.
    pub brand_name: String,
    /// The contact email address.
    pub email: String,
    /// The customer's industry, in their own words.
    pub industry: String,
}

impl Profile {
    /// Creates a profile from trimmed field values.
    ///
    /// # Arguments
    ///
    /// * `brand_name` - The brand or store name
    /// * `email` - The contact email address
    /// * `industry` - The customer's industry
    #[must_use]
    pub fn new(brand_name: &str, email: &str, industry: &str) -> Self {
        Self {
            brand_name: brand_name.trim().to_string(),
            email: email.trim().to_string(),
            industry: industry.trim().to_string(),
        }
    }

    /// Returns whether any field holds a non-empty value.
    #[must_use]
    pub fn has_any_field(&self) -> bool {
        !self.brand_name.is_empty() || !self.email.is_empty() || !self.industry.is_empty()
    }
}

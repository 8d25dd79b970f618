// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ssok_survey_domain::{RawInput, Service};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes; the presentation
/// layer translates clicks and key presses into commands and hands them to
/// [`crate::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move forward from a purely informational screen (intro, brand intro).
    Advance,
    /// Submit the profile fields and move to service selection.
    SubmitProfile {
        /// The brand or store name.
        brand_name: String,
        /// The contact email address.
        email: String,
        /// The customer's industry, in their own words.
        industry: String,
    },
    /// Choose a service card.
    ///
    /// Choosing a different service than the one already selected while
    /// progress exists does not switch; it emits a
    /// `ServiceChangeRequested` event instead.
    SelectService {
        /// The chosen service.
        service: Service,
    },
    /// Confirm a pending service change: discard the survey answers and
    /// cursor, keep the profile, and restart into the new service.
    ConfirmServiceChange {
        /// The service to switch to.
        service: Service,
    },
    /// Submit the answer input for the question currently on screen.
    SubmitAnswer {
        /// The raw input reported by the presentation layer.
        input: RawInput,
    },
    /// Navigate one step back.
    GoBack,
    /// Reset the wizard to a fresh intro screen.
    Restart,
}

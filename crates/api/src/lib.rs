// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod payload;
mod session;
mod submit;

#[cfg(test)]
mod tests;

pub use error::{ApiError, SubmissionError};
pub use payload::SubmissionPayload;
pub use session::WizardSession;
pub use submit::{DEFAULT_ENDPOINT, HttpTransport, SubmissionTransport, submit};

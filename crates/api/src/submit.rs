// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SubmissionError;
use crate::payload::SubmissionPayload;
use tracing::{info, warn};

/// The script endpoint the completed survey is posted to.
pub const DEFAULT_ENDPOINT: &str =
    "https://script.google.com/macros/s/ssoksok-survey-intake/exec";

/// One-way transport for the submission document.
///
/// The backend's response body is never consulted; a post that reaches the
/// wire counts as success.
pub trait SubmissionTransport {
    /// Posts one JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document could not be handed to the network.
    fn post(&self, body: &str) -> Result<(), SubmissionError>;
}

/// The production transport: a blocking HTTP POST to the script endpoint.
///
/// No explicit timeout is set; the call is made once, fire-and-forget, and
/// the caller decides whether to offer a retry.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Creates a transport posting to the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The URL to post submissions to
    #[must_use]
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl SubmissionTransport for HttpTransport {
    fn post(&self, body: &str) -> Result<(), SubmissionError> {
        self.client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .map_err(|err| {
                warn!(error = %err, "Submission post failed");
                SubmissionError::Transport(err.to_string())
            })?;
        Ok(())
    }
}

/// Encodes and posts a submission payload.
///
/// Failure never discards any local state; the same payload can be rebuilt
/// and re-sent safely.
///
/// # Arguments
///
/// * `transport` - The transport to post through
/// * `payload` - The payload to send
///
/// # Errors
///
/// Returns an error if encoding or the post fails.
pub fn submit<T: SubmissionTransport>(
    transport: &T,
    payload: &SubmissionPayload,
) -> Result<(), SubmissionError> {
    let body: String =
        serde_json::to_string(payload).map_err(|err| SubmissionError::Encoding(err.to_string()))?;
    transport.post(&body)?;
    info!(brand = %payload.brand_name, "Survey submitted");
    Ok(())
}

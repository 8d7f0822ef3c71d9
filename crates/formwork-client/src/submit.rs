//! The submission orchestrator: local validation, the JSON POST, and
//! outcome recording.
//!
//! [`FormClient::submit`] drives one full submit-validate-respond cycle
//! against a form shared through a [`FormHandle`]. No error escapes the
//! orchestrator: transport failures, unexpected statuses, and malformed
//! bodies are logged and recorded as a failure outcome, leaving the error
//! mapping untouched so rendering can distinguish "invalid" from "broke".
//!
//! The form's lock is held for the validate/snapshot and record phases only,
//! never across the network await.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::StatusCode;

use formwork_core::error::{FormError, FormResult};
use formwork_core::value::ValueMap;
use formwork_forms::form::SubmitStatus;
use formwork_forms::handle::FormHandle;

use crate::wire::{decode_failure, ServerFailure};

/// How the server answered a submission the protocol assigns a meaning to.
#[derive(Debug)]
enum ServerReply {
    /// Any 2xx status. The body is not parsed.
    Accepted,
    /// HTTP 400 with a decoded failure payload.
    Rejected(ServerFailure),
}

/// What the pre-flight phase decided, computed under the form lock.
enum Gate {
    /// A submit is already in flight; this one is rejected.
    Busy,
    /// Local validation failed; no network call is made.
    Invalid,
    /// Locally valid: carry this value snapshot to the endpoint.
    Ready(ValueMap),
}

/// The HTTP submission client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct FormClient {
    http: reqwest::Client,
}

/// Builder for [`FormClient`].
#[derive(Debug, Default)]
pub struct FormClientBuilder {
    timeout: Option<Duration>,
}

impl FormClientBuilder {
    /// Sets a request timeout. Without one, the underlying network stack's
    /// own defaults apply.
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    pub fn build(self) -> FormResult<FormClient> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| FormError::Configuration(err.to_string()))?;
        Ok(FormClient { http })
    }
}

impl FormClient {
    /// Creates a client with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder for custom configuration.
    pub fn builder() -> FormClientBuilder {
        FormClientBuilder::default()
    }

    /// Runs one submit attempt for the form behind `handle` against the
    /// `action` URL, and returns the form's status afterwards.
    ///
    /// The cycle, in order:
    /// 1. If a submit is already in flight, reject this one without touching
    ///    form state (concurrent submits would otherwise race on the
    ///    outcome; the last response to resolve would win).
    /// 2. Validate all fields. On any error, make no network call and leave
    ///    the outcome as it was; the populated error mapping selects the
    ///    validation banner.
    /// 3. POST the value mapping as JSON. A 2xx records success; a 400
    ///    rebuilds the error mapping from the decoded body and records
    ///    failure; anything else (unexpected status, transport error,
    ///    malformed 400 body) records failure with the error mapping
    ///    untouched.
    pub async fn submit(&self, handle: &FormHandle, action: &str) -> SubmitStatus {
        let gate = handle.with(|form| {
            if form.status() == SubmitStatus::InFlight {
                return Gate::Busy;
            }
            if form.validate_all() {
                return Gate::Invalid;
            }
            form.mark_in_flight();
            Gate::Ready(form.values().clone())
        });

        let values = match gate {
            Gate::Busy => {
                tracing::warn!(action, "submit rejected: another submit is in flight");
                return SubmitStatus::InFlight;
            }
            Gate::Invalid => {
                tracing::debug!(action, "submit stopped by local validation");
                return handle.status();
            }
            Gate::Ready(values) => values,
        };

        tracing::debug!(action, "submitting form");
        let reply = self.perform(action, &values).await;

        handle.with(|form| {
            match reply {
                Ok(ServerReply::Accepted) => form.record_outcome(true),
                Ok(ServerReply::Rejected(failure)) => {
                    form.apply_server_errors(failure.message.clone(), failure.into_fields());
                    form.record_outcome(false);
                }
                Err(err) => {
                    tracing::warn!(action, error = %err, "submit attempt failed");
                    form.record_outcome(false);
                }
            }
            form.status()
        })
    }

    /// Issues the POST and interprets the status line.
    async fn perform(&self, action: &str, values: &ValueMap) -> FormResult<ServerReply> {
        let response = self
            .http
            .post(action)
            .header(ACCEPT, "application/json")
            .json(values)
            .send()
            .await
            .map_err(|err| FormError::Transport(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let body = response
                .text()
                .await
                .map_err(|err| FormError::Transport(err.to_string()))?;
            Ok(ServerReply::Rejected(decode_failure(&body)?))
        } else if status.is_success() {
            Ok(ServerReply::Accepted)
        } else {
            Err(FormError::UnexpectedStatus(status.as_u16()))
        }
    }
}

//! Client for the remote blog generation service.
//!
//! This module provides:
//!
//! - `GenerationClient`: HTTP client wrapper bound to one endpoint
//! - `GenerateError`: detailed failure causes, kept for logging
//!
//! A request is a single multipart POST carrying the fields produced by
//! `BlogRequest::fields`. The response body is returned untouched; it is
//! usually markdown but the client treats it as opaque text.
//!
//! Only HTTP 400 is singled out. Every other failure (other status codes,
//! connection errors, timeouts) is reported as a transport problem.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::multipart::Form;
use thiserror::Error;

use crate::form::BlogRequest;

/// User agent for service requests
const USER_AGENT: &str = concat!("BlogCrafter/", env!("CARGO_PKG_VERSION"));

/// Errors returned by the generation service client
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Service rejected the request (400): {body}")]
    BadRequest { body: String },

    #[error("Service returned {0}")]
    Status(StatusCode),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl GenerateError {
    /// Whether the service flagged the request itself as invalid
    pub fn is_bad_request(&self) -> bool {
        matches!(self, GenerateError::BadRequest { .. })
    }
}

/// Blog generation service client
#[derive(Clone)]
pub struct GenerationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GenerationClient {
    /// Create a client for `endpoint`.
    ///
    /// No timeout is applied unless one is given; the request then runs until
    /// the transport resolves it.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    /// Endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a validated request and return the generated text
    pub async fn generate(&self, request: &BlogRequest) -> Result<String, GenerateError> {
        let start = std::time::Instant::now();

        let form = request
            .fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Generation request rejected: {}", body);
            return Err(GenerateError::BadRequest { body });
        }
        if !status.is_success() {
            return Err(GenerateError::Status(status));
        }

        let text = response.text().await?;
        tracing::info!(
            "Generated {} bytes for {:?} in {:.1}s",
            text.len(),
            request.title,
            start.elapsed().as_secs_f32()
        );
        Ok(text)
    }
}

//! Request lifecycle for the blog form

use eframe::egui;

use crate::clipboard::Clipboard;
use crate::form::FormState;
use crate::service::{GenerateError, GenerationClient};
use crate::state::{RequestError, ResponseState, StateEvent};
use crate::task::{PollResult, RequestTask, poll_task};

/// Submit/response state for one form instance
#[derive(Default)]
pub struct GenerationState {
    /// What the response panel shows
    response: ResponseState,
    /// Whether the current response text has been copied
    copied: bool,
    /// In-flight request, if any
    task: Option<RequestTask<Result<String, GenerateError>>>,
    /// Id of the request whose result may still be applied
    active_request: Option<u64>,
    /// Id handed to the next request
    next_request: u64,
}

impl GenerationState {
    pub fn response(&self) -> &ResponseState {
        &self.response
    }

    /// Check if a request is in flight
    pub fn is_loading(&self) -> bool {
        self.response.is_loading()
    }

    /// Whether the displayed text has been copied to the clipboard
    pub fn copied(&self) -> bool {
        self.copied
    }

    /// Validate the form and start a request.
    ///
    /// Ignored while another request is in flight. A validation failure is
    /// shown in place of the response and never reaches the network.
    pub fn submit(&mut self, form: &FormState, client: &GenerationClient) -> Option<StateEvent> {
        if self.task.is_some() {
            tracing::debug!("Submit ignored, request already in flight");
            return None;
        }

        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                self.response = ResponseState::Error(e.into());
                self.copied = false;
                return Some(StateEvent::StatusMessage(e.to_string()));
            }
        };

        let id = self.next_request;
        self.next_request += 1;
        self.active_request = Some(id);
        self.response = ResponseState::Loading;
        self.copied = false;

        tracing::info!(
            "Request {}: {:?} ({} words, {}, {} keywords) -> {}",
            id,
            request.title,
            request.words,
            request.audience,
            request.keywords.len(),
            client.endpoint()
        );

        let client = client.clone();
        self.task = Some(RequestTask::spawn(id, async move {
            client.generate(&request).await
        }));

        Some(StateEvent::StatusMessage("Generating post...".to_string()))
    }

    /// Poll the in-flight request and apply its result
    pub fn poll(&mut self, ctx: &egui::Context, clipboard: &dyn Clipboard) -> Vec<StateEvent> {
        let mut events = Vec::new();

        match poll_task(&mut self.task) {
            PollResult::Complete(id, _) if self.active_request != Some(id) => {
                tracing::debug!("Discarding stale result for request {}", id);
            }
            PollResult::Complete(id, Ok(Ok(text))) => {
                self.active_request = None;
                clipboard.set_text(&text);
                self.copied = true;
                events.push(StateEvent::LogInfo(format!(
                    "Request {} completed ({} bytes)",
                    id,
                    text.len()
                )));
                events.push(StateEvent::StatusMessage(
                    "Post generated and copied to clipboard".to_string(),
                ));
                self.response = ResponseState::Success(text);
            }
            PollResult::Complete(id, Ok(Err(e))) => {
                self.active_request = None;
                events.push(StateEvent::LogError(format!("Request {} failed: {}", id, e)));
                let err = RequestError::from(&e);
                events.push(StateEvent::StatusMessage(err.to_string()));
                self.response = ResponseState::Error(err);
            }
            PollResult::Complete(id, Err(e)) => {
                self.active_request = None;
                events.push(StateEvent::LogError(format!("Request {} panicked: {}", id, e)));
                self.response = ResponseState::Error(RequestError::Transport);
            }
            PollResult::Pending => ctx.request_repaint(),
            PollResult::NoTask => {}
        }

        events
    }

    /// Copy the displayed post again. Returns false when there is nothing to copy.
    pub fn copy(&mut self, clipboard: &dyn Clipboard) -> bool {
        let Some(text) = self.response.text() else {
            return false;
        };
        clipboard.set_text(text);
        self.copied = true;
        true
    }

    /// Drop any response or error and cancel the in-flight request
    pub fn reset(&mut self) {
        if let Some(task) = self.task.take() {
            tracing::info!("Cancelling request {}", task.id);
            task.abort();
        }
        self.active_request = None;
        self.response = ResponseState::Idle;
        self.copied = false;
    }
}

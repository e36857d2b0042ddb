//! Request task polling
//!
//! The GUI never awaits. A request is spawned on the tokio runtime and the
//! frame loop checks on it once per frame.

use futures::FutureExt;
use tokio::task::JoinHandle;

/// Result of polling a request task
pub enum PollResult<T> {
    /// No request in flight
    NoTask,
    /// Still waiting on the service
    Pending,
    /// Finished; carries the request id and the task outcome (join errors mean a panic)
    Complete(u64, Result<T, tokio::task::JoinError>),
}

/// A spawned request tagged with the id it was issued under
pub struct RequestTask<T> {
    pub id: u64,
    handle: JoinHandle<T>,
}

impl<T: Send + 'static> RequestTask<T> {
    /// Spawn `future` on the current runtime under request `id`
    pub fn spawn<F>(id: u64, future: F) -> Self
    where
        F: std::future::Future<Output = T> + Send + 'static,
    {
        Self {
            id,
            handle: tokio::spawn(future),
        }
    }
}

impl<T> RequestTask<T> {
    /// Stop the request; its result will never be observed
    pub fn abort(self) {
        self.handle.abort();
    }
}

/// Poll an optional request task and take its result if it has finished.
///
/// The slot is emptied only once a result is returned, so each request
/// resolves exactly once. The frame loop runs inside a single poll of the
/// main task and never yields, so tokio's cooperative budget is never
/// refilled there; the join handle is polled unconstrained.
pub fn poll_task<T>(task: &mut Option<RequestTask<T>>) -> PollResult<T> {
    let Some(request) = task else {
        return PollResult::NoTask;
    };

    if !request.handle.is_finished() {
        return PollResult::Pending;
    }

    let id = request.id;
    let polled = tokio::task::unconstrained(&mut request.handle).now_or_never();
    match polled {
        Some(result) => {
            *task = None;
            PollResult::Complete(id, result)
        }
        None => {
            tracing::warn!("Request {} finished but its result is not ready yet", id);
            PollResult::Pending
        }
    }
}

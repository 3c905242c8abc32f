use std::sync::Arc;

use docsim_core::{SearchBackend, SearchError, SearchTicket};
use tokio::sync::mpsc;

use crate::tui_event::BackendEvent;

/// Run one search on its own task and report the outcome.
///
/// Exactly one `SearchFinished` is sent per ticket, even if the backend
/// panics, so the UI's loading flag is always released.
pub async fn run_search(
    backend: Arc<dyn SearchBackend>,
    ticket: SearchTicket,
    tx: mpsc::UnboundedSender<BackendEvent>,
) {
    let generation = ticket.generation;
    let task = tokio::spawn(async move { backend.search(&ticket.file).await });

    let outcome = match task.await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(generation, error = %e, "search task died");
            Err(SearchError::Aborted(e.to_string()))
        }
    };

    let _ = tx.send(BackendEvent::SearchFinished {
        generation,
        outcome,
    });
}

use docsim_core::{ResultItem, SearchError, SearchTicket};

/// Commands sent from the TUI to the backend.
pub enum BackendCommand {
    /// Upload the ticket's file and search.
    Search { ticket: SearchTicket },
}

/// Events flowing from the backend to the TUI.
#[derive(Debug)]
pub enum BackendEvent {
    /// The request for `generation` is over, one way or another.
    SearchFinished {
        generation: u64,
        outcome: Result<Vec<ResultItem>, SearchError>,
    },
}

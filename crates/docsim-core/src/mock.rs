//! Mock search backend for testing.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::backend::{SearchBackend, SearchFuture};
use crate::{ResultItem, SearchError, SearchResponse, SelectedFile};

/// A configurable mock response for [`MockBackend`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Simulate a 2xx with these results.
    Results(Vec<ResultItem>),
    /// Simulate a non-success HTTP status.
    Status(u16),
    /// Simulate a 2xx whose body is not the expected JSON.
    Malformed,
    /// Panic inside the search future.
    Panic,
}

/// A hand-rolled mock implementing [`SearchBackend`] for tests.
///
/// Supports:
/// - A fixed response (used for every call), **or**
/// - A sequence of responses (one per call, repeating the last if exhausted).
/// - Optional per-call latency.
/// - Call counting and capture of the last uploaded file.
pub struct MockBackend {
    responses: Mutex<Vec<MockResponse>>,
    fallback: MockResponse,
    delay: Option<Duration>,
    call_count: AtomicUsize,
    last_file: Mutex<Option<SelectedFile>>,
}

impl MockBackend {
    /// Create a mock that always returns `response`.
    pub fn new(response: MockResponse) -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            fallback: response,
            delay: None,
            call_count: AtomicUsize::new(0),
            last_file: Mutex::new(None),
        }
    }

    /// Create a mock that returns responses in order, repeating the last one.
    pub fn with_sequence(mut responses: Vec<MockResponse>) -> Self {
        assert!(
            !responses.is_empty(),
            "sequence must have at least one response"
        );
        // Reverse so pop() yields them in order; the first element is now the last one given.
        responses.reverse();
        let fallback = responses[0].clone();
        Self {
            responses: Mutex::new(responses),
            fallback,
            delay: None,
            call_count: AtomicUsize::new(0),
            last_file: Mutex::new(None),
        }
    }

    /// Set simulated network latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// How many times `search()` has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The file passed to the most recent call.
    pub fn last_file(&self) -> Option<SelectedFile> {
        self.last_file
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn next_response(&self) -> MockResponse {
        let mut seq = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        seq.pop().unwrap_or_else(|| self.fallback.clone())
    }
}

impl SearchBackend for MockBackend {
    fn search<'a>(&'a self, file: &'a SelectedFile) -> SearchFuture<'a> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_file.lock().unwrap_or_else(|e| e.into_inner()) = Some(file.clone());
        let response = self.next_response();
        let delay = self.delay;

        Box::pin(async move {
            if let Some(d) = delay {
                tokio::time::sleep(d).await;
            }

            match response {
                MockResponse::Results(results) => Ok(results),
                MockResponse::Status(status) => Err(SearchError::RequestFailed { status }),
                MockResponse::Malformed => serde_json::from_str::<SearchResponse>("<html>")
                    .map(|r| r.results)
                    .map_err(SearchError::from),
                MockResponse::Panic => panic!("mock backend panicked"),
            }
        })
    }
}
